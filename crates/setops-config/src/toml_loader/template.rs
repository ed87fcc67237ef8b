//! Documented default config file written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# SetOps Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "SetOps"
# width = 1200            # 320-7680
# height = 800            # 240-4320
# min_width = 640
# min_height = 480
# quit_on_last_close = true   # false keeps the process alive with no window
# devtools = false

[content]
# dist_dir = "dist"       # relative to the working directory
# entry = "index.html"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
}
