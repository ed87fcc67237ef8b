mod app_state;
mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use setops_config::{LogLevel, ShellConfig};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = setops_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- SetOps crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

/// Filter built from `RUST_LOG` plus the given directive.
fn env_filter(directive: &str) -> (EnvFilter, bool) {
    match directive.parse::<Directive>() {
        Ok(d) => (EnvFilter::from_default_env().add_directive(d), true),
        Err(_) => {
            let fallback = LogLevel::Info
                .as_directive()
                .parse::<Directive>()
                .map(|d| EnvFilter::from_default_env().add_directive(d))
                .unwrap_or_else(|_| EnvFilter::from_default_env());
            (fallback, false)
        }
    }
}

/// Load config under a temporary stderr subscriber so loader warnings are
/// visible before the configured subscriber exists.
fn load_config(path: Option<&Path>) -> ShellConfig {
    let (filter, _) = env_filter(LogLevel::Info.as_directive());
    let bootstrap = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::with_default(bootstrap, || {
        if let Some(p) = path {
            tracing::info!("Using config override: {}", p.display());
        }
        setops_config::load_config(path).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            ShellConfig::default()
        })
    })
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();
    let config = load_config(args.config.as_deref());

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    let (filter, directive_ok) = env_filter(&directive);
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if !directive_ok {
        tracing::warn!(directive = %directive, "invalid log directive, using setops=info");
    }

    tracing::info!("SetOps v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = setops_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let dist_dir = args.dist.unwrap_or_else(|| {
        let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        config.content.resolve_dist_dir(&base)
    });

    #[cfg(target_os = "linux")]
    if let Err(e) = app_state::gtk_pump::init() {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    let mut builder = EventLoop::<app_state::AppEvent>::with_user_event();
    // wry can only embed its GTK webview in an X11 window.
    #[cfg(target_os = "linux")]
    {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_x11();
    }
    let event_loop = match builder.build() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::SetOpsApp::new(config, dist_dir);
    app.wake_with(event_loop.create_proxy());

    tracing::info!("Entering event loop");
    let code = match event_loop.run_app(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Shutdown complete");
    code
}
