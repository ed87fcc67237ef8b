//! Configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

use crate::schema::ShellConfig;
use setops_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let window = &config.window;
    validate_range(&mut errors, "window.width", window.width, 320, 7680);
    validate_range(&mut errors, "window.height", window.height, 240, 4320);
    validate_range(&mut errors, "window.min_width", window.min_width, 0, window.width);
    validate_range(&mut errors, "window.min_height", window.min_height, 0, window.height);
    validate_non_empty(&mut errors, "window.title", &window.title);

    validate_non_empty(&mut errors, "content.dist_dir", &config.content.dist_dir);
    validate_non_empty(&mut errors, "content.entry", &config.content.entry);
    if config.content.entry.contains("..") {
        errors.push("content.entry must stay inside content.dist_dir".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}
