use std::path::Path;

/// Replaces the user's home directory with `~`.
///
/// Panic messages may carry paths the user picked in a dialog; the
/// account name embedded in them is not needed to diagnose a crash.
/// Only whole path components match, so a sibling such as
/// `/home/anabel` is left alone when home is `/home/ana`.
pub fn redact_home(input: &str, home: Option<&Path>) -> String {
    let Some(home) = home.and_then(|h| h.to_str()) else {
        return input.to_string();
    };
    let home = home.trim_end_matches(['/', '\\']);
    if home.is_empty() {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find(home) {
        let after = &rest[pos + home.len()..];
        out.push_str(&rest[..pos]);
        if after.is_empty() || after.starts_with(['/', '\\']) {
            out.push('~');
        } else {
            out.push_str(home);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}
