mod report;
mod sanitize;

pub use report::write_crash_report;
pub use sanitize::redact_home;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn redact_home_replaces_prefix() {
        let input = "panicked opening /home/ana/Reports/q3.csv";
        let result = redact_home(input, Some(Path::new("/home/ana")));
        assert_eq!(result, "panicked opening ~/Reports/q3.csv");
    }

    #[test]
    fn redact_home_replaces_every_occurrence() {
        let input = "/home/ana/a.csv and /home/ana/b.csv";
        let result = redact_home(input, Some(Path::new("/home/ana")));
        assert_eq!(result, "~/a.csv and ~/b.csv");
    }

    #[test]
    fn redact_home_leaves_other_text() {
        let input = "index out of bounds: the len is 3 but the index is 5";
        assert_eq!(redact_home(input, Some(Path::new("/home/ana"))), input);
        assert_eq!(redact_home(input, None), input);
        assert_eq!(redact_home("", Some(Path::new("/home/ana"))), "");
    }

    #[test]
    fn redact_home_keeps_sibling_directories() {
        let home = Some(Path::new("/home/ana"));
        assert_eq!(redact_home("/home/anabel/x.csv", home), "/home/anabel/x.csv");
        assert_eq!(
            redact_home("/home/anabel/x and /home/ana/y", home),
            "/home/anabel/x and ~/y"
        );
    }

    #[test]
    fn redact_home_at_end_of_text() {
        let input = "cwd was /home/ana";
        assert_eq!(redact_home(input, Some(Path::new("/home/ana"))), "cwd was ~");
    }

    #[test]
    fn redact_home_windows_separators() {
        let input = r"C:\Users\ana\data.csv";
        let result = redact_home(input, Some(Path::new(r"C:\Users\ana")));
        assert_eq!(result, r"~\data.csv");
    }

    #[test]
    fn redact_home_ignores_root_home() {
        // A home of "/" would otherwise mangle every absolute path
        let input = "/tmp/x";
        assert_eq!(redact_home(input, Some(Path::new("/"))), input);
    }
}
