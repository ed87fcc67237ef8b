use std::path::PathBuf;

use clap::Parser;

/// SetOps: a minimal desktop shell for the set-operations front-end.
#[derive(Parser, Debug)]
#[command(name = "setops", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "setops=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory holding the bundled front-end assets.
    #[arg(long)]
    pub dist: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["setops"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.dist.is_none());
    }

    #[test]
    fn all_overrides() {
        let args = Args::try_parse_from([
            "setops",
            "--config",
            "/etc/setops.toml",
            "--log-level",
            "setops=debug",
            "--dist",
            "build/web",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/setops.toml")));
        assert_eq!(args.log_level.as_deref(), Some("setops=debug"));
        assert_eq!(args.dist, Some(PathBuf::from("build/web")));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Args::try_parse_from(["setops", "--execute", "ls"]).is_err());
    }
}
