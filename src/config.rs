use std::path::PathBuf;

use clap::Parser;

/// Browse the host and a running container side by side and copy between them.
#[derive(Debug, Parser)]
#[command(name = "confex", version, about)]
pub struct Config {
    /// Host directory to start in (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub start_dir: Option<PathBuf>,

    /// Open this container in the right pane on start
    #[arg(short, long, value_name = "NAME")]
    pub container: Option<String>,

    /// Container CLI used for exec, cp and ps
    #[arg(long, value_name = "BIN", env = "CONFEX_DOCKER", default_value = "docker")]
    pub docker: String,

    /// Show dot-files
    #[arg(short, long)]
    pub all: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log file (defaults to $XDG_STATE_HOME/confex/confex.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["confex"]).unwrap();
        assert!(config.start_dir.is_none());
        assert!(config.container.is_none());
        assert!(!config.all);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_all_options() {
        let config = Config::try_parse_from([
            "confex", "/srv", "-c", "web", "--docker", "podman", "-a", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(config.start_dir, Some(PathBuf::from("/srv")));
        assert_eq!(config.container.as_deref(), Some("web"));
        assert_eq!(config.docker, "podman");
        assert!(config.all);
        assert_eq!(config.log_level, "debug");
    }
}
