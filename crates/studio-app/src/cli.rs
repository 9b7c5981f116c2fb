use std::path::PathBuf;

use clap::Parser;

/// Video Studio: native desktop shell for the browser-rendered editor.
#[derive(Parser, Debug)]
#[command(name = "studio", version, about)]
pub struct Args {
    /// Load content from the local development server.
    #[arg(long)]
    pub dev: bool,

    /// Development server port (overrides config and PORT).
    #[arg(long)]
    pub port: Option<u16>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, studio=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_overrides() {
        let args = Args::parse_from(["studio"]);
        assert!(!args.dev);
        assert!(args.port.is_none());
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "studio",
            "--dev",
            "--port",
            "5173",
            "--config",
            "/tmp/studio.toml",
            "--log-level",
            "debug",
        ]);
        assert!(args.dev);
        assert_eq!(args.port, Some(5173));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/studio.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Args::try_parse_from(["studio", "--port", "70000"]).is_err());
    }
}
