mod app_state;
mod bridge;
mod cli;
mod icon;
mod menu;
mod readiness;
mod shell;
#[cfg(test)]
mod testing;
mod window;

use studio_common::RuntimeMode;
use studio_config::schema::LogLevel;
use studio_config::StudioConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Exit code for an unusable configuration.
const EXIT_CONFIG: i32 = 2;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = studio_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Studio crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

/// Load environment variables from `.env` in the working directory.
/// Variables already set in the environment win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Command-line flags win over the file and the environment.
fn apply_cli_overrides(config: &mut StudioConfig, args: &cli::Args) {
    if args.dev {
        config.runtime.mode = RuntimeMode::Development;
    }
    if let Some(port) = args.port {
        config.dev_server.port = port;
    }
}

/// A bare level (`debug`) applies to the shell's own targets; anything else
/// is passed through as a filter directive.
fn log_directive(raw: &str) -> String {
    let raw = raw.trim();
    let lower = raw.to_ascii_lowercase();
    match lower.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => format!("studio={lower}"),
        _ => raw.to_string(),
    }
}

/// `--log-level`, else `RUST_LOG`, else the configured level.
fn env_filter(cli_level: Option<&str>, configured: LogLevel) -> EnvFilter {
    let fallback = || EnvFilter::new(configured.directive());
    match cli_level {
        Some(raw) => EnvFilter::try_new(log_directive(raw)).unwrap_or_else(|_| fallback()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

fn main() {
    // Load .env file before anything else
    load_dotenv();

    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config; an unusable file falls back to defaults
    let (mut config, config_error) = match studio_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = StudioConfig::default();
            studio_config::apply_env_overrides(&mut config);
            (config, Some(e))
        }
    };
    apply_cli_overrides(&mut config, &args);

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), config.logging.level))
        .init();

    tracing::info!("Studio v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Err(e) = studio_config::validation::validate(&config) {
        tracing::error!("Invalid settings after command-line overrides: {e}");
        std::process::exit(EXIT_CONFIG);
    }
    tracing::info!(mode = %config.runtime.mode, "Config loaded");

    // Ensure platform directories exist
    if let Err(e) = studio_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = match app_state::StudioApp::new(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    let code = match event_loop.run_app(&mut app) {
        Ok(()) => app.exit_code(),
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            1
        }
    };
    drop(app);
    tracing::info!(code, "Shutdown complete");
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn bare_levels_target_the_shell() {
        assert_eq!(log_directive("debug"), "studio=debug");
        assert_eq!(log_directive(" TRACE "), "studio=trace");
    }

    #[test]
    fn full_directives_pass_through() {
        assert_eq!(log_directive("studio=trace"), "studio=trace");
        assert_eq!(
            log_directive("studio=debug,wry=warn"),
            "studio=debug,wry=warn"
        );
    }

    #[test]
    fn cli_level_builds_a_filter() {
        let filter = env_filter(Some("debug"), LogLevel::Info);
        assert!(filter.to_string().contains("studio=debug"));
    }

    #[test]
    fn dev_flag_selects_development() {
        let mut config = StudioConfig::default();
        let args = cli::Args::parse_from(["studio", "--dev", "--port", "5173"]);
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.runtime.mode, RuntimeMode::Development);
        assert_eq!(config.dev_server.port, 5173);
    }

    #[test]
    fn no_flags_keep_config() {
        let mut config = StudioConfig::default();
        config.dev_server.port = 4000;
        let args = cli::Args::parse_from(["studio"]);
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.runtime.mode, RuntimeMode::Production);
        assert_eq!(config.dev_server.port, 4000);
    }

    #[test]
    fn cli_port_zero_fails_validation() {
        let mut config = StudioConfig::default();
        let args = cli::Args::parse_from(["studio", "--port", "0"]);
        apply_cli_overrides(&mut config, &args);
        assert!(studio_config::validation::validate(&config).is_err());
    }
}
