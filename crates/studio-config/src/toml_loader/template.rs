//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Video Studio shell configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
# name = "Video Studio"
# homepage = "https://github.com/your-repo/video-starter-kit"

[runtime]
# mode = "production"     # production, development (STUDIO_ENV overrides)

[window]
# title = "Video Studio"
# width = 1400
# height = 900
# min_width = 1200        # 200-10000
# min_height = 800        # 200-10000

[dev_server]
# host = "localhost"
# port = 3000             # PORT overrides
# max_attempts = 60       # 1-10000
# interval_ms = 500       # 10-60000

[content]
# packaged_dir = "build"
# entry = "index.html"
# icon = "build/icon.png"

[lifecycle]
# keep_alive_without_windows = true   # unset: platform default

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
}
