pub mod crash_report;
pub mod external;
pub mod paths;

pub use external::{parse_external_url, ExternalOpener, SystemOpener};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
