pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, ShellError};
pub use types::{ContentSource, Endpoint, RuntimeMode, EXTERNAL_SCHEMES, PACKAGED_HOST, PACKAGED_SCHEME};

pub type Result<T> = std::result::Result<T, ShellError>;
