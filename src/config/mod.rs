mod logging;
mod settings;

pub use logging::{LoggingError, init_logging};
pub use settings::{BootstrapSettings, SettingsError};
