pub mod settings;

pub use settings::{AppConfig, BackendConfig, ServerConfig, Settings, SettingsError};
