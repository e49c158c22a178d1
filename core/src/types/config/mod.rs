mod app;

pub use app::{
    AppConfig, ConfigError, DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_RESULTS, InterfaceSettings,
    SearchSettings,
};
