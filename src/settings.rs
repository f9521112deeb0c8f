/// Environment variable holding an `EnvFilter` directive string,
/// e.g. `CFB_CHECKER_LOG=cfb_api=debug`.
pub const LOG_ENV_VAR: &str = "CFB_CHECKER_LOG";
pub const DEFAULT_LOG_FILTER: &str = "error";

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_owned() }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_log_var(std::env::var(LOG_ENV_VAR).ok())
    }

    fn from_log_var(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_owned()) {
            Some(filter) if !filter.is_empty() => Self { log_filter: filter },
            _ => Self::default(),
        }
    }
}
