/// Runtime configuration, resolved once from the environment at startup.
#[derive(Clone)]
pub struct Config {
    pub sqlite_path: String,
    pub weather_secs: u64,
    pub drift_secs: u64,
    pub activity_secs: u64,
    pub scroll_debounce_ms: u64,
    pub admin_user: String,
    pub admin_pass: String,
    pub export_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            sqlite_path: std::env::var("FARMDASH_DB")
                .unwrap_or_else(|_| "./farmdash.sqlite".to_string()),
            weather_secs: env_u64("WEATHER_SECS", 300),
            drift_secs: env_u64("DRIFT_SECS", 10),
            activity_secs: env_u64("ACTIVITY_SECS", 30),
            scroll_debounce_ms: env_u64("SCROLL_DEBOUNCE_MS", 10),
            admin_user: std::env::var("ADMIN_USER").unwrap_or_else(|_| "admin".to_string()),
            admin_pass: std::env::var("ADMIN_PASS").unwrap_or_else(|_| "admin123".to_string()),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string()),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub fn now_ts() -> u64 {
    chrono::Utc::now().timestamp() as u64
}
