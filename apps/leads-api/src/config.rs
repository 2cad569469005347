//! Environment configuration.

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Network listen port.
    pub port: u16,

    /// SQLite connection string.
    pub database_url: String,

    /// Office address that receives new-lead notifications.
    pub notify_to: String,

    /// Verified sender address for notifications.
    pub notify_from: String,
}

impl Config {
    /// Load from environment variables, with local-dev defaults.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3002),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:leads.db?mode=rwc".to_string()),
            notify_to: std::env::var("NOTIFY_TO")
                .unwrap_or_else(|_| "office@summitridgeroofing.com".to_string()),
            notify_from: std::env::var("NOTIFY_FROM").unwrap_or_else(|_| {
                "Summit Ridge Roofing <leads@summitridgeroofing.com>".to_string()
            }),
        }
    }
}
