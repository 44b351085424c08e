use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

/// Development fallback only. Any real deployment must override
/// `session.secret` (SESSION_SECRET) with an externally supplied value.
const DEV_SESSION_SECRET: &str = "dev-session-secret-change-in-production-0123456789abcdef";

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite:todos.db?mode=rwc".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Key material for signing session cookies. At least 32 bytes.
    pub secret: String,
    /// Inactivity window, in days, for "remember me" sessions.
    pub remember_days: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secret: DEV_SESSION_SECRET.into(),
            remember_days: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("database.url", "sqlite:todos.db?mode=rwc")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("session.secret", DEV_SESSION_SECRET)?
            .set_default("session.remember_days", 30)?
            .add_source(
                File::with_name("config.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::default().separator("_"))
            .build()?;

        config.try_deserialize()
    }
}
