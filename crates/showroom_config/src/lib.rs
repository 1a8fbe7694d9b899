use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::{AdminConfig, AppConfig, DatabaseConfig, SchedulingConfig, ServerConfig};

static DOTENV_LOADED: OnceCell<()> = OnceCell::new();

/// Loads `.env` exactly once per process. Safe to call from any crate.
pub fn ensure_dotenv_loaded() {
    DOTENV_LOADED.get_or_init(|| {
        // A missing .env file is fine; real deployments use the environment.
        let _ = dotenv::dotenv();
    });
}

/// Loads the unified application configuration.
///
/// Sources, later ones winning: built-in defaults, `config/default.toml`,
/// `config/{RUN_ENV}.toml`, then `SHOWROOM__*` environment variables
/// (`SHOWROOM__SERVER__PORT=9000` style). The legacy `ADMIN_EMAILS`
/// (comma-separated) and `DATABASE_URL` variables are honored last so
/// existing deployments keep working.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "default".to_string());

    let mut builder = Config::builder()
        .add_source(File::with_name("config/default").required(false));
    if run_env != "default" {
        builder = builder.add_source(File::with_name(&format!("config/{run_env}")).required(false));
    }
    let settings = builder
        .add_source(
            Environment::with_prefix("SHOWROOM")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    if let Ok(raw) = env::var("ADMIN_EMAILS") {
        config.admin.emails = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Ok(url) = env::var("DATABASE_URL") {
        config.database = Some(DatabaseConfig { url });
    }

    config
        .scheduling
        .validate()
        .map_err(ConfigError::Message)?;

    Ok(config)
}
