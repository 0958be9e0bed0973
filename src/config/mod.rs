use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "capx.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub auth: Auth,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Auth {
    pub token_valid_for: Duration,
    /// Random if missing, so tokens do not survive a restart.
    pub secret: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            auth,
        } = from;
        let defaults = raw::Config::try_default()?;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db
            .or(defaults.db)
            .ok_or_else(|| anyhow!("Missing DB configuration"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver
            .or(defaults.webserver)
            .ok_or_else(|| anyhow!("Missing webserver configuration"))?;
        let webserver = WebServer { enable_cors: cors };

        let raw::Auth {
            token_valid_for,
            secret,
        } = auth
            .or(defaults.auth)
            .ok_or_else(|| anyhow!("Missing auth configuration"))?;
        if secret.as_deref().is_some_and(str::is_empty) {
            return Err(anyhow!("The token secret must not be empty"));
        }
        let auth = Auth {
            token_valid_for,
            secret,
        };

        Ok(Self {
            db,
            webserver,
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let cfg = Config::try_load_from_file_or_default(file).unwrap();
        assert_eq!(10, cfg.db.conn_pool_size);
        assert!(!cfg.webserver.enable_cors);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let raw: raw::Config = toml::from_str("[webserver]\ncors = true").unwrap();
        let cfg = Config::try_from(raw).unwrap();
        assert!(cfg.webserver.enable_cors);
        assert_eq!("capx.db", cfg.db.conn_sqlite);
        assert_eq!(Duration::from_secs(24 * 60 * 60), cfg.auth.token_valid_for);
    }

    #[test]
    fn reject_empty_secret() {
        let raw: raw::Config =
            toml::from_str("[auth]\ntoken-valid-for = \"1h\"\nsecret = \"\"").unwrap();
        assert!(Config::try_from(raw).is_err());
    }
}
