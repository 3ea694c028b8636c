use std::env;
use std::num::{NonZeroUsize, ParseIntError};

use thiserror::Error;
use tracing::trace;

pub const DEFAULT_ASSETS_ROOT_DIR: &str = "./target/site";
pub const DEFAULT_SERVER_WORKERS: usize = 1;

/// Server settings that come from the environment (and `.env`), the rest is
/// read from the leptos metadata in `Cargo.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub assets_root_dir: String,
    pub workers: NonZeroUsize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            assets_root_dir: DEFAULT_ASSETS_ROOT_DIR.to_string(),
            workers: NonZeroUsize::MIN,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerErr> {
        Self::from_vars(
            env::var("ASSETS_ROOT_DIR").ok(),
            env::var("SERVER_WORKERS").ok(),
        )
    }

    pub fn from_vars(
        assets_root_dir: Option<String>,
        workers: Option<String>,
    ) -> Result<Self, ServerErr> {
        let assets_root_dir = assets_root_dir
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ASSETS_ROOT_DIR.to_string());

        let workers = match workers {
            Some(workers) => {
                let parsed = workers
                    .trim()
                    .parse::<usize>()
                    .map_err(|err| ServerErr::InvalidWorkers(workers.clone(), err))?;
                NonZeroUsize::new(parsed).ok_or(ServerErr::ZeroWorkers)?
            }
            None => NonZeroUsize::new(DEFAULT_SERVER_WORKERS).ok_or(ServerErr::ZeroWorkers)?,
        };

        trace!("config: assets root dir is {}", assets_root_dir);
        trace!("config: using {} worker(s)", workers);

        Ok(Self {
            assets_root_dir,
            workers,
        })
    }

    pub fn pkg_dir(&self) -> String {
        format!("{}/pkg", self.assets_root_dir.trim_end_matches('/'))
    }

    pub fn favicon_path(&self) -> String {
        format!("{}/favicon.ico", self.assets_root_dir.trim_end_matches('/'))
    }
}

#[derive(Error, Debug)]
pub enum ServerErr {
    #[error("SERVER_WORKERS must be a number, got {0:?}: {1}")]
    InvalidWorkers(String, ParseIntError),

    #[error("SERVER_WORKERS must be at least 1")]
    ZeroWorkers,

    #[error("failed to bind {addr}: {err}")]
    Bind {
        addr: std::net::SocketAddr,
        err: std::io::Error,
    },

    #[error("server stopped with error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod config_tests {
    use super::{ServerConfig, ServerErr, DEFAULT_ASSETS_ROOT_DIR};

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.assets_root_dir, DEFAULT_ASSETS_ROOT_DIR);
        assert_eq!(config.workers.get(), 1);
    }

    #[test]
    fn reads_values() {
        let config =
            ServerConfig::from_vars(Some("/srv/site/".to_string()), Some(" 4 ".to_string()))
                .unwrap();
        assert_eq!(config.workers.get(), 4);
        assert_eq!(config.pkg_dir(), "/srv/site/pkg");
        assert_eq!(config.favicon_path(), "/srv/site/favicon.ico");
    }

    #[test]
    fn blank_assets_dir_falls_back() {
        let config = ServerConfig::from_vars(Some("  ".to_string()), None).unwrap();
        assert_eq!(config.assets_root_dir, DEFAULT_ASSETS_ROOT_DIR);
    }

    #[test]
    fn rejects_bad_workers() {
        let err = ServerConfig::from_vars(None, Some("many".to_string())).unwrap_err();
        assert!(matches!(err, ServerErr::InvalidWorkers(value, _) if value == "many"));

        let err = ServerConfig::from_vars(None, Some("0".to_string())).unwrap_err();
        assert!(matches!(err, ServerErr::ZeroWorkers));
    }

    #[test]
    fn io_errors_convert_to_server_err() {
        let err = ServerErr::from(std::io::Error::other("listener closed"));
        assert!(matches!(err, ServerErr::Io(_)));
        assert_eq!(err.to_string(), "server stopped with error: listener closed");
    }
}
