use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::Level;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

// RunMode selects how the router is served
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RunMode {
    Local,
    Lambda,
}

impl FromStr for RunMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(RunMode::Local),
            "lambda" => Ok(RunMode::Lambda),
            other => Err(LibraryError::validation(
                format!("unknown run mode {:?}", other).as_str(), Some("BOOKS_RUN_MODE".to_string()))),
        }
    }
}

impl Display for RunMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RunMode::Local => write!(f, "local"),
            RunMode::Lambda => write!(f, "lambda"),
        }
    }
}

// Configuration abstracts config options for the book service
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub run_mode: RunMode,
    pub listen_addr: SocketAddr,
    pub log_level: Level,
    pub store: RepositoryStore,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            run_mode: RunMode::Local,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: Level::INFO,
            store: RepositoryStore::InMemory,
        }
    }

    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let branch_id = lookup("BOOKS_BRANCH").unwrap_or_else(|| "dev".to_string());
        let run_mode = match lookup("BOOKS_RUN_MODE") {
            Some(val) => val.parse::<RunMode>()?,
            None => RunMode::Local,
        };
        let listen_addr = lookup("BOOKS_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr.parse::<SocketAddr>().map_err(|err| LibraryError::validation(
            format!("invalid listen address {:?}: {}", listen_addr, err).as_str(), Some("BOOKS_LISTEN_ADDR".to_string())))?;
        let log_level = match lookup("BOOKS_LOG_LEVEL") {
            Some(val) => val.parse::<Level>().map_err(|_| LibraryError::validation(
                format!("invalid log level {:?}", val).as_str(), Some("BOOKS_LOG_LEVEL".to_string())))?,
            None => Level::INFO,
        };
        let store = match lookup("BOOKS_STORE") {
            Some(val) => val.parse::<RepositoryStore>()?,
            None => RepositoryStore::InMemory,
        };
        Ok(Configuration {
            branch_id,
            run_mode,
            listen_addr,
            log_level,
            store,
        })
    }
}
