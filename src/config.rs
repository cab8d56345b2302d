#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, OnceLock},
};

use anyhow::{Context, Result};

/// Files larger than this are skipped when loading a submission.
const DEFAULT_MAX_FILE_BYTES: u64 = 512 * 1024;

/// Loading stops after this many files.
const DEFAULT_MAX_FILES: usize = 500;

/// Directories never collected into a submission.
const DEFAULT_IGNORE_DIRS: &str = "node_modules,.git,dist,build,.next,coverage,target";

/// Address the HTTP service binds to.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Runtime configuration shared across the crate.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Largest file, in bytes, collected into a submission.
    max_file_bytes: u64,
    /// Most files collected into a submission.
    max_files:      usize,
    /// Directory names skipped while collecting files.
    ignore_dirs:    Vec<String>,
    /// Address the HTTP service binds to.
    bind_addr:      SocketAddr,
}

impl ConfigState {
    /// Construct a new configuration instance from the environment.
    fn new() -> Result<Self> {
        let bind_addr = std::env::var("GRADEWISE_BIND_ADDR")
            .map(|value| value.trim().to_owned())
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("GRADEWISE_BIND_ADDR `{bind_addr}` is not a socket address"))?;

        let ignore_dirs = std::env::var("GRADEWISE_IGNORE_DIRS")
            .unwrap_or_else(|_| DEFAULT_IGNORE_DIRS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            max_file_bytes: read_env("GRADEWISE_MAX_FILE_BYTES", DEFAULT_MAX_FILE_BYTES),
            max_files: read_env("GRADEWISE_MAX_FILES", DEFAULT_MAX_FILES),
            ignore_dirs,
            bind_addr,
        })
    }

    /// Returns the largest file size collected into a submission.
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    /// Returns the most files collected into a submission.
    pub fn max_files(&self) -> usize {
        self.max_files
    }

    /// Returns the directory names skipped while collecting files.
    pub fn ignore_dirs(&self) -> &[String] {
        &self.ignore_dirs
    }

    /// Returns the address the HTTP service binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Ensure the global configuration has been initialized and return a handle.
pub fn ensure_initialized() -> Result<ConfigHandle> {
    let mut guard = slot().lock().expect("config slot poisoned");
    if let Some(cfg) = guard.as_ref() {
        return Ok(ConfigHandle(Arc::clone(cfg)));
    }

    let cfg = Arc::new(ConfigState::new()?);
    *guard = Some(Arc::clone(&cfg));
    Ok(ConfigHandle(cfg))
}

/// Returns the active configuration, initializing it on demand.
pub fn get() -> Result<ConfigHandle> {
    ensure_initialized()
}

/// Returns the configured maximum file size.
pub fn max_file_bytes() -> Result<u64> {
    Ok(get()?.max_file_bytes())
}

/// Returns the configured maximum file count.
pub fn max_files() -> Result<usize> {
    Ok(get()?.max_files())
}

/// Returns the configured ignored directory names.
pub fn ignore_dirs() -> Result<Vec<String>> {
    Ok(get()?.ignore_dirs().to_vec())
}

/// Returns the configured bind address.
pub fn bind_addr() -> Result<SocketAddr> {
    Ok(get()?.bind_addr())
}

/// Parses an environment variable, falling back to `default` when parsing
/// fails or the variable is missing.
fn read_env<T: std::str::FromStr>(env: &str, default: T) -> T {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}
