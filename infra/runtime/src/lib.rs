//! # Runtime
//!
//! Standardized [Tokio](https://tokio.rs) runtime profiles for the workspace binaries.
//!
//! ## Profiles
//! * **Interactive**: A current-thread runtime. The shell issues a handful of HTTP
//!   requests per invocation, so one thread is plenty and starts fastest.
//! * **Multi-thread**: A work-stealing runtime for long-running sessions (interactive
//!   search, dashboards refreshing several collections at once).
//!
//! ## Example
//!
//! ```rust,ignore
//! #[gymhub_runtime::main(interactive)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use gymhub_derive::main;

use anyhow::anyhow;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// Fallback worker count when parallelism cannot be detected.
const DEFAULT_WORKER_THREADS: usize = 2;
/// Upper bound for worker threads; a REST client never needs more.
const MAX_WORKER_THREADS: usize = 64;
const DEFAULT_THREAD_NAME: &str = "gymhub-worker";

/// Scheduler flavor of a [`RuntimeProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    CurrentThread,
    MultiThread { worker_threads: usize },
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeProfile {
    pub flavor: Flavor,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self::multi_thread()
    }
}

impl RuntimeProfile {
    /// Single-threaded preset for short CLI commands.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(10),
        }
    }

    /// Multi-threaded preset sized from `TOKIO_WORKER_THREADS` or the available cores.
    #[must_use]
    pub fn multi_thread() -> Self {
        Self {
            flavor: Flavor::MultiThread { worker_threads: detect_worker_threads() },
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.flavor = Flavor::MultiThread { worker_threads: threads.clamp(1, MAX_WORKER_THREADS) };
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name =
            if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }
}

fn detect_worker_threads() -> usize {
    std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or_else(|| {
            available_parallelism().map(std::num::NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
        })
        .min(MAX_WORKER_THREADS)
}

/// Builds a Tokio runtime with all drivers (I/O, time) enabled.
///
/// # Errors
///
/// Returns an error if the OS refuses to create the runtime threads.
pub fn build_runtime(profile: &RuntimeProfile) -> Result<Runtime> {
    debug!(profile = ?profile, "Building tokio runtime");

    let mut builder = match profile.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread { worker_threads } => {
            let mut b = Builder::new_multi_thread();
            b.worker_threads(worker_threads.clamp(1, MAX_WORKER_THREADS));
            b
        },
    };

    builder
        .thread_name(&profile.thread_name)
        .thread_keep_alive(profile.thread_keep_alive)
        .enable_all()
        .build()
        .map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
