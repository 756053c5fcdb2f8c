//! Spotify artist scope: the invocation boundary around [`artist_search`].
//!
//! A desktop search surface hands this crate a query string per keystroke
//! and gets back a short list of artist records:
//!
//! - **Session**: debounces dispatches and gives every invocation its own
//!   cancellation token, cancelling the one it supersedes
//! - **Config**: TOML file for endpoints, result cap, timeout, debounce
//!   interval and log filter
//! - **Logging**: `tracing` subscriber setup for embedding hosts

pub mod config;
pub mod error;
pub mod logging;
pub mod scope_dirs;
pub mod session;
pub mod throttle;

pub use artist_search::{CancellationToken, SearchResult};
pub use config::ScopeConfig;
pub use error::{Result, ScopeError};
pub use session::{PendingSearch, ScopeSession};
pub use throttle::DispatchThrottle;
