//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / endpoints / nginx / commands
//!     → tracing events (structured fields: app, port, folder, path)
//!     → logging.rs subscriber
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so stdout only carries command output
//! - `RUST_LOG` overrides the CLI log level

pub mod logging;

pub use logging::init_logging;
