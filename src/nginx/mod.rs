//! Nginx integration.
//!
//! # Data Flow
//! ```text
//! Document
//!     → render.rs (fixed `set $var value;` snippet)
//!     → snippet file (included by the nginx site config)
//!     → reload.rs (`nginx -s reload`)
//! ```

pub mod reload;
pub mod render;

pub use reload::{NginxReloader, ReloadError, ReloadOutput, Reloader};
pub use render::{render, write_snippet, RenderError};
