//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON/TOML)
//!     → loader.rs (read & deserialize)
//!     → Document (owned by the running command)
//!     → validation.rs (request checks before any mutation)
//!     → command mutates Document
//!     → loader.rs (serialize & replace file)
//! ```
//!
//! # Design Decisions
//! - One load and at most one save per invocation
//! - All fields have defaults so an empty document can be bootstrapped
//! - No locking: two concurrent invocations race and the last save wins

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigStore};
pub use schema::{Document, Endpoint, Profile};
pub use validation::ValidationError;
