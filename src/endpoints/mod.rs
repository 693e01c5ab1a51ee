//! Endpoint profile manipulation.
//!
//! # Responsibilities
//! - Exchange an application's `dev` and `prod` endpoints
//! - Resolve where an application lives on disk for a profile
//!
//! Nothing in this module performs I/O; callers persist the result.

pub mod swap;

pub use swap::{app_path, swap};
