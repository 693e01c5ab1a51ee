//! Toggle apps between their dev and prod endpoints behind nginx.

pub mod commands;
pub mod config;
pub mod endpoints;
pub mod nginx;
pub mod observability;

pub use commands::CommandError;
pub use config::{ConfigStore, Document, Endpoint, Profile};
pub use nginx::{NginxReloader, Reloader};
