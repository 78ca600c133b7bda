//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`detail`] - Flight detail lookup by identifier
//! - [`search`] - Nearby flight search

pub mod common;
pub mod config;
pub mod detail;
pub mod search;
