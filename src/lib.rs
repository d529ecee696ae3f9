//! Smartmark — a personal bookmark manager core with live synchronization.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests.

pub mod auth;
pub mod controllers;
pub mod session;
pub mod store;
pub mod types;
