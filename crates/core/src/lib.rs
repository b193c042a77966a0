//! Rolodex Core - Shared types library.
//!
//! This crate provides common types used across all Rolodex components:
//! - `api` - REST API service backed by the record store
//! - `ui` - Form/table user interface
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `UserId` newtype and the record/request types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
