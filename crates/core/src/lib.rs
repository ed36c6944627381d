//! pasta-core: Core library for the copy-pasta clipboard
//!
//! This crate provides the core functionality for copy-pasta, including:
//! - Target configuration in ~/.copy-pastarc
//! - The ObjectStoreClient trait for S3 operations
//! - The clipboard store built on top of it
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing with a mocked client.

pub mod config;
pub mod error;
pub mod store;
pub mod target;
pub mod traits;

pub use config::{Config, ConfigManager};
pub use error::{Error, Result};
pub use target::{Target, TargetManager};
pub use traits::ObjectStoreClient;
