//! Cloud Foundry integration for cfdiagram.
//!
//! This crate provides read access to the Cloud Controller:
//! - [`CloudController`]: REST API client with UAA password-grant login
//! - [`decode_resources`]: turns raw v2 envelopes into typed records
//! - [`Landscape`]: the typed resource maps of one fetch pass
//! - `MockCloudController` for testing (behind the `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cfd_cloudfoundry::CloudController;
//! use cfd_config::CloudFoundryConfig;
//!
//! let config = CloudFoundryConfig::new("https://api.example.com", "user", "secret");
//! let mut controller = CloudController::new(&config)?;
//! controller.login()?;
//!
//! for space in controller.spaces()?.values() {
//!     println!("{} ({})", space.entity.name, space.guid());
//! }
//! # Ok(())
//! # }
//! ```

// API client
mod client;
pub use client::CloudController;

// Decoders
mod decode;
pub use decode::{decode_resources, find_by_name};

// Resource graph
mod landscape;
pub use landscape::Landscape;

// Types
pub mod types;

// Errors
pub mod error;
pub use error::CloudFoundryError;

// Test support
#[cfg(any(test, feature = "mock"))]
pub mod mock;
