//! `PlantUML` rendering of Cloud Foundry resource graphs.
//!
//! Pure functions from typed resource maps to diagram source:
//! - [`render_landscape`]: all stacks, buildpacks, organizations, spaces and
//!   apps of a platform, optionally with quota definitions
//! - [`render_single_app`]: one v3 app with its space, organization,
//!   buildpacks and stack
//!
//! Nodes are aliased with [`alias`], which strips everything but ASCII
//! alphanumerics and `_` from GUIDs.

mod consts;
mod error;
mod landscape;
mod single_app;
mod writer;

#[cfg(test)]
mod test_support;

pub use error::RenderError;
pub use landscape::{LandscapeOptions, render_landscape};
pub use single_app::render_single_app;
pub use writer::alias;
