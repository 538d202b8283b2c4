//! CLI command implementations.

pub(crate) mod app;
pub(crate) mod connection;
pub(crate) mod info;
pub(crate) mod landscape;

pub(crate) use app::AppArgs;
pub(crate) use info::InfoArgs;
pub(crate) use landscape::LandscapeArgs;
