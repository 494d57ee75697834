//! Data-driven content and loaders.
//!
//! This crate reads the static inputs of a session from disk:
//! - Item catalog (RON)
//! - World layout: which items are placed where (RON)
//! - Game configuration (TOML)
//!
//! Everything is validated here, before [`game_core::GameEngine`] is built, so
//! a bad data directory fails at startup instead of mid-session.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, LoadResult, WorldLayout, WorldLoader};
