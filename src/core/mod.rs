//! Core components of the `courtside-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`CsClient`] and its builder.
//! - The primary [`CsError`] type.
//! - The stats API envelope and its typed header projection.
//! - The source traits that let profile and game-log lookups switch between
//!   the stats API and HTML pages.

/// The main client (`CsClient`), builder, and configuration.
pub mod client;
/// The primary error type (`CsError`) for the crate.
pub mod error;
/// Source traits for the dual API/markup strategies.
pub mod services;
pub(crate) mod html;
pub(crate) mod wire;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::CsClient`
pub use client::{CsClient, CsClientBuilder, SourcePreference};
pub use error::CsError;
pub use services::{GameLogSource, ProfileSource, SourceFuture};
