//! Common utilities for the Quokka layout engine.
//!
//! This crate provides shared infrastructure used by the engine crates:
//! - **Warning System** - deduplicated warnings for unsupported input, emitted
//!   through the [`log`] facade so the host decides where they go

pub mod warning;
