//! Common utilities for the Birch HTML toolkit.
//!
//! This crate provides shared infrastructure used by all Birch components:
//! - **Warning System** - deduplicated diagnostics for forgiving parse policies

pub mod warning;
