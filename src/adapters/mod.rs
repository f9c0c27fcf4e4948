//! Adapter implementations for port traits.
//!
//! - `png` — Real PNG encoding via the `image` crate

pub mod png;
