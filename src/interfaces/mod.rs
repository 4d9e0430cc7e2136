//! Input adapters.

pub mod json;
