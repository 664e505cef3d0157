//! Primitive Components
//!
//! Basic building blocks shared by pages.

pub mod loading_indicator;

pub use loading_indicator::LoadingIndicator;
