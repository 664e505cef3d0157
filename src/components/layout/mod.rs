//! Layout Components
//!
//! Page header and other layout pieces.

pub mod header;
