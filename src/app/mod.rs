//! Application Layer
//!
//! Contains app initialization, window management and global entities.

pub mod application;
pub mod entities;
