//! Catalog Scroll Library
//!
//! Desktop client that lists a remote product catalog as a responsive grid
//! and loads further pages as the user scrolls to the end.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
