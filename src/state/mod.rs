//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state. The
//! catalog transitions are pure; GPUI entities only hold the latest snapshot.

pub mod catalog_state;
pub mod i18n_state;
pub mod visibility;
