//! Shared state layer of the samplest editor.
//!
//! Everything here is DOM-free: the frontend crate drives these types from
//! reactive signals, and the unit tests drive them directly.

pub mod domain;
pub mod shared;
