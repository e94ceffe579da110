//! Core operations.
//!
//! This module contains the business logic for the demos,
//! separated from CLI argument parsing and output rendering.

pub mod adapter;
pub mod bridge;
pub mod list;

pub use adapter::adapter;
pub use bridge::bridge;
pub use list::list;
