//! Core types for the patterns demos.
//!
//! This crate provides the Bridge device/controller abstraction, the Adapter
//! workers and the selector registries the command line uses to pick them.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod adapter;
pub mod bridge;
mod console;
mod error;
mod selector;

pub use console::{Console, Transcript};
pub use error::{Error, Result};
pub use selector::Selector;
