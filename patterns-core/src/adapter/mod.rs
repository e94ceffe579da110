//! Adapter demo: making an incompatible interface usable as a [`Target`].

use tracing::debug;

use crate::Selector;

/// Flag name of the adapter demo.
pub const ARGUMENT: &str = "adapter";

/// The interface clients expect.
pub trait Target {
    fn request(&self) -> String;
}

/// A plain [`Target`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTarget;

impl Target for DefaultTarget {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

/// Useful behavior behind an interface clients cannot use directly: its
/// answer comes back reversed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

/// Exposes an [`Adaptee`] as a [`Target`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let raw = self.adaptee.specific_request();
        let translated: String = raw.chars().rev().collect();
        debug!(%raw, %translated, "translated adaptee response");
        format!("Adapter: (TRANSLATED) {}", translated)
    }
}

/// Workers selectable with `--adapter`.
pub fn workers() -> Selector<Box<dyn Target>> {
    Selector::new(ARGUMENT)
        .option("target", default_target)
        .option("adaptee", adapted)
}

fn default_target() -> Box<dyn Target> {
    Box::new(DefaultTarget)
}

fn adapted() -> Box<dyn Target> {
    Box::new(Adapter::new(Adaptee))
}
