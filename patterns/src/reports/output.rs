//! Output trait for rendering reports to different formats.

use patterns_core::Console;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Also serves as the console the demos write their lines to.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("- {}", text);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

impl Console for TerminalOutput {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Output that renders into a string, the way [`TerminalOutput`] would print it.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct StringOutput {
    pub buf: String,
}

#[cfg(test)]
impl Console for StringOutput {
    fn line(&mut self, text: &str) {
        self.buf.push_str(&format!("{}\n", text));
    }
}

#[cfg(test)]
impl Output for StringOutput {
    fn section(&mut self, name: &str) {
        self.buf.push_str(&format!("{}:\n", name));
    }

    fn list_item(&mut self, text: &str) {
        self.buf.push_str(&format!("- {}\n", text));
    }

    fn preformatted(&mut self, text: &str) {
        self.buf.push_str(&format!("{}\n", text));
    }

    fn newline(&mut self) {
        self.buf.push('\n');
    }
}
