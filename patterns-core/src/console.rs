use std::fmt;

/// Line sink for the human-readable output of the demos.
///
/// Every device and controller operation that "says" something writes exactly
/// one line here. The binary prints to stdout, tests record a [`Transcript`].
pub trait Console {
    /// Write one line of output.
    fn line(&mut self, text: &str);
}

/// A console that records every line it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_lines_in_order() {
        let mut transcript = Transcript::new();
        transcript.line("first");
        transcript.line("second");

        assert_eq!(transcript.lines(), ["first", "second"]);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_display_joins_lines() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.to_string(), "");

        transcript.line("a");
        transcript.line("b");
        assert_eq!(transcript.to_string(), "a\nb");
    }
}
