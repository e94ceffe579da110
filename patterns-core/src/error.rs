use miette::Diagnostic;
use thiserror::Error;

/// Result type for patterns-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid value '{value}' for argument '--{argument}'")]
    #[diagnostic(code(patterns::invalid_selector))]
    InvalidSelector {
        /// Flag name without the leading dashes.
        argument: String,
        /// The rejected value.
        value: String,
        /// Valid values, in registry order.
        options: Vec<String>,
        #[help]
        help: String,
    },
}

impl Error {
    /// Create an invalid selector error.
    pub fn invalid_selector(
        argument: impl Into<String>,
        value: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        let help = format!("available options: {}", options.join(", "));
        Self::InvalidSelector {
            argument: argument.into(),
            value: value.into(),
            options,
            help,
        }
    }

    /// Valid values for the argument that was rejected.
    pub fn options(&self) -> &[String] {
        match self {
            Self::InvalidSelector { options, .. } => options,
        }
    }
}
