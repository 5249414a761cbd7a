#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Severity of an inline status message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Success => Some("success"),
            Self::Error => Some("error"),
        }
    }
}

/// One inline status message: trimmed text plus severity.
///
/// Every page outcome — validation failure, server rejection, transport
/// failure, success — is rendered through this model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    severity: Severity,
}

impl StatusLine {
    /// The cleared state: no text, rendered hidden.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn info(text: &str) -> Self {
        Self::with_severity(text, Severity::Info)
    }

    pub fn success(text: &str) -> Self {
        Self::with_severity(text, Severity::Success)
    }

    pub fn error(text: &str) -> Self {
        Self::with_severity(text, Severity::Error)
    }

    fn with_severity(text: &str, severity: Severity) -> Self {
        Self {
            text: text.trim().to_owned(),
            severity,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Class list for the rendered element: the base `message` class, the
    /// severity class for non-info messages, and `hidden` when empty.
    pub fn class_attr(&self) -> String {
        let mut class = String::from("message");
        if let Some(extra) = self.severity.css_class() {
            class.push(' ');
            class.push_str(extra);
        }
        if self.is_empty() {
            class.push_str(" hidden");
        }
        class
    }
}
