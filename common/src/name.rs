use std::fmt;

/// A name captured from the input prompt.
///
/// Only ever holds a non-empty string. An empty answer and a dismissed
/// prompt both collapse to `None` in [`UserName::from_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Turns a raw prompt response into a name, if one was given.
    ///
    /// No trimming or validation: whitespace is a name like any other.
    pub fn from_response(response: Option<String>) -> Option<Self> {
        match response {
            Some(raw) if !raw.is_empty() => Some(Self(raw)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
