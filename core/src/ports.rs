//! Contracts the greeting cycle drives.
//!
//! Implementations live in `log`, `scripted` and the CLI's terminal adapter.

use crate::error::DialogError;

/// Blocking, modal interaction with the user.
pub trait Dialog {
    /// Shows `prompt` and waits for one line of input.
    ///
    /// `Ok(None)` means the user dismissed the request.
    fn request_input(&mut self, prompt: &str) -> Result<Option<String>, DialogError>;

    /// Shows `message` and waits until the user acknowledges it.
    fn notify(&mut self, message: &str) -> Result<(), DialogError>;
}

/// Append-only diagnostic channel. Never blocks the cycle.
pub trait DiagnosticLog {
    fn log(&mut self, message: &str);
}
