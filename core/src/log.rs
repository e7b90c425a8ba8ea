use tracing::info;

use crate::ports::DiagnosticLog;

pub const GREETING_TARGET: &str = "greeter::greeting";

/// Writes each message as one INFO event.
#[derive(Debug, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn log(&mut self, message: &str) {
        info!(target: GREETING_TARGET, "{}", message);
    }
}
