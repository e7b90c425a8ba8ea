//! Terminal-free adapters. They replay fixed answers and record what the
//! cycle showed, so the branch logic can run headless.

use std::collections::VecDeque;
use std::io;

use crate::error::DialogError;
use crate::ports::{DiagnosticLog, Dialog};

/// One scripted answer to an input request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Answer(String),
    Dismiss,
    Fail(io::ErrorKind),
}

impl Response {
    pub fn answer(text: impl Into<String>) -> Self {
        Self::Answer(text.into())
    }
}

#[derive(Debug, Default)]
pub struct ScriptedDialog {
    responses: VecDeque<Response>,
    notify_failure: Option<io::ErrorKind>,
    prompts: Vec<String>,
    shown: Vec<String>,
}

impl ScriptedDialog {
    pub fn new(responses: impl IntoIterator<Item = Response>) -> Self {
        Self {
            responses: responses.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Makes every `notify` call fail with `kind` after recording nothing.
    pub fn failing_notify(mut self, kind: io::ErrorKind) -> Self {
        self.notify_failure = Some(kind);
        self
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Messages acknowledged by the "user", in order.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }
}

impl Dialog for ScriptedDialog {
    fn request_input(&mut self, prompt: &str) -> Result<Option<String>, DialogError> {
        self.prompts.push(prompt.to_string());

        // Running out of script behaves like closing the prompt.
        match self.responses.pop_front() {
            Some(Response::Answer(text)) => Ok(Some(text)),
            Some(Response::Dismiss) | None => Ok(None),
            Some(Response::Fail(kind)) => Err(io::Error::new(kind, "scripted input failure").into()),
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), DialogError> {
        if let Some(kind) = self.notify_failure {
            return Err(io::Error::new(kind, "scripted notify failure").into());
        }
        self.shown.push(message.to_string());
        Ok(())
    }
}

/// Keeps every logged message in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: Vec<String>,
}

impl RecordingLog {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl DiagnosticLog for RecordingLog {
    fn log(&mut self, message: &str) {
        self.entries.push(message.to_string());
    }
}
