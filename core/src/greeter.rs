use greeter_common::name::UserName;
use tracing::debug;

use crate::error::GreeterError;
use crate::message;
use crate::ports::{DiagnosticLog, Dialog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingInput,
    Done,
}

/// What one cycle ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Greeted(String),
    NoName,
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Greeted(msg) => msg,
            Outcome::NoName => message::NO_NAME,
        }
    }
}

/// Runs a single greeting cycle against a dialog and a log sink.
pub struct Greeter<D, L> {
    dialog: D,
    log: L,
    state: State,
}

impl<D: Dialog, L: DiagnosticLog> Greeter<D, L> {
    pub fn new(dialog: D, log: L) -> Self {
        Self {
            dialog,
            log,
            state: State::AwaitingInput,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn into_parts(self) -> (D, L) {
        (self.dialog, self.log)
    }

    /// Asks for a name and shows exactly one message for it.
    ///
    /// A name is logged before it is shown. The fallback is only shown.
    pub fn run(&mut self) -> Result<Outcome, GreeterError> {
        if self.state == State::Done {
            return Err(GreeterError::AlreadyDone);
        }

        let response = self.dialog.request_input(message::PROMPT)?;
        self.state = State::Done;

        let outcome = match UserName::from_response(response) {
            Some(name) => {
                let greeting = message::greeting(&name);
                self.log.log(&greeting);
                Outcome::Greeted(greeting)
            }
            None => {
                debug!("no name given");
                Outcome::NoName
            }
        };

        self.dialog.notify(outcome.message())?;
        Ok(outcome)
    }
}
