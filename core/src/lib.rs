//! # Greeter core
//!
//! The single use case of the tool: ask for a name, greet it.
//!
//! * **[`greeter`]**: the greeting cycle and its state.
//! * **[`message`]**: the fixed prompt and the message texts.
//! * **[`ports`]**: traits the cycle talks to (dialog, log sink).
//! * **[`log`]** / **[`scripted`]**: adapters for those traits that need no terminal.

pub mod error;
pub mod greeter;
pub mod log;
pub mod message;
pub mod ports;
pub mod scripted;
