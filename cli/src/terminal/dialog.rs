use std::io::{self, BufRead, IsTerminal};

use colored::*;
use console::{Key, Term};
use greeter_common::config::Config;
use greeter_core::error::DialogError;
use greeter_core::ports::Dialog;
use tracing::{debug, trace};
use unicode_width::UnicodeWidthChar;

use crate::terminal::colors;

/// End of transmission, what Ctrl-D delivers when the tty is in raw mode.
const EOT: char = '\u{4}';

/// Prompt and acknowledgment on the controlling terminal.
///
/// With a real terminal on both ends keys are read raw through `console`
/// and the line is edited here, so Ctrl-C, Esc and Ctrl-D on an empty line
/// dismiss the prompt instead of killing the process. Piped input is read
/// line by line from stdin and never blocks on acknowledgment.
pub struct TerminalDialog {
    term: Term,
    interactive: bool,
    wait: bool,
}

impl TerminalDialog {
    pub fn new(cfg: &Config) -> Self {
        let term: Term = Term::stdout();
        let interactive: bool = term.is_term() && io::stdin().is_terminal();
        debug!(interactive, no_wait = cfg.no_wait, "terminal dialog ready");

        Self {
            term,
            interactive,
            wait: interactive && !cfg.no_wait,
        }
    }

    fn read_interactive(&self) -> io::Result<Option<String>> {
        let mut buffer: LineBuffer = LineBuffer::default();

        loop {
            let key: Key = match self.term.read_key_raw() {
                Ok(key) => key,
                Err(e) if is_dismissal(&e) => Key::CtrlC,
                Err(e) => return Err(e),
            };

            match buffer.feed(key) {
                Step::Typed(c) => self.term.write_str(c.encode_utf8(&mut [0; 4]))?,
                Step::Erased(c) => self.term.clear_chars(c.width().unwrap_or(1))?,
                Step::Ignored => {}
                Step::Submitted(line) => {
                    self.term.write_line("")?;
                    return Ok(Some(line));
                }
                Step::Dismissed => {
                    self.term.write_line("")?;
                    return Ok(None);
                }
            }
        }
    }
}

impl Dialog for TerminalDialog {
    fn request_input(&mut self, prompt: &str) -> Result<Option<String>, DialogError> {
        self.term
            .write_str(&format!("{} ", prompt.color(colors::PRIMARY).bold()))?;
        self.term.flush()?;

        let response = if self.interactive {
            self.read_interactive()?
        } else {
            read_piped_line(io::stdin().lock())?
        };

        if response.is_none() {
            trace!("input dismissed");
        }
        Ok(response)
    }

    fn notify(&mut self, message: &str) -> Result<(), DialogError> {
        self.term
            .write_line(&format!("{}", message.color(colors::ACCENT).bold()))?;

        if !self.wait {
            return Ok(());
        }

        self.term
            .write_line(&format!("{}", "press any key to continue".dimmed()))?;
        // Any key acknowledges, Ctrl-C included.
        match self.term.read_key_raw() {
            Ok(_) => {}
            Err(e) if is_dismissal(&e) => {}
            Err(e) => return Err(e.into()),
        }
        self.term.clear_last_lines(1)?;
        Ok(())
    }
}

/// What a single key press did to the line being typed.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Typed(char),
    Erased(char),
    Ignored,
    Submitted(String),
    Dismissed,
}

#[derive(Default)]
struct LineBuffer {
    line: String,
}

impl LineBuffer {
    fn feed(&mut self, key: Key) -> Step {
        match key {
            Key::Enter => Step::Submitted(std::mem::take(&mut self.line)),
            Key::CtrlC | Key::Escape => Step::Dismissed,
            Key::Char(EOT) if self.line.is_empty() => Step::Dismissed,
            Key::Char(c) if !c.is_control() => {
                self.line.push(c);
                Step::Typed(c)
            }
            Key::Backspace => match self.line.pop() {
                Some(c) => Step::Erased(c),
                None => Step::Ignored,
            },
            _ => Step::Ignored,
        }
    }
}

/// Reads one line from a non-interactive source.
///
/// Bytes that are not UTF-8 are replaced rather than rejected, the answer
/// is free text.
fn read_piped_line<R: BufRead>(mut reader: R) -> io::Result<Option<String>> {
    let mut buf: Vec<u8> = Vec::new();
    match reader.read_until(b'\n', &mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(strip_line_ending(
            String::from_utf8_lossy(&buf).into_owned(),
        ))),
        Err(e) if is_dismissal(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Ctrl-C and a closed input count as the user walking away from the dialog.
fn is_dismissal(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
    )
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
