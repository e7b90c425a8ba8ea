use colored::*;
use greeter_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use greeter_core::log::GREETING_TARGET;

use crate::terminal::colors;
use crate::terminal::print::PRINT_TARGET;

pub const LOG_ENV: &str = "GREETER_LOG";

pub struct GreeterFormatter;

impl<S, N> FormatEvent<S, N> for GreeterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Decorative output is written as-is, without a badge.
        if meta.target() == PRINT_TARGET {
            let raw: String = FieldText::grab(event, "raw_msg").unwrap_or_default();
            return writeln!(writer, "{}", raw);
        }

        write!(writer, "{} ", badge(meta.level()))?;

        // Greetings stand out from the rest of the diagnostics.
        if meta.target() == GREETING_TARGET {
            if let Some(greeting) = FieldText::grab(event, "message") {
                return writeln!(writer, "{}", greeting.color(colors::ACCENT));
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn badge(level: &Level) -> ColoredString {
    match *level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

/// Pulls the text of one named field out of an event.
struct FieldText {
    name: &'static str,
    value: Option<String>,
}

impl FieldText {
    fn grab(event: &Event<'_>, name: &'static str) -> Option<String> {
        let mut visitor = FieldText { name, value: None };
        event.record(&mut visitor);
        visitor.value
    }
}

impl Visit for FieldText {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.name {
            self.value = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == self.name {
            self.value = Some(format!("{:?}", value));
        }
    }
}

/// Installs the global subscriber. `GREETER_LOG` overrides the level picked
/// from the command line flags.
pub fn init_logging(cfg: &Config) {
    let filter: EnvFilter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(GreeterFormatter)
        .init();
}
