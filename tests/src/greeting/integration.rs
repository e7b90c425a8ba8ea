#![cfg(test)]
use std::io;

use greeter_core::error::GreeterError;
use greeter_core::greeter::{Greeter, Outcome, State};
use greeter_core::message::{NO_NAME, PROMPT};
use greeter_core::scripted::{RecordingLog, Response, ScriptedDialog};

fn run_once(response: Response) -> (Result<Outcome, GreeterError>, ScriptedDialog, RecordingLog) {
    let mut greeter = Greeter::new(ScriptedDialog::new([response]), RecordingLog::default());
    let result = greeter.run();
    let (dialog, log) = greeter.into_parts();
    (result, dialog, log)
}

/// Scenario A: a name is greeted in the log and in the acknowledgment.
#[test]
fn greeting_for_given_name() {
    let (result, dialog, log) = run_once(Response::answer("Ada"));

    assert_eq!(result.unwrap(), Outcome::Greeted("Hello, Ada! 👋".to_string()));
    assert_eq!(log.entries(), ["Hello, Ada! 👋"]);
    assert_eq!(dialog.shown(), ["Hello, Ada! 👋"]);
    assert_eq!(dialog.prompts(), [PROMPT]);
}

/// Scenario B: an empty answer only shows the fallback.
#[test]
fn fallback_for_empty_answer() {
    let (result, dialog, log) = run_once(Response::answer(""));

    assert_eq!(result.unwrap(), Outcome::NoName);
    assert!(log.entries().is_empty(), "fallback must not be logged");
    assert_eq!(dialog.shown(), [NO_NAME]);
}

/// Scenario C: a dismissed prompt behaves exactly like an empty answer.
#[test]
fn fallback_for_dismissed_prompt() {
    let (result, dialog, log) = run_once(Response::Dismiss);

    assert_eq!(result.unwrap(), Outcome::NoName);
    assert!(log.entries().is_empty());
    assert_eq!(dialog.shown(), ["You didn't enter a name."]);
}

#[test]
fn every_name_gets_exactly_one_matching_acknowledgment() {
    let names = ["Ada", "Grace Hopper", " ", "名前", "O'Brien", "{name}", "a\tb"];

    for name in names {
        let (result, dialog, log) = run_once(Response::answer(name));
        let expected: String = format!("Hello, {name}! 👋");

        assert_eq!(result.unwrap().message(), expected);
        assert_eq!(log.entries(), [expected.as_str()], "log for {name:?}");
        assert_eq!(dialog.shown(), [expected.as_str()], "dialog for {name:?}");
        assert!(!dialog.shown().iter().any(|m| m == NO_NAME));
    }
}

#[test]
fn input_failure_propagates_without_output() {
    let (result, dialog, log) = run_once(Response::Fail(io::ErrorKind::BrokenPipe));

    assert!(matches!(result, Err(GreeterError::Dialog(_))));
    assert!(dialog.shown().is_empty());
    assert!(log.entries().is_empty());
}

#[test]
fn notify_failure_propagates_after_logging() {
    let dialog = ScriptedDialog::new([Response::answer("Ada")])
        .failing_notify(io::ErrorKind::BrokenPipe);
    let mut greeter = Greeter::new(dialog, RecordingLog::default());

    assert!(matches!(greeter.run(), Err(GreeterError::Dialog(_))));
    assert_eq!(greeter.state(), State::Done);
    assert_eq!(greeter.log().entries(), ["Hello, Ada! 👋"]);
    assert!(greeter.dialog().shown().is_empty());
}

#[test]
fn greeter_is_single_use() {
    let responses = [Response::Dismiss, Response::answer("Ada")];
    let mut greeter = Greeter::new(ScriptedDialog::new(responses), RecordingLog::default());

    assert_eq!(greeter.run().unwrap(), Outcome::NoName);
    assert!(matches!(greeter.run(), Err(GreeterError::AlreadyDone)));

    let (dialog, log) = greeter.into_parts();
    assert_eq!(dialog.prompts().len(), 1);
    assert_eq!(dialog.shown(), [NO_NAME]);
    assert!(log.entries().is_empty());
}
