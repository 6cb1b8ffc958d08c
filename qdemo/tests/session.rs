use std::io::Cursor;
use std::time::Duration;

use qdemo::session::{COMMAND_PROMPT, HEAD_PROMPT};
use qdemo::{Exit, Session, SessionConfig};

fn fast() -> SessionConfig {
    SessionConfig {
        pause: Duration::ZERO,
        ..SessionConfig::default()
    }
}

fn transcript(input: &str, config: SessionConfig) -> (Exit, String) {
    let mut session = Session::new(Cursor::new(input), Vec::new(), config);
    let exit = session.run().unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();
    (exit, out)
}

fn final_queue(out: &str) -> &str {
    let at = out.rfind("\nFinal queue:\n").expect("final queue printed");
    &out[at..]
}

#[test]
fn walkthrough_from_head_five() {
    let input = "5\ninsert 10\ninsert 15\nsearch 10\nremove\nremove\nremove\nquit\n";
    let (exit, out) = transcript(input, fast());

    assert_eq!(exit, Exit::Quit);
    assert!(out.starts_with(HEAD_PROMPT));
    assert!(out.contains("Successfully added 10 to the queue"));
    assert!(out.contains("Successfully added 15 to the queue"));
    assert!(out.contains("10 found at position 1"));
    assert!(out.contains("Successfully removed 5 from queue"));
    assert!(out.contains("Successfully removed 10 from queue"));
    assert!(out.contains(
        "Error: you cannot delete the first element if it is the only element. \
         Try another command or quit and start over"
    ));
    assert!(out.contains("\n\nQuitting...\n"));
    assert_eq!(
        final_queue(&out),
        "\nFinal queue:\n\nValue: 15 at #0.   (Final item)\n"
    );
}

#[test]
fn prompts_before_every_command() {
    let (_, out) = transcript("1 print quit", fast());
    assert_eq!(out.matches(COMMAND_PROMPT).count(), 2);
}

#[test]
fn search_miss() {
    let (_, out) = transcript("1 insert 2 search 3 quit", fast());
    assert!(out.contains("\nNot found\n"));
}

#[test]
fn print_and_illustrate() {
    let (_, out) = transcript("1 insert 2 print illustrate quit", fast());
    assert!(out.contains("Value: 1 at #0.   Next: #1\nValue: 2 at #1.   (Final item)\n"));
    assert!(out.contains("\nValue    |   Next\n1        |   #1\n2        |   NULL\n"));
}

#[test]
fn unknown_command_ends_session_by_default() {
    let (exit, out) = transcript("3 insert 4 dance insert 5", fast());
    assert_eq!(exit, Exit::Unrecognized("dance".to_owned()));
    assert!(out.contains("Not an option, quitting..."));
    assert!(!out.contains("Successfully added 5"));
    assert_eq!(
        final_queue(&out),
        "\nFinal queue:\n\nValue: 3 at #0.   Next: #1\nValue: 4 at #1.   (Final item)\n"
    );
}

#[test]
fn lenient_mode_keeps_going_after_unknown_command() {
    let config = SessionConfig {
        lenient: true,
        ..fast()
    };
    let (exit, out) = transcript("3 dance insert 5 quit", config);
    assert_eq!(exit, Exit::Quit);
    assert!(out.contains("'dance' is not an option."));
    assert!(out.contains("Successfully added 5 to the queue"));
}

#[test]
fn bad_number_aborts_only_that_command() {
    let (exit, out) = transcript("1 insert x insert 2 search y quit", fast());
    assert_eq!(exit, Exit::Quit);
    assert!(out.contains("Error: insert expects an integer value, got 'x'"));
    assert!(out.contains("Error: search expects an integer value, got 'y'"));
    assert!(final_queue(&out).contains("Value: 2 at #1.   (Final item)"));
}

#[test]
fn invalid_utf8_does_not_end_session() {
    let input: &[u8] = b"5\ninsert 7\ninsert \xff\nprint\nquit\n";
    let mut session = Session::new(Cursor::new(input), Vec::new(), fast());
    let exit = session.run().unwrap();
    let out = String::from_utf8_lossy(&session.into_output()).into_owned();

    assert_eq!(exit, Exit::Quit);
    assert!(out.contains("Error: insert expects an integer value"));
    assert_eq!(
        final_queue(&out),
        "\nFinal queue:\n\nValue: 5 at #0.   Next: #1\nValue: 7 at #1.   (Final item)\n"
    );
}

#[test]
fn bad_head_value_is_asked_again() {
    let (exit, out) = transcript("five\n5\nquit\n", fast());
    assert_eq!(exit, Exit::Quit);
    assert_eq!(out.matches(HEAD_PROMPT).count(), 2);
    assert!(out.contains("Error: head expects an integer value, got 'five'"));
    assert!(final_queue(&out).contains("Value: 5 at #0.   (Final item)"));
}

#[test]
fn head_from_config_skips_prompt() {
    let config = SessionConfig {
        head: Some(9),
        ..fast()
    };
    let (exit, out) = transcript("quit", config);
    assert_eq!(exit, Exit::Quit);
    assert!(!out.contains(HEAD_PROMPT));
    assert!(final_queue(&out).contains("Value: 9 at #0.   (Final item)"));
}

#[test]
fn help_topics() {
    let (_, out) = transcript("1 help remove help dance quit", fast());
    assert!(out.contains("The command remove will remove the value at the front of the queue."));
    assert!(out.contains("\n\nThat is not a command.\n"));
}

#[test]
fn end_of_input_prints_final_queue() {
    let (exit, out) = transcript("1\ninsert 2\n", fast());
    assert_eq!(exit, Exit::EndOfInput);
    assert!(final_queue(&out).contains("Value: 2 at #1.   (Final item)"));
}

#[test]
fn end_of_input_before_head() {
    let (exit, out) = transcript("", fast());
    assert_eq!(exit, Exit::NoHead);
    assert!(!out.contains("Final queue"));
}
