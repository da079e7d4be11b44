use linecalc::session::{MAX_LINE_LEN, Session};

/// Runs a session over an in-memory transcript and returns the output lines.
fn run_session(input: &str) -> Vec<String> {
    let mut output = Vec::new();
    Session::new(input.as_bytes(), &mut output).run()
                                               .expect("in-memory session failed");

    String::from_utf8(output).expect("session wrote invalid UTF-8")
                             .lines()
                             .map(str::to_string)
                             .collect()
}

/// Output lines after the two-line greeting banner.
fn replies(input: &str) -> Vec<String> {
    run_session(input).split_off(2)
}

#[test]
fn greets_before_reading_input() {
    let lines = run_session("");
    assert_eq!(lines[0], "Hello! I'm a simple calculator.");
    assert!(lines[1].contains("'exit'"));
    assert_eq!(lines.len(), 2);
}

#[test]
fn echoes_the_expression_before_the_result() {
    assert_eq!(replies("1 + 2\n"), vec!["1 + 2 3"]);
    assert_eq!(replies("2+3*4\n"), vec!["2+3*4 14"]);
}

#[test]
fn reports_diagnostics_without_ending_the_session() {
    let lines = replies("1+a\n5/0\n(1+2\n2*3\n");
    assert_eq!(lines,
               vec!["1+a invalid input",
                    "5/0 division by zero",
                    "(1+2 invalid input",
                    "2*3 6"]);
}

#[test]
fn exit_ends_the_session_without_evaluation() {
    let lines = replies("1+1\nexit\n9+9\n");
    assert_eq!(lines, vec!["1+1 2", "Quitting..."]);
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(replies("\n\n4*4\n\n"), vec!["4*4 16"]);
}

#[test]
fn crlf_terminators_are_handled() {
    assert_eq!(replies("1+2\r\nexit\r\n"), vec!["1+2 3", "Quitting..."]);
}

#[test]
fn long_lines_are_truncated_to_the_buffer_size() {
    // 31 characters evaluate to 16; everything past the limit is dropped.
    let full = "1+1+1+1+1+1+1+1+1+1+1+1+1+1+1+1";
    assert_eq!(full.len(), MAX_LINE_LEN);

    let overlong = format!("{full}+9\n");
    assert_eq!(replies(&overlong), vec![format!("{full} 16")]);
}

#[test]
fn results_do_not_leak_between_lines() {
    let lines = replies("5\n5\n7/0\n5\n");
    assert_eq!(lines, vec!["5 5", "5 5", "7/0 division by zero", "5 5"]);
}
