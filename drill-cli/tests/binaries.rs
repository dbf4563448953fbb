extern crate drill;

use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin).args(args).output().expect("launch")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn prime_demo_prints_one_line() {
    for _ in 0..20 {
        let output = run(env!("CARGO_BIN_EXE_prime-demo"), &[]);
        assert!(output.status.success());
        let text = stdout_of(&output);
        assert_eq!(text.lines().count(), 1, "{:?}", text);

        let line = text.trim_end();
        let rest = line.trim_start_matches("The generated number ");
        let (number, verdict) = rest.split_at(rest.find(' ').expect("verdict"));
        let number: i64 = number.parse().expect("number");
        assert!(number >= 1 && number <= 100, "{} out of range", number);
        let expected = if drill::is_prime(number) { " is a prime number." } else { " is not a prime number." };
        assert_eq!(verdict, expected);
    }
}

#[test]
fn drill_fib_prints_requested_terms() {
    let output = run(env!("CARGO_BIN_EXE_drill"), &["fib", "100"]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    assert_eq!(text.lines().count(), 100);
    assert_eq!(text.lines().last(), Some("218922995834555169026"));

    let output = run(env!("CARGO_BIN_EXE_drill"), &["fib", "--json", "5"]);
    assert_eq!(stdout_of(&output), "[0,1,1,2,3]\n");
}

#[test]
fn drill_prime_prints_one_line() {
    let output = run(env!("CARGO_BIN_EXE_drill"), &["prime"]);
    assert!(output.status.success());
    let text = stdout_of(&output);
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("The generated number "));

    let output = run(env!("CARGO_BIN_EXE_drill"), &["prime", "-n", "97"]);
    assert_eq!(stdout_of(&output), "The number 97 is a prime number.\n");
}

#[test]
fn drill_rejects_bad_input() {
    let output = run(env!("CARGO_BIN_EXE_drill"), &["bogus"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = run(env!("CARGO_BIN_EXE_drill"), &["prime", "--min", "9", "--max", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid range [9, 3]"));
}
