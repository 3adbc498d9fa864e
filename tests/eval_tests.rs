use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_eval_left_to_right() {
    let mut cmd = Command::new(cargo_bin!("tapcalc"));
    cmd.arg("eval").arg("2+3×4");

    cmd.assert().success().stdout("20\n");
}

#[test]
fn test_eval_ascii_operators() {
    let mut cmd = Command::new(cargo_bin!("tapcalc"));
    cmd.arg("eval").arg("10 - 4 / -2");

    cmd.assert().success().stdout("-3\n");
}

#[test]
fn test_eval_division_by_zero() {
    let mut cmd = Command::new(cargo_bin!("tapcalc"));
    cmd.arg("eval").arg("5÷0");

    cmd.assert()
        .success()
        .stdout("Error\n")
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn test_eval_rejects_untokenizable_text() {
    let mut cmd = Command::new(cargo_bin!("tapcalc"));
    cmd.arg("eval").arg("2+abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected character"));
}
