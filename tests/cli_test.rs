use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("tapcalc"));
    cmd.arg("replay").arg("tests/fixtures/taps.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("step,key,older,newer,display"))
        // 12+3=15, then 15×2=30
        .stdout(predicate::str::contains("8,=,12+3=15,15×2=30,30"));

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("tapcalc"));
    cmd.arg("replay").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
