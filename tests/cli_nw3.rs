use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn command_nw3_help() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    cmd.arg("nw3").arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Global alignment of three sequences"));

    Ok(())
}

#[test]
fn command_nw3_default() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    let output = cmd
        .arg("nw3")
        .arg("AATTCCGG")
        .arg("AATTCCGG")
        .arg("ATC")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(
        stdout,
        "score\t6\nx\tAATTCCGG\ny\tAATTCCGG\nz\t-AT-C---\n"
    );

    Ok(())
}

#[test]
fn command_nw3_scoring() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    let output = cmd
        .arg("nw3")
        .arg("A")
        .arg("A")
        .arg("A")
        .arg("-m")
        .arg("-10")
        .arg("-n")
        .arg("-10")
        .arg("-g")
        .arg("-1")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    // three single-symbol moves beat one column of matches worth -30
    assert_eq!(stdout, "score\t-4\nx\t--A\ny\tA--\nz\t-A-\n");

    Ok(())
}

#[test]
fn command_nw3_matrix() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    let output = cmd
        .arg("nw3")
        .arg("GAT")
        .arg("GT")
        .arg("AT")
        .arg("--matrix")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with("score\t3\nx\tGAT\ny\tG-T\nz\t-AT\n"));

    let slices: Vec<&str> = stdout.split("\n#z=").skip(1).collect();
    assert_eq!(slices.len(), 3);
    assert!(slices[0].starts_with("0\t-\n\t-\tG\tA\tT\n-\t0*\t-2\t-4\t-6\n"));
    assert!(slices[1].starts_with("1\tA\n"));
    assert!(slices[2].starts_with("2\tT\n"));

    // the terminal cell closes the last slice
    assert!(stdout.ends_with("T\t0\t-2\t-1\t3*\n"));

    Ok(())
}

#[test]
fn command_nw3_json() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    let output = cmd
        .arg("nw3")
        .arg("AC")
        .arg("AC")
        .arg("")
        .arg("--json")
        .output()?;
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(value["score"], 2.0);
    assert_eq!(value["aligned_x"], "AC");
    assert_eq!(value["aligned_y"], "AC");
    assert_eq!(value["aligned_z"], "--");
    assert_eq!(value["lattice"]["shape"], serde_json::json!([1, 3, 3]));

    Ok(())
}

#[test]
fn command_nw3_verbose() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    cmd.arg("--verbose")
        .arg("nw3")
        .arg("A")
        .arg("A")
        .arg("A")
        .assert()
        .success()
        .stderr(predicate::str::contains("three-way alignment"));

    Ok(())
}

#[test]
fn command_nw3_non_ascii() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    let output = cmd.arg("nw3").arg("ÉÖ").arg("É").arg("Ö").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout, "score\t0\nx\tÉÖ\ny\tÉ-\nz\t-Ö\n");

    Ok(())
}

#[test]
fn command_nw3_large_gap() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("bioalg")?;
    let output = cmd
        .arg("nw3")
        .arg("A")
        .arg("C")
        .arg("G")
        .arg("--gap=-1200000000")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.starts_with("score\t-3\n"));

    Ok(())
}
