use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tandem-repeats"))
        .args(args)
        .output()
        .expect("run tandem-repeats")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "tandem-repeats failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

#[test]
fn string_flag_prints_json_object() {
    let output = run(&["-s", "GATCGATCGATC"]);
    let value = stdout_json(&output);
    assert_eq!(value["0-GATC"], 3);
}

#[test]
fn file_flag_reads_sequence() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"AAAAAA").expect("write");
    let path = file.path().to_str().expect("utf-8 path").to_owned();

    let value = stdout_json(&run(&["-f", &path]));
    assert_eq!(value, serde_json::json!({ "0-AAA": 2 }));
}

#[test]
fn stdin_with_jsonl_format() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tandem-repeats"))
        .args(["-f", "-", "--format", "jsonl", "--skip-whitespace"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tandem-repeats");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"AAAA\nAA\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert_eq!(stdout, "{\"start\":0,\"pattern\":\"AAA\",\"count\":2}\n");
}

#[test]
fn no_input_is_a_usage_error() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("please specify"), "stderr: {stderr}");
}

#[test]
fn unreadable_file_exits_with_one() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.seq");
    let output = run(&["-f", path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open file"), "stderr: {stderr}");
}

#[test]
fn conflicting_inputs_rejected() {
    let output = run(&["-s", "ACGT", "-f", "seq.txt"]);
    assert_eq!(output.status.code(), Some(2));
}
