use std::io::Write;

use tandem_repeats::{scan, scan_source, Format, InputSource, ScanError, ScanOptions};

fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[test]
fn file_source_matches_in_memory_scan() {
    let seq = b"TTAGGGTTAGGGTTAGGGCCCAAGAAGAAGC";
    let file = write_temp(seq);
    let src = InputSource::File(file.path().to_path_buf());

    let outcome = scan_source(&src, &ScanOptions::default()).expect("scan file");
    assert_eq!(outcome.report, scan(seq));
    assert_eq!(outcome.bytes_read, seq.len() as u64);
    assert_eq!(outcome.report.get(0, b"TTAGGG"), Some(3));
    assert_eq!(outcome.report.get(21, b"AAG"), Some(3));
}

#[test]
fn large_file_spans_many_chunks() {
    // 200k symbols crosses several 64 KiB read boundaries, including one in
    // the middle of the run.
    let mut seq = Vec::new();
    let filler = b"ACGTTGCA";
    while seq.len() < 65_530 {
        seq.extend_from_slice(b"T");
        seq.extend_from_slice(filler);
    }
    let run_start = seq.len() as u64;
    for _ in 0..5 {
        seq.extend_from_slice(b"GATTACA");
    }
    seq.push(b'C');
    while seq.len() < 200_000 {
        seq.extend_from_slice(b"CGCGATAT");
    }

    let file = write_temp(&seq);
    let src = InputSource::File(file.path().to_path_buf());
    let outcome = scan_source(&src, &ScanOptions::default()).expect("scan file");

    assert_eq!(outcome.symbols_fed, seq.len() as u64);
    assert_eq!(outcome.report.get(run_start, b"GATTACA"), Some(5));
    assert_eq!(outcome.report, scan(&seq));
}

#[test]
fn wrapped_file_with_skip_whitespace() {
    let file = write_temp(b"GATCGA\nTCGATC\n");
    let src = InputSource::File(file.path().to_path_buf());

    let joined = scan_source(
        &src,
        &ScanOptions {
            skip_whitespace: true,
        },
    )
    .expect("scan file");
    assert_eq!(joined.report.get(0, b"GATC"), Some(3));
    assert_eq!(joined.symbols_fed, 12);

    let raw = scan_source(&src, &ScanOptions::default()).expect("scan file");
    assert_eq!(raw.report.get(0, b"GATC"), None);
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let src = InputSource::File(dir.path().join("absent.txt"));
    match scan_source(&src, &ScanOptions::default()) {
        Err(ScanError::Open { path, .. }) => assert!(path.ends_with("absent.txt")),
        other => panic!("expected open error, got {other:?}"),
    }
}

#[test]
fn json_output_round_trips() {
    let report = scan(b"AAGAAGAAGC");
    let mut out = Vec::new();
    report.write_to(Format::Json, &mut out).expect("encode");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    let obj = value.as_object().expect("object");
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["0-AAG"], 3);
    assert_eq!(obj["1-AGA"], 2);
    assert_eq!(obj["2-GAA"], 2);
    assert!(!obj.contains_key("0-AAGAAG"));
}
