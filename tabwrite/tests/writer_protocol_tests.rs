use tabwrite::{OutputFormat, ResultWriter, Row, Value, WriteOptions};
use tempfile::tempdir;

fn csv_matrix() -> Vec<Row> {
    vec![
        vec!["id".into(), "name".into()],
        vec!["int".into(), "char".into()],
        vec!["number".into(), "varchar2".into()],
        vec!["10d".into(), "20s".into()],
        vec!["".into(), "".into()],
        vec!["".into(), "".into()],
        vec![Value::Integer(12), Value::Integer(20)],
    ]
}

#[test]
fn header_truncates_and_body_appends() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("result.csv");
    let matrix = csv_matrix();

    let header = WriteOptions {
        emit_tail: false,
        ..WriteOptions::default()
    };
    let body = WriteOptions {
        emit_header: false,
        emit_tail: true,
        ..WriteOptions::default()
    };

    let batch1: Vec<Row> = vec![vec![Value::Integer(1), "a".into()]];
    let batch2: Vec<Row> = vec![vec![Value::Integer(2), "b".into()]];

    ResultWriter::with_options(OutputFormat::Csv, header.clone())
        .write_batch_to_path(&path, &matrix, &batch1)
        .expect("header call");
    ResultWriter::with_options(OutputFormat::Csv, body)
        .write_batch_to_path(&path, &matrix, &batch2)
        .expect("append call");

    let accumulated = std::fs::read_to_string(&path).expect("read result");
    assert_eq!(accumulated, "id,name\n1,\"a\"\n2,\"b\"\n");

    // a fresh header invocation truncates the previous document
    ResultWriter::with_options(OutputFormat::Csv, header)
        .write_batch_to_path(&path, &matrix, &batch1)
        .expect("restart call");
    let restarted = std::fs::read_to_string(&path).expect("read result");
    assert_eq!(restarted, "id,name\n1,\"a\"\n");
}

#[test]
fn short_descriptor_matrix_fails_and_writes_nothing() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("result.csv");

    let mut matrix = csv_matrix();
    matrix.pop();

    let err = ResultWriter::new(OutputFormat::Csv)
        .write_batch_to_path(&path, &matrix, &[])
        .unwrap_err();
    assert!(err.to_string().contains("6 rows"));
    assert!(!path.exists());
}

#[test]
fn misaligned_row_fails_before_any_bytes_are_written() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("result.csv");

    let rows: Vec<Row> = vec![vec![Value::Integer(1)]];
    let err = ResultWriter::new(OutputFormat::Csv)
        .write_batch_to_path(&path, &csv_matrix(), &rows)
        .unwrap_err();
    assert!(err.to_string().contains("row 0 has 1 cells"));
    assert!(!path.exists());
}

#[test]
fn empty_document_single_call_works_for_every_format() {
    let dir = tempdir().expect("create tempdir");
    let matrix = csv_matrix();

    for format in [
        OutputFormat::Ipac,
        OutputFormat::Votable,
        OutputFormat::Csv,
        OutputFormat::Tsv,
        OutputFormat::Json,
    ] {
        let path = dir
            .path()
            .join(format!("result.{}", format.file_extension()));
        ResultWriter::new(format)
            .write_batch_to_path(&path, &matrix, &[])
            .expect("empty document");
        let output = std::fs::read_to_string(&path).expect("read result");
        assert!(!output.is_empty(), "{} produced no output", format.as_str());
    }
}

#[test]
fn timestamp_db_type_formats_as_text() {
    // declared int, but the raw database type wins for timestamps
    let matrix: Vec<Row> = vec![
        vec!["obs_time".into()],
        vec!["int".into()],
        vec!["timestamp".into()],
        vec!["30s".into()],
        vec!["".into()],
        vec!["".into()],
        vec![Value::Integer(30)],
    ];
    let rows: Vec<Row> = vec![vec!["2020-01-01 00:00:00".into()]];

    let writer = ResultWriter::new(OutputFormat::Csv);
    let mut out = Vec::new();
    writer
        .write_batch_to_writer(&mut out, &matrix, &rows)
        .expect("csv write");
    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "obs_time\n\"2020-01-01 00:00:00\"\n"
    );
}
