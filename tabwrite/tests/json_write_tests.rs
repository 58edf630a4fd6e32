use tabwrite::{OutputFormat, ResultWriter, Row, Value, WriteOptions};

fn spec_matrix() -> Vec<Row> {
    vec![
        vec!["ra".into(), "name".into()],
        vec!["double".into(), "char".into()],
        vec!["binary_double".into(), "varchar2".into()],
        vec!["12.6f".into(), "20s".into()],
        vec!["".into(), "".into()],
        vec!["".into(), "".into()],
        vec![Value::Integer(14), Value::Integer(20)],
    ]
}

fn render(rows: &[Row], options: WriteOptions) -> String {
    let writer = ResultWriter::with_options(OutputFormat::Json, options);
    let mut out = Vec::new();
    writer
        .write_batch_to_writer(&mut out, &spec_matrix(), rows)
        .expect("json write");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn end_to_end_single_call() {
    let rows: Vec<Row> = vec![vec![Value::Real(10.123456), "Obj A".into()]];
    let output = render(&rows, WriteOptions::default());
    assert_eq!(output, "[\n{\"ra\": 10.123456,\n\"name\": \"Obj A\"}\n]\n");
}

#[test]
fn zero_row_document_is_an_empty_array() {
    let output = render(&[], WriteOptions::default());
    assert_eq!(output, "[\n]\n");
    let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn null_cells_use_the_null_literal() {
    let rows: Vec<Row> = vec![vec![Value::Null, Value::Null]];
    let output = render(&rows, WriteOptions::default());
    assert_eq!(output, "[\n{\"ra\": null,\n\"name\": null}\n]\n");
}

#[test]
fn escaped_text_round_trips() {
    let original = "say \"hi\"\\\nbye\tnow";
    let rows: Vec<Row> = vec![vec![Value::Real(1.0), original.into()]];
    let output = render(&rows, WriteOptions::default());

    let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(parsed[0]["name"].as_str().expect("name field"), original);
}

#[test]
fn incremental_batches_form_one_array() {
    let header = WriteOptions {
        emit_tail: false,
        ..WriteOptions::default()
    };
    // JSON separators require the tail flag on the invocation carrying the
    // final row, so the last batch closes the array itself.
    let tail = WriteOptions {
        emit_header: false,
        emit_tail: true,
        ..WriteOptions::default()
    };

    let batch1: Vec<Row> = vec![
        vec![Value::Real(1.0), "a".into()],
        vec![Value::Real(2.0), "b".into()],
    ];
    let batch2: Vec<Row> = vec![vec![Value::Real(3.0), "c".into()]];

    let mut document = String::new();
    document.push_str(&render(&batch1, header));
    document.push_str(&render(&batch2, tail));

    let parsed: serde_json::Value = serde_json::from_str(&document).expect("valid JSON");
    let array = parsed.as_array().expect("array document");
    assert_eq!(array.len(), 3);
    assert_eq!(array[2]["name"], serde_json::json!("c"));
}

#[test]
fn integer_columns_ignore_their_directive() {
    let matrix: Vec<Row> = vec![
        vec!["id".into()],
        vec!["long".into()],
        vec!["number".into()],
        vec!["10d".into()],
        vec!["".into()],
        vec!["".into()],
        vec![Value::Integer(12)],
    ];
    let rows: Vec<Row> = vec![vec![Value::Integer(42)]];

    let writer = ResultWriter::new(OutputFormat::Json);
    let mut out = Vec::new();
    writer
        .write_batch_to_writer(&mut out, &matrix, &rows)
        .expect("json write");
    assert_eq!(
        String::from_utf8(out).expect("utf-8 output"),
        "[\n{\"id\": 42}\n]\n"
    );
}
