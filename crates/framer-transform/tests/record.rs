use framer_model::Value;
use framer_transform::record::legacy_record_blob;

#[test]
fn legacy_record_blob_drops_missing_and_aligns() {
    let row = [
        ("Customer Number", Some(Value::text("AB1"))),
        ("Name", Some(Value::text("Smith"))),
        ("Comment", None),
        ("Credit", Some(Value::Flag(true))),
    ];
    insta::assert_snapshot!(
        legacy_record_blob(&row),
        @"<pre><br/>Customer Number      AB1<br/>Name               Smith<br/>Credit              True<br/></pre>"
    );
}

#[test]
fn legacy_record_blob_is_single_line() {
    let row = [
        ("Comments", Some(Value::text("two\r\nlines\u{0b}"))),
        ("Artist", Some(Value::text("\u{10}Homer"))),
    ];
    let blob = legacy_record_blob(&row);
    assert!(blob.starts_with("<pre><br/>"));
    assert!(blob.ends_with("<br/></pre>"));
    assert!(!blob.contains(['\r', '\n', '\u{0b}', '\u{10}']));
    assert!(blob.contains("two<br/><br/>lines"));
}
