use std::fs;

use feed_filter_engine::{decode_snapshot, write_atomically, DecodeError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn decode_respects_charset_label() {
    let bytes = b"caf\xe9 \xb7 1.234 vues";
    let decoded = decode_snapshot(bytes, Some("ISO-8859-1")).unwrap();
    assert_eq!(decoded.html, "caf\u{e9} \u{b7} 1.234 vues");
    assert!(decoded.encoding_label.eq_ignore_ascii_case("windows-1252"));
}

#[test]
fn decode_prefers_bom_over_label() {
    let bytes = b"\xEF\xBB\xBF<p>1,234 views</p>";
    let decoded = decode_snapshot(bytes, Some("ISO-8859-1")).unwrap();
    assert_eq!(decoded.html, "<p>1,234 views</p>");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn decode_detects_utf8_without_hints() {
    let html = "<p>3\u{a0}lakh views</p>";
    let decoded = decode_snapshot(html.as_bytes(), None).unwrap();
    assert_eq!(decoded.html, html);
}

#[test]
fn unknown_charset_label_is_rejected() {
    let err = decode_snapshot(b"<p></p>", Some("klingon-8")).unwrap_err();
    assert_eq!(err, DecodeError::UnknownCharset("klingon-8".to_string()));
}

#[test]
fn atomic_write_creates_and_replaces() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out").join("filtered.html");

    write_atomically(&target, "<p>first</p>").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "<p>first</p>");

    write_atomically(&target, "<p>second</p>").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "<p>second</p>");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let target = blocker.join("filtered.html");
    assert!(write_atomically(&target, "data").is_err());
    assert!(!target.exists());
}
