use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSnapshot {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown charset label {0:?}")]
    UnknownCharset(String),
    #[error("snapshot is not valid {encoding}")]
    Malformed { encoding: String },
}

/// Decode a saved page to UTF-8.
///
/// Order: byte order mark, then the caller's charset label, then detection.
/// An explicit label that names no known encoding is an error rather than a
/// silent guess.
pub fn decode_snapshot(bytes: &[u8], charset: Option<&str>) -> Result<DecodedSnapshot, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = charset.map(str::trim).filter(|label| !label.is_empty()) {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| DecodeError::UnknownCharset(label.to_string()))?;
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedSnapshot, DecodeError> {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: actual.name().to_string(),
        });
    }
    Ok(DecodedSnapshot {
        html: text.into_owned(),
        encoding_label: actual.name().to_string(),
    })
}
