use crate::error::ReadError;
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Labels that mean exact ISO-8859-1 (every byte maps to the code point of
/// the same value), compared with `-`/`_` removed
const LATIN1_LABELS: &[&str] = &[
    "latin1",
    "latin",
    "l1",
    "iso88591",
    "iso8859",
    "8859",
    "cp819",
    "ibm819",
    "csisolatin1",
    "isoir100",
    "iso885911987",
];

/// Codec used to decode tesseract's output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// Exact ISO-8859-1. WHATWG folds these labels into windows-1252, which
    /// would turn 0x80..0x9F into punctuation.
    Latin1,
    Whatwg(&'static Encoding),
}

impl Codec {
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Latin1 => "ISO-8859-1",
            Codec::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Strict decode; None on malformed input
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            Codec::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            Codec::Whatwg(encoding) => {
                encoding.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

/// Look up a codec by label
///
/// Accepts WHATWG labels ("utf-8", "windows-1252", ...), the Latin-1 names
/// ("latin-1", "iso-8859-1", ...) and the hyphen/underscore spellings people
/// tend to write in `lang.json` ("utf_8", "iso_8859_15").
pub fn resolve_encoding(label: &str) -> Option<Codec> {
    let label = label.trim();
    let compact = label
        .replace(|c: char| c == '-' || c == '_', "")
        .to_ascii_lowercase();

    if LATIN1_LABELS.contains(&compact.as_str()) {
        return Some(Codec::Latin1);
    }

    Encoding::for_label(label.as_bytes())
        .or_else(|| Encoding::for_label(label.replace('_', "-").as_bytes()))
        .or_else(|| Encoding::for_label(compact.as_bytes()))
        .map(Codec::Whatwg)
}

/// Read the OCR output at `path` decoded with `encoding`, leading
/// whitespace stripped
pub fn read_text(path: &Path, encoding: &str) -> Result<String, ReadError> {
    let codec =
        resolve_encoding(encoding).ok_or_else(|| ReadError::UnknownEncoding(encoding.to_string()))?;

    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = codec.decode(&bytes).ok_or_else(|| ReadError::Decode {
        path: path.to_path_buf(),
        encoding: codec.name().to_string(),
    })?;

    Ok(text.trim_start().to_string())
}
