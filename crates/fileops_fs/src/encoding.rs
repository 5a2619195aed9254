use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::Encoding;

use crate::error::{EncodingAction, Error};

/// A named character encoding used by the text operations.
///
/// `"latin1"`, `"iso-8859-1"` and `"l1"` select ISO-8859-1, where every byte
/// is the code point of the same value. Every other label is resolved the
/// way browsers resolve them. The default is UTF-8.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(Charset);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Charset {
    Latin1,
    Whatwg(&'static Encoding),
}

const LATIN1_LABELS: &[&str] = &[
    "latin1",
    "latin-1",
    "latin_1",
    "l1",
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859_1",
    "iso88591",
    "8859",
    "cp819",
    "ibm819",
];

impl TextEncoding {
    pub fn utf_8() -> Self {
        TextEncoding(Charset::Whatwg(encoding_rs::UTF_8))
    }

    /// ISO-8859-1: bytes 0x00-0xFF map to U+0000-U+00FF one to one.
    pub fn latin_1() -> Self {
        TextEncoding(Charset::Latin1)
    }

    pub fn windows_1252() -> Self {
        TextEncoding(Charset::Whatwg(encoding_rs::WINDOWS_1252))
    }

    /// Looks up an encoding by label, e.g. `"utf-8"` or `"latin1"`.
    pub fn for_label(label: &str) -> Result<Self, Error> {
        let trimmed = label.trim();
        if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(trimmed)) {
            return Ok(Self::latin_1());
        }
        Encoding::for_label(trimmed.as_bytes())
            .map(|encoding| TextEncoding(Charset::Whatwg(encoding)))
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        match self.0 {
            Charset::Latin1 => "ISO-8859-1",
            Charset::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Decodes `bytes` strictly; malformed input is an error rather than
    /// being replaced. A byte order mark is kept as part of the text.
    pub(crate) fn decode<'a>(&self, path: &Path, bytes: &'a [u8]) -> Result<Cow<'a, str>, Error> {
        match self.0 {
            Charset::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect::<String>().into()),
            Charset::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or_else(|| self.error(path, EncodingAction::Decode)),
        }
    }

    /// Encodes `text`, failing when a character has no representation.
    pub(crate) fn encode<'a>(&self, path: &Path, text: &'a str) -> Result<Cow<'a, [u8]>, Error> {
        match self.0 {
            Charset::Latin1 if text.is_ascii() => Ok(Cow::Borrowed(text.as_bytes())),
            Charset::Latin1 => text
                .chars()
                .map(|c| u8::try_from(c).map_err(|_| self.error(path, EncodingAction::Encode)))
                .collect::<Result<Vec<u8>, Error>>()
                .map(Cow::Owned),
            Charset::Whatwg(encoding) => {
                let (bytes, used, had_errors) = encoding.encode(text);
                // UTF-16 and replacement encodings silently fall back to UTF-8 output.
                if had_errors || used != encoding {
                    return Err(self.error(path, EncodingAction::Encode));
                }
                Ok(bytes)
            }
        }
    }

    fn error(&self, path: &Path, action: EncodingAction) -> Error {
        Error::Encoding { path: path.to_path_buf(), encoding: self.name(), action }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf_8()
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_label(s)
    }
}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_label_lookup() {
        assert_eq!(TextEncoding::for_label("UTF-8").unwrap(), TextEncoding::utf_8());
        assert_eq!(TextEncoding::for_label(" latin1 ").unwrap(), TextEncoding::latin_1());
        assert_eq!(TextEncoding::for_label("ISO-8859-1").unwrap(), TextEncoding::latin_1());
        assert_eq!(TextEncoding::for_label("l1").unwrap(), TextEncoding::latin_1());
        assert_eq!(
            TextEncoding::for_label("windows-1252").unwrap(),
            TextEncoding::windows_1252()
        );
        assert_eq!(
            "utf-16le".parse::<TextEncoding>().unwrap().name(),
            "UTF-16LE"
        );
        assert!(matches!(
            TextEncoding::for_label("klingon"),
            Err(Error::UnknownEncoding(label)) if label == "klingon"
        ));
    }

    #[test]
    fn test_encode_latin1() {
        let path = Path::new("x.txt");
        let actual = TextEncoding::windows_1252().encode(path, "café").unwrap();
        assert_eq!(actual.as_ref(), b"caf\xe9");

        let error = TextEncoding::windows_1252().encode(path, "日本").unwrap_err();
        assert!(matches!(
            error,
            Error::Encoding { action: EncodingAction::Encode, .. }
        ));
    }

    #[test]
    fn test_latin1_maps_every_byte_to_its_code_point() {
        let path = Path::new("x.txt");
        let latin1 = TextEncoding::latin_1();
        let bytes: Vec<u8> = (0x00..=0xFF).collect();
        let text: String = (0x00..=0xFFu32).filter_map(char::from_u32).collect();

        let decoded = latin1.decode(path, &bytes).unwrap();
        assert_eq!(decoded, text);
        assert_eq!(latin1.decode(path, b"\x93q\x94").unwrap(), "\u{93}q\u{94}");

        let encoded = latin1.encode(path, &text).unwrap();
        assert_eq!(encoded.as_ref(), bytes.as_slice());
        assert_eq!(latin1.encode(path, "\u{80}").unwrap().as_ref(), b"\x80");

        let error = latin1.encode(path, "price: 5\u{20ac}").unwrap_err();
        assert!(matches!(
            error,
            Error::Encoding { encoding: "ISO-8859-1", action: EncodingAction::Encode, .. }
        ));
    }

    #[test]
    fn test_encode_rejects_decode_only_encodings() {
        let utf16 = TextEncoding::for_label("utf-16le").unwrap();
        assert!(utf16.encode(Path::new("x.txt"), "hi").is_err());
    }

    #[test]
    fn test_decode_strict() {
        let path = Path::new("x.txt");
        let actual = TextEncoding::utf_8().decode(path, "héllo".as_bytes()).unwrap();
        assert_eq!(actual, "héllo");

        let error = TextEncoding::utf_8().decode(path, &[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(
            error,
            Error::Encoding { action: EncodingAction::Decode, .. }
        ));

        let utf16 = TextEncoding::for_label("utf-16le").unwrap();
        assert_eq!(utf16.decode(path, &[b'h', 0, b'i', 0]).unwrap(), "hi");
    }
}
