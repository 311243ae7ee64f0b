//! Text encoding fallback chain for subtitle files.
//!
//! Subtitle files in the wild are inconsistently encoded, and silent
//! mojibake is worse than a clear failure. Each encoding in a fixed
//! chain is attempted in order and the first one that decodes without
//! error wins. Latin-1 accepts every byte sequence, so with the default
//! chain decoding cannot actually fail; the `DecodeError` contract is
//! kept for the chain-exhausted case.

use std::borrow::Cow;

use super::error::DecodeError;

/// Encodings attempted, in order.
pub const ATTEMPTED_ENCODINGS: &[&str] = &["utf-8", "utf-8-sig", "latin-1", "windows-1252"];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Result of a successful decode: the text and which encoding won.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static str,
}

/// Decode subtitle file bytes via the fallback chain.
pub fn decode(bytes: &[u8]) -> Result<Decoded, DecodeError> {
    for &encoding in ATTEMPTED_ENCODINGS {
        if let Some(text) = try_decode(encoding, bytes) {
            return Ok(Decoded { text, encoding });
        }
    }
    Err(DecodeError {
        attempted: ATTEMPTED_ENCODINGS,
    })
}

fn try_decode(encoding: &str, bytes: &[u8]) -> Option<String> {
    match encoding {
        "utf-8" => std::str::from_utf8(bytes).ok().map(str::to_owned),
        "utf-8-sig" => {
            let rest = bytes.strip_prefix(UTF8_BOM)?;
            std::str::from_utf8(rest).ok().map(str::to_owned)
        }
        "latin-1" => Some(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        "windows-1252" => encoding_rs::WINDOWS_1252
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned),
        _ => None,
    }
}
