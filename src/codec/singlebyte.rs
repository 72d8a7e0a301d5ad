// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! ISO 8859-1, also serving as the default codec for unknown charsets.

use crate::types::{Charset, Codec, Decoded, Encoded, EolStyle};
use crate::util;

/// ISO 8859-1: a direct map between bytes and `U+0000..=U+00FF`.
///
/// Decoding can never lose information. Encoding renders anything above
/// `U+00FF` as `?`.
#[derive(Clone, Copy)]
pub struct Latin1Codec;

impl Codec for Latin1Codec {
    fn charset(&self) -> Charset {
        Charset::Latin1
    }

    fn decode(&self, bytes: &[u8]) -> Decoded {
        let units = bytes.iter().map(|&b| b as u16).collect();
        Decoded::new(units, true)
    }

    fn encode(&self, units: &[u16]) -> Encoded {
        let mut bytes = Vec::with_capacity(units.len());
        let mut complete = true;
        let mut i = 0;
        while i < units.len() {
            let (code, consumed) = util::next_code(units, i);
            if consumed == 1 {
                if let Some(b) = util::unenvelope(code as u16) {
                    bytes.push(b);
                } else if code <= 0xFF {
                    bytes.push(code as u8);
                } else {
                    bytes.push(b'?');
                    complete = false;
                }
            } else {
                bytes.push(b'?');
                complete = false;
            }
            i += consumed;
        }
        Encoded::new(bytes, complete)
    }

    fn eol(&self, style: EolStyle) -> &'static [u8] {
        match style {
            EolStyle::None => b"",
            EolStyle::CrLf => b"\x0d\x0a",
            EolStyle::Lf => b"\x0a",
            EolStyle::Cr => b"\x0d",
            EolStyle::Nel => b"\x85",
            EolStyle::Ls | EolStyle::Ps => b"",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_identity_and_always_complete() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = Latin1Codec.decode(&bytes);
        assert!(decoded.complete);
        let expected: Vec<u16> = (0..=255).collect();
        assert_eq!(decoded.units, expected);
    }

    #[test]
    fn round_trips_every_byte() {
        let bytes: Vec<u8> = (0..=255).collect();
        let decoded = Latin1Codec.decode(&bytes);
        let encoded = Latin1Codec.encode(&decoded.units);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, bytes);
    }

    #[test]
    fn encode_replaces_out_of_range() {
        // "aé中": the kanji has no Latin-1 representation
        let units = [0x0061, 0x00E9, 0x4E2D];
        let encoded = Latin1Codec.encode(&units);
        assert_eq!(encoded.bytes, b"a\xe9?");
        assert!(!encoded.complete);
    }

    #[test]
    fn encode_emits_envelope_payloads() {
        let units = [util::envelope(0xFE), 0x0041];
        let encoded = Latin1Codec.encode(&units);
        assert_eq!(encoded.bytes, b"\xfeA");
        assert!(encoded.complete);
    }

    #[test]
    fn surrogate_pair_becomes_question_mark() {
        let units = [0xD83D, 0xDE00];
        let encoded = Latin1Codec.encode(&units);
        assert_eq!(encoded.bytes, b"?");
        assert!(!encoded.complete);
    }

    #[test]
    fn nel_is_representable() {
        assert_eq!(Latin1Codec.eol(EolStyle::Nel), b"\x85");
        assert_eq!(Latin1Codec.eol(EolStyle::Ls), b"");
        assert_eq!(Latin1Codec.eol(EolStyle::CrLf), b"\x0d\x0a");
    }
}
