// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! Static instances of every supported codec, and the charset dispatch.

use crate::codec;
use crate::types::{Charset, CodecRef};

pub static SHIFT_JIS: &codec::japanese::ShiftJisCodec = &codec::japanese::ShiftJisCodec;
pub static ISO_2022_JP: &codec::japanese::Iso2022JpCodec = &codec::japanese::Iso2022JpCodec;
pub static EUC_JP: &codec::japanese::EucJpCodec = &codec::japanese::EucJpCodec;
pub static UTF_8: &codec::utf_8::Utf8Codec = &codec::utf_8::Utf8Codec;
pub static CESU_8: &codec::utf_8::Cesu8Codec = &codec::utf_8::Cesu8Codec;
pub static UTF_16LE: &codec::utf_16::Utf16LeCodec = &codec::utf_16::Utf16LeCodec;
pub static UTF_16BE: &codec::utf_16::Utf16BeCodec = &codec::utf_16::Utf16BeCodec;
pub static UTF_32LE: &codec::utf_16::Utf32LeCodec = &codec::utf_16::Utf32LeCodec;
pub static UTF_32BE: &codec::utf_16::Utf32BeCodec = &codec::utf_16::Utf32BeCodec;
pub static UTF_7: &codec::utf_7::Utf7Codec = &codec::utf_7::Utf7Codec;
pub static LATIN_1: &codec::singlebyte::Latin1Codec = &codec::singlebyte::Latin1Codec;

/// Returns the codec for a charset. An unknown charset yields the default
/// codec (Latin-1 behavior) rather than failing, so any tag produces a
/// usable object.
pub fn codec_for(charset: Charset) -> CodecRef {
    match charset {
        Charset::ShiftJis => SHIFT_JIS,
        Charset::Iso2022Jp => ISO_2022_JP,
        Charset::EucJp => EUC_JP,
        Charset::Utf8 => UTF_8,
        Charset::Cesu8 => CESU_8,
        Charset::Utf16Le => UTF_16LE,
        Charset::Utf16Be => UTF_16BE,
        Charset::Utf32Le => UTF_32LE,
        Charset::Utf32Be => UTF_32BE,
        Charset::Utf7 => UTF_7,
        Charset::Latin1 | Charset::Unknown => LATIN_1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Codec, EolStyle};

    #[test]
    fn dispatch_covers_every_charset() {
        let charsets = [
            Charset::ShiftJis,
            Charset::Iso2022Jp,
            Charset::EucJp,
            Charset::Utf8,
            Charset::Cesu8,
            Charset::Utf16Le,
            Charset::Utf16Be,
            Charset::Utf32Le,
            Charset::Utf32Be,
            Charset::Utf7,
            Charset::Latin1,
        ];
        for cs in charsets {
            assert_eq!(codec_for(cs).charset(), cs);
        }
    }

    #[test]
    fn unknown_charset_yields_a_usable_codec() {
        let codec = codec_for(crate::label::charset_from_codepage(0xDEAD));
        let decoded = codec.decode(b"abc");
        assert!(decoded.complete);
        assert_eq!(codec.encode(&decoded.units).bytes, b"abc");
    }

    #[test]
    fn bom_table_is_bit_exact() {
        assert_eq!(codec_for(Charset::Utf8).bom(), b"\xef\xbb\xbf");
        assert_eq!(codec_for(Charset::Utf16Le).bom(), b"\xff\xfe");
        assert_eq!(codec_for(Charset::Utf16Be).bom(), b"\xfe\xff");
        assert_eq!(codec_for(Charset::Utf7).bom(), b"+/v8-");
        assert_eq!(codec_for(Charset::ShiftJis).bom(), b"");
        assert_eq!(codec_for(Charset::EucJp).bom(), b"");
        assert_eq!(codec_for(Charset::Iso2022Jp).bom(), b"");
        assert_eq!(codec_for(Charset::Utf32Le).bom(), b"");
        assert_eq!(codec_for(Charset::Latin1).bom(), b"");
    }

    #[test]
    fn byte_codecs_share_the_ascii_eol_table() {
        for cs in [Charset::ShiftJis, Charset::EucJp, Charset::Iso2022Jp, Charset::Latin1] {
            let codec = codec_for(cs);
            assert_eq!(codec.eol(EolStyle::CrLf), b"\x0d\x0a");
            assert_eq!(codec.eol(EolStyle::Lf), b"\x0a");
            assert_eq!(codec.eol(EolStyle::Cr), b"\x0d");
            assert_eq!(codec.eol(EolStyle::None), b"");
        }
    }

    #[test]
    fn a_bom_prefix_is_a_valid_payload() {
        // decoding bom + payload yields U+FEFF + text for the carriers
        for cs in [Charset::Utf8, Charset::Utf16Le, Charset::Utf16Be, Charset::Utf7] {
            let codec = codec_for(cs);
            let text: Vec<u16> = "A".encode_utf16().collect();
            let mut bytes = codec.bom().to_vec();
            bytes.extend_from_slice(&codec.encode(&text).bytes);
            let decoded = codec.decode(&bytes);
            assert!(decoded.complete, "{:?}", cs);
            assert_eq!(decoded.units, [0xFEFF, 0x0041], "{:?}", cs);
        }
    }
}
