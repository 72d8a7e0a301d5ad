// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! Round-trip properties over arbitrary inputs.
//!
//! Byte-level: decoding any byte sequence and re-encoding it must reproduce
//! the input for the byte-oriented codecs, unconditionally where the codec
//! has no one-way mappings, and whenever the decoder reported `complete`
//! elsewhere. Text-level: encoding any unit sequence and decoding it back
//! must be the identity for the codecs that can carry arbitrary units, and
//! for every codec whenever the encoder reported `complete`.

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::Config;
use transcode::{all, Charset, Codec};

fn units_of(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn pt_latin1_bytes_always_round_trip(ref bytes in vec(any::<u8>(), 0..64)) {
        let codec = all::codec_for(Charset::Latin1);
        let decoded = codec.decode(bytes);
        prop_assert!(decoded.complete);
        prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes.clone());
    }

    #[test]
    fn pt_utf8_bytes_always_round_trip(ref bytes in vec(any::<u8>(), 0..64)) {
        let codec = all::codec_for(Charset::Utf8);
        let decoded = codec.decode(bytes);
        prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes.clone());
    }

    #[test]
    fn pt_eucjp_bytes_always_round_trip(ref bytes in vec(any::<u8>(), 0..64)) {
        let codec = all::codec_for(Charset::EucJp);
        let decoded = codec.decode(bytes);
        prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes.clone());
    }

    #[test]
    fn pt_sjis_complete_decodes_round_trip(ref bytes in vec(any::<u8>(), 0..64)) {
        let codec = all::codec_for(Charset::ShiftJis);
        let decoded = codec.decode(bytes);
        if decoded.complete {
            prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes.clone());
        }
    }

    #[test]
    fn pt_sjis_incomplete_envelopes_still_reproduce(ref bytes in vec(any::<u8>(), 0..64)) {
        // even a lossy Shift_JIS decode only loses byte identity through
        // the IBM block; anything the table did not map must reproduce
        let codec = all::codec_for(Charset::ShiftJis);
        let decoded = codec.decode(bytes);
        if bytes.iter().all(|&b| b < 0xFA) {
            prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes.clone());
        }
    }

    #[test]
    fn pt_cesu8_complete_decodes_round_trip(ref bytes in vec(any::<u8>(), 0..64)) {
        let codec = all::codec_for(Charset::Cesu8);
        let decoded = codec.decode(bytes);
        if decoded.complete {
            prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes.clone());
        }
    }

    #[test]
    fn pt_utf16_even_input_round_trips(ref words in vec(any::<u16>(), 0..32)) {
        for cs in [Charset::Utf16Le, Charset::Utf16Be] {
            let codec = all::codec_for(cs);
            let encoded = codec.encode(words);
            prop_assert!(encoded.complete);
            let decoded = codec.decode(&encoded.bytes);
            prop_assert!(decoded.complete);
            prop_assert_eq!(&decoded.units, words);
        }
    }

    #[test]
    fn pt_utf16_even_byte_input_round_trips(ref bytes in vec(any::<u8>(), 0..64)) {
        // the odd-tail envelope is one-way for UTF-16, so this property
        // holds for code-unit-aligned input
        let bytes = &bytes[..bytes.len() & !1];
        for cs in [Charset::Utf16Le, Charset::Utf16Be] {
            let codec = all::codec_for(cs);
            let decoded = codec.decode(bytes);
            prop_assert!(decoded.complete);
            prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes);
        }
    }

    #[test]
    fn pt_utf32_aligned_bytes_round_trip(ref words in vec(any::<u32>(), 0..16)) {
        for cs in [Charset::Utf32Le, Charset::Utf32Be] {
            let codec = all::codec_for(cs);
            let mut bytes = Vec::new();
            for &w in words {
                if cs == Charset::Utf32Le {
                    bytes.extend_from_slice(&w.to_le_bytes());
                } else {
                    bytes.extend_from_slice(&w.to_be_bytes());
                }
            }
            let decoded = codec.decode(&bytes);
            prop_assert_eq!(codec.encode(&decoded.units).bytes, bytes);
        }
    }

    #[test]
    fn pt_utf7_any_units_survive_the_text_round_trip(ref units in vec(any::<u16>(), 0..32)) {
        let codec = all::codec_for(Charset::Utf7);
        let encoded = codec.encode(units);
        prop_assert!(encoded.complete);
        let decoded = codec.decode(&encoded.bytes);
        prop_assert_eq!(&decoded.units, units);
    }

    #[test]
    fn pt_text_round_trips_when_encode_is_complete(ref text in "\\PC*") {
        let units = units_of(text);
        for cs in [
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
        ] {
            let codec = all::codec_for(cs);
            let encoded = codec.encode(&units);
            if encoded.complete {
                let decoded = codec.decode(&encoded.bytes);
                prop_assert!(decoded.complete, "{:?}", cs);
                prop_assert_eq!(&decoded.units, &units, "{:?}", cs);
            }
        }
    }

    #[test]
    fn pt_unicode_codecs_encode_all_text(ref text in "\\PC*") {
        let units = units_of(text);
        for cs in [Charset::Utf8, Charset::Utf16Le, Charset::Utf16Be,
                   Charset::Utf32Le, Charset::Utf32Be, Charset::Utf7, Charset::Cesu8] {
            let codec = all::codec_for(cs);
            prop_assert!(codec.encode(&units).complete, "{:?}", cs);
        }
    }
}

#[test]
fn japanese_text_crosses_the_japanese_codecs() {
    let text = "\u{FF76}\u{FF85}かなカナ漢字";
    let units: Vec<u16> = text.encode_utf16().collect();
    for cs in [Charset::ShiftJis, Charset::EucJp, Charset::Iso2022Jp] {
        let codec = all::codec_for(cs);
        let encoded = codec.encode(&units);
        assert!(encoded.complete, "{:?}", cs);
        let decoded = codec.decode(&encoded.bytes);
        assert!(decoded.complete, "{:?}", cs);
        assert_eq!(decoded.units, units, "{:?}", cs);
    }
}
