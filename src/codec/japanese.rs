// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! Legacy Japanese encodings: Shift_JIS, EUC-JP and ISO-2022-JP.
//!
//! All three run through one JIS X 0208 pointer table in its Windows-31J
//! flavor (`index::jis0208`), addressed as `(row - 1) * 94 + (cell - 1)`.
//! Shift_JIS additionally decodes the IBM extension block (`index::ibmext`,
//! lead bytes FA..FC); those characters have no reverse mapping, so they do
//! not round-trip and re-encoding them yields `?`. The NEC-selected IBM
//! rows (lead bytes ED/EE) are absent from the table altogether and their
//! byte sequences travel through the envelope.

use crate::index::{ibmext, jis0208};
use crate::types::{Charset, Codec, Decoded, Encoded};
use crate::util;

/// Shift_JIS, Windows-31J flavored.
#[derive(Clone, Copy)]
pub struct ShiftJisCodec;

/// EUC-JP without JIS X 0212.
#[derive(Clone, Copy)]
pub struct EucJpCodec;

/// ISO-2022-JP.
#[derive(Clone, Copy)]
pub struct Iso2022JpCodec;

#[inline]
fn is_sjis_lead(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

#[inline]
fn is_sjis_trail(byte: u8) -> bool {
    matches!(byte, 0x40..=0x7E | 0x80..=0xFC)
}

#[inline]
fn is_halfwidth_kana_byte(byte: u8) -> bool {
    (0xA1..=0xDF).contains(&byte)
}

#[inline]
fn is_halfwidth_kana_unit(unit: u16) -> bool {
    (0xFF61..=0xFF9F).contains(&unit)
}

/// Shift_JIS lead/trail pair to JIS X 0208 pointer.
#[inline]
fn pointer_from_sjis(lead: u8, trail: u8) -> u16 {
    let lead_offset = if lead < 0xA0 { lead - 0x81 } else { lead - 0xC1 };
    let trail_offset = if trail < 0x7F { trail - 0x40 } else { trail - 0x41 };
    lead_offset as u16 * 188 + trail_offset as u16
}

/// JIS X 0208 pointer to Shift_JIS lead/trail pair.
#[inline]
fn sjis_from_pointer(pointer: u16) -> (u8, u8) {
    let lead_offset = (pointer / 188) as u8;
    let trail_offset = (pointer % 188) as u8;
    let lead = if lead_offset < 0x1F { lead_offset + 0x81 } else { lead_offset + 0xC1 };
    let trail = if trail_offset < 0x3F { trail_offset + 0x40 } else { trail_offset + 0x41 };
    (lead, trail)
}

impl Codec for ShiftJisCodec {
    fn charset(&self) -> Charset {
        Charset::ShiftJis
    }

    fn decode(&self, bytes: &[u8]) -> Decoded {
        let mut units = Vec::with_capacity(bytes.len());
        let mut complete = true;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b <= 0x7F {
                units.push(b as u16);
                i += 1;
            } else if is_halfwidth_kana_byte(b) {
                units.push(0xFF61 + (b - 0xA1) as u16);
                i += 1;
            } else if is_sjis_lead(b) && i + 1 < bytes.len() && is_sjis_trail(bytes[i + 1]) {
                let trail = bytes[i + 1];
                let code = if b >= 0xFA {
                    // IBM extension characters have no reverse mapping, so
                    // even a successful lookup is not round-trippable
                    complete = false;
                    ibmext::forward((b as u16) << 8 | trail as u16)
                } else {
                    let pointer = pointer_from_sjis(b, trail);
                    if pointer >= 8836 {
                        // leads F0..F9: the user-defined region
                        0xE000 + (pointer - 8836)
                    } else {
                        jis0208::forward(pointer)
                    }
                };
                if code != 0xFFFF {
                    units.push(code);
                } else {
                    units.push(util::envelope(b));
                    units.push(util::envelope(trail));
                    complete = false;
                }
                i += 2;
            } else {
                // bad lead, or a lead with nothing usable after it; the
                // following byte is reconsidered on its own
                units.push(util::envelope(b));
                complete = false;
                i += 1;
            }
        }
        Decoded::new(units, complete)
    }

    fn encode(&self, units: &[u16]) -> Encoded {
        let mut bytes = Vec::with_capacity(units.len() * 2);
        let mut complete = true;
        let mut i = 0;
        while i < units.len() {
            let (code, consumed) = util::next_code(units, i);
            i += consumed;
            if consumed == 2 {
                bytes.push(b'?');
                complete = false;
                continue;
            }
            let unit = code as u16;
            if unit <= 0x7F {
                bytes.push(unit as u8);
            } else if let Some(b) = util::unenvelope(unit) {
                bytes.push(b);
            } else if is_halfwidth_kana_unit(unit) {
                bytes.push((unit - 0xFF61) as u8 + 0xA1);
            } else if (0xE000..=0xE757).contains(&unit) {
                let (lead, trail) = sjis_from_pointer(unit - 0xE000 + 8836);
                bytes.push(lead);
                bytes.push(trail);
            } else {
                let pointer = jis0208::backward(unit);
                if pointer != 0xFFFF {
                    let (lead, trail) = sjis_from_pointer(pointer);
                    bytes.push(lead);
                    bytes.push(trail);
                } else {
                    bytes.push(b'?');
                    complete = false;
                }
            }
        }
        Encoded::new(bytes, complete)
    }
}

impl Codec for EucJpCodec {
    fn charset(&self) -> Charset {
        Charset::EucJp
    }

    fn decode(&self, bytes: &[u8]) -> Decoded {
        let mut units = Vec::with_capacity(bytes.len());
        let mut complete = true;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b <= 0x7F {
                units.push(b as u16);
                i += 1;
            } else if b == 0x8E {
                // SS2: half-width kana
                if i + 1 < bytes.len() && is_halfwidth_kana_byte(bytes[i + 1]) {
                    units.push(0xFF61 + (bytes[i + 1] - 0xA1) as u16);
                    i += 2;
                } else {
                    units.push(util::envelope(b));
                    complete = false;
                    i += 1;
                }
            } else if b == 0x8F {
                // SS3: JIS X 0212, not carried; the whole sequence travels
                // through the envelope so re-encoding reproduces it
                if i + 2 < bytes.len()
                    && (0xA1..=0xFE).contains(&bytes[i + 1])
                    && (0xA1..=0xFE).contains(&bytes[i + 2])
                {
                    units.push(util::envelope(b));
                    units.push(util::envelope(bytes[i + 1]));
                    units.push(util::envelope(bytes[i + 2]));
                    complete = false;
                    i += 3;
                } else {
                    units.push(util::envelope(b));
                    complete = false;
                    i += 1;
                }
            } else if (0xA1..=0xFE).contains(&b) {
                if i + 1 < bytes.len() && (0xA1..=0xFE).contains(&bytes[i + 1]) {
                    let trail = bytes[i + 1];
                    let pointer = (b - 0xA1) as u16 * 94 + (trail - 0xA1) as u16;
                    let code = jis0208::forward(pointer);
                    if code != 0xFFFF {
                        units.push(code);
                    } else {
                        units.push(util::envelope(b));
                        units.push(util::envelope(trail));
                        complete = false;
                    }
                    i += 2;
                } else {
                    units.push(util::envelope(b));
                    complete = false;
                    i += 1;
                }
            } else {
                units.push(util::envelope(b));
                complete = false;
                i += 1;
            }
        }
        Decoded::new(units, complete)
    }

    fn encode(&self, units: &[u16]) -> Encoded {
        let mut bytes = Vec::with_capacity(units.len() * 2);
        let mut complete = true;
        let mut i = 0;
        while i < units.len() {
            let (code, consumed) = util::next_code(units, i);
            i += consumed;
            if consumed == 2 {
                bytes.push(b'?');
                complete = false;
                continue;
            }
            let unit = code as u16;
            if unit <= 0x7F {
                bytes.push(unit as u8);
            } else if let Some(b) = util::unenvelope(unit) {
                bytes.push(b);
            } else if is_halfwidth_kana_unit(unit) {
                bytes.push(0x8E);
                bytes.push((unit - 0xFF61) as u8 + 0xA1);
            } else {
                let pointer = jis0208::backward(unit);
                if pointer != 0xFFFF {
                    bytes.push((pointer / 94) as u8 + 0xA1);
                    bytes.push((pointer % 94) as u8 + 0xA1);
                } else {
                    bytes.push(b'?');
                    complete = false;
                }
            }
        }
        Encoded::new(bytes, complete)
    }
}

/// ISO-2022-JP charset states.
#[derive(Clone, Copy, PartialEq, Eq)]
enum JisState {
    /// `ESC ( B`, also the initial state; `ESC ( J` (JIS-Roman) decodes
    /// the same way.
    Ascii,
    /// `ESC ( I`: half-width katakana.
    Kana,
    /// `ESC $ @` or `ESC $ B`: JIS X 0208.
    Kanji,
}

impl Iso2022JpCodec {
    /// Recognizes an escape sequence at `bytes[i]`, returning the new state
    /// and the sequence length.
    fn escape(bytes: &[u8], i: usize) -> Option<(JisState, usize)> {
        match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(&b'('), Some(&b'B')) | (Some(&b'('), Some(&b'J')) => Some((JisState::Ascii, 3)),
            (Some(&b'('), Some(&b'I')) => Some((JisState::Kana, 3)),
            (Some(&b'$'), Some(&b'@')) | (Some(&b'$'), Some(&b'B')) => Some((JisState::Kanji, 3)),
            _ => None,
        }
    }

    fn shift(bytes: &mut Vec<u8>, state: &mut JisState, target: JisState) {
        if *state != target {
            match target {
                JisState::Ascii => bytes.extend_from_slice(b"\x1b(B"),
                JisState::Kana => bytes.extend_from_slice(b"\x1b(I"),
                JisState::Kanji => bytes.extend_from_slice(b"\x1b$B"),
            }
            *state = target;
        }
    }
}

impl Codec for Iso2022JpCodec {
    fn charset(&self) -> Charset {
        Charset::Iso2022Jp
    }

    fn decode(&self, bytes: &[u8]) -> Decoded {
        let mut units = Vec::with_capacity(bytes.len());
        let mut complete = true;
        let mut state = JisState::Ascii;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == 0x1B {
                if let Some((next, len)) = Self::escape(bytes, i) {
                    state = next;
                    i += len;
                } else {
                    units.push(util::envelope(b));
                    complete = false;
                    i += 1;
                }
                continue;
            }
            if b < 0x21 || b == 0x7F {
                // controls and DEL pass through in every state
                units.push(b as u16);
                i += 1;
                continue;
            }
            if b >= 0x80 {
                units.push(util::envelope(b));
                complete = false;
                i += 1;
                continue;
            }
            match state {
                JisState::Ascii => {
                    units.push(b as u16);
                    i += 1;
                }
                JisState::Kana => {
                    if b <= 0x5F {
                        units.push(0xFF61 + (b - 0x21) as u16);
                    } else {
                        units.push(util::envelope(b));
                        complete = false;
                    }
                    i += 1;
                }
                JisState::Kanji => {
                    if i + 1 < bytes.len() && (0x21..=0x7E).contains(&bytes[i + 1]) {
                        let trail = bytes[i + 1];
                        let pointer = (b - 0x21) as u16 * 94 + (trail - 0x21) as u16;
                        let code = jis0208::forward(pointer);
                        if code != 0xFFFF {
                            units.push(code);
                        } else {
                            units.push(util::envelope(b));
                            units.push(util::envelope(trail));
                            complete = false;
                        }
                        i += 2;
                    } else {
                        units.push(util::envelope(b));
                        complete = false;
                        i += 1;
                    }
                }
            }
        }
        Decoded::new(units, complete)
    }

    fn encode(&self, units: &[u16]) -> Encoded {
        let mut bytes = Vec::with_capacity(units.len() * 2 + 6);
        let mut complete = true;
        let mut state = JisState::Ascii;
        let mut i = 0;
        while i < units.len() {
            let (code, consumed) = util::next_code(units, i);
            i += consumed;
            if consumed == 2 {
                Self::shift(&mut bytes, &mut state, JisState::Ascii);
                bytes.push(b'?');
                complete = false;
                continue;
            }
            let unit = code as u16;
            if let Some(b) = util::unenvelope(unit) {
                // an opaque byte; emit it from the ASCII state so the rest
                // of the stream stays parseable
                Self::shift(&mut bytes, &mut state, JisState::Ascii);
                bytes.push(b);
            } else if unit <= 0x7F {
                Self::shift(&mut bytes, &mut state, JisState::Ascii);
                bytes.push(unit as u8);
            } else if is_halfwidth_kana_unit(unit) {
                Self::shift(&mut bytes, &mut state, JisState::Kana);
                bytes.push((unit - 0xFF61) as u8 + 0x21);
            } else {
                let pointer = jis0208::backward(unit);
                if pointer != 0xFFFF {
                    Self::shift(&mut bytes, &mut state, JisState::Kanji);
                    bytes.push((pointer / 94) as u8 + 0x21);
                    bytes.push((pointer % 94) as u8 + 0x21);
                } else {
                    Self::shift(&mut bytes, &mut state, JisState::Ascii);
                    bytes.push(b'?');
                    complete = false;
                }
            }
        }
        Self::shift(&mut bytes, &mut state, JisState::Ascii);
        Encoded::new(bytes, complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    fn ascii_bytes() -> Vec<u8> {
        (0x01..=0x7F).collect()
    }

    #[test]
    fn sjis_ascii_is_an_identity() {
        let bytes = ascii_bytes();
        let decoded = ShiftJisCodec.decode(&bytes);
        assert!(decoded.complete);
        let expected: Vec<u16> = (0x01..=0x7F).collect();
        assert_eq!(decoded.units, expected);
        let encoded = ShiftJisCodec.encode(&decoded.units);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, bytes);
    }

    #[test]
    fn sjis_kana_kanji_decode_and_back() {
        let bytes = b"\xb6\xc5\x82\xa9\x82\xc8\x83\x4a\x83\x69\x8a\xbf\x8e\x9a";
        let decoded = ShiftJisCodec.decode(bytes);
        assert_eq!(decoded.units, w("\u{FF76}\u{FF85}かなカナ漢字"));
        assert!(decoded.complete);
        let encoded = ShiftJisCodec.encode(&decoded.units);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, bytes);
    }

    #[test]
    fn sjis_undecodable_bytes_are_enveloped() {
        // NEC special, NEC-selected IBM, IBM extension; then bad leads;
        // then bad trails
        let bytes = b"\x87\x40\xed\x40\xfa\x40\
                      \x80\x40\xfd\x40\xfe\x40\xff\x40\
                      \x81\x0a\x81\x7f\x81\xfd\x81\xfe\x81\xff";
        let decoded = ShiftJisCodec.decode(bytes);
        let expected = [
            0x2460, 0xDCED, 0xDC40, 0x2170,
            0xDC80, 0x0040, 0xDCFD, 0x0040, 0xDCFE, 0x0040, 0xDCFF, 0x0040,
            0xDC81, 0x000A, 0xDC81, 0x007F, 0xDC81, 0xDCFD, 0xDC81, 0xDCFE, 0xDC81, 0xDCFF,
        ];
        assert_eq!(decoded.units, expected);
        assert!(!decoded.complete);
        // every envelope re-emits its byte; only the IBM character is lost
        let encoded = ShiftJisCodec.encode(&decoded.units);
        assert_eq!(
            encoded.bytes,
            b"\x87\x40\xed\x40\x3f\
              \x80\x40\xfd\x40\xfe\x40\xff\x40\
              \x81\x0a\x81\x7f\x81\xfd\x81\xfe\x81\xff"
        );
        assert!(!encoded.complete);
    }

    #[test]
    fn sjis_ibm_extensions_do_not_round_trip() {
        // ⅰ decodes from the IBM block but encodes to `?` by policy, so the
        // decoder already reports the loss
        let decoded = ShiftJisCodec.decode(b"\xfa\x40");
        assert_eq!(decoded.units, [0x2170]);
        assert!(!decoded.complete);
        let encoded = ShiftJisCodec.encode(&[0x2170]);
        assert_eq!(encoded.bytes, b"?");
        assert!(!encoded.complete);
    }

    #[test]
    fn sjis_user_defined_region_round_trips() {
        let decoded = ShiftJisCodec.decode(b"\xf0\x40");
        assert_eq!(decoded.units, [0xE000]);
        assert!(decoded.complete);
        let encoded = ShiftJisCodec.encode(&[0xE000]);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, b"\xf0\x40");
        // the top of the region as well
        let decoded = ShiftJisCodec.decode(b"\xf9\xfc");
        assert_eq!(decoded.units, [0xE757]);
        assert!(decoded.complete);
    }

    #[test]
    fn sjis_nec_row_13_round_trips() {
        let decoded = ShiftJisCodec.decode(b"\x87\x40");
        assert_eq!(decoded.units, [0x2460]);
        assert!(decoded.complete);
        let encoded = ShiftJisCodec.encode(&[0x2460]);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, b"\x87\x40");
    }

    #[test]
    fn sjis_unencodable_kanji_becomes_question_mark() {
        // 鷗 lives outside the two-way table
        let encoded = ShiftJisCodec.encode(&w("森鷗外"));
        assert_eq!(encoded.bytes, b"\x90\x58\x3f\x8a\x4f");
        assert!(!encoded.complete);
    }

    #[test]
    fn sjis_truncated_lead_is_enveloped() {
        let decoded = ShiftJisCodec.decode(b"A\x81");
        assert_eq!(decoded.units, [0x0041, 0xDC81]);
        assert!(!decoded.complete);
    }

    #[test]
    fn euc_ascii_is_an_identity() {
        let bytes = ascii_bytes();
        let decoded = EucJpCodec.decode(&bytes);
        assert!(decoded.complete);
        let encoded = EucJpCodec.encode(&decoded.units);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, bytes);
    }

    #[test]
    fn euc_kana_kanji_decode_and_back() {
        let bytes = b"\x8e\xb6\x8e\xc5\xa4\xab\xa4\xca\xa5\xab\xa5\xca\xb4\xc1\xbb\xfa";
        let decoded = EucJpCodec.decode(bytes);
        assert_eq!(decoded.units, w("\u{FF76}\u{FF85}かなカナ漢字"));
        assert!(decoded.complete);
        let encoded = EucJpCodec.encode(&decoded.units);
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, bytes);
    }

    #[test]
    fn euc_unencodable_kanji_becomes_question_mark() {
        let encoded = EucJpCodec.encode(&w("森鷗外"));
        assert_eq!(encoded.bytes, b"\xbf\xb9\x3f\xb3\xb0");
        assert!(!encoded.complete);
    }

    #[test]
    fn euc_ss3_sequences_are_carried_by_the_envelope() {
        let bytes = b"A\x8f\xec\xbfB";
        let decoded = EucJpCodec.decode(bytes);
        assert_eq!(decoded.units, [0x0041, 0xDC8F, 0xDCEC, 0xDCBF, 0x0042]);
        assert!(!decoded.complete);
        let encoded = EucJpCodec.encode(&decoded.units);
        assert_eq!(encoded.bytes, bytes);
    }

    #[test]
    fn euc_truncated_sequences_are_enveloped() {
        let decoded = EucJpCodec.decode(b"\xa4");
        assert_eq!(decoded.units, [0xDCA4]);
        assert!(!decoded.complete);
        let decoded = EucJpCodec.decode(b"\x8e");
        assert_eq!(decoded.units, [0xDC8E]);
        assert!(!decoded.complete);
    }

    #[test]
    fn jis_kanji_decode() {
        let decoded = Iso2022JpCodec.decode(b"\x1b$B%5%/%i\x1b(B");
        assert_eq!(decoded.units, w("サクラ"));
        assert!(decoded.complete);
    }

    #[test]
    fn jis_kanji_encode_uses_minimal_escapes() {
        let encoded = Iso2022JpCodec.encode(&w("サクラ"));
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, b"\x1b$B%5%/%i\x1b(B");
    }

    #[test]
    fn jis_mixed_runs() {
        let encoded = Iso2022JpCodec.encode(&w("abc漢字xyz"));
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, b"abc\x1b$B4A;z\x1b(Bxyz");
        let decoded = Iso2022JpCodec.decode(&encoded.bytes);
        assert_eq!(decoded.units, w("abc漢字xyz"));
        assert!(decoded.complete);
    }

    #[test]
    fn jis_halfwidth_kana_uses_esc_paren_i() {
        let encoded = Iso2022JpCodec.encode(&w("\u{FF76}\u{FF85}"));
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, b"\x1b(I6E\x1b(B");
        let decoded = Iso2022JpCodec.decode(&encoded.bytes);
        assert_eq!(decoded.units, w("\u{FF76}\u{FF85}"));
        assert!(decoded.complete);
    }

    #[test]
    fn jis_roman_and_1978_kanji_decode_like_their_modern_forms() {
        let decoded = Iso2022JpCodec.decode(b"\x1b(Jabc\x1b$@4A;z\x1b(B");
        assert_eq!(decoded.units, w("abc漢字"));
        assert!(decoded.complete);
    }

    #[test]
    fn jis_newline_returns_to_ascii_first() {
        let encoded = Iso2022JpCodec.encode(&w("漢\n字"));
        assert!(encoded.complete);
        assert_eq!(encoded.bytes, b"\x1b$B4A\x1b(B\n\x1b$B;z\x1b(B");
    }

    #[test]
    fn jis_unknown_escape_is_enveloped() {
        let decoded = Iso2022JpCodec.decode(b"\x1b(Xa");
        assert_eq!(decoded.units, [0xDC1B, 0x0028, 0x0058, 0x0061]);
        assert!(!decoded.complete);
    }

    #[test]
    fn jis_unencodable_kanji_becomes_question_mark() {
        let encoded = Iso2022JpCodec.encode(&w("森鷗外"));
        assert_eq!(encoded.bytes, b"\x1b$B?9\x1b(B?\x1b$B30\x1b(B");
        assert!(!encoded.complete);
    }

    #[test]
    fn jis_high_bytes_are_enveloped() {
        let decoded = Iso2022JpCodec.decode(b"a\xffb");
        assert_eq!(decoded.units, [0x0061, 0xDCFF, 0x0062]);
        assert!(!decoded.complete);
    }

    #[test]
    fn japanese_codecs_have_no_bom() {
        assert_eq!(ShiftJisCodec.bom(), b"");
        assert_eq!(EucJpCodec.bom(), b"");
        assert_eq!(Iso2022JpCodec.bom(), b"");
    }
}
