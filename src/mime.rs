// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! MIME encoded-word decoding for header lines (RFC 2047).
//!
//! Tokens look like `=?charset?B?payload?=` (base64) or `=?...?Q?...?=`
//! (quoted-printable). A token is substituted only when its charset label
//! resolves to the caller's charset; everything else, including tokens with
//! unknown transfer encodings or a missing closing `?=`, is copied through
//! untouched. The result is a byte buffer in the caller's charset, not a
//! Unicode string, so the caller can pick the charset decoder afterwards.

use crate::base64;
use crate::label;
use crate::types::Charset;

/// Decodes the encoded-words of one header line that match `charset`.
/// The flag mirrors the transcode results: it reports that the line was
/// processed (substituted or passed through) in full.
pub fn mime_header_decode(line: &[u8], charset: Charset) -> (Vec<u8>, bool) {
    let mut out = Vec::with_capacity(line.len());
    let mut i = 0;
    while i < line.len() {
        if line[i] == b'=' && line.get(i + 1) == Some(&b'?') {
            if let Some((body, consumed)) = encoded_word(&line[i..], charset) {
                out.extend_from_slice(&body);
                i += consumed;
                continue;
            }
        }
        out.push(line[i]);
        i += 1;
    }
    (out, true)
}

/// Parses one encoded-word at the head of `token` and decodes it if its
/// charset matches. Returns the decoded body and the token length.
fn encoded_word(token: &[u8], charset: Charset) -> Option<(Vec<u8>, usize)> {
    // =? charset ? encoding ? payload ?=
    let rest = &token[2..];
    let cs_end = rest.iter().position(|&b| b == b'?')?;
    let encoding = *rest.get(cs_end + 1)?;
    if *rest.get(cs_end + 2)? != b'?' {
        return None;
    }
    let payload_start = cs_end + 3;
    let payload_len = find_terminator(&rest[payload_start..])?;
    let payload = &rest[payload_start..payload_start + payload_len];

    let cs_label = core::str::from_utf8(&rest[..cs_end]).ok()?;
    if label::charset_from_label(cs_label) != Some(charset) {
        return None;
    }
    let body = match encoding {
        b'B' | b'b' => base64::decode(payload),
        b'Q' | b'q' => decode_quoted_printable(payload),
        _ => return None,
    };
    Some((body, 2 + payload_start + payload_len + 2))
}

/// Finds the closing `?=`, returning the payload length.
fn find_terminator(payload: &[u8]) -> Option<usize> {
    payload.windows(2).position(|pair| pair == b"?=")
}

#[inline]
fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Quoted-printable in its encoded-word form: `=HH` hex escapes, `_` for
/// space, everything else verbatim. A malformed escape stays verbatim.
fn decode_quoted_printable(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len());
    let mut i = 0;
    while i < payload.len() {
        let b = payload[i];
        if b == b'=' {
            if let (Some(&h1), Some(&h2)) = (payload.get(i + 1), payload.get(i + 2)) {
                if let (Some(v1), Some(v2)) = (hex_value(h1), hex_value(h2)) {
                    out.push((v1 << 4) | v2);
                    i += 3;
                    continue;
                }
            }
        }
        if b == b'_' {
            out.push(b' ');
        } else {
            out.push(b);
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_jis_header() {
        let line = b"From: =?iso-2022-jp?B?GyRCJTUlLyVpGyhC?=";
        let (out, ok) = mime_header_decode(line, Charset::Iso2022Jp);
        assert!(ok);
        assert_eq!(out, b"From: \x1b$B%5%/%i\x1b(B");
    }

    #[test]
    fn base64_utf8_header() {
        let line = b"From: =?utf-8?B?44K144Kv44Op?=";
        let (out, ok) = mime_header_decode(line, Charset::Utf8);
        assert!(ok);
        assert_eq!(out, "From: サクラ".as_bytes());
    }

    #[test]
    fn quoted_printable_utf8_header() {
        let line = b"From: =?utf-8?Q?=E3=82=B5=E3=82=AF=E3=83=A9!?=";
        let (out, ok) = mime_header_decode(line, Charset::Utf8);
        assert!(ok);
        assert_eq!(out, "From: サクラ!".as_bytes());
    }

    #[test]
    fn foreign_charset_is_left_alone() {
        let line = b"From: =?iso-2022-jp?B?GyRCJTUlLyVpGyhC?=";
        let (out, ok) = mime_header_decode(line, Charset::Utf8);
        assert!(ok);
        assert_eq!(out, line);
    }

    #[test]
    fn unknown_transfer_encoding_is_left_alone() {
        let line = b"From: =?iso-2022-jp?X?GyRCJTUlLyVpGyhC?=";
        let (out, _) = mime_header_decode(line, Charset::Iso2022Jp);
        assert_eq!(out, line);
    }

    #[test]
    fn missing_terminator_is_left_alone() {
        let line = b"From: =?iso-2022-jp?B?GyRCJTUlLyVpGyhC";
        let (out, _) = mime_header_decode(line, Charset::Iso2022Jp);
        assert_eq!(out, line);
        // same for a UTF-7 word that never closes
        let line = b"From: =?utf-7?B?+MLUwrzDp-";
        let (out, _) = mime_header_decode(line, Charset::Utf7);
        assert_eq!(out, line);
    }

    #[test]
    fn multiple_words_in_one_line() {
        let line = b"=?utf-8?Q?a_b?= and =?utf-8?B?Yw==?=";
        let (out, _) = mime_header_decode(line, Charset::Utf8);
        assert_eq!(out, b"a b and c");
    }

    #[test]
    fn underscore_maps_to_space_only_in_q() {
        let (out, _) = mime_header_decode(b"=?utf-8?Q?a=5Fb_c?=", Charset::Utf8);
        assert_eq!(out, b"a_b c");
    }

    #[test]
    fn lowercase_encoding_letters_are_accepted() {
        let (out, _) = mime_header_decode(b"=?utf-8?b?YWJj?=", Charset::Utf8);
        assert_eq!(out, b"abc");
        let (out, _) = mime_header_decode(b"=?utf-8?q?=61bc?=", Charset::Utf8);
        assert_eq!(out, b"abc");
    }

    #[test]
    fn plain_lines_pass_through() {
        let line = b"Subject: nothing encoded here = nor ?here?";
        let (out, ok) = mime_header_decode(line, Charset::Utf8);
        assert!(ok);
        assert_eq!(out, line);
    }
}
