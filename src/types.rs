// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! The transcoding contract shared by every codec.

/// A supported character set. This is the dispatch key for the codec
/// registry in `all`; it never carries configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Shift_JIS in its Windows-31J (code page 932) flavor.
    ShiftJis,
    /// ISO-2022-JP, the escape-sequence "JIS" encoding.
    Iso2022Jp,
    /// EUC-JP without the JIS X 0212 supplementary set.
    EucJp,
    /// UTF-8 per RFC 3629.
    Utf8,
    /// CESU-8: UTF-8 with supplementary code points as encoded surrogate pairs.
    Cesu8,
    /// UTF-16, little endian.
    Utf16Le,
    /// UTF-16, big endian.
    Utf16Be,
    /// UTF-32, little endian.
    Utf32Le,
    /// UTF-32, big endian.
    Utf32Be,
    /// UTF-7 per RFC 2152.
    Utf7,
    /// ISO 8859-1.
    Latin1,
    /// Anything else; dispatches to the default (Latin-1) codec.
    Unknown,
}

impl Charset {
    /// Returns the canonical label of this charset.
    pub fn name(&self) -> &'static str {
        match *self {
            Charset::ShiftJis => "shift_jis",
            Charset::Iso2022Jp => "iso-2022-jp",
            Charset::EucJp => "euc-jp",
            Charset::Utf8 => "utf-8",
            Charset::Cesu8 => "cesu-8",
            Charset::Utf16Le => "utf-16le",
            Charset::Utf16Be => "utf-16be",
            Charset::Utf32Le => "utf-32le",
            Charset::Utf32Be => "utf-32be",
            Charset::Utf7 => "utf-7",
            Charset::Latin1 => "iso-8859-1",
            Charset::Unknown => "unknown",
        }
    }
}

/// A line terminator style. Each codec renders each style in its own byte
/// representation; styles a codec cannot represent render as no bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EolStyle {
    /// No terminator.
    None,
    /// CR LF.
    CrLf,
    /// LF.
    Lf,
    /// CR.
    Cr,
    /// U+0085 NEXT LINE.
    Nel,
    /// U+2028 LINE SEPARATOR.
    Ls,
    /// U+2029 PARAGRAPH SEPARATOR.
    Ps,
}

/// The result of decoding a byte sequence into UTF-16 code units.
///
/// `units` may contain lone low surrogates in `0xDC00..=0xDCFF`: those are
/// envelope units carrying one opaque byte each, not characters.
/// Re-encoding with the same codec reproduces the carried bytes verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded code units.
    pub units: Vec<u16>,
    /// True iff the transcode was lossless.
    pub complete: bool,
}

/// The result of encoding UTF-16 code units into a byte sequence.
///
/// Unmappable code points render as `?` and clear `complete`; the output is
/// always maximal, never truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The encoded bytes.
    pub bytes: Vec<u8>,
    /// True iff the transcode was lossless.
    pub complete: bool,
}

impl Decoded {
    pub fn new(units: Vec<u16>, complete: bool) -> Decoded {
        Decoded { units, complete }
    }
}

impl Encoded {
    pub fn new(bytes: Vec<u8>, complete: bool) -> Encoded {
        Encoded { bytes, complete }
    }
}

/// A character encoding codec. Implementations are stateless unit structs;
/// `all` exposes one static instance per charset.
pub trait Codec: Sync {
    /// Returns the charset this codec implements.
    fn charset(&self) -> Charset;

    /// Decodes a byte sequence into UTF-16 code units. Bytes outside the
    /// decoding domain become envelope units and clear the complete flag;
    /// the call never fails.
    fn decode(&self, bytes: &[u8]) -> Decoded;

    /// Encodes UTF-16 code units into a byte sequence. Envelope units emit
    /// their payload byte; unmappable code points become `?` and clear the
    /// complete flag; the call never fails.
    fn encode(&self, units: &[u16]) -> Encoded;

    /// Returns the byte order mark identifying this encoding, if any.
    fn bom(&self) -> &'static [u8] {
        &[]
    }

    /// Returns the byte representation of a line terminator style.
    fn eol(&self, style: EolStyle) -> &'static [u8] {
        match style {
            EolStyle::None => b"",
            EolStyle::CrLf => b"\x0d\x0a",
            EolStyle::Lf => b"\x0a",
            EolStyle::Cr => b"\x0d",
            EolStyle::Nel | EolStyle::Ls | EolStyle::Ps => b"",
        }
    }
}

/// A reference to a statically allocated codec.
pub type CodecRef = &'static dyn Codec;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_names_are_canonical_labels() {
        assert_eq!(Charset::ShiftJis.name(), "shift_jis");
        assert_eq!(Charset::Iso2022Jp.name(), "iso-2022-jp");
        assert_eq!(Charset::Utf16Le.name(), "utf-16le");
        assert_eq!(Charset::Latin1.name(), "iso-8859-1");
    }
}
