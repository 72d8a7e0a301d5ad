// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

//! Charset resolution from string labels, Windows code page numbers and
//! byte order marks.

use crate::types::Charset;

/// Resolves a charset from a label, matching the canonical alias list
/// case-insensitively. Surrounding ASCII whitespace is ignored.
pub fn charset_from_label(label: &str) -> Option<Charset> {
    let label = label.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C'));
    let lower = label.to_ascii_lowercase();
    match &lower[..] {
        "shift_jis" | "shift-jis" | "shiftjis" | "sjis" | "x-sjis" | "ms_kanji" | "windows-31j"
        | "cp932" | "csshiftjis" => Some(Charset::ShiftJis),
        "iso-2022-jp" | "csiso2022jp" | "jis" => Some(Charset::Iso2022Jp),
        "euc-jp" | "eucjp" | "x-euc-jp" | "cseucpkdfmtjapanese" => Some(Charset::EucJp),
        "utf-8" | "utf8" | "unicode-1-1-utf-8" => Some(Charset::Utf8),
        "cesu-8" | "cesu8" | "cscesu-8" => Some(Charset::Cesu8),
        "utf-16" | "utf-16le" | "utf16" | "utf16le" => Some(Charset::Utf16Le),
        "utf-16be" | "utf16be" => Some(Charset::Utf16Be),
        "utf-32" | "utf-32le" | "utf32" | "utf32le" => Some(Charset::Utf32Le),
        "utf-32be" | "utf32be" => Some(Charset::Utf32Be),
        "utf-7" | "utf7" | "unicode-1-1-utf-7" | "csunicode11utf7" => Some(Charset::Utf7),
        "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "l1" | "cp819" | "ibm819"
        | "csisolatin1" => Some(Charset::Latin1),
        _ => None,
    }
}

/// Resolves a charset from a Windows code page number. Unrecognized numbers
/// yield `Charset::Unknown`, which dispatches to the default codec.
pub fn charset_from_codepage(codepage: u32) -> Charset {
    match codepage {
        932 => Charset::ShiftJis,
        50220..=50222 => Charset::Iso2022Jp,
        20932 | 51932 => Charset::EucJp,
        65001 => Charset::Utf8,
        1200 => Charset::Utf16Le,
        1201 => Charset::Utf16Be,
        12000 => Charset::Utf32Le,
        12001 => Charset::Utf32Be,
        65000 => Charset::Utf7,
        819 | 28591 => Charset::Latin1,
        _ => Charset::Unknown,
    }
}

/// Recognizes the charset announced by a byte order mark at the head of a
/// buffer, if any. Longer marks win over shorter prefixes.
pub fn charset_from_bom(bytes: &[u8]) -> Option<Charset> {
    if bytes.starts_with(b"+/v8-") {
        Some(Charset::Utf7)
    } else if bytes.starts_with(b"\xef\xbb\xbf") {
        Some(Charset::Utf8)
    } else if bytes.starts_with(b"\xff\xfe") {
        Some(Charset::Utf16Le)
    } else if bytes.starts_with(b"\xfe\xff") {
        Some(Charset::Utf16Be)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_resolve_case_insensitively() {
        assert_eq!(charset_from_label("Shift_JIS"), Some(Charset::ShiftJis));
        assert_eq!(charset_from_label("ISO-2022-JP"), Some(Charset::Iso2022Jp));
        assert_eq!(charset_from_label("utf-8"), Some(Charset::Utf8));
        assert_eq!(charset_from_label("UTF-7"), Some(Charset::Utf7));
        assert_eq!(charset_from_label("Latin1"), Some(Charset::Latin1));
        assert_eq!(charset_from_label("  utf-8\t"), Some(Charset::Utf8));
        assert_eq!(charset_from_label("no-such-charset"), None);
    }

    #[test]
    fn codepages_resolve() {
        assert_eq!(charset_from_codepage(932), Charset::ShiftJis);
        assert_eq!(charset_from_codepage(50220), Charset::Iso2022Jp);
        assert_eq!(charset_from_codepage(12000), Charset::Utf32Le);
        assert_eq!(charset_from_codepage(65001), Charset::Utf8);
        assert_eq!(charset_from_codepage(12345), Charset::Unknown);
    }

    #[test]
    fn boms_resolve() {
        assert_eq!(charset_from_bom(b"\xef\xbb\xbfabc"), Some(Charset::Utf8));
        assert_eq!(charset_from_bom(b"\xff\xfeA\x00"), Some(Charset::Utf16Le));
        assert_eq!(charset_from_bom(b"\xfe\xff\x00A"), Some(Charset::Utf16Be));
        assert_eq!(charset_from_bom(b"+/v8-abc"), Some(Charset::Utf7));
        assert_eq!(charset_from_bom(b"plain"), None);
    }
}
