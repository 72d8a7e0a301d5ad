// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

/*!

# Transcode

Character transcoding between legacy byte encodings and UTF-16 code units,
built for text editors: any byte sequence, however malformed, decodes into
something that encodes back bit-for-bit, and every call reports whether the
conversion was lossless.

## Usage

Decoding and re-encoding a Shift_JIS buffer:

```
use transcode::{all, Charset, Codec};

let codec = all::codec_for(Charset::ShiftJis);
let decoded = codec.decode(b"\x82\xa9\x82\xc8");
assert!(decoded.complete);
let encoded = codec.encode(&decoded.units);
assert_eq!(encoded.bytes, b"\x82\xa9\x82\xc8");
```

Malformed input travels through the byte envelope (`U+DC00..=U+DCFF`) and
clears the complete flag, but still reproduces the original bytes:

```
use transcode::{all, Charset, Codec};

let codec = all::codec_for(Charset::Utf8);
let decoded = codec.decode(b"ok\xff");
assert!(!decoded.complete);
assert_eq!(decoded.units, [0x6f, 0x6b, 0xdcff]);
assert_eq!(codec.encode(&decoded.units).bytes, b"ok\xff");
```

Charsets can be resolved from labels, Windows code pages or byte order
marks, and MIME headers can be unwrapped before charset decoding:

```
use transcode::{label, mime_header_decode, Charset};

assert_eq!(label::charset_from_label("Shift_JIS"), Some(Charset::ShiftJis));
assert_eq!(label::charset_from_codepage(65001), Charset::Utf8);

let (line, _) = mime_header_decode(b"From: =?utf-8?B?YWJj?=", Charset::Utf8);
assert_eq!(line, b"From: abc");
```

## Lossless round trips

Decoders never abort: bytes they cannot map become one envelope unit each,
a lone low surrogate `0xDC00 | byte`. Encoders emit envelope payloads
verbatim before anything else, which is what makes decode-then-encode
reproduce arbitrary input. Unmappable code points encode as `?`. In both
directions the `complete` flag is the single error signal; `false` means
"converted, but something was replaced or carried raw".

*/

pub use crate::mime::mime_header_decode;
pub use crate::types::{Charset, Codec, CodecRef, Decoded, Encoded, EolStyle};

mod util;

pub mod all;
pub mod base64;
pub mod label;
pub mod mime;
pub mod types;

/// Codec implementations, one module per encoding family.
pub mod codec {
    pub mod japanese;
    pub mod singlebyte;
    pub mod utf_16;
    pub mod utf_7;
    pub mod utf_8;
}

/// Mapping tables used by the codec implementations. Semi-internal.
pub mod index {
    pub mod ibmext;
    pub mod jis0208;
}
