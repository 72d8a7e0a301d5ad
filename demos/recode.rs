// This is a part of transcode.
// Copyright (c) 2024-2026, the transcode developers.
// See README.md and LICENSE.txt for details.

use std::io::{self, Read, Write};
use std::{env, fs, process};

use getopts::Options;
use transcode::{all, label, Charset, Codec};

fn charset_arg(name: Option<String>) -> Charset {
    match name {
        None => Charset::Utf8,
        Some(name) => match label::charset_from_label(&name) {
            Some(charset) => charset,
            None => {
                eprintln!("recode: unknown charset {}", name);
                process::exit(2);
            }
        },
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input charset", "NAME");
    opts.optopt("t", "to-code", "set output charset", "NAME");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("recode: {}", e);
            process::exit(2);
        }
    };
    if matches.opt_present("h") {
        print!("{}", opts.usage("Converts the character encoding of a file."));
        return;
    }

    let from = all::codec_for(charset_arg(matches.opt_str("f")));
    let to = all::codec_for(charset_arg(matches.opt_str("t")));

    let input = match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).expect("cannot read stdin");
            buf
        }
        Some(path) => fs::read(path).unwrap_or_else(|e| {
            eprintln!("recode: {}: {}", path, e);
            process::exit(1);
        }),
    };

    let decoded = from.decode(&input);
    if !decoded.complete {
        eprintln!("recode: input contained bytes outside {}", from.charset().name());
    }
    let encoded = to.encode(&decoded.units);
    if !encoded.complete {
        eprintln!("recode: some characters have no {} representation", to.charset().name());
    }

    match matches.opt_str("o").as_deref() {
        Some("-") | None => {
            io::stdout().write_all(&encoded.bytes).expect("cannot write stdout");
        }
        Some(path) => fs::write(path, &encoded.bytes).unwrap_or_else(|e| {
            eprintln!("recode: {}: {}", path, e);
            process::exit(1);
        }),
    }
}
