#![no_main]
use libfuzzer_sys::fuzz_target;
use miniprintf_core::{Arg, MemoryStream, NullStream, printf};

/// Longest run of width/precision bytes kept, so padding stays small.
const MAX_COUNT_RUN: usize = 3;

fn sanitize(fmt: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(fmt.len());
    let mut run = 0;
    for &b in fmt {
        if b.is_ascii_digit() || b == b'*' {
            run += 1;
            if run > MAX_COUNT_RUN {
                continue;
            }
        } else {
            run = 0;
        }
        out.push(b);
    }
    out
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (seed, fmt) = data.split_at(4);
    let fmt = sanitize(fmt);
    let text = &fmt[..fmt.len().min(16)];
    let args = [
        Arg::Int(i32::from(seed[0] % 64)),
        Arg::Long(i64::from(i8::from_ne_bytes([seed[1]])) << 40),
        Arg::Str(Some(text)),
        Arg::Char(seed[2]),
        Arg::Float(f32::from(seed[3]) / 7.0),
        Arg::Str(None),
        Arg::UInt(u32::from(seed[1])),
        Arg::Int(i32::from(seed[3] % 32)),
    ];

    let expected = printf(&mut NullStream, &fmt, &args);

    // Same count into a stream large enough to hold everything.
    let mut full = vec![0u8; expected];
    let mut stream = MemoryStream::new(&mut full);
    assert_eq!(printf(&mut stream, &fmt, &args), expected);
    assert_eq!(stream.eos(), expected);

    // A short stream reports the same count and keeps a prefix.
    let cap = usize::from(seed[0]) % (expected + 1);
    let mut short = vec![0u8; cap];
    let mut stream = MemoryStream::new(&mut short);
    assert_eq!(printf(&mut stream, &fmt, &args), expected);
    assert_eq!(stream.eos(), cap);
    assert_eq!(&short[..], &full[..cap]);
});
