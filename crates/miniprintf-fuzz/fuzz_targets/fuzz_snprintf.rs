#![no_main]
use libfuzzer_sys::fuzz_target;
use miniprintf_core::{Arg, NullStream, printf, snprintf};

const CANARY: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let capacity = usize::from(data[0] % 48);
    // Drop digits so widths cannot grow the output.
    let fmt: Vec<u8> = data[1..].iter().copied().filter(|b| !b.is_ascii_digit() && *b != b'*').collect();
    let args = [
        Arg::Int(-i32::from(data[1])),
        Arg::Str(Some(&data[1..])),
        Arg::ULong(u64::from(data[0]) << 33),
        Arg::Float(-f32::from(data[1]) * 1.25),
    ];

    let expected = printf(&mut NullStream, &fmt, &args);
    let mut buf = vec![CANARY; capacity + 8];
    let count = snprintf(&mut buf[..capacity], &fmt, &args);
    assert_eq!(count, expected);

    if capacity > 0 {
        let stored = count.min(capacity - 1);
        assert_eq!(buf[stored], 0, "missing terminator");
        assert!(buf[stored + 1..capacity].iter().all(|&b| b == CANARY));
    } else {
        assert!(buf.iter().all(|&b| b == CANARY));
    }
    assert!(buf[capacity..].iter().all(|&b| b == CANARY));
});
