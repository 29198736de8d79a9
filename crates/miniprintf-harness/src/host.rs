//! Host libc parity probe.
//!
//! Formats through the platform `snprintf` so fixture expectations can be
//! cross-checked against a conventional C library. Only formats whose
//! argument needs are fully known are passed through: at most one
//! conversion, no `*` fields, no `%n`.

#![allow(unsafe_code)]

/// Argument forwarded to the host `snprintf`.
#[derive(Debug, Clone, PartialEq)]
pub enum HostArg {
    Int(i32),
    Long(i64),
    UInt(u32),
    ULong(u64),
    Str(Option<String>),
    Double(f64),
}

const HOST_BUFFER_LEN: usize = 512;

/// Number of argument-consuming conversions in `format`, or `None` when
/// the format cannot be forwarded safely.
#[must_use]
pub fn conversion_count(format: &str) -> Option<usize> {
    let bytes = format.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        i += 1;
        if bytes.get(i) == Some(&b'%') {
            i += 1;
            continue;
        }
        while let Some(&c) = bytes.get(i) {
            match c {
                b'*' | b'n' => return None,
                b'-' | b'+' | b' ' | b'#' | b'.' | b'0'..=b'9' | b'l' | b'h' => i += 1,
                _ => break,
            }
        }
        if i >= bytes.len() {
            return None;
        }
        count += 1;
        i += 1;
    }
    Some(count)
}

/// Format with the host C library. Returns `None` when the format is not
/// safe to forward, the argument count does not match, or the platform
/// has no probe.
#[must_use]
pub fn host_snprintf(format: &str, arg: Option<&HostArg>) -> Option<String> {
    let expected = usize::from(arg.is_some());
    if conversion_count(format)? != expected {
        return None;
    }
    call_host(format, arg)
}

#[cfg(unix)]
fn call_host(format: &str, arg: Option<&HostArg>) -> Option<String> {
    use std::ffi::CString;

    let fmt = CString::new(format).ok()?;
    // A null %s is undefined behavior in C; leave it to the engine.
    let text = match arg {
        Some(HostArg::Str(Some(s))) => Some(CString::new(s.as_str()).ok()?),
        Some(HostArg::Str(None)) => return None,
        _ => None,
    };
    let mut buf = vec![0u8; HOST_BUFFER_LEN];
    let dst = buf.as_mut_ptr().cast::<libc::c_char>();
    let len = buf.len();

    // SAFETY: `dst` points to `len` writable bytes, `fmt` is NUL-terminated,
    // and `conversion_count` has checked the format consumes exactly the
    // arguments passed here.
    let n = unsafe {
        match arg {
            None => libc::snprintf(dst, len, fmt.as_ptr()),
            Some(HostArg::Int(v)) => libc::snprintf(dst, len, fmt.as_ptr(), *v as libc::c_int),
            Some(HostArg::Long(v)) => libc::snprintf(dst, len, fmt.as_ptr(), *v as libc::c_long),
            Some(HostArg::UInt(v)) => libc::snprintf(dst, len, fmt.as_ptr(), *v as libc::c_uint),
            Some(HostArg::ULong(v)) => {
                libc::snprintf(dst, len, fmt.as_ptr(), *v as libc::c_ulong)
            }
            Some(HostArg::Str(_)) => {
                let ptr = text.as_ref().map_or(std::ptr::null(), |s| s.as_ptr());
                libc::snprintf(dst, len, fmt.as_ptr(), ptr)
            }
            Some(HostArg::Double(v)) => libc::snprintf(dst, len, fmt.as_ptr(), *v as libc::c_double),
        }
    };
    let n = usize::try_from(n).ok()?.min(len - 1);
    Some(String::from_utf8_lossy(&buf[..n]).into_owned())
}

#[cfg(not(unix))]
fn call_host(_format: &str, _arg: Option<&HostArg>) -> Option<String> {
    None
}
