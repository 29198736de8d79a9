//! Typed argument list.
//!
//! Replaces raw variadic traversal: callers build a slice of [`Arg`] values
//! up front and the engine walks it with an [`ArgList`] cursor. Each fetch
//! names the width it wants and the stored value is reinterpreted with plain
//! `as` casts, the same truncation or extension a C callee would observe.
//!
//! Fetching past the end yields zero (or `None` for strings) instead of
//! reading garbage.

/// One formatting argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    /// `int`
    Int(i32),
    /// `long`
    Long(i64),
    /// `unsigned int`
    UInt(u32),
    /// `unsigned long`
    ULong(u64),
    /// `char`, promoted like an `int`.
    Char(u8),
    /// NUL-terminated or length-bounded text; `None` is a null pointer.
    Str(Option<&'a [u8]>),
    /// Single-precision float.
    Float(f32),
}

impl Arg<'_> {
    fn as_i64(&self) -> i64 {
        match *self {
            Arg::Int(v) => i64::from(v),
            Arg::Long(v) => v,
            Arg::UInt(v) => i64::from(v),
            Arg::ULong(v) => v as i64,
            Arg::Char(c) => i64::from(c),
            Arg::Float(f) => f as i64,
            Arg::Str(_) => 0,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(v: $ty) -> Self {
                    Arg::$variant(v.into())
                }
            }
        )*
    };
}

impl_from! {
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Long,
    u8 => Char,
    u16 => UInt,
    u32 => UInt,
    u64 => ULong,
    f32 => Float,
}

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        Arg::Long(v as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Arg::ULong(v as u64)
    }
}

impl From<f64> for Arg<'_> {
    /// Narrowed to `f32`; the engine converts single precision only.
    fn from(v: f64) -> Self {
        Arg::Float(v as f32)
    }
}

impl From<char> for Arg<'_> {
    /// Non-ASCII characters become `?`.
    fn from(c: char) -> Self {
        Arg::Char(u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
    }
}

impl From<bool> for Arg<'_> {
    fn from(v: bool) -> Self {
        Arg::Int(i32::from(v))
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(Some(s.as_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(Some(s))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Arg::Str(Some(s))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Arg::Str(s.map(str::as_bytes))
    }
}

impl<'a> From<Option<&'a [u8]>> for Arg<'a> {
    fn from(s: Option<&'a [u8]>) -> Self {
        Arg::Str(s)
    }
}

/// Sequential cursor over an argument slice.
#[derive(Debug, Clone)]
pub struct ArgList<'a, 'b> {
    args: &'b [Arg<'a>],
    next: usize,
}

impl<'a, 'b> ArgList<'a, 'b> {
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        Self { args, next: 0 }
    }

    /// Arguments fetched so far, including fetches past the end.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Arguments not yet fetched.
    pub fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.next)
    }

    fn fetch(&mut self) -> Option<Arg<'a>> {
        let arg = self.args.get(self.next).copied();
        self.next += 1;
        arg
    }

    /// Next argument as an `int`.
    pub fn next_int(&mut self) -> i32 {
        self.fetch().map_or(0, |a| a.as_i64() as i32)
    }

    /// Next argument as a `long`.
    pub fn next_long(&mut self) -> i64 {
        self.fetch().map_or(0, |a| a.as_i64())
    }

    /// Next argument as an `unsigned int`.
    pub fn next_uint(&mut self) -> u32 {
        self.fetch().map_or(0, |a| a.as_i64() as u32)
    }

    /// Next argument as an `unsigned long`.
    ///
    /// `Int` values are sign-extended first, so `-1` reads as `u64::MAX`.
    pub fn next_ulong(&mut self) -> u64 {
        self.fetch().map_or(0, |a| a.as_i64() as u64)
    }

    /// Next argument as a string pointer; non-strings read as null.
    pub fn next_str(&mut self) -> Option<&'a [u8]> {
        match self.fetch() {
            Some(Arg::Str(s)) => s,
            _ => None,
        }
    }

    /// Next argument as a float.
    pub fn next_float(&mut self) -> f32 {
        match self.fetch() {
            Some(Arg::Float(f)) => f,
            Some(Arg::ULong(v)) => v as f32,
            Some(other) => other.as_i64() as f32,
            None => 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
