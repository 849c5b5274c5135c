//! Textual representations of a GUID.

use std::{fmt, str};

use fstr::FStr;

use crate::{Error, Guid};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Guid {
    /// Returns the 8-4-4-4-12 hexadecimal string representation ("D" format)
    /// stored in a stack-allocated string-like type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid4::Guid;
    ///
    /// let x = "01020304-0506-0708-090a-0b0c0d0e0f10".parse::<Guid>()?;
    /// assert_eq!(&x.encode() as &str, "01020304-0506-0708-090a-0b0c0d0e0f10");
    /// # Ok::<(), guid4::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        let mut buffer = [0u8; 36];
        self.write_hyphenated(&mut buffer);
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 32-digit hexadecimal string representation without
    /// separators ("N" format).
    pub fn encode_simple(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        let mut buffer_iter = buffer.iter_mut();
        for e in self.0 {
            *buffer_iter.next().unwrap() = DIGITS[(e >> 4) as usize];
            *buffer_iter.next().unwrap() = DIGITS[(e & 15) as usize];
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the "D" representation wrapped in parentheses ("P" format).
    pub fn encode_parenthesized(&self) -> FStr<38> {
        self.encode_wrapped(b'(', b')')
    }

    /// Returns the "D" representation wrapped in braces ("B" format).
    pub fn encode_braced(&self) -> FStr<38> {
        self.encode_wrapped(b'{', b'}')
    }

    /// Returns the C-array-initializer representation of hex literals
    /// ("X" format).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid4::Guid;
    ///
    /// let x = "01020304-0506-0708-090a-0b0c0d0e0f10".parse::<Guid>()?;
    /// assert_eq!(
    ///     &x.encode_hex_array() as &str,
    ///     "{0x01020304,0x0506,0x0708,{0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,0x10}}"
    /// );
    /// # Ok::<(), guid4::Error>(())
    /// ```
    pub fn encode_hex_array(&self) -> FStr<68> {
        let mut buffer = [0u8; 68];
        let mut pos = 0;
        push_byte(&mut buffer, &mut pos, b'{');
        push_hex_literal(&mut buffer, &mut pos, &self.0[0..4]);
        push_byte(&mut buffer, &mut pos, b',');
        push_hex_literal(&mut buffer, &mut pos, &self.0[4..6]);
        push_byte(&mut buffer, &mut pos, b',');
        push_hex_literal(&mut buffer, &mut pos, &self.0[6..8]);
        push_byte(&mut buffer, &mut pos, b',');
        push_byte(&mut buffer, &mut pos, b'{');
        for i in 8..16 {
            push_hex_literal(&mut buffer, &mut pos, &self.0[i..i + 1]);
            if i < 15 {
                push_byte(&mut buffer, &mut pos, b',');
            }
        }
        push_byte(&mut buffer, &mut pos, b'}');
        push_byte(&mut buffer, &mut pos, b'}');
        debug_assert_eq!(pos, buffer.len());
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering the GUID in the
    /// requested format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid4::{Format, Guid};
    ///
    /// let x = "01020304-0506-0708-090a-0b0c0d0e0f10".parse::<Guid>()?;
    /// assert_eq!(
    ///     x.format(Format::Simple).to_string(),
    ///     "0102030405060708090a0b0c0d0e0f10"
    /// );
    /// # Ok::<(), guid4::Error>(())
    /// ```
    pub const fn format(self, format: Format) -> Formatted {
        Formatted { guid: self, format }
    }

    fn write_hyphenated(&self, buffer: &mut [u8; 36]) {
        let mut buffer_iter = buffer.iter_mut();
        for (i, e) in self.0.into_iter().enumerate() {
            *buffer_iter.next().unwrap() = DIGITS[(e >> 4) as usize];
            *buffer_iter.next().unwrap() = DIGITS[(e & 15) as usize];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buffer_iter.next().unwrap() = b'-';
            }
        }
    }

    fn encode_wrapped(&self, open: u8, close: u8) -> FStr<38> {
        let mut buffer = [0u8; 38];
        buffer[0] = open;
        buffer[37] = close;
        let mut inner = [0u8; 36];
        self.write_hyphenated(&mut inner);
        buffer[1..37].copy_from_slice(&inner);
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

fn push_byte(buffer: &mut [u8], pos: &mut usize, value: u8) {
    buffer[*pos] = value;
    *pos += 1;
}

/// Writes `0x` followed by the hex digits of `bytes`.
fn push_hex_literal(buffer: &mut [u8], pos: &mut usize, bytes: &[u8]) {
    push_byte(buffer, pos, b'0');
    push_byte(buffer, pos, b'x');
    for &e in bytes {
        push_byte(buffer, pos, DIGITS[(e >> 4) as usize]);
        push_byte(buffer, pos, DIGITS[(e & 15) as usize]);
    }
}

impl fmt::Display for Guid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Textual layouts of a GUID, keyed by the conventional one-letter codes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Format {
    /// `N`: 32 hex digits with no separators.
    Simple,

    /// `D`: the canonical 8-4-4-4-12 layout. The default.
    #[default]
    Hyphenated,

    /// `P`: the canonical layout wrapped in parentheses.
    Parenthesized,

    /// `B`: the canonical layout wrapped in braces.
    Braced,

    /// `X`: a C-array initializer of hex literals.
    HexArray,
}

impl Format {
    /// Resolves a one-letter format code, failing on any code outside
    /// `N`, `D`, `P`, `B`, `X`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid4::Format;
    ///
    /// assert_eq!(Format::from_code("B")?, Format::Braced);
    /// assert!(Format::from_code("Z").is_err());
    /// # Ok::<(), guid4::Error>(())
    /// ```
    pub fn from_code(code: &str) -> Result<Self, Error> {
        match code {
            "N" => Ok(Self::Simple),
            "D" => Ok(Self::Hyphenated),
            "P" => Ok(Self::Parenthesized),
            "B" => Ok(Self::Braced),
            "X" => Ok(Self::HexArray),
            _ => Err(Error::FormatNotRecognized(code.into())),
        }
    }

    /// Returns the one-letter code of this format.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Simple => "N",
            Self::Hyphenated => "D",
            Self::Parenthesized => "P",
            Self::Braced => "B",
            Self::HexArray => "X",
        }
    }
}

impl str::FromStr for Format {
    type Err = Error;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_code(src)
    }
}

/// Return type of [`Guid::format()`] that [`Display`](fmt::Display)s the
/// wrapped GUID in the chosen [`Format`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Formatted {
    guid: Guid,
    format: Format,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            Format::Simple => f.write_str(&self.guid.encode_simple()),
            Format::Hyphenated => f.write_str(&self.guid.encode()),
            Format::Parenthesized => f.write_str(&self.guid.encode_parenthesized()),
            Format::Braced => f.write_str(&self.guid.encode_braced()),
            Format::HexArray => f.write_str(&self.guid.encode_hex_array()),
        }
    }
}
