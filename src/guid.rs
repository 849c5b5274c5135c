use std::{error, fmt, str};

/// Represents a Globally Unique IDentifier.
///
/// A `Guid` is an immutable 16-byte value. The all-zero GUID is available
/// both as [`Guid::NIL`] and through [`Default`], and is distinct from any
/// randomly generated identifier with overwhelming probability.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Guid(pub(crate) [u8; 16]);

impl Guid {
    /// Nil GUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max GUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a GUID by copying exactly 16 bytes from a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guid4::{Error, Guid};
    ///
    /// let guid = Guid::from_slice(&[0x42; 16])?;
    /// assert_eq!(guid.as_bytes(), &[0x42; 16]);
    /// assert_eq!(Guid::from_slice(&[0x42; 15]), Err(Error::InvalidLength(15)));
    /// # Ok::<(), guid4::Error>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidLength(src.len()))
    }
}

impl str::FromStr for Guid {
    type Err = Error;

    /// Creates an object from a hexadecimal string representation.
    ///
    /// The parser is permissive on punctuation: it deletes every `0x` prefix
    /// and every `-`, `(`, `)`, `{`, `}`, `,` character, then requires the
    /// residue to be exactly 32 hex digits (in either case).
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let err = || Error::FormatNotRecognized(src.into());
        let mut dst = [0u8; 16];
        let mut digits = 0;
        let mut iter = src.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '-' | '(' | ')' | '{' | '}' | ',' => {}
                '0' if iter.peek() == Some(&'x') => {
                    iter.next();
                }
                _ => {
                    let e = c.to_digit(16).ok_or_else(err)? as u8;
                    if digits >= 32 {
                        return Err(err());
                    }
                    dst[digits / 2] = (dst[digits / 2] << 4) | e;
                    digits += 1;
                }
            }
        }
        if digits == 32 {
            Ok(Self(dst))
        } else {
            Err(err())
        }
    }
}

impl From<Guid> for [u8; 16] {
    fn from(src: Guid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Guid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Guid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Guid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Guid> for u128 {
    fn from(src: Guid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Guid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Guid> for String {
    fn from(src: Guid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Guid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

/// Error constructing a [`Guid`] from bytes or text, or resolving a format
/// code.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The input byte sequence was not exactly 16 bytes long; carries the
    /// actual length.
    InvalidLength(usize),

    /// The input text did not reduce to 32 hex digits, or the format code
    /// was not one of `N`, `D`, `P`, `B`, `X`; carries the offending input.
    FormatNotRecognized(Box<str>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "invalid byte length {} (expected 16)", len)
            }
            Self::FormatNotRecognized(src) => {
                write!(f, "format \"{}\" not recognized", src)
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Guid;

    impl From<Guid> for uuid::Uuid {
        fn from(src: Guid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Guid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Guid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Guid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Guid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Guid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a GUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Guid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: &[(&str, &[u8])] = &[
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "01020304-0506-0708-090a-0b0c0d0e0f10",
                    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16],
                ),
                (
                    "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
                    &[
                        44, 164, 178, 206, 108, 19, 64, 212, 188, 207, 55, 210, 34, 130, 15, 111,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Guid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
