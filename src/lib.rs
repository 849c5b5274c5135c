//! A 128-bit GUID value type with random (version 4) generation
//!
//! ```rust
//! use guid4::guid4;
//!
//! let guid = guid4();
//! println!("{}", guid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", guid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 4122 Section 4.4](https://tools.ietf.org/html/rfc4122#section-4.4).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            random             |  ver  |        random         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          random                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            random                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0100`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 122 bits are filled with cryptographically strong random
//!   numbers drawn freshly on each call.
//!
//! # Text representations
//!
//! A GUID renders into the five conventional layouts, selected by a
//! one-letter format code:
//!
//! ```rust
//! use guid4::{Format, Guid};
//!
//! let guid = "01020304-0506-0708-090a-0b0c0d0e0f10".parse::<Guid>()?;
//! assert_eq!(
//!     guid.format(Format::Braced).to_string(),
//!     "{01020304-0506-0708-090a-0b0c0d0e0f10}"
//! );
//! assert_eq!(
//!     guid.format("X".parse()?).to_string(),
//!     "{0x01020304,0x0506,0x0708,{0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,0x10}}"
//! );
//! # Ok::<(), guid4::Error>(())
//! ```
//!
//! Parsing is permissive on punctuation: any of the five layouts above (hex
//! digits in either case) is accepted by [`str::parse`], as long as the text
//! boils down to exactly 32 hexadecimal digits once the `0x` prefixes and the
//! `-`, `(`, `)`, `{`, `}`, `,` separators are removed:
//!
//! ```rust
//! use guid4::Guid;
//!
//! let a = "0102030405060708090A0B0C0D0E0F10".parse::<Guid>()?;
//! let b = "(01020304-0506-0708-090a-0b0c0d0e0f10)".parse::<Guid>()?;
//! assert_eq!(a, b);
//! # Ok::<(), guid4::Error>(())
//! ```

mod guid;
pub use guid::{Error, Guid};

mod fmt;
pub use fmt::{Format, Formatted};

mod v4;
pub use v4::guid4;
