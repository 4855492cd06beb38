// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt::Display;

const TOKEN_CAPACITY: usize = 8;

/// A short copy of the input bytes found where something else was expected.
///
/// Stored inline so that building an error never allocates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token {
    bytes: [u8; TOKEN_CAPACITY],
    len: u8,
}

impl Token {
    pub fn new(data: &[u8]) -> Token {
        let len = data.len().min(TOKEN_CAPACITY);
        let mut bytes = [0; TOKEN_CAPACITY];
        bytes[..len].copy_from_slice(&data[..len]);
        Token {
            bytes,
            len: len as u8,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for &c in self.as_bytes() {
            if c == b' ' || c.is_ascii_graphic() {
                write!(f, "{}", c as char)?;
            } else {
                write!(f, "{}", c.escape_ascii())?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "\"{}\"", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorCode {
    EndOfInput,
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },
    UnrecognizedValue(u8),
    MalformedNumber(u8),
    MalformedEscape(Token),
    UnrecognizedEscape(u8),
    DepthExceeded(usize),
    TrailingCharacters,
}

pub type Result<T> = core::result::Result<T, Error>;

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseErrorCode::EndOfInput => f.write_str("EOF while parsing a value"),
            ParseErrorCode::UnexpectedToken { expected, found } => {
                write!(f, "expected '{}', got '{}'", expected, found)
            }
            ParseErrorCode::UnrecognizedValue(c) => {
                write!(f, "unable to determine value type at '{}'", c.escape_ascii())
            }
            ParseErrorCode::MalformedNumber(c) => {
                write!(f, "bad octal character: '{}'", c.escape_ascii())
            }
            ParseErrorCode::MalformedEscape(digits) => {
                write!(f, "malformed unicode escape \\u{}", digits)
            }
            ParseErrorCode::UnrecognizedEscape(c) => {
                write!(f, "unrecognized or forbidden escape: \\{}", c.escape_ascii())
            }
            ParseErrorCode::DepthExceeded(max) => {
                write!(f, "nesting deeper than {} levels", max)
            }
            ParseErrorCode::TrailingCharacters => f.write_str("trailing characters"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    Syntax(ParseErrorCode, usize),
    InvalidInput,
    AllocationFailed,
    InvalidKeyPath,
}

impl Error {
    /// Byte offset from the start of input, for errors raised while parsing.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax(_, pos) => Some(*pos),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&ParseErrorCode> {
        match self {
            Error::Syntax(code, _) => Some(code),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
            Error::InvalidInput => f.write_str("input was not NUL-terminated"),
            Error::AllocationFailed => f.write_str("memory allocation failed"),
            Error::InvalidKeyPath => f.write_str("invalid key path"),
        }
    }
}

impl std::error::Error for Error {}
