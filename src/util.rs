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

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Token;

/// Appends `item`, growing `vec` first if it is full.
///
/// A failed allocation drops `item` and is reported as
/// `Error::AllocationFailed`, never as an abort.
#[inline]
pub(crate) fn try_push<T>(vec: &mut Vec<T>, item: T) -> Result<(), Error> {
    if vec.len() == vec.capacity() {
        vec.try_reserve(1).map_err(|_| Error::AllocationFailed)?;
    }
    vec.push(item);
    Ok(())
}

/// Decodes the raw bytes between the quotes of a DSON string.
///
/// `len` must be an upper bound of the decoded length, it is reserved once
/// up front. `idx` is the input offset of `data[0]` and is used for error
/// positions only.
pub(crate) fn parse_string(
    data: &[u8],
    len: usize,
    idx: usize,
    unsafe_mode: bool,
) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed)?;

    let mut i = 0;
    while i < data.len() {
        let byte = data[i];
        if byte != BS {
            buf.push(byte);
            i += 1;
            continue;
        }
        let pos = idx + i;
        let escaped = match data.get(i + 1) {
            Some(c) => *c,
            None => return Err(Error::Syntax(ParseErrorCode::EndOfInput, pos)),
        };
        i += 2;
        match escaped {
            b'"' => buf.push(QU),
            b'\\' => buf.push(BS),
            b'/' => buf.push(SD),
            b'f' => buf.push(FF),
            b'n' => buf.push(NN),
            b'r' => buf.push(RR),
            b't' => buf.push(TT),
            b'b' if unsafe_mode => buf.push(BB),
            b'u' if unsafe_mode => {
                let digits = match data.get(i..i + UNICODE_LEN) {
                    Some(digits) => digits,
                    None => return Err(Error::Syntax(ParseErrorCode::EndOfInput, pos)),
                };
                let malformed =
                    || Error::Syntax(ParseErrorCode::MalformedEscape(Token::new(digits)), pos);
                let point = decode_octal_escape(digits).ok_or_else(malformed)?;
                let mut utf8 = [0u8; 4];
                let n = write_utf8(point, &mut utf8).ok_or_else(malformed)?;
                buf.extend_from_slice(&utf8[..n]);
                i += UNICODE_LEN;
            }
            other => return Err(Error::Syntax(ParseErrorCode::UnrecognizedEscape(other), pos)),
        }
    }
    debug_assert!(buf.len() <= len);
    Ok(buf)
}

#[inline]
fn decode_octal_escape(digits: &[u8]) -> Option<u32> {
    let mut n = 0u32;
    for digit in digits {
        match digit {
            b'0'..=b'7' => n = (n << 3) | u32::from(digit - b'0'),
            _ => return None,
        }
    }
    Some(n)
}

/// Number of UTF-8 bytes needed to encode `point`, `None` past the last
/// Unicode code point.
#[inline]
pub(crate) fn utf8_len(point: u32) -> Option<usize> {
    match point {
        0..=0x7F => Some(1),
        0x80..=0x7FF => Some(2),
        0x800..=0xFFFF => Some(3),
        0x10000..=MAX_CODE_POINT => Some(4),
        _ => None,
    }
}

/// Writes `point` as UTF-8 into `buf` and returns the number of bytes used.
///
/// Surrogate code points are encoded like any other 3-byte point.
pub(crate) fn write_utf8(point: u32, buf: &mut [u8; 4]) -> Option<usize> {
    let len = utf8_len(point)?;
    match len {
        1 => {
            buf[0] = point as u8;
        }
        2 => {
            buf[0] = 0b1100_0000 | (point >> 6) as u8;
            buf[1] = 0b1000_0000 | (point & 0x3F) as u8;
        }
        3 => {
            buf[0] = 0b1110_0000 | (point >> 12) as u8;
            buf[1] = 0b1000_0000 | ((point >> 6) & 0x3F) as u8;
            buf[2] = 0b1000_0000 | (point & 0x3F) as u8;
        }
        _ => {
            buf[0] = 0b1111_0000 | (point >> 18) as u8;
            buf[1] = 0b1000_0000 | ((point >> 12) & 0x3F) as u8;
            buf[2] = 0b1000_0000 | ((point >> 6) & 0x3F) as u8;
            buf[3] = 0b1000_0000 | (point & 0x3F) as u8;
        }
    }
    Some(len)
}
