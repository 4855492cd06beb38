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
use super::cursor::Cursor;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::error::Token;
use super::options::DecodeOptions;
use super::util::parse_string;
use super::util::try_push;
use super::value::Dict;
use super::value::Value;

/// Decodes the first DSON value in `buf[..len]`.
///
/// `buf[len]` must be a NUL terminator, otherwise the input is rejected with
/// `Error::InvalidInput` before any parsing happens. `unsafe_mode` enables
/// the `\b` and `\u` string escapes.
///
/// Bytes after the first value are not validated, use [`Decoder`] to check
/// how much of the input was consumed.
pub fn decode(buf: &[u8], len: usize, unsafe_mode: bool) -> Result<Value> {
    match buf.get(len) {
        Some(0) => {}
        _ => return Err(Error::InvalidInput),
    }
    let options = DecodeOptions::default().with_unsafe_mode(unsafe_mode);
    let mut decoder = Decoder::with_options(&buf[..len], options);
    decoder.decode()
}

/// Parses DSON text to a `Value`.
///
/// The whole buffer must hold exactly one value, optionally surrounded by
/// whitespace. Uses the default [`DecodeOptions`].
pub fn parse_value(buf: &[u8]) -> Result<Value> {
    let mut decoder = Decoder::new(buf);
    let value = decoder.decode()?;
    decoder.finish()?;
    Ok(value)
}

/// Recursive-descent DSON decoder over an in-memory buffer.
///
/// Every call to [`Decoder::decode`] reads one value, so a buffer holding
/// several whitespace separated values can be decoded one by one.
///
/// ```rust
/// use dson::DecodeOptions;
/// use dson::Decoder;
///
/// let options = DecodeOptions::default().with_unsafe_mode(true);
/// let mut decoder = Decoder::with_options(br#""\u000127" 12"#, options);
/// let first = decoder.decode().unwrap();
/// assert_eq!(first.as_str(), Some("W"));
/// let second = decoder.decode().unwrap();
/// assert_eq!(second.as_f64(), Some(10.0));
/// decoder.finish().unwrap();
/// ```
pub struct Decoder<'a> {
    cursor: Cursor<'a>,
    options: DecodeOptions,
    depth: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(buf: &'a [u8]) -> Decoder<'a> {
        Self::with_options(buf, DecodeOptions::default())
    }

    pub fn with_options(buf: &'a [u8], options: DecodeOptions) -> Decoder<'a> {
        Self {
            cursor: Cursor::new(buf),
            options,
            depth: 0,
        }
    }

    /// Decodes the next value. Leading whitespace is skipped.
    ///
    /// On failure nothing decoded so far is returned, everything allocated by
    /// this call has already been released.
    pub fn decode(&mut self) -> Result<Value> {
        self.depth = 0;
        self.cursor.skip_whitespace();
        self.parse_dson_value()
    }

    /// Offset of the first byte not consumed yet.
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Checks that only whitespace is left in the input.
    pub fn finish(&mut self) -> Result<()> {
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(self.cursor.error(ParseErrorCode::TrailingCharacters));
        }
        Ok(())
    }

    fn parse_dson_value(&mut self) -> Result<Value> {
        match self.cursor.peek() {
            b'"' => self.parse_dson_string().map(Value::String),
            b'-' | b'0'..=b'7' => self.parse_dson_number().map(Value::Number),
            b'y' | b'n' => self.parse_dson_bool(),
            b'e' => self.parse_dson_empty(),
            b's' => match self.cursor.peek_at(1) {
                b'o' => self.parse_dson_array(),
                b'u' => self.parse_dson_dict(),
                _ => Err(self.cursor.error(ParseErrorCode::UnrecognizedValue(b's'))),
            },
            _ if self.cursor.is_at_end() => Err(self.cursor.error(ParseErrorCode::EndOfInput)),
            c => Err(self.cursor.error(ParseErrorCode::UnrecognizedValue(c))),
        }
    }

    /// Consumes `keyword`, reporting a mismatch at the keyword's offset.
    #[inline]
    fn must_be(&mut self, keyword: &'static str) -> Result<()> {
        let start = self.cursor.offset();
        let data = self.cursor.consume(keyword.len())?;
        if data != keyword.as_bytes() {
            return Err(unexpected(keyword, data, start));
        }
        Ok(())
    }

    #[inline]
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self
                .cursor
                .error(ParseErrorCode::DepthExceeded(self.options.max_depth)));
        }
        Ok(())
    }

    #[inline]
    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_dson_empty(&mut self) -> Result<Value> {
        self.must_be(KW_EMPTY)?;
        Ok(Value::None)
    }

    fn parse_dson_bool(&mut self) -> Result<Value> {
        if self.cursor.peek() == b'y' {
            self.must_be(KW_YES)?;
            Ok(Value::Bool(true))
        } else {
            self.must_be(KW_NO)?;
            Ok(Value::Bool(false))
        }
    }

    #[inline]
    fn check_octal(&self) -> bool {
        is_octal(self.cursor.peek())
    }

    /// Reads a run of octal digits as a base-8 integer.
    #[inline]
    fn step_octal(&mut self) -> f64 {
        let mut n = 0.0;
        while self.check_octal() {
            n = n * 8.0 + f64::from(self.cursor.peek() - b'0');
            self.cursor.step();
        }
        n
    }

    /// Parse a DSON number.
    ///
    /// Numbers are octal: an optional `-`, an integer part that is either a
    /// lone `0` or a run of octal digits, an optional fraction and an
    /// optional `very` exponent. The k-th fraction digit (from 0) is worth
    /// `digit / (8 * 2^k)`, so `.1` is `0.125` and `.11` is `0.1875`.
    /// `n very e` is `n * 8^e`, with `e` octal as well.
    ///
    /// Whitespace may appear after the sign, before the `.`, around `very`
    /// and between the exponent sign and its digits. A `.` that is not
    /// directly followed by an octal digit does not belong to the number,
    /// which lets a dict use `.` as an entry separator right after a number.
    fn parse_dson_number(&mut self) -> Result<f64> {
        let mut negative = false;
        if self.cursor.peek() == b'-' {
            negative = true;
            self.cursor.step();
            self.cursor.skip_whitespace();
        }

        let mut n = match self.cursor.peek() {
            b'0' => {
                self.cursor.step();
                0.0
            }
            b'1'..=b'7' => self.step_octal(),
            c => return Err(self.cursor.error(ParseErrorCode::MalformedNumber(c))),
        };

        let mark = self.cursor.offset();
        self.cursor.skip_whitespace();
        if self.cursor.peek() == b'.' && is_octal(self.cursor.peek_at(1)) {
            self.cursor.step();
            let mut divisor = 8.0;
            while self.check_octal() {
                n += f64::from(self.cursor.peek() - b'0') / divisor;
                divisor *= 2.0;
                self.cursor.step();
            }
        } else {
            self.cursor.set_offset(mark);
        }

        let mark = self.cursor.offset();
        self.cursor.skip_whitespace();
        if matches!(self.cursor.peek(), b'v' | b'V') {
            let start = self.cursor.offset();
            let data = self.cursor.consume(KW_VERY.len())?;
            if !data.eq_ignore_ascii_case(KW_VERY.as_bytes()) {
                return Err(unexpected(KW_VERY, data, start));
            }

            self.cursor.skip_whitespace();
            let mut power_negative = false;
            match self.cursor.peek() {
                b'+' => self.cursor.step(),
                b'-' => {
                    power_negative = true;
                    self.cursor.step();
                }
                _ => {}
            }

            self.cursor.skip_whitespace();
            if !self.check_octal() {
                let c = self.cursor.peek();
                return Err(self.cursor.error(ParseErrorCode::MalformedNumber(c)));
            }
            let mut power = self.step_octal();
            if power_negative {
                power = -power;
            }
            if n != 0.0 {
                n *= 8f64.powf(power);
            }
        } else {
            self.cursor.set_offset(mark);
        }

        Ok(if negative { -n } else { n })
    }

    /// Parse a DSON string.
    ///
    /// A first pass finds the closing quote and counts how many source bytes
    /// the escapes add over their decoded form. That gives an upper bound of
    /// the decoded length, so the second pass decodes into a buffer that is
    /// allocated once and never grows.
    fn parse_dson_string(&mut self) -> Result<Vec<u8>> {
        match self.cursor.peek() {
            b'"' => self.cursor.step(),
            _ if self.cursor.is_at_end() => {
                return Err(self.cursor.error(ParseErrorCode::EndOfInput));
            }
            _ => {
                let found = self.cursor.snippet(SNIPPET_LEN);
                return Err(unexpected("\"", found, self.cursor.offset()));
            }
        }

        let start_idx = self.cursor.offset();
        let mut overhead = 0;
        loop {
            match self.cursor.consume(1)?[0] {
                b'"' => break,
                b'\\' => {
                    if self.cursor.consume(1)?[0] == b'u' {
                        self.cursor.consume(UNICODE_LEN)?;
                        overhead += UNICODE_ESCAPE_OVERHEAD;
                    } else {
                        overhead += 1;
                    }
                }
                _ => {}
            }
        }

        let data = self.cursor.slice(start_idx, self.cursor.offset() - 1);
        parse_string(
            data,
            data.len() - overhead,
            start_idx,
            self.options.unsafe_mode,
        )
    }

    /// Parse a DSON array, `so <value> and <value> also <value> many`.
    ///
    /// `and` and `also` are interchangeable separators. Elements parsed
    /// before a failure are dropped together with the partial array.
    fn parse_dson_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.must_be(KW_SO)?;

        let mut values = Vec::new();
        self.cursor.skip_whitespace();
        if self.cursor.peek() != b'm' {
            loop {
                let value = self.parse_dson_value()?;
                try_push(&mut values, value)?;

                self.cursor.skip_whitespace();
                if self.cursor.peek() != b'a' {
                    break;
                }
                if self.cursor.starts_with(KW_AND.as_bytes()) {
                    self.cursor.consume(KW_AND.len())?;
                } else if self.cursor.starts_with(KW_ALSO.as_bytes()) {
                    self.cursor.consume(KW_ALSO.len())?;
                } else {
                    let found = self.cursor.snippet(KW_ALSO.len());
                    return Err(unexpected(KW_ALSO, found, self.cursor.offset()));
                }
                self.cursor.skip_whitespace();
            }
        }

        self.must_be(KW_MANY)?;
        self.leave();
        Ok(Value::Array(values))
    }

    /// Parse a DSON dict, `such "key" is <value>, "key" is <value> wow`.
    ///
    /// Entries are separated by one of `,` `.` `!` `?`, a separator may also
    /// trail the last entry. At least one entry is required. Keys and values
    /// parsed before a failure are dropped together with the partial dict.
    fn parse_dson_dict(&mut self) -> Result<Value> {
        self.enter()?;
        self.must_be(KW_SUCH)?;

        let mut entries = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            let key = self.parse_dson_string()?;

            self.cursor.skip_whitespace();
            self.must_be(KW_IS)?;

            self.cursor.skip_whitespace();
            let value = self.parse_dson_value()?;
            try_push(&mut entries, (key, value))?;

            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                b',' | b'.' | b'!' | b'?' => {
                    self.cursor.step();
                    self.cursor.skip_whitespace();
                    if self.cursor.peek() == b'w' {
                        break;
                    }
                }
                _ => break,
            }
        }

        self.must_be(KW_WOW)?;
        self.leave();
        Ok(Value::Dict(Dict::from_entries(entries)))
    }
}

fn unexpected(expected: &'static str, found: &[u8], offset: usize) -> Error {
    Error::Syntax(
        ParseErrorCode::UnexpectedToken {
            expected,
            found: Token::new(found),
        },
        offset,
    )
}

#[inline]
fn is_octal(c: u8) -> bool {
    matches!(c, b'0'..=b'7')
}
