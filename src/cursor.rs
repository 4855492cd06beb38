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

use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;

/// Byte-level read primitives over a bounded input buffer.
///
/// Reads never go past `end`; `peek` reports a NUL sentinel there instead.
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    idx: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Cursor<'a> {
        Self {
            buf,
            idx: 0,
            end: buf.len(),
        }
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    #[inline]
    pub(crate) fn peek_at(&self, k: usize) -> u8 {
        match self.idx.checked_add(k) {
            Some(i) if i < self.end => self.buf[i],
            _ => 0,
        }
    }

    /// Returns the next `n` bytes and advances past them.
    #[inline]
    pub(crate) fn consume(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.end - self.idx < n {
            return Err(self.error(ParseErrorCode::EndOfInput));
        }
        let data = &self.buf[self.idx..self.idx + n];
        self.idx += n;
        Ok(data)
    }

    #[inline]
    pub(crate) fn step(&mut self) {
        if self.idx < self.end {
            self.idx += 1;
        }
    }

    #[inline]
    pub(crate) fn skip_whitespace(&mut self) {
        while self.idx < self.end {
            match self.buf[self.idx] {
                b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C' => self.idx += 1,
                _ => break,
            }
        }
    }

    #[inline]
    pub(crate) fn starts_with(&self, prefix: &[u8]) -> bool {
        self.buf[self.idx..self.end].starts_with(prefix)
    }

    /// Up to `n` bytes from the current offset, without advancing.
    #[inline]
    pub(crate) fn snippet(&self, n: usize) -> &'a [u8] {
        let to = self.end.min(self.idx.saturating_add(n));
        &self.buf[self.idx..to]
    }

    /// Input bytes between two offsets.
    #[inline]
    pub(crate) fn slice(&self, from: usize, to: usize) -> &'a [u8] {
        &self.buf[from..to]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.idx >= self.end
    }

    /// Offset of the next byte, counted from the start of input.
    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.idx
    }

    #[inline]
    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.idx = offset.min(self.end);
    }

    pub(crate) fn error(&self, code: ParseErrorCode) -> Error {
        Error::Syntax(code, self.offset())
    }
}
