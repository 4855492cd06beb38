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

use crate::constants::DEFAULT_MAX_DEPTH;

/// Configuration options for the DSON decoder.
///
/// # Default
///
/// Safe mode (no `\b` or `\u` escapes) and a nesting limit of 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether to accept the `\b` and `\u` string escapes.
    ///
    /// `\u` is followed by exactly six octal digits naming a code point,
    /// which is written to the string as UTF-8.
    ///
    /// # Default
    ///
    /// `false`
    pub unsafe_mode: bool,

    /// Maximum number of nested arrays and dicts.
    ///
    /// Deeper input fails with `DepthExceeded` instead of growing the call
    /// stack without bound.
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            unsafe_mode: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn with_unsafe_mode(mut self, unsafe_mode: bool) -> Self {
        self.unsafe_mode = unsafe_mode;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
