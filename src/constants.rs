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

// DSON text keywords
pub(crate) const KW_YES: &str = "yes";
pub(crate) const KW_NO: &str = "no";
pub(crate) const KW_EMPTY: &str = "empty";
pub(crate) const KW_SO: &str = "so";
pub(crate) const KW_AND: &str = "and";
pub(crate) const KW_ALSO: &str = "also";
pub(crate) const KW_MANY: &str = "many";
pub(crate) const KW_SUCH: &str = "such";
pub(crate) const KW_IS: &str = "is";
pub(crate) const KW_WOW: &str = "wow";
pub(crate) const KW_VERY: &str = "very";

// `\u` is followed by six octal digits
pub(crate) const UNICODE_LEN: usize = 6;
// `\u` + six digits decode to at most four UTF-8 bytes
pub(crate) const UNICODE_ESCAPE_OVERHEAD: usize = 2 + UNICODE_LEN - 4;
pub(crate) const MAX_CODE_POINT: u32 = 0x10FFFF;

// DSON text escape characters constants
pub(crate) const BS: u8 = b'\x5C'; // \\ Backslash
pub(crate) const QU: u8 = b'\x22'; // \" Double quotation mark
pub(crate) const SD: u8 = b'\x2F'; // \/ Slash or divide
pub(crate) const BB: u8 = b'\x08'; // \b Backspace
pub(crate) const FF: u8 = b'\x0C'; // \f Formfeed Page Break
pub(crate) const NN: u8 = b'\x0A'; // \n Newline
pub(crate) const RR: u8 = b'\x0D'; // \r Carriage Return
pub(crate) const TT: u8 = b'\x09'; // \t Horizontal Tab

pub(crate) const DEFAULT_MAX_DEPTH: usize = 128;
// bytes of input quoted in an `UnexpectedToken` error
pub(crate) const SNIPPET_LEN: usize = 4;

pub(crate) const TYPE_STRING: &str = "string";
pub(crate) const TYPE_NONE: &str = "none";
pub(crate) const TYPE_BOOLEAN: &str = "boolean";
pub(crate) const TYPE_NUMBER: &str = "number";
pub(crate) const TYPE_ARRAY: &str = "array";
pub(crate) const TYPE_DICT: &str = "dict";
