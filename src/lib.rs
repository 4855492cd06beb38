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

//! `dson` decodes [DSON](https://dogeon.xyz/), a data-interchange format that
//! mirrors `JSON` with English keywords and octal numbers, into an owned
//! value tree.
//!
//! ## Syntax
//!
//! | DSON | JSON |
//! |---|---|
//! | `such "key" is <value>, "key" is <value> wow` | `{"key": <value>, "key": <value>}` |
//! | `so <value> and <value> also <value> many` | `[<value>, <value>, <value>]` |
//! | `yes` / `no` | `true` / `false` |
//! | `empty` | `null` |
//! | `"much \"escape\""` | `"much \"escape\""` |
//! | `-12.4 very 3` | `-10.5 * 8^3` |
//!
//! - Dict entries are separated by any of `,` `.` `!` `?`.
//! - Array elements are separated by `and` or `also`.
//! - Numbers are octal. A fraction digit at position `k` (from 0) is worth
//!   `digit / (8 * 2^k)`, so `0.4` is `0.5` and `0.44` is `0.75`.
//!   `very` (case-insensitive) introduces an octal power-of-eight exponent.
//! - Strings accept the escapes `\"` `\\` `\/` `\f` `\n` `\r` `\t`. In unsafe
//!   mode `\b` is accepted as well, and `\u` followed by six octal digits
//!   names a code point that is written to the string as UTF-8.
//! - String contents are bytes; raw bytes are not validated.
//!
//! ## Example
//!
//! ```rust
//! use dson::parse_value;
//! use dson::Value;
//!
//! let value = parse_value(br#"such "doge" is so 1 also 2.4 many! "shibe" is yes wow"#).unwrap();
//! assert_eq!(
//!     value.get("doge"),
//!     Some(&Value::Array(vec![Value::Number(1.0), Value::Number(2.5)]))
//! );
//! assert_eq!(value.get("shibe"), Some(&Value::Bool(true)));
//! ```
//!
//! ## Ownership
//!
//! A decoded tree is owned by the caller. Dropping the root releases every
//! node; [`release`] does the same on an `Option` handle and leaves it
//! cleared. A failed decode never returns a partial tree, and everything it
//! allocated is released before the error is returned.

#![allow(clippy::uninlined_format_args)]

mod constants;
mod cursor;
mod error;
mod from;
pub mod keypath;
mod options;
mod parser;
mod util;
mod value;

pub use error::Error;
pub use error::ParseErrorCode;
pub use error::Result;
pub use error::Token;
pub use options::DecodeOptions;
pub use parser::decode;
pub use parser::parse_value;
pub use parser::Decoder;
pub use value::*;
