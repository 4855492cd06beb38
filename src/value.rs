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

use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;

use ordered_float::OrderedFloat;

use crate::constants::*;
use crate::keypath::KeyPath;

/// Represents a decoded DSON value.
///
/// Every node exclusively owns its children, so a tree is released by
/// dropping its root (or by [`release`] on an `Option` handle).
#[derive(Clone, Default)]
pub enum Value {
    /// The `empty` literal
    #[default]
    None,
    /// `yes` or `no`
    Bool(bool),
    /// Escape-decoded string bytes, not necessarily valid UTF-8
    String(Vec<u8>),
    /// An octal literal, stored as a 64-bit float
    Number(f64),
    /// `so ... many`
    Array(Vec<Value>),
    /// `such ... wow`
    Dict(Dict),
}

/// Ordered key/value entries of a `such ... wow` block.
///
/// Keys are kept in input order and duplicates are not merged.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Dict {
    entries: Vec<(Vec<u8>, Value)>,
}

impl Dict {
    pub fn new() -> Dict {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_entries(entries: Vec<(Vec<u8>, Value)>) -> Dict {
        Self { entries }
    }

    pub fn push(&mut self, key: impl Into<Vec<u8>>, value: Value) {
        self.entries.push((key.into(), value));
    }

    /// Looks up `key` by linear scan. When a key occurs more than once the
    /// last entry wins.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let key = key.as_ref();
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k.as_slice() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|(k, _)| k.as_slice())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(Vec<u8>, Value)> {
        self.entries
    }
}

impl Debug for Dict {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter
            .debug_map()
            .entries(self.iter().map(|(k, v)| (k.escape_ascii().to_string(), v)))
            .finish()
    }
}

/// Releases the value held by `handle`, leaving it cleared.
///
/// Releasing an already cleared handle is a no-op, so calling this twice on
/// the same handle is safe.
pub fn release(handle: &mut Option<Value>) {
    drop(handle.take());
}

impl Eq for Value {}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(v1), Value::Bool(v2)) => v1 == v2,
            (Value::String(v1), Value::String(v2)) => v1 == v2,
            (Value::Number(v1), Value::Number(v2)) => OrderedFloat(*v1) == OrderedFloat(*v2),
            (Value::Array(arr1), Value::Array(arr2)) => arr1 == arr2,
            (Value::Dict(d1), Value::Dict(d2)) => d1 == d2,
            (_, _) => false,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::None => {}
            Value::Bool(v) => v.hash(state),
            Value::String(v) => v.hash(state),
            Value::Number(v) => OrderedFloat(*v).hash(state),
            Value::Array(v) => v.hash(state),
            Value::Dict(v) => v.hash(state),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
        match *self {
            Value::None => formatter.debug_tuple("None").finish(),
            Value::Bool(v) => formatter.debug_tuple("Bool").field(&v).finish(),
            Value::Number(v) => formatter.debug_tuple("Number").field(&v).finish(),
            Value::String(ref v) => formatter
                .debug_tuple("String")
                .field(&v.escape_ascii().to_string())
                .finish(),
            Value::Array(ref v) => {
                formatter.write_str("Array(")?;
                Debug::fmt(v, formatter)?;
                formatter.write_str(")")
            }
            Value::Dict(ref v) => {
                formatter.write_str("Dict(")?;
                Debug::fmt(v, formatter)?;
                formatter.write_str(")")
            }
        }
    }
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_none(&self) -> Option<()> {
        match self {
            Value::None => Some(()),
            _ => None,
        }
    }

    pub fn is_bool(&self) -> bool {
        self.as_bool().is_some()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_string(&self) -> bool {
        self.as_bytes().is_some()
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns the string contents if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|v| std::str::from_utf8(v).ok())
    }

    pub fn is_number(&self) -> bool {
        self.as_f64().is_some()
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        self.as_array().is_some()
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn is_dict(&self) -> bool {
        self.as_dict().is_some()
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => TYPE_NONE,
            Value::Bool(_) => TYPE_BOOLEAN,
            Value::String(_) => TYPE_STRING,
            Value::Number(_) => TYPE_NUMBER,
            Value::Array(_) => TYPE_ARRAY,
            Value::Dict(_) => TYPE_DICT,
        }
    }

    pub fn array_length(&self) -> Option<usize> {
        self.as_array().map(|array| array.len())
    }

    /// Looks up a dict entry; see [`Dict::get`].
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.as_dict().and_then(|dict| dict.get(key))
    }

    /// Returns the array element at `index`. Negative indexes count from the
    /// end of the array.
    pub fn index(&self, index: i32) -> Option<&Value> {
        let array = self.as_array()?;
        let len = array.len();
        let idx = if index < 0 {
            len.checked_sub(index.unsigned_abs() as usize)?
        } else {
            index as usize
        };
        array.get(idx)
    }

    /// Follows a chain of key paths, e.g. the result of
    /// [`parse_key_paths`](crate::keypath::parse_key_paths).
    ///
    /// Names select dict entries and indexes select array elements.
    /// An empty chain returns the value itself.
    ///
    /// ```rust
    /// use dson::keypath::parse_key_paths;
    /// use dson::parse_value;
    ///
    /// let value = parse_value(br#"such "a" is so 1 and such "b" is yes wow many wow"#).unwrap();
    /// let paths = parse_key_paths(b"{a,1,b}").unwrap();
    /// let found = value.get_by_keypath(paths.paths.iter()).unwrap();
    /// assert_eq!(found.as_bool(), Some(true));
    /// ```
    pub fn get_by_keypath<'a, 'b, I: Iterator<Item = &'b KeyPath<'b>>>(
        &'a self,
        keypaths: I,
    ) -> Option<&'a Value> {
        let mut current = self;
        for path in keypaths {
            current = match (path, current) {
                (KeyPath::Index(idx), Value::Array(_)) => current.index(*idx)?,
                (KeyPath::QuotedName(name) | KeyPath::Name(name), Value::Dict(dict)) => {
                    dict.get(&name[..])?
                }
                (_, _) => return None,
            };
        }
        Some(current)
    }
}
