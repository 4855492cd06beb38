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

use core::iter::FromIterator;

use ordered_float::OrderedFloat;
use serde_json::Map as JsonMap;
use serde_json::Number as JsonNumber;
use serde_json::Value as JsonValue;

use crate::value::Dict;
use crate::value::Value;

macro_rules! from_number {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n.into())
                }
            }
        )*
    };
}

// every DSON number is an f64, so only lossless conversions are offered
from_number! {
    i8 i16 i32 u8 u16 u32 f32 f64
}

impl From<OrderedFloat<f64>> for Value {
    fn from(f: OrderedFloat<f64>) -> Self {
        Value::Number(f.0)
    }
}

impl From<bool> for Value {
    fn from(f: bool) -> Self {
        Value::Bool(f)
    }
}

impl From<String> for Value {
    fn from(f: String) -> Self {
        Value::String(f.into_bytes())
    }
}

impl From<&str> for Value {
    fn from(f: &str) -> Self {
        Value::String(f.as_bytes().to_vec())
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Self {
        Value::Dict(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(f: Vec<T>) -> Self {
        Value::Array(f.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(f: &[T]) -> Self {
        Value::Array(f.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Vec<u8>>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Dict::from_entries(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::None
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::None,
            JsonValue::Bool(v) => Value::Bool(*v),
            JsonValue::Number(v) => Value::Number(v.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(v) => Value::String(v.as_bytes().to_vec()),
            JsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Dict(
                obj.iter()
                    .map(|(k, v)| (k.as_bytes().to_vec(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        (&value).into()
    }
}

/// Converts a DSON value to a `serde_json::Value`.
///
/// Strings that are not valid UTF-8 are converted lossily. Numbers that JSON
/// cannot represent (infinities and NaN) become `null`. With duplicate dict
/// keys the last value wins, at the position of the first occurrence.
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::None => JsonValue::Null,
            Value::Bool(v) => JsonValue::Bool(v),
            Value::Number(v) => match JsonNumber::from_f64(v) {
                Some(n) => JsonValue::Number(n),
                None => JsonValue::Null,
            },
            Value::String(v) => match String::from_utf8(v) {
                Ok(s) => JsonValue::String(s),
                Err(e) => JsonValue::String(String::from_utf8_lossy(e.as_bytes()).into_owned()),
            },
            Value::Array(arr) => {
                let mut vals: Vec<JsonValue> = Vec::with_capacity(arr.len());
                for val in arr {
                    vals.push(val.into());
                }
                JsonValue::Array(vals)
            }
            Value::Dict(dict) => {
                let mut map = JsonMap::new();
                for (k, v) in dict.into_entries() {
                    let key = String::from_utf8_lossy(&k).into_owned();
                    map.insert(key, v.into());
                }
                JsonValue::Object(map)
            }
        }
    }
}
