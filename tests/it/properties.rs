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

use dson::{parse_value, Dict, Value};
use proptest::prelude::*;

fn whitespace_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n', '\r']), 1..3)
        .prop_map(|v| v.into_iter().collect())
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,6}"
}

proptest! {
    #[test]
    fn test_octal_integer(n in 0u64..(1u64 << 45), negative in any::<bool>()) {
        let source = if negative { format!("-{:o}", n) } else { format!("{:o}", n) };
        let value = parse_value(source.as_bytes()).unwrap();
        let expected = if negative { -(n as f64) } else { n as f64 };
        prop_assert_eq!(value, Value::Number(expected));
    }

    #[test]
    fn test_octal_fraction(int in 0u32..4096, digits in prop::collection::vec(0u8..8, 1..12)) {
        let fraction: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let source = format!("{:o}.{}", int, fraction);

        let mut expected = f64::from(int);
        let mut divisor = 8.0;
        for d in &digits {
            expected += f64::from(*d) / divisor;
            divisor *= 2.0;
        }
        prop_assert_eq!(parse_value(source.as_bytes()).unwrap(), Value::Number(expected));
    }

    #[test]
    fn test_octal_exponent(mantissa in 1u32..512, power in 0u32..16, negative in any::<bool>()) {
        let sign = if negative { "-" } else { "" };
        let source = format!("{:o} very {}{:o}", mantissa, sign, power);

        let power = if negative { -f64::from(power) } else { f64::from(power) };
        let expected = f64::from(mantissa) * 8f64.powf(power);
        prop_assert_eq!(parse_value(source.as_bytes()).unwrap(), Value::Number(expected));
    }

    #[test]
    fn test_array_separators(
        items in prop::collection::vec((0u32..64, any::<bool>(), whitespace_strategy()), 0..8)
    ) {
        let mut source = String::from("so ");
        for (i, (n, also, ws)) in items.iter().enumerate() {
            if i > 0 {
                source.push_str(if *also { "also" } else { "and" });
                source.push_str(ws);
            }
            source.push_str(&format!("{:o}{}", n, ws));
        }
        source.push_str("many");

        let expected: Vec<Value> = items.iter().map(|(n, _, _)| Value::Number(f64::from(*n))).collect();
        prop_assert_eq!(parse_value(source.as_bytes()).unwrap(), Value::Array(expected));
    }

    #[test]
    fn test_dict_separators(
        entries in prop::collection::vec(
            (key_strategy(), 0u32..64, prop::sample::select(vec![',', '.', '!', '?'])),
            1..8,
        ),
        trailing in any::<bool>()
    ) {
        let mut source = String::from("such ");
        for (i, (key, n, sep)) in entries.iter().enumerate() {
            if i > 0 {
                source.push(*sep);
                source.push(' ');
            }
            source.push_str(&format!("\"{}\" is {:o} ", key, n));
        }
        if trailing {
            source.push_str("! ");
        }
        source.push_str("wow");

        let expected: Dict = entries
            .iter()
            .map(|(key, n, _)| (key.clone(), Value::Number(f64::from(*n))))
            .collect();
        let value = parse_value(source.as_bytes()).unwrap();
        let dict = value.as_dict().unwrap();
        prop_assert_eq!(dict, &expected);

        // lookups see the last occurrence of a key
        for (key, _, _) in &entries {
            let last = entries
                .iter()
                .rev()
                .find(|(k, _, _)| k == key)
                .map(|(_, n, _)| Value::Number(f64::from(*n)));
            prop_assert_eq!(dict.get(key), last.as_ref());
        }
    }
}
