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

use dson::{parse_value, release, DecodeOptions, Decoder, Error, ParseErrorCode};

fn assert_released(input: &[u8], unsafe_mode: bool) {
    let alloc_info = mockalloc::record_allocs(|| {
        let options = DecodeOptions::default().with_unsafe_mode(unsafe_mode);
        let mut decoder = Decoder::with_options(input, options);
        let _ = decoder.decode();
    });
    assert!(alloc_info.num_allocs() > 0, "input: {}", input.escape_ascii());
    assert_eq!(
        alloc_info.num_allocs(),
        alloc_info.num_frees(),
        "input: {}",
        input.escape_ascii()
    );
    assert_eq!(alloc_info.num_leaks(), 0);
}

#[test]
fn test_failed_decode_releases_partial_tree() {
    let inputs: &[&[u8]] = &[
        br#"so "a" and so "b" many and oops"#,
        br#"so "a" and so "b" also such "c" is 1 many"#,
        br#"such "a" is "b", "c" is so 1 and 2 many, "d" is"#,
        br#"such "a" is so "x" many. "b" is such "c" is "y" wow. "d" is 8 wow"#,
        br#"so "much" also "wow" also "\q" many"#,
        br#"so "valid" also "\u00009x" many"#,
        br#"such "key" is "value", "key2" wow"#,
    ];
    for input in inputs {
        assert_released(input, true);
    }
}

#[test]
fn test_depth_error_releases_partial_tree() {
    let mut input = String::new();
    for i in 0..200 {
        input.push_str(&format!("such \"k{i}\" is so \"v{i}\" and "));
    }
    assert_released(input.as_bytes(), false);

    let err = parse_value(input.as_bytes()).unwrap_err();
    assert!(matches!(
        err,
        Error::Syntax(ParseErrorCode::DepthExceeded(128), _)
    ));
}

#[test]
fn test_successful_decode_is_fully_released() {
    let inputs: &[&[u8]] = &[
        br#"such "doge" is so 1 also "two" also such "x" is empty wow many wow"#,
        br#"so "\u000127ow" and "\b" and yes many"#,
        br#""string""#,
    ];
    for input in inputs {
        assert_released(input, true);
    }

    let alloc_info = mockalloc::record_allocs(|| {
        let mut handle = Some(parse_value(br#"so "a" and so "b" many many"#).unwrap());
        release(&mut handle);
        release(&mut handle);
    });
    assert_eq!(alloc_info.num_allocs(), alloc_info.num_frees());
    assert_eq!(alloc_info.num_leaks(), 0);
}
