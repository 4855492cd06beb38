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

use dson::keypath::parse_key_paths;
use dson::keypath::KeyPath;
use dson::{parse_value, Error, Value};

fn get_path(doc: &[u8], path: &str) -> Option<Value> {
    let value = parse_value(doc).unwrap();
    let paths = parse_key_paths(path.as_bytes()).unwrap();
    value.get_by_keypath(paths.paths.iter()).cloned()
}

#[test]
fn test_get_by_keypath() {
    let doc = br#"such
        "doge" is such "name" is "shibe". "age" is 13 wow,
        "toys" is so "ball" and "stick" also such "kind" is "bone" wow many,
        "much key" is yes
    wow"#;

    let tests = vec![
        ("{doge,name}", Some(Value::from("shibe"))),
        ("{doge,age}", Some(Value::Number(11.0))),
        ("{toys,0}", Some(Value::from("ball"))),
        ("{toys,-1,kind}", Some(Value::from("bone"))),
        ("{toys,-3}", Some(Value::from("ball"))),
        (r#"{"much key"}"#, Some(Value::Bool(true))),
        ("{toys,3}", None),
        ("{toys,-4}", None),
        ("{doge,0}", None),
        ("{toys,name}", None),
        ("{missing}", None),
        ("{doge,name,more}", None),
    ];
    for (path, expected) in tests {
        assert_eq!(get_path(doc, path), expected, "path: {path}");
    }

    // an empty chain selects the root
    let root = get_path(doc, "{}").unwrap();
    assert_eq!(root.as_dict().map(|dict| dict.len()), Some(3));
}

#[test]
fn test_keypath_sees_last_duplicate() {
    let doc = br#"such "a" is 1, "a" is so 2 many wow"#;
    assert_eq!(get_path(doc, "{a,0}"), Some(Value::Number(2.0)));
}

#[test]
fn test_keypath_on_scalars() {
    assert_eq!(get_path(b"yes", "{}"), Some(Value::Bool(true)));
    assert_eq!(get_path(b"yes", "{0}"), None);
    assert_eq!(get_path(b"\"abc\"", "{a}"), None);
}

#[test]
fn test_parse_key_paths_values() {
    let paths = parse_key_paths(br#"{such, -1, "wow such"}"#).unwrap();
    assert_eq!(paths.paths.len(), 3);
    assert!(matches!(&paths.paths[0], KeyPath::Name(name) if &name[..] == b"such"));
    assert_eq!(paths.paths[1], KeyPath::Index(-1));
    assert!(matches!(&paths.paths[2], KeyPath::QuotedName(name) if &name[..] == b"wow such"));

    for case in ["", "such", "{,}", "{1 2}"] {
        assert_eq!(
            parse_key_paths(case.as_bytes()),
            Err(Error::InvalidKeyPath),
            "path: {case}"
        );
    }
}
