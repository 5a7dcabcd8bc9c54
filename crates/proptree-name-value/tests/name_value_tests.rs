// Dweve PropTree - Ordered Property Trees and Text Encodings
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for proptree-name-value.

use proptest::prelude::*;
use proptree_core::{Tree, TreeErrorKind};
use proptree_name_value::{
    from_name_value, from_name_value_reader, to_name_value, to_name_value_writer, tokenize,
    NameValueConfig,
};
use proptree_test::{fixtures, strategies};

fn indented() -> NameValueConfig {
    NameValueConfig {
        indented: true,
        ..Default::default()
    }
}

#[test]
fn test_all_fixtures_round_trip() {
    for (name, fixture) in fixtures::all() {
        let tree = fixture();
        for config in [NameValueConfig::default(), indented()] {
            let text = to_name_value(&tree, &config);
            let back = from_name_value(&text, &config)
                .unwrap_or_else(|e| panic!("fixture {name} failed to decode: {e}"));
            assert_eq!(back, tree, "fixture {name} via {text:?}");
        }
    }
}

#[test]
fn test_config_fixture_text() {
    let text = to_name_value(&fixtures::config(), &NameValueConfig::default());
    assert_eq!(
        text,
        r#"server={host="localhost",port="8080"},debug="true""#
    );
}

#[test]
fn test_escaped_assignment_is_not_structural() {
    assert_eq!(tokenize(r#"a\="x""#, '=', ',').unwrap(), r#"a\="x""#);
    let tree = from_name_value(r#"a\="x""#, &NameValueConfig::default()).unwrap();
    assert_eq!(tree.len(), 1);
    let (key, value) = &tree.children()[0];
    assert_eq!(key, "a=\"x\"");
    assert_eq!(value.value(), Some(""));
}

#[test]
fn test_pre_escaped_values_round_trip() {
    let tree = from_name_value(r#"a="x\,y\=z\"q""#, &NameValueConfig::default()).unwrap();
    assert_eq!(tree.get("a").unwrap().value(), Some("x,y=z\"q"));
}

#[test]
fn test_unquoted_values() {
    let tree = from_name_value("a=1,b={c=hello,d=2}", &NameValueConfig::default()).unwrap();
    assert_eq!(tree.get("a").unwrap().value(), Some("1"));
    assert_eq!(tree.get("b").unwrap().get("c").unwrap().value(), Some("hello"));
}

#[test]
fn test_repeated_keys_keep_order() {
    let tree = from_name_value(r#"x="1",x="2",x="3""#, &NameValueConfig::default()).unwrap();
    let values: Vec<_> = tree.iter().filter_map(|(_, v)| v.value()).collect();
    assert_eq!(values, ["1", "2", "3"]);
}

#[test]
fn test_stream_round_trip() {
    let tree = fixtures::config();
    let mut buffer = Vec::new();
    to_name_value_writer(&tree, &mut buffer, &indented()).unwrap();
    let back = from_name_value_reader(buffer.as_slice(), &indented()).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_malformed_inputs() {
    let config = NameValueConfig::default();
    for input in [r#"a="x"#, "a={b=1", "a=1}", r#"a="1"{b=2}"#] {
        let err = from_name_value(input, &config).unwrap_err();
        assert_eq!(err.kind, TreeErrorKind::MalformedInput, "input {input:?}");
        assert!(err.context.is_some());
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(from_name_value("", &NameValueConfig::default()).unwrap(), Tree::new());
    assert_eq!(to_name_value(&Tree::new(), &NameValueConfig::default()), "");
}

proptest! {
    #[test]
    fn prop_round_trip(tree in strategies::tree()) {
        let config = NameValueConfig::default();
        let text = to_name_value(&tree, &config);
        prop_assert_eq!(from_name_value(&text, &config).unwrap(), tree);
    }

    #[test]
    fn prop_round_trip_indented(tree in strategies::tree()) {
        let config = indented();
        let text = to_name_value(&tree, &config);
        prop_assert_eq!(from_name_value(&text, &config).unwrap(), tree);
    }

    #[test]
    fn prop_safe_text_only_substitutes(text in "[a-z0-9=, ]{0,40}") {
        let expected = text.replace(|c: char| c == '=' || c == ',', " ");
        prop_assert_eq!(tokenize(&text, '=', ',').unwrap(), expected);
    }
}
