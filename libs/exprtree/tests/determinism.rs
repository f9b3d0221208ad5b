mod common;

use common::{init_logging, render};
use exprtree::{parse, parse_with_config, Token};
use config::constants::ParserConfig;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn tree_serializes_as_nested_nodes() {
    init_logging();
    let result = parse("1+2");
    let value = serde_json::to_value(&result.tree).unwrap();
    assert_eq!(
        value,
        json!({
            "token": { "kind": "empty" },
            "children": [{
                "token": { "kind": "binary_operator", "value": "+" },
                "children": [
                    { "token": { "kind": "number", "value": 1.0 }, "children": [] },
                    { "token": { "kind": "number", "value": 2.0 }, "children": [] }
                ]
            }]
        })
    );
}

#[test]
fn json_output_is_stable() {
    let sources = ["1*2+3", "f(a, 'b')", "(1+", "x / (y - 2)"];
    for source in sources {
        let first = serde_json::to_string(&parse(source)).unwrap();
        let second = serde_json::to_string(&parse(source)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn default_config_matches_parse() {
    let source = "g(h(1), 2) * 3";
    let config = ParserConfig::default();
    assert_eq!(parse(source), parse_with_config(source, &config));
}

#[test]
fn call_depth_is_configurable() {
    let source = "a(b(c(d(1))))";
    let shallow = ParserConfig::new(10, 3).unwrap();
    let result = parse_with_config(source, &shallow);
    assert!(!result.is_ok());
    assert_eq!(result.tree.error_count(), 1);

    let result = parse_with_config(source, &ParserConfig::default());
    assert!(result.is_ok());
    assert_eq!(render(&result), "a(b(c(d(1))))");
}

#[test]
fn error_marker_text_matches_error() {
    let result = parse("2 * (3 +");
    let error = result.error.clone().unwrap();
    let markers: Vec<&Token> = result
        .tree
        .descendants(result.tree.root())
        .map(|id| result.tree.token(id))
        .filter(|token| token.is_error())
        .collect();
    assert_eq!(markers, vec![&Token::Error(error.to_string())]);
}
