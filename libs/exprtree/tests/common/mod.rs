//! Helpers shared by the integration tests.
#![allow(dead_code)]

use exprtree::{GroupType, NodeId, ParseResult, Token, Tree};

/// Install a test logger once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render the subtree at `id` as an s-expression.
///
/// Operators render as `(+ a b)`, bracket groups as `[...]`, calls as
/// `name(arg, ...)`, text as `"..."`.
pub fn sexpr(tree: &Tree, id: NodeId) -> String {
    let children: Vec<String> = tree.children(id).iter().map(|&c| sexpr(tree, c)).collect();
    match tree.token(id) {
        Token::Number(value) => value.to_string(),
        Token::Identity(name) => name.clone(),
        Token::Text(text) => format!("{text:?}"),
        Token::BinaryOperator(op) => format!("({op} {})", children.join(" ")),
        Token::Group(GroupType::Paren) => format!("[{}]", children.join(" ")),
        Token::Group(GroupType::Scope) | Token::Empty => children.join(" "),
        Token::Function { name, arguments } => {
            let args: Vec<String> = arguments.iter().map(|a| sexpr(a, a.root())).collect();
            format!("{name}({})", args.join(", "))
        }
        Token::Error(_) => "<error>".to_string(),
    }
}

/// Parse `source`, assert success and render the expression.
pub fn parse_ok(source: &str) -> String {
    init_logging();
    let result = exprtree::parse(source);
    assert!(result.is_ok(), "{source:?} failed: {:?}", result.error);
    assert_eq!(result.tree.error_count(), 0);
    render(&result)
}

/// Render the whole result, root included.
pub fn render(result: &ParseResult) -> String {
    sexpr(&result.tree, result.tree.root())
}
