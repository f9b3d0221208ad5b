//! # Operator Insertion
//!
//! Places an incoming operator into the partially built tree so that node
//! depth reflects binding strength.
//!
//! ## Operator Precedence
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | + - | Left |
//! | 2 | * / | Left |
//!
//! The cursor sits on the operator that is still collecting its right
//! operand. For the incoming operator:
//!
//! 1. tighter than the cursor: wrap the cursor's last operand and descend;
//! 2. looser than the cursor: climb past `+`/`-` ancestors first;
//! 3. then wrap the cursor (or, when the cursor is not an operator, its last
//!    child) so the existing subtree becomes the left operand.
//!
//! Equal precedence never rotates, so `1-2-3` becomes `(1-2)-3`.

use super::Builder;
use crate::error::ParseErrorKind;
use crate::token::{compare_precedence, BinaryOperator, Precedence, Token};
use crate::tree::{NodeId, Tree};
use std::cmp::Ordering;

/// Insert `op` at the cursor and move the cursor to the new operator node.
///
/// ## Parameters
///
/// - `builder`: Tree under construction; its cursor sits on the operator
///   still collecting a right operand, or on the node holding the operand
/// - `op`: Incoming operator
///
/// ## Returns
///
/// `Ok(())` with the cursor on the new operator.
///
/// ## Errors
///
/// [`ParseErrorKind::MissingOperand`] when there is nothing to its left.
pub(super) fn insert_operator(
    builder: &mut Builder,
    op: BinaryOperator,
) -> Result<(), ParseErrorKind> {
    let token = Token::BinaryOperator(op);

    if let Some(current) = builder.current().as_operator() {
        match compare_precedence(current, op) {
            Ordering::Greater => {
                if let Some(last) = builder.tree.last_element(builder.cursor) {
                    log::debug!("'{op}' binds tighter than '{current}', descending");
                    builder.cursor = builder.tree.push(last, token);
                    return Ok(());
                }
            }
            Ordering::Less => {
                builder.cursor = resurface(&builder.tree, builder.cursor);
                log::debug!("'{op}' binds looser than '{current}', resurfaced");
            }
            Ordering::Equal => {}
        }
        builder.cursor = builder.tree.push(builder.cursor, token);
        return Ok(());
    }

    let left = builder
        .tree
        .last_element(builder.cursor)
        .filter(|&node| builder.tree.token(node).is_operand())
        .ok_or_else(|| ParseErrorKind::missing_left(op.symbol()))?;
    builder.cursor = builder.tree.push(left, token);
    Ok(())
}

/// Climb from `node` through consecutive `+`/`-` ancestors.
fn resurface(tree: &Tree, node: NodeId) -> NodeId {
    let mut node = node;
    while let Some(parent) = tree.parent(node) {
        match tree.token(parent).as_operator() {
            Some(op) if op.precedence() == Precedence::Term => node = parent,
            _ => break,
        }
    }
    node
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::GroupType;
    use BinaryOperator::*;

    fn with_operand() -> Builder {
        let mut builder = Builder::new(Token::Empty, 0);
        builder.tree.add(builder.cursor, Token::Number(1.0));
        builder
    }

    #[test]
    fn test_first_operator_wraps_last_operand() {
        let mut builder = with_operand();
        insert_operator(&mut builder, Add).unwrap();
        let tree = &builder.tree;
        assert_eq!(builder.current(), &Token::BinaryOperator(Add));
        assert_eq!(tree.children(tree.root()), &[builder.cursor]);
        assert_eq!(
            tree.token(tree.children(builder.cursor)[0]),
            &Token::Number(1.0)
        );
    }

    #[test]
    fn test_no_left_operand() {
        let mut builder = Builder::new(Token::Empty, 0);
        let err = insert_operator(&mut builder, Mul).unwrap_err();
        assert_eq!(err, ParseErrorKind::missing_left('*'));
    }

    #[test]
    fn test_empty_group_has_no_operand() {
        let mut builder = Builder::new(Token::Group(GroupType::Scope), 1);
        let paren = builder.tree.add(builder.cursor, Token::Group(GroupType::Paren));
        builder.cursor = paren;
        assert!(insert_operator(&mut builder, Sub).is_err());
    }

    #[test]
    fn test_tighter_operator_descends() {
        let mut builder = with_operand();
        insert_operator(&mut builder, Add).unwrap();
        let plus = builder.cursor;
        builder.tree.add(plus, Token::Number(2.0));
        insert_operator(&mut builder, Mul).unwrap();
        assert_eq!(builder.tree.parent(builder.cursor), Some(plus));
        assert_eq!(builder.tree.children(plus).len(), 2);
    }

    #[test]
    fn test_looser_operator_resurfaces() {
        // 1 + 2 * 3 - with the cursor on '*'
        let mut builder = with_operand();
        insert_operator(&mut builder, Add).unwrap();
        let plus = builder.cursor;
        builder.tree.add(plus, Token::Number(2.0));
        insert_operator(&mut builder, Mul).unwrap();
        builder.tree.add(builder.cursor, Token::Number(3.0));

        insert_operator(&mut builder, Sub).unwrap();
        let tree = &builder.tree;
        assert_eq!(tree.children(builder.cursor), &[plus]);
        assert_eq!(tree.parent(builder.cursor), Some(tree.root()));
    }

    #[test]
    fn test_same_operator_chains_left() {
        let mut builder = with_operand();
        insert_operator(&mut builder, Add).unwrap();
        let first = builder.cursor;
        builder.tree.add(first, Token::Number(2.0));
        insert_operator(&mut builder, Add).unwrap();
        assert_ne!(builder.cursor, first);
        assert_eq!(builder.tree.children(builder.cursor), &[first]);
    }

    #[test]
    fn test_resurface_stops_at_group() {
        let mut tree = Tree::new(Token::Empty);
        let one = tree.add(tree.root(), Token::Number(1.0));
        let plus = tree.push(one, Token::BinaryOperator(Add));
        let group = tree.add(plus, Token::Group(GroupType::Paren));
        let two = tree.add(group, Token::Number(2.0));
        let times = tree.push(two, Token::BinaryOperator(Mul));
        assert_eq!(resurface(&tree, times), times);
    }
}
