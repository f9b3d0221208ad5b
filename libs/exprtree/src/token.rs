//! # Tokens
//!
//! The values carried by tree nodes.
//!
//! ## Example
//!
//! ```rust
//! use exprtree::token::{Token, TokenCategory};
//!
//! let token = Token::number("2.5").unwrap();
//! assert_eq!(token, Token::Number(2.5));
//! assert_eq!(token.category(), TokenCategory::Value);
//! ```

use crate::error::ParseErrorKind;
use crate::tree::Tree;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

// =============================================================================
// TOKEN
// =============================================================================

/// A tree node payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Token {
    /// Placeholder held by the root of a parse tree.
    Empty,
    /// Diagnostic marker left where parsing failed.
    Error(String),
    /// Numeric literal.
    Number(f64),
    /// Bare identifier such as a variable name.
    Identity(String),
    /// Call such as `max(1, 2)`. Each argument is its own tree.
    Function {
        /// Function name.
        name: String,
        /// Argument trees in source order, each rooted at a scope group.
        arguments: Vec<Tree>,
    },
    /// Infix operator; its children are the operands.
    BinaryOperator(BinaryOperator),
    /// Bracketed or implicitly bounded region.
    Group(GroupType),
    /// Quoted string literal, without the quotes.
    Text(String),
}

impl Token {
    /// Convert a numeric literal.
    ///
    /// ## Errors
    ///
    /// [`ParseErrorKind::InvalidNumber`] when `text` is not a valid number
    /// or does not fit a finite `f64` (e.g. `1e999`).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use exprtree::token::Token;
    ///
    /// assert!(Token::number("1.5").is_ok());
    /// assert!(Token::number("1.2.3").is_err());
    /// ```
    pub fn number(text: &str) -> Result<Self, ParseErrorKind> {
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Self::Number)
            .ok_or_else(|| ParseErrorKind::InvalidNumber {
                text: text.to_string(),
            })
    }

    /// Category used to decide how the token takes part in an expression.
    pub const fn category(&self) -> TokenCategory {
        match self {
            Self::Number(_) | Self::Identity(_) | Self::Text(_) => TokenCategory::Value,
            Self::Function { .. } | Self::BinaryOperator(_) => TokenCategory::Function,
            Self::Empty | Self::Error(_) | Self::Group(_) => TokenCategory::Other,
        }
    }

    /// True when a node holding this token can be the left operand of an
    /// operator.
    pub const fn is_operand(&self) -> bool {
        match self.category() {
            TokenCategory::Value | TokenCategory::Function => true,
            TokenCategory::Other => matches!(self, Self::Group(GroupType::Paren)),
        }
    }

    /// The operator held by this token, if any.
    pub const fn as_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::BinaryOperator(op) => Some(*op),
            _ => None,
        }
    }

    /// Check if token is an error marker.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Base()"),
            Self::Error(message) => write!(f, "Error({message})"),
            Self::Number(value) => write!(f, "Number({value})"),
            Self::Identity(name) => write!(f, "Identity({name})"),
            Self::Function { name, arguments } => {
                let args: Vec<String> = arguments
                    .iter()
                    .map(|arg| {
                        arg.to_string()
                            .lines()
                            .map(str::trim)
                            .collect::<Vec<_>>()
                            .join(",")
                    })
                    .collect();
                write!(f, "Func {name}([{}])", args.join(" "))
            }
            Self::BinaryOperator(op) => write!(f, "Func({op})"),
            Self::Group(group) => write!(f, "Group({group})"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

// =============================================================================
// TOKEN CATEGORY
// =============================================================================

/// Broad role of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Root placeholder, errors and groups.
    Other,
    /// Calls and operators.
    Function,
    /// Literals and identifiers.
    Value,
}

// =============================================================================
// GROUP TYPE
// =============================================================================

/// Kind of region a group node delimits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// `( ... )` in the source.
    Paren,
    /// Implicit boundary at the root of a call argument. Close-bracket
    /// resolution never ascends past it.
    Scope,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paren => write!(f, "()"),
            Self::Scope => Ok(()),
        }
    }
}

// =============================================================================
// OPERATORS
// =============================================================================

/// Operator precedence levels.
///
/// Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Addition/subtraction: `+ -`
    Term = 1,
    /// Multiplication/division: `* /`
    Factor = 2,
}

/// Left/right infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Sub,
    /// `*`
    #[serde(rename = "*")]
    Mul,
    /// `/`
    #[serde(rename = "/")]
    Div,
}

impl BinaryOperator {
    /// Operator spelled by `c`.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Source spelling.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Binding strength.
    pub const fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Compare an incoming operator against the one at the cursor.
///
/// `Greater` means `incoming` binds tighter than `current`, `Less` means it
/// binds looser, and `Equal` means they share a level.
///
/// ## Example
///
/// ```rust
/// use exprtree::token::{compare_precedence, BinaryOperator};
/// use std::cmp::Ordering;
///
/// assert_eq!(
///     compare_precedence(BinaryOperator::Add, BinaryOperator::Mul),
///     Ordering::Greater
/// );
/// ```
pub fn compare_precedence(current: BinaryOperator, incoming: BinaryOperator) -> Ordering {
    incoming.precedence().cmp(&current.precedence())
}

// =============================================================================
// TESTS
// =============================================================================
