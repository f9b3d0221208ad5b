//! # Configuration Constants
//!
//! Centralized constants for the expression tree parser.
//!
//! ## Categories
//!
//! - **Diagnostics**: How much surrounding source is quoted in errors
//! - **Limits**: Maximum values for safety bounds
//! - **Runtime**: [`ParserConfig`], a validated snapshot of the above

use std::fmt;

// =============================================================================
// DIAGNOSTIC CONSTANTS
// =============================================================================

/// Number of characters quoted around a parse failure.
///
/// When the fragment consumed at the point of failure is shorter than this,
/// the error reporter reads ahead until the quoted context reaches this
/// length or the input ends.
///
/// # Example
///
/// ```rust
/// use config::constants::ERROR_CONTEXT_WINDOW;
///
/// let fragment = "1+";
/// let extra = ERROR_CONTEXT_WINDOW.saturating_sub(fragment.len());
/// assert_eq!(extra, 8);
/// ```
pub const ERROR_CONTEXT_WINDOW: usize = 10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default maximum nesting of function calls, e.g. `f(g(h(1)))` has depth 3.
///
/// Each call argument is parsed into its own tree, so nesting depth bounds
/// the recursion of the parser driver.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MAX_CALL_DEPTH;
///
/// let current_depth = 3;
/// assert!(current_depth < DEFAULT_MAX_CALL_DEPTH);
/// ```
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

/// Hard ceiling for [`ParserConfig::max_call_depth`].
pub const MAX_CALL_DEPTH_LIMIT: usize = 1000;

/// Default maximum nesting of a parse tree below its root.
///
/// Every operator in a chain such as `1+1+1` adds a level, as does every
/// bracket and every call. Trees are displayed and serialised by walking
/// these levels, so the bound keeps a successful parse printable.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MAX_TREE_DEPTH;
///
/// let operators_in_chain = 100;
/// assert!(operators_in_chain + 1 < DEFAULT_MAX_TREE_DEPTH);
/// ```
pub const DEFAULT_MAX_TREE_DEPTH: usize = 256;

/// Hard ceiling for [`ParserConfig::max_depth`].
pub const MAX_TREE_DEPTH_LIMIT: usize = 4096;

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of parser settings.
///
/// # Examples
/// ```
/// use config::constants::ParserConfig;
/// let config = ParserConfig::default();
/// assert!(config.context_window > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Minimum number of characters quoted in an error message.
    pub context_window: usize,
    /// Maximum nesting of function calls before parsing fails.
    pub max_call_depth: usize,
    /// Maximum tree height before parsing fails.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Builds a configuration, rejecting values the parser cannot honour.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ParserConfig;
    /// let cfg = ParserConfig::new(16, 4).expect("valid config");
    /// assert_eq!(cfg.context_window, 16);
    /// assert!(ParserConfig::new(0, 4).is_err());
    /// ```
    pub fn new(context_window: usize, max_call_depth: usize) -> Result<Self, ConfigError> {
        if context_window == 0 {
            return Err(ConfigError::InvalidContextWindow(context_window));
        }
        if max_call_depth == 0 || max_call_depth > MAX_CALL_DEPTH_LIMIT {
            return Err(ConfigError::InvalidCallDepth(max_call_depth));
        }
        Ok(Self {
            context_window,
            max_call_depth,
            max_depth: DEFAULT_MAX_TREE_DEPTH,
        })
    }

    /// Replaces the tree height limit.
    ///
    /// ## Parameters
    ///
    /// - `max_depth`: Levels allowed below the root, `1..=MAX_TREE_DEPTH_LIMIT`
    ///
    /// # Examples
    /// ```
    /// use config::constants::ParserConfig;
    /// let cfg = ParserConfig::default().with_max_depth(32).expect("valid config");
    /// assert_eq!(cfg.max_depth, 32);
    /// assert!(ParserConfig::default().with_max_depth(0).is_err());
    /// ```
    pub fn with_max_depth(self, max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 || max_depth > MAX_TREE_DEPTH_LIMIT {
            return Err(ConfigError::InvalidMaxDepth(max_depth));
        }
        Ok(Self { max_depth, ..self })
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            context_window: ERROR_CONTEXT_WINDOW,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            max_depth: DEFAULT_MAX_TREE_DEPTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the context window is zero.
    InvalidContextWindow(usize),
    /// Raised when the call depth is zero or above [`MAX_CALL_DEPTH_LIMIT`].
    InvalidCallDepth(usize),
    /// Raised when the tree depth is zero or above [`MAX_TREE_DEPTH_LIMIT`].
    InvalidMaxDepth(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidContextWindow(value) => {
                write!(f, "context_window must be positive: {value}")
            }
            ConfigError::InvalidCallDepth(value) => {
                write!(
                    f,
                    "max_call_depth must be between 1 and {MAX_CALL_DEPTH_LIMIT}: {value}"
                )
            }
            ConfigError::InvalidMaxDepth(value) => {
                write!(
                    f,
                    "max_depth must be between 1 and {MAX_TREE_DEPTH_LIMIT}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
