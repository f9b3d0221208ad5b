//! # Config Crate
//!
//! Centralized configuration constants for the expression tree parser.
//! Every tunable limit used while building parse trees is defined here so
//! that the parser and its callers agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ParserConfig, ERROR_CONTEXT_WINDOW};
//!
//! let config = ParserConfig::default();
//! assert_eq!(config.context_window, ERROR_CONTEXT_WINDOW);
//!
//! // Tighter limits for untrusted input
//! let strict = ParserConfig::new(20, 8).expect("valid config");
//! assert_eq!(strict.max_call_depth, 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Runtime configuration is checked on construction
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
