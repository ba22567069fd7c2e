//! Cross-module tests for operation semantics.
