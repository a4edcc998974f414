//! Integration tests for the Kolibra Solutions workspace.
//!
//! This crate exists only for its `tests/` directory; see the individual
//! test files for coverage of the cart funnel end to end.
