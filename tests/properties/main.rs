//! Property-based tests for the document parsers and field checks.

mod field_tests;
mod safety_tests;
