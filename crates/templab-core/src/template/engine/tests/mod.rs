//! Tests for template engine
//!
//! Organized by pipeline stage, then by rendering behaviour.

// Test helper functions
mod helpers;

mod tokenize;


// Error and edge case tests
mod errors;
