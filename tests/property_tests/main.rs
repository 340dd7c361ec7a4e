//! Property-based tests for calculator invariants

mod calculator_invariants;
