//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `make_unmake.rs` - Make/undo correctness
//! - `edge_cases.rs` - Special positions and rule corners
//! - `notation.rs` - SAN rendering and move text parsing
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod perft;
