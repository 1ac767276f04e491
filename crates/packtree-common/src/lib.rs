//! Common types and utilities for the packtree path resolver.
//!
//! This crate provides foundational types used across all packtree crates:
//! - String interning (`Atom`, `ShardedInterner`) for path segments
//! - Centralized limits and thresholds

// String interning for segment deduplication
pub mod interner;
pub use interner::{Atom, ShardedInterner};

// Centralized limits and thresholds
pub mod limits;
