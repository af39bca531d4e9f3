//! Memory model for the linked list
//!
//! This module provides the two pieces the linked list level is built on:
//! - [`heap`]: a bounded node heap with malloc/free semantics and tombstone tracking
//! - [`list`]: the singly linked list that owns a heap and threads nodes through it
//!
//! # Addresses
//!
//! Nodes never point at each other directly. A node stores the [`Address`] of
//! its successor, and every dereference goes through the heap, which rejects
//! freed or unknown addresses instead of reading stale memory.
//!
//! ```text
//! head ─▶ 0x10000018 ─▶ 0x1000000c ─▶ 0x10000000 ─▶ NULL
//! ```

pub mod heap;
pub mod list;

/// Memory address type (64-bit)
pub type Address = u64;
