//! # Introduction
//!
//! crustguide is a leveled language reference. Eleven short levels walk from
//! bindings and control flow through structs, file I/O, traits, enums and
//! macros, ending with a singly linked list built on a bounded node heap.
//! Every level prints into a captured transcript, which the binary either
//! streams to stdout or browses in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! CLI → GuideConfig → Context → levels → Transcript (+ list history) → stdout | TUI
//! ```
//!
//! 1. [`config`] — command-line surface and the settings levels read.
//! 2. [`levels`] — the level registry and the driver that runs them in order.
//! 3. [`memory`] — the [`memory::heap::NodeHeap`] arena and the
//!    [`memory::list::LinkedList`] that owns one.
//! 4. [`snapshot`] — [`snapshot::Transcript`] output capture and recorded
//!    [`snapshot::ListSnapshot`]s of the list level.
//! 5. [`ui`] — ratatui-based browser; not part of the stable library API.
//!
//! ## The linked list
//!
//! ```
//! use crustguide::memory::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_front(10).unwrap();
//! list.insert_front(20).unwrap();
//! assert_eq!(list.render(), "List: [ 20 -> 10 -> NULL ]");
//! list.destroy().unwrap();
//! assert_eq!(list.render(), "List: [ NULL ]");
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod levels;
pub mod memory;
pub mod snapshot;
pub mod ui;
