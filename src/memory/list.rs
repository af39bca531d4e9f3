//! Singly linked list of `i32` values
//!
//! The list is nothing but an optional head address. Nodes live in a
//! [`NodeHeap`] owned by the list, and each node stores the address of its
//! successor, so nothing outside the list can hold on to a node.
//!
//! ```text
//! insert_front(x): node = malloc(x), node.next = head, head = node   O(1)
//! render():        walk head -> tail                                  O(n)
//! destroy():       walk head -> tail, freeing each node               O(n)
//! ```
//!
//! Allocation failure is surfaced as [`GuideError::OutOfMemory`] and leaves the
//! list untouched: the new node is only linked in after allocation succeeds.

use super::heap::NodeHeap;
use super::Address;
use crate::constants::LIST_SENTINEL;
use crate::errors::GuideError;
use crate::snapshot::Transcript;
use std::fmt::{self, Write};

/// Singly linked list backed by its own node heap
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    heap: NodeHeap,
    head: Option<Address>,
}

impl LinkedList {
    /// Create an empty list on a default-sized heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list whose heap holds at most `max_nodes` live nodes
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        LinkedList {
            heap: NodeHeap::new(max_nodes),
            head: None,
        }
    }

    /// Allocate a detached node holding `value`
    ///
    /// The node is not reachable from the head until the caller links it.
    fn create_node(&mut self, value: i32) -> Result<Address, GuideError> {
        self.heap.allocate(value)
    }

    /// Insert `value` at the front, returning the new head's address
    pub fn insert_front(&mut self, value: i32) -> Result<Address, GuideError> {
        let addr = self.create_node(value)?;
        self.heap.get_mut(addr)?.next = self.head;
        self.head = Some(addr);
        Ok(addr)
    }

    /// Render the list as `List: [ 3 -> 2 -> 1 -> NULL ]`
    pub fn render(&self) -> String {
        let mut out = String::from("List: [ ");
        for value in self.iter() {
            // Writing into a String cannot fail
            let _ = write!(out, "{} -> ", value);
        }
        out.push_str(LIST_SENTINEL);
        out.push_str(" ]");
        out
    }

    /// Print the rendering as one line of `level`'s output
    pub fn print(&self, terminal: &mut Transcript, level: u32) {
        terminal.println(self.render(), level);
    }

    /// Free every node head to tail and leave the list empty
    ///
    /// Returns how many nodes were released. Calling this on an empty list
    /// releases nothing. Tombstones left by the previous teardown are purged
    /// first, so the heap only ever holds the blocks of the current list plus
    /// those of the latest teardown.
    pub fn destroy(&mut self) -> Result<usize, GuideError> {
        if self.head.is_none() {
            return Ok(0);
        }
        self.heap.purge_tombstones();

        let mut current = self.head.take();
        let mut released = 0;
        while let Some(addr) = current {
            let next = self.heap.get(addr)?.next;
            self.heap.free(addr)?;
            released += 1;
            current = next;
        }
        Ok(released)
    }

    pub fn head(&self) -> Option<Address> {
        self.head
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Count of nodes reachable from the head
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Values from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            heap: &self.heap,
            cursor: self.head,
        }
    }

    /// The heap backing this list (live nodes and tombstones)
    pub fn heap(&self) -> &NodeHeap {
        &self.heap
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Iterator over list values, head to tail
pub struct Iter<'a> {
    heap: &'a NodeHeap,
    cursor: Option<Address>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let addr = self.cursor?;
        // Only live nodes are reachable from the head, so a failed lookup ends the walk
        let block = self.heap.get(addr).ok()?;
        self.cursor = block.next;
        Some(block.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::heap::BlockState;

    #[test]
    fn test_empty_list_renders_sentinel_only() {
        let list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.render(), "List: [ NULL ]");
    }

    #[test]
    fn test_insert_front_prepends() {
        let mut list = LinkedList::new();
        list.insert_front(10).unwrap();
        assert_eq!(list.render(), "List: [ 10 -> NULL ]");
        list.insert_front(20).unwrap();
        assert_eq!(list.render(), "List: [ 20 -> 10 -> NULL ]");
        list.insert_front(30).unwrap();
        assert_eq!(list.render(), "List: [ 30 -> 20 -> 10 -> NULL ]");
        assert_eq!(list.to_string(), list.render());
    }

    #[test]
    fn test_insert_returns_new_head() {
        let mut list = LinkedList::new();
        let first = list.insert_front(1).unwrap();
        let second = list.insert_front(2).unwrap();

        assert_eq!(list.head(), Some(second));
        assert_eq!(list.heap().get(second).unwrap().next, Some(first));
        assert_eq!(list.heap().get(first).unwrap().next, None);
    }

    #[test]
    fn test_failed_insert_leaves_list_unchanged() {
        let mut list = LinkedList::with_max_nodes(2);
        list.insert_front(1).unwrap();
        list.insert_front(2).unwrap();
        let head = list.head();

        let err = list.insert_front(3).unwrap_err();
        assert!(matches!(err, GuideError::OutOfMemory { limit: 2, .. }));
        assert_eq!(list.head(), head);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(list.heap().blocks().len(), 2, "no partial node installed");
    }

    #[test]
    fn test_destroy_frees_head_to_tail() {
        let mut list = LinkedList::new();
        let a = list.insert_front(10).unwrap();
        let b = list.insert_front(20).unwrap();
        let c = list.insert_front(30).unwrap();

        assert_eq!(list.destroy().unwrap(), 3);
        assert!(list.is_empty());
        assert_eq!(list.render(), "List: [ NULL ]");
        assert_eq!(list.heap().release_log(), &[c, b, a]);
        assert!(list
            .heap()
            .blocks()
            .iter()
            .all(|(_, block)| block.state == BlockState::Tombstone));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut list = LinkedList::new();
        list.insert_front(5).unwrap();

        assert_eq!(list.destroy().unwrap(), 1);
        assert_eq!(list.destroy().unwrap(), 0);
        assert!(list.is_empty());
        assert_eq!(list.heap().release_log().len(), 1);
    }

    #[test]
    fn test_destroy_frees_capacity_for_reuse() {
        let mut list = LinkedList::with_max_nodes(1);
        list.insert_front(1).unwrap();
        assert!(list.insert_front(2).is_err());

        list.destroy().unwrap();
        list.insert_front(3).unwrap();
        assert_eq!(list.render(), "List: [ 3 -> NULL ]");
    }

    #[test]
    fn test_teardown_replaces_previous_tombstones() {
        let mut list = LinkedList::new();
        let a = list.insert_front(1).unwrap();
        list.destroy().unwrap();
        let b = list.insert_front(2).unwrap();
        let c = list.insert_front(3).unwrap();
        list.destroy().unwrap();

        let addrs: Vec<Address> = list
            .heap()
            .blocks()
            .iter()
            .map(|(addr, _)| *addr)
            .collect();
        assert_eq!(addrs, vec![b, c]);
        assert!(!addrs.contains(&a));
        assert_eq!(list.heap().release_log(), &[c, b]);
    }
}
