//! Node heap for the linked list
//!
//! This module provides node storage with:
//! - Explicit allocation/deallocation (malloc/free)
//! - A hard limit on live nodes, so allocation failure is a reachable path
//! - Tombstone tracking for freed blocks, purged on demand
//! - Use-after-free, double-free and invalid-free detection
//!
//! Every block holds exactly one list node: an `i32` payload and the address
//! of its successor.

use super::Address;
use crate::constants::{DEFAULT_MAX_NODES, HEAP_ADDRESS_START, NODE_SIZE};
use crate::errors::GuideError;
use log::debug;
use rustc_hash::FxHashMap;

/// State of a heap block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    Allocated,
    Tombstone, // Freed but kept so the freed state stays observable
}

/// A block holding one list node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapBlock {
    pub value: i32,
    pub next: Option<Address>,
    pub state: BlockState,
}

impl HeapBlock {
    pub fn new(value: i32) -> Self {
        HeapBlock {
            value,
            next: None,
            state: BlockState::Allocated,
        }
    }

    pub fn is_live(&self) -> bool {
        self.state == BlockState::Allocated
    }
}

/// The node heap
#[derive(Debug, Clone)]
pub struct NodeHeap {
    blocks: FxHashMap<Address, HeapBlock>,
    next_address: Address,
    live_count: usize,
    max_nodes: usize,
    release_log: Vec<Address>,
}

impl NodeHeap {
    /// Create a heap that holds at most `max_nodes` live nodes
    pub fn new(max_nodes: usize) -> Self {
        NodeHeap {
            blocks: FxHashMap::default(),
            next_address: HEAP_ADDRESS_START,
            live_count: 0,
            max_nodes,
            release_log: Vec::new(),
        }
    }

    /// Allocate a node holding `value` with no successor
    pub fn allocate(&mut self, value: i32) -> Result<Address, GuideError> {
        if self.live_count >= self.max_nodes {
            debug!(
                "allocation refused: {} of {} nodes live",
                self.live_count, self.max_nodes
            );
            return Err(GuideError::OutOfMemory {
                requested: NODE_SIZE,
                limit: self.max_nodes,
            });
        }

        let addr = self.next_address;
        self.next_address += NODE_SIZE as u64;
        self.blocks.insert(addr, HeapBlock::new(value));
        self.live_count += 1;
        debug!("malloc({}) -> 0x{:x} holding {}", NODE_SIZE, addr, value);

        Ok(addr)
    }

    /// Free a block (mark as tombstone)
    pub fn free(&mut self, addr: Address) -> Result<(), GuideError> {
        match self.blocks.get_mut(&addr) {
            Some(block) if block.is_live() => {
                block.state = BlockState::Tombstone;
                self.live_count -= 1;
                self.release_log.push(addr);
                debug!("free(0x{:x})", addr);
                Ok(())
            }
            Some(_) => Err(GuideError::DoubleFree { address: addr }),
            None => Err(GuideError::InvalidFree { address: addr }),
        }
    }

    /// Get a live block
    pub fn get(&self, addr: Address) -> Result<&HeapBlock, GuideError> {
        match self.blocks.get(&addr) {
            Some(block) if block.is_live() => Ok(block),
            Some(_) => Err(GuideError::UseAfterFree { address: addr }),
            None => Err(GuideError::InvalidPointer { address: addr }),
        }
    }

    /// Get a live block mutably
    pub fn get_mut(&mut self, addr: Address) -> Result<&mut HeapBlock, GuideError> {
        match self.blocks.get_mut(&addr) {
            Some(block) if block.is_live() => Ok(block),
            Some(_) => Err(GuideError::UseAfterFree { address: addr }),
            None => Err(GuideError::InvalidPointer { address: addr }),
        }
    }

    /// All blocks ordered by address, tombstones included (for UI display)
    pub fn blocks(&self) -> Vec<(Address, &HeapBlock)> {
        let mut sorted: Vec<_> = self.blocks.iter().map(|(a, b)| (*a, b)).collect();
        sorted.sort_by_key(|(addr, _)| *addr);
        sorted
    }

    /// Addresses in the order they were freed
    pub fn release_log(&self) -> &[Address] {
        &self.release_log
    }

    /// Number of live blocks
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Bytes held by live blocks
    pub fn total_allocated(&self) -> usize {
        self.live_count * NODE_SIZE
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Drop every tombstone and clear the release log
    ///
    /// Returns how many blocks were removed. Afterwards a freed address is
    /// reported as an invalid pointer rather than a use-after-free.
    pub fn purge_tombstones(&mut self) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|_, block| block.is_live());
        self.release_log.clear();
        let purged = before - self.blocks.len();
        if purged > 0 {
            debug!("purged {} tombstones", purged);
        }
        purged
    }
}

impl Default for NodeHeap {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NODES)
    }
}
