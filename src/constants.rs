// Constants for the reference guide

/// Starting address for node allocations
/// Heap addresses start at 0x10000000 so they never collide with the null address
pub const HEAP_ADDRESS_START: u64 = 0x1000_0000;

/// Size of one list node in bytes: a 4-byte payload plus an 8-byte successor address
pub const NODE_SIZE: usize = 12;

/// Default limit on simultaneously live nodes
pub const DEFAULT_MAX_NODES: usize = 1024;

/// Name of the demonstration file written by the file I/O level
pub const DEMO_FILE_NAME: &str = "test.txt";

/// End marker printed after the last list element
pub const LIST_SENTINEL: &str = "NULL";
