//! Error types for the reference guide
//!
//! This module defines [`GuideError`], which covers every failure a level can
//! report: node heap faults raised by the linked list, file I/O failures from
//! the file level, and driver errors such as selecting a level that does not
//! exist.
//!
//! Heap errors are never fatal to the guide itself. The linked list surfaces
//! them to its caller, which prints a diagnostic and carries on.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while running the guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// Node heap exhausted
    OutOfMemory { requested: usize, limit: usize },

    /// Freed a block that was already freed
    DoubleFree { address: u64 },

    /// Freed an address that was never allocated
    InvalidFree { address: u64 },

    /// Accessed a freed block
    UseAfterFree { address: u64 },

    /// Accessed an address that is not a heap block
    InvalidPointer { address: u64 },

    /// File operation failed
    Io {
        operation: &'static str,
        path: PathBuf,
        message: String,
    },

    /// Level number outside the registry
    UnknownLevel { number: u32, available: usize },
}

impl GuideError {
    /// Wrap an I/O error with the operation and path that produced it
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        GuideError::Io {
            operation,
            path: path.into(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for GuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideError::OutOfMemory { requested, limit } => {
                write!(
                    f,
                    "Out of memory: requested {} bytes, limit is {} nodes",
                    requested, limit
                )
            }
            GuideError::DoubleFree { address } => {
                write!(f, "Double free detected at address 0x{:x}", address)
            }
            GuideError::InvalidFree { address } => {
                write!(
                    f,
                    "Invalid free: address 0x{:x} was never allocated",
                    address
                )
            }
            GuideError::UseAfterFree { address } => {
                write!(f, "Use-after-free: address 0x{:x} has been freed", address)
            }
            GuideError::InvalidPointer { address } => {
                write!(f, "Invalid pointer: address 0x{:x} not allocated", address)
            }
            GuideError::Io {
                operation,
                path,
                message,
            } => {
                write!(
                    f,
                    "Could not {} '{}': {}",
                    operation,
                    path.display(),
                    message
                )
            }
            GuideError::UnknownLevel { number, available } => {
                write!(
                    f,
                    "No level {} (levels are numbered 1 to {})",
                    number, available
                )
            }
        }
    }
}

impl std::error::Error for GuideError {}
