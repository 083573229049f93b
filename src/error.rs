//! Error types for floatkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FloatKvError
pub type Result<T> = std::result::Result<T, FloatKvError>;

/// Boxed source error reported by a byte store
pub type StoreSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for floatkv operations
#[derive(Debug, Error)]
pub enum FloatKvError {
    // -------------------------------------------------------------------------
    // Container Errors
    // -------------------------------------------------------------------------
    #[error("Container is empty")]
    Empty,

    #[error("Container is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    // -------------------------------------------------------------------------
    // Byte Store Errors
    // -------------------------------------------------------------------------
    #[error("Store read failed at address {address:#x} ({completed}/{total} bytes read): {source}")]
    StoreRead {
        address: usize,
        completed: usize,
        total: usize,
        #[source]
        source: StoreSource,
    },

    #[error("Store write failed at address {address:#x} ({completed}/{total} bytes written): {source}")]
    StoreWrite {
        address: usize,
        completed: usize,
        total: usize,
        #[source]
        source: StoreSource,
    },

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Image of {len} bytes at base {base:#x} overflows the address space")]
    AddressOverflow { base: usize, len: usize },

    // -------------------------------------------------------------------------
    // Image Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt image: {0}")]
    CorruptImage(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
