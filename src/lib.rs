//! # floatkv
//!
//! A fixed-capacity table from floating-point keys to small values, built for
//! microcontrollers without an FPU and with byte-addressable persistent
//! memory (EEPROM):
//! - Float keys are scaled and truncated into an integer domain once, on entry
//! - Keys stay sorted; inserts shift in place, nothing is allocated
//! - Lookups snap to the nearest stored key (interpolation-table style)
//! - The whole state saves to / loads from a byte store at a base address
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 FloatKeyContainer<K, V, N, SCALE>            │
//! │        insert / get / set / find_index (nearest key)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Domain    │          │    Codec    │
//!   │ (K, V ints) │          │ (raw image) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │  ByteStore  │
//!                           │ read/write  │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use floatkv::{FloatKeyContainer, MemoryStore};
//!
//! let mut table = FloatKeyContainer::<i16, u8, 8, 100>::new();
//! table.insert(0.0, 10).unwrap();
//! table.insert(1.0, 20).unwrap();
//! assert_eq!(table.get(0.3).unwrap(), 10);
//! assert_eq!(table.get(0.7).unwrap(), 20);
//!
//! let mut eeprom = MemoryStore::new(64);
//! table.save(&mut eeprom, 16).unwrap();
//!
//! let mut restored = FloatKeyContainer::<i16, u8, 8, 100>::new();
//! restored.load(&mut eeprom, 16).unwrap();
//! assert_eq!(restored, table);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod domain;
pub mod container;
pub mod store;
pub mod codec;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FloatKvError, Result};
pub use config::{Config, OverflowPolicy};
pub use container::{FloatKeyContainer, InsertOutcome};
pub use codec::ImageLayout;
pub use store::{ByteStore, FileStore, MemoryStore, StoreError};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of floatkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
