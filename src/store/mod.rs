//! Store Module
//!
//! Byte-addressable persistent memory, seen as a capability with two
//! operations. The codec never looks past `read` and `write`: device
//! geometry, wear and power-loss behaviour belong to the implementor.
//!
//! ## Adapters
//! - `MemoryStore`: RAM-backed, for tests and simulation
//! - `FileStore`: file-backed image, for host tooling

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Value of a byte in freshly erased EEPROM
pub const ERASED_BYTE: u8 = 0xFF;

/// Byte-level access to persistent memory
pub trait ByteStore {
    /// Failure reported for a single byte operation
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the byte at `address`
    fn read(&mut self, address: usize) -> Result<u8, Self::Error>;

    /// Write `byte` at `address`
    fn write(&mut self, address: usize, byte: u8) -> Result<(), Self::Error>;
}

impl<S: ByteStore + ?Sized> ByteStore for &mut S {
    type Error = S::Error;

    fn read(&mut self, address: usize) -> Result<u8, Self::Error> {
        (**self).read(address)
    }

    fn write(&mut self, address: usize, byte: u8) -> Result<(), Self::Error> {
        (**self).write(address, byte)
    }
}

/// Errors raised by the bundled store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Address {address:#x} outside store of {size} bytes")]
    OutOfRange { address: usize, size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
