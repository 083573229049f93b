//! RAM-backed byte store

use super::{ByteStore, StoreError, ERASED_BYTE};

/// Fixed-size byte store held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    bytes: Vec<u8>,
}

impl MemoryStore {
    /// Create an erased store of `size` bytes
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![ERASED_BYTE; size],
        }
    }

    /// Wrap existing contents
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn check(&self, address: usize) -> Result<(), StoreError> {
        if address < self.bytes.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                address,
                size: self.bytes.len(),
            })
        }
    }
}

impl ByteStore for MemoryStore {
    type Error = StoreError;

    fn read(&mut self, address: usize) -> Result<u8, StoreError> {
        self.check(address)?;
        Ok(self.bytes[address])
    }

    fn write(&mut self, address: usize, byte: u8) -> Result<(), StoreError> {
        self.check(address)?;
        self.bytes[address] = byte;
        Ok(())
    }
}
