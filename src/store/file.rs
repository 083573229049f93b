//! File-backed byte store
//!
//! Treats a file of fixed length as an EEPROM image. Used by the CLI to
//! prepare and inspect images on a host before flashing.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::{ByteStore, StoreError, ERASED_BYTE};

/// Byte store over a fixed-length file
pub struct FileStore {
    path: PathBuf,
    file: File,
    size: usize,
}

impl FileStore {
    /// Create (or truncate) an erased image of `size` bytes
    pub fn create(path: &Path, size: usize) -> Result<Self, StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&vec![ERASED_BYTE; size])?;
        file.sync_all()?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            size,
        })
    }

    /// Open an existing image; its current length is the store size
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let size = file.metadata()?.len() as usize;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Flush written bytes to disk
    pub fn sync(&mut self) -> Result<(), StoreError> {
        self.file.sync_all()?;
        Ok(())
    }

    fn seek_to(&mut self, address: usize) -> Result<(), StoreError> {
        if address >= self.size {
            return Err(StoreError::OutOfRange {
                address,
                size: self.size,
            });
        }
        self.file.seek(SeekFrom::Start(address as u64))?;
        Ok(())
    }
}

impl ByteStore for FileStore {
    type Error = StoreError;

    fn read(&mut self, address: usize) -> Result<u8, StoreError> {
        self.seek_to(address)?;
        let mut byte = [0u8; 1];
        self.file.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn write(&mut self, address: usize, byte: u8) -> Result<(), StoreError> {
        self.seek_to(address)?;
        self.file.write_all(&[byte])?;
        Ok(())
    }
}
