//! Tests for the persistence codec
//!
//! These tests verify:
//! - Image layout and size
//! - save/load round trip, stale slots included
//! - Base address placement
//! - Store failures mid-transfer (partial state, error details)
//! - Rejection of images whose count exceeds capacity

use std::fmt;

use floatkv::{ByteStore, FloatKeyContainer, FloatKvError, ImageLayout, MemoryStore};

type Table = FloatKeyContainer<i16, u32, 4, 100>;

// =============================================================================
// Helper Functions
// =============================================================================

/// Store that fails every operation at or past `fail_at`
struct FailingStore {
    inner: MemoryStore,
    fail_at: usize,
}

#[derive(Debug)]
struct DeviceBusy;

impl fmt::Display for DeviceBusy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device busy")
    }
}

impl std::error::Error for DeviceBusy {}

impl ByteStore for FailingStore {
    type Error = DeviceBusy;

    fn read(&mut self, address: usize) -> Result<u8, DeviceBusy> {
        if address >= self.fail_at {
            return Err(DeviceBusy);
        }
        self.inner.read(address).map_err(|_| DeviceBusy)
    }

    fn write(&mut self, address: usize, byte: u8) -> Result<(), DeviceBusy> {
        if address >= self.fail_at {
            return Err(DeviceBusy);
        }
        self.inner.write(address, byte).map_err(|_| DeviceBusy)
    }
}

fn sample_table() -> Table {
    let mut table = Table::new();
    table.insert(0.5, 500).unwrap();
    table.insert(-1.25, 125).unwrap();
    table.insert(3.0, 3000).unwrap();
    table
}

// =============================================================================
// Layout Tests
// =============================================================================

#[test]
fn test_layout_size() {
    assert_eq!(Table::LAYOUT, ImageLayout::of::<i16, u32, 4>());
    assert_eq!(Table::LAYOUT.keys_offset, 4);
    assert_eq!(Table::LAYOUT.values_offset, 12);
    assert_eq!(Table::LAYOUT.len, 28);
    assert_eq!(sample_table().encode_image().len(), 28);
}

#[test]
fn test_image_is_full_size_when_empty() {
    let image = Table::new().encode_image();
    assert_eq!(image.len(), Table::LAYOUT.len);
    assert!(image.iter().all(|&b| b == 0));
}

// =============================================================================
// Save / Load Tests
// =============================================================================

#[test]
fn test_save_load_round_trip() {
    let table = sample_table();
    let mut store = MemoryStore::new(64);

    table.save(&mut store, 0).unwrap();

    let mut restored = Table::new();
    restored.load(&mut store, 0).unwrap();

    assert_eq!(restored, table);
    assert_eq!(restored.get(0.4).unwrap(), 500);
}

#[test]
fn test_save_writes_encoded_image_at_base() {
    let table = sample_table();
    let mut store = MemoryStore::new(64);

    table.save(&mut store, 10).unwrap();

    let bytes = store.as_bytes();
    assert!(bytes[..10].iter().all(|&b| b == 0xFF));
    assert_eq!(&bytes[10..38], &table.encode_image()[..]);
    assert!(bytes[38..].iter().all(|&b| b == 0xFF));
}

#[test]
fn test_round_trip_keeps_stale_slots() {
    let mut store = MemoryStore::new(Table::LAYOUT.len);

    // count of 1 with junk in the unused slots
    let mut image = vec![1, 0, 0, 0];
    image.extend_from_slice(&[10, 0, 0x34, 0x12, 0xFF, 0x7F, 2, 0]);
    image.extend_from_slice(&[7, 0, 0, 0]);
    image.extend_from_slice(&[8, 0, 0, 0, 9, 0, 0, 0, 0xAA, 0xBB, 0xCC, 0xDD]);
    for (address, &byte) in image.iter().enumerate() {
        store.write(address, byte).unwrap();
    }

    let mut table = Table::new();
    table.load(&mut store, 0).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.keys(), &[10]);
    assert_eq!(table.raw_keys(), &[10, 0x1234, 0x7FFF, 2]);
    assert_eq!(table.raw_values(), &[7, 8, 9, 0xDDCC_BBAA]);

    let mut copy = MemoryStore::new(Table::LAYOUT.len);
    table.save(&mut copy, 0).unwrap();
    assert_eq!(copy.as_bytes(), &image[..]);
}

#[test]
fn test_load_overwrites_previous_state() {
    let mut store = MemoryStore::new(64);
    Table::new().save(&mut store, 0).unwrap();

    let mut table = sample_table();
    table.load(&mut store, 0).unwrap();

    assert!(table.is_empty());
    assert_eq!(table, Table::new());
}

#[test]
fn test_two_tables_side_by_side() {
    let first = sample_table();
    let mut second = Table::new();
    second.insert(9.0, 9).unwrap();

    let len = Table::LAYOUT.len;
    let mut store = MemoryStore::new(2 * len);
    first.save(&mut store, 0).unwrap();
    second.save(&mut store, len).unwrap();

    let mut a = Table::new();
    let mut b = Table::new();
    a.load(&mut store, 0).unwrap();
    b.load(&mut store, len).unwrap();

    assert_eq!(a, first);
    assert_eq!(b, second);
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_save_failure_reports_progress() {
    let table = sample_table();
    let mut store = FailingStore {
        inner: MemoryStore::new(64),
        fail_at: 15,
    };

    let err = table.save(&mut store, 5).unwrap_err();

    match err {
        FloatKvError::StoreWrite {
            address,
            completed,
            total,
            ..
        } => {
            assert_eq!(address, 15);
            assert_eq!(completed, 10);
            assert_eq!(total, 28);
        }
        other => panic!("unexpected error: {other}"),
    }

    // bytes before the failure are written, the rest untouched
    let bytes = store.inner.as_bytes();
    assert_eq!(&bytes[5..15], &table.encode_image()[..10]);
    assert!(bytes[15..].iter().all(|&b| b == 0xFF));
}

#[test]
fn test_load_failure_leaves_container_unchanged() {
    let mut source = MemoryStore::new(64);
    Table::new().save(&mut source, 0).unwrap();

    let mut store = FailingStore {
        inner: source,
        fail_at: 20,
    };
    let mut table = sample_table();
    let before = table.clone();

    let err = table.load(&mut store, 0).unwrap_err();

    assert!(matches!(
        err,
        FloatKvError::StoreRead {
            address: 20,
            completed: 20,
            total: 28,
            ..
        }
    ));
    assert_eq!(table, before);
}

#[test]
fn test_store_error_source_is_kept() {
    let mut store = FailingStore {
        inner: MemoryStore::new(64),
        fail_at: 0,
    };
    let err = sample_table().save(&mut store, 0).unwrap_err();

    let source = std::error::Error::source(&err).expect("source error");
    assert_eq!(source.to_string(), "device busy");
}

#[test]
fn test_save_past_end_of_memory_store() {
    let mut store = MemoryStore::new(30);
    let err = sample_table().save(&mut store, 4).unwrap_err();

    assert!(matches!(
        err,
        FloatKvError::StoreWrite { address: 30, completed: 26, .. }
    ));
}

#[test]
fn test_address_overflow() {
    let mut store = MemoryStore::new(8);
    let err = sample_table().save(&mut store, usize::MAX - 10).unwrap_err();
    assert!(matches!(err, FloatKvError::AddressOverflow { len: 28, .. }));

    let mut table = Table::new();
    let err = table.load(&mut store, usize::MAX).unwrap_err();
    assert!(matches!(err, FloatKvError::AddressOverflow { .. }));
}

#[test]
fn test_load_rejects_count_past_capacity() {
    let mut store = MemoryStore::new(Table::LAYOUT.len);
    sample_table().save(&mut store, 0).unwrap();
    store.write(0, 5).unwrap();

    let mut table = Table::new();
    let err = table.load(&mut store, 0).unwrap_err();

    assert!(matches!(err, FloatKvError::CorruptImage(_)));
    assert!(table.is_empty());
}

#[test]
fn test_load_erased_store_is_corrupt() {
    // erased EEPROM reads as 0xFF everywhere: count = u32::MAX
    let mut store = MemoryStore::new(64);
    let mut table = Table::new();

    assert!(matches!(
        table.load(&mut store, 0),
        Err(FloatKvError::CorruptImage(_))
    ));
}
