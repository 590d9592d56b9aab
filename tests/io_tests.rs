// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fs;
use std::path::{Path, PathBuf};

use appdesc::{io, AppDesc, InvalidMagic};
use tempfile::TempDir;

fn descriptor_bytes() -> Vec<u8> {
    let mut bytes = vec![0u8; AppDesc::SIZE];
    bytes[0..4].copy_from_slice(&AppDesc::MAGIC.to_le_bytes());
    bytes[16..21].copy_from_slice(b"1.2.3");
    bytes[80..88].copy_from_slice(b"12:00:00");
    bytes[96..106].copy_from_slice(b"2024-01-01");
    bytes
}

fn write_image(dir: &TempDir, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join("firmware.bin");
    fs::write(&path, bytes).expect("fixture");
    path
}

#[test]
fn test_read_desc() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_image(&dir, &descriptor_bytes());

    let desc = io::read_desc(&path).expect("desc");
    assert_eq!(desc.magic(), AppDesc::MAGIC);
    assert_eq!(desc.version(), "1.2.3");
    assert_eq!(desc.time(), "12:00:00");
    assert_eq!(desc.date(), "2024-01-01");
}

#[test]
fn test_read_desc_with_payload() {
    // descriptors are embedded in larger firmware images
    let dir = TempDir::new().expect("tempdir");
    let mut bytes = descriptor_bytes();
    bytes.extend_from_slice(&[0xA5; 4096]);
    let path = write_image(&dir, &bytes);

    let desc = io::read_desc(&path).expect("desc");
    assert_eq!(desc.version(), "1.2.3");
}

#[test]
fn test_read_desc_file_not_found() {
    let e = io::read_desc(Path::new("non_existent_file.bin")).unwrap_err();
    assert!(e.to_string().contains("File not found"));
}

#[test]
fn test_read_desc_too_small() {
    let dir = TempDir::new().expect("tempdir");

    for len in [0, 16, 111] {
        let path = write_image(&dir, &descriptor_bytes()[..len]);
        let e = io::read_desc(&path).unwrap_err();
        assert!(e.to_string().contains("too small"), "len {len}: {e}");
        assert!(e.downcast_ref::<InvalidMagic>().is_none());
    }
}

#[test]
fn test_read_desc_bad_magic() {
    let dir = TempDir::new().expect("tempdir");
    let mut bytes = descriptor_bytes();
    bytes[0..4].copy_from_slice(&0xDEADBEEFu32.to_le_bytes());
    let path = write_image(&dir, &bytes);

    let e = io::read_desc(&path).unwrap_err();
    assert_eq!(
        e.downcast_ref::<InvalidMagic>(),
        Some(&InvalidMagic(0xDEADBEEF)),
    );
    assert_eq!(e.to_string(), "Invalid magic: 0xdeadbeef");
}
