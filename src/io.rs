// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::path::Path;

use anyhow::{bail, Result};
use binrw::io::Cursor;
use binrw::BinRead;

use crate::{AppDesc, InvalidMagic};

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !Path::exists(path) {
        bail!(format!("File not found: {}", path.display()));
    }

    Ok(std::fs::read(path)?)
}

/// Reads an [AppDesc] from a firmware image or descriptor dump. If the file
/// cannot be found, is too short to cover the descriptor, or does not start
/// with the descriptor magic word an error will be returned.
///
/// A magic mismatch is reported as [InvalidMagic] carrying the value that
/// was found, so callers can distinguish "not a descriptor" from I/O
/// failures.
pub fn read_desc(path: &Path) -> Result<AppDesc> {
    let bytes = read_bytes(path)?;

    if bytes.len() < AppDesc::SIZE {
        bail!(
            "File too small to contain an application descriptor ({} bytes, need {})",
            bytes.len(),
            AppDesc::SIZE,
        );
    }

    let mut magic: [u8; 4] = [0; 4];
    magic.clone_from_slice(&bytes[0..4]);
    let magic = u32::from_le_bytes(magic);
    if magic != AppDesc::MAGIC {
        return Err(InvalidMagic(magic).into());
    }

    let mut data = Cursor::new(&bytes);
    Ok(AppDesc::read(&mut data)?)
}
