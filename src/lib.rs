// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! ESP-IDF Application Descriptor Parser
//!
//! This crate reads the application descriptor embedded in ESP-IDF firmware
//! images. The descriptor is a fixed-layout header that carries the
//! application version along with the compiler's build date and time, and is
//! identified by a magic word at its first four bytes.
//!
//! # Quick Start
//!
//! Reading a descriptor from a firmware image:
//!
//! ```no_run
//! use std::path::Path;
//! use appdesc::io;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let desc = io::read_desc(Path::new("firmware.bin"))?;
//!
//!     println!("{}", desc.version());
//!     println!("{} {}", desc.date(), desc.time());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Format Details
//!
//! The descriptor is a little-endian record:
//!
//! | Offset | Type       | Description                         |
//! |--------|------------|-------------------------------------|
//! | 0      | `u32`      | Magic word: `0xABCD5432`            |
//! | 4      | `[u8; 12]` | Reserved                            |
//! | 16     | `[u8; 32]` | Version string, NUL padded          |
//! | 48     | `[u8; 32]` | Reserved                            |
//! | 80     | `[u8; 16]` | Build time (`__TIME__`), NUL padded |
//! | 96     | `[u8; 16]` | Build date (`__DATE__`), NUL padded |
//!
//! Text fields are fixed width with the meaningful content at the front and
//! zero bytes filling the remainder. Only trailing NULs are stripped on
//! read; embedded whitespace is preserved as written.

use std::fmt;

use binrw::binrw;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

pub mod io;

/// The descriptor's leading four bytes did not match [AppDesc::MAGIC].
///
/// Carries the value that was actually found so it can be reported in
/// hexadecimal.
#[derive(Debug, Error, PartialEq)]
#[error("Invalid magic: {0:#x}")]
pub struct InvalidMagic(pub u32);

/// An ESP-IDF application descriptor.
///
/// | Offset | Type       | Description                |
/// |--------|------------|----------------------------|
/// |   0    | `u32`      | Magic word - `0xABCD5432`  |
/// |   16   | `[u8; 32]` | Version string, NUL padded |
/// |   80   | `[u8; 16]` | Build time, NUL padded     |
/// |   96   | `[u8; 16]` | Build date, NUL padded     |
///
/// Reserved ranges (4..16 and 48..80) are skipped during parsing. An
/// `AppDesc` can be constructed from a file using [io::read_desc].
///
/// ```no_run
/// use std::path::Path;
/// use appdesc::io;
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// let desc = io::read_desc(Path::new("firmware.bin"))?;
/// # Ok(())
/// # }
/// ```
#[binrw]
#[brw(little)]
#[repr(C)]
#[derive(Debug, PartialEq)]
pub struct AppDesc {
    magic: u32,

    #[brw(pad_before = 12)]
    version: [u8; 32],

    #[brw(pad_before = 32)]
    time: [u8; 16],

    date: [u8; 16],
}

impl AppDesc {
    /// The magic word identifying an application descriptor.
    pub const MAGIC: u32 = 0xABCD_5432;

    /// The number of bytes covered by the descriptor fields.
    pub const SIZE: usize = 112;

    /// Returns the magic word as read from the file.
    pub fn magic(&self) -> u32 {
        self.magic
    }

    /// Returns the application version string.
    ///
    /// Non-UTF-8 characters are replaced with the Unicode replacement
    /// character (�).
    pub fn version(&self) -> String {
        trim_nul(&self.version)
    }

    /// Returns the build time string (the compiler's `__TIME__`).
    pub fn time(&self) -> String {
        trim_nul(&self.time)
    }

    /// Returns the build date string (the compiler's `__DATE__`).
    pub fn date(&self) -> String {
        trim_nul(&self.date)
    }

    /// Returns the build timestamp as a `NaiveDateTime`.
    ///
    /// The `date` and `time` fields hold the C preprocessor's `__DATE__`
    /// (`"Jun  7 2023"`) and `__TIME__` (`"12:34:56"`) strings. These carry
    /// no timezone information, so the result is a naive datetime. Returns
    /// `None` if either field does not parse.
    pub fn built_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date(), "%b %e %Y").ok()?;
        let time = NaiveTime::parse_from_str(&self.time(), "%H:%M:%S").ok()?;
        Some(NaiveDateTime::new(date, time))
    }
}

impl fmt::Display for AppDesc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Version: {}", self.version())?;
        write!(f, "Date   : {} {}", self.date(), self.time())
    }
}

/// Decodes a fixed-width field, stripping trailing NUL padding only.
fn trim_nul(field: &[u8]) -> String {
    let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&field[..end]).into_owned()
}
