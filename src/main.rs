// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use appdesc::{io, InvalidMagic};

/// Inspect the application descriptor of an ESP-IDF firmware image.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    /// a firmware image or descriptor dump
    #[arg(required = false)]
    image: Option<PathBuf>,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let args = match App::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return usage(),
    };

    let Some(image) = args.image else {
        return usage();
    };

    match info(&image) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            if e.is::<InvalidMagic>() {
                255
            } else {
                1
            }
        }
    }
}

fn usage() -> i32 {
    println!("{}", App::command().render_usage());
    255
}

fn info(image: &Path) -> Result<()> {
    let desc = io::read_desc(image)?;
    println!("{desc}");
    Ok(())
}
