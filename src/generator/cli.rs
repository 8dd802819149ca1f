// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::error::{GenError, GenErrorKind};

pub const VERSION: &str = "1.0";

const LONG_ABOUT: &str = "SystemVerilog opcode name table generator.

Reads an instruction list (one mnemonic per line) and emits a packed
fixed-width lookup table mapping each instruction index to its mnemonic
text, padded with spaces to the width of the longest entry. The table is
written to standard output unless -o/--outfile is given; a Count/Max
summary line is written to standard error.

Blank lines count as zero-length table slots unless --skip-blank is set.
A list with no usable entries is rejected unless --allow-empty is set.";

#[derive(Parser, Debug)]
#[command(
    name = "opTab",
    version = VERSION,
    about = "SystemVerilog opcode name table generator",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        short = 'i',
        long = "infile",
        value_name = "FILE",
        default_value = "instr_list.txt",
        long_help = "Input instruction list, one mnemonic per line. Defaults to instr_list.txt."
    )]
    pub infile: PathBuf,
    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "FILE",
        long_help = "Write the generated table to FILE instead of standard output."
    )]
    pub outfile: Option<String>,
    #[arg(
        long = "skip-blank",
        action = ArgAction::SetTrue,
        long_help = "Drop whitespace-only lines instead of keeping them as zero-length table slots."
    )]
    pub skip_blank: bool,
    #[arg(
        long = "allow-empty",
        action = ArgAction::SetTrue,
        long_help = "Emit the degenerate [-1:0] declaration for an empty list instead of failing."
    )]
    pub allow_empty: bool,
}

/// Validate CLI arguments and return parsed configuration.
pub fn validate_cli(cli: &Cli) -> Result<CliConfig, GenError> {
    if cli.infile.as_os_str().is_empty() {
        return Err(GenError::new(
            GenErrorKind::Cli,
            "No input file specified. Use -i/--infile",
            None,
        ));
    }

    let outfile = match cli.outfile.as_deref() {
        Some("") => {
            return Err(GenError::new(
                GenErrorKind::Cli,
                "Empty -o/--outfile filename",
                None,
            ))
        }
        Some(name) => Some(PathBuf::from(name)),
        None => None,
    };

    Ok(CliConfig {
        infile: cli.infile.clone(),
        outfile,
        skip_blank: cli.skip_blank,
        allow_empty: cli.allow_empty,
    })
}

/// Validated CLI configuration.
#[derive(Debug)]
pub struct CliConfig {
    pub infile: PathBuf,
    pub outfile: Option<PathBuf>,
    pub skip_blank: bool,
    pub allow_empty: bool,
}
