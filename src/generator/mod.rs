// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Opcode table generator - main entry point.
//!
//! This module ties together the instruction list scanner with the
//! table emitter. The scan runs to completion before anything is
//! written to the selected sink.

pub mod cli;

use std::fs::File;
use std::io::{self, Write};

use clap::Parser;

use crate::emitter;
use crate::error::{GenError, GenErrorKind};
use crate::scanner;

use cli::{validate_cli, Cli, CliConfig};

pub use cli::VERSION;

/// Run the generator with command-line arguments.
pub fn run() -> Result<(), GenError> {
    let cli = Cli::parse();
    let config = validate_cli(&cli)?;
    run_one(&config)
}

fn run_one(config: &CliConfig) -> Result<(), GenError> {
    let (mnemonics, dims) = scanner::scan_file(&config.infile, config.skip_blank)?;

    if dims.is_degenerate() && !config.allow_empty {
        let msg = if dims.count == 0 {
            "Instruction list is empty"
        } else {
            "Instruction list contains only blank lines"
        };
        return Err(GenError::new(
            GenErrorKind::Table,
            msg,
            Some(&config.infile.to_string_lossy()),
        ));
    }

    let mut out: Box<dyn Write> = match &config.outfile {
        Some(path) => Box::new(File::create(path).map_err(|_| {
            GenError::new(
                GenErrorKind::Sink,
                "Error opening file for write",
                Some(&path.to_string_lossy()),
            )
        })?),
        None => Box::new(io::stdout()),
    };

    emitter::emit(&mnemonics, dims, &mut out, io::stderr()).map_err(|err| {
        GenError::new(
            GenErrorKind::Sink,
            "Error writing opcode table",
            Some(&err.to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn create_temp_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("target")
            .join(format!("test-{label}-{}-{nanos}", process::id()));
        fs::create_dir_all(&dir).expect("Create temp dir");
        dir
    }

    fn config_for(dir: &Path, contents: &str) -> CliConfig {
        let infile = dir.join("instr_list.txt");
        fs::write(&infile, contents).expect("write instruction list");
        CliConfig {
            infile,
            outfile: Some(dir.join("opcode.sv")),
            skip_blank: false,
            allow_empty: false,
        }
    }

    fn read_output(config: &CliConfig) -> String {
        let path = config.outfile.as_ref().expect("output path");
        fs::read_to_string(path).expect("read generated table")
    }

    #[test]
    fn generates_table_for_mixed_width_list() {
        let dir = create_temp_dir("mixed-width");
        let config = config_for(&dir, "ADD\nSUBI \nJMP\n");
        run_one(&config).expect("generate");
        assert_eq!(
            read_output(&config),
            "logic[2:0][3:0][7:0] opcode;\n\
             initial begin\n\
             \tassign opcode[0] = \"ADD \";\n\
             \tassign opcode[1] = \"SUBI\";\n\
             \tassign opcode[2] = \"JMP \";\n\
             end\n"
        );
    }

    #[test]
    fn missing_input_fails_before_any_output() {
        let dir = create_temp_dir("missing-input");
        let config = CliConfig {
            infile: dir.join("absent.txt"),
            outfile: Some(dir.join("opcode.sv")),
            skip_blank: false,
            allow_empty: false,
        };
        let err = run_one(&config).unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Source);
        assert!(!dir.join("opcode.sv").exists());
    }

    #[test]
    fn empty_input_is_rejected_by_default() {
        let dir = create_temp_dir("empty-input");
        let config = config_for(&dir, "");
        let err = run_one(&config).unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Table);
        assert!(!dir.join("opcode.sv").exists());
    }

    #[test]
    fn blank_only_input_is_rejected_by_default() {
        let dir = create_temp_dir("blank-input");
        let config = config_for(&dir, "\n   \n");
        let err = run_one(&config).unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Table);
    }

    #[test]
    fn allow_empty_emits_degenerate_declaration() {
        let dir = create_temp_dir("allow-empty");
        let mut config = config_for(&dir, "");
        config.allow_empty = true;
        run_one(&config).expect("generate");
        assert_eq!(
            read_output(&config),
            "logic[-1:0][-1:0][7:0] opcode;\n\
             initial begin\n\
             end\n"
        );
    }

    #[test]
    fn skip_blank_drops_blank_slots() {
        let dir = create_temp_dir("skip-blank");
        let mut config = config_for(&dir, "NOP\n\n  \nRET\n");
        config.skip_blank = true;
        run_one(&config).expect("generate");
        assert_eq!(
            read_output(&config),
            "logic[1:0][2:0][7:0] opcode;\n\
             initial begin\n\
             \tassign opcode[0] = \"NOP\";\n\
             \tassign opcode[1] = \"RET\";\n\
             end\n"
        );
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = create_temp_dir("rerun");
        let config = config_for(&dir, "LD\nHALT\nINC\n");
        run_one(&config).expect("first run");
        let first = read_output(&config);
        run_one(&config).expect("second run");
        assert_eq!(first, read_output(&config));
    }

    #[test]
    fn single_mnemonic_table() {
        let dir = create_temp_dir("single");
        let config = config_for(&dir, "  HALT\n");
        run_one(&config).expect("generate");
        assert_eq!(
            read_output(&config),
            "logic[0:0][3:0][7:0] opcode;\n\
             initial begin\n\
             \tassign opcode[0] = \"HALT\";\n\
             end\n"
        );
    }
}
