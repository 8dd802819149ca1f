// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction list scanning and table measurement.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{GenError, GenErrorKind};

/// Dimensions of the generated lookup table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableDimensions {
    pub count: usize,
    pub max_width: usize,
}

impl TableDimensions {
    /// Measure a scanned mnemonic list.
    pub fn measure(mnemonics: &[String]) -> Self {
        Self {
            count: mnemonics.len(),
            max_width: mnemonics
                .iter()
                .map(|m| m.chars().count())
                .max()
                .unwrap_or(0),
        }
    }

    /// True when either declaration bound would go negative.
    pub fn is_degenerate(&self) -> bool {
        self.count == 0 || self.max_width == 0
    }
}

/// Read a mnemonic list from a line source, one entry per line.
///
/// Lines are trimmed of surrounding whitespace. A trimmed line of length
/// zero still occupies an index slot unless `skip_blank` is set.
pub fn scan<R: BufRead>(
    reader: R,
    skip_blank: bool,
) -> io::Result<(Vec<String>, TableDimensions)> {
    let mut mnemonics = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if skip_blank && trimmed.is_empty() {
            continue;
        }
        mnemonics.push(trimmed.to_string());
    }
    let dims = TableDimensions::measure(&mnemonics);
    Ok((mnemonics, dims))
}

/// Scan an instruction list file.
///
/// The file handle is scoped to this call and released on every exit path.
pub fn scan_file(
    path: &Path,
    skip_blank: bool,
) -> Result<(Vec<String>, TableDimensions), GenError> {
    let file = File::open(path).map_err(|_| {
        GenError::new(
            GenErrorKind::Source,
            "Error opening instruction list",
            Some(&path.to_string_lossy()),
        )
    })?;
    scan(BufReader::new(file), skip_blank).map_err(|err| {
        GenError::new(
            GenErrorKind::Source,
            "Error reading instruction list",
            Some(&err.to_string()),
        )
    })
}
