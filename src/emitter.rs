// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Opcode table emission.

use std::io::Write;

use crate::scanner::TableDimensions;

/// Writer for the generated opcode table.
pub struct TableWriter<W: Write> {
    out: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the packed array declaration and the initialization opener.
    ///
    /// Bounds are signed: an empty table renders as `[-1:0][-1:0]`.
    pub fn header(&mut self, dims: TableDimensions) -> std::io::Result<()> {
        writeln!(
            self.out,
            "logic[{}:0][{}:0][7:0] opcode;",
            dims.count as i64 - 1,
            dims.max_width as i64 - 1
        )?;
        writeln!(self.out, "initial begin")
    }

    /// Write one table row, right-padded with spaces to `width` characters.
    pub fn write_entry(
        &mut self,
        index: usize,
        mnemonic: &str,
        width: usize,
    ) -> std::io::Result<()> {
        writeln!(self.out, "\tassign opcode[{index}] = \"{mnemonic:<width$}\";")
    }

    /// Write the initialization block terminator.
    pub fn footer(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "end")
    }
}

/// Emit the full table for a scanned mnemonic list.
///
/// One summary line goes to `diag` before the table itself is written.
pub fn emit<W: Write, D: Write>(
    mnemonics: &[String],
    dims: TableDimensions,
    out: W,
    mut diag: D,
) -> std::io::Result<()> {
    writeln!(diag, "Count={}, Max={}", dims.count, dims.max_width)?;

    let mut writer = TableWriter::new(out);
    writer.header(dims)?;
    for (index, mnemonic) in mnemonics.iter().enumerate() {
        writer.write_entry(index, mnemonic, dims.max_width)?;
    }
    writer.footer()
}
