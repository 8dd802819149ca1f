// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for opTab.

fn main() {
    if let Err(err) = optab::generator::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
