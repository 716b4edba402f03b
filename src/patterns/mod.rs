//! Design-pattern demonstrations built on the game's cast: a simple
//! factory, an adapter for foreign units, and swappable jump strategies.

pub mod adapter;
pub mod factory;
pub mod strategy;

use std::io::{self, Write};

/// Runs all three demos, printing a short transcript of each.
pub fn run_demos(out: &mut impl Write) -> io::Result<()> {
    factory::demo(out)?;
    writeln!(out)?;
    adapter::demo(out)?;
    writeln!(out)?;
    strategy::demo(out)
}
