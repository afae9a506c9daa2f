//! Generates enum-constant declarations from icon font metadata.
//!
//! Reads an `icons.json` metadata map, keeps the icons that ship a
//! "solid" style, and prints one Java enum-constant line per icon,
//! sorted by the derived identifier.

pub mod codegen;
pub mod core;
pub mod data;
pub mod logger;

use std::io::Write;
use std::path::Path;

use anyhow::Result;

pub use crate::core::cli::CliArgs;
pub use crate::core::errors::MissingInput;

/// Run the whole transformation: load, filter, sort, print.
///
/// `icons_dir` is the directory expected to contain `icons.json`; output
/// lines go to `out`. Returns the number of lines written.
pub fn run(icons_dir: &Path, out: &mut impl Write) -> Result<usize> {
    let path = icons_dir.join(data::icons::ICONS_FILE);
    let set = data::icons::load_icon_set(&path)?;
    let mut entries = data::icons::solid_icons(&set);
    codegen::write_constants(&mut entries, out)?;
    Ok(entries.len())
}
