//! Enum-constant generation
//!
//! Derives enum-constant identifiers from icon names and renders the
//! declaration lines the target source file expects.

use std::io::Write;

use anyhow::Result;

use crate::data::unicode::normalize_codepoint;

/// Derive an enum-constant identifier from an icon name.
///
/// Uppercases the name, maps `-` (and every other character outside
/// `[A-Z0-9_]`) to `_`, and guards a leading digit with an extra `_`.
/// "circle-arrow-left" becomes "CIRCLE_ARROW_LEFT", "500px" becomes
/// "_500PX". Distinct names can collide after sanitization; duplicates
/// are emitted as-is.
pub fn constant_name(name: &str) -> String {
    let mut ident: String = name
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'A'..='Z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Sort entries by identifier and render one declaration line per entry.
///
/// Lines have the fixed shape `    NAME('\uXXXX'),` with no header or
/// footer. The sort is stable, so entries with equal identifiers keep
/// their input order.
pub fn write_constants(
    entries: &mut [(String, String)],
    out: &mut impl Write,
) -> Result<()> {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (ident, codepoint) in entries.iter() {
        writeln!(out, "    {}('\\u{}'),", ident, normalize_codepoint(codepoint))?;
    }
    Ok(())
}
