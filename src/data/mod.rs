//! Icon metadata handling
//!
//! This module handles the input side of the generator:
//! - Loading and filtering the icons.json metadata map
//! - Codepoint string utilities

pub mod icons;
pub mod unicode;

pub use icons::{load_icon_set, solid_icons, IconRecord, ICONS_FILE};
