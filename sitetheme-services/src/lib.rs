// SPDX-License-Identifier: MIT OR Apache-2.0
//! Services for writing generated site themes to disk.

/// Generator settings from defaults, a TOML file and the environment.
pub mod settings;
/// The [ThemeFileService].
pub mod theme_files;

pub use settings::GeneratorSettings;
pub use theme_files::{ThemeFileService, ThemeFiles};
