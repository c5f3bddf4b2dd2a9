// src/config.rs

use std::path::PathBuf;

/// Where archives are discovered.
pub const INPUT_DIR: &str = "files/input";
/// Where the three cleaned CSV files land.
pub const OUTPUT_DIR: &str = "files/output";
/// Year combined with the `day`/`month` columns to build `last_contact_date`.
pub const CONTACT_YEAR: i32 = 2022;

/// Run configuration. The binary always uses `Config::default()`; tests point
/// the directories somewhere temporary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub contact_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            contact_year: CONTACT_YEAR,
        }
    }
}

impl Config {
    /// Same defaults, rooted at `base` instead of the working directory.
    #[cfg(test)]
    pub(crate) fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            input_dir: base.join(INPUT_DIR),
            output_dir: base.join(OUTPUT_DIR),
            ..Self::default()
        }
    }
}
