//! Naming constants shared by the library and the CLI.

/// Prefix of every target file name.
pub const C_NAME_PREFIX: &str = "image_";
/// Minimum number of digits of the padded index. Larger indices grow past it.
pub const N_WIDTH_INDEX_MIN: usize = 4;
/// One-line tool description shown by `--help`.
pub const C_CLI_ABOUT: &str = "Rename files by adding a padded index to their names.";
