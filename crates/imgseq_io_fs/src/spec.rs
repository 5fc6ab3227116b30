//! Rename specification models and top-level error types.

use std::fmt;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Pattern matching mode for the entry filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumRenamePatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    Glob,
    /// Regular expression pattern.
    Regex,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `rename_copy`.
#[derive(Debug, Clone)]
pub struct SpecRenameOptions {
    /// Optional pattern applied to entry basename; `None` keeps every entry.
    pub pattern_entries: Option<String>,
    /// Pattern interpretation mode.
    pub rule_pattern: EnumRenamePatternMode,
    /// Skip entries whose basename starts with `.`.
    pub if_skip_hidden: bool,
    /// Do not mutate filesystem; report what would happen.
    pub if_dry_run: bool,
}

impl Default for SpecRenameOptions {
    fn default() -> Self {
        Self {
            pattern_entries: None,
            rule_pattern: EnumRenamePatternMode::Glob,
            if_skip_hidden: false,
            if_dry_run: false,
        }
    }
}

/// One entry found directly inside the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSourceEntry {
    /// Input directory joined with the entry name.
    pub path_src: PathBuf,
    /// Entry basename.
    pub name_entry: String,
}

/// One planned copy: dense 1-based index plus source and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRenameTask {
    /// 1-based position in the sorted entry list.
    pub index: usize,
    /// Target basename, e.g. `image_0001.png`.
    pub name_target: String,
    /// Source path.
    pub path_src: PathBuf,
    /// Destination path inside the output directory.
    pub path_dst: PathBuf,
}

/// Run-level failures. Every variant aborts the run.
#[derive(Debug)]
pub enum RenameError {
    /// Input directory is missing, not a directory, or cannot be listed.
    InputNotFound {
        /// Input path as supplied.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Output directory could not be created.
    OutputCreateFailed {
        /// Output path as supplied.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// One entry could not be copied; earlier copies stay in place.
    CopyFailed {
        /// Source entry path.
        source: PathBuf,
        /// Planned destination path.
        destination: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Invalid entry filter pattern.
    InvalidPattern(String),
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path, message } => {
                write!(f, "Input directory not found: {} ({message})", path.display())
            }
            Self::OutputCreateFailed { path, message } => {
                write!(
                    f,
                    "Failed to create output directory {}: {message}",
                    path.display()
                )
            }
            Self::CopyFailed {
                source,
                destination,
                message,
            } => write!(
                f,
                "Failed to copy {} -> {}: {message}",
                source.display(),
                destination.display()
            ),
            Self::InvalidPattern(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RenameError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
