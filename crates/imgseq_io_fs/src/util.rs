use std::fs;
use std::io;
use std::path::Path;

use globset::{Glob, GlobMatcher};
use regex::Regex;

use crate::conf::{C_NAME_PREFIX, N_WIDTH_INDEX_MIN};
use crate::spec::{EnumRenamePatternMode, RenameError};

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeRenamePattern {
    Glob(GlobMatcher),
    Regex(Regex),
}

impl TypeRenamePattern {
    fn is_match(&self, value: &str) -> bool {
        match self {
            Self::Glob(matcher) => matcher.is_match(value),
            Self::Regex(regex) => regex.is_match(value),
        }
    }
}

pub(crate) fn compile_pattern(
    pattern: Option<&str>,
    rule_pattern: EnumRenamePatternMode,
) -> Result<Option<TypeRenamePattern>, RenameError> {
    let Some(pattern) = pattern else {
        return Ok(None);
    };

    match rule_pattern {
        EnumRenamePatternMode::Glob => {
            let matcher = Glob::new(pattern)
                .map_err(|e| RenameError::InvalidPattern(format!("Invalid entry pattern: {e}")))?
                .compile_matcher();
            Ok(Some(TypeRenamePattern::Glob(matcher)))
        }
        EnumRenamePatternMode::Regex => {
            let regex = Regex::new(pattern)
                .map_err(|e| RenameError::InvalidPattern(format!("Invalid entry pattern: {e}")))?;
            Ok(Some(TypeRenamePattern::Regex(regex)))
        }
    }
}

pub(crate) fn should_keep_entry(
    name_entry: &str,
    pattern: Option<&TypeRenamePattern>,
    if_skip_hidden: bool,
) -> bool {
    if if_skip_hidden && name_entry.starts_with('.') {
        return false;
    }
    match pattern {
        None => true,
        Some(p) => p.is_match(name_entry),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Naming

/// Extension of `name_entry`, including the leading dot.
///
/// Leading dots never start an extension, so `.bashrc` yields `""`.
/// A trailing dot is kept: `notes.` yields `"."`.
pub fn split_extension(name_entry: &str) -> &str {
    let n_leading_dots = name_entry.len() - name_entry.trim_start_matches('.').len();
    match name_entry[n_leading_dots..].rfind('.') {
        Some(n_pos) => &name_entry[n_leading_dots + n_pos..],
        None => "",
    }
}

/// Target basename for the entry at 1-based `index`.
///
/// # Examples
/// ```
/// use imgseq_io_fs::derive_target_name;
/// assert_eq!(derive_target_name(7, ".png"), "image_0007.png");
/// assert_eq!(derive_target_name(12345, ""), "image_12345");
/// ```
pub fn derive_target_name(index: usize, ext: &str) -> String {
    format!("{C_NAME_PREFIX}{index:0width$}{ext}", width = N_WIDTH_INDEX_MIN)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FileCopy

pub(crate) fn copy_file_with_metadata(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<(), io::Error> {
    fs::copy(path_file_src, path_file_dst)?;
    apply_metadata(path_file_src, path_file_dst)?;
    #[cfg(target_os = "linux")]
    {
        copy_xattrs_linux(path_file_src, path_file_dst);
    }
    Ok(())
}

fn apply_metadata(path_file_src: &Path, path_file_dst: &Path) -> Result<(), io::Error> {
    use filetime::{FileTime, set_file_times};

    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let Ok(iter_xattr_names) = xattr::list(path_file_src) else {
        return;
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        let _ = xattr::set(path_file_dst, &name, &raw_value);
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
