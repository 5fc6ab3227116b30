//! Directory listing, rename planning and copy orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::report::{ReportRename, ReportRenameBuilder};
use crate::spec::{RenameError, SpecRenameOptions, SpecRenameTask, SpecSourceEntry};
use crate::util::{
    TypeRenamePattern, compile_pattern, copy_file_with_metadata, derive_target_name,
    should_keep_entry, split_extension,
};

/// Copy every entry of `dir_input` into `dir_output` as `image_NNNN<ext>`.
///
/// Entries are taken from the top level of `dir_input` only, sorted by full
/// path and numbered densely from 1. Each entry is copied with its metadata
/// (best effort) and `on_progress` is called once the copy is committed. An
/// existing file with the same target name is overwritten.
///
/// The run stops at the first failure. Files copied before the failure are
/// left in place.
///
/// `dir_input` is validated before `dir_output` is created, so a missing
/// input never leaves an empty output directory behind.
pub fn rename_copy<P, Q, F>(
    dir_input: P,
    dir_output: Q,
    spec_rn_options: SpecRenameOptions,
    mut on_progress: F,
) -> Result<ReportRename, RenameError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(&SpecRenameTask),
{
    let path_dir_src = dir_input.as_ref().to_path_buf();
    let path_dir_dst = dir_output.as_ref().to_path_buf();

    let pat_entries = compile_pattern(
        spec_rn_options.pattern_entries.as_deref(),
        spec_rn_options.rule_pattern,
    )?;

    match fs::metadata(&path_dir_src) {
        Ok(meta_dir_src) if meta_dir_src.is_dir() => {}
        Ok(_) => {
            return Err(RenameError::InputNotFound {
                path: path_dir_src,
                message: "Not a directory".to_string(),
            });
        }
        Err(e) => {
            return Err(RenameError::InputNotFound {
                path: path_dir_src,
                message: e.to_string(),
            });
        }
    }

    if !spec_rn_options.if_dry_run {
        fs::create_dir_all(&path_dir_dst).map_err(|e| RenameError::OutputCreateFailed {
            path: path_dir_dst.clone(),
            message: e.to_string(),
        })?;
        debug!(path = %path_dir_dst.display(), "output directory ready");
    }

    let mut builder_rn_report = ReportRenameBuilder::default();
    let l_entries = list_source_entries(
        &path_dir_src,
        pat_entries.as_ref(),
        spec_rn_options.if_skip_hidden,
        &mut builder_rn_report,
    )?;

    let l_tasks = plan_rename(l_entries, &path_dir_dst);
    builder_rn_report.add_matched(l_tasks.len() as u64);
    debug!(
        n_tasks = l_tasks.len(),
        path = %path_dir_src.display(),
        "rename plan built"
    );

    for spec_task in &l_tasks {
        if spec_rn_options.if_dry_run {
            builder_rn_report.add_skipped();
            on_progress(spec_task);
            continue;
        }

        copy_file_with_metadata(&spec_task.path_src, &spec_task.path_dst).map_err(|e| {
            RenameError::CopyFailed {
                source: spec_task.path_src.clone(),
                destination: spec_task.path_dst.clone(),
                message: e.to_string(),
            }
        })?;
        builder_rn_report.add_copied();
        trace!(
            index = spec_task.index,
            src = %spec_task.path_src.display(),
            dst = %spec_task.path_dst.display(),
            "copied"
        );
        on_progress(spec_task);
    }

    Ok(builder_rn_report.build())
}

/// Sort `l_entries` by full path and assign dense 1-based target names.
pub fn plan_rename(
    mut l_entries: Vec<SpecSourceEntry>,
    path_dir_dst: &Path,
) -> Vec<SpecRenameTask> {
    l_entries.sort_by(|a, b| a.path_src.as_os_str().cmp(b.path_src.as_os_str()));

    l_entries
        .into_iter()
        .enumerate()
        .map(|(n_pos, spec_entry)| {
            let index = n_pos + 1;
            let name_target = derive_target_name(index, split_extension(&spec_entry.name_entry));
            SpecRenameTask {
                index,
                path_dst: path_dir_dst.join(&name_target),
                name_target,
                path_src: spec_entry.path_src,
            }
        })
        .collect()
}

fn list_source_entries(
    path_dir_src: &Path,
    pat_entries: Option<&TypeRenamePattern>,
    if_skip_hidden: bool,
    builder_rn_report: &mut ReportRenameBuilder,
) -> Result<Vec<SpecSourceEntry>, RenameError> {
    let to_input_error = |e: std::io::Error| RenameError::InputNotFound {
        path: path_dir_src.to_path_buf(),
        message: e.to_string(),
    };

    let mut l_entries = Vec::new();
    for entry_res in fs::read_dir(path_dir_src).map_err(to_input_error)? {
        let entry = entry_res.map_err(to_input_error)?;
        builder_rn_report.add_scanned();

        let name_entry = entry.file_name().to_string_lossy().to_string();
        if !should_keep_entry(&name_entry, pat_entries, if_skip_hidden) {
            continue;
        }
        let path_src: PathBuf = entry.path();
        l_entries.push(SpecSourceEntry {
            path_src,
            name_entry,
        });
    }
    Ok(l_entries)
}
