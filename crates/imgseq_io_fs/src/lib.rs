//! `imgseq_io_fs` v1:
//! Rust-side sequential rename/copy engine.
//!
//! Module layout:
//! - `conf`   : fixed naming constants
//! - `rename` : enumeration, planning and copy orchestration
//! - `spec`   : enums/options/errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod conf;
pub mod rename;
pub mod report;
pub mod spec;
mod util;

pub use conf::{C_CLI_ABOUT, C_NAME_PREFIX, N_WIDTH_INDEX_MIN};
pub use rename::{plan_rename, rename_copy};
pub use report::{ReportRename, ReportRenameBuilder};
pub use spec::{
    EnumRenamePatternMode, RenameError, SpecRenameOptions, SpecRenameTask, SpecSourceEntry,
};
pub use util::{derive_target_name, split_extension};
