use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use imgseq_io_fs::{
    C_CLI_ABOUT, RenameError, ReportRename, SpecRenameOptions, SpecRenameTask, rename_copy,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "imgseq", about = C_CLI_ABOUT, long_about = None)]
struct Args {
    /// Path to the input folder containing files to rename.
    input_folder: PathBuf,
    /// Path to the output folder where renamed files will be saved.
    output_folder: PathBuf,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init();
}

fn print_progress(spec_task: &SpecRenameTask) {
    println!(
        "Renamed and moved: {} -> {}",
        spec_task.path_src.display(),
        spec_task.path_dst.display()
    );
}

fn run(args: &Args) -> Result<ReportRename, RenameError> {
    rename_copy(
        &args.input_folder,
        &args.output_folder,
        SpecRenameOptions::default(),
        print_progress,
    )
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(&args) {
        Ok(report) => {
            info!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Args;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn args_require_exactly_two_positionals() {
        assert!(Args::try_parse_from(["imgseq", "in"]).is_err());
        assert!(Args::try_parse_from(["imgseq", "in", "out", "extra"]).is_err());

        let args = Args::try_parse_from(["imgseq", "in", "out"]).expect("two positionals");
        assert_eq!(args.input_folder, std::path::PathBuf::from("in"));
        assert_eq!(args.output_folder, std::path::PathBuf::from("out"));
    }
}
