use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

fn run_imgseq(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgseq"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn imgseq")
}

fn run_on(src: &Path, dst: &Path) -> Output {
    run_imgseq(&[src.as_os_str(), dst.as_os_str()])
}

#[test]
fn prints_one_progress_line_per_file_in_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = tmp.path().join("src");
    let dst = tmp.path().join("dst");
    std::fs::create_dir_all(&src).expect("mkdir src");
    std::fs::write(src.join("b.png"), "b").expect("write");
    std::fs::write(src.join("a.txt"), "a").expect("write");
    std::fs::write(src.join("c.png"), "c").expect("write");

    let output = run_on(&src, &dst);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let l_expected = [
        ("a.txt", "image_0001.txt"),
        ("b.png", "image_0002.png"),
        ("c.png", "image_0003.png"),
    ]
    .iter()
    .map(|(name_src, name_dst)| {
        format!(
            "Renamed and moved: {} -> {}",
            src.join(name_src).display(),
            dst.join(name_dst).display()
        )
    })
    .collect::<Vec<_>>();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), l_expected);

    assert_eq!(std::fs::read_to_string(dst.join("image_0003.png")).expect("read"), "c");
}

#[test]
fn empty_input_succeeds_silently() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = tmp.path().join("src");
    let dst = tmp.path().join("dst");
    std::fs::create_dir_all(&src).expect("mkdir src");

    let output = run_on(&src, &dst);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dst.is_dir());
}

#[test]
fn missing_input_exits_non_zero() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = tmp.path().join("missing");
    let dst = tmp.path().join("dst");

    let output = run_on(&src, &dst);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input directory not found"));
}

#[test]
fn wrong_argument_count_is_a_usage_error() {
    let output = run_imgseq(&[OsStr::new("only_one")]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());

    let output = run_imgseq(&[OsStr::new("a"), OsStr::new("b"), OsStr::new("c")]);
    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn help_prints_description_and_exits_zero() {
    let output = run_imgseq(&[OsStr::new("--help")]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rename files by adding a padded index to their names."));
    assert!(stdout.contains("<INPUT_FOLDER>"));
    assert!(stdout.contains("<OUTPUT_FOLDER>"));
}

#[test]
fn rerun_into_populated_output_overwrites() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let src = tmp.path().join("src");
    let dst = tmp.path().join("dst");
    std::fs::create_dir_all(&src).expect("mkdir src");
    std::fs::write(src.join("frame.png"), "one").expect("write");

    assert!(run_on(&src, &dst).status.success());
    std::fs::write(src.join("frame.png"), "two").expect("write");
    assert!(run_on(&src, &dst).status.success());

    assert_eq!(std::fs::read_to_string(dst.join("image_0001.png")).expect("read"), "two");
    assert_eq!(std::fs::read_dir(&dst).expect("read dir").count(), 1);
}
