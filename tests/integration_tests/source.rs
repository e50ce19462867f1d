//! Running the status command through a mock `sinfo` on PATH.
#![cfg(unix)]

use crate::common::mock_commands::{create_failing_sinfo, create_mock_sinfo};
use crate::common::{TestEnv, stderr, stdout};

const STATUS: &str = "\
batch*  up  infinite  3  idle   c[01-03]
batch*  up  infinite  1  down*  c04
";

#[test]
fn test_default_run_queries_sinfo() {
    let env = TestEnv::new();
    create_mock_sinfo(env.bin_dir(), STATUS);

    let output = env.run(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("Partition: batch*\nTotal nodes: 4, Grid size: 2x2\n"), "{out}");
    assert!(out.contains("I I \nI X \n"), "{out}");
}

#[test]
fn test_failing_sinfo_exits_with_error() {
    let env = TestEnv::new();
    create_failing_sinfo(env.bin_dir(), "slurm_load_partitions: Unable to contact controller", 1);

    let output = env.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(err.contains("Cannot read node status from sinfo -h"), "{err}");
    assert!(err.contains("Unable to contact controller"), "{err}");
}

#[test]
fn test_missing_sinfo_exits_with_error() {
    let env = TestEnv::new();

    // Nothing on PATH, so `sinfo` can't be spawned
    let output = env
        .command()
        .env("PATH", env.bin_dir())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot read node status"));
}

#[test]
fn test_silent_sinfo_is_an_error() {
    let env = TestEnv::new();
    create_mock_sinfo(env.bin_dir(), "");

    let output = env.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no output"));
}

#[test]
fn test_verbose_logs_the_command() {
    let env = TestEnv::new();
    create_mock_sinfo(env.bin_dir(), STATUS);

    let output = env.run(&["-v"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("$ sinfo -h [status]"));
}

#[test]
fn test_input_skips_the_command() {
    let env = TestEnv::new();
    create_failing_sinfo(env.bin_dir(), "should not run", 3);
    let snapshot = env.write_snapshot(STATUS);

    let output = env.run(&["--input", snapshot.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stderr(&output).contains("should not run"));
}
