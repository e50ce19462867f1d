//! Config file and environment overrides for the status command.
#![cfg(unix)]

use std::time::{Duration, Instant};

use crate::common::mock_commands::write_mock_script;
use crate::common::{TestEnv, stderr, stdout};

/// A status command outside PATH that prints one node only when given `--fast`.
fn write_custom_command(env: &TestEnv) -> std::path::PathBuf {
    let dir = env.root().join("slurm");
    std::fs::create_dir(&dir).unwrap();
    write_mock_script(
        &dir,
        "my-sinfo",
        "#!/bin/sh\nif [ \"$1\" = \"--fast\" ]; then\n  echo 'fast up inf 1 resv f1'\n  exit 0\nfi\nexit 4\n",
    )
}

#[test]
fn test_config_selects_command_and_args() {
    let env = TestEnv::new();
    let command = write_custom_command(&env);
    env.write_config(&format!(
        "command = \"{}\"\nargs = [\"--fast\"]\n",
        command.display()
    ));

    let output = env.run(&[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Partition: fast\nTotal nodes: 1, Grid size: 1x1\nR \n"));
}

#[test]
fn test_config_flag_overrides_env_path() {
    let env = TestEnv::new();
    let command = write_custom_command(&env);
    // The env-provided path holds a broken file; --config must win
    env.write_config("timeout = \"never\"\n");

    let other = env.root().join("other.toml");
    std::fs::write(
        &other,
        format!("command = \"{}\"\nargs = [\"--fast\"]\n", command.display()),
    )
    .unwrap();

    let output = env.run(&["--config", other.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Partition: fast"));
}

#[test]
fn test_invalid_config_fails() {
    let env = TestEnv::new();
    env.write_config("timeout = \"never\"\n");

    let output = env.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load config"));
}

#[test]
fn test_env_overrides_command() {
    let env = TestEnv::new();
    let command = write_custom_command(&env);
    env.write_config("args = [\"--fast\"]\n");

    let output = env
        .command()
        .env("NODEGRID_COMMAND", &command)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Partition: fast"));
}

#[test]
fn test_timeout_stops_a_hung_command() {
    let env = TestEnv::new();
    // Wrapper-style script: `sleep` runs as a child of the shell
    let command = write_mock_script(env.bin_dir(), "slow-sinfo", "#!/bin/sh\nsleep 10\n");
    env.write_config(&format!("command = \"{}\"\ntimeout = 1\n", command.display()));

    let start = Instant::now();
    let output = env.run(&[]);
    assert!(start.elapsed() < Duration::from_secs(5), "took {:?}", start.elapsed());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("timed out"), "{}", stderr(&output));
}
