//! Partition selection with `-p/--partition`.

use rstest::rstest;

use crate::common::{TestEnv, stderr, stdout};

const STATUS: &str = "\
batch*  up  infinite  2  idle   b[1-2]
gpu     up  infinite  2  mix    g[1-2]
debug   up  infinite  1  alloc  d1
";

fn headers(out: &str) -> Vec<&str> {
    out.lines()
        .filter_map(|line| line.strip_prefix("Partition: "))
        .collect()
}

#[rstest]
#[case::plain_name(&["-p", "gpu"], &["gpu"])]
#[case::default_marker_optional(&["-p", "batch"], &["batch*"])]
#[case::default_marker_given(&["--partition", "batch*"], &["batch*"])]
#[case::source_order_kept(&["-p", "debug", "-p", "batch"], &["batch*", "debug"])]
fn test_partition_filter(#[case] args: &[&str], #[case] expected: &[&str]) {
    let env = TestEnv::new();
    let snapshot = env.write_snapshot(STATUS);

    let mut full_args = vec!["--input", snapshot.to_str().unwrap()];
    full_args.extend_from_slice(args);
    let output = env.run(&full_args);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(headers(&stdout(&output)), expected);
}

#[test]
fn test_unknown_partition_warns() {
    let env = TestEnv::new();
    let snapshot = env.write_snapshot(STATUS);

    let output = env.run(&["--input", snapshot.to_str().unwrap(), "-p", "bigmem", "-p", "gpu"]);
    assert!(output.status.success());
    assert_eq!(headers(&stdout(&output)), vec!["gpu"]);
    assert!(stderr(&output).contains("Partition bigmem not found in status output"));
}
