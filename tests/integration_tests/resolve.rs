use rstest::rstest;

use crate::common::{RunResult, TestEnv, test_env};

#[rstest]
fn test_explicit_value_beats_environment(mut test_env: TestEnv) {
    test_env
        .set_var("BBM_CAIYUN_API_KEY", "from-env")
        .set_var("BBM_DEEPSEEK_API_KEY", "from-env");

    let result = test_env.run(&["resolve", "caiyun_key", "--value", "mykey"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "mykey\n");
}

#[rstest]
fn test_explicit_value_with_nothing_set(test_env: TestEnv) {
    let result = test_env.run(&["resolve", "caiyun_key", "--value", "mykey"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "mykey\n");
}

#[rstest]
fn test_legacy_alias_then_primary(mut test_env: TestEnv) {
    test_env.set_var("DEEPSEEK_API_KEY", "abc");
    let result = test_env.run(&["resolve", "deepseek_key"]);
    assert_eq!(result.stdout, "abc\n");

    test_env.set_var("BBM_DEEPSEEK_API_KEY", "xyz");
    let result = test_env.run(&["resolve", "deepseek_key"]);
    assert_eq!(result.stdout, "xyz\n");
}

#[rstest]
fn test_empty_explicit_and_empty_primary_fall_through(mut test_env: TestEnv) {
    test_env
        .set_var("BBM_OPENAI_API_KEY", "")
        .set_var("OPENAI_API_KEY", "legacy");
    let result = test_env.run(&["resolve", "openai_key", "--value", ""]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "legacy\n");
}

#[rstest]
fn test_unset_exits_with_candidates(test_env: TestEnv) {
    let result = test_env.run(&["resolve", "deepseek_key"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("No value for deepseek_key"));
    assert!(result.stderr.contains("BBM_DEEPSEEK_API_KEY or DEEPSEEK_API_KEY"));
}

#[rstest]
fn test_unknown_setting_fails_fast(mut test_env: TestEnv) {
    test_env.set_var("BBM_DEEPSEEK_API_KEY", "xyz");
    let result = test_env.run(&["resolve", "deepsek_key"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Unknown setting deepsek_key"));
    assert!(result.stderr.contains("Did you mean deepseek_key?"));
}

#[rstest]
#[case("deepseek-key")]
#[case("DEEPSEEK_KEY")]
fn test_setting_name_spellings(mut test_env: TestEnv, #[case] name: &str) {
    test_env.set_var("BBM_DEEPSEEK_API_KEY", "xyz");
    let result = test_env.run(&["resolve", name]);
    assert_eq!(result.stdout, "xyz\n");
}

#[rstest]
fn test_split_prints_one_key_per_line(mut test_env: TestEnv) {
    test_env.set_var("BBM_OPENAI_API_KEY", "sk-a, sk-b,,sk-c");
    let result = test_env.run(&["resolve", "openai_key", "--split"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "sk-a\nsk-b\nsk-c\n");
}

#[rstest]
fn test_split_with_only_separators_fails(test_env: TestEnv) {
    let result = test_env.run(&["resolve", "openai_key", "--value", ",,", "--split"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("openai_key contains only separators"));
}

#[rstest]
fn test_debug_logging_never_prints_value(mut test_env: TestEnv) {
    test_env.set_var("DEEPSEEK_API_KEY", "sk-hidden");
    let result = test_env.run(&["resolve", "deepseek_key", "-vv"]);
    assert_eq!(result.stdout, "sk-hidden\n");
    assert!(result.stderr.contains("DEEPSEEK_API_KEY"));
    assert!(!result.stderr.contains("sk-hidden"));
}

#[cfg(unix)]
#[rstest]
fn test_non_utf8_primary_falls_through_to_legacy(test_env: TestEnv) {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = test_env
        .command()
        .env("BBM_OPENAI_API_KEY", OsStr::from_bytes(b"\xff"))
        .env("OPENAI_API_KEY", "legacy")
        .args(["resolve", "openai_key"])
        .output()
        .unwrap();
    let result = RunResult::from(output);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "legacy\n");
}
