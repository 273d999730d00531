use rstest::rstest;

use crate::common::{TestEnv, test_env};

#[rstest]
fn test_config_alias_supplies_value(mut test_env: TestEnv) {
    test_env.write_config("[aliases]\ncaiyun_key = [\"MY_CAIYUN\"]\n");
    test_env.set_var("MY_CAIYUN", "c-key");

    let result = test_env.run(&["resolve", "caiyun_key"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "c-key\n");

    let result = test_env.run(&["list"]);
    assert!(result.stdout.contains("caiyun_key    MY_CAIYUN (alias)"));
}

#[rstest]
fn test_config_alias_loses_to_builtin(mut test_env: TestEnv) {
    test_env.write_config("[aliases]\ndeepseek_key = [\"DS_KEY\"]\n");
    test_env
        .set_var("DS_KEY", "configured")
        .set_var("DEEPSEEK_API_KEY", "legacy");

    let result = test_env.run(&["resolve", "deepseek_key"]);
    assert_eq!(result.stdout, "legacy\n");
}

#[rstest]
fn test_config_alias_listed_in_unset_hint(test_env: TestEnv) {
    test_env.write_config("[aliases]\nxai_key = [\"GROK_KEY\"]\n");
    let result = test_env.run(&["resolve", "xai_key"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("BBM_XAI_API_KEY or GROK_KEY"));
}

#[rstest]
fn test_config_unknown_setting(test_env: TestEnv) {
    test_env.write_config("[aliases]\nopena_key = [\"X\"]\n");
    let result = test_env.run(&["list"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("Unknown setting opena_key"));
    assert!(result.stderr.contains("Did you mean openai_key?"));
}

#[rstest]
fn test_config_parse_error(test_env: TestEnv) {
    test_env.write_config("[aliases\n");
    let result = test_env.run(&["list"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("Failed to parse config"));
}

#[rstest]
fn test_unreadable_config_is_a_read_error(test_env: TestEnv) {
    std::fs::create_dir(test_env.config_path()).unwrap();
    let result = test_env.run(&["list"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("Failed to read config"));
    assert!(!result.stderr.contains("Failed to parse config"));
}

#[rstest]
fn test_explicit_missing_config_warns(test_env: TestEnv) {
    let result = test_env.run(&["--config", "nope.toml", "resolve", "caiyun_key", "--value", "k"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "k\n");
    assert!(result.stderr.contains("Config file not found"));
}

#[rstest]
fn test_missing_default_config_is_silent(test_env: TestEnv) {
    let result = test_env.run(&["resolve", "caiyun_key", "--value", "k"]);
    assert!(result.success);
    assert!(result.stderr.is_empty(), "stderr: {}", result.stderr);
}
