use rstest::rstest;

use crate::common::{TestEnv, test_env};

#[rstest]
fn test_model_uses_setting_for_family(mut test_env: TestEnv) {
    test_env.set_var("DEEPSEEK_API_KEY", "abc");
    let result = test_env.run(&["model", "deepseek-reasoner"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "abc\n");
}

#[rstest]
fn test_model_explicit_key(mut test_env: TestEnv) {
    test_env.set_var("BBM_GOOGLE_GEMINI_KEY", "env");
    let result = test_env.run(&["model", "geminipro", "--key", "flag"]);
    assert_eq!(result.stdout, "flag\n");
}

#[rstest]
fn test_model_missing_required_key(test_env: TestEnv) {
    let result = test_env.run(&["model", "gpt4o"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Model gpt4o needs an API key (openai_key)"));
    assert!(result.stderr.contains("BBM_OPENAI_API_KEY or OPENAI_API_KEY"));
}

#[rstest]
fn test_model_ollama_placeholder(test_env: TestEnv) {
    let result = test_env.run(&["model", "openai", "--ollama-model", "llama3"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "ollama\n");
}

#[rstest]
#[case(&["model", "google"])]
#[case(&["model", "claude-code", "--agentic"])]
#[case(&["model", "glm-4.5", "--agentic"])]
fn test_model_without_key(test_env: TestEnv, #[case] args: &[&str]) {
    let result = test_env.run(args);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("runs without an API key"));
}

#[rstest]
fn test_claude_code_needs_key_without_agentic(test_env: TestEnv) {
    let result = test_env.run(&["model", "claude-code"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stdout.is_empty());
    assert!(
        result
            .stderr
            .contains("Model claude-code needs an API key (claude_key)")
    );
    assert!(result.stderr.contains("BBM_CLAUDE_API_KEY"));
}

#[rstest]
fn test_claude_code_uses_key_without_agentic(mut test_env: TestEnv) {
    test_env.set_var("BBM_CLAUDE_API_KEY", "sk-ant");
    let result = test_env.run(&["model", "claude-code-opus"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "sk-ant\n");
}

#[rstest]
fn test_unknown_model(test_env: TestEnv) {
    let result = test_env.run(&["model", "gpt4-o"]);
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("Unknown model gpt4-o"));
}
