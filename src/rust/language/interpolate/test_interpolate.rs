use super::*;
use crate::language::syntax::ast::Value;

fn env_with(name: &str, value: Value) -> Environment {
    let mut env = Environment::new();
    env.set(name, value);
    env
}

#[test]
fn test_no_tokens_is_identity() {
    let env = Environment::new();
    assert_eq!(interpolate("plain text, no dollars", &env), "plain text, no dollars");
    assert_eq!(interpolate("", &env), "");
}

#[test]
fn test_bare_token() {
    let env = env_with("NAME", Value::String("world".to_string()));
    assert_eq!(interpolate("hello $NAME", &env), "hello world");
}

#[test]
fn test_braced_token() {
    let env = env_with("NAME", Value::String("world".to_string()));
    assert_eq!(interpolate("hello ${NAME}!", &env), "hello world!");
}

#[test]
fn test_undefined_variable_becomes_empty() {
    let env = Environment::new();
    assert_eq!(interpolate("hello $MISSING!", &env), "hello !");
    assert_eq!(interpolate("${MISSING}", &env), "");
}

#[test]
fn test_defined_but_empty_matches_undefined() {
    let env = env_with("EMPTY", Value::String(String::new()));
    assert_eq!(interpolate("$EMPTY", &env), interpolate("$UNSET", &env));
}

#[test]
fn test_escape_suppresses_lookup() {
    let env = env_with("NAME", Value::String("world".to_string()));
    assert_eq!(interpolate(r"\$NAME", &env), "$NAME");
    assert_eq!(interpolate(r"\${NAME}", &env), "${NAME}");
}

#[test]
fn test_escape_of_undefined_still_literal() {
    let env = Environment::new();
    assert_eq!(interpolate(r"\$MISSING", &env), "$MISSING");
}

#[test]
fn test_missing_close_brace_passes_through() {
    let env = env_with("NAME", Value::String("world".to_string()));
    assert_eq!(interpolate("my ${NAME", &env), "my ${NAME");
}

#[test]
fn test_stray_close_brace_joins_the_name() {
    // `$NAME}` looks up the name `NAME}`, which is never defined
    let env = env_with("NAME", Value::String("world".to_string()));
    assert_eq!(interpolate("$NAME}", &env), "");
}

#[test]
fn test_multiple_tokens_single_pass() {
    let mut env = Environment::new();
    env.set("A", Value::String("1".to_string()));
    env.set("B", Value::String("2".to_string()));
    assert_eq!(interpolate("$A and ${B} and $C", &env), "1 and 2 and ");
}

#[test]
fn test_non_string_values_render() {
    let mut env = Environment::new();
    env.set("N", Value::Number(3.5));
    env.set("OK", Value::Boolean(true));
    assert_eq!(interpolate("$N $OK", &env), "3.5 true");
}

#[test]
fn test_substituted_value_is_not_rescanned() {
    // A value containing a token survives as-is; the scan is single-pass
    // over the original input
    let env = env_with("A", Value::String("$B".to_string()));
    assert_eq!(interpolate("$A", &env), "$B");
}

#[test]
fn test_get_env_var_prefers_script_environment() {
    let env = env_with("SHOAL_TEST_TIER", Value::String("script".to_string()));
    unsafe { std::env::set_var("SHOAL_TEST_TIER", "process") };
    assert_eq!(get_env_var(&env, "SHOAL_TEST_TIER", "fallback"), "script");
    unsafe { std::env::remove_var("SHOAL_TEST_TIER") };
}

#[test]
fn test_get_env_var_falls_back_to_process() {
    let env = Environment::new();
    unsafe { std::env::set_var("SHOAL_TEST_PROCESS_ONLY", "process") };
    assert_eq!(
        get_env_var(&env, "SHOAL_TEST_PROCESS_ONLY", "fallback"),
        "process"
    );
    unsafe { std::env::remove_var("SHOAL_TEST_PROCESS_ONLY") };
}

#[test]
fn test_get_env_var_empty_process_value_uses_default() {
    let env = Environment::new();
    unsafe { std::env::set_var("SHOAL_TEST_EMPTY", "") };
    assert_eq!(get_env_var(&env, "SHOAL_TEST_EMPTY", "fallback"), "fallback");
    unsafe { std::env::remove_var("SHOAL_TEST_EMPTY") };
}

#[test]
fn test_get_env_var_default_when_absent_everywhere() {
    let env = Environment::new();
    assert_eq!(
        get_env_var(&env, "SHOAL_TEST_NEVER_SET_ANYWHERE", "fallback"),
        "fallback"
    );
}
