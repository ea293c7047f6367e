use super::*;

#[test]
fn test_set_and_get() {
    let mut env = Environment::new();
    env.set("x", Value::Number(42.0));
    assert_eq!(env.get("x"), Some(&Value::Number(42.0)));
}

#[test]
fn test_get_missing_returns_none() {
    let env = Environment::new();
    assert_eq!(env.get("missing"), None);
    assert!(!env.has("missing"));
}

#[test]
fn test_scoped_access() {
    let mut parent = Environment::new();
    parent.set("global", Value::Number(1.0));

    let mut child = Environment::with_parent(parent);
    child.set("local", Value::Number(2.0));

    assert_eq!(child.get("local"), Some(&Value::Number(2.0)));
    assert_eq!(child.get("global"), Some(&Value::Number(1.0)));
    assert!(!child.has_local("global"));
}

#[test]
fn test_shadowing() {
    let mut parent = Environment::new();
    parent.set("x", Value::Number(1.0));

    let mut child = Environment::with_parent(parent.clone());
    child.set("x", Value::Number(2.0));

    assert_eq!(child.get("x"), Some(&Value::Number(2.0)));
    assert_eq!(parent.get("x"), Some(&Value::Number(1.0)));
}

#[test]
fn test_remove_only_touches_current_scope() {
    let mut parent = Environment::new();
    parent.set("x", Value::Number(1.0));

    let mut child = Environment::with_parent(parent);
    assert_eq!(child.remove("x"), None);
    assert_eq!(child.get("x"), Some(&Value::Number(1.0)));
}
