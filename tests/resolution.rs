use std::collections::HashMap;
use std::fs;
use std::path::MAIN_SEPARATOR;

use shoal::language::interpolate::{get_env_var, interpolate};
use shoal::language::preprocessor::{resolve_module_path, unalias_path};
use shoal::language::scope::Environment;
use shoal::language::syntax::ast::Value;

#[test]
fn test_interpolates_config_line_from_layered_environment() {
    let mut globals = Environment::new();
    globals.set("HOST", Value::String("localhost".to_string()));
    globals.set("PORT", Value::Number(8080.0));

    let mut scope = Environment::with_parent(globals);
    scope.set("PROTO", Value::String("http".to_string()));

    let line = interpolate("listen on ${PROTO}://$HOST:$PORT", &scope);
    assert_eq!(line, "listen on http://localhost:8080");
}

#[test]
fn test_escapes_and_gaps_survive_a_script_line() {
    let mut env = Environment::new();
    env.set("USER", Value::String("ada".to_string()));

    let line = interpolate(r"echo \$USER is $USER, shell is $SHELL_UNSET_XYZ", &env);
    assert_eq!(line, "echo $USER is ada, shell is ");
}

#[test]
fn test_env_var_default_reaches_scripts() {
    let env = Environment::new();
    let editor = get_env_var(&env, "SHOAL_ITEST_EDITOR", "vi");
    assert_eq!(editor, "vi");
}

#[test]
fn test_aliased_import_resolves_to_real_index_file() {
    // Lay out a package on disk and check the resolved import lands on
    // its entry file
    let dir = tempfile::tempdir().expect("create temp dir");
    let pkg_root = dir.path().join("vendor").join("strutil");
    fs::create_dir_all(&pkg_root).expect("create package dir");
    fs::write(pkg_root.join("index.shl"), "f greet() { return \"hi\" }\n")
        .expect("write entry file");

    let mut aliases = HashMap::new();
    aliases.insert(
        "strutil".to_string(),
        pkg_root.to_string_lossy().into_owned(),
    );

    let resolved = resolve_module_path("strutil", &aliases).expect("resolve import");
    assert_eq!(resolved, pkg_root.join("index.shl"));
    assert!(resolved.is_file());
}

#[test]
fn test_file_import_inside_aliased_package() {
    let mut aliases = HashMap::new();
    aliases.insert("pkg".to_string(), join_sep(&["vendor", "pkg"]));

    let logical = join_sep(&["pkg", "util.shl"]);
    assert_eq!(
        unalias_path(&logical, &aliases),
        join_sep(&["vendor", "pkg", "util.shl"])
    );
}

fn join_sep(parts: &[&str]) -> String {
    parts.join(&MAIN_SEPARATOR.to_string())
}
