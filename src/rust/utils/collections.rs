use std::collections::{HashMap, HashSet};

/// Checks whether `needle` is in the list of strings, by exact equality.
pub fn contains(list: &[String], needle: &str) -> bool {
    list.iter().any(|item| item == needle)
}

/// Returns a copy of the list without duplicate values, preserving the
/// first-seen order.
pub fn unique_strings(list: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for entry in list {
        if seen.insert(entry.clone()) {
            unique.push(entry.clone());
        }
    }
    unique
}

/// Converts a list into a map keyed by each element's equality key.
///
/// Useful for testing whether elements of one list are present in another:
/// mapify the first and check whether elements of the second would occupy
/// the same key. The key function is injected by the value system; on
/// collision the last-seen element wins.
pub fn mapify<T, F>(items: Vec<T>, equality_key: F) -> HashMap<String, T>
where
    F: Fn(&T) -> String,
{
    let mut map = HashMap::new();
    for item in items {
        map.insert(equality_key(&item), item);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::syntax::ast::Value;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contains() {
        let list = strings(&["a", "b"]);
        assert!(contains(&list, "a"));
        assert!(!contains(&list, "c"));
        assert!(!contains(&[], "a"));
    }

    #[test]
    fn test_unique_strings_preserves_order() {
        let list = strings(&["a", "b", "a", "c"]);
        assert_eq!(unique_strings(&list), strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_unique_strings_empty() {
        assert_eq!(unique_strings(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_mapify_membership_across_lists() {
        let a = vec![Value::Number(1.0), Value::String("x".to_string())];
        let b = vec![
            Value::Number(1.0),
            Value::String("1".to_string()),
            Value::Boolean(true),
        ];

        let index = mapify(a, Value::equality_key);

        let present: Vec<bool> = b
            .iter()
            .map(|item| index.contains_key(&item.equality_key()))
            .collect();
        // the string "1" must not match the number 1
        assert_eq!(present, vec![true, false, false]);
    }

    #[test]
    fn test_mapify_last_seen_wins() {
        let items = vec![
            Value::String("first".to_string()),
            Value::String("second".to_string()),
        ];
        // key every element identically to force a collision
        let map = mapify(items, |_| "same".to_string());
        assert_eq!(map.len(), 1);
        assert_eq!(map["same"], Value::String("second".to_string()));
    }
}
