//! Whole-string validators for names, namespaces and restrictions

use regex::Regex;
use std::sync::LazyLock;

// Directive names exclude digits while state names allow them.
static DIRECTIVE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]+$").expect("valid directive name pattern"));
static STATE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid state name pattern"));
static CONTROLLER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid controller name pattern"));
static NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_.]+$").expect("valid namespace pattern"));
static RESTRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[AEC]{1,3}$").expect("valid restrict pattern"));

pub fn is_directive_name(name: &str) -> bool {
    DIRECTIVE_NAME.is_match(name)
}

pub fn is_state_name(name: &str) -> bool {
    STATE_NAME.is_match(name)
}

pub fn is_controller_name(name: &str) -> bool {
    CONTROLLER_NAME.is_match(name)
}

pub fn is_namespace(location: &str) -> bool {
    NAMESPACE.is_match(location)
}

pub fn is_restrict(restrict: &str) -> bool {
    RESTRICT.is_match(restrict)
}

/// Apply `element` to every comma-separated entry after trimming `^` and spaces
pub fn is_list_of(list: &str, element: fn(&str) -> bool) -> bool {
    list.split(',')
        .all(|item| element(item.trim_matches(|c| c == '^' || c == ' ')))
}

/// Turn a predicate result into a prompt validation outcome
pub fn check(valid: bool, message: &str) -> Result<(), String> {
    if valid {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_name() {
        assert!(is_directive_name("myDirective"));
        assert!(is_directive_name("my_directive"));
        assert!(!is_directive_name("my_directive2"));
        assert!(!is_directive_name("my-directive"));
        assert!(!is_directive_name(""));
    }

    #[test]
    fn test_state_name_allows_digits() {
        assert!(is_state_name("myState2"));
        assert!(is_state_name("support_box"));
        assert!(!is_state_name("my-state"));
        assert!(!is_state_name("my state"));
    }

    #[test]
    fn test_namespace() {
        assert!(is_namespace("hf.ecu"));
        assert!(is_namespace("_.hf.ecu"));
        assert!(!is_namespace("Hf.ecu"));
        assert!(!is_namespace("hf/ecu"));
        assert!(!is_namespace("hf2"));
    }

    #[test]
    fn test_restrict() {
        assert!(is_restrict("A"));
        assert!(is_restrict("AE"));
        assert!(is_restrict("AEC"));
        assert!(!is_restrict("D"));
        assert!(!is_restrict("AECD"));
        assert!(!is_restrict(""));
        assert!(!is_restrict("a"));
    }

    #[test]
    fn test_controller_name() {
        assert!(is_controller_name("MyController"));
        assert!(!is_controller_name("MyController2"));
        assert!(!is_controller_name("^MyController"));
    }

    #[test]
    fn test_list_trims_caret_and_spaces() {
        assert!(is_list_of("^Foo, Bar^", is_controller_name));
        assert!(is_list_of("^^Foo", is_controller_name));
        assert!(is_list_of("Foo", is_controller_name));
    }

    #[test]
    fn test_list_fails_if_any_element_fails() {
        assert!(!is_list_of("Foo, Bar2", is_controller_name));
        assert!(!is_list_of("Foo,,Bar", is_controller_name));
        assert!(!is_list_of("Fo^o", is_controller_name));
    }

    #[test]
    fn test_check_message() {
        assert_eq!(check(true, "bad"), Ok(()));
        assert_eq!(check(false, "bad"), Err("bad".to_string()));
    }
}
