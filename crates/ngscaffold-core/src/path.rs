//! Destination path derivation

/// How a generator's root directory combines with a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// A namespace replaces the root entirely
    Override(&'static str),
    /// A namespace is appended below the root
    Append(&'static str),
}

/// Directives land in `common/directive` unless a namespace is given
pub const DIRECTIVE_ROOT: Root = Root::Override("common/directive");

/// States always live under `states/`
pub const STATE_ROOT: Root = Root::Append("states");

/// Map (name, extension, namespace) to a relative, slash-separated path.
///
/// Empty namespaces are treated as absent. Inputs are expected to be
/// validated already; separators are not normalized.
pub fn build_path(name: &str, extension: &str, namespace: Option<&str>, root: Root) -> String {
    let namespace = namespace.filter(|ns| !ns.is_empty());
    let dir = match (root, namespace) {
        (Root::Override(_), Some(ns)) => ns.split('.').collect::<Vec<_>>().join("/"),
        (Root::Append(base), Some(ns)) => {
            format!("{}/{}", base, ns.split('.').collect::<Vec<_>>().join("/"))
        }
        (Root::Override(base), None) | (Root::Append(base), None) => base.to_string(),
    };
    format!("{}/{}{}", dir, kebab_case(name), extension)
}

/// Lowercase, hyphen-separated form of a name (`supportBox` -> `support-box`)
pub fn kebab_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Split on non-alphanumerics, lower->upper transitions, letter<->digit
/// transitions, and before the last capital of an acronym run (`XMLHttp`).
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() != c.is_alphabetic())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
