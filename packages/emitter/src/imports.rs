use std::collections::{BTreeMap, HashSet};

const KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Imports referenced by one output file, keyed by package path.
///
/// Each path receives a unique alias the first time it is referenced.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    own_path: String,
    aliases: BTreeMap<String, String>,
    taken: HashSet<String>,
}

impl ImportSet {
    /// An empty set for a file in the package at `own_path`
    pub fn new(own_path: impl Into<String>) -> Self {
        Self {
            own_path: own_path.into(),
            aliases: BTreeMap::new(),
            taken: HashSet::new(),
        }
    }

    /// The alias for `path`, allocating one if needed.
    ///
    /// Returns `None` for the file's own package, whose names need no qualifier.
    pub fn alias(&mut self, path: &str) -> Option<String> {
        if path.is_empty() || path == self.own_path {
            return None;
        }
        if let Some(alias) = self.aliases.get(path) {
            return Some(alias.clone());
        }

        let base = guess_alias(path);
        let mut alias = base.clone();
        let mut i = 0;
        while is_keyword(&alias) || self.taken.contains(&alias) {
            i += 1;
            alias = format!("{}{}", base, i);
        }

        self.taken.insert(alias.clone());
        self.aliases.insert(path.to_string(), alias.clone());
        Some(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// `(path, alias)` pairs sorted by path
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }
}

/// Whether `name` is a Go keyword, unusable as an identifier
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Derive an identifier from the last element of an import path.
fn guess_alias(path: &str) -> String {
    let last = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path);

    let alias: String = last
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .skip_while(|c| c.is_ascii_digit())
        .collect();

    if alias.is_empty() {
        "pkg".to_string()
    } else {
        alias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_alias() {
        assert_eq!(guess_alias("k8s.io/api/core/v1"), "v1");
        assert_eq!(guess_alias("github.com/org/crossplane-runtime/"), "crossplaneruntime");
        assert_eq!(guess_alias("example.org/2fa"), "fa");
        assert_eq!(guess_alias("example.org/123"), "pkg");
    }

    #[test]
    fn test_alias_is_stable() {
        let mut imports = ImportSet::new("example.org/own");
        assert_eq!(imports.alias("k8s.io/api/core/v1"), Some("v1".to_string()));
        assert_eq!(imports.alias("k8s.io/api/core/v1"), Some("v1".to_string()));
        assert_eq!(imports.iter().count(), 1);
    }

    #[test]
    fn test_colliding_aliases_get_suffix() {
        let mut imports = ImportSet::new("example.org/own");
        assert_eq!(imports.alias("k8s.io/api/core/v1"), Some("v1".to_string()));
        assert_eq!(imports.alias("example.org/meta/v1"), Some("v11".to_string()));
        assert_eq!(imports.alias("example.org/other/v1"), Some("v12".to_string()));
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("func"));
        assert!(is_keyword("range"));
        assert!(!is_keyword("mg"));
    }

    #[test]
    fn test_reserved_words_are_avoided() {
        let mut imports = ImportSet::new("");
        assert_eq!(imports.alias("example.org/type"), Some("type1".to_string()));
    }

    #[test]
    fn test_own_package_is_not_imported() {
        let mut imports = ImportSet::new("example.org/own");
        assert_eq!(imports.alias("example.org/own"), None);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_iter_sorted_by_path() {
        let mut imports = ImportSet::new("");
        imports.alias("k8s.io/api/core/v1");
        imports.alias("example.org/runtime/v1alpha1");
        let paths: Vec<&str> = imports.iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["example.org/runtime/v1alpha1", "k8s.io/api/core/v1"]);
    }
}
