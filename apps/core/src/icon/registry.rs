//! Bundled symbolic-icon table.
//!
//! Maps bare symbolic keys to opaque component handles. The table is data,
//! not code: the resolver receives it as a parameter, so callers can extend
//! or replace it without touching resolution logic. Keys missing here fall
//! through to the CDN variant chain.

use std::collections::HashMap;

/// Opaque handle to a bundled renderable icon. The presentation layer owns
/// the mapping from `name` to an actual component; the core only needs
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct IconComponent {
    pub name: &'static str,
}

/// Keys shipped with the client bundle. Everything else goes to the CDN.
const BUILTIN_COMPONENTS: &[(&str, &str)] = &[
    ("html5", "Html5Icon"),
    ("css3", "Css3Icon"),
    ("sass", "SassIcon"),
    ("javascript", "JavascriptIcon"),
    ("typescript", "TypescriptIcon"),
    ("react", "ReactIcon"),
    ("vuejs", "VuejsIcon"),
    ("nextjs", "NextjsIcon"),
    ("nodejs", "NodejsIcon"),
    ("python", "PythonIcon"),
    ("django", "DjangoIcon"),
    ("ruby", "RubyIcon"),
    ("rails", "RailsIcon"),
    ("go", "GoIcon"),
    ("mysql", "MysqlIcon"),
    ("postgresql", "PostgresqlIcon"),
    ("docker", "DockerIcon"),
    ("amazonwebservices", "AwsIcon"),
    ("git", "GitIcon"),
    ("github", "GithubIcon"),
];

#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    entries: HashMap<String, IconComponent>,
}

impl IconRegistry {
    /// Registry with no bundled components — every symbolic key resolves via
    /// the CDN chain. Useful in tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry seeded with the client's bundled icon set.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for &(key, name) in BUILTIN_COMPONENTS {
            registry.insert(key, IconComponent { name });
        }
        registry
    }

    pub fn insert(&mut self, key: impl Into<String>, component: IconComponent) {
        self.entries.insert(key.into(), component);
    }

    /// Exact-match lookup on the bare key.
    pub fn get(&self, key: &str) -> Option<IconComponent> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
