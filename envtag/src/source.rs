//! Where variable values are looked up.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A read-only lookup of variables by exact, case-sensitive key.
pub trait Source {
    /// The value of `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Source for Environment {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

impl<S: BuildHasher> Source for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Source for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_reads_process_env() {
        env::set_var("ENVTAG_SOURCE_TEST", "value");
        assert_eq!(Environment.get("ENVTAG_SOURCE_TEST"), Some("value".to_string()));
        env::remove_var("ENVTAG_SOURCE_TEST");
        assert_eq!(Environment.get("ENVTAG_SOURCE_TEST"), None);
    }

    #[test]
    fn test_map_sources_are_case_sensitive() {
        let map: HashMap<String, String> = [("KEY".to_string(), "v".to_string())].into();
        assert_eq!(Source::get(&map, "KEY"), Some("v".to_string()));
        assert_eq!(Source::get(&map, "key"), None);

        let tree: BTreeMap<String, String> = map.into_iter().collect();
        assert_eq!(Source::get(&tree, "KEY"), Some("v".to_string()));
    }
}
