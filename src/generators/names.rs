use std::collections::HashSet;

/// Hands out type names that are unique within one generation session.
#[derive(Debug, Default)]
pub struct NameAllocator {
    prefix: String,
    taken: HashSet<String>,
}

impl NameAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            taken: HashSet::new(),
        }
    }

    /// Capitalize `base`, prefix it, and append 1, 2, 3, ... until unused.
    /// The prefixed name is what gets checked and registered.
    pub fn allocate(&mut self, base: &str) -> String {
        let base = format!("{}{}", self.prefix, upper_first(base));
        let mut candidate = base.clone();
        let mut suffix = 0u64;
        while self.taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}{suffix}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }

    /// Register a name verbatim. Returns `false` if it was already taken.
    pub fn register(&mut self, name: &str) -> bool {
        self.taken.insert(name.to_string())
    }
}

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_get_increasing_suffixes() {
        let mut names = NameAllocator::default();
        assert_eq!(names.allocate("Foo"), "Foo");
        assert_eq!(names.allocate("Foo"), "Foo1");
        assert_eq!(names.allocate("Foo"), "Foo2");
        assert_eq!(names.allocate("foo"), "Foo3");
    }

    #[test]
    fn suffix_skips_names_taken_elsewhere() {
        let mut names = NameAllocator::default();
        assert!(names.register("Foo1"));
        assert_eq!(names.allocate("Foo"), "Foo");
        assert_eq!(names.allocate("Foo"), "Foo2");
    }

    #[test]
    fn prefix_participates_in_uniqueness() {
        let mut names = NameAllocator::new("I");
        assert_eq!(names.allocate("user"), "IUser");
        assert_eq!(names.allocate("user"), "IUser1");
        // The unprefixed name is still free
        assert!(names.register("User"));
        assert!(!names.register("IUser"));
    }

    #[test]
    fn casing_helpers() {
        assert_eq!(upper_first("listUsers"), "ListUsers");
        assert_eq!(lower_first("RegionId"), "regionId");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first("ÉTAT"), "éTAT");
    }
}
