use std::fmt;

/// Ordered set of class names on an element.
///
/// Insertion order is kept so `Display` round-trips a `class` attribute the
/// way it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace separated class attribute, dropping duplicates.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for name in value.split_whitespace() {
            list.add(name);
        }
        list
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c != name);
        self.0.len() != before
    }

    /// Flip presence of a class. Returns whether it is present afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.add(name)
        }
    }

    /// Replace the whole list, like assigning `className`.
    pub fn set(&mut self, value: &str) {
        *self = Self::parse(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
