/// Names consumed by the progress ring itself. They are never forwarded to
/// the container element.
pub const RESERVED: &[&str] = &["value", "size", "show-value", "stroke-width"];

/// Caller-supplied attributes for a component's outer element.
///
/// Entries keep insertion order; inserting a name twice replaces the first
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassthroughAttrs {
    entries: Vec<(&'static str, String)>,
}

impl PassthroughAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Entries that may be copied onto the element as-is: everything except
    /// reserved names and the ones listed in `handled`.
    pub fn forwarded<'a>(
        &'a self,
        handled: &'a [&'a str],
    ) -> impl Iterator<Item = (&'static str, &'a str)> + 'a {
        self.iter()
            .filter(move |(key, _)| !RESERVED.contains(key) && !handled.contains(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(&'static str, String)> for PassthroughAttrs {
    fn from_iter<T: IntoIterator<Item = (&'static str, String)>>(iter: T) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let attrs = PassthroughAttrs::new()
            .with("id", "upload")
            .with("title", "Upload progress")
            .with("data-step", "2");
        let names: Vec<_> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["id", "title", "data-step"]);
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut attrs = PassthroughAttrs::new().with("id", "a").with("title", "t");
        attrs.insert("id", "b");
        assert_eq!(attrs.get("id"), Some("b"));
        assert_eq!(attrs.iter().next(), Some(("id", "b")));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn forwarded_drops_reserved_and_handled_names() {
        let attrs = PassthroughAttrs::new()
            .with("value", "10")
            .with("class", "mt-4")
            .with("id", "ring")
            .with("stroke-width", "8")
            .with("style", "opacity: 0.5");
        let forwarded: Vec<_> = attrs.forwarded(&["class", "style"]).collect();
        assert_eq!(forwarded, [("id", "ring")]);
    }

    #[test]
    fn collects_from_pairs() {
        let attrs: PassthroughAttrs = [("id", "x".to_string()), ("id", "y".to_string())]
            .into_iter()
            .collect();
        assert_eq!(attrs.get("id"), Some("y"));
        assert!(!attrs.is_empty());
        assert!(PassthroughAttrs::new().is_empty());
    }
}
