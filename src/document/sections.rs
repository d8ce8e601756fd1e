//! Ordered named-section container.

/// Ordered mapping from section name to section value.
///
/// Replacing an existing section keeps its position; a new section is
/// appended at the end.
///
/// # Example
///
/// ```
/// use layered_settings::document::SectionList;
///
/// let mut sections: SectionList<u32> = [("A".to_string(), 1), ("B".to_string(), 2)]
///     .into_iter()
///     .collect();
/// sections.replace_or_append("A", 10);
/// sections.replace_or_append("C", 3);
///
/// let names: Vec<&str> = sections.names().collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// assert_eq!(sections.get("A"), Some(&10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SectionList<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for SectionList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> SectionList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, section)| section)
    }

    /// Replaces the named section in place, or appends it if absent.
    pub fn replace_or_append(&mut self, name: &str, section: T) {
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = section,
            None => self.entries.push((name.to_string(), section)),
        }
    }

    /// Iterates over the sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries
            .iter()
            .map(|(name, section)| (name.as_str(), section))
    }

    /// Iterates over the section names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects sections; a repeated name replaces the earlier value in place.
impl<T> FromIterator<(String, T)> for SectionList<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut sections = Self::new();
        for (name, section) in iter {
            sections.replace_or_append(&name, section);
        }
        sections
    }
}
