/// The raw `key = "value"` annotations attached to one field.
///
/// Written by `#[reflect(tag(key = "value", ...))]` and kept in declaration
/// order. Keys are not interpreted here.
///
/// ```
/// use tm_reflect::info::FieldTags;
///
/// static TAGS: FieldTags = FieldTags::new(&[("map", "id"), ("map", "other")]);
///
/// assert_eq!(TAGS.get("map"), Some("id"));
/// assert_eq!(TAGS.get("map_to"), None);
/// assert_eq!(TAGS.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldTags(&'static [(&'static str, &'static str)]);

impl FieldTags {
    pub const EMPTY: Self = Self(&[]);

    #[inline]
    pub const fn new(tags: &'static [(&'static str, &'static str)]) -> Self {
        Self(tags)
    }

    /// Returns the value of the first tag named `key`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
    }

    /// Iterate `(key, value)` pairs in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.0.iter().copied()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FieldTags {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}
