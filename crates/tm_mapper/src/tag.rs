//! The field tag grammar.
//!
//! A field declares its mapping keys with `#[reflect(tag(..))]`:
//!
//! - `map = "k"`: the same key on both sides. It takes precedence over
//!   `map_from` and `map_to`, and `map = "-"` excludes the field entirely.
//! - `map_from = "k"`: the key this field receives when its record is the
//!   destination of a mapping.
//! - `map_to = "k"`: the key this field offers when its record is the source.
//!
//! On any side, `"-"` excludes the field and `"()"` binds it to the
//! counterpart's method named after the field instead of to a field.

use tm_reflect::info::FieldTags;

/// Shared key, both directions.
pub const TAG_MAP: &str = "map";
/// Key received when the record is a destination.
pub const TAG_MAP_FROM: &str = "map_from";
/// Key offered when the record is a source.
pub const TAG_MAP_TO: &str = "map_to";
/// Excludes the field.
pub const EXCLUDE: &str = "-";
/// Binds to the counterpart's method named after the field.
pub const METHOD_PLACEHOLDER: &str = "()";

// -----------------------------------------------------------------------------
// SideKey

/// The directive of one field for one mapping direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SideKey {
    /// No tag. Leaves are skipped, nested records are traversed without a
    /// key prefix.
    #[default]
    Absent,
    /// Explicitly excluded with `"-"`.
    Excluded,
    /// `"()"`: use the counterpart's method named after this field.
    Method,
    /// An explicit mapping key.
    Key(&'static str),
}

impl SideKey {
    /// Interprets a single tag value.
    ///
    /// An empty value is treated as no tag at all.
    pub fn from_value(value: &'static str) -> Self {
        match value {
            "" => Self::Absent,
            EXCLUDE => Self::Excluded,
            METHOD_PLACEHOLDER => Self::Method,
            key => Self::Key(key),
        }
    }

    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    pub const fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded)
    }

    /// Returns the explicit key, if any.
    #[inline]
    pub const fn key(&self) -> Option<&'static str> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// TagDirective

/// The parsed mapping directive of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TagDirective {
    /// Used when the field's record is the destination (pull).
    pub from: SideKey,
    /// Used when the field's record is the source (push).
    pub to: SideKey,
}

impl TagDirective {
    /// A directive that removes the field from both directions.
    pub const EXCLUDED: Self = Self {
        from: SideKey::Excluded,
        to: SideKey::Excluded,
    };

    /// Returns `true` if neither direction can see the field.
    #[inline]
    pub const fn is_excluded(&self) -> bool {
        self.from.is_excluded() && self.to.is_excluded()
    }
}

/// Parses the mapping tags of one field.
///
/// ```
/// use tm_mapper::tag::{self, SideKey, TagDirective};
/// use tm_reflect::info::FieldTags;
///
/// let shared = tag::parse(&FieldTags::new(&[("map", "id"), ("map_to", "other")]));
/// assert_eq!(shared, TagDirective { from: SideKey::Key("id"), to: SideKey::Key("id") });
///
/// let split = tag::parse(&FieldTags::new(&[("map_from", "()"), ("map_to", "-")]));
/// assert_eq!(split.from, SideKey::Method);
/// assert_eq!(split.to, SideKey::Excluded);
///
/// assert!(tag::parse(&FieldTags::new(&[("map", "-")])).is_excluded());
/// ```
pub fn parse(tags: &FieldTags) -> TagDirective {
    if let Some(shared) = tags.get(TAG_MAP) {
        let side = SideKey::from_value(shared);
        return TagDirective {
            from: side,
            to: side,
        };
    }

    TagDirective {
        from: tags.get(TAG_MAP_FROM).map_or(SideKey::Absent, SideKey::from_value),
        to: tags.get(TAG_MAP_TO).map_or(SideKey::Absent, SideKey::from_value),
    }
}

#[cfg(test)]
mod tests {
    use tm_reflect::info::FieldTags;

    use super::{SideKey, TagDirective, parse};

    #[test]
    fn untagged_field_is_absent_on_both_sides() {
        assert_eq!(parse(&FieldTags::EMPTY), TagDirective::default());
        assert!(!parse(&FieldTags::EMPTY).is_excluded());
    }

    #[test]
    fn shared_key_overrides_per_side_keys() {
        let tags = FieldTags::new(&[("map_from", "a"), ("map", "b"), ("map_to", "-")]);
        let directive = parse(&tags);
        assert_eq!(directive.from, SideKey::Key("b"));
        assert_eq!(directive.to, SideKey::Key("b"));
    }

    #[test]
    fn shared_exclusion_removes_both_sides() {
        let tags = FieldTags::new(&[("map", "-"), ("map_from", "a")]);
        assert_eq!(parse(&tags), TagDirective::EXCLUDED);
    }

    #[test]
    fn per_side_exclusion_keeps_other_side() {
        let tags = FieldTags::new(&[("map_from", "name"), ("map_to", "-")]);
        let directive = parse(&tags);
        assert_eq!(directive.from.key(), Some("name"));
        assert!(directive.to.is_excluded());
        assert!(!directive.is_excluded());

        let only_to = parse(&FieldTags::new(&[("map_to", "name")]));
        assert!(only_to.from.is_absent());
        assert_eq!(only_to.to, SideKey::Key("name"));
    }

    #[test]
    fn placeholder_and_empty_values() {
        let directive = parse(&FieldTags::new(&[("map", "()")]));
        assert_eq!(directive.from, SideKey::Method);
        assert_eq!(directive.to, SideKey::Method);

        assert_eq!(SideKey::from_value(""), SideKey::Absent);
        assert_eq!(SideKey::from_value("a.b"), SideKey::Key("a.b"));
    }

    #[test]
    fn unrelated_tags_are_ignored() {
        let tags = FieldTags::new(&[("serde", "rename"), ("map_to", "x")]);
        assert_eq!(parse(&tags).to, SideKey::Key("x"));
    }
}
