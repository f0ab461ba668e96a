use core::any::{Any, TypeId};
use core::time::Duration;

use tm_reflect::info::Type;
use tm_utils::hash::HashSet;

/// Types that are always copied as a whole, never flattened.
///
/// Every entry is opaque to reflection already; listing them keeps the rule
/// visible and lets [`MapperConfig::without_default_leaves`] start from an
/// empty set.
pub const DEFAULT_LEAF_TYPES: &[Type] = &[
    Type::of::<Duration>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::DateTime<chrono::Utc>>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::DateTime<chrono::FixedOffset>>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::DateTime<chrono::Local>>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::NaiveDate>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::NaiveTime>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::NaiveDateTime>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::FixedOffset>(),
    #[cfg(feature = "chrono")]
    Type::of::<chrono::TimeDelta>(),
    #[cfg(feature = "url")]
    Type::of::<url::Url>(),
];

/// Configuration of a [`Mapper`](crate::Mapper).
///
/// The only setting is the set of leaf types: record types that are copied
/// as one value instead of being flattened into their fields.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use tm_mapper::MapperConfig;
/// use tm_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone)]
/// #[reflect(clone)]
/// struct Money { cents: i64, currency: String }
///
/// let config = MapperConfig::new().with_leaf::<Money>();
/// assert!(config.is_leaf_type::<Money>());
/// assert!(config.is_leaf_type::<Duration>());
///
/// let bare = MapperConfig::new().without_default_leaves();
/// assert!(!bare.is_leaf_type::<Duration>());
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct MapperConfig {
    leaves: HashSet<TypeId>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            leaves: DEFAULT_LEAF_TYPES.iter().map(Type::id).collect(),
        }
    }
}

impl MapperConfig {
    /// A configuration with the [`DEFAULT_LEAF_TYPES`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `T` as a whole wherever it appears as a field.
    #[inline]
    pub fn with_leaf<T: Any>(self) -> Self {
        self.with_leaf_type(TypeId::of::<T>())
    }

    /// See [`with_leaf`](Self::with_leaf).
    #[inline]
    pub fn with_leaf_type(mut self, type_id: TypeId) -> Self {
        self.leaves.insert(type_id);
        self
    }

    /// Removes the [`DEFAULT_LEAF_TYPES`]; leaves added explicitly stay.
    pub fn without_default_leaves(mut self) -> Self {
        for ty in DEFAULT_LEAF_TYPES {
            self.leaves.remove(&ty.id());
        }
        self
    }

    #[inline]
    pub fn is_leaf(&self, type_id: TypeId) -> bool {
        self.leaves.contains(&type_id)
    }

    #[inline]
    pub fn is_leaf_type<T: Any>(&self) -> bool {
        self.is_leaf(TypeId::of::<T>())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::time::Duration;

    use super::{DEFAULT_LEAF_TYPES, MapperConfig};

    #[test]
    fn defaults() {
        let config = MapperConfig::default();
        assert_eq!(config.leaf_count(), DEFAULT_LEAF_TYPES.len());
        assert!(config.is_leaf_type::<Duration>());
        assert!(!config.is_leaf_type::<u32>());
    }

    #[test]
    fn explicit_leaves_survive_removal_of_defaults() {
        let config = MapperConfig::new()
            .with_leaf_type(TypeId::of::<[u8; 4]>())
            .without_default_leaves();
        assert_eq!(config.leaf_count(), 1);
        assert!(config.is_leaf_type::<[u8; 4]>());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_leaves() {
        let config = MapperConfig::new();
        assert!(config.is_leaf_type::<chrono::DateTime<chrono::Utc>>());
        assert!(config.is_leaf_type::<chrono::NaiveDate>());
    }

    #[cfg(feature = "url")]
    #[test]
    fn url_leaf() {
        assert!(MapperConfig::new().is_leaf_type::<url::Url>());
    }
}
