use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The location of a field inside a record, through zero or more nested
/// records.
///
/// `indices` are structural: the n-th index selects a field of the record
/// reached by the previous ones, in the order of
/// [`Struct::field_at`](tm_reflect::ops::Struct::field_at). The dotted name
/// is made of field names, not mapping keys, and only serves diagnostics.
///
/// ```
/// use tm_mapper::FieldPath;
///
/// let path = FieldPath::root(1, "address").child(0, "city");
/// assert_eq!(path.indices(), &[1, 0]);
/// assert_eq!(path.name(), "address.city");
/// assert_eq!(path.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    indices: Vec<usize>,
    name: String,
}

impl FieldPath {
    /// A field of the top-level record.
    pub fn root(index: usize, name: &str) -> Self {
        Self {
            indices: alloc::vec![index],
            name: name.into(),
        }
    }

    /// A field of the record this path points to.
    pub fn child(&self, index: usize, name: &str) -> Self {
        let mut indices = Vec::with_capacity(self.indices.len() + 1);
        indices.extend_from_slice(&self.indices);
        indices.push(index);

        let mut dotted = String::with_capacity(self.name.len() + 1 + name.len());
        dotted.push_str(&self.name);
        dotted.push('.');
        dotted.push_str(name);

        Self {
            indices,
            name: dotted,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The dotted field names, e.g. `address.city`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.indices.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

/// Joins a key to its parent prefix with `.`.
pub(crate) fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        return key.into();
    }
    let mut joined = String::with_capacity(prefix.len() + 1 + key.len());
    joined.push_str(prefix);
    joined.push('.');
    joined.push_str(key);
    joined
}
