use alloc::string::String;
use alloc::vec::Vec;
use core::any::TypeId;

use indexmap::IndexMap;
use tm_reflect::info::{StructInfo, TypeInfo};
use tm_utils::hash::FixedHashState;

use crate::resolve::{ResolvedKey, Side, resolve};
use crate::{FieldAccessor, MapError, MapperConfig, MethodAccessor, Role};

// -----------------------------------------------------------------------------
// KeyMap

/// A string-keyed table iterating in insertion order.
///
/// Re-inserting a key replaces the value and keeps the first position.
pub type KeyMap<V> = IndexMap<String, V, FixedHashState>;

// -----------------------------------------------------------------------------
// MapEntry

/// How a mapping key finds its accessor on the counterpart record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Look up the key among the counterpart's fields, then fall back to its
    /// method named `method` (the raw, un-prefixed tag value).
    Key { method: &'static str },
    /// `"()"`: always use the counterpart's method `name`, the name of this
    /// field.
    Method { name: &'static str },
}

impl Binding {
    /// The counterpart method this binding may use.
    #[inline]
    pub const fn method_name(&self) -> &'static str {
        match self {
            Self::Key { method } => method,
            Self::Method { name } => name,
        }
    }
}

/// A row of [`ParsedObject::map_from`] or [`ParsedObject::map_to`]: the
/// local field plus how to reach the counterpart.
#[derive(Debug, Clone)]
pub struct MapEntry {
    field: FieldAccessor,
    binding: Binding,
}

impl MapEntry {
    #[inline]
    pub const fn field(&self) -> &FieldAccessor {
        &self.field
    }

    #[inline]
    pub const fn binding(&self) -> Binding {
        self.binding
    }
}

// -----------------------------------------------------------------------------
// ParsedObject

/// The accessor tables of one record type.
///
/// Built once per type by the [`Mapper`](crate::Mapper) and immutable
/// afterwards.
///
/// - getters: fields readable under an explicit key, `map_to` keys first;
/// - setters: fields writable under an explicit key, `map_from` keys first;
/// - methods: the type's registered getter and setter methods;
/// - [`map_from`](Self::map_from): keys the type receives as a destination;
/// - [`map_to`](Self::map_to): keys the type offers as a source.
#[derive(Debug)]
pub struct ParsedObject {
    info: &'static TypeInfo,
    data: &'static StructInfo,
    getters: KeyMap<FieldAccessor>,
    setters: KeyMap<FieldAccessor>,
    map_from: KeyMap<MapEntry>,
    map_to: KeyMap<MapEntry>,
}

impl ParsedObject {
    /// Resolves the tables of a record type.
    ///
    /// Fails with [`MapError::InputShape`] if `info` is not a record.
    pub fn parse(info: &'static TypeInfo, config: &MapperConfig) -> Result<Self, MapError> {
        let data = info.as_struct().map_err(|err| MapError::InputShape {
            role: Role::Registered,
            type_path: info.type_path(),
            kind: err.received,
        })?;

        let type_path = info.type_path();
        let map_from = Self::entries(resolve(data, Side::From, config), type_path);
        let map_to = Self::entries(resolve(data, Side::To, config), type_path);

        // A key is read preferably from the field offering it and written
        // preferably to the field receiving it.
        let getters = Self::fields(&map_to, &map_from);
        let setters = Self::fields(&map_from, &map_to);

        log::debug!(
            "parsed `{type_path}`: {} readable and {} writable keys, {} pull keys, {} push keys, {} methods",
            getters.len(),
            setters.len(),
            map_from.len(),
            map_to.len(),
            data.methods().len(),
        );

        Ok(Self {
            info,
            data,
            getters,
            setters,
            map_from,
            map_to,
        })
    }

    fn entries(rows: Vec<ResolvedKey>, type_path: &str) -> KeyMap<MapEntry> {
        let mut table = KeyMap::default();
        for ResolvedKey { key, path, binding } in rows {
            let entry = MapEntry {
                field: FieldAccessor::new(path),
                binding,
            };
            if let Some(old) = table.insert(key.clone(), entry) {
                log::warn!(
                    "`{type_path}`: duplicate mapping key `{key}`, field `{}` is ignored",
                    old.field.path(),
                );
            }
        }
        table
    }

    fn fields(primary: &KeyMap<MapEntry>, secondary: &KeyMap<MapEntry>) -> KeyMap<FieldAccessor> {
        let mut fields = KeyMap::default();
        for (key, entry) in primary.iter().chain(secondary.iter()) {
            if matches!(entry.binding, Binding::Key { .. }) && !fields.contains_key(key) {
                fields.insert(key.clone(), entry.field.clone());
            }
        }
        fields
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.info.type_path()
    }

    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.info.ty_id()
    }

    /// The field read under `key`: the one pushing `key` if any, else the
    /// one pulling it.
    #[inline]
    pub fn getter(&self, key: &str) -> Option<&FieldAccessor> {
        self.getters.get(key)
    }

    /// The field written under `key`: the one pulling `key` if any, else the
    /// one pushing it.
    #[inline]
    pub fn setter(&self, key: &str) -> Option<&FieldAccessor> {
        self.setters.get(key)
    }

    /// The keys of all keyed fields, `map_from` keys first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.setters
            .keys()
            .chain(self.getters.keys().filter(|key| !self.setters.contains_key(*key)))
            .map(String::as_str)
    }

    pub fn method(&self, name: &str) -> Option<MethodAccessor> {
        let owner = self.type_path();
        self.data
            .method(name)
            .map(|info| MethodAccessor::new(info, owner))
    }

    pub fn methods(&self) -> impl ExactSizeIterator<Item = MethodAccessor> {
        let owner = self.type_path();
        self.data
            .methods()
            .iter()
            .map(move |info| MethodAccessor::new(info, owner))
    }

    /// Keys received when this type is the destination.
    #[inline]
    pub const fn map_from(&self) -> &KeyMap<MapEntry> {
        &self.map_from
    }

    /// Keys offered when this type is the source.
    #[inline]
    pub const fn map_to(&self) -> &KeyMap<MapEntry> {
        &self.map_to
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use tm_reflect::derive::Reflect;
    use tm_reflect::info::{MethodKind, Typed};

    use super::{Binding, ParsedObject};
    use crate::{MapError, MapperConfig, Role};

    #[derive(Reflect)]
    struct Inner {
        #[reflect(tag(map = "y"))]
        y: i32,
    }

    #[derive(Reflect)]
    #[reflect(getter(full_name), setter(set_full_name))]
    struct Person {
        #[reflect(tag(map = "b"))]
        x: Inner,
        #[reflect(tag(map_from = "first", map_to = "given"))]
        first: String,
        #[reflect(tag(map_to = "()"))]
        last: String,
    }

    impl Person {
        fn full_name(&self) -> String {
            alloc::format!("{} {}", self.first, self.last)
        }

        fn set_full_name(&mut self, name: String) {
            self.first = name;
        }
    }

    #[derive(Reflect)]
    struct Twice {
        #[reflect(tag(map = "v"))]
        a: u8,
        #[reflect(tag(map = "v"))]
        b: u8,
        #[reflect(tag(map = "w"))]
        c: u8,
    }

    fn parse<T: Typed>() -> ParsedObject {
        ParsedObject::parse(T::type_info(), &MapperConfig::new()).unwrap()
    }

    #[test]
    fn tables() {
        let person = parse::<Person>();

        let from: Vec<&str> = person.map_from().keys().map(String::as_str).collect();
        let to: Vec<&str> = person.map_to().keys().map(String::as_str).collect();
        assert_eq!(from, ["b.y", "first"]);
        assert_eq!(to, ["b.y", "given", "last"]);

        let keys: Vec<&str> = person.keys().collect();
        assert_eq!(keys, ["b.y", "first", "given"]);
        assert_eq!(person.getter("b.y").unwrap().path().name(), "x.y");
        assert_eq!(person.setter("given").unwrap().path().name(), "first");
        assert!(person.getter("last").is_none());

        let last = person.map_to().get("last").unwrap();
        assert_eq!(last.binding(), Binding::Method { name: "last" });
        assert_eq!(
            person.map_from().get("first").unwrap().binding().method_name(),
            "first"
        );
    }

    #[test]
    fn methods() {
        let person = parse::<Person>();
        assert_eq!(person.methods().len(), 2);
        assert_eq!(person.method("full_name").unwrap().kind(), MethodKind::Getter);
        assert_eq!(person.method("set_full_name").unwrap().kind(), MethodKind::Setter);
        assert!(person.method("first").is_none());
    }

    #[test]
    fn duplicate_keys_overwrite_in_place() {
        let twice = parse::<Twice>();
        let keys: Vec<&str> = twice.map_from().keys().map(String::as_str).collect();
        assert_eq!(keys, ["v", "w"]);
        assert_eq!(twice.map_from().get("v").unwrap().field().path().name(), "b");
        assert_eq!(twice.getter("v").unwrap().path().name(), "b");
    }

    #[test]
    fn opaque_types_are_rejected() {
        let err = ParsedObject::parse(u32::type_info(), &MapperConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            MapError::InputShape {
                role: Role::Registered,
                type_path: "u32",
                ..
            }
        ));
    }

    #[derive(Reflect)]
    struct Split {
        #[reflect(tag(map_from = "k"))]
        inbound: u8,
        #[reflect(tag(map_to = "k"))]
        outbound: u8,
    }

    #[test]
    fn getters_prefer_push_fields_and_setters_pull_fields() {
        let split = parse::<Split>();
        assert_eq!(split.getter("k").unwrap().path().name(), "outbound");
        assert_eq!(split.setter("k").unwrap().path().name(), "inbound");

        let keys: Vec<&str> = split.keys().collect();
        assert_eq!(keys, ["k"]);
    }
}
