use alloc::boxed::Box;

use tm_utils::hash::HashMap;

use crate::info::{MethodInfo, NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Fields keep their declaration order, methods their registration order.
///
/// # Examples
///
/// ```rust
/// use tm_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(getter(label))]
/// struct A {
///     val: f32,
/// }
///
/// impl A {
///     fn label(&self) -> String { format!("{}", self.val) }
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// assert!(info.method("label").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    methods: Box<[MethodInfo]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            methods: Box::new([]),
        }
    }

    /// Attach the named methods of this type.
    pub fn with_methods(self, methods: &[MethodInfo]) -> Self {
        Self {
            methods: methods.into(),
            ..self
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the named methods in registration order.
    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Returns the method with the given `name`, if present.
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.iter().find(|m| m.name() == name)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::info::{MethodKind, ReflectKind, TypePath, Typed};
    use crate::ops::{MethodError, Struct};
    use crate::{FromReflect, Reflect};

    #[derive(Reflect, Default)]
    #[reflect(getter(display), setter(set_display))]
    struct Profile {
        #[reflect(tag(map = "user_id"))]
        id: u64,
        #[reflect(tag(map_from = "display_name", map_to = "-"))]
        name: String,
        #[reflect(ignore)]
        cache: Vec<u8>,
        age: u8,
    }

    impl Profile {
        fn display(&self) -> String {
            alloc::format!("{}#{}", self.name, self.id)
        }

        fn set_display(&mut self, value: String) -> bool {
            self.name = value;
            true
        }
    }

    #[derive(Reflect)]
    struct Wrapper<T> {
        inner: T,
    }

    #[test]
    fn fields_in_declaration_order() {
        let info = Profile::type_info().as_struct().unwrap();
        let names: Vec<&str> = info.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["id", "name", "age"]);
        assert_eq!(info.index_of("age"), Some(2));
        assert!(info.field("cache").is_none());
        assert!(info.field_at(1).unwrap().type_is::<String>());
        assert_eq!(
            info.field("age").unwrap().type_info().kind(),
            ReflectKind::Opaque
        );
    }

    #[test]
    fn tags_are_kept_verbatim() {
        let info = Profile::type_info().as_struct().unwrap();
        let name = info.field("name").unwrap().tags();
        assert_eq!(name.get("map_from"), Some("display_name"));
        assert_eq!(name.get("map_to"), Some("-"));
        assert_eq!(name.get("map"), None);
        assert!(info.field("age").unwrap().tags().is_empty());
    }

    #[test]
    fn type_paths() {
        assert_eq!(Profile::type_name(), "Profile");
        assert!(Profile::type_path().ends_with("::Profile"));
        assert!(<Wrapper<u8>>::type_path().contains("Wrapper<u8>"));
        assert!(<Wrapper<u8>>::type_info().type_is::<Wrapper<u8>>());
        assert!(<Wrapper<String>>::type_info().type_is::<Wrapper<String>>());
    }

    #[test]
    fn registered_methods() {
        let info = Profile::type_info().as_struct().unwrap();
        assert_eq!(info.methods().len(), 2);

        let getter = info.method("display").unwrap();
        let setter = info.method("set_display").unwrap();
        assert_eq!(getter.kind(), MethodKind::Getter);
        assert_eq!(setter.kind(), MethodKind::Setter);

        let mut p = Profile {
            id: 7,
            name: "ann".into(),
            ..Profile::default()
        };
        let out = getter.call_get(&p).unwrap();
        assert_eq!(out.downcast_ref::<String>().map(String::as_str), Some("ann#7"));

        setter.call_set(&mut p, &String::from("bob")).unwrap();
        assert_eq!(p.name, "bob");

        let err = setter.call_set(&mut p, &3_u8).unwrap_err();
        assert_eq!(
            err,
            MethodError::ArgumentMismatch {
                method: "set_display",
                expected: "alloc::string::String",
                received: "u8",
            }
        );

        let err = getter.call_get(&1_u8).unwrap_err();
        assert!(matches!(err, MethodError::ReceiverMismatch { method: "display", .. }));
    }

    #[test]
    fn struct_access_and_from_reflect() {
        let mut p = Profile {
            id: 1,
            name: "a".into(),
            cache: alloc::vec![9],
            age: 30,
        };
        assert_eq!(p.field_len(), 3);
        assert_eq!(p.name_at(2), Some("age"));
        *p.field_mut("age").unwrap().downcast_mut::<u8>().unwrap() = 31;
        assert_eq!(p.age, 31);

        let copy = Profile::from_reflect(&p).unwrap();
        assert_eq!((copy.id, copy.age), (1, 31));
        assert!(copy.cache.is_empty());

        let w = Wrapper { inner: 5_i32 };
        assert_eq!(Wrapper::<i32>::from_reflect(&w).map(|w| w.inner), Some(5));
        assert!(Wrapper::<i64>::from_reflect(&w).is_none());
    }
}
