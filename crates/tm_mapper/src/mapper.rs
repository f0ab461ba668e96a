use alloc::sync::Arc;

use tm_reflect::Reflect;
use tm_reflect::info::{TypeInfo, Typed};

use crate::cache::ConverterCache;
use crate::registry::ObjectRegistry;
use crate::{CompiledConverter, MapError, MapperConfig, ParsedObject, Role};

// -----------------------------------------------------------------------------
// MapperStats

/// Side-channel counters of a [`Mapper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapperStats {
    /// Record types parsed into a [`ParsedObject`].
    pub objects_parsed: usize,
    /// Type pairs compiled into a [`CompiledConverter`].
    pub converters_compiled: usize,
}

// -----------------------------------------------------------------------------
// Mapper

/// The mapping engine.
///
/// A `Mapper` owns its caches: parsed record types and compiled converters
/// are computed on first use, shared by every later call and kept for the
/// lifetime of the mapper. It is `Send + Sync`; share it by reference or in
/// an `Arc`.
///
/// # Examples
///
/// ```
/// use tm_mapper::{MapError, Mapper};
/// use tm_reflect::derive::Reflect;
///
/// #[derive(Reflect, Default)]
/// struct Account {
///     #[reflect(tag(map = "id"))]
///     id: u64,
///     #[reflect(tag(map_to = "owner"))]
///     owner: String,
///     #[reflect(tag(map_from = "email"))]
///     email: String,
/// }
///
/// #[derive(Reflect, Default)]
/// struct AccountDto {
///     #[reflect(tag(map = "id"))]
///     account_id: u64,
///     #[reflect(tag(map_from = "owner"))]
///     owner_name: String,
/// }
///
/// let mapper = Mapper::new();
/// let account = Account { id: 1, owner: "ann".into(), email: String::new() };
/// let mut dto = AccountDto::default();
///
/// mapper.map(&account, &mut dto).unwrap();
/// assert_eq!((dto.account_id, dto.owner_name.as_str()), (1, "ann"));
///
/// // The DTO offers no `email`, so the reverse mapping cannot be compiled.
/// let err = mapper.map(&dto, &mut Account::default()).unwrap_err();
/// assert!(matches!(err, MapError::AccessorNotFound { .. }));
/// ```
#[derive(Debug)]
pub struct Mapper {
    config: MapperConfig,
    objects: ObjectRegistry,
    converters: ConverterCache,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapper {
    /// A mapper with the default [`MapperConfig`].
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            config,
            objects: ObjectRegistry::new(),
            converters: ConverterCache::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Copies every mapped value of `from` into `to`.
    ///
    /// Both values must be records. Their types are parsed and the pair is
    /// compiled on first use. On error the destination may already hold the
    /// values written by the steps before the failing one.
    pub fn map(&self, from: &dyn Reflect, to: &mut dyn Reflect) -> Result<(), MapError> {
        let converter = self.converter(from.reflect_type_info(), to.reflect_type_info())?;
        converter.run(from, to)
    }

    /// Parses `T` now instead of on its first mapping.
    #[inline]
    pub fn register<T: Typed>(&self) -> Result<Arc<ParsedObject>, MapError> {
        self.register_info(T::type_info())
    }

    /// See [`register`](Self::register).
    pub fn register_info(&self, info: &'static TypeInfo) -> Result<Arc<ParsedObject>, MapError> {
        self.objects.get_or_parse(info, &self.config)
    }

    /// Returns the converter between two record types, compiling it if
    /// needed.
    pub fn converter(
        &self,
        from: &'static TypeInfo,
        to: &'static TypeInfo,
    ) -> Result<Arc<CompiledConverter>, MapError> {
        check_shape(Role::Source, from)?;
        check_shape(Role::Destination, to)?;

        if let Some(converter) = self.converters.get(from.ty_id(), to.ty_id()) {
            return Ok(converter);
        }

        let source = self.register_info(from)?;
        let destination = self.register_info(to)?;
        self.converters.get_or_compile(&source, &destination)
    }

    /// Registers every record declared with `#[reflect(auto_register)]`.
    ///
    /// Returns the number of record types seen; opaque types are skipped.
    #[cfg(feature = "auto_register")]
    pub fn auto_register(&self) -> Result<usize, MapError> {
        let mut count = 0;
        for info in tm_reflect::registered_types().filter(|info| info.is_struct()) {
            self.register_info(info)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn stats(&self) -> MapperStats {
        MapperStats {
            objects_parsed: self.objects.parsed(),
            converters_compiled: self.converters.compiled(),
        }
    }
}

fn check_shape(role: Role, info: &'static TypeInfo) -> Result<(), MapError> {
    if info.is_struct() {
        Ok(())
    } else {
        Err(MapError::InputShape {
            role,
            type_path: info.type_path(),
            kind: info.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::sync::Barrier;
    use std::thread;

    use tm_reflect::derive::Reflect;
    use tm_reflect::info::{ReflectKind, TypePath, Typed};

    use super::{Mapper, MapperStats};
    use crate::{Direction, MapError, MapperConfig, Role};

    // -------------------------------------------------------------------------
    // Fixtures

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Address {
        #[reflect(tag(map = "city"))]
        city: String,
        zip: String,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct User {
        #[reflect(tag(map = "id"))]
        id: u64,
        #[reflect(tag(map = "name"))]
        name: String,
        #[reflect(tag(map = "address"))]
        address: Address,
        note: String,
    }

    #[derive(Reflect, Default, Debug)]
    struct UserRow {
        #[reflect(tag(map = "name"))]
        full_name: String,
        #[reflect(tag(map = "address.city"))]
        city: String,
        #[reflect(tag(map = "id"))]
        user_id: u64,
    }

    #[derive(Reflect, Default)]
    struct Inner {
        #[reflect(tag(map = "y"))]
        y: i32,
    }

    #[derive(Reflect, Default)]
    struct Nested {
        #[reflect(tag(map = "b"))]
        x: Inner,
    }

    #[derive(Reflect, Default)]
    struct Flat {
        #[reflect(tag(map = "b.y"))]
        y: i32,
    }

    #[derive(Reflect, Default)]
    struct Wants {
        #[reflect(tag(map_from = "q"))]
        q: u32,
        #[reflect(tag(map = "b.y"))]
        y: i32,
    }

    #[derive(Reflect, Default)]
    struct Src {
        #[reflect(tag(map = "a"))]
        a: u32,
        #[reflect(tag(map = "b"))]
        b: String,
    }

    #[derive(Reflect, Default)]
    struct Dst {
        #[reflect(tag(map = "a"))]
        a: u32,
        #[reflect(tag(map = "b"))]
        b: u64,
    }

    #[derive(Reflect, Default, Clone, Debug, PartialEq)]
    #[reflect(clone, debug, partial_eq)]
    struct Money {
        cents: i64,
        currency: String,
    }

    #[derive(Reflect, Default)]
    struct Product {
        #[reflect(tag(map = "price"))]
        price: Money,
    }

    #[derive(Reflect, Default)]
    struct ProductRow {
        #[reflect(tag(map = "price"))]
        price: Money,
    }

    #[derive(Reflect, Default)]
    struct CodedMoney {
        cents: i64,
        currency: u16,
    }

    #[derive(Reflect, Default)]
    struct CodedProduct {
        #[reflect(tag(map = "price"))]
        price: CodedMoney,
    }

    #[derive(Reflect, Default)]
    #[reflect(getter(price))]
    struct Quote {
        cents: i64,
    }

    impl Quote {
        fn price(&self) -> Money {
            Money {
                cents: self.cents,
                currency: "EUR".into(),
            }
        }
    }

    #[derive(Reflect, Default)]
    struct Priced {
        #[reflect(tag(map_from = "()"))]
        price: Money,
    }

    #[derive(Reflect, Default)]
    #[reflect(getter(total), setter(total_due))]
    struct Cart {
        cents: u64,
        qty: u64,
        due: u64,
    }

    impl Cart {
        fn total(&self) -> u64 {
            self.cents * self.qty
        }

        fn total_due(&mut self, due: u64) {
            self.due = due;
        }
    }

    #[derive(Reflect, Default)]
    struct Receipt {
        #[reflect(tag(map_from = "total"))]
        amount: u64,
        #[reflect(tag(map_to = "total_due"))]
        amount_due: u64,
    }

    #[derive(Reflect, Default)]
    struct Label {
        #[reflect(tag(map_to = "()"))]
        title: String,
    }

    #[derive(Reflect, Default)]
    #[reflect(setter(title))]
    struct Page {
        heading: String,
    }

    impl Page {
        fn title(&mut self, title: String) {
            self.heading = title.to_uppercase();
        }
    }

    #[derive(Reflect, Default)]
    struct Heading {
        #[reflect(tag(map_from = "title"))]
        text: String,
    }

    fn user() -> User {
        User {
            id: 42,
            name: "Ada".into(),
            address: Address {
                city: "London".into(),
                zip: "N1".into(),
            },
            note: "vip".into(),
        }
    }

    // -------------------------------------------------------------------------
    // Mapping

    #[test]
    fn round_trip_keeps_untagged_fields() {
        let mapper = Mapper::new();
        let original = user();

        let mut row = UserRow::default();
        mapper.map(&original, &mut row).unwrap();
        assert_eq!(row.user_id, 42);
        assert_eq!(row.full_name, "Ada");
        assert_eq!(row.city, "London");

        let mut back = User {
            note: "keep".into(),
            ..User::default()
        };
        mapper.map(&row, &mut back).unwrap();
        assert_eq!(back.id, original.id);
        assert_eq!(back.name, original.name);
        assert_eq!(back.address.city, original.address.city);
        assert_eq!(back.address.zip, "");
        assert_eq!(back.note, "keep");
    }

    #[test]
    fn nested_keys_are_dot_joined() {
        let mapper = Mapper::new();

        let nested = Nested { x: Inner { y: 5 } };
        let mut flat = Flat::default();
        mapper.map(&nested, &mut flat).unwrap();
        assert_eq!(flat.y, 5);

        let object = mapper.register::<Nested>().unwrap();
        assert_eq!(object.getter("b.y").unwrap().path().name(), "x.y");

        let mut nested = Nested::default();
        mapper.map(&Flat { y: -3 }, &mut nested).unwrap();
        assert_eq!(nested.x.y, -3);
    }

    #[test]
    fn missing_accessor_leaves_destination_untouched() {
        let mapper = Mapper::new();
        let mut wants = Wants { q: 1, y: 2 };

        for _ in 0..2 {
            let err = mapper.map(&Flat { y: 9 }, &mut wants).unwrap_err();
            assert_eq!(
                err,
                MapError::AccessorNotFound {
                    key: "q".into(),
                    role: Role::Source,
                    source_type: Flat::type_path(),
                    destination_type: Wants::type_path(),
                }
            );
            assert!(err.is_eager());
        }

        assert_eq!((wants.q, wants.y), (1, 2));
        assert_eq!(
            mapper.stats(),
            MapperStats {
                objects_parsed: 2,
                converters_compiled: 0,
            }
        );
    }

    #[test]
    fn type_mismatch_keeps_earlier_writes() {
        let mapper = Mapper::new();
        let src = Src {
            a: 7,
            b: "seven".into(),
        };
        let mut dst = Dst { a: 0, b: 11 };

        let err = mapper.map(&src, &mut dst).unwrap_err();
        assert!(matches!(
            err,
            MapError::ValueNotAssignable {
                ref field,
                value_type: "alloc::string::String",
                field_type: "u64",
                ..
            } if field == "b"
        ));
        assert_eq!(dst.a, 7);
        assert_eq!(dst.b, 11);
    }

    #[test]
    fn non_records_are_rejected_before_registration() {
        let mapper = Mapper::new();

        let err = mapper.map(&5_u32, &mut Dst::default()).unwrap_err();
        assert_eq!(
            err,
            MapError::InputShape {
                role: Role::Source,
                type_path: "u32",
                kind: ReflectKind::Opaque,
            }
        );

        let err = mapper.map(&Src::default(), &mut String::new()).unwrap_err();
        assert!(matches!(
            err,
            MapError::InputShape {
                role: Role::Destination,
                ..
            }
        ));

        assert_eq!(mapper.stats(), MapperStats::default());
    }

    #[test]
    fn leaf_types_are_copied_whole() {
        let product = Product {
            price: Money {
                cents: 250,
                currency: "USD".into(),
            },
        };

        let flattening = Mapper::new();
        let mut row = ProductRow::default();
        flattening.map(&product, &mut row).unwrap();
        assert_eq!(row.price, Money::default());
        let converter = flattening
            .converter(Product::type_info(), ProductRow::type_info())
            .unwrap();
        assert!(converter.steps().is_empty());

        let atomic = Mapper::with_config(MapperConfig::new().with_leaf::<Money>());
        atomic.map(&product, &mut row).unwrap();
        assert_eq!(row.price, product.price);
    }

    #[test]
    fn rejected_leaf_record_is_left_whole() {
        let mapper = Mapper::with_config(
            MapperConfig::new()
                .with_leaf::<Money>()
                .with_leaf::<CodedMoney>(),
        );
        let coded = CodedProduct {
            price: CodedMoney {
                cents: 900,
                currency: 978,
            },
        };
        let before = Money {
            cents: 1,
            currency: "EUR".into(),
        };
        let mut row = ProductRow {
            price: before.clone(),
        };

        let err = mapper.map(&coded, &mut row).unwrap_err();
        assert!(matches!(
            err,
            MapError::ValueNotAssignable { ref field, .. } if field == "price"
        ));
        assert_eq!(row.price, before);
    }

    #[test]
    fn untagged_record_below_a_keyed_one_keeps_its_keys() {
        #[derive(Reflect, Default)]
        struct Cell {
            #[reflect(tag(map = "y"))]
            y: i32,
        }

        #[derive(Reflect, Default)]
        struct Row {
            cell: Cell,
        }

        #[derive(Reflect, Default)]
        struct Sheet {
            #[reflect(tag(map = "b"))]
            row: Row,
        }

        let mapper = Mapper::new();
        let object = mapper.register::<Sheet>().unwrap();
        let keys: Vec<&str> = object.keys().collect();
        assert_eq!(keys, ["y"]);

        let mut flat = Flat::default();
        let sheet = Sheet {
            row: Row {
                cell: Cell { y: 4 },
            },
        };
        assert!(matches!(
            mapper.map(&sheet, &mut flat),
            Err(MapError::AccessorNotFound { .. })
        ));

        let mut cell = Cell::default();
        mapper.map(&sheet, &mut cell).unwrap();
        assert_eq!(cell.y, 4);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_values_are_leaves() {
        use chrono::{DateTime, TimeZone, Utc};

        #[derive(Reflect)]
        struct Event {
            #[reflect(tag(map = "at"))]
            at: DateTime<Utc>,
        }

        #[derive(Reflect)]
        struct EventRow {
            #[reflect(tag(map = "at"))]
            when: DateTime<Utc>,
        }

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut row = EventRow {
            when: Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
        };

        let mapper = Mapper::new();
        mapper.map(&Event { at }, &mut row).unwrap();
        assert_eq!(row.when, at);

        let object = mapper.register::<Event>().unwrap();
        let keys: Vec<&str> = object.keys().collect();
        assert_eq!(keys, ["at"]);
    }

    // -------------------------------------------------------------------------
    // Methods

    #[test]
    fn method_fallback_uses_the_raw_key() {
        let mapper = Mapper::new();

        let cart = Cart {
            cents: 150,
            qty: 3,
            due: 0,
        };
        let mut receipt = Receipt {
            amount: 0,
            amount_due: 99,
        };
        mapper.map(&cart, &mut receipt).unwrap();
        assert_eq!(receipt.amount, 450);

        let mut cart = Cart::default();
        mapper.map(&receipt, &mut cart).unwrap();
        assert_eq!(cart.due, 99);

        let converter = mapper
            .converter(Receipt::type_info(), Cart::type_info())
            .unwrap();
        let step = &converter.steps()[0];
        assert_eq!(step.direction(), Direction::Push);
        assert_eq!(step.write().name(), "total_due");
    }

    #[test]
    fn placeholder_binds_counterpart_methods() {
        let mapper = Mapper::new();

        let mut page = Page::default();
        mapper
            .map(
                &Label {
                    title: "intro".into(),
                },
                &mut page,
            )
            .unwrap();
        assert_eq!(page.heading, "INTRO");

        let mut priced = Priced::default();
        mapper.map(&Quote { cents: 99 }, &mut priced).unwrap();
        assert_eq!(
            priced.price,
            Money {
                cents: 99,
                currency: "EUR".into(),
            }
        );
    }

    #[test]
    fn write_method_used_for_reading() {
        let mapper = Mapper::new();
        let page = Page {
            heading: "x".into(),
        };
        let mut heading = Heading::default();

        let err = mapper.map(&page, &mut heading).unwrap_err();
        assert_eq!(
            err,
            MapError::MethodShape {
                method: "title",
                type_path: Page::type_path(),
                expected: "getter",
            }
        );
        assert!(heading.text.is_empty());
    }

    // -------------------------------------------------------------------------
    // Caching

    #[test]
    fn each_pair_compiles_once() {
        let mapper = Mapper::new();
        let source = user();

        for _ in 0..3 {
            mapper.map(&source, &mut UserRow::default()).unwrap();
        }
        assert_eq!(
            mapper.stats(),
            MapperStats {
                objects_parsed: 2,
                converters_compiled: 1,
            }
        );

        let a = mapper.converter(User::type_info(), UserRow::type_info()).unwrap();
        let b = mapper.converter(User::type_info(), UserRow::type_info()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(mapper.stats().converters_compiled, 1);

        mapper.map(&UserRow::default(), &mut User::default()).unwrap();
        assert_eq!(mapper.stats().converters_compiled, 2);
        assert_eq!(mapper.stats().objects_parsed, 2);
    }

    #[test]
    fn registration() {
        let mapper = Mapper::new();
        let first = mapper.register::<User>().unwrap();
        let second = mapper.register_info(User::type_info()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.type_info().type_is::<User>());

        let err = mapper.register::<String>().unwrap_err();
        assert!(matches!(
            err,
            MapError::InputShape {
                role: Role::Registered,
                ..
            }
        ));
        assert_eq!(mapper.stats().objects_parsed, 1);
    }

    #[test]
    fn concurrent_mapping_shares_one_converter() {
        const THREADS: usize = 8;

        let mapper = Mapper::new();
        let barrier = Barrier::new(THREADS);
        let source = user();

        let rows: Vec<UserRow> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        let mut row = UserRow::default();
                        barrier.wait();
                        mapper.map(&source, &mut row).unwrap();
                        row
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(rows.iter().all(|row| row.user_id == 42 && row.city == "London"));
        assert_eq!(
            mapper.stats(),
            MapperStats {
                objects_parsed: 2,
                converters_compiled: 1,
            }
        );
    }

    #[test]
    fn mapper_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mapper>();
    }

    #[cfg(feature = "auto_register")]
    #[derive(Reflect)]
    #[reflect(auto_register)]
    struct Registered {
        #[reflect(tag(map = "k"))]
        k: u8,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_registered_records() {
        let mapper = Mapper::new();
        let count = mapper.auto_register().unwrap();
        assert!(count >= 1);
        assert_eq!(mapper.stats().objects_parsed, count);

        mapper.register::<Registered>().unwrap();
        assert_eq!(mapper.stats().objects_parsed, count);
    }
}
