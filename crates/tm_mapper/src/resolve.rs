use alloc::string::String;
use alloc::vec::Vec;

use tm_reflect::info::{StructInfo, TypeInfo};

use crate::path::join_key;
use crate::tag::{self, SideKey, TagDirective};
use crate::{Binding, FieldPath, MapperConfig};

/// The mapping direction a table is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    /// `map_from`: the record is the destination.
    From,
    /// `map_to`: the record is the source.
    To,
}

impl Side {
    #[inline]
    const fn pick(self, directive: TagDirective) -> SideKey {
        match self {
            Self::From => directive.from,
            Self::To => directive.to,
        }
    }
}

/// One row of a resolved key table.
#[derive(Debug)]
pub(crate) struct ResolvedKey {
    pub key: String,
    pub path: FieldPath,
    pub binding: Binding,
}

/// Walks the fields of a record depth first and collects its mapping keys
/// for one direction, in declaration order.
///
/// Nested records are flattened unless their type is a configured leaf. An
/// untagged nested record passes its children's own keys through with no
/// prefix, even below a keyed parent; a keyed one prefixes them with its key. Value types cannot contain
/// themselves, so the recursion is bounded by the nesting depth.
pub(crate) fn resolve(info: &StructInfo, side: Side, config: &MapperConfig) -> Vec<ResolvedKey> {
    let mut out = Vec::new();
    walk(info, side, config, None, "", &mut out);
    out
}

fn walk(
    info: &StructInfo,
    side: Side,
    config: &MapperConfig,
    base: Option<&FieldPath>,
    prefix: &str,
    out: &mut Vec<ResolvedKey>,
) {
    for (index, field) in info.iter().enumerate() {
        let side_key = side.pick(tag::parse(field.tags()));
        if side_key.is_excluded() {
            continue;
        }

        let nested = match field.type_info() {
            TypeInfo::Struct(inner) if !config.is_leaf(field.ty_id()) => Some(inner),
            _ => None,
        };

        if side_key.is_absent() && nested.is_none() {
            continue;
        }

        let path = match base {
            Some(base) => base.child(index, field.name()),
            None => FieldPath::root(index, field.name()),
        };

        match (side_key, nested) {
            (SideKey::Absent, Some(inner)) => walk(inner, side, config, Some(&path), "", out),
            (SideKey::Key(key), Some(inner)) => {
                let prefix = join_key(prefix, key);
                walk(inner, side, config, Some(&path), &prefix, out);
            }
            (SideKey::Key(key), None) => out.push(ResolvedKey {
                key: join_key(prefix, key),
                path,
                binding: Binding::Key { method: key },
            }),
            (SideKey::Method, _) => out.push(ResolvedKey {
                key: join_key(prefix, field.name()),
                path,
                binding: Binding::Method {
                    name: field.name(),
                },
            }),
            (SideKey::Absent | SideKey::Excluded, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::time::Duration;

    use tm_reflect::derive::Reflect;
    use tm_reflect::info::Typed;

    use super::{Side, resolve};
    use crate::{Binding, MapperConfig};

    #[derive(Reflect, Clone)]
    #[reflect(clone)]
    struct Point {
        #[reflect(tag(map = "x"))]
        x: i32,
        #[reflect(tag(map_from = "y"))]
        y: i32,
    }

    #[derive(Reflect)]
    struct Shape {
        #[reflect(tag(map = "id"))]
        id: u64,
        #[reflect(tag(map = "origin"))]
        origin: Point,
        corner: Point,
        #[reflect(tag(map = "-"))]
        hidden: Point,
        #[reflect(tag(map_to = "()"))]
        area: u32,
        #[reflect(tag(map = "ttl"))]
        ttl: Duration,
        untagged: u8,
    }

    #[derive(Reflect)]
    struct Leaf {
        #[reflect(tag(map = "y"))]
        y: i32,
    }

    #[derive(Reflect)]
    struct Mid {
        #[reflect(tag(map = "c"))]
        c: Leaf,
        d: Leaf,
    }

    #[derive(Reflect)]
    struct Top {
        #[reflect(tag(map = "b"))]
        b: Mid,
    }

    fn keys(side: Side, config: &MapperConfig) -> Vec<(String, String)> {
        let info = Shape::type_info().as_struct().unwrap();
        resolve(info, side, config)
            .into_iter()
            .map(|row| (row.key, row.path.name().into()))
            .collect()
    }

    #[test]
    fn pull_keys_flatten_in_declaration_order() {
        let rows = keys(Side::From, &MapperConfig::new());
        let expected = [
            ("id", "id"),
            ("origin.x", "origin.x"),
            ("origin.y", "origin.y"),
            ("x", "corner.x"),
            ("y", "corner.y"),
            ("ttl", "ttl"),
        ];
        assert_eq!(rows.len(), expected.len());
        for ((key, path), (k, p)) in rows.iter().zip(expected) {
            assert_eq!((key.as_str(), path.as_str()), (k, p));
        }
    }

    #[test]
    fn push_keys_follow_their_own_tags() {
        let rows = keys(Side::To, &MapperConfig::new());
        let found: Vec<&str> = rows.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(found, ["id", "origin.x", "x", "area", "ttl"]);
    }

    #[test]
    fn placeholder_binds_a_method() {
        let info = Shape::type_info().as_struct().unwrap();
        let rows = resolve(info, Side::To, &MapperConfig::new());
        let area = rows.iter().find(|row| row.key == "area").unwrap();
        assert_eq!(area.binding, Binding::Method { name: "area" });
        assert_eq!(area.path.indices(), &[4]);

        let origin_x = rows.iter().find(|row| row.key == "origin.x").unwrap();
        assert_eq!(origin_x.binding, Binding::Key { method: "x" });
        assert_eq!(origin_x.path.indices(), &[1, 0]);
    }

    #[test]
    fn configured_leaf_is_not_flattened() {
        let config = MapperConfig::new().with_leaf::<Point>();
        let rows = keys(Side::From, &config);
        let found: Vec<&str> = rows.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(found, ["id", "origin", "ttl"]);
    }

    #[test]
    fn untagged_record_drops_the_outer_prefix() {
        let info = Top::type_info().as_struct().unwrap();
        let rows = resolve(info, Side::From, &MapperConfig::new());
        let found: Vec<(&str, &[usize])> = rows
            .iter()
            .map(|row| (row.key.as_str(), row.path.indices()))
            .collect();
        assert_eq!(found, [("b.c.y", &[0, 0, 0][..]), ("y", &[0, 1, 0][..])]);
    }
}
