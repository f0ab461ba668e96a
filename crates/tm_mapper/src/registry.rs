use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use tm_reflect::info::TypeInfo;
use tm_utils::TypeIdMap;

use crate::{MapError, MapperConfig, ParsedObject};

/// Type to [`ParsedObject`] table, filled lazily and never evicted.
///
/// A hit only takes the read lock. A miss takes the write lock, checks
/// again and parses while holding it, so each type is parsed at most once.
#[derive(Debug)]
pub(crate) struct ObjectRegistry {
    objects: RwLock<TypeIdMap<Arc<ParsedObject>>>,
    parsed: AtomicUsize,
}

impl ObjectRegistry {
    pub const fn new() -> Self {
        Self {
            objects: RwLock::new(TypeIdMap::new()),
            parsed: AtomicUsize::new(0),
        }
    }

    pub fn get_or_parse(
        &self,
        info: &'static TypeInfo,
        config: &MapperConfig,
    ) -> Result<Arc<ParsedObject>, MapError> {
        let type_id = info.ty_id();

        if let Some(object) = self
            .objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return Ok(Arc::clone(object));
        }

        let mut objects = self.objects.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(object) = objects.get(&type_id) {
            return Ok(Arc::clone(object));
        }

        let object = Arc::new(ParsedObject::parse(info, config)?);
        self.parsed.fetch_add(1, Ordering::Relaxed);
        objects.insert(type_id, Arc::clone(&object));
        Ok(object)
    }

    /// Number of types parsed so far.
    #[inline]
    pub fn parsed(&self) -> usize {
        self.parsed.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::sync::Barrier;
    use std::thread;

    use tm_reflect::derive::Reflect;
    use tm_reflect::info::Typed;

    use super::ObjectRegistry;
    use crate::MapperConfig;

    #[derive(Reflect)]
    struct Sample {
        #[reflect(tag(map = "a"))]
        a: u8,
    }

    #[test]
    fn parsed_once() {
        let registry = ObjectRegistry::new();
        let config = MapperConfig::new();

        let first = registry.get_or_parse(Sample::type_info(), &config).unwrap();
        let second = registry.get_or_parse(Sample::type_info(), &config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.parsed(), 1);
    }

    #[test]
    fn concurrent_first_use_parses_once() {
        const THREADS: usize = 8;

        let registry = ObjectRegistry::new();
        let config = MapperConfig::new();
        let barrier = Barrier::new(THREADS);

        let objects: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        registry.get_or_parse(Sample::type_info(), &config).unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.parsed(), 1);
        assert!(objects.iter().all(|o| Arc::ptr_eq(o, &objects[0])));
    }

    #[test]
    fn failures_are_not_stored() {
        let registry = ObjectRegistry::new();
        let config = MapperConfig::new();
        assert!(registry.get_or_parse(u8::type_info(), &config).is_err());
        assert_eq!(registry.parsed(), 0);
    }
}
