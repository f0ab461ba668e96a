use alloc::sync::Arc;
use core::any::TypeId;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use tm_utils::hash::HashMap;

use crate::{CompiledConverter, MapError, ParsedObject};

type PairKey = (TypeId, TypeId);

/// (source, destination) to [`CompiledConverter`] table.
///
/// Same locking as the object registry. A failed compilation is returned
/// and not stored, so the next call compiles again.
#[derive(Debug, Default)]
pub(crate) struct ConverterCache {
    converters: RwLock<HashMap<PairKey, Arc<CompiledConverter>>>,
    compiled: AtomicUsize,
}

impl ConverterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, from: TypeId, to: TypeId) -> Option<Arc<CompiledConverter>> {
        self.converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(from, to))
            .cloned()
    }

    pub fn get_or_compile(
        &self,
        from: &ParsedObject,
        to: &ParsedObject,
    ) -> Result<Arc<CompiledConverter>, MapError> {
        let key = (from.ty_id(), to.ty_id());
        if let Some(converter) = self.get(key.0, key.1) {
            return Ok(converter);
        }

        let mut converters = self.converters.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(converter) = converters.get(&key) {
            return Ok(Arc::clone(converter));
        }

        let converter = Arc::new(CompiledConverter::compile(from, to)?);
        self.compiled.fetch_add(1, Ordering::Relaxed);
        log::debug!(
            "compiled `{}` -> `{}`: {} steps",
            from.type_path(),
            to.type_path(),
            converter.steps().len(),
        );

        converters.insert(key, Arc::clone(&converter));
        Ok(converter)
    }

    /// Number of pairs compiled so far.
    #[inline]
    pub fn compiled(&self) -> usize {
        self.compiled.load(Ordering::Relaxed)
    }
}
