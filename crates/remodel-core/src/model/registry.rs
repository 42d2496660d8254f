//! Process-wide field table cache
//!
//! Field tables are immutable once built, so they are computed once per
//! type and shared for the process lifetime. The cache is keyed by
//! `TypeId` and uses a read-preferring double-checked discipline: the
//! common path is a shared read, and a first use takes the write lock and
//! computes the table inside it, so concurrent first use of the same type
//! computes exactly once and every caller observes the same table.
//!
//! Copyright (c) 2025 Remodel Team
//! Licensed under the MIT OR Apache-2.0 license

use super::field::FieldTable;
use super::Fields;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

type AnyTable = Arc<dyn Any + Send + Sync>;

static TABLES: OnceLock<RwLock<HashMap<TypeId, AnyTable>>> = OnceLock::new();

/// The cached field table for `T`, computing it on first use.
pub fn field_table<T>() -> Arc<FieldTable<T>>
where
    T: Fields + 'static,
{
    let tables = TABLES.get_or_init(Default::default);

    let cached = tables
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&TypeId::of::<T>())
        .cloned();
    let entry = match cached {
        Some(entry) => entry,
        None => tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<T>())
            // Computed inside the write lock: losers of the race to the
            // lock find the entry already present.
            .or_insert_with(|| Arc::new(FieldTable::new(T::fields())))
            .clone(),
    };

    entry
        .downcast::<FieldTable<T>>()
        .expect("field table registry entry has the key's type")
}
