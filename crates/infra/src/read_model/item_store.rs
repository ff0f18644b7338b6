use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use toolshop_core::{DomainError, DomainResult, Item, ItemId};

use super::seed::seed_items;

/// Item store abstraction.
///
/// Handlers receive an implementation by injection; nothing in the process
/// holds a global store.
pub trait ItemStore: Send + Sync {
    /// All records, in insertion order.
    fn list(&self) -> DomainResult<Vec<Item>>;

    /// Get a record by id.
    fn get(&self, id: ItemId) -> DomainResult<Item>;

    /// Insert a new record. Fails with `Conflict` if the id is taken.
    fn create(&self, item: Item) -> DomainResult<Item>;

    /// Replace the record at `id` wholesale.
    ///
    /// Fails with `NotFound` if `id` is absent, then with `Validation` if the
    /// body id differs from `id`.
    fn update(&self, id: ItemId, item: Item) -> DomainResult<Item>;

    /// Remove a record, returning what was stored.
    fn delete(&self, id: ItemId) -> DomainResult<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<Item>> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn create(&self, item: Item) -> DomainResult<Item> {
        (**self).create(item)
    }

    fn update(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        (**self).update(id, item)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        (**self).delete(id)
    }
}

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<ItemId, Item>,
    order: Vec<ItemId>,
}

/// In-memory item store.
///
/// Every operation takes the lock once, so create's existence check and insert
/// are atomic. Two clients updating the same record still race at the request
/// level: the last full overwrite wins.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Entries>,
}

impl InMemoryItemStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the two fixed catalog records.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }

    /// Store preloaded with `items`. Later duplicates replace earlier ones.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut entries = Entries::default();
        for item in items {
            if entries.by_id.insert(item.id, item.clone()).is_none() {
                entries.order.push(item.id);
            }
        }
        Self {
            inner: RwLock::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poisoned guards are recovered: no write panics between updating
    // `by_id` and `order`.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Entries> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Entries> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> DomainResult<Vec<Item>> {
        let entries = self.read();
        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id).cloned())
            .collect())
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.read()
            .by_id
            .get(&id)
            .cloned()
            .ok_or(DomainError::not_found(id))
    }

    fn create(&self, item: Item) -> DomainResult<Item> {
        let mut entries = self.write();
        if entries.by_id.contains_key(&item.id) {
            return Err(DomainError::conflict(format!(
                "item with id {} already exists",
                item.id
            )));
        }
        entries.order.push(item.id);
        entries.by_id.insert(item.id, item.clone());
        tracing::debug!(item_id = %item.id, "item created");
        Ok(item)
    }

    fn update(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        let mut entries = self.write();
        let Some(slot) = entries.by_id.get_mut(&id) else {
            return Err(DomainError::not_found(id));
        };
        if item.id != id {
            return Err(DomainError::validation(format!(
                "path id {id} does not match item id {}",
                item.id
            )));
        }
        *slot = item.clone();
        tracing::debug!(item_id = %id, "item replaced");
        Ok(item)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        let mut entries = self.write();
        let removed = entries
            .by_id
            .remove(&id)
            .ok_or(DomainError::not_found(id))?;
        entries.order.retain(|existing| *existing != id);
        tracing::debug!(item_id = %id, "item deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wrench() -> Item {
        Item::new(3, "Llave inglesa", 14.99)
            .with_description("Herramienta ajustable")
            .with_offer(true)
    }

    #[test]
    fn seeded_store_holds_two_records_in_order() {
        let store = InMemoryItemStore::seeded();
        let ids: Vec<i64> = store.list().unwrap().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.get(ItemId::new(1)).unwrap().name, "Martillo");
    }

    #[test]
    fn create_then_get_returns_same_payload() {
        let store = InMemoryItemStore::seeded();
        let created = store.create(wrench()).unwrap();
        assert_eq!(created, wrench());
        assert_eq!(store.get(ItemId::new(3)).unwrap(), wrench());
    }

    #[test]
    fn create_duplicate_is_conflict_and_leaves_store_unchanged() {
        let store = InMemoryItemStore::seeded();
        let before = store.list().unwrap();

        let dup = Item::new(1, "Otro", 1.0);
        match store.create(dup) {
            Err(DomainError::Conflict(_)) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn update_missing_id_is_not_found_even_with_mismatched_body() {
        let store = InMemoryItemStore::seeded();
        let err = store
            .update(ItemId::new(999), Item::new(5, "x", 0.0))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound(ItemId::new(999)));
    }

    #[test]
    fn update_with_mismatched_id_is_validation_error() {
        let store = InMemoryItemStore::seeded();
        let original = store.get(ItemId::new(2)).unwrap();

        let err = store
            .update(ItemId::new(2), Item::new(5, "ID no coincidente", 0.0))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.get(ItemId::new(2)).unwrap(), original);
    }

    #[test]
    fn update_replaces_whole_record_and_keeps_position() {
        let store = InMemoryItemStore::seeded();
        store.create(wrench()).unwrap();

        // No description, no offer flag: the old values must not survive.
        let replacement = Item::new(2, "Destornillador Phillips", 12.99);
        let updated = store.update(ItemId::new(2), replacement.clone()).unwrap();
        assert_eq!(updated, replacement);
        assert_eq!(store.get(ItemId::new(2)).unwrap(), replacement);

        let ids: Vec<i64> = store.list().unwrap().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn delete_removes_record_and_second_delete_is_not_found() {
        let store = InMemoryItemStore::seeded();
        store.create(wrench()).unwrap();

        let removed = store.delete(ItemId::new(3)).unwrap();
        assert_eq!(removed, wrench());
        assert_eq!(
            store.get(ItemId::new(3)).unwrap_err(),
            DomainError::NotFound(ItemId::new(3))
        );
        assert_eq!(
            store.delete(ItemId::new(3)).unwrap_err(),
            DomainError::NotFound(ItemId::new(3))
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deleted_id_can_be_created_again_at_the_end() {
        let store = InMemoryItemStore::seeded();
        store.delete(ItemId::new(1)).unwrap();
        store.create(Item::new(1, "Martillo nuevo", 21.0)).unwrap();

        let ids: Vec<i64> = store.list().unwrap().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn works_through_shared_handle() {
        let store: Arc<dyn ItemStore> = Arc::new(InMemoryItemStore::new());
        store.create(wrench()).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(i64),
        Update(i64),
        Delete(i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..8).prop_map(Op::Create),
            (0i64..8).prop_map(Op::Update),
            (0i64..8).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of operations, listing returns exactly
        /// the live records once each, and every record sits under its own id.
        #[test]
        fn list_matches_live_records(ops in prop::collection::vec(op(), 0..40)) {
            let store = InMemoryItemStore::new();
            let mut live: Vec<i64> = Vec::new();

            for op in ops {
                match op {
                    Op::Create(id) => {
                        let res = store.create(Item::new(id, format!("item {id}"), id as f64));
                        if live.contains(&id) {
                            prop_assert!(matches!(res, Err(DomainError::Conflict(_))));
                        } else {
                            prop_assert!(res.is_ok());
                            live.push(id);
                        }
                    }
                    Op::Update(id) => {
                        let res = store.update(ItemId::new(id), Item::new(id, "updated", 0.5));
                        prop_assert_eq!(res.is_ok(), live.contains(&id));
                    }
                    Op::Delete(id) => {
                        let res = store.delete(ItemId::new(id));
                        prop_assert_eq!(res.is_ok(), live.contains(&id));
                        live.retain(|x| *x != id);
                    }
                }
            }

            let listed: Vec<i64> = store.list().unwrap().iter().map(|i| i.id.value()).collect();
            prop_assert_eq!(&listed, &live);
            for id in live {
                prop_assert_eq!(store.get(ItemId::new(id)).unwrap().id, ItemId::new(id));
            }
        }
    }
}
