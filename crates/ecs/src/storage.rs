use std::any::Any;
use std::collections::BTreeMap;

use tileworld_common::EntityId;

/// Homogeneous storage for one component kind.
///
/// Backed by a `BTreeMap`, so iteration runs in ascending id order.
#[derive(Debug, Clone)]
pub struct Storage<K> {
    entries: BTreeMap<EntityId, K>,
}

impl<K> Default for Storage<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K> Storage<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous instance.
    pub fn insert(&mut self, id: EntityId, component: K) -> Option<K> {
        self.entries.insert(id, component)
    }

    pub fn get(&self, id: EntityId) -> Option<&K> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut K> {
        self.entries.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &K)> {
        self.entries.iter().map(|(id, k)| (*id, k))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut K)> {
        self.entries.iter_mut().map(|(id, k)| (*id, k))
    }
}

/// Object-safe view of a `Storage<K>` with the kind erased.
pub(crate) trait ErasedStorage {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn len(&self) -> usize;
    fn type_name(&self) -> &'static str;
}

impl<K: 'static> ErasedStorage for Storage<K> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<K>()
    }
}
