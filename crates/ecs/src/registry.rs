use std::any::TypeId;
use std::collections::HashMap;

use tileworld_common::EntityId;

use crate::storage::{ErasedStorage, Storage};

/// Any `'static` type can be stored as a component.
pub trait Component: 'static {}

impl<T: 'static> Component for T {}

/// Small integer naming a component kind within one registry.
///
/// Assigned in registration order starting at 0. Ids are not stable across
/// registries or processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(pub u32);

impl KindId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-kind component storage plus the entity id counter.
///
/// Single-threaded: share it across threads only behind external
/// synchronization.
#[derive(Default)]
pub struct ComponentRegistry {
    next_id: u64,
    kinds: HashMap<TypeId, KindId>,
    storages: Vec<Box<dyn ErasedStorage>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next unused entity id.
    pub fn new_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Number of entity ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next_id
    }

    /// Kind id for `K`, creating its storage if this is the first use.
    pub fn register<K: Component>(&mut self) -> KindId {
        if let Some(kind) = self.kinds.get(&TypeId::of::<K>()) {
            return *kind;
        }
        let kind = KindId(self.storages.len() as u32);
        self.storages.push(Box::new(Storage::<K>::new()));
        self.kinds.insert(TypeId::of::<K>(), kind);
        tracing::debug!(
            kind = kind.0,
            type_name = std::any::type_name::<K>(),
            "component kind registered"
        );
        kind
    }

    /// Kind id for `K` if it has been registered.
    pub fn kind_id<K: Component>(&self) -> Option<KindId> {
        self.kinds.get(&TypeId::of::<K>()).copied()
    }

    /// Number of registered kinds.
    pub fn kind_count(&self) -> usize {
        self.storages.len()
    }

    /// Storage for `K`, if it exists yet.
    pub fn storage<K: Component>(&self) -> Option<&Storage<K>> {
        let kind = self.kind_id::<K>()?;
        self.storages.get(kind.index())?.as_any().downcast_ref()
    }

    /// Storage for `K`, created on first lookup.
    ///
    /// `None` only if the slot registered for `K` holds another type, which
    /// `register` never produces.
    pub fn storage_mut<K: Component>(&mut self) -> Option<&mut Storage<K>> {
        let kind = self.register::<K>();
        self.typed_mut(kind)
    }

    fn typed_mut<K: Component>(&mut self, kind: KindId) -> Option<&mut Storage<K>> {
        self.storages.get_mut(kind.index())?.as_any_mut().downcast_mut()
    }

    /// Insert or overwrite the `K` component of `id`, returning the previous
    /// instance.
    pub fn write<K: Component>(&mut self, id: EntityId, component: K) -> Option<K> {
        let Some(storage) = self.storage_mut::<K>() else {
            tracing::error!(
                type_name = std::any::type_name::<K>(),
                "component storage holds another type"
            );
            return None;
        };
        storage.insert(id, component)
    }

    /// The `K` component of `id`, if present. `K` need not be registered.
    pub fn read<K: Component>(&self, id: EntityId) -> Option<&K> {
        self.storage::<K>()?.get(id)
    }

    pub fn read_mut<K: Component>(&mut self, id: EntityId) -> Option<&mut K> {
        let kind = self.kind_id::<K>()?;
        self.typed_mut::<K>(kind)?.get_mut(id)
    }

    pub fn has<K: Component>(&self, id: EntityId) -> bool {
        self.storage::<K>().is_some_and(|s| s.contains(id))
    }

    /// Call `f` once per stored `K`, in ascending `EntityId` order.
    ///
    /// The registry stays borrowed for the whole call, so `f` cannot write
    /// components while the walk is in progress.
    pub fn for_each<K: Component>(&self, mut f: impl FnMut(EntityId, &K)) {
        if let Some(storage) = self.storage::<K>() {
            for (id, component) in storage.iter() {
                f(id, component);
            }
        }
    }

    /// Like `for_each`, with mutable access to each component.
    pub fn for_each_mut<K: Component>(&mut self, mut f: impl FnMut(EntityId, &mut K)) {
        let Some(kind) = self.kind_id::<K>() else {
            return;
        };
        if let Some(storage) = self.typed_mut::<K>(kind) {
            for (id, component) in storage.iter_mut() {
                f(id, component);
            }
        }
    }

    /// `(kind, type name, instance count)` for every registered kind, in
    /// registration order.
    pub fn kinds(&self) -> impl Iterator<Item = (KindId, &'static str, usize)> + '_ {
        self.storages
            .iter()
            .enumerate()
            .map(|(i, s)| (KindId(i as u32), s.type_name(), s.len()))
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("next_id", &self.next_id)
            .field(
                "kinds",
                &self.kinds().map(|(_, name, len)| (name, len)).collect::<Vec<_>>(),
            )
            .finish()
    }
}
