use crate::InternId;
use miro_collections::IndexSet;
use std::{hash::Hash, marker::PhantomData};

/// An individual interning table, where each unique thing added
/// to the table gets a unique index, but adding the same thing
/// twice gets the same index.
#[derive(Clone, Debug)]
pub struct InternTable<K: InternId, V: Hash + Eq> {
    map: IndexSet<V>,
    phantom: PhantomData<K>,
}

impl<K: InternId, V: Hash + Eq> Default for InternTable<K, V> {
    fn default() -> Self {
        Self {
            map: IndexSet::default(),
            phantom: PhantomData,
        }
    }
}

impl<K: InternId, V: Hash + Eq> PartialEq for InternTable<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: InternId, V: Hash + Eq> Eq for InternTable<K, V> {}

impl<K: InternId, V: Hash + Eq> InternTable<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: V) -> K {
        let (index, _) = self.map.insert_full(value);
        let index: u32 = index.try_into().unwrap();
        K::from_u32(index)
    }

    pub fn data(&self, key: K) -> &V {
        self.map.get_index(key.as_u32() as usize).unwrap()
    }
}

impl<K: InternId, V: Hash + Eq> std::ops::Index<K> for InternTable<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &Self::Output {
        self.data(key)
    }
}
