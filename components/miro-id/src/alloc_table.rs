use crate::InternId;
use std::{hash::Hash, marker::PhantomData};

/// An individual allocating table, where each thing
/// added to the table gets a unique index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocTable<K: InternId, V: Hash + Eq> {
    vec: Vec<V>,
    phantom: PhantomData<K>,
}

impl<K: InternId, V: Hash + Eq> Default for AllocTable<K, V> {
    fn default() -> Self {
        Self {
            vec: Vec::default(),
            phantom: PhantomData,
        }
    }
}

impl<K: InternId, V: Hash + Eq> AllocTable<K, V> {
    pub fn add(&mut self, value: V) -> K {
        let index = self.vec.len();
        self.vec.push(value);
        let index: u32 = index.try_into().unwrap();
        K::from_u32(index)
    }

    pub fn data(&self, key: K) -> &V {
        &self.vec[key.as_u32() as usize]
    }

    pub fn data_mut(&mut self, key: K) -> &mut V {
        &mut self.vec[key.as_u32() as usize]
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Iterate the keys in allocation order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        (0..self.vec.len() as u32).map(K::from_u32)
    }
}

impl<K: InternId, V: Hash + Eq> std::ops::Index<K> for AllocTable<K, V> {
    type Output = V;

    fn index(&self, key: K) -> &Self::Output {
        self.data(key)
    }
}

impl<K: InternId, V: Hash + Eq> std::ops::IndexMut<K> for AllocTable<K, V> {
    fn index_mut(&mut self, key: K) -> &mut Self::Output {
        self.data_mut(key)
    }
}
