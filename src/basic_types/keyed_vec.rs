use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// A [`Vec`] which is indexed by a typed key rather than a raw `usize`, so that e.g. a
/// [`ConstraintId`](crate::engine::ConstraintId) cannot accidentally be used to index the
/// assignment of propositions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct KeyedVec<Key, Value> {
    key: PhantomData<Key>,
    elements: Vec<Value>,
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            elements: Vec::default(),
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub(crate) fn new(elements: Vec<Value>) -> Self {
        Self {
            key: PhantomData,
            elements,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Add a new value and return the key under which it is stored.
    pub(crate) fn push(&mut self, value: Value) -> Key {
        self.elements.push(value);
        Key::create_from_index(self.elements.len() - 1)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Value> {
        self.elements.iter()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }

    pub(crate) fn as_slice(&self) -> &[Value] {
        &self.elements
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, index: Key) -> &Self::Output {
        &self.elements[index.to_index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, index: Key) -> &mut Self::Output {
        &mut self.elements[index.to_index()]
    }
}

pub(crate) trait StorageKey: Clone + Copy {
    fn to_index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn to_index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}
