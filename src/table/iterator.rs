//! Various iterators over the ProbingTable.
//!
//! All iterators visit the live entries in ascending physical slot order,
//! which is neither the insertion order nor the hash order, and changes
//! whenever the table grows.

use super::root::{iter, slice};

use super::slot::Slot;

/// An iterator over the keys of a `ProbingTable`.
pub struct KeyIterator<'a, K, V>(KeyValueIterator<'a, K, V>);

impl<'a, K, V> KeyIterator<'a, K, V> {
    pub(crate) fn create(iterator: KeyValueIterator<'a, K, V>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> Clone for KeyIterator<'a, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, K, V> iter::Iterator for KeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.0.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a `ProbingTable`.
pub struct ValueIterator<'a, K, V>(KeyValueIterator<'a, K, V>);

impl<'a, K, V> ValueIterator<'a, K, V> {
    pub(crate) fn create(iterator: KeyValueIterator<'a, K, V>) -> Self {
        Self(iterator)
    }
}

impl<'a, K, V> Clone for ValueIterator<'a, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, K, V> iter::Iterator for ValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.0.next().map(|(_, v)| v)
    }
}

/// An iterator over the key-value pairs of a `ProbingTable`.
pub struct KeyValueIterator<'a, K, V>(slice::Iter<'a, Slot<K, V>>);

impl<'a, K, V> KeyValueIterator<'a, K, V> {
    pub(crate) fn create(slots: slice::Iter<'a, Slot<K, V>>) -> Self {
        Self(slots)
    }
}

impl<'a, K, V> Clone for KeyValueIterator<'a, K, V> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<'a, K, V> iter::Iterator for KeyValueIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find_map(Slot::live)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.0.size_hint().1)
    }
}

/// An iterator over the key-value pairs of a `ProbingTable`, with mutable
/// values.
pub struct KeyValueMutIterator<'a, K, V>(slice::IterMut<'a, Slot<K, V>>);

impl<'a, K, V> KeyValueMutIterator<'a, K, V> {
    pub(crate) fn create(slots: slice::IterMut<'a, Slot<K, V>>) -> Self {
        Self(slots)
    }
}

impl<'a, K, V> iter::Iterator for KeyValueMutIterator<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.by_ref().find_map(Slot::live_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.0.size_hint().1)
    }
}
