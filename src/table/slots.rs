//! The flat slot array underlying the ProbingTable.

use super::root::{borrow, fmt, iter, mem, slice};
use super::root::vec::Vec;

use super::config::Capacity;
use super::failure::{Failure, Result};
use super::hooks::KeyHooks;
use super::slot::Slot;

use self::borrow::Borrow;

//  The storage.
//
//  A fixed-length array of slots, probed linearly from the home index of a
//  key. The array never changes length; growing the table means building a
//  new, larger, array.
#[derive(Clone)]
pub struct SlotArray<K, V> {
    capacity: Capacity,
    slots: Vec<Slot<K, V>>,
}

impl<K, V> SlotArray<K, V> {
    //  Creates an instance of `capacity` empty slots.
    pub fn new(capacity: Capacity) -> Self {
        let slots = iter::repeat_with(Slot::default).take(capacity.get()).collect();

        Self { capacity, slots }
    }

    //  Returns the capacity.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns the slot at `index`.
    //
    //  #   Panics
    //
    //  Panics if `index` is out of bounds.
    pub fn slot(&self, index: usize) -> &Slot<K, V> { &self.slots[index] }

    //  Returns the slot at `index`.
    //
    //  #   Panics
    //
    //  Panics if `index` is out of bounds.
    pub fn slot_mut(&mut self, index: usize) -> &mut Slot<K, V> {
        &mut self.slots[index]
    }

    //  Replaces the slot at `index`, returning the former one.
    //
    //  #   Panics
    //
    //  Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, slot: Slot<K, V>) -> Slot<K, V> {
        mem::replace(&mut self.slots[index], slot)
    }

    //  Returns the slots, in physical order.
    pub fn slots(&self) -> slice::Iter<'_, Slot<K, V>> { self.slots.iter() }

    //  Returns the slots, in physical order.
    pub fn slots_mut(&mut self) -> slice::IterMut<'_, Slot<K, V>> {
        self.slots.iter_mut()
    }

    //  Returns the probe sequence of a key of the given hash.
    pub fn probe(&self, hash: u64) -> Probe {
        Probe::new(self.capacity.reduce(hash), self.capacity)
    }

    //  Finds the index of the live slot holding `key`.
    //
    //  The scan stops at the first empty slot, and skips over tombstones.
    pub fn find<Q, H>(&self, key: &Q, hash: u64, hooks: &H) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        for index in self.probe(hash) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Live(candidate, _) if hooks.eq(candidate.borrow(), key) => {
                    return Some(index);
                },
                _ => (),
            }
        }

        None
    }

    //  Locates the index at which `key` may be inserted.
    //
    //  The first tombstone of the probe sequence is reused, but only once the
    //  sequence has been scanned up to its first empty slot: a live duplicate
    //  may sit past the tombstone.
    //
    //  #   Errors
    //
    //  -   `DuplicateKey` if a live slot holds `key`.
    //  -   `TableFull` if every slot is live.
    pub fn locate<H>(&self, key: &K, hash: u64, hooks: &H) -> Result<usize>
    where
        H: KeyHooks<K>,
    {
        let mut tombstone = None;

        for index in self.probe(hash) {
            match &self.slots[index] {
                Slot::Empty => return Ok(tombstone.unwrap_or(index)),
                Slot::Live(candidate, _) => {
                    if hooks.eq(candidate, key) {
                        return Err(Failure::DuplicateKey);
                    }
                },
                Slot::Tombstone(_) => {
                    tombstone.get_or_insert(index);
                },
            }
        }

        //  The whole sequence was scanned, no duplicate lies beyond.
        tombstone.ok_or(Failure::TableFull)
    }

    //  Moves the live entries, in physical order, into a new array of
    //  `capacity` slots, through insertion.
    //
    //  Tombstones are dropped.
    //
    //  #   Errors
    //
    //  Returns `TableFull` if the live entries do not fit, which cannot occur
    //  when `capacity` exceeds the number of live entries.
    pub fn rehash<H>(&mut self, capacity: Capacity, hooks: &H) -> Result<()>
    where
        H: KeyHooks<K>,
    {
        let mut result = Self::new(capacity);

        for (key, value) in mem::take(&mut self.slots).into_iter().filter_map(Slot::into_live) {
            let hash = hooks.hash(&key);
            let index = result.locate(&key, hash, hooks)?;
            result.slots[index] = Slot::Live(key, value);
        }

        *self = result;

        Ok(())
    }

    //  Writes one line per slot.
    pub fn describe(&self, f: &mut fmt::Formatter) -> fmt::Result
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "[{}]: Empty", index)?,
                Slot::Tombstone(key) => writeln!(f, "[{}]: Tombstone({:?})", index, key)?,
                Slot::Live(key, value) => writeln!(f, "[{}]: {:?} -> {:?}", index, key, value)?,
            }
        }

        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SlotArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}

//  The linear probe sequence.
//
//  Visits each index of the array exactly once, starting from the home index
//  and wrapping around.
#[derive(Clone, Debug)]
pub struct Probe {
    next: usize,
    remaining: usize,
    capacity: usize,
}

impl Probe {
    fn new(home: usize, capacity: Capacity) -> Self {
        debug_assert!(home < capacity.get());

        Probe { next: home, remaining: capacity.get(), capacity: capacity.get() }
    }
}

impl iter::Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let result = self.next;

        self.remaining -= 1;
        self.next = if result + 1 == self.capacity { 0 } else { result + 1 };

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl iter::ExactSizeIterator for Probe {}

#[cfg(test)]
mod tests {

use crate::utils::tester::StubHooks;

use super::*;

fn capacity(n: usize) -> Capacity { Capacity::new(n).unwrap() }

#[test]
fn probe_wraps_around() {
    let slots: SlotArray<u32, u32> = SlotArray::new(capacity(4));

    let sequence: Vec<_> = slots.probe(6).collect();

    assert_eq!(vec![2, 3, 0, 1], sequence);
}

#[test]
fn probe_single_slot() {
    let slots: SlotArray<u32, u32> = SlotArray::new(capacity(1));

    let sequence: Vec<_> = slots.probe(u64::MAX).collect();

    assert_eq!(vec![0], sequence);
}

#[test]
fn find_skips_tombstones() {
    let mut slots: SlotArray<u32, char> = SlotArray::new(capacity(4));
    slots.replace(0, Slot::Tombstone(1));
    slots.replace(1, Slot::Live(2, 'b'));

    assert_eq!(Some(1), slots.find(&2, 0, &StubHooks));
    assert_eq!(None, slots.find(&1, 0, &StubHooks));
}

#[test]
fn find_stops_at_empty() {
    let mut slots: SlotArray<u32, char> = SlotArray::new(capacity(4));
    slots.replace(0, Slot::Live(1, 'a'));
    slots.replace(2, Slot::Live(3, 'c'));

    //  3 is beyond the empty slot 1.
    assert_eq!(None, slots.find(&3, 0, &StubHooks));
    assert_eq!(Some(2), slots.find(&3, 2, &StubHooks));
}

#[test]
fn locate_reuses_first_tombstone() {
    let mut slots: SlotArray<u32, char> = SlotArray::new(capacity(4));
    slots.replace(0, Slot::Live(1, 'a'));
    slots.replace(1, Slot::Tombstone(2));
    slots.replace(2, Slot::Tombstone(3));

    assert_eq!(Ok(1), slots.locate(&4, 0, &StubHooks));
}

#[test]
fn locate_detects_duplicate_beyond_tombstone() {
    let mut slots: SlotArray<u32, char> = SlotArray::new(capacity(4));
    slots.replace(0, Slot::Tombstone(1));
    slots.replace(1, Slot::Live(2, 'b'));

    assert_eq!(Err(Failure::DuplicateKey), slots.locate(&2, 0, &StubHooks));
}

#[test]
fn locate_exhausted() {
    let mut slots: SlotArray<u32, char> = SlotArray::new(capacity(2));
    slots.replace(0, Slot::Live(1, 'a'));
    slots.replace(1, Slot::Tombstone(2));

    assert_eq!(Ok(1), slots.locate(&3, 0, &StubHooks));

    slots.replace(1, Slot::Live(2, 'b'));

    assert_eq!(Err(Failure::TableFull), slots.locate(&3, 0, &StubHooks));
}

#[test]
fn rehash_drops_tombstones() {
    let mut slots: SlotArray<u32, char> = SlotArray::new(capacity(2));
    slots.replace(0, Slot::Tombstone(1));
    slots.replace(1, Slot::Live(2, 'b'));

    slots.rehash(capacity(4), &StubHooks).unwrap();

    assert_eq!(4, slots.capacity().get());
    assert_eq!(1, slots.slots().filter(|s| s.live().is_some()).count());
    assert_eq!(0, slots.slots().filter(|s| s.is_tombstone()).count());
    assert_eq!(Some(0), slots.find(&2, 0, &StubHooks));
}

}
