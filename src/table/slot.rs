//! Internal slot of the ProbingTable.

use super::root::{fmt, mem};

//  The state of a single position of the slot array.
//
//  A Tombstone retains the key it held when live, for diagnostics only.
#[derive(Clone, PartialEq)]
pub enum Slot<K, V> {
    //  Never occupied since the array was created.
    Empty,
    //  Occupied by a key-value pair.
    Live(K, V),
    //  Occupied, then logically deleted.
    Tombstone(K),
}

impl<K, V> Slot<K, V> {
    //  Checks whether the slot is a tombstone.
    pub fn is_tombstone(&self) -> bool { matches!(self, Slot::Tombstone(_)) }

    //  Gets the key-value pair, if live.
    pub fn live(&self) -> Option<(&K, &V)> {
        if let Slot::Live(key, value) = self {
            Some((key, value))
        } else {
            None
        }
    }

    //  Gets the key and a mutable value, if live.
    pub fn live_mut(&mut self) -> Option<(&K, &mut V)> {
        if let Slot::Live(key, value) = self {
            Some((key, value))
        } else {
            None
        }
    }

    //  Turns a live slot into a tombstone, returning its value.
    //
    //  Has no effect on empty slots and tombstones.
    pub fn kill(&mut self) -> Option<V> {
        match mem::replace(self, Slot::Empty) {
            Slot::Live(key, value) => {
                *self = Slot::Tombstone(key);
                Some(value)
            },
            other => {
                *self = other;
                None
            },
        }
    }

    //  Moves out the key-value pair, if live.
    pub fn into_live(self) -> Option<(K, V)> {
        if let Slot::Live(key, value) = self {
            Some((key, value))
        } else {
            None
        }
    }
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self { Slot::Empty }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Slot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Slot::Empty => write!(f, "<empty>"),
            Slot::Live(key, value) => write!(f, "{:?} => {:?}", key, value),
            Slot::Tombstone(key) => write!(f, "<tombstone {:?}>", key),
        }
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn default() {
    let slot: Slot<String, i32> = Slot::default();

    assert!(matches!(slot, Slot::Empty));
    assert!(!slot.is_tombstone());
    assert_eq!(None, slot.live());
}

#[test]
fn kill_live() {
    let mut slot = Slot::Live("a", 1);

    assert_eq!(Some(1), slot.kill());
    assert!(slot.is_tombstone());
    assert_eq!(None, slot.live());
}

#[test]
fn kill_tombstone() {
    let mut slot: Slot<&str, i32> = Slot::Tombstone("a");

    assert_eq!(None, slot.kill());
    assert!(slot.is_tombstone());
}

#[test]
fn kill_empty() {
    let mut slot: Slot<&str, i32> = Slot::Empty;

    assert_eq!(None, slot.kill());
    assert!(matches!(slot, Slot::Empty));
}

#[test]
fn live_mut() {
    let mut slot = Slot::Live("a", 1);

    if let Some((_, value)) = slot.live_mut() {
        *value = 2;
    }

    assert_eq!(Some((&"a", &2)), slot.live());
}

#[test]
fn trait_debug() {
    assert_eq!("<empty>", format!("{:?}", Slot::<i32, i32>::Empty));
    assert_eq!("1 => 2", format!("{:?}", Slot::Live(1, 2)));
    assert_eq!("<tombstone 1>", format!("{:?}", Slot::<i32, i32>::Tombstone(1)));
}

}
