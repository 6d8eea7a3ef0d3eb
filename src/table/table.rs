//! The ProbingTable

use log::{debug, trace};

use super::root::{borrow, fmt, iter, mem, ops};
use super::root::string::{String, ToString};

use super::cloner::ValueCloner;
use super::config::{self, Capacity, Config, GrowthPolicy, LoadFactor};
use super::failure::{Failure, Result};
use super::generator::Generator;
use super::hooks::KeyHooks;
use super::iterator::{KeyIterator, KeyValueIterator, KeyValueMutIterator, ValueIterator};
use super::slot::Slot;
use super::slots::SlotArray;

#[cfg(feature = "with-std")]
use super::hooks::DefaultKeyHooks;

use self::borrow::Borrow;

//
//  Public Interface
//

/// `ProbingTable`
///
/// An open addressing table, probing linearly over a single array of slots.
#[cfg(not(feature = "with-std"))]
#[derive(Clone)]
pub struct ProbingTable<K, V, H> {
    hooks: H,
    threshold: LoadFactor,
    growth: GrowthPolicy,
    live: usize,
    tombstones: usize,
    slots: SlotArray<K, V>,
}

/// `ProbingTable`
///
/// An open addressing table, probing linearly over a single array of slots.
#[cfg(feature = "with-std")]
#[derive(Clone)]
pub struct ProbingTable<K, V, H = DefaultKeyHooks> {
    //  Hooks of the table, used for every hash and every comparison.
    hooks: H,
    //  The load factor at which the table grows, before inserting.
    threshold: LoadFactor,
    //  Which slots count towards `threshold`.
    growth: GrowthPolicy,
    //  The number of live slots.
    live: usize,
    //  The number of tombstoned slots.
    tombstones: usize,
    slots: SlotArray<K, V>,
}

impl<K, V, H: Default> ProbingTable<K, V, H> {
    /// Creates a new instance of the `ProbingTable` with the default
    /// configuration: 10 slots, and a load factor threshold of 0.72.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let table: ProbingTable<i32, i32> = ProbingTable::with_defaults();
    ///
    /// assert_eq!(0, table.len());
    /// assert_eq!(10, table.capacity());
    /// assert_eq!(0.72, table.threshold());
    /// ```
    pub fn with_defaults() -> Self {
        Self::from_parts(Capacity::DEFAULT, LoadFactor::DEFAULT, GrowthPolicy::default(), H::default())
    }

    /// Creates a new instance of the `ProbingTable` with `capacity` slots and
    /// the default load factor threshold.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `capacity` is 0.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let table: ProbingTable<i32, i32> = ProbingTable::with_capacity(4).unwrap();
    ///
    /// assert_eq!(4, table.capacity());
    /// assert!(ProbingTable::<i32, i32>::with_capacity(0).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(Config::default().with_capacity(capacity), H::default())
    }
}

impl<K, V, H> ProbingTable<K, V, H> {
    /// Creates a new instance of the `ProbingTable` with `capacity` empty
    /// slots, growing once its load factor reaches `load_factor`.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `capacity` is 0, or if `load_factor` is
    /// not within `(0, 1]`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::failure::{Argument, Failure};
    /// #   use linprobe::hooks::DefaultKeyHooks;
    /// #   use linprobe::table::ProbingTable;
    /// let table: ProbingTable<i32, i32> =
    ///     ProbingTable::new(4, 0.75, DefaultKeyHooks::default()).unwrap();
    ///
    /// assert_eq!(4, table.capacity());
    /// assert_eq!(0.75, table.threshold());
    ///
    /// let error = ProbingTable::<i32, i32>::new(4, 0.0, DefaultKeyHooks::default());
    /// assert_eq!(Some(Failure::InvalidArgument(Argument::LoadFactor)), error.err());
    /// ```
    pub fn new(capacity: usize, load_factor: f64, hooks: H) -> Result<Self> {
        Self::with_config(Config::new(capacity, load_factor), hooks)
    }

    /// Creates a new instance of the `ProbingTable` from a configuration.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if the configuration is invalid.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::config::{Config, GrowthPolicy};
    /// #   use linprobe::hooks::DefaultKeyHooks;
    /// #   use linprobe::table::ProbingTable;
    /// let config = Config::new(8, 0.5).with_growth(GrowthPolicy::Occupied);
    /// let table: ProbingTable<i32, i32> =
    ///     ProbingTable::with_config(config, DefaultKeyHooks::default()).unwrap();
    ///
    /// assert_eq!(GrowthPolicy::Occupied, table.growth());
    /// ```
    pub fn with_config(config: Config, hooks: H) -> Result<Self> {
        let (capacity, threshold) = config.validate()?;

        Ok(Self::from_parts(capacity, threshold, config.growth, hooks))
    }

    /// Returns whether the instance contains any live entry, or not.
    pub fn is_empty(&self) -> bool { self.live == 0 }

    /// Returns the number of live entries.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// assert_eq!(0, table.len());
    ///
    /// table.insert(1, 2).unwrap();
    /// assert_eq!(1, table.len());
    ///
    /// table.remove(&1);
    /// assert_eq!(0, table.len());
    /// ```
    pub fn len(&self) -> usize { self.live }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize { self.slots.capacity().get() }

    /// Returns the ratio of live entries to slots.
    pub fn load_factor(&self) -> f64 { config::ratio(self.live, self.slots.capacity()) }

    /// Returns the load factor threshold at which the table grows.
    pub fn threshold(&self) -> f64 { self.threshold.get() }

    /// Returns the growth policy.
    pub fn growth(&self) -> GrowthPolicy { self.growth }

    /// Returns the number of tombstones, that is logically deleted slots not
    /// yet reclaimed by growth.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, 2).unwrap();
    /// table.remove(&1);
    ///
    /// assert_eq!(1, table.tombstones());
    ///
    /// table.clear();
    /// assert_eq!(0, table.tombstones());
    /// ```
    pub fn tombstones(&self) -> usize { self.tombstones }

    /// Returns the ratio of live and tombstoned slots to slots.
    pub fn occupancy(&self) -> f64 {
        config::ratio(self.live + self.tombstones, self.slots.capacity())
    }

    /// Returns the hooks.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns `true` if the table contains a live entry for the key.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, false).unwrap();
    ///
    /// assert!(table.contains_key(&1));
    /// assert!(!table.contains_key(&0));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// #   Errors
    ///
    /// Returns `KeyNotFound` if the key is absent.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::failure::Failure;
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<String, _> = ProbingTable::with_defaults();
    /// table.insert("Hello".to_string(), 1).unwrap();
    ///
    /// assert_eq!(Ok(&1), table.get("Hello"));
    /// assert_eq!(Err(Failure::KeyNotFound), table.get("World"));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        self.try_get(key).ok_or(Failure::KeyNotFound)
    }

    /// Returns a reference to the value corresponding to the key, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, false).unwrap();
    ///
    /// assert_eq!(Some(&false), table.try_get(&1));
    /// assert_eq!(None, table.try_get(&0));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the key-value pair corresponding to the key, if any.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        let index = self.find(key)?;

        self.slots.slot(index).live()
    }

    /// Returns a mutable reference to the value corresponding to the key, if
    /// any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, false).unwrap();
    ///
    /// if let Some(v) = table.get_mut(&1) {
    ///     *v = true;
    /// }
    /// assert_eq!(Ok(&true), table.get(&1));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        let index = self.find(key)?;

        self.slots.slot_mut(index).live_mut().map(|(_, v)| v)
    }

    /// Returns `true` if the table maps the key to a value equal to `value`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
        V: PartialEq,
    {
        self.try_get(key) == Some(value)
    }

    /// Returns `true` if any live entry holds a value equal to `value`.
    ///
    /// This is a full scan of the slots.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Inserts a key-value pair into the table.
    ///
    /// The table grows first, doubling its capacity, if its load factor has
    /// reached the threshold.
    ///
    /// #   Errors
    ///
    /// -   `DuplicateKey` if the key is already present, in which case the
    ///     table is left untouched.
    /// -   `CapacityOverflow` if the table cannot grow.
    /// -   `TableFull` if every slot is live, which the growth policy prevents.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::failure::Failure;
    /// #   use linprobe::hooks::DefaultKeyHooks;
    /// #   use linprobe::table::ProbingTable;
    /// let mut table = ProbingTable::new(4, 0.75, DefaultKeyHooks::default()).unwrap();
    ///
    /// for i in 0..3 {
    ///     table.insert(i, i * 10).unwrap();
    /// }
    /// assert_eq!(4, table.capacity());
    ///
    /// //  The load factor, 0.75, is reached: the table grows before inserting.
    /// table.insert(3, 30).unwrap();
    /// assert_eq!(8, table.capacity());
    ///
    /// assert_eq!(Err(Failure::DuplicateKey), table.insert(3, 31));
    /// assert_eq!(Ok(&30), table.get(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()>
    where
        H: KeyHooks<K>,
    {
        let hash = self.hooks.hash(&key);

        if self.is_growth_due() {
            //  A rejected insertion does not grow the table either.
            if self.slots.find(&key, hash, &self.hooks).is_some() {
                return Err(Failure::DuplicateKey);
            }

            self.grow()?;
        }

        let index = self.slots.locate(&key, hash, &self.hooks)?;

        if self.slots.replace(index, Slot::Live(key, value)).is_tombstone() {
            self.tombstones -= 1;
        }

        self.live += 1;

        trace!("inserted at slot {}, load factor {:.2}", index, self.load_factor());

        Ok(())
    }

    /// Sets the value of a key, inserting the key if absent.
    ///
    /// Returns the previous value, if any. An existing entry is updated in
    /// place, without moving.
    ///
    /// #   Errors
    ///
    /// Returns an error if the key is absent, and cannot be inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    ///
    /// assert_eq!(Ok(None), table.try_set(1, "a"));
    /// assert_eq!(Ok(Some("a")), table.try_set(1, "b"));
    /// assert_eq!(1, table.len());
    /// ```
    pub fn try_set(&mut self, key: K, value: V) -> Result<Option<V>>
    where
        H: KeyHooks<K>,
    {
        if let Some(current) = self.get_mut(&key) {
            return Ok(Some(mem::replace(current, value)));
        }

        self.insert(key, value)?;

        Ok(None)
    }

    /// Sets the value of a key, inserting the key if absent.
    ///
    /// Calling this method is equivalent to calling `try_set` and panicking on
    /// error.
    ///
    /// #   Panics
    ///
    /// Panics if the key is absent, and cannot be inserted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    ///
    /// assert_eq!(None, table.set(1, "a"));
    /// assert_eq!(Some("a"), table.set(1, "b"));
    /// assert_eq!(Ok(&"b"), table.get(&1));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V>
    where
        H: KeyHooks<K>,
    {
        self.try_set(key, value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Removes the key, if present.
    ///
    /// Returns whether the key was present. The slot becomes a tombstone, and
    /// no other entry moves.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, 2).unwrap();
    ///
    /// assert!(table.remove(&1));
    /// assert!(!table.remove(&1));
    /// assert!(!table.contains_key(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        self.take(key).is_some()
    }

    /// Removes the key, if present, returning its value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, 2).unwrap();
    ///
    /// assert_eq!(Some(2), table.take(&1));
    /// assert_eq!(None, table.take(&1));
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        let index = self.find(key)?;

        self.kill(index)
    }

    /// Removes the key, if present and mapped to a value equal to `value`.
    ///
    /// Returns whether the entry was removed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, 2).unwrap();
    ///
    /// assert!(!table.remove_entry(&1, &3));
    /// assert!(table.remove_entry(&1, &2));
    /// assert!(table.is_empty());
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
        V: PartialEq,
    {
        let index = match self.find(key) {
            Some(index) => index,
            None => return false,
        };

        let matches = self.slots.slot(index).live().map_or(false, |(_, v)| v == value);

        matches && self.kill(index).is_some()
    }

    /// Removes the first live entry, in slot order, holding a value equal to
    /// `value`.
    ///
    /// Returns whether an entry was removed. This is a full scan of the slots.
    pub fn remove_value(&mut self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let index = self.slots.slots()
            .position(|slot| slot.live().map_or(false, |(_, v)| v == value));

        index.map_or(false, |index| self.kill(index).is_some())
    }

    /// Clears the instance.
    ///
    /// All slots are reset to empty, including tombstones, and the capacity is
    /// retained.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_capacity(4).unwrap();
    /// table.extend([(1, false), (2, true), (3, false)].iter().copied());
    ///
    /// table.clear();
    /// assert_eq!(0, table.len());
    /// assert_eq!(4, table.capacity());
    /// assert_eq!(None, table.iter().next());
    /// ```
    pub fn clear(&mut self) {
        let capacity = self.slots.capacity();

        //  Pre-pooping our pants in case a Drop panics.
        self.live = 0;
        self.tombstones = 0;

        let slots = mem::replace(&mut self.slots, SlotArray::new(capacity));

        debug!("cleared table of {} slots", capacity.get());

        mem::drop(slots);
    }

    /// Returns an iterator over the live key-value pairs, in slot order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.extend([(1, 'a'), (2, 'b'), (3, 'c')].iter().copied());
    /// table.remove(&2);
    ///
    /// let mut pairs: Vec<_> = table.iter().collect();
    /// pairs.sort();
    ///
    /// assert_eq!(vec![(&1, &'a'), (&3, &'c')], pairs);
    /// ```
    pub fn iter(&self) -> KeyValueIterator<'_, K, V> {
        KeyValueIterator::create(self.slots.slots())
    }

    /// Returns an iterator over the live key-value pairs, in slot order, with
    /// mutable values.
    pub fn iter_mut(&mut self) -> KeyValueMutIterator<'_, K, V> {
        KeyValueMutIterator::create(self.slots.slots_mut())
    }

    /// Returns an iterator over the live keys, in slot order.
    pub fn keys(&self) -> KeyIterator<'_, K, V> { KeyIterator::create(self.iter()) }

    /// Returns an iterator over the live values, in slot order.
    pub fn values(&self) -> ValueIterator<'_, K, V> { ValueIterator::create(self.iter()) }

    /// Returns a view of the table implementing `Display`, one line per slot.
    pub fn display(&self) -> Describe<'_, K, V> { Describe(&self.slots) }

    /// Renders the table, one line per slot.
    ///
    /// The rendering is purely diagnostic, and not stable across versions.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::hooks::BuildHasherHooks;
    /// #   use linprobe::table::ProbingTable;
    /// #   use std::collections::hash_map::RandomState;
    /// let hooks = BuildHasherHooks::new(RandomState::new());
    /// let mut table = ProbingTable::new(1, 1.0, hooks).unwrap();
    /// table.insert("a", 1).unwrap();
    ///
    /// assert_eq!("[0]: \"a\" -> 1\n", table.describe());
    ///
    /// table.remove("a");
    /// assert_eq!("[0]: Tombstone(\"a\")\n", table.describe());
    ///
    /// table.clear();
    /// assert_eq!("[0]: Empty\n", table.describe());
    /// ```
    pub fn describe(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        self.display().to_string()
    }

    /// Copies the table, entry by entry.
    ///
    /// The copy starts with the capacity, threshold and growth policy of this
    /// table, and receives each live entry, in slot order, through insertion;
    /// the values being copied by `cloner`. Tombstones are not copied, and the
    /// copy may grow while receiving the entries.
    ///
    /// #   Errors
    ///
    /// Returns an error if an entry cannot be inserted into the copy.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use std::cell::RefCell;
    /// #   use std::rc::Rc;
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// table.insert(1, Rc::new(RefCell::new(1))).unwrap();
    ///
    /// let copy = table.copy_with(|v: &Rc<RefCell<i32>>| Rc::new(RefCell::new(*v.borrow()))).unwrap();
    /// *copy.get(&1).unwrap().borrow_mut() = 2;
    ///
    /// assert_eq!(1, *table.get(&1).unwrap().borrow());
    /// ```
    pub fn copy_with<C>(&self, cloner: C) -> Result<Self>
    where
        K: Clone,
        H: Clone + KeyHooks<K>,
        C: ValueCloner<V>,
    {
        let mut result = Self::from_parts(
            self.slots.capacity(),
            self.threshold,
            self.growth,
            self.hooks.clone(),
        );

        for (key, value) in self.iter() {
            result.insert(key.clone(), cloner.clone_value(value))?;
        }

        Ok(result)
    }

    /// Creates a new instance, seeded with generated entries.
    ///
    /// `count` insertions are attempted; an insertion whose generated key is
    /// already present is skipped, so that the table may hold fewer than
    /// `count` entries.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if the configuration is invalid, or any
    /// other insertion error.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::config::Config;
    /// #   use linprobe::hooks::DefaultKeyHooks;
    /// #   use linprobe::table::ProbingTable;
    /// let mut next = 0;
    /// let keys = || { next += 1; next % 5 };
    ///
    /// let table = ProbingTable::generate(
    ///     Config::default(),
    ///     DefaultKeyHooks::default(),
    ///     10,
    ///     keys,
    ///     || "figure",
    /// ).unwrap();
    ///
    /// assert_eq!(5, table.len());
    /// ```
    pub fn generate<KG, VG>(
        config: Config,
        hooks: H,
        count: usize,
        mut keys: KG,
        mut values: VG,
    )
        -> Result<Self>
    where
        H: KeyHooks<K>,
        KG: Generator<K>,
        VG: Generator<V>,
    {
        let mut result = Self::with_config(config, hooks)?;

        for _ in 0..count {
            match result.insert(keys.generate(), values.generate()) {
                Err(Failure::DuplicateKey) => debug!("skipped duplicate generated key"),
                other => other?,
            }
        }

        Ok(result)
    }

    /// Inserts multiple key-value pairs in the table.
    ///
    /// If a key-value pair cannot be inserted because the key is already
    /// present, it is dropped.
    ///
    /// #   Errors
    ///
    /// Returns the first error other than `DuplicateKey`; the pairs inserted
    /// until then remain.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use linprobe::table::ProbingTable;
    /// let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
    /// assert_eq!(Ok(()), table.try_extend([(1, 1), (2, 2), (1, 3)].iter().copied()));
    ///
    /// assert_eq!(2, table.len());
    /// assert_eq!(Ok(&1), table.get(&1));
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = (K, V)>,
        H: KeyHooks<K>,
    {
        for (key, value) in collection {
            match self.insert(key, value) {
                Err(Failure::DuplicateKey) => (),
                other => other?,
            }
        }

        Ok(())
    }

    /// Inserts multiple key-value pairs in the table.
    ///
    /// Calling this method is equivalent to calling `try_extend` and panicking
    /// on error.
    ///
    /// #   Panics
    ///
    /// Panics if any of the key-value pairs cannot be inserted due to an error
    /// other than `DuplicateKey`.
    pub fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = (K, V)>,
        H: KeyHooks<K>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    fn from_parts(capacity: Capacity, threshold: LoadFactor, growth: GrowthPolicy, hooks: H) -> Self {
        Self {
            hooks,
            threshold,
            growth,
            live: 0,
            tombstones: 0,
            slots: SlotArray::new(capacity),
        }
    }

    //  Finds the index of the live slot holding `key`.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        H: KeyHooks<Q>,
    {
        if self.live == 0 {
            return None;
        }

        let hash = self.hooks.hash(key);

        self.slots.find(key, hash, &self.hooks)
    }

    //  Turns the live slot at `index` into a tombstone.
    fn kill(&mut self, index: usize) -> Option<V> {
        let value = self.slots.slot_mut(index).kill()?;

        self.live -= 1;
        self.tombstones += 1;

        Some(value)
    }

    //  Returns whether the table should grow before the next insertion.
    fn is_growth_due(&self) -> bool {
        let used = match self.growth {
            GrowthPolicy::Live => self.live,
            GrowthPolicy::Occupied => self.live + self.tombstones,
        };

        self.threshold.is_reached(used, self.slots.capacity())
    }

    //  Doubles the capacity, re-inserting the live entries in slot order.
    //
    //  The table is left untouched if the capacity cannot be doubled.
    fn grow(&mut self) -> Result<()>
    where
        H: KeyHooks<K>,
    {
        let old = self.slots.capacity();
        let new = old.doubled()?;

        debug!(
            "growing table from {} to {} slots, {} live, {} tombstones",
            old.get(), new.get(), self.live, self.tombstones
        );

        self.slots.rehash(new, &self.hooks)?;
        self.tombstones = 0;

        Ok(())
    }
}

impl<K, V, H: Default> Default for ProbingTable<K, V, H> {
    fn default() -> Self { Self::with_defaults() }
}

impl<K: fmt::Debug, V: fmt::Debug, H> fmt::Debug for ProbingTable<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ProbingTable {{ capacity: {}, length: {}, slots: {:?} }}",
            self.capacity(), self.len(), self.slots)
    }
}

impl<'q, K, Q, V, H> ops::Index<&'q Q> for ProbingTable<K, V, H>
where
    K: Borrow<Q>,
    Q: ?Sized,
    H: KeyHooks<Q>,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the key.
    ///
    /// #   Panics
    ///
    /// Panics if the key is absent.
    fn index(&self, key: &Q) -> &V {
        self.try_get(key).unwrap_or_else(|| panic_from_failure(Failure::KeyNotFound))
    }
}

impl<'a, K, V, H> iter::IntoIterator for &'a ProbingTable<K, V, H> {
    type Item = (&'a K, &'a V);
    type IntoIter = KeyValueIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<K, V, H> iter::FromIterator<(K, V)> for ProbingTable<K, V, H>
where
    H: KeyHooks<K> + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = (K, V)>
    {
        let mut result = Self::with_defaults();
        result.extend(collection);
        result
    }
}

/// A view of a `ProbingTable`, displayed one line per slot.
pub struct Describe<'a, K, V>(&'a SlotArray<K, V>);

impl<'a, K: fmt::Debug, V: fmt::Debug> fmt::Display for Describe<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { self.0.describe(f) }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

//  mod tests
