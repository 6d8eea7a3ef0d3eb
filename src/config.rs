//! The configuration of a ProbingTable.
//!
//! A `Config` gathers the construction parameters of a table: its initial
//! capacity, the load factor threshold at which it grows, and which slots
//! count towards that threshold.
//!
//! ```
//! use linprobe::config::{Config, GrowthPolicy};
//!
//! let config = Config::default()
//!     .with_capacity(16)
//!     .with_load_factor(0.5)
//!     .with_growth(GrowthPolicy::Occupied);
//!
//! let (capacity, load_factor) = config.validate().unwrap();
//!
//! assert_eq!(16, capacity.get());
//! assert_eq!(0.5, load_factor.get());
//! ```

use super::failure::{Argument, Failure, Result};

/// The capacity of a fresh table, by default.
pub const DEFAULT_CAPACITY: usize = 10;

/// The load factor threshold of a fresh table, by default.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.72;

/// Which slots count towards the load factor that triggers growth.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum GrowthPolicy {
    /// Only live slots count.
    ///
    /// Interleaving insertions and removals of distinct keys may then fill
    /// the table with tombstones without ever growing it; lookups stay
    /// correct, but scans lengthen up to the full capacity.
    #[default]
    Live,
    /// Both live and tombstoned slots count.
    ///
    /// Growth then doubles as the compaction of tombstones.
    Occupied,
}

/// The configuration of a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// The number of slots, strictly positive.
    pub capacity: usize,
    /// The load factor threshold, within `(0, 1]`.
    pub load_factor: f64,
    /// Which slots count towards the load factor.
    pub growth: GrowthPolicy,
}

impl Config {
    /// Creates a configuration with the given capacity and threshold.
    pub fn new(capacity: usize, load_factor: f64) -> Self {
        Self { capacity, load_factor, growth: GrowthPolicy::default() }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor threshold.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Validates the configuration.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if the capacity is 0, or if the load factor
    /// is not within `(0, 1]`.
    ///
    /// #   Example
    ///
    /// ```
    /// use linprobe::config::Config;
    /// use linprobe::failure::{Argument, Failure};
    ///
    /// let error = Failure::InvalidArgument(Argument::LoadFactor);
    ///
    /// assert_eq!(Err(error), Config::new(4, 0.0).validate());
    /// assert_eq!(Err(error), Config::new(4, 1.5).validate());
    /// assert_eq!(Err(error), Config::new(4, f64::NAN).validate());
    /// ```
    pub fn validate(&self) -> Result<(Capacity, LoadFactor)> {
        Ok((Capacity::new(self.capacity)?, LoadFactor::new(self.load_factor)?))
    }
}

impl Default for Config {
    fn default() -> Self { Self::new(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR) }
}

/// The number of slots of a table, strictly positive.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity(usize);

impl Capacity {
    /// The capacity of a fresh table, by default.
    pub const DEFAULT: Self = Self(DEFAULT_CAPACITY);

    /// Creates an instance.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Failure::InvalidArgument(Argument::ZeroCapacity));
        }

        Ok(Self(capacity))
    }

    /// Returns the number of slots.
    pub fn get(self) -> usize { self.0 }

    /// Returns twice the capacity.
    ///
    /// #   Errors
    ///
    /// Returns `CapacityOverflow` if the result overflows.
    pub fn doubled(self) -> Result<Self> {
        self.0.checked_mul(2).map(Self).ok_or(Failure::CapacityOverflow)
    }

    //  Reduces a hash to an index within `[0, capacity)`.
    pub(crate) fn reduce(self, hash: u64) -> usize {
        //  The remainder is less than capacity, itself a usize.
        (hash % self.0 as u64) as usize
    }
}

/// The load factor threshold of a table, within `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LoadFactor(f64);

impl LoadFactor {
    /// The load factor threshold of a fresh table, by default.
    pub const DEFAULT: Self = Self(DEFAULT_LOAD_FACTOR);

    /// Creates an instance.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `load_factor` is not within `(0, 1]`.
    pub fn new(load_factor: f64) -> Result<Self> {
        //  Negated, so that NaN is rejected.
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(Failure::InvalidArgument(Argument::LoadFactor));
        }

        Ok(Self(load_factor))
    }

    /// Returns the threshold.
    pub fn get(self) -> f64 { self.0 }

    //  Returns whether `used` slots out of `capacity` reach the threshold.
    pub(crate) fn is_reached(self, used: usize, capacity: Capacity) -> bool {
        ratio(used, capacity) >= self.0
    }
}

//  Returns `used / capacity`.
pub(crate) fn ratio(used: usize, capacity: Capacity) -> f64 {
    used as f64 / capacity.get() as f64
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(10, config.capacity);
    assert_eq!(0.72, config.load_factor);
    assert_eq!(GrowthPolicy::Live, config.growth);
}

#[test]
fn config_validate() {
    let zero = Failure::InvalidArgument(Argument::ZeroCapacity);
    let load = Failure::InvalidArgument(Argument::LoadFactor);

    assert_eq!(Err(zero), Config::new(0, 0.5).validate().map(|_| ()));
    assert_eq!(Err(load), Config::new(1, -0.5).validate().map(|_| ()));
    assert_eq!(Err(load), Config::new(1, 1.0001).validate().map(|_| ()));

    assert!(Config::new(1, 1.0).validate().is_ok());
    assert!(Config::new(1, f64::MIN_POSITIVE).validate().is_ok());
}

#[test]
fn capacity_doubled() {
    let capacity = Capacity::new(3).unwrap();

    assert_eq!(6, capacity.doubled().unwrap().get());

    let capacity = Capacity::new(usize::MAX / 2 + 1).unwrap();

    assert_eq!(Err(Failure::CapacityOverflow), capacity.doubled());
}

#[test]
fn capacity_reduce() {
    let capacity = Capacity::new(7).unwrap();

    assert_eq!(0, capacity.reduce(0));
    assert_eq!(6, capacity.reduce(6));
    assert_eq!(0, capacity.reduce(7));
    assert_eq!((u64::MAX % 7) as usize, capacity.reduce(u64::MAX));
}

#[test]
fn load_factor_is_reached() {
    let capacity = Capacity::new(4).unwrap();
    let threshold = LoadFactor::new(0.75).unwrap();

    assert!(!threshold.is_reached(2, capacity));
    assert!(threshold.is_reached(3, capacity));
    assert!(threshold.is_reached(4, capacity));
}

}
