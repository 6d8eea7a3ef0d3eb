//! #   The ProbingTable.
//!
//! The `ProbingTable` is an associative container, akin to the standard
//! `HashMap`, storing all of its entries directly in a single array of slots.
//!
//! ##  Under the covers.
//!
//! Each slot is either empty, live (holding a key-value pair), or a tombstone
//! (holding a logically deleted key). The home index of a key is its hash
//! modulo the capacity, and every operation walks the linear probe sequence
//! from there, wrapping around, visiting each slot at most once:
//!
//! -   Look-ups stop at the first empty slot, and skip over tombstones.
//! -   Insertions scan up to the first empty slot to rule out a duplicate key,
//!     then reuse the first tombstone seen, if any, or that empty slot.
//! -   Removals turn the slot into a tombstone, without moving any entry.
//!
//! Before each insertion, the load factor is compared to the threshold, and
//! the table doubles its capacity if it is reached, re-inserting the live
//! entries and dropping tombstones. The capacity never shrinks.
//!
//! #   Example: basic
//!
//! ```
//! use linprobe::failure::Failure;
//! use linprobe::table::ProbingTable;
//!
//! let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
//! table.insert("circle", 2.5).unwrap();
//! table.insert("square", 4.0).unwrap();
//!
//! assert_eq!(2, table.len());
//! assert_eq!(Ok(&2.5), table.get("circle"));
//! assert_eq!(Err(Failure::DuplicateKey), table.insert("circle", 0.0));
//!
//! assert!(table.remove("circle"));
//! assert_eq!(None, table.try_get("circle"));
//!
//! for (k, v) in &table {
//!     println!("{} => {}", k, v);
//! }
//! ```
//!
//! #   Example: managing capacity
//!
//! The table starts with the requested capacity, and doubles it whenever an
//! insertion finds the load factor at, or above, the threshold.
//!
//! ```
//! use linprobe::hooks::DefaultKeyHooks;
//! use linprobe::table::ProbingTable;
//!
//! let mut table = ProbingTable::new(1, 1.0, DefaultKeyHooks::default()).unwrap();
//!
//! table.insert(1, 'a').unwrap();
//! assert_eq!(1, table.capacity());
//!
//! table.insert(2, 'b').unwrap();
//! assert_eq!(2, table.capacity());
//!
//! //  Clearing retains the capacity.
//! table.clear();
//! assert_eq!(2, table.capacity());
//! ```
//!
//! #   Example: sharing is caring
//!
//! The `ProbingTable` is not internally synchronized, sharing it across
//! threads requires wrapping it, whole, in a `Mutex`.
//!
//! It is `Send` whenever its keys, values, and hooks are.
//!
//! ```
//! use linprobe::table::ProbingTable;
//!
//! fn ensure_send<T: Send>(_: T) {}
//!
//! let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
//! table.insert("Hello", "World").unwrap();
//!
//! ensure_send(table);
//! ```
//!
//! A non-Send Key prevents the ProbingTable from being Send.
//!
//! ```compile_fail
//! use std::rc::Rc;
//! use linprobe::table::ProbingTable;
//!
//! fn ensure_send<T: Send>(_: T) {}
//!
//! let mut table: ProbingTable<_, _> = ProbingTable::with_defaults();
//! table.insert(Rc::new(3), "World").unwrap();
//!
//! ensure_send(table);
//! ```

pub mod iterator;

mod slot;
mod slots;
mod table;

pub use self::table::{Describe, ProbingTable};

use super::cloner;
use super::config;
use super::failure;
use super::generator;
use super::hooks;
use super::root;
