//! A simple walk-through of the ProbingTable.
//!
//! In this example, a table mapping random alphanumeric keys to random
//! geometric figures is:
//! -   Seeded with a batch of generated entries.
//! -   Queried, updated and pruned.
//! -   Dumped slot by slot after each step, to observe tombstones and growth.
//!
//! Run with `RUST_LOG=debug` to see the table grow.

extern crate env_logger;
extern crate linprobe;
extern crate rand;

use std::fmt;

use rand::Rng;

use linprobe::config::Config;
use linprobe::failure::Failure;
use linprobe::hooks::DefaultKeyHooks;
use linprobe::table::ProbingTable;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const NUMBER_SEEDED: usize = 10;

#[derive(Clone, Debug, PartialEq)]
enum Figure {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    Parallelepiped { a: f64, b: f64, c: f64 },
}

impl Figure {
    fn random<R: Rng>(rng: &mut R) -> Self {
        let kind = rng.gen_range(0..3);
        let mut side = || rng.gen_range(1..=10) as f64;

        match kind {
            0 => Figure::Circle { radius: side() },
            1 => Figure::Rectangle { width: side(), height: side() },
            _ => Figure::Parallelepiped { a: side(), b: side(), c: side() },
        }
    }

    fn area(&self) -> f64 {
        match *self {
            Figure::Circle { radius } => std::f64::consts::PI * radius * radius,
            Figure::Rectangle { width, height } => width * height,
            Figure::Parallelepiped { a, b, c } => 2.0 * (a * b + b * c + a * c),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Figure::Circle { radius } => write!(f, "Circle(r = {})", radius),
            Figure::Rectangle { width, height } => write!(f, "Rectangle({} x {})", width, height),
            Figure::Parallelepiped { a, b, c } => write!(f, "Parallelepiped({} x {} x {})", a, b, c),
        }
    }
}

fn random_key<R: Rng>(rng: &mut R) -> String {
    let length = rng.gen_range(5..10);

    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn dump(title: &str, table: &ProbingTable<String, Figure>) {
    println!("--- {} (length: {}, capacity: {}, load factor: {:.2}, tombstones: {})",
        title, table.len(), table.capacity(), table.load_factor(), table.tombstones());
    print!("{}", table.display());
}

fn main() -> Result<(), Failure> {
    env_logger::init();

    //  Each generator owns its rng.
    let mut key_rng = rand::thread_rng();
    let mut value_rng = rand::thread_rng();

    let mut table = ProbingTable::generate(
        Config::default(),
        DefaultKeyHooks::default(),
        NUMBER_SEEDED,
        || random_key(&mut key_rng),
        || Figure::random(&mut value_rng),
    )?;

    dump("seeded", &table);

    let mut rng = rand::thread_rng();

    let key = random_key(&mut rng);
    let figure = Figure::random(&mut rng);

    table.insert(key.clone(), figure.clone())?;
    println!("Inserted '{}': {}", key, figure);

    match table.insert(key.clone(), figure) {
        Err(Failure::DuplicateKey) => println!("Inserting '{}' again is rejected", key),
        other => other?,
    }

    println!("Looking up '{}': {}", key, table.get(key.as_str())?);

    let replaced = table.set(key.clone(), Figure::Circle { radius: 1.0 });
    println!("Replaced {:?} by a unit circle", replaced);

    let victims: Vec<String> = table.keys().take(3).cloned().collect();

    for victim in &victims {
        table.remove(victim.as_str());
    }

    dump("pruned", &table);

    for victim in &victims {
        assert!(!table.contains_key(victim.as_str()));
    }

    let total: f64 = table.values().map(Figure::area).sum();
    println!("Total area: {:.2}", total);

    for (key, figure) in &table {
        println!("{} => {}", key, figure);
    }

    table.clear();
    dump("cleared", &table);

    Ok(())
}
