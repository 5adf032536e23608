//! Identifiers and timestamps for record metadata.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of Foundry document ids.
pub const ID_LENGTH: usize = 16;

/// Supplies the ambient values a record needs: ids and the current time.
///
/// Production code uses [`SystemStamps`]. Tests and reproducible exports use
/// [`SeededStamps`] or their own implementation.
pub trait StampSource {
    /// A fresh [`ID_LENGTH`]-character id from `[A-Za-z0-9]`.
    fn next_id(&mut self) -> String;

    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&mut self) -> i64;
}

impl<S: StampSource + ?Sized> StampSource for &mut S {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }

    fn now_millis(&mut self) -> i64 {
        (**self).now_millis()
    }
}

/// Draw an id uniformly from `[A-Za-z0-9]`. Not cryptographically strong;
/// Foundry only needs ids to be unique within a world.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Thread-local RNG and the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamps;

impl StampSource for SystemStamps {
    fn next_id(&mut self) -> String {
        generate_id(&mut rand::thread_rng())
    }

    fn now_millis(&mut self) -> i64 {
        crate::util::time_now_millis()
    }
}

/// Seeded RNG and a frozen clock, for output that is identical run to run.
#[derive(Debug, Clone)]
pub struct SeededStamps {
    rng: StdRng,
    time: i64,
}

impl SeededStamps {
    pub fn new(seed: u64, time: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            time,
        }
    }
}

impl StampSource for SeededStamps {
    fn next_id(&mut self) -> String {
        generate_id(&mut self.rng)
    }

    fn now_millis(&mut self) -> i64 {
        self.time
    }
}
