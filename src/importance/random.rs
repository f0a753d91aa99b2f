//! A splitter that ignores the data.
//! Comparing it with [`InformationGain`](super::InformationGain)
//! shows how much the attribute choice matters.
use rand::prelude::*;

use std::sync::Mutex;

use crate::sample::{ExampleTable, ExampleSubset};
use super::Importance;


/// Scores every attribute uniformly at random in `[0, 1)`.
#[derive(Debug)]
pub struct RandomImportance {
    rng: Mutex<StdRng>,
}


impl RandomImportance {
    /// Name reported by [`Importance::name`].
    pub const NAME: &'static str = "Random";


    /// Construct a new instance seeded from the OS.
    pub fn new() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }


    /// Construct a new instance with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}


impl Default for RandomImportance {
    fn default() -> Self {
        Self::new()
    }
}


impl Importance for RandomImportance {
    fn name(&self) -> &str {
        Self::NAME
    }


    fn score(
        &self,
        _table: &ExampleTable,
        _subset: &ExampleSubset,
        _attribute: usize,
    ) -> f64
    {
        let mut rng = self.rng.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen::<f64>()
    }
}
