use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Where the per-epoch sample order comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShuffleMode {
    /// A fresh entropy-seeded generator for every epoch.
    #[default]
    Entropy,
    /// One generator seeded once, then carried across epochs and `train()`
    /// calls, so a whole run is reproducible.
    Seeded(u64),
}

/// Index permutation over the dataset rows, reshuffled every epoch.
#[derive(Debug)]
pub(crate) struct Shuffler {
    indices: Vec<usize>,
    rng: Option<StdRng>,
}

impl Shuffler {
    pub fn new(len: usize, mode: ShuffleMode) -> Shuffler {
        let mut shuffler = Shuffler { indices: (0..len).collect(), rng: None };
        shuffler.reseed(mode);
        shuffler
    }

    pub fn reseed(&mut self, mode: ShuffleMode) {
        self.rng = match mode {
            ShuffleMode::Entropy => None,
            ShuffleMode::Seeded(seed) => Some(StdRng::seed_from_u64(seed)),
        };
    }

    /// Shuffles the permutation in place and returns it.
    pub fn shuffle(&mut self) -> &[usize] {
        match self.rng.as_mut() {
            Some(rng) => self.indices.shuffle(rng),
            None => self.indices.shuffle(&mut StdRng::from_entropy()),
        }
        &self.indices
    }
}
