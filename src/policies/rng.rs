use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Source of the uniform deviates a selector consumes.
pub trait UniformSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
    /// Uniform index in `[0, bound)`, `bound` must be positive.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> UniformSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

#[derive(Debug, Clone)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

impl UniformSource for MaybeSeededRng {
    fn next_f64(&mut self) -> f64 {
        self.rng.next_f64()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.next_index(bound)
    }
}
