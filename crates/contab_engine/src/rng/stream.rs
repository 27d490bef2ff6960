//! Seedable uniform stream with worker-indexed sub-stream derivation.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Open01};

/// Multiplier from the splitmix64 reference constants; also used as the
/// worker-index gamma so consecutive indices land far apart in seed
/// space.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where the root seed of a generation comes from.
///
/// The reference convention maps an absent or zero seed to system
/// entropy; [`SeedSource::from_option`] implements exactly that, while
/// the enum keeps the policy explicit and injectable at the API
/// boundary.
///
/// # Examples
///
/// ```rust
/// use contab_engine::SeedSource;
///
/// assert_eq!(SeedSource::from_option(Some(42)), SeedSource::Explicit(42));
/// assert_eq!(SeedSource::from_option(Some(0)), SeedSource::Entropy);
/// assert_eq!(SeedSource::from_option(None), SeedSource::Entropy);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Use the given seed; generation is reproducible.
    Explicit(u64),
    /// Draw a fresh seed from the operating environment.
    Entropy,
}

impl SeedSource {
    /// Maps the reference calling convention onto the explicit policy:
    /// `None` and `Some(0)` mean system entropy.
    #[inline]
    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) if s != 0 => Self::Explicit(s),
            _ => Self::Entropy,
        }
    }

    /// Resolves the policy to a concrete root seed.
    #[inline]
    pub fn resolve(self) -> u64 {
        match self {
            Self::Explicit(seed) => seed,
            Self::Entropy => OsRng.gen(),
        }
    }
}

/// Uniform random stream over the open interval `(0, 1)`.
///
/// Wraps a seeded [`StdRng`] and stores the seed for reproducibility
/// tracking. A stream is exclusively owned by one execution context for
/// its whole lifetime; it is deliberately not `Clone`.
///
/// # Examples
///
/// ```rust
/// use contab_engine::SampleStream;
///
/// let mut stream = SampleStream::from_seed(42);
/// let u = stream.open_uniform();
/// assert!(u > 0.0 && u < 1.0);
///
/// // Same seed, same sequence.
/// let mut replay = SampleStream::from_seed(42);
/// assert_eq!(replay.open_uniform(), u);
/// ```
pub struct SampleStream {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl SampleStream {
    /// Creates a stream initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derives the stream of worker slot `worker` from a root seed.
    ///
    /// The worker index is mixed into the seed through splitmix64 so
    /// that sub-streams of the same root are statistically independent
    /// of each other and of the root sequence. Derivation depends only
    /// on `(root_seed, worker)`; a batch is therefore reproducible per
    /// worker slot.
    #[inline]
    pub fn for_worker(root_seed: u64, worker: u64) -> Self {
        let discriminator = splitmix64(worker.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
        Self::from_seed(splitmix64(root_seed ^ discriminator))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniform value from the OPEN interval `(0, 1)`.
    ///
    /// Both endpoints are excluded; the sampler's acceptance tests
    /// (`r <= mass`) require a draw that can never be exactly zero.
    #[inline]
    pub fn open_uniform(&mut self) -> f64 {
        Open01.sample(&mut self.inner)
    }
}

/// splitmix64 finaliser: a bijective avalanche mix of the input word.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
