//! Star name generation — proposal sources and the uniqueness guard.
//!
//! The engine only cares that a name source hands out names; the
//! [`UniqueNames`] wrapper guarantees freshness with a bounded retry
//! budget. Fancier generators (the catalog tooling uses a Markov chain
//! over IAU names) plug in behind the same trait.

use std::collections::HashSet;
use std::fmt;

use rand::{Rng, RngCore};

/// Error from a name source.
#[derive(Debug)]
pub enum NameError {
    /// The uniqueness retry budget ran out before an unused name
    /// appeared.
    Exhausted { attempts: u32 },
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Exhausted { attempts } => {
                write!(f, "no unused star name found after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for NameError {}

/// A source of star names. Implementations may propose duplicates; wrap
/// in [`UniqueNames`] when every name must be fresh.
pub trait NameSource {
    fn propose(&mut self, rng: &mut dyn RngCore) -> String;
}

/// Syllable-combination name source in the style of traditional star
/// names.
#[derive(Debug, Default)]
pub struct SyllableNamer;

static ONSETS: &[&str] = &[
    "Al", "An", "Ar", "Bel", "Cal", "Cap", "Den", "El", "Fur", "Gal", "Ham", "Kor", "Mar", "Men",
    "Mir", "Nash", "Pol", "Ras", "Sar", "Tal", "Than", "Ur", "Vel", "Zal",
];

static MIDDLES: &[&str] = &[
    "a", "adi", "ba", "de", "do", "eba", "edi", "ena", "era", "ga", "ibi", "ida", "ira", "oni",
    "ora", "uba", "ude", "uka", "ula", "uri",
];

static CODAS: &[&str] = &[
    "b", "dan", "dim", "k", "kab", "lah", "lek", "m", "mak", "n", "nib", "nir", "ph", "r", "rak",
    "rez", "s", "sat", "th", "x", "z", "zar",
];

impl NameSource for SyllableNamer {
    fn propose(&mut self, rng: &mut dyn RngCore) -> String {
        let onset = ONSETS[rng.gen_range(0..ONSETS.len())];
        let middle = MIDDLES[rng.gen_range(0..MIDDLES.len())];
        let coda = CODAS[rng.gen_range(0..CODAS.len())];
        format!("{}{}{}", onset, middle, coda)
    }
}

/// Bounded-retry uniqueness guard around any [`NameSource`]. Owns the
/// used-name set; running out of retries is fatal for the caller — the
/// simulation must never reuse a name silently.
pub struct UniqueNames<S: NameSource> {
    source: S,
    used: HashSet<String>,
    retry_limit: u32,
}

impl<S: NameSource> UniqueNames<S> {
    pub fn new(source: S, retry_limit: u32) -> Self {
        Self {
            source,
            used: HashSet::new(),
            retry_limit,
        }
    }

    /// Record a name as taken without generating it (catalog proper
    /// names, pre-named stars).
    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }

    /// Number of names handed out or reserved so far.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// A freshly generated, previously unused name.
    pub fn next_name(&mut self, rng: &mut dyn RngCore) -> Result<String, NameError> {
        for _ in 0..self.retry_limit {
            let candidate = self.source.propose(&mut *rng);
            if self.used.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(NameError::Exhausted {
            attempts: self.retry_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct ConstantNamer;

    impl NameSource for ConstantNamer {
        fn propose(&mut self, _rng: &mut dyn RngCore) -> String {
            "Kepler".to_string()
        }
    }

    #[test]
    fn syllable_names_are_nonempty_and_varied() {
        let mut namer = SyllableNamer;
        let mut rng = StdRng::seed_from_u64(3);
        let names: HashSet<String> = (0..100).map(|_| namer.propose(&mut rng)).collect();
        assert!(names.len() > 50);
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn unique_names_never_repeat() {
        let mut names = UniqueNames::new(SyllableNamer, 1000);
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let name = names.next_name(&mut rng).expect("plenty of combinations left");
            assert!(seen.insert(name));
        }
    }

    #[test]
    fn reserved_names_are_skipped() {
        let mut names = UniqueNames::new(ConstantNamer, 10);
        let mut rng = StdRng::seed_from_u64(1);
        names.reserve("Kepler");
        match names.next_name(&mut rng) {
            Err(NameError::Exhausted { attempts }) => assert_eq!(attempts, 10),
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn exhaustion_after_retry_budget() {
        let mut names = UniqueNames::new(ConstantNamer, 1000);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(names.next_name(&mut rng).expect("first draw is fresh"), "Kepler");
        assert!(names.next_name(&mut rng).is_err());
    }
}
