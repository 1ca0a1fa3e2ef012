//! Random pseudonym generation with collision retry.
//!
//! `generate` draws an adjective, an animal and a number uniformly from the
//! caller's RNG and claims the result in the shared registry, retrying on
//! collision up to `max_attempts` times. When the random budget is spent and
//! sweeping is enabled, it walks the combination space once from a random
//! offset, so a registry with a single free name still yields it. Only a
//! genuinely full space (or a spent budget with sweeping off) returns
//! [`PseudonymError::Exhausted`].

use std::sync::Arc;

use forum_config::PseudonymConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PseudonymError;
use crate::pseudonym::Pseudonym;
use crate::registry::PseudonymRegistry;
use crate::vocabulary::Vocabulary;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone)]
pub struct PseudonymGenerator {
    registry: Arc<PseudonymRegistry>,
    vocabulary: Vocabulary,
    max_attempts: u32,
    sweep_on_exhaustion: bool,
}

impl PseudonymGenerator {
    #[must_use]
    pub fn new(registry: Arc<PseudonymRegistry>) -> Self {
        Self {
            registry,
            vocabulary: Vocabulary::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            sweep_on_exhaustion: true,
        }
    }

    #[must_use]
    pub fn from_config(registry: Arc<PseudonymRegistry>, config: &PseudonymConfig) -> Self {
        Self::new(registry)
            .with_max_attempts(config.max_attempts)
            .with_sweep(config.sweep_on_exhaustion)
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_sweep(mut self, sweep_on_exhaustion: bool) -> Self {
        self.sweep_on_exhaustion = sweep_on_exhaustion;
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &Arc<PseudonymRegistry> {
        &self.registry
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Produce a pseudonym never issued before by this registry.
    ///
    /// # Errors
    ///
    /// Returns `PseudonymError::Exhausted` if no unused combination was found.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Pseudonym, PseudonymError> {
        let total = self.vocabulary.combinations();
        if total == 0 {
            return Err(self.exhausted(0));
        }

        for attempt in 1..=self.max_attempts {
            let candidate = self.draw(rng);
            if self.registry.claim(candidate.as_str()) {
                if attempt > 1 {
                    tracing::debug!(
                        attempt,
                        pseudonym = %candidate,
                        "pseudonym: claimed after retries"
                    );
                }
                return Ok(candidate);
            }
        }

        if !self.sweep_on_exhaustion {
            tracing::warn!(
                attempts = self.max_attempts,
                issued = self.registry.len(),
                "pseudonym: random draws exhausted"
            );
            return Err(self.exhausted(u64::from(self.max_attempts)));
        }

        tracing::warn!(
            attempts = self.max_attempts,
            issued = self.registry.len(),
            total,
            "pseudonym: random draws exhausted, sweeping combination space"
        );

        let start = rng.gen_range(0..total);
        for offset in 0..total {
            let Some(candidate) = self.vocabulary.nth((start + offset) % total) else {
                continue;
            };
            if self.registry.claim(candidate.as_str()) {
                return Ok(candidate);
            }
        }

        tracing::warn!(total, "pseudonym: every combination is issued");
        Err(self.exhausted(u64::from(self.max_attempts) + total))
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Pseudonym {
        let adjective = rng.gen_range(0..self.vocabulary.adjectives().len());
        let animal = rng.gen_range(0..self.vocabulary.animals().len());
        let number = rng.gen_range(self.vocabulary.numbers().clone());
        self.vocabulary.compose(adjective, animal, number)
    }

    fn exhausted(&self, attempts: u64) -> PseudonymError {
        PseudonymError::Exhausted {
            attempts,
            issued: self.registry.len(),
        }
    }
}

/// RNG for the generator: seeded when `seed` is set, else from OS entropy.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}
