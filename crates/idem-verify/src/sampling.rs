//! Sample strategies for carrier elements

use crate::config::VerifierConfig;
use idem_core::RingCapability;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Draws random carrier elements.
pub trait ElementGenerator<E> {
    /// Produce one element.
    fn generate(&self, rng: &mut ChaCha8Rng) -> E;
}

impl<E, F> ElementGenerator<E> for F
where
    F: Fn(&mut ChaCha8Rng) -> E,
{
    fn generate(&self, rng: &mut ChaCha8Rng) -> E {
        self(rng)
    }
}

/// A ring whose carrier can be listed.
pub trait FiniteRing: RingCapability {
    /// Every element, each exactly once.
    fn elements(&self) -> Vec<Self::Elem>;
}

/// Where a verification run gets its candidate elements.
pub enum SampleStrategy<E> {
    /// A fixed list.
    Enumerated(Vec<E>),
    /// `random_samples` draws from a seeded generator.
    Generated(Box<dyn ElementGenerator<E>>),
    /// Several strategies, concatenated.
    Combined(Vec<SampleStrategy<E>>),
}

impl<E: Clone + PartialEq> SampleStrategy<E> {
    /// Every element of a finite ring.
    pub fn exhaustive<R>(ring: &R) -> Self
    where
        R: FiniteRing<Elem = E>,
    {
        Self::Enumerated(ring.elements())
    }

    /// Random draws from `generator`.
    pub fn generated(generator: impl ElementGenerator<E> + 'static) -> Self {
        Self::Generated(Box::new(generator))
    }

    /// Draw the samples, first occurrence wins on duplicates.
    pub fn draw(self, config: &VerifierConfig) -> Vec<E> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut out = Vec::new();
        self.draw_into(config, &mut rng, &mut out);
        out
    }

    fn draw_into(self, config: &VerifierConfig, rng: &mut ChaCha8Rng, out: &mut Vec<E>) {
        match self {
            SampleStrategy::Enumerated(values) => {
                for value in values {
                    push_unique(out, value);
                }
            }
            SampleStrategy::Generated(generator) => {
                for _ in 0..config.random_samples {
                    push_unique(out, generator.generate(rng));
                }
            }
            SampleStrategy::Combined(parts) => {
                for part in parts {
                    part.draw_into(config, rng, out);
                }
            }
        }
    }
}

fn push_unique<E: PartialEq>(out: &mut Vec<E>, value: E) {
    if !out.contains(&value) {
        out.push(value);
    }
}
