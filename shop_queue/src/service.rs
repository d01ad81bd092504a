//! Service duration source.
//!
//! Production runs use a fixed constant, as the shop model prescribes. The
//! `Exponential` variant is the seam for swapping in a distribution
//! without touching the transition logic.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Exp, ExpError};

use crate::SERVICE_TIME;

#[derive(Debug, Clone)]
pub enum ServiceTime {
    /// Every customer takes exactly this long.
    Fixed(f64),
    /// Exponentially distributed durations from a seeded generator.
    Exponential { dist: Exp<f64>, rng: StdRng },
}

impl ServiceTime {
    pub fn fixed(duration: f64) -> ServiceTime {
        ServiceTime::Fixed(duration)
    }

    /// Mean duration `1 / rate`; a non-positive `rate` is reported back
    /// to the caller.
    pub fn exponential(rate: f64, seed: u64) -> Result<ServiceTime, ExpError> {
        Ok(ServiceTime::Exponential {
            dist: Exp::new(rate)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Draw the next service duration. Always strictly positive, so a
    /// completion always lands strictly after its service start and the
    /// run loop terminates.
    pub fn draw(&mut self) -> f64 {
        match self {
            ServiceTime::Fixed(duration) => *duration,
            ServiceTime::Exponential { dist, rng } => {
                let duration = dist.sample(rng);
                if duration > 0.0 {
                    duration
                } else {
                    f64::MIN_POSITIVE
                }
            }
        }
    }
}

impl Default for ServiceTime {
    fn default() -> ServiceTime {
        ServiceTime::Fixed(SERVICE_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_draws_are_constant() {
        let mut service = ServiceTime::fixed(2.5);
        assert_eq!(service.draw(), 2.5);
        assert_eq!(service.draw(), 2.5);
    }

    #[test]
    fn default_is_the_model_service_time() {
        let mut service = ServiceTime::default();
        assert_eq!(service.draw(), SERVICE_TIME);
    }

    #[test]
    fn exponential_draws_are_positive_and_seed_reproducible() {
        let mut a = ServiceTime::exponential(1.5, 42).unwrap();
        let mut b = ServiceTime::exponential(1.5, 42).unwrap();
        for _ in 0..100 {
            let draw = a.draw();
            assert!(draw > 0.0);
            assert_eq!(draw, b.draw());
        }
    }

    #[test]
    fn exponential_rejects_a_bad_rate_instead_of_panicking() {
        assert!(ServiceTime::exponential(0.0, 42).is_err());
        assert!(ServiceTime::exponential(-1.0, 42).is_err());
    }
}
