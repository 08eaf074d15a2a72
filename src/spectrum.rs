// Beta spectrum shape evaluation and the rejection sampler built on it.

use thiserror::Error;

use crate::data::{ELECTRON_MASS, INVERSE_FINE_STRUCTURE};
use crate::rng::RandomSource;

/// Iteration cap for the rejection loop in [`sample_beta_energy`].
///
/// The envelope is the shape's value at E = Q/2, which is not guaranteed to
/// bound the true maximum for every (Q, Z), so the loop can occasionally
/// resample many times. The cap turns a pathological combination into a
/// reported failure instead of an unbounded spin.
pub const MAX_REJECTION_ITERATIONS: usize = 100_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("beta spectrum rejection envelope exhausted after {0} iterations")]
    EnvelopeExhausted(usize),
}

/// Simplified Fermi function: the Coulomb correction factor applied to the
/// phase-space beta spectrum.
///
/// `z` may be negative; callers pass -Z to approximate the sign flip of the
/// Coulomb interaction for positron emitters. Electron momenta below
/// 0.01 MeV/c short-circuit to 1.0 to avoid the 0/0 limit near threshold.
pub fn fermi_function(electron_energy: f64, z: i32) -> f64 {
    let pe = (electron_energy * (electron_energy + 2.0 * ELECTRON_MASS)).sqrt();
    if pe < 0.01 {
        return 1.0;
    }

    let eta = 2.0 * std::f64::consts::PI * z as f64 / INVERSE_FINE_STRUCTURE;
    let fermi = eta * pe / (1.0 - (-eta * pe).exp());
    fermi.max(0.0)
}

/// Unnormalized allowed-transition beta spectrum shape at kinetic energy
/// `electron_energy`, endpoint `q_value` and daughter charge `z`.
///
/// Zero outside the open interval (0, Q).
pub fn beta_spectrum(electron_energy: f64, q_value: f64, z: i32) -> f64 {
    if electron_energy <= 0.0 || electron_energy >= q_value {
        return 0.0;
    }

    let pe = (electron_energy * (electron_energy + 2.0 * ELECTRON_MASS)).sqrt();
    let neutrino_energy = q_value - electron_energy;

    pe * (electron_energy + ELECTRON_MASS) * neutrino_energy * neutrino_energy
        * fermi_function(electron_energy, z)
}

/// Sample an electron kinetic energy on (0, Q) from the beta spectrum by
/// rejection against the shape's value at the midpoint E = Q/2.
///
/// Two uniforms are consumed per iteration: the candidate energy and the
/// acceptance draw. Returns an error if the iteration cap is hit.
pub fn sample_beta_energy(
    q_value: f64,
    z: i32,
    rng: &mut impl RandomSource,
) -> Result<f64, SpectrumError> {
    let envelope = beta_spectrum(q_value / 2.0, q_value, z);

    for _ in 0..MAX_REJECTION_ITERATIONS {
        let candidate = rng.uniform() * q_value;
        if rng.uniform() * envelope <= beta_spectrum(candidate, q_value, z) {
            return Ok(candidate);
        }
    }

    Err(SpectrumError::EnvelopeExhausted(MAX_REJECTION_ITERATIONS))
}
