// Transport-facing view of the generator: a configured decay source that
// turns sampled events into primary particles (species, kinetic energy,
// unit direction, position) for a particle-transport consumer.

use serde::Serialize;

use crate::data;
use crate::event::{DecayMode, Species};
use crate::nucleus::Nucleus;
use crate::rng::RandomSource;
use crate::simulator::BetaDecaySimulator;

/// One primary particle ready for injection into a transport layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Primary {
    pub species: Species,
    /// Kinetic energy in MeV.
    pub energy: f64,
    /// Unit direction of travel.
    pub direction: [f64; 3],
    /// Emission point in the consumer's coordinate system.
    pub position: [f64; 3],
}

/// A fixed (parent, channel, Q-value) decay source at a point.
#[derive(Debug, Clone)]
pub struct DecaySource {
    pub parent: Nucleus,
    pub mode: DecayMode,
    /// Q-value in MeV.
    pub q_value: f64,
    pub position: [f64; 3],
}

impl DecaySource {
    pub fn new(parent: Nucleus, mode: DecayMode, q_value: f64) -> Self {
        Self {
            parent,
            mode,
            q_value,
            position: [0.0, 0.0, 0.0],
        }
    }

    /// Source configured from the reference isotope catalog, e.g. `"Ge76"`.
    pub fn from_isotope(name: &str) -> Option<Self> {
        let record = data::isotope(name)?;
        Some(Self::new(record.nucleus(), record.mode, record.q_value))
    }

    /// Sample one decay and translate its products into primaries.
    ///
    /// A failed event yields no primaries. A product whose balanced
    /// momentum vanishes (it can, when the others happen to cancel) is
    /// emitted along +z rather than with an undefined direction.
    pub fn sample<R: RandomSource>(&self, simulator: &mut BetaDecaySimulator<R>) -> Vec<Primary> {
        let event = simulator.simulate(&self.parent, self.mode, self.q_value);
        if !event.is_successful {
            return Vec::new();
        }

        event
            .products
            .iter()
            .map(|product| {
                let direction = product
                    .direction()
                    .map(|d| [d.x, d.y, d.z])
                    .unwrap_or([0.0, 0.0, 1.0]);
                Primary {
                    species: product.species,
                    energy: product.energy,
                    direction,
                    position: self.position,
                }
            })
            .collect()
    }
}
