// Event model for the decay generators: channel tags, particle species,
// decay products and the complete event record.

use nalgebra::Vector3;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::data::ELECTRON_MASS;
use crate::nucleus::Nucleus;

/// The six supported decay channels.
///
/// A closed set, so channel dispatch is a plain `match` rather than a
/// trait-object hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecayMode {
    /// β⁻: n -> p + e⁻ + ν̄ₑ
    BetaMinus,
    /// β⁺: p -> n + e⁺ + νₑ
    BetaPlus,
    /// EC: p + e⁻ -> n + νₑ
    ElectronCapture,
    /// ββ⁻ (2ν): 2n -> 2p + 2e⁻ + 2ν̄ₑ
    DoubleBetaMinus,
    /// ββ⁺ (2ν): 2p -> 2n + 2e⁺ + 2νₑ
    DoubleBetaPlus,
    /// ββ⁻ (0ν): 2n -> 2p + 2e⁻, hypothetical neutrinoless mode
    NeutrinolessDoubleBetaMinus,
}

impl DecayMode {
    pub const ALL: [DecayMode; 6] = [
        DecayMode::BetaMinus,
        DecayMode::BetaPlus,
        DecayMode::ElectronCapture,
        DecayMode::DoubleBetaMinus,
        DecayMode::DoubleBetaPlus,
        DecayMode::NeutrinolessDoubleBetaMinus,
    ];

    /// Human-readable channel label.
    pub fn label(&self) -> &'static str {
        match self {
            DecayMode::BetaMinus => "β⁻ decay (single)",
            DecayMode::BetaPlus => "β⁺ decay (single)",
            DecayMode::ElectronCapture => "Electron Capture",
            DecayMode::DoubleBetaMinus => "ββ⁻ decay (2ν mode)",
            DecayMode::DoubleBetaPlus => "ββ⁺ decay (2ν mode)",
            DecayMode::NeutrinolessDoubleBetaMinus => "ββ⁻ decay (0ν mode - neutrinoless)",
        }
    }

    /// True for the double-beta channels.
    pub fn is_double(&self) -> bool {
        matches!(
            self,
            DecayMode::DoubleBetaMinus
                | DecayMode::DoubleBetaPlus
                | DecayMode::NeutrinolessDoubleBetaMinus
        )
    }

    /// Integer tag used by reporting consumers: 1 for single-beta-like
    /// channels, 2 for double-beta-like channels.
    pub fn type_tag(&self) -> i32 {
        if self.is_double() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown decay mode '{0}' (expected beta-minus, beta-plus, ec, bb-2nu, bb+2nu or bb-0nu)")]
pub struct ParseModeError(String);

impl FromStr for DecayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beta-minus" | "b-" => Ok(DecayMode::BetaMinus),
            "beta-plus" | "b+" => Ok(DecayMode::BetaPlus),
            "ec" | "electron-capture" => Ok(DecayMode::ElectronCapture),
            "bb-2nu" | "double-beta-minus" => Ok(DecayMode::DoubleBetaMinus),
            "bb+2nu" | "double-beta-plus" => Ok(DecayMode::DoubleBetaPlus),
            "bb-0nu" | "neutrinoless" => Ok(DecayMode::NeutrinolessDoubleBetaMinus),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Lepton species emitted by the decay channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Species {
    Electron,
    Positron,
    ElectronNeutrino,
    ElectronAntineutrino,
}

impl Species {
    /// Rest mass in MeV/c²; neutrinos are treated as massless.
    pub fn mass(&self) -> f64 {
        match self {
            Species::Electron | Species::Positron => ELECTRON_MASS,
            Species::ElectronNeutrino | Species::ElectronAntineutrino => 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Electron => "electron (e⁻)",
            Species::Positron => "positron (e⁺)",
            Species::ElectronNeutrino => "neutrino (νₑ)",
            Species::ElectronAntineutrino => "antineutrino (ν̄ₑ)",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One emitted particle: species, kinetic energy in MeV and momentum
/// vector in MeV/c. Immutable once the event is assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayProduct {
    pub species: Species,
    pub energy: f64,
    pub momentum: Vector3<f64>,
}

impl DecayProduct {
    pub fn new(species: Species, energy: f64, momentum: Vector3<f64>) -> Self {
        Self {
            species,
            energy,
            momentum,
        }
    }

    /// Unit direction of travel, or `None` for a vanishing momentum vector.
    pub fn direction(&self) -> Option<Vector3<f64>> {
        let norm = self.momentum.norm();
        if norm > 0.0 {
            Some(self.momentum / norm)
        } else {
            None
        }
    }
}

/// A complete sampled decay: channel, parent/daughter nuclides, the emitted
/// products in channel-defined order (electrons first, then neutrinos), the
/// Q-value used and an optional sampled decay time.
///
/// `is_successful` is the only failure signal: a channel whose energy guard
/// fails returns an event with an empty product list rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct DecayEvent {
    pub mode: DecayMode,
    pub parent: Nucleus,
    pub daughter: Nucleus,
    pub products: Vec<DecayProduct>,
    /// Q-value in MeV the channel was sampled with.
    pub q_value: f64,
    /// Sampled decay time in seconds, zero if unused.
    pub decay_time: f64,
    pub is_successful: bool,
}

impl DecayEvent {
    /// A failed event: all bookkeeping fields populated, no products.
    pub fn failed(mode: DecayMode, parent: Nucleus, daughter: Nucleus, q_value: f64) -> Self {
        Self {
            mode,
            parent,
            daughter,
            products: Vec::new(),
            q_value,
            decay_time: 0.0,
            is_successful: false,
        }
    }

    /// Sum of product kinetic energies in MeV.
    pub fn total_energy(&self) -> f64 {
        self.products.iter().map(|p| p.energy).sum()
    }

    /// Vector sum of product momenta in MeV/c.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.products
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.momentum)
    }

    /// Reporting tag: 1 = single-beta-like, 2 = double-beta-like.
    pub fn type_tag(&self) -> i32 {
        self.mode.type_tag()
    }
}

impl fmt::Display for DecayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Beta Decay Event")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Decay Type: {}", self.mode)?;
        writeln!(f)?;
        writeln!(f, "Parent Nucleus:   {}", self.parent)?;
        writeln!(f, "Daughter Nucleus: {}", self.daughter)?;
        writeln!(f)?;
        writeln!(f, "Q-value: {:.3} MeV", self.q_value)?;
        writeln!(f, "Decay Time: {:e} s", self.decay_time)?;
        if !self.is_successful {
            writeln!(f)?;
            writeln!(f, "Decay not energetically possible for this Q-value.")?;
            return write!(f, "{}", rule);
        }
        writeln!(f)?;
        writeln!(f, "Decay Products:")?;
        writeln!(f, "{}", "-".repeat(70))?;
        for product in &self.products {
            writeln!(
                f,
                "{:>22} | Energy: {:>10.4} MeV | Momentum: ({:>8.4}, {:>8.4}, {:>8.4}) MeV/c",
                product.species,
                product.energy,
                product.momentum.x,
                product.momentum.y,
                product.momentum.z,
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total Energy: {:.4} MeV", self.total_energy())?;
        write!(f, "{}", rule)
    }
}
