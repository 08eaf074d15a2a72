use serde::Serialize;
use std::fmt;

use crate::data;

/// A nuclide identified by proton and nucleon count.
///
/// Immutable after construction. The `energy` field carries a baseline
/// excitation energy in MeV; the generators currently always work with
/// ground states so it defaults to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nucleus {
    /// Atomic number (protons).
    pub z: u32,
    /// Mass number (nucleons). Invariant: `a >= z`.
    pub a: u32,
    /// Excitation energy in MeV, zero for ground states.
    pub energy: f64,
    /// Element symbol, derived from Z when not supplied.
    pub symbol: String,
}

impl Nucleus {
    /// Construct a ground-state nuclide with the symbol derived from Z.
    ///
    /// Panics if `a < z`; a nucleus cannot have fewer nucleons than protons.
    pub fn new(z: u32, a: u32) -> Self {
        Self::with_symbol(z, a, data::element_symbol(z))
    }

    /// Construct with an explicit symbol, e.g. for labelling exotic species.
    pub fn with_symbol(z: u32, a: u32, symbol: &str) -> Self {
        assert!(a >= z, "mass number A={} smaller than atomic number Z={}", a, z);
        Self {
            z,
            a,
            energy: 0.0,
            symbol: symbol.to_string(),
        }
    }

    /// Neutron count N = A - Z.
    pub fn neutrons(&self) -> u32 {
        self.a - self.z
    }

    /// Semi-empirical binding energy in MeV.
    pub fn binding_energy(&self) -> f64 {
        data::binding_energy(self.z, self.a)
    }

    /// Approximate atomic mass in MeV/c².
    pub fn atomic_mass(&self) -> f64 {
        data::atomic_mass(self.z, self.a)
    }

    /// Heuristic stability verdict for this nuclide.
    pub fn is_stable(&self) -> bool {
        data::is_stable(self.z, self.a)
    }
}

impl fmt::Display for Nucleus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} (Z={}, A={})", self.a, self.symbol, self.z, self.a)
    }
}
