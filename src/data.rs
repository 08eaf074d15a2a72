// Nuclear constants, the semi-empirical mass model and derived quantities.
// The volume of tabulated data is deliberately small: masses come from the
// Weizsäcker formula rather than measured mass tables, and the isotope
// catalog only lists the classic beta and double-beta benchmark nuclei.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::event::DecayMode;
use crate::nucleus::Nucleus;

/// Electron rest mass in MeV/c².
pub const ELECTRON_MASS: f64 = 0.510998928;
/// Proton rest mass in MeV/c².
pub const PROTON_MASS: f64 = 938.272046;
/// Neutron rest mass in MeV/c².
pub const NEUTRON_MASS: f64 = 939.565379;
/// Inverse fine structure constant, as used by the Fermi correction.
pub const INVERSE_FINE_STRUCTURE: f64 = 137.036;

/// Element symbols indexed by atomic number, Z = 0 (bare neutron) up to
/// Z = 91 (protactinium closes the table).
const ELEMENT_SYMBOLS: [&str; 92] = [
    "n", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", //
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", //
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", //
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", //
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", //
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", //
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", //
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", //
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", //
    "Pa",
];

/// Canonical element symbol for an atomic number.
///
/// The table covers 0 <= Z < 92; anything heavier returns the sentinel
/// `"X"`. That is a coverage gap, not an error.
pub fn element_symbol(z: u32) -> &'static str {
    ELEMENT_SYMBOLS.get(z as usize).copied().unwrap_or("X")
}

/// Nuclear binding energy in MeV from the semi-empirical (Weizsäcker)
/// mass formula: volume, surface, Coulomb, asymmetry and pairing terms.
pub fn binding_energy(z: u32, a: u32) -> f64 {
    let n = (a - z) as f64;
    let z = z as f64;
    let a = a as f64;

    // Weizsäcker coefficients in MeV.
    let a_v = 15.75;
    let a_s = 17.8;
    let a_c = 0.711;
    let a_a = 23.7;
    let a_p = 11.18;

    let mut binding = a_v * a
        - a_s * a.powf(2.0 / 3.0)
        - a_c * z * (z - 1.0) / a.powf(1.0 / 3.0)
        - a_a * (n - z).powi(2) / a;

    // Pairing: even-even nuclei gain, odd-odd nuclei lose, otherwise zero.
    let z_even = (z as u64) % 2 == 0;
    let n_even = (n as u64) % 2 == 0;
    if z_even && n_even {
        binding += a_p / a.sqrt();
    } else if !z_even && !n_even {
        binding -= a_p / a.sqrt();
    }

    binding
}

/// Approximate atomic mass in MeV/c²: constituent nucleon masses minus
/// the semi-empirical binding energy.
pub fn atomic_mass(z: u32, a: u32) -> f64 {
    z as f64 * PROTON_MASS + (a - z) as f64 * NEUTRON_MASS - binding_energy(z, a)
}

/// Q-value in MeV for a parent -> daughter transition in the given mode.
///
/// The mass difference is corrected by a per-channel multiple of the
/// electron mass. The β⁻/ββ⁻ factors are kept exactly as inherited even
/// though they are inconsistent with the textbook lepton count for those
/// processes; a test pins them so any change is deliberate.
pub fn q_value(parent: &Nucleus, daughter: &Nucleus, mode: DecayMode) -> f64 {
    let mass_difference = atomic_mass(parent.z, parent.a) - atomic_mass(daughter.z, daughter.a);

    let lepton_correction = match mode {
        DecayMode::BetaMinus => ELECTRON_MASS,
        DecayMode::BetaPlus => 2.0 * ELECTRON_MASS,
        DecayMode::DoubleBetaMinus => 2.0 * ELECTRON_MASS,
        DecayMode::DoubleBetaPlus => 4.0 * ELECTRON_MASS,
        DecayMode::ElectronCapture | DecayMode::NeutrinolessDoubleBetaMinus => 0.0,
    };

    mass_difference - lepton_correction
}

/// Proton/neutron shell closures associated with extra stability.
pub const MAGIC_NUMBERS: [u32; 7] = [2, 8, 20, 28, 50, 82, 126];

/// Heuristic stability classifier.
///
/// A nuclide with a magic proton or neutron count is declared stable;
/// otherwise the N/Z ratio must fall inside a band that widens with Z.
/// This is a classifier, not a lookup against measured stability.
pub fn is_stable(z: u32, a: u32) -> bool {
    let n = a - z;

    if MAGIC_NUMBERS.contains(&z) || MAGIC_NUMBERS.contains(&n) {
        return true;
    }
    if z == 0 {
        return false;
    }

    let ratio = n as f64 / z as f64;
    if z < 20 {
        (0.95..=1.05).contains(&ratio)
    } else if z < 40 {
        (1.0..=1.3).contains(&ratio)
    } else {
        (1.2..=1.55).contains(&ratio)
    }
}

/// A benchmark isotope with its measured Q-value and usual decay mode.
#[derive(Debug, Clone, Copy)]
pub struct IsotopeRecord {
    pub name: &'static str,
    pub z: u32,
    pub a: u32,
    /// Measured Q-value in MeV (not the semi-empirical estimate).
    pub q_value: f64,
    pub mode: DecayMode,
}

impl IsotopeRecord {
    pub fn nucleus(&self) -> Nucleus {
        Nucleus::new(self.z, self.a)
    }
}

/// Reference isotopes commonly used in beta and double-beta decay studies.
pub const REFERENCE_ISOTOPES: [IsotopeRecord; 8] = [
    IsotopeRecord { name: "C14", z: 6, a: 14, q_value: 0.156, mode: DecayMode::BetaMinus },
    IsotopeRecord { name: "Na22", z: 11, a: 22, q_value: 2.842, mode: DecayMode::BetaPlus },
    IsotopeRecord { name: "K40", z: 19, a: 40, q_value: 1.505, mode: DecayMode::ElectronCapture },
    IsotopeRecord { name: "Ge76", z: 32, a: 76, q_value: 2.039, mode: DecayMode::DoubleBetaMinus },
    IsotopeRecord { name: "Se82", z: 34, a: 82, q_value: 2.995, mode: DecayMode::DoubleBetaMinus },
    IsotopeRecord { name: "Mo100", z: 42, a: 100, q_value: 3.034, mode: DecayMode::DoubleBetaMinus },
    IsotopeRecord { name: "Te130", z: 52, a: 130, q_value: 2.527, mode: DecayMode::DoubleBetaMinus },
    IsotopeRecord { name: "Xe136", z: 54, a: 136, q_value: 2.458, mode: DecayMode::DoubleBetaMinus },
];

/// Name -> record index over [`REFERENCE_ISOTOPES`].
static ISOTOPE_INDEX: Lazy<HashMap<&'static str, &'static IsotopeRecord>> = Lazy::new(|| {
    REFERENCE_ISOTOPES.iter().map(|record| (record.name, record)).collect()
});

/// Look up a reference isotope by name, e.g. `"Ge76"`.
pub fn isotope(name: &str) -> Option<&'static IsotopeRecord> {
    ISOTOPE_INDEX.get(name).copied()
}
