// Momentum assignment for decay products: isotropic emission plus the
// balance-last closure that enforces momentum conservation.

use nalgebra::Vector3;

use crate::event::DecayProduct;
use crate::rng::RandomSource;

/// Relativistic momentum magnitude p = sqrt(E(E + 2m)) for kinetic energy
/// `energy` and rest mass `mass`, both in MeV. `mass = 0` handles the
/// massless quanta.
pub fn momentum_magnitude(energy: f64, mass: f64) -> f64 {
    (energy * (energy + 2.0 * mass)).sqrt()
}

/// Sample an isotropic momentum vector for a particle of the given kinetic
/// energy and rest mass.
///
/// Exactly two uniforms are consumed per call, cos(theta) first and then
/// phi; scripted tests rely on that order.
pub fn isotropic_momentum(
    energy: f64,
    mass: f64,
    rng: &mut impl RandomSource,
) -> Vector3<f64> {
    let cos_theta = 2.0 * rng.uniform() - 1.0;
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    let phi = 2.0 * std::f64::consts::PI * rng.uniform();

    let p = momentum_magnitude(energy, mass);
    Vector3::new(
        p * sin_theta * phi.cos(),
        p * sin_theta * phi.sin(),
        p * cos_theta,
    )
}

/// Set the last product's momentum to the negated vector sum of the others,
/// closing the momentum balance over the product list.
///
/// The recoiling daughter nucleus is ignored: it is three to five orders of
/// magnitude heavier than the leptons, so its recoil energy is negligible
/// at these Q-values. No-op for an empty slice.
pub fn balance_last(products: &mut [DecayProduct]) {
    if let Some((last, rest)) = products.split_last_mut() {
        let total = rest
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.momentum);
        last.momentum = -total;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ELECTRON_MASS;
    use crate::event::Species;
    use crate::rng::{FastRng, ScriptedSource};

    #[test]
    fn test_momentum_magnitude() {
        // Massless: p = E.
        assert!((momentum_magnitude(2.0, 0.0) - 2.0).abs() < 1e-12);
        // Massive: p² = E(E + 2m).
        let p = momentum_magnitude(1.0, ELECTRON_MASS);
        assert!((p * p - (1.0 + 2.0 * ELECTRON_MASS)).abs() < 1e-12);
    }

    #[test]
    fn test_isotropic_momentum_magnitude_consistent() {
        let mut rng = FastRng::new(9);
        for _ in 0..100 {
            let v = isotropic_momentum(0.75, ELECTRON_MASS, &mut rng);
            let expected = momentum_magnitude(0.75, ELECTRON_MASS);
            assert!((v.norm() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isotropic_momentum_draw_order() {
        // cos(theta) = 2*1.0 - 1 = 1 puts the particle on +z regardless of phi.
        let mut src = ScriptedSource::new(vec![1.0, 0.37]);
        let v = isotropic_momentum(1.0, 0.0, &mut src);
        assert!((v.z - momentum_magnitude(1.0, 0.0)).abs() < 1e-9);
        assert!(v.x.abs() < 1e-9 && v.y.abs() < 1e-9);
        assert_eq!(src.consumed(), 2);
    }

    #[test]
    fn test_balance_last_zeroes_total() {
        let mut rng = FastRng::new(4);
        let mut products = vec![
            DecayProduct::new(Species::Electron, 0.4, isotropic_momentum(0.4, ELECTRON_MASS, &mut rng)),
            DecayProduct::new(Species::Electron, 0.3, isotropic_momentum(0.3, ELECTRON_MASS, &mut rng)),
            DecayProduct::new(Species::ElectronAntineutrino, 0.2, isotropic_momentum(0.2, 0.0, &mut rng)),
            DecayProduct::new(Species::ElectronAntineutrino, 0.1, Vector3::zeros()),
        ];
        balance_last(&mut products);

        let total = products
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.momentum);
        assert!(total.norm() < 1e-12);
    }

    #[test]
    fn test_balance_last_single_entry() {
        // With one entry the "sum of the others" is zero.
        let mut products = vec![DecayProduct::new(
            Species::ElectronNeutrino,
            1.0,
            Vector3::new(0.1, 0.2, 0.3),
        )];
        balance_last(&mut products);
        assert_eq!(products[0].momentum, Vector3::zeros());
    }
}
