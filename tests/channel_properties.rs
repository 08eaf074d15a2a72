// Cross-channel invariants: energy partition, momentum closure, guard and
// pre-flight parity.

use betamc::data::{self, ELECTRON_MASS};
use betamc::{BetaDecaySimulator, DecayMode, Nucleus};

#[test]
fn beta_minus_partitions_the_full_q_value() {
    let mut sim = BetaDecaySimulator::new(101);
    let parent = Nucleus::new(6, 14);
    let q = 0.156;

    for _ in 0..2000 {
        let event = sim.simulate(&parent, DecayMode::BetaMinus, q);
        assert!(event.is_successful);
        let electron = &event.products[0];
        let antineutrino = &event.products[1];
        assert!((electron.energy + antineutrino.energy - q).abs() < 1e-12);
        assert!(electron.energy >= 0.0 && electron.energy <= q);
    }
}

#[test]
fn successful_multi_product_events_conserve_momentum() {
    let mut sim = BetaDecaySimulator::new(202);
    let cases = [
        (Nucleus::new(6, 14), DecayMode::BetaMinus, 0.156),
        (Nucleus::new(11, 22), DecayMode::BetaPlus, 2.842),
        (Nucleus::new(32, 76), DecayMode::DoubleBetaMinus, 2.039),
        (Nucleus::new(36, 78), DecayMode::DoubleBetaPlus, 3.5),
        (Nucleus::new(32, 76), DecayMode::NeutrinolessDoubleBetaMinus, 2.039),
    ];

    for (parent, mode, q) in cases {
        for _ in 0..500 {
            let event = sim.simulate(&parent, mode, q);
            assert!(event.is_successful, "{:?} with Q={} should succeed", mode, q);
            assert!(event.products.len() >= 2);
            let residual = event.total_momentum().norm();
            assert!(
                residual < 1e-9,
                "{:?}: momentum residual {} MeV/c",
                mode,
                residual
            );
        }
    }
}

#[test]
fn neutrinoless_channel_gives_electrons_the_entire_q_value() {
    // The defining difference from the 2ν mode: no neutrino siphons energy.
    let mut sim = BetaDecaySimulator::new(303);
    let parent = Nucleus::new(32, 76);
    let q = 2.039;

    for _ in 0..2000 {
        let event = sim.simulate(&parent, DecayMode::NeutrinolessDoubleBetaMinus, q);
        assert_eq!(event.products.len(), 2);
        let sum = event.products[0].energy + event.products[1].energy;
        assert!((sum - q).abs() / q < 1e-9);
    }
}

#[test]
fn positron_channels_fail_below_pair_threshold_without_sampling() {
    let mut sim = BetaDecaySimulator::new(404);

    let beta_plus = sim.simulate(&Nucleus::new(11, 22), DecayMode::BetaPlus, 2.0 * ELECTRON_MASS);
    assert!(!beta_plus.is_successful);
    assert!(beta_plus.products.is_empty());

    let double_plus =
        sim.simulate(&Nucleus::new(36, 78), DecayMode::DoubleBetaPlus, 4.0 * ELECTRON_MASS);
    assert!(!double_plus.is_successful);
    assert!(double_plus.products.is_empty());
}

#[test]
fn can_decay_parity_with_simulate() {
    let mut sim = BetaDecaySimulator::new(505);
    let parents = [
        Nucleus::new(0, 1),
        Nucleus::new(1, 1),
        Nucleus::new(1, 2),
        Nucleus::new(2, 4),
        Nucleus::new(6, 13),
        Nucleus::new(6, 14),
        Nucleus::new(32, 76),
    ];

    // A generous Q keeps the energy-availability guards out of the picture
    // so only the structural guards decide.
    let q = 10.0;
    for parent in &parents {
        for mode in DecayMode::ALL {
            let allowed = sim.can_decay(parent, mode);
            let event = sim.simulate(parent, mode, q);
            assert_eq!(
                allowed, event.is_successful,
                "parity broken for {} in {:?}",
                parent, mode
            );
        }
    }
}

#[test]
fn derived_q_values_never_produce_negative_partitions() {
    // Feed the semi-empirical Q-value back into the partition schemes and
    // check the sequential splits never go negative.
    let mut sim = BetaDecaySimulator::new(606);
    let parent = Nucleus::new(32, 76);
    let daughter = Nucleus::new(34, 76);

    for mode in [DecayMode::DoubleBetaMinus, DecayMode::NeutrinolessDoubleBetaMinus] {
        let q = data::q_value(&parent, &daughter, mode);
        if q <= 0.0 {
            continue;
        }
        for _ in 0..500 {
            let event = sim.simulate(&parent, mode, q);
            assert!(event.is_successful);
            assert!(
                event.products.iter().all(|p| p.energy >= 0.0),
                "negative partition in {:?}",
                mode
            );
        }
    }
}

#[test]
fn electron_capture_neutrino_takes_the_full_q() {
    let mut sim = BetaDecaySimulator::new(707);
    let parent = Nucleus::new(19, 40);
    let q = 1.505;

    let event = sim.simulate(&parent, DecayMode::ElectronCapture, q);
    assert!(event.is_successful);
    assert_eq!(event.products.len(), 1);
    assert_eq!(event.products[0].energy, q);
    assert_eq!(event.daughter.z, 18);
}
