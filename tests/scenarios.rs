// Reference scenarios: C-14 beta spectrum shape and the Ge-76 neutrinoless
// double-beta benchmark.

use betamc::{BetaDecaySimulator, DecayMode, DecaySource, EnergySummary, Nucleus};

#[test]
fn carbon14_electron_spectrum_shape() {
    let mut sim = BetaDecaySimulator::new(14);
    let parent = Nucleus::new(6, 14);
    let q = 0.156;
    let n = 10_000;

    let events = sim.run_batch(&parent, DecayMode::BetaMinus, q, n);
    assert_eq!(events.len(), n);

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for event in &events {
        assert!(event.is_successful);
        assert_eq!(event.daughter.z, 7);
        assert_eq!(event.daughter.a, 14);
        let electron_energy = event.products[0].energy;
        sum += electron_energy;
        min = min.min(electron_energy);
        max = max.max(electron_energy);
    }

    // The allowed β⁻ spectrum puts the mean electron energy at roughly a
    // third of the endpoint; the band is wide to keep the test stable.
    let mean_fraction = sum / n as f64 / q;
    assert!(
        (0.25..0.45).contains(&mean_fraction),
        "mean electron energy fraction {}",
        mean_fraction
    );
    assert!(min > 0.0);
    assert!(max < q);
}

#[test]
fn germanium76_neutrinoless_benchmark() {
    let mut sim = BetaDecaySimulator::new(76);
    let parent = Nucleus::new(32, 76);
    let q = 2.039;

    for _ in 0..10_000 {
        let event = sim.simulate(&parent, DecayMode::NeutrinolessDoubleBetaMinus, q);
        assert!(event.is_successful);
        assert_eq!(event.products.len(), 2);
        let sum = event.products[0].energy + event.products[1].energy;
        assert!(
            ((sum - 2.039) / 2.039).abs() < 1e-9,
            "electron sum {} deviates from the Q-value",
            sum
        );
    }
}

#[test]
fn summary_reports_the_batch_q_value() {
    let mut sim = BetaDecaySimulator::new(3);
    let parent = Nucleus::new(32, 76);
    let q = 2.039;
    let events = sim.run_batch(&parent, DecayMode::DoubleBetaMinus, q, 1000);
    let summary = EnergySummary::from_events(&events);

    assert_eq!(summary.events, 1000);
    assert_eq!(summary.q_value, q);
    // 2ν events always partition the full Q-value among the four leptons.
    assert!((summary.mean - q).abs() < 1e-9);
}

#[test]
fn catalog_source_feeds_a_transport_consumer() {
    let source = DecaySource::from_isotope("Xe136").expect("Xe136 in catalog");
    let mut sim = BetaDecaySimulator::new(136);

    let mut total_primaries = 0;
    for _ in 0..100 {
        let primaries = source.sample(&mut sim);
        assert_eq!(primaries.len(), 4);
        for primary in &primaries {
            let norm: f64 = primary.direction.iter().map(|c| c * c).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
        total_primaries += primaries.len();
    }
    assert_eq!(total_primaries, 400);
}
