// Per-channel decay event generators.
//
// Each `simulate` call is a pure function of the owned random stream and
// its explicit (parent, mode, Q-value) arguments; the stream is the only
// mutable state. The simulator is deliberately single-threaded: callers
// wanting parallelism run one instance per worker.

use crate::event::{DecayEvent, DecayMode, DecayProduct, Species};
use crate::kinematics::{balance_last, isotropic_momentum};
use crate::nucleus::Nucleus;
use crate::rng::{FastRng, RandomSource};
use crate::spectrum::sample_beta_energy;
use crate::data::ELECTRON_MASS;

use nalgebra::Vector3;

/// Monte Carlo generator for the six beta / double-beta decay channels.
///
/// Owns a single [`RandomSource`] stream; every sampling call advances it.
pub struct BetaDecaySimulator<R: RandomSource = FastRng> {
    rng: R,
}

impl BetaDecaySimulator<FastRng> {
    /// Simulator with the default PCG-LCG stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: FastRng::new(seed),
        }
    }
}

impl<R: RandomSource> BetaDecaySimulator<R> {
    /// Simulator over an injected random source, e.g. a scripted sequence
    /// in tests or an adapter over a `rand` generator.
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    /// Structural pre-flight check for a channel: does the parent have the
    /// nucleons the transition needs? Energy availability is checked again
    /// inside `simulate`, which knows the Q-value.
    pub fn can_decay(&self, parent: &Nucleus, mode: DecayMode) -> bool {
        let z = parent.z as i64;
        let n = parent.neutrons() as i64;
        match mode {
            DecayMode::BetaMinus => n > 0,
            DecayMode::BetaPlus | DecayMode::ElectronCapture => z > 0,
            DecayMode::DoubleBetaMinus | DecayMode::NeutrinolessDoubleBetaMinus => n - z >= 2,
            DecayMode::DoubleBetaPlus => z >= 2,
        }
    }

    /// Generate one decay event for the given channel and Q-value (MeV).
    ///
    /// Failures (structural guard, energy availability, envelope
    /// exhaustion) are reported through `is_successful = false` on the
    /// returned event; this method never panics on physical inputs.
    pub fn simulate(&mut self, parent: &Nucleus, mode: DecayMode, q_value: f64) -> DecayEvent {
        let daughter = daughter_of(parent, mode);
        if !self.can_decay(parent, mode) {
            return DecayEvent::failed(mode, parent.clone(), daughter, q_value);
        }

        match mode {
            DecayMode::BetaMinus => self.simulate_beta_minus(parent, daughter, q_value),
            DecayMode::BetaPlus => self.simulate_beta_plus(parent, daughter, q_value),
            DecayMode::ElectronCapture => self.simulate_electron_capture(parent, daughter, q_value),
            DecayMode::DoubleBetaMinus => self.simulate_double_beta_minus(parent, daughter, q_value),
            DecayMode::DoubleBetaPlus => self.simulate_double_beta_plus(parent, daughter, q_value),
            DecayMode::NeutrinolessDoubleBetaMinus => {
                self.simulate_double_beta_0nu(parent, daughter, q_value)
            }
        }
    }

    /// β⁻: electron energy from the Fermi-corrected spectrum, antineutrino
    /// takes the remainder and balances the momentum.
    fn simulate_beta_minus(&mut self, parent: &Nucleus, daughter: Nucleus, q: f64) -> DecayEvent {
        let electron_energy = match sample_beta_energy(q, parent.z as i32, &mut self.rng) {
            Ok(e) => e,
            Err(_) => return DecayEvent::failed(DecayMode::BetaMinus, parent.clone(), daughter, q),
        };

        let mut products = vec![
            DecayProduct::new(
                Species::Electron,
                electron_energy,
                isotropic_momentum(electron_energy, ELECTRON_MASS, &mut self.rng),
            ),
            DecayProduct::new(Species::ElectronAntineutrino, q - electron_energy, Vector3::zeros()),
        ];
        balance_last(&mut products);

        self.event(DecayMode::BetaMinus, parent, daughter, products, q)
    }

    /// β⁺: two electron masses must be paid out of the Q-value before any
    /// kinetic energy is available. The Fermi term is evaluated with -Z to
    /// approximate Coulomb repulsion of the positron.
    fn simulate_beta_plus(&mut self, parent: &Nucleus, daughter: Nucleus, q: f64) -> DecayEvent {
        let available = q - 2.0 * ELECTRON_MASS;
        if available <= 0.0 {
            return DecayEvent::failed(DecayMode::BetaPlus, parent.clone(), daughter, q);
        }

        let positron_energy =
            match sample_beta_energy(available, -(parent.z as i32), &mut self.rng) {
                Ok(e) => e,
                Err(_) => {
                    return DecayEvent::failed(DecayMode::BetaPlus, parent.clone(), daughter, q)
                }
            };

        let mut products = vec![
            DecayProduct::new(
                Species::Positron,
                positron_energy,
                isotropic_momentum(positron_energy, ELECTRON_MASS, &mut self.rng),
            ),
            DecayProduct::new(
                Species::ElectronNeutrino,
                available - positron_energy,
                Vector3::zeros(),
            ),
        ];
        balance_last(&mut products);

        self.event(DecayMode::BetaPlus, parent, daughter, products, q)
    }

    /// EC: a single monoenergetic neutrino takes the full Q-value (atomic
    /// binding of the captured electron is ignored). Nothing to balance
    /// against, so the neutrino keeps its isotropic momentum.
    fn simulate_electron_capture(
        &mut self,
        parent: &Nucleus,
        daughter: Nucleus,
        q: f64,
    ) -> DecayEvent {
        let products = vec![DecayProduct::new(
            Species::ElectronNeutrino,
            q,
            isotropic_momentum(q, 0.0, &mut self.rng),
        )];

        self.event(DecayMode::ElectronCapture, parent, daughter, products, q)
    }

    /// ββ⁻ (2ν): simplified phase space via sequential uniform splits of
    /// the Q-value; the second antineutrino takes the remainder and
    /// balances the momentum.
    fn simulate_double_beta_minus(
        &mut self,
        parent: &Nucleus,
        daughter: Nucleus,
        q: f64,
    ) -> DecayEvent {
        let products = self.split_four_body(q, Species::Electron, Species::ElectronAntineutrino);
        self.event(DecayMode::DoubleBetaMinus, parent, daughter, products, q)
    }

    /// ββ⁺ (2ν): as ββ⁻ but four electron masses come off the Q-value
    /// before splitting.
    fn simulate_double_beta_plus(
        &mut self,
        parent: &Nucleus,
        daughter: Nucleus,
        q: f64,
    ) -> DecayEvent {
        let available = q - 4.0 * ELECTRON_MASS;
        if available <= 0.0 {
            return DecayEvent::failed(DecayMode::DoubleBetaPlus, parent.clone(), daughter, q);
        }

        let products = self.split_four_body(available, Species::Positron, Species::ElectronNeutrino);
        self.event(DecayMode::DoubleBetaPlus, parent, daughter, products, q)
    }

    /// ββ⁻ (0ν): no neutrinos, the two electrons share the full Q-value
    /// exactly and emerge back to back.
    fn simulate_double_beta_0nu(
        &mut self,
        parent: &Nucleus,
        daughter: Nucleus,
        q: f64,
    ) -> DecayEvent {
        let e1 = self.rng.uniform() * q;
        let e2 = q - e1;

        let mut products = vec![
            DecayProduct::new(
                Species::Electron,
                e1,
                isotropic_momentum(e1, ELECTRON_MASS, &mut self.rng),
            ),
            DecayProduct::new(Species::Electron, e2, Vector3::zeros()),
        ];
        balance_last(&mut products);

        self.event(
            DecayMode::NeutrinolessDoubleBetaMinus,
            parent,
            daughter,
            products,
            q,
        )
    }

    /// Sequential uniform energy splits for the four-body 2ν channels:
    /// e1 ~ U(0, E/2), e2 ~ U(0, (E-e1)/2), nu1 ~ U(0, E-e1-e2) and nu2
    /// takes the remainder. Each subtraction is from a non-negative
    /// remainder, so no split can go negative. The last product balances
    /// the other three momenta.
    fn split_four_body(
        &mut self,
        total: f64,
        charged: Species,
        neutral: Species,
    ) -> Vec<DecayProduct> {
        let e1 = self.rng.uniform() * total * 0.5;
        let e2 = self.rng.uniform() * (total - e1) * 0.5;
        let nu1 = self.rng.uniform() * (total - e1 - e2);
        let nu2 = total - e1 - e2 - nu1;

        let mut products = vec![
            DecayProduct::new(
                charged,
                e1,
                isotropic_momentum(e1, charged.mass(), &mut self.rng),
            ),
            DecayProduct::new(
                charged,
                e2,
                isotropic_momentum(e2, charged.mass(), &mut self.rng),
            ),
            DecayProduct::new(
                neutral,
                nu1,
                isotropic_momentum(nu1, neutral.mass(), &mut self.rng),
            ),
            DecayProduct::new(neutral, nu2, Vector3::zeros()),
        ];
        balance_last(&mut products);
        products
    }

    fn event(
        &self,
        mode: DecayMode,
        parent: &Nucleus,
        daughter: Nucleus,
        products: Vec<DecayProduct>,
        q_value: f64,
    ) -> DecayEvent {
        DecayEvent {
            mode,
            parent: parent.clone(),
            daughter,
            products,
            q_value,
            decay_time: 0.0,
            is_successful: true,
        }
    }

    /// Exponential waiting time in the same unit as `half_life`, via the
    /// inverse-CDF transform -ln(u)/λ with λ = ln2 / half-life.
    ///
    /// `half_life` must be positive; no guard is applied and the result is
    /// meaningless otherwise.
    pub fn decay_time(&mut self, half_life: f64) -> f64 {
        let decay_constant = std::f64::consts::LN_2 / half_life;
        -self.rng.uniform().ln() / decay_constant
    }

    /// Half-life corresponding to a decay constant λ (inverse units).
    pub fn half_life(decay_constant: f64) -> f64 {
        std::f64::consts::LN_2 / decay_constant
    }

    /// Generate `n` independent events from the same stream, sequentially.
    pub fn run_batch(
        &mut self,
        parent: &Nucleus,
        mode: DecayMode,
        q_value: f64,
        n: usize,
    ) -> Vec<DecayEvent> {
        let mut events = Vec::with_capacity(n);
        for _ in 0..n {
            events.push(self.simulate(parent, mode, q_value));
        }
        events
    }
}

/// Daughter nuclide implied by a channel: Z shifts by one or two at fixed
/// A. Clamped to 0 <= Z <= A so that guard-failing events can still report
/// an attempted daughter without violating the nucleus invariant.
fn daughter_of(parent: &Nucleus, mode: DecayMode) -> Nucleus {
    let z = match mode {
        DecayMode::BetaMinus => parent.z + 1,
        DecayMode::BetaPlus | DecayMode::ElectronCapture => parent.z.saturating_sub(1),
        DecayMode::DoubleBetaMinus | DecayMode::NeutrinolessDoubleBetaMinus => parent.z + 2,
        DecayMode::DoubleBetaPlus => parent.z.saturating_sub(2),
    };
    Nucleus::new(z.min(parent.a), parent.a)
}
