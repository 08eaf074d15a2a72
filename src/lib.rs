// Monte Carlo engine for single and double beta decay kinematics.
//
// The library is organized leaf-first: `data` holds the nuclear mass model,
// `spectrum` and `kinematics` provide the sampling primitives, and
// `simulator` ties them together into the per-channel event generators.

pub mod data;
pub mod event;
pub mod kinematics;
pub mod nucleus;
pub mod rng;
pub mod simulator;
pub mod source;
pub mod spectrum;
pub mod stats;

pub use event::{DecayEvent, DecayMode, DecayProduct, Species};
pub use nucleus::Nucleus;
pub use rng::{FastRng, RandomSource, RngSource, ScriptedSource};
pub use simulator::BetaDecaySimulator;
pub use source::{DecaySource, Primary};
pub use stats::EnergySummary;
