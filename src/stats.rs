// Batch-level summary statistics over generated decay events.

use serde::Serialize;
use std::fmt;

use crate::event::DecayEvent;

/// Min / mean / max of per-event total product energy over a batch, plus
/// the Q-value the batch was sampled with.
#[derive(Debug, Clone, Serialize)]
pub struct EnergySummary {
    pub events: usize,
    pub successful: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub q_value: f64,
}

impl EnergySummary {
    /// Summarize a batch. An empty batch is valid and produces an empty
    /// summary whose report says so; it is not an error.
    pub fn from_events(events: &[DecayEvent]) -> Self {
        if events.is_empty() {
            return Self {
                events: 0,
                successful: 0,
                mean: 0.0,
                min: 0.0,
                max: 0.0,
                q_value: 0.0,
            };
        }

        let mut total = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut successful = 0;

        for event in events {
            if event.is_successful {
                successful += 1;
            }
            let energy = event.total_energy();
            total += energy;
            min = min.min(energy);
            max = max.max(energy);
        }

        Self {
            events: events.len(),
            successful,
            mean: total / events.len() as f64,
            min,
            max,
            q_value: events[0].q_value,
        }
    }
}

impl fmt::Display for EnergySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(70);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Energy Distribution Analysis")?;
        writeln!(f, "{}", rule)?;
        if self.events == 0 {
            writeln!(f, "No events to analyze.")?;
            return write!(f, "{}", rule);
        }
        writeln!(f, "Total events: {} ({} successful)", self.events, self.successful)?;
        writeln!(f)?;
        writeln!(f, "Average total energy: {:.4} MeV", self.mean)?;
        writeln!(f, "Minimum total energy: {:.4} MeV", self.min)?;
        writeln!(f, "Maximum total energy: {:.4} MeV", self.max)?;
        writeln!(f, "Q-value: {:.4} MeV", self.q_value)?;
        write!(f, "{}", rule)
    }
}
