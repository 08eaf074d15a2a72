//! Reference CLI for the beta decay Monte Carlo engine.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use betamc::data;
use betamc::{BetaDecaySimulator, DecayMode, EnergySummary, Nucleus};

#[derive(Parser)]
#[command(name = "betamc")]
#[command(about = "Monte Carlo generator for single and double beta decay")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample decay events for a nucleus and channel
    Simulate {
        /// Reference isotope name (e.g. C14, Ge76); sets nucleus, mode and Q
        #[arg(long, conflicts_with_all = ["z", "a"])]
        isotope: Option<String>,

        /// Atomic number of the parent
        #[arg(long, requires_all = ["a", "mode", "q"])]
        z: Option<u32>,

        /// Mass number of the parent
        #[arg(long)]
        a: Option<u32>,

        /// Decay mode: beta-minus, beta-plus, ec, bb-2nu, bb+2nu, bb-0nu
        #[arg(long)]
        mode: Option<String>,

        /// Q-value in MeV (overrides the catalog value)
        #[arg(long)]
        q: Option<f64>,

        /// Number of events to generate
        #[arg(short, long, default_value = "1")]
        n: usize,

        /// RNG seed
        #[arg(long, default_value = "1")]
        seed: u64,

        /// Print every event in full detail
        #[arg(long)]
        events: bool,

        /// Emit the batch as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the reference isotope catalog
    Isotopes,

    /// Semi-empirical Q-value estimate for a parent and decay mode
    Qvalue {
        /// Atomic number of the parent
        #[arg(long)]
        z: u32,

        /// Mass number of the parent
        #[arg(long)]
        a: u32,

        /// Decay mode: beta-minus, beta-plus, ec, bb-2nu, bb+2nu, bb-0nu
        #[arg(long)]
        mode: String,
    },

    /// Stability heuristic verdict for a nuclide
    Stability {
        /// Atomic number
        #[arg(long)]
        z: u32,

        /// Mass number
        #[arg(long)]
        a: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            isotope,
            z,
            a,
            mode,
            q,
            n,
            seed,
            events,
            json,
        } => {
            let (parent, decay_mode, q_value) = resolve_target(isotope, z, a, mode, q)?;
            simulate(parent, decay_mode, q_value, n, seed, events, json)
        }
        Commands::Isotopes => {
            list_isotopes();
            Ok(())
        }
        Commands::Qvalue { z, a, mode } => qvalue(z, a, &mode),
        Commands::Stability { z, a } => {
            stability(z, a);
            Ok(())
        }
    }
}

fn resolve_target(
    isotope: Option<String>,
    z: Option<u32>,
    a: Option<u32>,
    mode: Option<String>,
    q: Option<f64>,
) -> Result<(Nucleus, DecayMode, f64)> {
    if let Some(name) = isotope {
        let record = data::isotope(&name)
            .with_context(|| format!("'{}' is not in the reference catalog (see `betamc isotopes`)", name))?;
        let mode = match mode {
            Some(m) => m.parse::<DecayMode>()?,
            None => record.mode,
        };
        return Ok((record.nucleus(), mode, q.unwrap_or(record.q_value)));
    }

    let (Some(z), Some(a)) = (z, a) else {
        bail!("either --isotope or --z/--a/--mode/--q must be given");
    };
    if a < z {
        bail!("mass number A={} cannot be smaller than atomic number Z={}", a, z);
    }
    let mode = mode
        .context("--mode is required with --z/--a")?
        .parse::<DecayMode>()?;
    let q = q.context("--q is required with --z/--a")?;
    Ok((Nucleus::new(z, a), mode, q))
}

fn simulate(
    parent: Nucleus,
    mode: DecayMode,
    q_value: f64,
    n: usize,
    seed: u64,
    print_events: bool,
    json: bool,
) -> Result<()> {
    let mut simulator = BetaDecaySimulator::new(seed);

    if !simulator.can_decay(&parent, mode) {
        bail!("{} cannot undergo {}", parent, mode);
    }

    let batch = simulator.run_batch(&parent, mode, q_value, n);

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    if print_events {
        for event in &batch {
            println!("{}", event);
            println!();
        }
    }

    println!("{}", EnergySummary::from_events(&batch));
    Ok(())
}

fn list_isotopes() {
    println!("{:<8} {:>3} {:>4} {:>9}  {}", "Name", "Z", "A", "Q (MeV)", "Default mode");
    println!("{}", "-".repeat(60));
    for record in &data::REFERENCE_ISOTOPES {
        println!(
            "{:<8} {:>3} {:>4} {:>9.3}  {}",
            record.name, record.z, record.a, record.q_value, record.mode
        );
    }
}

fn qvalue(z: u32, a: u32, mode: &str) -> Result<()> {
    if a < z {
        bail!("mass number A={} cannot be smaller than atomic number Z={}", a, z);
    }
    let mode = mode.parse::<DecayMode>()?;
    let parent = Nucleus::new(z, a);
    let simulator = BetaDecaySimulator::new(0);
    if !simulator.can_decay(&parent, mode) {
        bail!("{} cannot undergo {}", parent, mode);
    }

    let daughter = match mode {
        DecayMode::BetaMinus => Nucleus::new(z + 1, a),
        DecayMode::BetaPlus | DecayMode::ElectronCapture => Nucleus::new(z - 1, a),
        DecayMode::DoubleBetaMinus | DecayMode::NeutrinolessDoubleBetaMinus => {
            Nucleus::new(z + 2, a)
        }
        DecayMode::DoubleBetaPlus => Nucleus::new(z - 2, a),
    };
    let q = data::q_value(&parent, &daughter, mode);

    println!("Parent:   {}", parent);
    println!("Daughter: {}", daughter);
    println!("Mode:     {}", mode);
    println!("Q-value:  {:.4} MeV (semi-empirical estimate)", q);
    if q <= 0.0 {
        println!("Decay is not energetically allowed by the mass model.");
    }
    Ok(())
}

fn stability(z: u32, a: u32) {
    if a < z {
        println!("Invalid nuclide: A={} smaller than Z={}.", a, z);
        return;
    }
    let nucleus = Nucleus::new(z, a);
    let verdict = if nucleus.is_stable() {
        "likely stable"
    } else {
        "likely unstable"
    };
    println!("{}: {} (heuristic classifier)", nucleus, verdict);
    println!("Binding energy: {:.2} MeV ({:.3} MeV/nucleon)",
        nucleus.binding_energy(),
        nucleus.binding_energy() / a as f64
    );
}
