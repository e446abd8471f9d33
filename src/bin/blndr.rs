use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use blndr::{
    models::blending::{FillRequest, Vessel, plan_fill},
    support::{
        eos::{EquationOfState, VanDerWaals},
        gas::GasMix,
        units::{bar, celsius, in_bar, liters},
    },
};

/// Plans the bleed, fill and top-up steps for a partial-pressure blend.
///
/// Mixtures are given as a preset name (air, ean32, ean36, ean40, o2, he,
/// n2), a nitrox O2 percentage (32) or an O2/He percentage pair (21/35).
#[derive(Parser)]
#[command(name = "blndr", version)]
struct Cli {
    /// Mixture to blend
    #[arg(long, default_value = "20/15")]
    target: GasMix,

    /// Final gauge pressure, bar
    #[arg(long, default_value_t = 200.0)]
    target_pressure: f64,

    /// Mixture currently in the vessel
    #[arg(long, default_value = "o2")]
    initial: GasMix,

    /// Current gauge pressure, bar
    #[arg(long, default_value_t = 50.0)]
    initial_pressure: f64,

    /// Nitrogen-bearing gas used for the final top-up
    #[arg(long, default_value = "air")]
    top_up: GasMix,

    /// Vessel water volume, liters
    #[arg(long, default_value_t = 10.0)]
    volume: f64,

    /// Gas temperature, degrees Celsius
    #[arg(long, default_value_t = 20.0)]
    temperature: f64,

    /// Print the vessel mixture after each step
    #[arg(short, long)]
    verbose: bool,

    /// Also report the final pressure predicted by the Van der Waals model
    #[arg(long)]
    compare_real_gas: bool,
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let vessel = Vessel::new(liters(cli.volume), celsius(cli.temperature));
    let request = FillRequest::new(cli.target)
        .with_target_pressure(bar(cli.target_pressure))
        .with_initial(cli.initial, bar(cli.initial_pressure))
        .with_vessel(vessel)
        .with_top_up(cli.top_up);

    println!("[START] {} @ {:?} bar", cli.initial, cli.initial_pressure);
    println!("[TARGET] {} @ {:?} bar", cli.target, cli.target_pressure);

    let plan = plan_fill(&request).wrap_err("failed to plan the fill")?;

    println!("[STEPS]");
    if cli.verbose {
        for (i, planned) in plan.steps().iter().enumerate() {
            println!(" {}. {}", i + 1, planned.step);
            println!("    {}", planned.mix);
        }
    } else {
        print!("{plan}");
    }

    if cli.compare_real_gas {
        let real = VanDerWaals::default()
            .pressure(
                plan.contents().total(),
                vessel.volume,
                vessel.temperature,
                &plan.final_mix(),
            )
            .wrap_err("failed to evaluate the Van der Waals pressure")?;
        println!("[REAL-GAS] {:.2} bar (Van der Waals)", in_bar(real));
    }

    Ok(())
}
