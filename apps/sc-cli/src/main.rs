use clap::Parser;
use sc_results::{DEFAULT_OUTPUT_PATH, ResultsError, format_value, write_csv};
use sc_sim::{SimError, SimOutcome, SimulationParameters, StopReason};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("Results error: {0}")]
    Results(#[from] ResultsError),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(name = "sc-cli")]
#[command(about = "SolarCap - solar-charged capacitor runtime estimator", long_about = None)]
struct Cli {
    /// Solar array area (m^2)
    #[arg(allow_negative_numbers = true)]
    sa_m2: f64,
    /// Solar array efficiency (fraction)
    #[arg(allow_negative_numbers = true)]
    eff: f64,
    /// Array open-circuit voltage (V)
    #[arg(allow_negative_numbers = true)]
    voc: f64,
    /// Capacitance (F)
    #[arg(allow_negative_numbers = true)]
    c_f: f64,
    /// Capacitor equivalent series resistance (Ohm), not used in the dynamics
    #[arg(allow_negative_numbers = true)]
    r_esr: f64,
    /// Initial charge on the capacitor (C)
    #[arg(allow_negative_numbers = true)]
    q0_c: f64,
    /// Constant load power (W)
    #[arg(allow_negative_numbers = true)]
    p_on_w: f64,
    /// Voltage threshold (V)
    #[arg(allow_negative_numbers = true)]
    v_thresh: f64,
    /// Time step (s)
    #[arg(allow_negative_numbers = true)]
    dt_s: f64,
    /// Total duration (s)
    #[arg(allow_negative_numbers = true)]
    dur_s: f64,
    /// Output CSV file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

impl Cli {
    fn parameters(&self) -> SimulationParameters {
        SimulationParameters::from_args(&[
            self.sa_m2,
            self.eff,
            self.voc,
            self.c_f,
            self.r_esr,
            self.q0_c,
            self.p_on_w,
            self.v_thresh,
            self.dt_s,
            self.dur_s,
        ])
    }
}

fn main() -> CliResult<()> {
    // Logs go to stderr; stdout carries the threshold notice and summary
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let outcome = cmd_run(&cli.parameters(), &cli.output)?;
    print_summary(&outcome, &cli.output);
    Ok(())
}

fn cmd_run(params: &SimulationParameters, output: &Path) -> CliResult<SimOutcome> {
    let outcome = sc_sim::run(params)?;

    if let StopReason::ThresholdBreached { t_s, .. } = outcome.stop {
        println!("{}", breach_message(t_s));
    }

    write_csv(output, &outcome.samples)?;
    info!(
        path = %output.display(),
        rows = outcome.samples.len(),
        "wrote series"
    );
    Ok(outcome)
}

fn breach_message(t_s: f64) -> String {
    format!(
        "Voltage dropped below threshold at {} seconds",
        format_value(t_s)
    )
}

fn print_summary(outcome: &SimOutcome, output: &Path) {
    println!("\nRun summary:");
    println!("  Steps:   {}", outcome.steps_taken);
    println!("  Samples: {}", outcome.samples.len());
    match outcome.stop {
        StopReason::DurationElapsed => println!("  Stop:    duration elapsed"),
        StopReason::ThresholdBreached { t_s, .. } => {
            println!("  Stop:    threshold breached at t={:.3} s", t_s)
        }
    }
    if let Some(last) = outcome.samples.last() {
        println!("  Last:    {:.3} V at {:.3} s", last.volts, last.t_s);
    }
    println!("  Output:  {}", output.display());
}
