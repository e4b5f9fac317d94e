//! Command-line driver: solve a heated plate, then plot and optionally dump it.

use std::path::PathBuf;

use clap::Parser;
use heatplate::config::RunConfig;
use heatplate::prelude::*;
use heatplate::{input, report};

#[derive(Parser)]
#[command(name = "heatplate")]
#[command(about = "Steady-state heat distribution on a square plate")]
#[command(version)]
struct Cli {
    /// TOML file with run settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Left edge temperature, which is also the plate size. Prompted for when absent.
    #[arg(short, long)]
    temperature: Option<usize>,
    /// Maximum number of sweeps.
    #[arg(long)]
    max_iter: Option<usize>,
    #[arg(long, value_enum)]
    scheme: Option<Scheme>,
    /// Stop once no cell moves by more than this, instead of on exact equality.
    #[arg(long)]
    tolerance: Option<f64>,
    /// Write the plot to this SVG file instead of `heatplate.svg`.
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Dump the final grid to stdout.
    #[arg(long)]
    print_state: bool,
    /// Show a progress bar while solving.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<RunConfig> {
        let mut config = match self.config {
            Some(ref path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if self.temperature.is_some() {
            config.temperature = self.temperature;
        }
        if let Some(max_iter) = self.max_iter {
            config.max_iter = max_iter;
        }
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if self.tolerance.is_some() {
            config.tolerance = self.tolerance;
        }
        if let Some(svg) = self.svg {
            config.svg = svg;
        }
        config.print_state |= self.print_state;
        config.verbose |= self.verbose;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Cli::parse().into_config()?;

    let temperature = match config.temperature {
        Some(temperature) => temperature,
        None => {
            let stdin = std::io::stdin();
            input::prompt_temperature(stdin.lock(), std::io::stdout())?
        }
    };
    let params = PlateParameters {
        size: temperature,
        temperature: temperature as f64,
    };

    match config.scheme {
        Scheme::Hybrid => run(HybridSolver, params, &config),
        Scheme::PureJacobi => run(JacobiSolver, params, &config),
    }
}

fn run<S: Solver>(solver: S, params: PlateParameters, config: &RunConfig) -> anyhow::Result<()> {
    let mut plate = HeatPlate::new(PlateDescriptor {
        solver,
        params,
        init_state: None,
    })?;

    let count = plate.solve(RunDescriptor {
        max_iter: config.max_iter,
        convergence: config.convergence(),
        verbose: config.verbose,
    })?;

    Renderer::new(params.temperature)
        .scatter(plate.current())
        .save_svg(&config.svg)?;
    println!("Plot written to {}", config.svg.display());
    if config.print_state {
        report::write_current_state(&plate, std::io::stdout().lock())?;
    }

    println!("Total Iterations = {}", count);
    Ok(())
}
