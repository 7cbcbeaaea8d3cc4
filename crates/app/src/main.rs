//! Plasma plant operator console.
//!
//! Thin shell around the `engine` crate: loads a JSON configuration,
//! drives the calculators for the configured number of polling cycles,
//! and prints the final operator report (text by default, one JSON line
//! with `--json`). All scheduling and presentation live here; the engine
//! stays pure.

mod config;
mod report;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::composition::normalize;
use engine::decomposition::simulate_decomposition_with_mass;
use engine::maintenance::{evaluate_alerts, schedule_maintenance, AlertMetrics};
use engine::monitor::PlantMonitor;
use engine::optimizer::optimize;
use engine::projection::{project, DailyBaseline};
use engine::rng::SimRng;

use report::OperatorReport;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut json_output = false;
    let mut config_path: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            config_path = Some(PathBuf::from(arg));
        }
    }

    let config = config::load(config_path.as_deref())?;
    let composition = normalize(&config.feedstock)?;
    let mut rng = SimRng::from_seed_u64(config.seed);
    let mut monitor = PlantMonitor::default();

    info!(cycles = config.cycles, "starting engine passes");

    let mut latest = None;
    for _ in 0..config.cycles.max(1) {
        let simulation = simulate_decomposition_with_mass(&composition, config.batch_mass_kg);
        let optimization = optimize(&config.parameters);

        monitor.record_simulation(simulation);
        monitor.record_optimization(optimization);

        let baseline = DailyBaseline {
            waste_kg: config.batch_mass_kg,
            methane_kg: simulation.methane_output,
            power_kwh: optimization.power_consumption * 24.0,
            efficiency: optimization.efficiency,
        };

        latest = Some(OperatorReport {
            simulation,
            optimization,
            projections: project(&baseline, config.crew_size, config.projection_periods),
            maintenance: schedule_maintenance(config.hours_since_service),
            alerts: evaluate_alerts(
                &AlertMetrics {
                    efficiency: optimization.efficiency,
                    power: optimization.power_consumption,
                },
                &mut rng,
            ),
        });
    }

    if let Some(report) = latest {
        if json_output {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.to_text());
        }
    }

    info!(
        average_cycle_efficiency = monitor.average_cycle_efficiency(),
        samples = monitor.simulation_count(),
        "run complete"
    );

    Ok(())
}
