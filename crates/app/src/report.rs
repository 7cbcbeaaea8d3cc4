//! Operator report formatting.
//!
//! Bundles everything one engine pass produced and renders it either as
//! operator-facing text or as a single JSON line for machine consumers.
//! Formatting only — every number in here was computed by the engine.

use std::fmt::Write as _;

use serde::Serialize;

use engine::decomposition::SimulationResult;
use engine::maintenance::{Alert, MaintenanceTask};
use engine::optimizer::OptimizationResult;
use engine::projection::Projection;

/// Everything one engine pass produced, bundled for presentation.
#[derive(Debug, Serialize)]
pub struct OperatorReport {
    pub simulation: SimulationResult,
    pub optimization: OptimizationResult,
    pub projections: Vec<Projection>,
    pub maintenance: Vec<MaintenanceTask>,
    pub alerts: Vec<Alert>,
}

impl OperatorReport {
    /// Render the report as operator-facing text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "== Plant status: {} ==", self.optimization.status_label);
        let _ = writeln!(out);

        let _ = writeln!(out, "Decomposition pass");
        let _ = writeln!(out, "  energy demand        {:>9.1} MJ", self.simulation.energy_needs);
        let _ = writeln!(out, "  methane              {:>9.2} kg", self.simulation.methane_output);
        let _ = writeln!(out, "  hydrogen             {:>9.2} kg", self.simulation.hydrogen_output);
        let _ = writeln!(out, "  solid carbon         {:>9.2} kg", self.simulation.carbon_production);
        let _ = writeln!(out, "  cycle efficiency     {:>9.2}", self.simulation.cycle_efficiency);
        let _ = writeln!(out, "  sustainability score {:>9.1} / 100", self.simulation.sustainability_score);
        let _ = writeln!(out);

        let _ = writeln!(out, "Optimization pass");
        let _ = writeln!(out, "  methane yield        {:>9.2} kg/h", self.optimization.methane_yield);
        let _ = writeln!(out, "  power draw           {:>9.1} kW", self.optimization.power_consumption);
        let _ = writeln!(out, "  efficiency           {:>9.1} %", self.optimization.efficiency);
        let _ = writeln!(out);

        if !self.projections.is_empty() {
            let _ = writeln!(out, "Projections");
            for p in &self.projections {
                let _ = writeln!(
                    out,
                    "  year {}: {:>8.1} t waste, {:>7.1} t methane, {:>8.1} MWh, {:>5.1} % efficiency",
                    p.year, p.waste_tonnes, p.methane_tonnes, p.power_mwh, p.efficiency_percent
                );
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Maintenance queue");
        for task in &self.maintenance {
            let _ = writeln!(
                out,
                "  [{:?}] {} — due in {:.0} h ({:.1} h job)",
                task.priority, task.task, task.due_in_hours, task.duration_hours
            );
        }
        let _ = writeln!(out);

        if self.alerts.is_empty() {
            let _ = writeln!(out, "No active alerts");
        } else {
            let _ = writeln!(out, "Active alerts");
            for alert in &self.alerts {
                let _ = writeln!(out, "  ! {}", alert.message);
            }
        }

        out
    }

    /// Render the report as a single JSON line for machine consumption.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
