//! Maintenance scheduling and operator alerts (OPS-007).
//!
//! The schedule is driven by a declarative rule table: each rule names a
//! task, its recurrence interval, its expected hands-on duration, and its
//! priority. A scheduling pass derives every task's time-to-due from the
//! operating hours elapsed since the last full service and returns the
//! list sorted by priority, then urgency. The pass is stateless — nothing
//! counts down between calls; the list is regenerated wholesale.
//!
//! Alerts are independent threshold checks (several can fire on the same
//! pass), plus a sensor-drift roll modeling transient instrumentation
//! noise. The roll goes through the injected [`SimRng`] so tests can pin
//! the sequence with a seed.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rng::SimRng;

// =============================================================================
// Constants
// =============================================================================

/// Conversion efficiency below which the efficiency alert fires (%).
pub const EFFICIENCY_ALERT_THRESHOLD: f32 = 70.0;

/// Power draw above which the power alert fires (kW).
pub const POWER_ALERT_THRESHOLD: f32 = 200.0;

/// Probability that the sensor-drift alert fires on a given pass.
pub const SENSOR_DRIFT_PROBABILITY: f32 = 0.2;

// =============================================================================
// Maintenance rule table
// =============================================================================

/// Task priority in the maintenance queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// One entry in the declarative maintenance table.
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceRule {
    /// Task name shown to the operator.
    pub task: &'static str,
    /// Recurrence interval in operating hours.
    pub interval_hours: f32,
    /// Expected hands-on duration in hours.
    pub duration_hours: f32,
    /// Queue priority when due.
    pub priority: Priority,
}

/// The plant's standing maintenance rules. Extending the schedule means
/// adding a row here, not touching the scheduling pass.
pub const MAINTENANCE_RULES: [MaintenanceRule; 5] = [
    MaintenanceRule {
        task: "Electrode inspection",
        interval_hours: 24.0,
        duration_hours: 1.5,
        priority: Priority::High,
    },
    MaintenanceRule {
        task: "Catalyst bed regeneration",
        interval_hours: 72.0,
        duration_hours: 6.0,
        priority: Priority::High,
    },
    MaintenanceRule {
        task: "Gas filter replacement",
        interval_hours: 48.0,
        duration_hours: 2.0,
        priority: Priority::Medium,
    },
    MaintenanceRule {
        task: "Slag tap cleaning",
        interval_hours: 96.0,
        duration_hours: 3.0,
        priority: Priority::Medium,
    },
    MaintenanceRule {
        task: "Cooling loop flush",
        interval_hours: 168.0,
        duration_hours: 4.0,
        priority: Priority::Low,
    },
];

// =============================================================================
// MaintenanceTask
// =============================================================================

/// A scheduled maintenance task, regenerated wholesale each pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceTask {
    /// Task name from the rule table.
    pub task: &'static str,
    /// Operating hours until the task is due.
    pub due_in_hours: f32,
    /// Queue priority.
    pub priority: Priority,
    /// Expected hands-on duration in hours.
    pub duration_hours: f32,
}

/// Derive the maintenance queue from the hours elapsed since the last full
/// service. Tasks sort high priority first, soonest due within a priority.
pub fn schedule_maintenance(hours_since_service: f32) -> Vec<MaintenanceTask> {
    let elapsed = hours_since_service.max(0.0);

    let mut tasks: Vec<MaintenanceTask> = MAINTENANCE_RULES
        .iter()
        .map(|rule| {
            let into_cycle = elapsed % rule.interval_hours;
            MaintenanceTask {
                task: rule.task,
                due_in_hours: rule.interval_hours - into_cycle,
                priority: rule.priority,
                duration_hours: rule.duration_hours,
            }
        })
        .collect();

    tasks.sort_by(|a, b| {
        b.priority.cmp(&a.priority).then(
            a.due_in_hours
                .partial_cmp(&b.due_in_hours)
                .unwrap_or(Ordering::Equal),
        )
    });
    tasks
}

// =============================================================================
// Alerts
// =============================================================================

/// Alert categories raised by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    LowEfficiency,
    HighPowerDraw,
    SensorDrift,
}

/// A single operator alert. Transient: recomputed every pass, never
/// deduplicated or persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Which rule raised the alert.
    pub kind: AlertKind,
    /// Operator-facing message.
    pub message: String,
}

/// Metric snapshot consumed by the alert evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertMetrics {
    /// Conversion efficiency (%).
    pub efficiency: f32,
    /// Power draw (kW).
    pub power: f32,
}

/// Evaluate the alert rules against the given metrics.
///
/// The rules are independent — any subset can fire on one pass. The
/// sensor-drift check is the single designed source of randomness in the
/// engine; it rolls on the injected RNG.
pub fn evaluate_alerts(metrics: &AlertMetrics, rng: &mut SimRng) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if metrics.efficiency < EFFICIENCY_ALERT_THRESHOLD {
        alerts.push(Alert {
            kind: AlertKind::LowEfficiency,
            message: format!(
                "conversion efficiency at {:.1}%, below the {EFFICIENCY_ALERT_THRESHOLD:.0}% floor",
                metrics.efficiency
            ),
        });
    }

    if metrics.power > POWER_ALERT_THRESHOLD {
        alerts.push(Alert {
            kind: AlertKind::HighPowerDraw,
            message: format!(
                "power draw at {:.0} kW, above the {POWER_ALERT_THRESHOLD:.0} kW ceiling",
                metrics.power
            ),
        });
    }

    let roll: f32 = rng.0.gen();
    if roll < SENSOR_DRIFT_PROBABILITY {
        alerts.push(Alert {
            kind: AlertKind::SensorDrift,
            message: "sensor drift detected, recalibration suggested".to_string(),
        });
    }

    alerts
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(alerts: &[Alert]) -> Vec<AlertKind> {
        alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn test_schedule_never_empty() {
        let tasks = schedule_maintenance(0.0);
        assert!(!tasks.is_empty());
        assert_eq!(tasks.len(), MAINTENANCE_RULES.len());
    }

    #[test]
    fn test_every_task_has_valid_priority() {
        for task in schedule_maintenance(500.0) {
            assert!(
                matches!(task.priority, Priority::Low | Priority::Medium | Priority::High),
                "{} has no priority",
                task.task
            );
        }
    }

    #[test]
    fn test_sorted_high_priority_first() {
        let tasks = schedule_maintenance(30.0);
        for pair in tasks.windows(2) {
            assert!(
                pair[0].priority >= pair[1].priority,
                "{} ({:?}) sorted after {} ({:?})",
                pair[0].task,
                pair[0].priority,
                pair[1].task,
                pair[1].priority
            );
        }
    }

    #[test]
    fn test_fresh_service_due_at_full_interval() {
        let tasks = schedule_maintenance(0.0);
        for task in &tasks {
            let rule = MAINTENANCE_RULES
                .iter()
                .find(|r| r.task == task.task)
                .expect("task should come from the rule table");
            assert_eq!(task.due_in_hours, rule.interval_hours);
        }
    }

    #[test]
    fn test_due_time_wraps_with_recurrence() {
        // 30 hours in: the 24h electrode inspection is 18 hours from due.
        let tasks = schedule_maintenance(30.0);
        let inspection = tasks
            .iter()
            .find(|t| t.task == "Electrode inspection")
            .expect("inspection should be scheduled");
        assert!((inspection.due_in_hours - 18.0).abs() < 1e-4);
    }

    #[test]
    fn test_negative_elapsed_clamped() {
        let tasks = schedule_maintenance(-10.0);
        for task in &tasks {
            assert!(task.due_in_hours > 0.0);
        }
    }

    #[test]
    fn test_regenerated_wholesale() {
        assert_eq!(schedule_maintenance(30.0), schedule_maintenance(30.0));
    }

    #[test]
    fn test_low_efficiency_alert_fires_alone() {
        let mut rng = SimRng::from_seed_u64(1);
        let alerts = evaluate_alerts(
            &AlertMetrics {
                efficiency: 65.0,
                power: 150.0,
            },
            &mut rng,
        );
        let kinds = kinds(&alerts);
        assert!(kinds.contains(&AlertKind::LowEfficiency));
        assert!(
            !kinds.contains(&AlertKind::HighPowerDraw),
            "150 kW is under the ceiling"
        );
    }

    #[test]
    fn test_threshold_rules_are_independent() {
        let mut rng = SimRng::from_seed_u64(1);
        let alerts = evaluate_alerts(
            &AlertMetrics {
                efficiency: 60.0,
                power: 250.0,
            },
            &mut rng,
        );
        let kinds = kinds(&alerts);
        assert!(kinds.contains(&AlertKind::LowEfficiency));
        assert!(kinds.contains(&AlertKind::HighPowerDraw));
    }

    #[test]
    fn test_healthy_metrics_raise_no_threshold_alerts() {
        let mut rng = SimRng::from_seed_u64(1);
        let alerts = evaluate_alerts(
            &AlertMetrics {
                efficiency: 85.0,
                power: 120.0,
            },
            &mut rng,
        );
        let kinds = kinds(&alerts);
        assert!(!kinds.contains(&AlertKind::LowEfficiency));
        assert!(!kinds.contains(&AlertKind::HighPowerDraw));
    }

    #[test]
    fn test_sensor_drift_sequence_reproducible() {
        let metrics = AlertMetrics {
            efficiency: 85.0,
            power: 120.0,
        };
        let run = |seed: u64| -> Vec<bool> {
            let mut rng = SimRng::from_seed_u64(seed);
            (0..64)
                .map(|_| !evaluate_alerts(&metrics, &mut rng).is_empty())
                .collect()
        };
        assert_eq!(run(9), run(9), "same seed must reproduce the drift pattern");
    }

    #[test]
    fn test_sensor_drift_frequency_near_design_probability() {
        let metrics = AlertMetrics {
            efficiency: 85.0,
            power: 120.0,
        };
        let mut rng = SimRng::from_seed_u64(42);
        let trials = 10_000;
        let fired = (0..trials)
            .filter(|_| !evaluate_alerts(&metrics, &mut rng).is_empty())
            .count();
        let frequency = fired as f32 / trials as f32;
        assert!(
            (0.17..0.23).contains(&frequency),
            "drift frequency {frequency} far from {SENSOR_DRIFT_PROBABILITY}"
        );
    }
}
