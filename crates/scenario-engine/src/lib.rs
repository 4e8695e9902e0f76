#![deny(warnings)]

//! Scenario impact engine.
//!
//! Turns a list of configured what-if scenarios into a [`SimulationResults`]
//! report in one synchronous pass:
//! - dispatch each scenario to the calculator for its type
//! - finalize before/after/change for the four impact metrics
//! - synthesize a key takeaway
//! - augment shutdown and peak-demand runs with extra fields and opportunities
//!
//! The engine holds no state between runs and performs no I/O.

use scenario_core::{
    validate_scenarios, ConfiguredScenario, ScenarioError, SimulationResults,
    MAX_PARAMETER_MAGNITUDE,
};
use tracing::{debug, info, warn};

mod accumulator;
mod augment;
mod calculators;
pub mod config;
pub mod format;
mod takeaway;

pub use augment::{BEST_SHUTDOWN_MONTH, DEMAND_MANAGEMENT_SAVINGS};
pub use calculators::demand::{plants_at_capacity, MAX_SERVICEABLE_INCREASE, PLANT_THRESHOLDS};
pub use config::{AugmentationScope, ConfigError, EngineConfig, ParameterPolicy};
pub use takeaway::COST_WARNING_PCT;

use accumulator::Accumulator;
use calculators::Params;

/// Simulation engine bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every scenario and build the report.
    ///
    /// Scenarios with an unknown tag are skipped but still counted in
    /// `total_scenarios`. Use [`Engine::run_strict`] to reject them instead.
    pub fn run(&self, scenarios: &[ConfiguredScenario]) -> SimulationResults {
        let scenario_type = scenarios
            .first()
            .map(|s| s.variable.clone())
            .unwrap_or_default();

        let mut acc = Accumulator::new();
        for s in scenarios {
            match s.kind() {
                Some(kind) => {
                    debug!(id = %s.id, facility = %s.facility, %kind, "applying scenario");
                    for (key, value) in &s.parameters {
                        if value.abs() > MAX_PARAMETER_MAGNITUDE {
                            warn!(
                                id = %s.id,
                                %key,
                                value = *value,
                                "parameter out of range, capping metric deltas"
                            );
                        }
                    }
                    let params = Params::new(&s.parameters, self.config.parameter_policy);
                    calculators::apply(kind, &params, &mut acc);
                }
                None => warn!(id = %s.id, tag = %s.variable, "unknown scenario type, skipping"),
            }
        }

        let impact_metrics = acc.finalize(&self.config.baseline);
        let key_takeaway = takeaway::synthesize(
            &acc.risks,
            &acc.opportunities,
            &impact_metrics,
            scenarios.len(),
        );
        let cost_delta = acc.deltas.cost;

        let mut results = SimulationResults {
            risks: acc.risks,
            opportunities: acc.opportunities,
            impact_metrics,
            key_takeaway,
            total_scenarios: scenarios.len(),
            scenario_type,
            additional_cost: None,
            best_month: None,
            can_meet_demand: acc.can_meet_demand,
            plants_at_capacity: acc.plants_at_capacity,
        };
        for family in augment::families(scenarios, self.config.augmentation) {
            augment::apply(family, &mut results, cost_delta);
        }

        info!(
            scenarios = results.total_scenarios,
            risks = results.risks.len(),
            opportunities = results.opportunities.len(),
            cost_change_pct = results.impact_metrics.cost.change,
            "simulation complete"
        );
        results
    }

    /// Like [`Engine::run`], but fails on unknown tags and on non-finite or
    /// out-of-range parameters.
    pub fn run_strict(
        &self,
        scenarios: &[ConfiguredScenario],
    ) -> Result<SimulationResults, ScenarioError> {
        validate_scenarios(scenarios)?;
        Ok(self.run(scenarios))
    }
}

/// Run scenarios with the default configuration.
pub fn calculate_simulation_results(scenarios: &[ConfiguredScenario]) -> SimulationResults {
    Engine::default().run(scenarios)
}

/// Run scenarios with the default configuration, rejecting unknown tags.
pub fn try_calculate_simulation_results(
    scenarios: &[ConfiguredScenario],
) -> Result<SimulationResults, ScenarioError> {
    Engine::default().run_strict(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenario_core::{BaselineMetrics, OpportunitySeverity, RiskSeverity};

    #[test]
    fn engine_rejects_invalid_baseline() {
        let cfg = EngineConfig {
            baseline: BaselineMetrics {
                total_cost: -1.0,
                ..BaselineMetrics::default()
            },
            ..EngineConfig::default()
        };
        assert!(Engine::new(cfg).is_err());
    }

    #[test]
    fn custom_baseline_sets_before_values() {
        let cfg = EngineConfig {
            baseline: BaselineMetrics {
                total_cost: 1_000_000.0,
                inventory_level: 50.0,
                service_level: 90.0,
                capacity_utilization: 60.0,
            },
            ..EngineConfig::default()
        };
        let engine = Engine::new(cfg).unwrap();
        let res = engine.run(&[
            ConfiguredScenario::new("c", "Carrier Capacity").with_param("capacityReduction", 25.0)
        ]);
        assert_eq!(res.impact_metrics.cost.before, 1_000_000.0);
        assert_eq!(res.impact_metrics.cost.after, 1_050_000.0);
        assert!((res.impact_metrics.cost.change - 5.0).abs() < 1e-9);
        assert_eq!(res.impact_metrics.capacity.before, 60.0);
    }

    #[test]
    fn shutdown_run_reports_additional_cost() {
        let res = calculate_simulation_results(&[ConfiguredScenario::new(
            "m",
            "Planned Maintenance",
        )
        .with_param("downtimeHours", 100.0)]);
        assert_eq!(res.scenario_type, "Planned Maintenance");
        assert_eq!(res.additional_cost.as_deref(), Some("$450,000"));
        assert_eq!(res.best_month.as_deref(), Some(BEST_SHUTDOWN_MONTH));
        assert_eq!(res.opportunities.len(), 2);
        assert_eq!(res.opportunities[0].title, "Production Reallocation");
        assert_eq!(res.opportunities[0].severity, OpportunitySeverity::High);
        assert_eq!(res.opportunities[0].savings, "$67,500");
        assert_eq!(res.can_meet_demand, None);
    }

    #[test]
    fn critical_takeaway_names_count() {
        let res = calculate_simulation_results(&[
            ConfiguredScenario::new("a", "Supplier Failure").with_param("severity", 90.0),
            ConfiguredScenario::new("b", "Material Flow Disruption").with_param("downtime", 96.0),
        ]);
        assert_eq!(res.count_risks(RiskSeverity::Critical), 2);
        assert!(res.key_takeaway.starts_with("2 critical risks"));
    }

    #[test]
    fn strict_run_rejects_huge_parameter() {
        let list =
            [ConfiguredScenario::new("big", "Supplier Failure").with_param("severity", 1.0e30)];
        let err = try_calculate_simulation_results(&list).unwrap_err();
        assert!(matches!(err, ScenarioError::OutOfRangeParameter { .. }));
        let res = calculate_simulation_results(&list);
        assert_eq!(res.risks[0].severity, RiskSeverity::Critical);
        assert!(res.key_takeaway.starts_with("1 critical risk"));
    }

    #[test]
    fn strict_run_rejects_unknown_tag() {
        let err = try_calculate_simulation_results(&[ConfiguredScenario::new(
            "x",
            "Supplier Falure",
        )])
        .unwrap_err();
        assert_eq!(
            err,
            ScenarioError::UnknownScenarioType("Supplier Falure".into())
        );
    }
}
