#![deny(warnings)]

//! Core data model for the scenario impact engine.
//!
//! This crate defines the serializable input and output contracts shared by the
//! engine and its consumers, the catalog of known scenario types, and
//! validation helpers for callers that want to reject bad input up front.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub mod catalog;

pub use catalog::{ParameterSpec, ScenarioCategory, ScenarioKind};

/// Numeric knobs attached to a scenario, keyed by parameter name.
pub type Parameters = BTreeMap<String, f64>;

/// Largest parameter magnitude whose metric deltas are computed exactly.
///
/// Larger values still decide risk tiers, but their contribution to the
/// metrics is capped at this magnitude. Strict validation rejects them.
pub const MAX_PARAMETER_MAGNITUDE: f64 = 1.0e15;

/// One user-configured what-if condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredScenario {
    /// Caller-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Facility the scenario applies to, e.g. "Phoenix, AZ".
    #[serde(default)]
    pub facility: String,
    /// Category chosen in the configuration UI, e.g. "Supply".
    #[serde(default)]
    pub category: String,
    /// Scenario type tag, e.g. "Supplier Failure". Used for dispatch.
    pub variable: String,
    /// Type-specific numeric parameters. Missing keys take catalog defaults.
    #[serde(default)]
    pub parameters: Parameters,
}

impl ConfiguredScenario {
    /// Create a scenario with no facility, category or parameters.
    pub fn new(id: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            facility: String::new(),
            category: String::new(),
            variable: variable.into(),
            parameters: Parameters::new(),
        }
    }

    /// Builder-style helper to set the facility.
    pub fn at(mut self, facility: impl Into<String>) -> Self {
        self.facility = facility.into();
        self
    }

    /// Builder-style helper to set one parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// Resolve the scenario type tag, if it is a known one.
    pub fn kind(&self) -> Option<ScenarioKind> {
        ScenarioKind::from_tag(&self.variable)
    }
}

/// Severity of a risk. Ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskSeverity {
    /// Worth noting, no action needed.
    Low,
    /// Should be planned for.
    Medium,
    /// Needs a mitigation owner.
    High,
    /// Blocks the plan until mitigated.
    Critical,
}

impl RiskSeverity {
    /// Wire name, e.g. "CRITICAL".
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "LOW",
            RiskSeverity::Medium => "MEDIUM",
            RiskSeverity::High => "HIGH",
            RiskSeverity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of an opportunity. Opportunities are never critical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpportunitySeverity {
    /// Marginal benefit.
    Low,
    /// Worth pursuing.
    Medium,
    /// High-impact, prioritize.
    High,
}

/// What kind of benefit an opportunity offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    /// Lowers spend directly.
    CostSaving,
    /// Reduces exposure to a future disruption.
    RiskMitigation,
    /// Does the same work with fewer resources.
    Efficiency,
    /// Adds or frees production headroom.
    Capacity,
}

/// A risk raised by a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub severity: RiskSeverity,
    /// Short headline shown on the risk card.
    pub title: String,
    /// What happens under the scenario.
    pub description: String,
    /// Recommended response.
    pub mitigation: String,
    /// Short human-readable impact summary, e.g. "$84,000 added cost".
    pub impact: String,
}

/// An opportunity opened up by a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub severity: OpportunitySeverity,
    /// Short headline shown on the opportunity card.
    pub title: String,
    /// What the opportunity involves.
    pub description: String,
    /// Formatted savings figure or range, e.g. "$12,000" or "$180K - $240K".
    pub savings: String,
    /// In-app route to the screen that acts on this opportunity.
    pub link: String,
    /// Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
}

/// One tracked quantity with its baseline, simulated value and change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetric {
    pub label: String,
    /// Baseline value.
    pub before: f64,
    /// Simulated value.
    pub after: f64,
    /// Percentage for cost, absolute points for everything else.
    pub change: f64,
    /// Chart color name.
    pub color: String,
    /// "$" or "%".
    pub unit: String,
}

impl ImpactMetric {
    /// A metric whose simulated value still equals its baseline.
    pub fn at_baseline(label: &str, value: f64, color: &str, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            before: value,
            after: value,
            change: 0.0,
            color: color.to_string(),
            unit: unit.to_string(),
        }
    }

    /// Raw difference between simulated and baseline value.
    pub fn delta(&self) -> f64 {
        self.after - self.before
    }

    /// Values a chart overlays on top of its baseline series.
    pub fn overlay(&self) -> MetricOverlay {
        MetricOverlay {
            simulated_value: self.after,
            simulated_change: self.change,
        }
    }
}

/// Simulated value and change for chart and metric-card overlays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricOverlay {
    pub simulated_value: f64,
    pub simulated_change: f64,
}

/// The four impact metrics tracked per run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMetrics {
    pub cost: ImpactMetric,
    pub inventory: ImpactMetric,
    pub service_level: ImpactMetric,
    pub capacity: ImpactMetric,
}

impl ImpactMetrics {
    /// Metrics initialized so that `before == after` for every entry.
    pub fn from_baseline(base: &BaselineMetrics) -> Self {
        Self {
            cost: ImpactMetric::at_baseline("Total Cost", base.total_cost, "blue", "$"),
            inventory: ImpactMetric::at_baseline(
                "Inventory Level",
                base.inventory_level,
                "purple",
                "%",
            ),
            service_level: ImpactMetric::at_baseline(
                "Service Level",
                base.service_level,
                "green",
                "%",
            ),
            capacity: ImpactMetric::at_baseline(
                "Capacity Utilization",
                base.capacity_utilization,
                "orange",
                "%",
            ),
        }
    }

    /// Iterate metrics in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ImpactMetric> {
        [&self.cost, &self.inventory, &self.service_level, &self.capacity].into_iter()
    }
}

/// Baseline operating figures every simulation starts from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaselineMetrics {
    /// Total operating cost in USD (> 0).
    pub total_cost: f64,
    /// Inventory level in percent of target.
    pub inventory_level: f64,
    /// Service level in percent.
    pub service_level: f64,
    /// Capacity utilization in percent.
    pub capacity_utilization: f64,
}

impl Default for BaselineMetrics {
    fn default() -> Self {
        Self {
            total_cost: 3_850_000.0,
            inventory_level: 85.0,
            service_level: 94.0,
            capacity_utilization: 78.0,
        }
    }
}

/// Aggregate report produced by one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResults {
    pub risks: Vec<Risk>,
    pub opportunities: Vec<Opportunity>,
    pub impact_metrics: ImpactMetrics,
    pub key_takeaway: String,
    /// Number of scenarios submitted, including unrecognized ones.
    pub total_scenarios: usize,
    /// Tag of the first scenario, or empty when none were submitted.
    pub scenario_type: String,
    /// Formatted cost delta, set for shutdown/maintenance runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_cost: Option<String>,
    /// Recommended shutdown window, set for shutdown/maintenance runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_month: Option<String>,
    /// Whether the network can absorb a demand spike. Set by spike scenarios.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_meet_demand: Option<bool>,
    /// Plants pushed to full capacity by a demand spike.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plants_at_capacity: Option<Vec<String>>,
}

impl SimulationResults {
    pub fn count_risks(&self, severity: RiskSeverity) -> usize {
        self.risks.iter().filter(|r| r.severity == severity).count()
    }

    pub fn count_opportunities(&self, severity: OpportunitySeverity) -> usize {
        self.opportunities
            .iter()
            .filter(|o| o.severity == severity)
            .count()
    }
}

/// Errors describing scenarios the engine would not fully process.
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    /// Tag does not name any known scenario type.
    #[error("unknown scenario type: {0:?}")]
    UnknownScenarioType(String),
    /// Parameter is NaN or infinite and would be replaced by its default.
    #[error("scenario {scenario:?}: parameter {key:?} is not finite")]
    NonFiniteParameter { scenario: String, key: String },
    /// Parameter magnitude exceeds [`MAX_PARAMETER_MAGNITUDE`].
    #[error("scenario {scenario:?}: parameter {key:?} = {value} is out of range")]
    OutOfRangeParameter {
        scenario: String,
        key: String,
        value: f64,
    },
}

/// Validation errors for baseline figures.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Numeric field must be finite.
    #[error("baseline field {0} is not finite")]
    NonFinite(&'static str),
    /// Total cost is the divisor of the cost percentage and must be > 0.
    #[error("baseline total cost must be > 0")]
    NonPositiveCost,
}

/// Validate baseline figures.
pub fn validate_baseline(b: &BaselineMetrics) -> Result<(), ValidationError> {
    let fields = [
        ("total_cost", b.total_cost),
        ("inventory_level", b.inventory_level),
        ("service_level", b.service_level),
        ("capacity_utilization", b.capacity_utilization),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite(name));
        }
    }
    if b.total_cost <= 0.0 {
        return Err(ValidationError::NonPositiveCost);
    }
    Ok(())
}

/// Validate a single scenario: known tag and finite, in-range parameters.
pub fn validate_scenario(s: &ConfiguredScenario) -> Result<ScenarioKind, ScenarioError> {
    let kind = s.variable.parse::<ScenarioKind>()?;
    for (key, &value) in &s.parameters {
        if !value.is_finite() {
            return Err(ScenarioError::NonFiniteParameter {
                scenario: s.id.clone(),
                key: key.clone(),
            });
        }
        if value.abs() > MAX_PARAMETER_MAGNITUDE {
            return Err(ScenarioError::OutOfRangeParameter {
                scenario: s.id.clone(),
                key: key.clone(),
                value,
            });
        }
    }
    Ok(kind)
}

/// Validate a scenario list, stopping at the first problem.
pub fn validate_scenarios(scenarios: &[ConfiguredScenario]) -> Result<(), ScenarioError> {
    for s in scenarios {
        validate_scenario(s)?;
    }
    Ok(())
}
