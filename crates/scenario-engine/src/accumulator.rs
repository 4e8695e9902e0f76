//! In-progress state threaded through the calculators of one run.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use scenario_core::{BaselineMetrics, ImpactMetrics, Opportunity, Risk};

/// Which impact metric a delta applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Metric {
    Cost,
    Inventory,
    ServiceLevel,
    Capacity,
}

/// Summed contributions per metric.
///
/// Deltas are kept as `Decimal` so the sum is exact and therefore independent
/// of the order scenarios were processed in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct MetricDeltas {
    pub cost: Decimal,
    pub inventory: Decimal,
    pub service_level: Decimal,
    pub capacity: Decimal,
}

impl MetricDeltas {
    fn slot(&mut self, metric: Metric) -> &mut Decimal {
        match metric {
            Metric::Cost => &mut self.cost,
            Metric::Inventory => &mut self.inventory,
            Metric::ServiceLevel => &mut self.service_level,
            Metric::Capacity => &mut self.capacity,
        }
    }
}

pub(crate) struct Accumulator {
    pub risks: Vec<Risk>,
    pub opportunities: Vec<Opportunity>,
    pub deltas: MetricDeltas,
    pub can_meet_demand: Option<bool>,
    pub plants_at_capacity: Option<Vec<String>>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            risks: Vec::new(),
            opportunities: Vec::new(),
            deltas: MetricDeltas::default(),
            can_meet_demand: None,
            plants_at_capacity: None,
        }
    }

    /// Add to a metric. Never replaces earlier contributions.
    pub fn bump(&mut self, metric: Metric, delta: Decimal) {
        let slot = self.deltas.slot(metric);
        *slot = slot.saturating_add(delta);
    }

    pub fn risk(&mut self, risk: Risk) {
        self.risks.push(risk);
    }

    pub fn opportunity(&mut self, opportunity: Opportunity) {
        self.opportunities.push(opportunity);
    }

    /// Build the four metrics with `after` and `change` filled in.
    ///
    /// Cost change is a percentage of the baseline. The other three are
    /// absolute point differences.
    pub fn finalize(&self, baseline: &BaselineMetrics) -> ImpactMetrics {
        let mut m = ImpactMetrics::from_baseline(baseline);
        m.cost.after = shifted(m.cost.before, self.deltas.cost);
        m.inventory.after = shifted(m.inventory.before, self.deltas.inventory);
        m.service_level.after = shifted(m.service_level.before, self.deltas.service_level);
        m.capacity.after = shifted(m.capacity.before, self.deltas.capacity);

        m.cost.change = if m.cost.before != 0.0 {
            (m.cost.after - m.cost.before) / m.cost.before * 100.0
        } else {
            0.0
        };
        m.inventory.change = m.inventory.after - m.inventory.before;
        m.service_level.change = m.service_level.after - m.service_level.before;
        m.capacity.change = m.capacity.after - m.capacity.before;
        m
    }
}

fn shifted(before: f64, delta: Decimal) -> f64 {
    match Decimal::from_f64(before) {
        Some(b) => b.saturating_add(delta).to_f64().unwrap_or(before),
        None => before + delta.to_f64().unwrap_or(0.0),
    }
}
