//! One calculator per scenario type.
//!
//! Every calculator reads its parameters through [`Params`], appends at most
//! one risk and exactly one opportunity, and adds deltas to the metrics. No
//! calculator reads another's contribution.

use crate::accumulator::Accumulator;
use crate::config::ParameterPolicy;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use scenario_core::{ParameterSpec, Parameters, ScenarioKind, MAX_PARAMETER_MAGNITUDE};

pub(crate) mod demand;
mod inventory;
mod logistics;
mod production;
mod supply;

/// Parameter lookup that applies the configured defaulting policy.
pub(crate) struct Params<'a> {
    values: &'a Parameters,
    policy: ParameterPolicy,
}

impl<'a> Params<'a> {
    pub fn new(values: &'a Parameters, policy: ParameterPolicy) -> Self {
        Self { values, policy }
    }

    /// Value for `spec`, or its default when unset.
    ///
    /// Non-finite values count as unset. Huge finite values are returned as
    /// given so thresholds see them.
    pub fn get(&self, spec: ParameterSpec) -> f64 {
        match self.values.get(spec.key).copied() {
            None => spec.default,
            Some(v) if !v.is_finite() => spec.default,
            Some(v) if v == 0.0 && self.policy == ParameterPolicy::Falsy => spec.default,
            Some(v) => v,
        }
    }
}

/// Exact `value * coef / 10^scale` on the clamped value.
pub(crate) fn times(value: f64, coef: i64, scale: u32) -> Decimal {
    dec(value).saturating_mul(Decimal::new(coef, scale))
}

/// `value` as a `Decimal`, clamped to `MAX_PARAMETER_MAGNITUDE`.
pub(crate) fn dec(value: f64) -> Decimal {
    let clamped = value.clamp(-MAX_PARAMETER_MAGNITUDE, MAX_PARAMETER_MAGNITUDE);
    Decimal::from_f64(clamped).unwrap_or(Decimal::ZERO)
}

/// Run the calculator for `kind`.
pub(crate) fn apply(kind: ScenarioKind, params: &Params<'_>, acc: &mut Accumulator) {
    match kind {
        ScenarioKind::SupplierFailure => supply::supplier_failure(params, acc),
        ScenarioKind::MaterialFlowDisruption => supply::material_flow_disruption(params, acc),
        ScenarioKind::PlannedShutdown => production::planned_shutdown(params, acc),
        ScenarioKind::CapacityAdjustment => production::capacity_adjustment(params, acc),
        ScenarioKind::SeasonalSpike => demand::seasonal_spike(params, acc),
        ScenarioKind::RegionalDemandDrop => demand::regional_demand_drop(params, acc),
        ScenarioKind::SafetyStockAdjustment => inventory::safety_stock_adjustment(params, acc),
        ScenarioKind::CarrierCapacity => logistics::carrier_capacity(params, acc),
        ScenarioKind::FreightCostVariation => logistics::freight_cost_variation(params, acc),
        ScenarioKind::MultiStopOptimization => logistics::multi_stop_optimization(params, acc),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Run one calculator on the given parameters with the default policy.
    pub fn run(kind: ScenarioKind, pairs: &[(&str, f64)]) -> Accumulator {
        let values: Parameters = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        let mut acc = Accumulator::new();
        apply(
            kind,
            &Params::new(&values, ParameterPolicy::Presence),
            &mut acc,
        );
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::run;
    use super::*;
    use scenario_core::catalog::params::{CARRIER_REDUCTION, STOCK_CHANGE, SUPPLIER_SEVERITY};

    #[test]
    fn presence_policy_keeps_explicit_zero() {
        let values: Parameters = [("stockChange".to_string(), 0.0)].into_iter().collect();
        let p = Params::new(&values, ParameterPolicy::Presence);
        assert_eq!(p.get(STOCK_CHANGE), 0.0);
    }

    #[test]
    fn falsy_policy_replaces_zero() {
        let values: Parameters = [("stockChange".to_string(), 0.0)].into_iter().collect();
        let p = Params::new(&values, ParameterPolicy::Falsy);
        assert_eq!(p.get(STOCK_CHANGE), STOCK_CHANGE.default);
    }

    #[test]
    fn missing_and_nan_take_default() {
        let empty = Parameters::new();
        assert_eq!(
            Params::new(&empty, ParameterPolicy::Presence).get(CARRIER_REDUCTION),
            20.0
        );
        let nan: Parameters = [("capacityReduction".to_string(), f64::NAN)]
            .into_iter()
            .collect();
        assert_eq!(
            Params::new(&nan, ParameterPolicy::Presence).get(CARRIER_REDUCTION),
            20.0
        );
    }

    #[test]
    fn huge_values_are_used_not_defaulted() {
        let values: Parameters = [("severity".to_string(), 1.0e30)].into_iter().collect();
        let p = Params::new(&values, ParameterPolicy::Presence);
        assert_eq!(p.get(SUPPLIER_SEVERITY), 1.0e30);
    }

    #[test]
    fn dec_clamps_out_of_range_magnitudes() {
        let cap = Decimal::from_f64(MAX_PARAMETER_MAGNITUDE).unwrap();
        assert_eq!(dec(1.0e30), cap);
        assert_eq!(dec(-1.0e30), -cap);
        assert_eq!(dec(f64::MAX), cap);
        // the largest allowed value times the largest coefficient stays exact
        assert_eq!(times(MAX_PARAMETER_MAGNITUDE, 8500, 0), cap * Decimal::new(8500, 0));
    }

    #[test]
    fn every_calculator_emits_exactly_one_opportunity() {
        for kind in ScenarioKind::ALL {
            let acc = run(kind, &[]);
            assert_eq!(acc.opportunities.len(), 1, "{kind}");
            assert!(acc.risks.len() <= 1, "{kind}");
        }
    }

    #[test]
    fn times_is_exact() {
        assert_eq!(times(30.0, 2000, 0), Decimal::new(60_000, 0));
        assert_eq!(times(50.0, 15, 2), Decimal::new(75, 1));
    }
}
