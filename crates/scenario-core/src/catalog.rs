//! Catalog of known scenario types, their tags and their parameters.

use crate::ScenarioError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A numeric knob a scenario type reads, with the value used when it is unset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Key in [`crate::Parameters`], e.g. "severity".
    pub key: &'static str,
    /// Human-readable name for configuration forms.
    pub label: &'static str,
    /// Display unit, e.g. "%" or "hours".
    pub unit: &'static str,
    /// Value used when the key is unset.
    pub default: f64,
}

/// Parameter specs for every scenario type.
pub mod params {
    use super::ParameterSpec;

    pub const SUPPLIER_SEVERITY: ParameterSpec = ParameterSpec {
        key: "severity",
        label: "Disruption severity",
        unit: "%",
        default: 50.0,
    };
    pub const SUPPLIER_DURATION: ParameterSpec = ParameterSpec {
        key: "duration",
        label: "Outage duration",
        unit: "days",
        default: 14.0,
    };
    pub const FLOW_DOWNTIME: ParameterSpec = ParameterSpec {
        key: "downtime",
        label: "Line downtime",
        unit: "hours",
        default: 24.0,
    };
    pub const SHUTDOWN_HOURS: ParameterSpec = ParameterSpec {
        key: "downtimeHours",
        label: "Shutdown length",
        unit: "hours",
        default: 72.0,
    };
    pub const NEW_CAPACITY: ParameterSpec = ParameterSpec {
        key: "newCapacity",
        label: "New capacity",
        unit: "% of current",
        default: 110.0,
    };
    pub const DEMAND_INCREASE: ParameterSpec = ParameterSpec {
        key: "demandIncrease",
        label: "Demand increase",
        unit: "%",
        default: 25.0,
    };
    pub const DEMAND_DECREASE: ParameterSpec = ParameterSpec {
        key: "demandDecrease",
        label: "Demand decrease",
        unit: "%",
        default: 15.0,
    };
    pub const STOCK_CHANGE: ParameterSpec = ParameterSpec {
        key: "stockChange",
        label: "Safety stock change",
        unit: "%",
        default: 20.0,
    };
    pub const CARRIER_REDUCTION: ParameterSpec = ParameterSpec {
        key: "capacityReduction",
        label: "Carrier capacity reduction",
        unit: "%",
        default: 20.0,
    };
    pub const FREIGHT_CHANGE: ParameterSpec = ParameterSpec {
        key: "costChange",
        label: "Freight rate change",
        unit: "%",
        default: 10.0,
    };
    pub const STOPS_PER_ROUTE: ParameterSpec = ParameterSpec {
        key: "stopsPerRoute",
        label: "Stops per route",
        unit: "stops",
        default: 4.0,
    };
    pub const ROUTE_EFFICIENCY: ParameterSpec = ParameterSpec {
        key: "routeEfficiency",
        label: "Route efficiency gain",
        unit: "%",
        default: 15.0,
    };
}

/// Grouping used by the configuration UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScenarioCategory {
    /// Inbound suppliers and material flow.
    Supply,
    /// Plant downtime and capacity.
    Production,
    /// Customer demand shifts.
    Demand,
    /// Stock buffers.
    Inventory,
    /// Carriers, freight rates and routing.
    Logistics,
}

/// Every scenario type the engine has a calculator for.
///
/// Two types answer to a pair of tags: `Planned Maintenance` and
/// `Planned Shutdown` both resolve to [`ScenarioKind::PlannedShutdown`], and
/// `Seasonal Spike` and `Peak Demand` both resolve to
/// [`ScenarioKind::SeasonalSpike`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScenarioKind {
    /// A supplier stops delivering for a while.
    SupplierFailure,
    /// Material stops moving between lines.
    MaterialFlowDisruption,
    /// A plant is taken offline on purpose.
    PlannedShutdown,
    /// Capacity moves to a new percentage of today's.
    CapacityAdjustment,
    /// Demand rises above plan.
    SeasonalSpike,
    /// Demand in one region falls.
    RegionalDemandDrop,
    /// Safety stock is raised or lowered.
    SafetyStockAdjustment,
    /// Contracted carriers cover fewer loads.
    CarrierCapacity,
    /// Freight rates move up or down.
    FreightCostVariation,
    /// Deliveries are combined into multi-stop routes.
    MultiStopOptimization,
}

impl ScenarioKind {
    /// Every kind, in catalog order.
    pub const ALL: [ScenarioKind; 10] = [
        ScenarioKind::SupplierFailure,
        ScenarioKind::MaterialFlowDisruption,
        ScenarioKind::PlannedShutdown,
        ScenarioKind::CapacityAdjustment,
        ScenarioKind::SeasonalSpike,
        ScenarioKind::RegionalDemandDrop,
        ScenarioKind::SafetyStockAdjustment,
        ScenarioKind::CarrierCapacity,
        ScenarioKind::FreightCostVariation,
        ScenarioKind::MultiStopOptimization,
    ];

    /// All tags accepted for this type. The first one is canonical.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            ScenarioKind::SupplierFailure => &["Supplier Failure"],
            ScenarioKind::MaterialFlowDisruption => &["Material Flow Disruption"],
            ScenarioKind::PlannedShutdown => &["Planned Shutdown", "Planned Maintenance"],
            ScenarioKind::CapacityAdjustment => &["Capacity Adjustment"],
            ScenarioKind::SeasonalSpike => &["Seasonal Spike", "Peak Demand"],
            ScenarioKind::RegionalDemandDrop => &["Regional Demand Drop"],
            ScenarioKind::SafetyStockAdjustment => &["Safety Stock Adjustment"],
            ScenarioKind::CarrierCapacity => &["Carrier Capacity"],
            ScenarioKind::FreightCostVariation => &["Freight Cost Variation"],
            ScenarioKind::MultiStopOptimization => &["Multi-Stop Optimization"],
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tags()[0]
    }

    /// Resolve a tag by exact, case-sensitive match.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.tags().iter().any(|t| *t == tag))
    }

    pub fn category(&self) -> ScenarioCategory {
        match self {
            ScenarioKind::SupplierFailure | ScenarioKind::MaterialFlowDisruption => {
                ScenarioCategory::Supply
            }
            ScenarioKind::PlannedShutdown | ScenarioKind::CapacityAdjustment => {
                ScenarioCategory::Production
            }
            ScenarioKind::SeasonalSpike | ScenarioKind::RegionalDemandDrop => {
                ScenarioCategory::Demand
            }
            ScenarioKind::SafetyStockAdjustment => ScenarioCategory::Inventory,
            ScenarioKind::CarrierCapacity
            | ScenarioKind::FreightCostVariation
            | ScenarioKind::MultiStopOptimization => ScenarioCategory::Logistics,
        }
    }

    /// Parameters this type reads, in the order a form should show them.
    pub fn parameters(&self) -> &'static [ParameterSpec] {
        use params::*;
        match self {
            ScenarioKind::SupplierFailure => &[SUPPLIER_SEVERITY, SUPPLIER_DURATION],
            ScenarioKind::MaterialFlowDisruption => &[FLOW_DOWNTIME],
            ScenarioKind::PlannedShutdown => &[SHUTDOWN_HOURS],
            ScenarioKind::CapacityAdjustment => &[NEW_CAPACITY],
            ScenarioKind::SeasonalSpike => &[DEMAND_INCREASE],
            ScenarioKind::RegionalDemandDrop => &[DEMAND_DECREASE],
            ScenarioKind::SafetyStockAdjustment => &[STOCK_CHANGE],
            ScenarioKind::CarrierCapacity => &[CARRIER_REDUCTION],
            ScenarioKind::FreightCostVariation => &[FREIGHT_CHANGE],
            ScenarioKind::MultiStopOptimization => &[STOPS_PER_ROUTE, ROUTE_EFFICIENCY],
        }
    }

    /// Known types in a category, in catalog order.
    pub fn in_category(category: ScenarioCategory) -> impl Iterator<Item = ScenarioKind> {
        Self::ALL
            .into_iter()
            .filter(move |k| k.category() == category)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ScenarioError::UnknownScenarioType(s.to_string()))
    }
}
