//! Inventory scenarios: safety stock changes.

use super::{times, Params};
use crate::accumulator::{Accumulator, Metric};
use crate::format::usd;
use rust_decimal::Decimal;
use scenario_core::catalog::params::STOCK_CHANGE;
use scenario_core::{Opportunity, OpportunityKind, OpportunitySeverity, Risk, RiskSeverity};

/// `stockChange` is signed: positive raises safety stock, negative lowers it.
pub(crate) fn safety_stock_adjustment(p: &Params<'_>, acc: &mut Accumulator) {
    let change = p.get(STOCK_CHANGE);
    let cost = times(change, 1800, 0);

    if change > 0.0 {
        acc.risk(Risk {
            severity: if change > 30.0 {
                RiskSeverity::Medium
            } else {
                RiskSeverity::Low
            },
            title: "Working Capital Tie-Up".into(),
            description: format!(
                "Raising safety stock by {change:.0}% locks cash into slow-moving \
                 inventory."
            ),
            mitigation: "Limit the increase to A-class items with volatile demand.".into(),
            impact: format!("{} added carrying cost", usd(cost)),
        });
    } else if change < 0.0 {
        acc.risk(Risk {
            severity: if change < -20.0 {
                RiskSeverity::High
            } else {
                RiskSeverity::Medium
            },
            title: "Stockout Exposure".into(),
            description: format!(
                "Cutting safety stock by {:.0}% leaves less cover for forecast error and \
                 late deliveries.",
                change.abs()
            ),
            mitigation: "Tighten replenishment lead times before lowering buffers.".into(),
            impact: "Higher stockout probability on volatile SKUs".into(),
        });
    }

    let opportunity = if change < 0.0 {
        Opportunity {
            severity: OpportunitySeverity::Medium,
            title: "Working Capital Release".into(),
            description: "Lower buffers free cash that can fund supplier programs.".into(),
            savings: usd(-cost),
            link: "/inventory".into(),
            kind: OpportunityKind::CostSaving,
        }
    } else {
        Opportunity {
            severity: OpportunitySeverity::Medium,
            title: "Dynamic Safety Stock Policy".into(),
            description: "Sizing buffers per SKU from demand variability holds service \
                          with less stock than a flat increase."
                .into(),
            savings: usd(cost * Decimal::new(40, 2)),
            link: "/inventory".into(),
            kind: OpportunityKind::CostSaving,
        }
    };
    acc.opportunity(opportunity);

    acc.bump(Metric::Cost, cost);
    acc.bump(Metric::Inventory, times(change, 3, 1));
    acc.bump(Metric::ServiceLevel, times(change, 5, 2));
}
