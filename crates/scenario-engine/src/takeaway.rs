//! Key takeaway synthesis.

use crate::format::{count, percent};
use scenario_core::{ImpactMetrics, Opportunity, OpportunitySeverity, Risk, RiskSeverity};

/// Cost increase (%) above which the takeaway leads with cost.
pub const COST_WARNING_PCT: f64 = 5.0;

/// Pick one summary, first match wins: critical risks, then a cost increase
/// above [`COST_WARNING_PCT`], then high-severity opportunities, then the
/// balanced fallback.
pub(crate) fn synthesize(
    risks: &[Risk],
    opportunities: &[Opportunity],
    metrics: &ImpactMetrics,
    total_scenarios: usize,
) -> String {
    let critical = risks
        .iter()
        .filter(|r| r.severity == RiskSeverity::Critical)
        .count();
    let high = opportunities
        .iter()
        .filter(|o| o.severity == OpportunitySeverity::High)
        .count();

    if critical > 0 {
        format!(
            "{} identified. Immediate mitigation is required before proceeding with this \
             scenario plan.",
            count(critical, "critical risk", "critical risks")
        )
    } else if metrics.cost.change > COST_WARNING_PCT {
        format!(
            "Total cost rises {} under this scenario. Prioritize the {} to offset the \
             increase.",
            percent(metrics.cost.change),
            count(high, "high-impact opportunity", "high-impact opportunities")
        )
    } else if high > 0 {
        format!(
            "Significant optimization potential: {} can improve cost and service \
             performance.",
            count(high, "high-impact opportunity", "high-impact opportunities")
        )
    } else {
        format!(
            "Balanced scenario: {} analyzed with {} and manageable risk exposure.",
            count(total_scenarios, "scenario", "scenarios"),
            count(opportunities.len(), "opportunity", "opportunities")
        )
    }
}
