/*
 * SPDX-License-Identifier: Apache-2.0
 */

/// Category of the instrument that produced a metric.
///
/// Naming conventions may use this to influence the formatted name,
/// e.g. by appending a unit suffix to timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeterKind {
    Counter,
    Gauge,
    Timer,
    DistributionSummary,
    LongTaskTimer,
    Other,
}

impl MeterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeterKind::Counter => "counter",
            MeterKind::Gauge => "gauge",
            MeterKind::Timer => "timer",
            MeterKind::DistributionSummary => "distribution_summary",
            MeterKind::LongTaskTimer => "long_task_timer",
            MeterKind::Other => "other",
        }
    }
}
