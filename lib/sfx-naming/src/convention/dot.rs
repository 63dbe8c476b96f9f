/*
 * SPDX-License-Identifier: Apache-2.0
 */

use super::NamingConvention;
use crate::MeterKind;

/// The standard dot-separated naming convention.
///
/// Metric names are modeled as dot-delimited node paths already, so each
/// operation passes its input through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotNamingConvention;

impl NamingConvention for DotNamingConvention {
    fn format_name(&self, name: &str, _kind: MeterKind, _unit: Option<&str>) -> String {
        name.to_string()
    }
}
