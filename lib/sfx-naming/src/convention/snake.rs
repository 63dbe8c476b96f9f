/*
 * SPDX-License-Identifier: Apache-2.0
 */

use super::NamingConvention;
use crate::MeterKind;

/// Rewrites the dot-separated name hierarchy into snake case.
///
/// Tag values carry arbitrary text and are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct SnakeCaseNamingConvention;

impl NamingConvention for SnakeCaseNamingConvention {
    fn format_name(&self, name: &str, _kind: MeterKind, _unit: Option<&str>) -> String {
        name.replace('.', "_")
    }

    fn format_tag_key(&self, key: &str) -> String {
        key.replace('.', "_")
    }
}
