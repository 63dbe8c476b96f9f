/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::str::FromStr;

use thiserror::Error;

use crate::MeterKind;

mod dot;
pub use dot::DotNamingConvention;

mod snake;
pub use snake::SnakeCaseNamingConvention;

mod signalfx;
pub use signalfx::SignalfxNamingConvention;

/// Baseline formatting strategy for metric names and tag components.
///
/// Every operation is total over all input strings, pure and synchronous.
/// Implementations never fail and never panic, degenerate input is coerced
/// rather than rejected.
pub trait NamingConvention {
    fn format_name(&self, name: &str, kind: MeterKind, unit: Option<&str>) -> String;

    fn format_tag_key(&self, key: &str) -> String {
        key.to_string()
    }

    fn format_tag_value(&self, value: &str) -> String {
        value.to_string()
    }
}

#[derive(Debug, Error)]
pub enum ConventionKindError {
    #[error("unsupported naming convention: {0}")]
    Unsupported(String),
}

/// Selector for the built-in baseline conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConventionKind {
    Dot,
    SnakeCase,
}

impl ConventionKind {
    pub fn build(&self) -> Box<dyn NamingConvention + Send + Sync> {
        match self {
            ConventionKind::Dot => Box::new(DotNamingConvention),
            ConventionKind::SnakeCase => Box::new(SnakeCaseNamingConvention),
        }
    }
}

impl FromStr for ConventionKind {
    type Err = ConventionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dot" => Ok(ConventionKind::Dot),
            "snake_case" | "snake" => Ok(ConventionKind::SnakeCase),
            _ => Err(ConventionKindError::Unsupported(s.to_string())),
        }
    }
}
