/*
 * SPDX-License-Identifier: Apache-2.0
 */

mod meter;
pub use meter::MeterKind;

mod escape;
pub use escape::escape_json;

mod convention;
pub use convention::{
    ConventionKind, ConventionKindError, DotNamingConvention, NamingConvention,
    SignalfxNamingConvention, SnakeCaseNamingConvention,
};
