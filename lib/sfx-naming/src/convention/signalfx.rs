/*
 * SPDX-License-Identifier: Apache-2.0
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{DotNamingConvention, NamingConvention};
use crate::MeterKind;
use crate::escape::escape_json;

const NAME_MAX_LENGTH: usize = 256;
const TAG_KEY_MAX_LENGTH: usize = 128;
const TAG_VALUE_MAX_LENGTH: usize = 256;

// Anchored, so replace_all can only ever remove the match at the very
// start. Repeated prefixes are stripped one layer deep only.
static START_UNDERSCORE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^_").unwrap());
static RESERVED_PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^sf_").unwrap());

fn truncate_chars(mut s: String, max: usize, field: &str) -> String {
    if let Some((offset, _)) = s.char_indices().nth(max) {
        debug!("{field} truncated to {max} chars");
        s.truncate(offset);
    }
    s
}

/// SignalFx naming criteria applied on top of a baseline convention.
///
/// See <https://dev.splunk.com/observability/docs/datamodel/metrics_dimensions>
/// for the backend's criteria for metric and dimension names and values.
pub struct SignalfxNamingConvention {
    delegate: Box<dyn NamingConvention + Send + Sync>,
}

impl SignalfxNamingConvention {
    pub fn new(delegate: Box<dyn NamingConvention + Send + Sync>) -> Self {
        SignalfxNamingConvention { delegate }
    }
}

impl Default for SignalfxNamingConvention {
    fn default() -> Self {
        SignalfxNamingConvention::new(Box::new(DotNamingConvention))
    }
}

impl NamingConvention for SignalfxNamingConvention {
    // metric name can be any non-empty UTF-8 string, at most 256 chars
    fn format_name(&self, name: &str, kind: MeterKind, unit: Option<&str>) -> String {
        let escaped = escape_json(name);
        let formatted = self.delegate.format_name(&escaped, kind, unit);
        truncate_chars(formatted, NAME_MAX_LENGTH, "metric name")
    }

    // 1. has a maximum length of 128 chars
    // 2. may not start with _ or sf_
    // 3. must start with a letter, the rest matches [a-zA-Z0-9_-]*
    fn format_tag_key(&self, key: &str) -> String {
        let key = self.delegate.format_tag_key(key);

        let key = START_UNDERSCORE_PATTERN.replace_all(&key, ""); // 2
        let key = RESERVED_PREFIX_PATTERN.replace_all(&key, ""); // 2

        let mut key = key.into_owned();
        if !key.starts_with(|c: char| c.is_ascii_alphabetic()) {
            key.insert(0, 'a'); // 3
        }

        truncate_chars(key, TAG_KEY_MAX_LENGTH, "tag key") // 1
    }

    // dimension value can be any non-empty UTF-8 string, at most 256 chars
    fn format_tag_value(&self, value: &str) -> String {
        let value = self.delegate.format_tag_value(value);
        let escaped = escape_json(&value).into_owned();
        truncate_chars(escaped, TAG_VALUE_MAX_LENGTH, "tag value")
    }
}
