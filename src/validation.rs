//! DTO validation.
//!
//! Named rules live in a process-wide [`ValidatorRegistry`] built once on
//! first use. Each rule is a pure predicate over a string field value. The
//! functions at the bottom of this module adapt registry rules to `garde`
//! custom validators so DTOs can reference them from their derive attributes.

use crate::error::{EdgexError, EdgexResult, ErrorKind};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub const NONE_EMPTY_STRING: &str = "edgex-dto-none-empty-string";
pub const RFC3986_UNRESERVED_CHARS: &str = "edgex-dto-rfc3986-unreserved-chars";
pub const NO_RESERVED_CHARS: &str = "edgex-dto-no-reserved-chars";
pub const UUID: &str = "edgex-dto-uuid";
pub const DURATION: &str = "edgex-dto-duration";
pub const INTERVAL_DATETIME: &str = "edgex-dto-interval-datetime";
pub const VALUE_TYPE: &str = "edgex-dto-value-type";
pub const URI: &str = "edgex-dto-uri";

/// Layout of interval start/end timestamps, e.g. `20240101T000000`
pub const INTERVAL_DATETIME_LAYOUT: &str = "%Y%m%dT%H%M%S";

const VALUE_TYPES: &[&str] = &[
    "Bool", "String", "Uint8", "Uint16", "Uint32", "Uint64", "Int8", "Int16", "Int32", "Int64",
    "Float32", "Float64", "Binary", "Object", "BoolArray", "StringArray", "Uint8Array",
    "Uint16Array", "Uint32Array", "Uint64Array", "Int8Array", "Int16Array", "Int32Array",
    "Int64Array", "Float32Array", "Float64Array", "ObjectArray",
];

static RFC3986_UNRESERVED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_~:;=]+$").expect("valid regex"));

static NO_RESERVED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^:/?#\[\]@!$&'()*+,;=]+$").expect("valid regex"));

static GO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(\.[0-9]+)?(ns|us|µs|ms|s|m|h))+$").expect("valid regex")
});

static REGISTRY: Lazy<ValidatorRegistry> = Lazy::new(ValidatorRegistry::with_defaults);

/// A validation rule: returns true when the value is acceptable
pub type Rule = fn(&str) -> bool;

/// Set of named validation rules
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    rules: HashMap<&'static str, Rule>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in rule
    pub fn with_defaults() -> Self {
        Self::new()
            .register(NONE_EMPTY_STRING, |v| !v.trim().is_empty())
            .register(RFC3986_UNRESERVED_CHARS, |v| RFC3986_UNRESERVED.is_match(v))
            .register(NO_RESERVED_CHARS, |v| NO_RESERVED.is_match(v))
            .register(UUID, |v| uuid::Uuid::parse_str(v).is_ok())
            .register(DURATION, |v| v == "0" || GO_DURATION.is_match(v))
            .register(INTERVAL_DATETIME, |v| {
                NaiveDateTime::parse_from_str(v, INTERVAL_DATETIME_LAYOUT).is_ok()
            })
            .register(VALUE_TYPE, |v| {
                VALUE_TYPES.iter().any(|t| t.eq_ignore_ascii_case(v))
            })
            .register(URI, |v| url::Url::parse(v).is_ok())
    }

    /// Add or replace a rule
    pub fn register(mut self, tag: &'static str, rule: Rule) -> Self {
        self.rules.insert(tag, rule);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Check `value` against each tag in order, failing on the first
    /// violated or unknown rule
    pub fn check(&self, tags: &[&str], value: &str) -> garde::Result {
        for tag in tags {
            match self.rules.get(*tag) {
                Some(rule) if rule(value) => continue,
                Some(_) => {
                    return Err(garde::Error::new(format!(
                        "value '{}' failed on the '{}' rule",
                        value, tag
                    )))
                }
                None => {
                    return Err(garde::Error::new(format!("unknown validation rule '{}'", tag)))
                }
            }
        }
        Ok(())
    }
}

/// The process-wide registry
pub fn registry() -> &'static ValidatorRegistry {
    &REGISTRY
}

/// Implemented by DTOs that can be checked before submission
pub trait Validator {
    /// Check every declared constraint, reporting all violations as one
    /// contract invalid error
    fn validate(&self) -> EdgexResult<()>;
}

/// Run the `garde` derive rules of a DTO
pub fn validate_struct<T>(value: &T) -> EdgexResult<()>
where
    T: garde::Validate,
    T::Context: Default,
{
    garde::Validate::validate(value).map_err(|report| {
        let message = report
            .iter()
            .map(|(path, error)| {
                let path = path.to_string();
                if path.is_empty() {
                    error.message().to_string()
                } else {
                    format!("{}: {}", path, error.message())
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        EdgexError::contract_invalid(message)
    })
}

/// Validate a batch of requests, failing on the first invalid item
pub fn validate_all<T: Validator>(requests: &[T]) -> EdgexResult<()> {
    for (i, request) in requests.iter().enumerate() {
        request
            .validate()
            .map_err(|e| e.wrap(format!("request {} of {} is invalid", i + 1, requests.len())))?;
    }
    Ok(())
}

/// Parse a request DTO from JSON and validate it.
///
/// Both malformed JSON and constraint violations are reported as
/// [`ErrorKind::ContractInvalid`].
pub fn from_json<T>(bytes: &[u8]) -> EdgexResult<T>
where
    T: DeserializeOwned + Validator,
{
    let value: T = serde_json::from_slice(bytes).map_err(|e| {
        EdgexError::with_source(
            ErrorKind::ContractInvalid,
            "failed to unmarshal request body as JSON",
            e,
        )
    })?;
    value.validate()?;
    Ok(value)
}

// garde adapters. Field types are taken by reference exactly as declared on
// the DTOs.

fn check(tags: &[&str], value: &str) -> garde::Result {
    registry().check(tags, value)
}

fn check_present(tags: &[&str], value: &Option<String>) -> garde::Result {
    match value {
        Some(v) => check(tags, v),
        None => Ok(()),
    }
}

#[allow(clippy::ptr_arg)]
pub fn non_empty(value: &String, _ctx: &()) -> garde::Result {
    check(&[NONE_EMPTY_STRING], value)
}

#[allow(clippy::ptr_arg)]
pub fn unreserved_name(value: &String, _ctx: &()) -> garde::Result {
    check(&[NONE_EMPTY_STRING, RFC3986_UNRESERVED_CHARS], value)
}

#[allow(clippy::ptr_arg)]
pub fn no_reserved_name(value: &String, _ctx: &()) -> garde::Result {
    check(&[NONE_EMPTY_STRING, NO_RESERVED_CHARS], value)
}

#[allow(clippy::ptr_arg)]
pub fn empty_or_uuid(value: &String, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Ok(());
    }
    check(&[UUID], value)
}

#[allow(clippy::ptr_arg)]
pub fn empty_or_unreserved(value: &String, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Ok(());
    }
    check(&[RFC3986_UNRESERVED_CHARS], value)
}

#[allow(clippy::ptr_arg)]
pub fn duration(value: &String, _ctx: &()) -> garde::Result {
    check(&[DURATION], value)
}

#[allow(clippy::ptr_arg)]
pub fn empty_or_interval_datetime(value: &String, _ctx: &()) -> garde::Result {
    if value.is_empty() {
        return Ok(());
    }
    check(&[INTERVAL_DATETIME], value)
}

#[allow(clippy::ptr_arg)]
pub fn value_type(value: &String, _ctx: &()) -> garde::Result {
    check(&[VALUE_TYPE], value)
}

#[allow(clippy::ptr_arg)]
pub fn uri(value: &String, _ctx: &()) -> garde::Result {
    check(&[URI], value)
}

pub fn opt_unreserved_name(value: &Option<String>, _ctx: &()) -> garde::Result {
    check_present(&[NONE_EMPTY_STRING, RFC3986_UNRESERVED_CHARS], value)
}

pub fn opt_no_reserved_name(value: &Option<String>, _ctx: &()) -> garde::Result {
    check_present(&[NONE_EMPTY_STRING, NO_RESERVED_CHARS], value)
}

pub fn opt_uuid(value: &Option<String>, _ctx: &()) -> garde::Result {
    check_present(&[UUID], value)
}

pub fn opt_duration(value: &Option<String>, _ctx: &()) -> garde::Result {
    check_present(&[DURATION], value)
}

pub fn opt_interval_datetime(value: &Option<String>, _ctx: &()) -> garde::Result {
    match value.as_deref() {
        Some("") | None => Ok(()),
        Some(v) => check(&[INTERVAL_DATETIME], v),
    }
}

pub fn opt_uri(value: &Option<String>, _ctx: &()) -> garde::Result {
    check_present(&[URI], value)
}

/// Either an id or a name must identify the target of an update
pub fn require_id_or_name(id: &Option<String>, name: &Option<String>) -> EdgexResult<()> {
    if id.is_none() && name.is_none() {
        return Err(EdgexError::contract_invalid(
            "either id or name must be provided",
        ));
    }
    Ok(())
}
