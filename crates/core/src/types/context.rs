//! Caller-supplied correlation context.
//!
//! [`Baggage`] is the explicit, call-scoped stand-in for ambient propagation:
//! the transport layer builds it from the incoming `baggage` header and hands
//! it to the evaluator alongside the request. Nothing in the workspace stores
//! it beyond a single call.
//!
//! Header decoding is delegated to the OpenTelemetry W3C baggage propagator,
//! which percent-decodes keys and values and enforces the W3C limits on
//! member count and size.

use std::collections::BTreeMap;

use opentelemetry::baggage::BaggageExt;
use opentelemetry::propagation::{Extractor, TextMapPropagator};
use opentelemetry::Context;
use opentelemetry_sdk::propagation::BaggagePropagator;

/// Baggage key under which callers propagate the client identifier.
pub const CLIENT_ID_KEY: &str = "client.Id";

/// Header name the W3C propagator reads.
const BAGGAGE_HEADER: &str = "baggage";

/// Presents a single raw header value to the propagator.
struct HeaderValue<'a>(&'a str);

impl Extractor for HeaderValue<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        key.eq_ignore_ascii_case(BAGGAGE_HEADER).then_some(self.0)
    }

    fn keys(&self) -> Vec<&str> {
        vec![BAGGAGE_HEADER]
    }
}

/// Read-only key/value correlation data for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Baggage {
    entries: BTreeMap<String, String>,
}

impl Baggage {
    /// Empty baggage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a W3C `baggage` header value (`k1=v1;prop, k2=v2`).
    ///
    /// Keys and values are percent-decoded and member properties are
    /// dropped. Malformed members, members with an empty key, and members
    /// beyond the W3C limits are skipped. Extraction starts from an empty
    /// OpenTelemetry context, so no ambient baggage leaks in.
    pub fn from_header(value: &str) -> Self {
        let cx = BaggagePropagator::new()
            .extract_with_context(&Context::new(), &HeaderValue(value));

        let entries = cx
            .baggage()
            .iter()
            .filter(|(key, _)| !key.as_str().trim().is_empty())
            .map(|(key, (value, _metadata))| (key.as_str().to_string(), value.as_str().into_owned()))
            .collect();
        Self { entries }
    }

    /// Builder-style entry setter.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The propagated client identifier, if any.
    pub fn client_id(&self) -> Option<&str> {
        self.get(CLIENT_ID_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
