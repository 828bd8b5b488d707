//! Deterministic cache key derivation.
//!
//! A filter descriptor is normalized into a sorted field map in which every
//! absent or empty field carries its default, so descriptors that only differ
//! in field order or in omitted-vs-default values hash to the same digest.

use std::{collections::BTreeMap, fmt::Display};

use sha2::{Digest, Sha256};

pub const KEY_DELIMITER: &str = ":";

/// 128 bits of SHA-256, rendered as 32 hex characters.
const DIGEST_BYTES: usize = 16;

pub trait FilterDescriptor {
    fn normalize(&self) -> NormalizedDescriptor;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDescriptor {
    fields: BTreeMap<&'static str, String>,
}

impl NormalizedDescriptor {
    pub fn new() -> Self { Self::default() }

    /// Records `name`, substituting `default` when the value is absent or
    /// renders as an empty string.
    pub fn field<V: Display>(
        mut self, name: &'static str, value: Option<V>, default: &str,
    ) -> Self {
        let value = value
            .map(|v| v.to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string());
        self.fields.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// `name=value` pairs in lexicographic field order joined by `&`, with
    /// each value JSON-quoted so no value can forge a delimiter.
    pub fn canonical(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!("{}={}", name, serde_json::Value::from(value.as_str()))
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn digest(&self) -> String {
        let hash = Sha256::digest(self.canonical().as_bytes());
        hex::encode(&hash[..DIGEST_BYTES])
    }
}

impl FilterDescriptor for NormalizedDescriptor {
    fn normalize(&self) -> NormalizedDescriptor { self.clone() }
}

pub fn hash_filters<F>(filters: &F) -> String
where
    F: FilterDescriptor + ?Sized,
{
    filters.normalize().digest()
}

pub fn build_key(
    resource: &str, operation: &str, identifier: impl Display,
) -> String {
    format!(
        "{resource}{KEY_DELIMITER}{operation}{KEY_DELIMITER}{identifier}"
    )
}

/// Wildcard reaching every key written under `resource`.
pub fn namespace_pattern(resource: &str) -> String {
    format!("{resource}{KEY_DELIMITER}*")
}
