use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Feature name → signed attribution value for one compound.
///
/// Backed by a `BTreeMap` so iteration (and therefore floating-point
/// summation order) is identical across calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributionMap(BTreeMap<String, f64>);

impl AttributionMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, feature: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(feature.into(), value)
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.0.get(feature).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for AttributionMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Classifies feature names as cultural (traditional-knowledge) evidence.
///
/// A feature is cultural when its name is listed exactly or starts with one of
/// the configured prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CulturalFeatureSet {
    pub names: BTreeSet<String>,
    pub prefixes: Vec<String>,
}

impl CulturalFeatureSet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            prefixes: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn is_cultural(&self, feature: &str) -> bool {
        self.names.contains(feature) || self.prefixes.iter().any(|p| feature.starts_with(p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.prefixes.is_empty()
    }
}
