use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, PResult};

/// Tree-shaped runtime data: numbers at the leaves, named children inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Map(BTreeMap<String, Value>),
}

impl Default for Value {
    fn default() -> Self {
        Self::Map(BTreeMap::new())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Supplies values for dotted variable paths during evaluation.
pub trait Context {
    fn resolve(&self, path: &str) -> PResult<f64>;
}

impl Context for Value {
    fn resolve(&self, path: &str) -> PResult<f64> {
        let mut current = self;

        for segment in path.split('.') {
            current = match current {
                Value::Map(entries) => entries.get(segment),
                Value::Number(_) => None,
            }
            .ok_or_else(|| ErrorKind::UnknownVariable {
                segment: segment.to_string(),
                path: path.to_string(),
            })?;
        }

        match current {
            Value::Number(v) => Ok(*v),
            Value::Map(_) => Err(ErrorKind::NotANumber(path.to_string())),
        }
    }
}

impl<C: Context + ?Sized> Context for &C {
    fn resolve(&self, path: &str) -> PResult<f64> {
        (**self).resolve(path)
    }
}
