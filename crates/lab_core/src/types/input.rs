//! Immutable parameter snapshot.

use std::collections::BTreeMap;

use super::param::{ParamId, ParamSpec, ParamValue};

/// Snapshot of the collector's widget values for one evaluation.
///
/// Built once per interaction and passed by reference into a module
/// handler; handlers never mutate it. Keys are ordered so that two
/// snapshots with the same content serialise identically.
///
/// # Examples
/// ```
/// use lab_core::types::{ParamId, ParamValue, ScenarioInput};
///
/// let input = ScenarioInput::new()
///     .with(ParamId::Near, ParamValue::Number(22000.0))
///     .with(ParamId::Far, ParamValue::Number(22150.0));
/// assert_eq!(input.len(), 2);
/// assert_eq!(input.get(ParamId::Far), Some(&ParamValue::Number(22150.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScenarioInput {
    values: BTreeMap<ParamId, ParamValue>,
}

impl ScenarioInput {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot holding the collector defaults of `specs`.
    pub fn from_defaults(specs: &[ParamSpec]) -> Self {
        specs
            .iter()
            .fold(Self::new(), |acc, spec| acc.with(spec.id, spec.default.to_value()))
    }

    /// Returns the snapshot with `id` set to `value`, replacing any previous value.
    #[must_use]
    pub fn with(mut self, id: ParamId, value: ParamValue) -> Self {
        self.values.insert(id, value);
        self
    }

    /// Shorthand for [`ScenarioInput::with`] with a numeric value.
    #[must_use]
    pub fn with_number(self, id: ParamId, value: f64) -> Self {
        self.with(id, ParamValue::Number(value))
    }

    /// Shorthand for [`ScenarioInput::with`] with a categorical value.
    #[must_use]
    pub fn with_choice(self, id: ParamId, value: impl Into<String>) -> Self {
        self.with(id, ParamValue::Choice(value.into()))
    }

    /// Returns the value of `id`, if present.
    pub fn get(&self, id: ParamId) -> Option<&ParamValue> {
        self.values.get(&id)
    }

    /// Returns whether `id` is present.
    pub fn contains(&self, id: ParamId) -> bool {
        self.values.contains_key(&id)
    }

    /// Number of parameters in the snapshot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, &ParamValue)> {
        self.values.iter().map(|(id, v)| (*id, v))
    }
}

impl FromIterator<(ParamId, ParamValue)> for ScenarioInput {
    fn from_iter<I: IntoIterator<Item = (ParamId, ParamValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
