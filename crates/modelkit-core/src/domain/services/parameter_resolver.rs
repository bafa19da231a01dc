//! Overload selection and argument materialization

use std::collections::{HashMap, HashSet};

use modelkit_domain::{DomainError, Parametric};

use crate::domain::entities::{OverloadSet, ParameterGroup};
use crate::domain::ports::DomainTypeLookup;
use crate::domain::value_objects::{ParameterValueData, Value};
use crate::error::Result;

/// Parameter names of one candidate group
pub trait Signature {
    fn parameter_names(&self) -> Vec<&str>;
}

impl<T: Parametric> Signature for ParameterGroup<T> {
    fn parameter_names(&self) -> Vec<&str> {
        ParameterGroup::parameter_names(self).collect()
    }
}

impl<S: AsRef<str>> Signature for Vec<S> {
    fn parameter_names(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

/// Choose the group that fits the supplied argument names best.
///
/// 1. A lone group is always chosen.
/// 2. A group whose parameters are exactly the supplied names wins, if it is
///    the only such group.
/// 3. Otherwise the group matching the most supplied names wins.
/// 4. Ties go to the group with the fewest unmatched parameters; groups are
///    visited by descending parameter count and the first one seen keeps a
///    tie.
///
/// Returns `None` only when there are no groups.
pub fn select_group<S: Signature>(groups: &[S], supplied: &HashSet<&str>) -> Option<usize> {
    if groups.len() <= 1 {
        return groups.first().map(|_| 0);
    }

    let names: Vec<Vec<&str>> = groups.iter().map(Signature::parameter_names).collect();
    let matched = |index: usize| {
        names[index]
            .iter()
            .filter(|name| supplied.contains(*name))
            .count()
    };

    let exact: Vec<usize> = (0..groups.len())
        .filter(|&i| names[i].len() == supplied.len() && matched(i) == names[i].len())
        .collect();
    if let [only] = exact.as_slice() {
        return Some(*only);
    }

    let mut ordered: Vec<usize> = (0..groups.len()).collect();
    ordered.sort_by(|&a, &b| names[b].len().cmp(&names[a].len()));

    let best = ordered.iter().map(|&i| matched(i)).max().unwrap_or(0);
    let tied: Vec<usize> = ordered.into_iter().filter(|&i| matched(i) == best).collect();
    if let [only] = tied.as_slice() {
        return Some(*only);
    }

    let mut chosen = None;
    let mut fewest = usize::MAX;
    for index in tied {
        let unmatched = names[index].len() - matched(index);
        if unmatched < fewest {
            fewest = unmatched;
            chosen = Some(index);
        }
    }
    chosen
}

/// The chosen group and its positional arguments
#[derive(Debug)]
pub struct Resolution<'a, T> {
    pub group: &'a ParameterGroup<T>,
    pub arguments: Vec<Value>,
}

/// Resolves named arguments against an overload set
pub struct ParameterResolver<'a, T> {
    overloads: &'a OverloadSet<T>,
}

impl<'a, T: Parametric> ParameterResolver<'a, T> {
    pub fn new(overloads: &'a OverloadSet<T>) -> Self {
        Self { overloads }
    }

    /// Choose a group, then build one argument per parameter position.
    ///
    /// Supplied arguments are located through the parameter's domain type.
    /// A missing optional argument takes its declared default. Anything else
    /// missing stays `Null`.
    pub fn resolve(
        &self,
        lookup: &dyn DomainTypeLookup,
        values: &HashMap<String, ParameterValueData>,
    ) -> Result<Resolution<'a, T>> {
        let groups = self.overloads.groups();
        let supplied: HashSet<&str> = values.keys().map(String::as_str).collect();

        let index = select_group(groups, &supplied).ok_or_else(|| {
            DomainError::NotSupported(format!("'{}' has no parameter groups", self.overloads.name()))
        })?;
        let group = &groups[index];
        tracing::debug!(name = %self.overloads.name(), group = index, "parameter group selected");

        let mut arguments = vec![Value::Null; group.len()];
        for (native, slot) in group.slotted() {
            let argument = match values.get(native.name()) {
                Some(data) => self.overloads.parameters()[slot].locate(lookup, data)?,
                None if native.is_optional() => native.default_value().cloned().unwrap_or_default(),
                None => Value::Null,
            };
            arguments[native.index()] = argument;
        }

        Ok(Resolution { group, arguments })
    }
}
