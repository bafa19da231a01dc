//! Non-fatal diagnostics collected while building domain types

use std::fmt;

use crate::error::Error;

/// Kind of element a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Initializer,
    Member,
    Operation,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Initializer => "initializer",
            Self::Member => "member",
            Self::Operation => "operation",
        };
        f.write_str(kind)
    }
}

/// One element that was left out of a domain type
#[derive(Debug, Clone)]
pub struct BuildDiagnostic {
    pub type_name: String,
    pub kind: ElementKind,
    pub element: String,
    pub reason: Error,
}

impl fmt::Display for BuildDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} ({}) was skipped: {}",
            self.type_name, self.element, self.kind, self.reason
        )
    }
}

/// Ordered collection of build diagnostics
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    diagnostics: Vec<BuildDiagnostic>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped element and emit it as a warning
    pub fn skip(
        &mut self,
        type_name: impl Into<String>,
        kind: ElementKind,
        element: impl Into<String>,
        reason: Error,
    ) {
        let diagnostic = BuildDiagnostic {
            type_name: type_name.into(),
            kind,
            element: element.into(),
            reason,
        };
        tracing::warn!(
            type_name = %diagnostic.type_name,
            element = %diagnostic.element,
            kind = %diagnostic.kind,
            reason = %diagnostic.reason,
            "element skipped"
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn append(&mut self, other: BuildReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildDiagnostic> {
        self.diagnostics.iter()
    }

    /// Diagnostics about one element of one type
    pub fn for_element<'a>(
        &'a self,
        type_name: &'a str,
        element: &'a str,
    ) -> impl Iterator<Item = &'a BuildDiagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |d| d.type_name == type_name && d.element == element)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl IntoIterator for BuildReport {
    type Item = BuildDiagnostic;
    type IntoIter = std::vec::IntoIter<BuildDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a BuildReport {
    type Item = &'a BuildDiagnostic;
    type IntoIter = std::slice::Iter<'a, BuildDiagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_records_in_order() {
        let mut report = BuildReport::new();
        report.skip("Order", ElementKind::Member, "Secret", Error::type_not_configured("Key", "unknown"));
        report.skip("Order", ElementKind::Operation, "Ship", Error::type_not_configured("Port", "unknown"));

        assert_eq!(report.len(), 2);
        assert_eq!(report.for_element("Order", "Ship").count(), 1);
        assert_eq!(report.for_element("Customer", "Ship").count(), 0);

        let first = report.iter().next().unwrap();
        assert!(first.to_string().starts_with("Order.Secret (member) was skipped"));
    }

    #[test]
    fn test_append() {
        let mut left = BuildReport::new();
        let mut right = BuildReport::new();
        right.skip("Customer", ElementKind::Initializer, "new", Error::ContextNotInitialized);

        left.append(right);

        assert_eq!(left.len(), 1);
    }
}
