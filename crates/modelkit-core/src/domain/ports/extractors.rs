//! Id and display-value extraction ports

use modelkit_domain::Value;

use crate::error::Result;

/// Produces the identifier a locator can later resolve back to the object
pub trait IdExtractor: Send + Sync {
    fn extract_id(&self, object: &Value) -> Result<String>;
}

/// Produces a human readable value for an object
pub trait ValueExtractor: Send + Sync {
    fn extract_value(&self, object: &Value) -> Result<String>;
}

impl<F> IdExtractor for F
where
    F: Fn(&Value) -> Result<String> + Send + Sync,
{
    fn extract_id(&self, object: &Value) -> Result<String> {
        self(object)
    }
}

/// Closure adapter for [`ValueExtractor`].
///
/// A blanket closure impl would collide with the one for [`IdExtractor`]
/// whenever a type needs both, so value extractors are wrapped explicitly.
pub struct ValueBy<F>(pub F);

impl<F> ValueExtractor for ValueBy<F>
where
    F: Fn(&Value) -> Result<String> + Send + Sync,
{
    fn extract_value(&self, object: &Value) -> Result<String> {
        (self.0)(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_extractors() {
        let id = |v: &Value| Ok(format!("#{v}"));
        let display = ValueBy(|v: &Value| Ok(v.to_string().to_uppercase()));

        assert_eq!(id.extract_id(&Value::from(3)).unwrap(), "#3");
        assert_eq!(display.extract_value(&Value::from("ab")).unwrap(), "AB");
    }
}
