//! Reusable coding style fragments
//!
//! Each pattern is a small [`ConventionalCodingStyle`] meant to be merged
//! into a larger one.

use std::sync::Arc;

use modelkit_domain::{DomainError, Parametric, TypeKey, Value};

use super::ConventionalCodingStyle;
use crate::domain::ports::{IdExtractor, Locator, ValueBy, ValueExtractor};
use crate::domain::value_objects::TypeDescriptor;
use crate::error::{Error, Result};
use crate::infrastructure::locators::DelegateLocator;

fn is_text(ty: &TypeDescriptor) -> bool {
    ty.key() == &TypeKey::of::<String>()
}

fn is_text_or_parseable(ty: &TypeDescriptor) -> bool {
    is_text(ty) || ty.is_parseable()
}

fn text_id(value: &Value) -> Result<String> {
    Ok(value.to_string())
}

/// Strings and parseable types are values identified by their text form
pub fn parseable_value_type_pattern() -> ConventionalCodingStyle {
    let mut style = ConventionalCodingStyle::new();

    style.type_is_value.set_when(is_text_or_parseable, |_| true);
    style.static_instances.add_values_when(
        vec![Value::Bool(true), Value::Bool(false)],
        |t: &TypeDescriptor| t.key() == &TypeKey::of::<bool>(),
    );
    style
        .id_extractor
        .set_when(is_text_or_parseable, |_| -> Arc<dyn IdExtractor> { Arc::new(text_id) });
    style
        .locator
        .set_when(is_text, |_| -> Arc<dyn Locator> {
            Arc::new(DelegateLocator::by(|_, id| Ok(Value::from(id))))
        })
        .set_when(TypeDescriptor::is_parseable, |_| -> Arc<dyn Locator> {
            Arc::new(DelegateLocator::by(|ty, id| Ok(ty.parse(id)?)))
        });
    style.members.none_when(is_text_or_parseable);
    style.operations.none_when(is_text_or_parseable);

    style
}

fn not_an_enum_value(ty: &str, value: &Value) -> Error {
    DomainError::invalid_target(format!("a value of {ty}"), value.kind_name()).into()
}

/// Enums are located through their names, or through their integer
/// values when `use_name` is off
pub fn enum_pattern(use_name: bool) -> ConventionalCodingStyle {
    let mut style = ConventionalCodingStyle::new();

    style.type_is_value.set_when(TypeDescriptor::is_enum, move |_| use_name);
    style
        .static_instances
        .add_when(TypeDescriptor::is_enum, |t| t.enum_values().to_vec());

    if use_name {
        style
            .id_extractor
            .set_when(TypeDescriptor::is_enum, |t| -> Arc<dyn IdExtractor> {
                let ty = t.name().to_string();
                let names = t.enum_names().to_vec();
                let values = t.enum_values().to_vec();
                Arc::new(move |value: &Value| -> Result<String> {
                    values
                        .iter()
                        .position(|v| v == value)
                        .and_then(|index| names.get(index).cloned())
                        .ok_or_else(|| not_an_enum_value(&ty, value))
                })
            });
        style
            .locator
            .set_when(TypeDescriptor::is_enum, |_| -> Arc<dyn Locator> {
                let locator = DelegateLocator::by(|ty, id| {
                    let index = ty.enum_names().iter().position(|name| name == id);
                    Ok(index
                        .and_then(|index| ty.enum_values().get(index).cloned())
                        .unwrap_or_default())
                });
                Arc::new(locator.accept_null_result(false))
            });
    } else {
        style
            .id_extractor
            .set_when(TypeDescriptor::is_enum, |t| -> Arc<dyn IdExtractor> {
                let ty = t.name().to_string();
                Arc::new(move |value: &Value| -> Result<String> {
                    value
                        .as_i64()
                        .map(|number| number.to_string())
                        .ok_or_else(|| not_an_enum_value(&ty, value))
                })
            });
        style
            .value_extractor
            .set_when(TypeDescriptor::is_enum, |t| -> Arc<dyn ValueExtractor> {
                let ty = t.name().to_string();
                let names = t.enum_names().to_vec();
                let values = t.enum_values().to_vec();
                Arc::new(ValueBy(move |value: &Value| -> Result<String> {
                    values
                        .iter()
                        .position(|v| v == value)
                        .and_then(|index| names.get(index).cloned())
                        .ok_or_else(|| not_an_enum_value(&ty, value))
                }))
            });
        style
            .locator
            .set_when(TypeDescriptor::is_enum, |_| -> Arc<dyn Locator> {
                let locator = DelegateLocator::by(|ty, id| {
                    let number: i64 = id
                        .trim()
                        .parse()
                        .map_err(|_| DomainError::parse(id, ty.name()))?;
                    Ok(ty
                        .enum_values()
                        .iter()
                        .find(|v| v.as_i64() == Some(number))
                        .cloned()
                        .unwrap_or_default())
                });
                Arc::new(locator.accept_null_result(false))
            });
    }

    style.members.none_when(TypeDescriptor::is_enum);
    style.operations.none_when(TypeDescriptor::is_enum);

    style
}

/// Types under `prefix` get ids shortened by [`shorten_model_id`]
pub fn short_model_id_pattern(prefix: &str, short_prefix: &str) -> ConventionalCodingStyle {
    let mut style = ConventionalCodingStyle::new();

    let scope = format!("{prefix}::");
    let prefix = prefix.to_string();
    let short_prefix = short_prefix.to_string();
    style.type_id.set_when(
        move |t| t.is_public() && t.full_name().starts_with(&scope),
        move |t| shorten_model_id(&t.full_name(), &prefix, &short_prefix),
    );

    style
}

/// Attribute names become marks of types, members, operations,
/// initializers and parameters
pub fn auto_mark_with_attributes_pattern() -> ConventionalCodingStyle {
    let mut style = ConventionalCodingStyle::new();

    style.type_marks.add(|t| t.attributes().to_vec());
    style.member_marks.add(|m| m.attributes().to_vec());
    style
        .operation_marks
        .add(|o| Parametric::attributes(o).to_vec());
    style
        .initializer_marks
        .add(|i| Parametric::attributes(i).to_vec());
    style.parameter_marks.add(|p| p.attributes().to_vec());

    style
}

/// Native initializers, members and operations of every type
pub fn native_elements_pattern() -> ConventionalCodingStyle {
    let mut style = ConventionalCodingStyle::new();

    style.initializers.add(|t| t.initializers().to_vec());
    style.members.add(|t| t.members().to_vec());
    style.operations.add(|t| t.operations().to_vec());

    style
}

fn kebab(segment: &str) -> String {
    let mut result = String::with_capacity(segment.len() + 4);
    let mut previous: Option<char> = None;
    for c in segment.chars() {
        if c == '_' {
            result.push('-');
        } else if c.is_uppercase() {
            if previous.is_some_and(|p| p != '_') {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous = Some(c);
    }
    result
}

fn pascal(segment: &str) -> String {
    segment
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Shorten a full type name under `prefix`.
///
/// `shop::sales::OrderLine` with prefix `shop` and short prefix `sh`
/// becomes `sh-sales--order-line`: path segments are kebab-cased and joined
/// with `--`.
pub fn shorten_model_id(full_name: &str, prefix: &str, short_prefix: &str) -> String {
    let scope = format!("{prefix}::");
    let rest = full_name.strip_prefix(&scope).unwrap_or(full_name);
    let segments: Vec<String> = rest.split("::").map(kebab).collect();

    format!("{short_prefix}-{}", segments.join("--"))
}

/// Inverse of [`shorten_model_id`] for snake_case modules and PascalCase
/// type names
pub fn normalize_model_id(model_id: &str, prefix: &str, short_prefix: &str) -> String {
    let scope = format!("{short_prefix}-");
    let rest = model_id.strip_prefix(&scope).unwrap_or(model_id);
    let segments: Vec<&str> = rest.split("--").collect();

    let mut path: Vec<String> = Vec::with_capacity(segments.len() + 1);
    path.push(prefix.to_string());
    if let Some((last, modules)) = segments.split_last() {
        path.extend(modules.iter().map(|module| module.replace('-', "_")));
        path.push(pascal(last));
    }
    path.join("::")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::TypeCache;
    use crate::CodingStyle;
    use modelkit_domain::NativeType;

    fn status() -> NativeType {
        NativeType::builder(TypeKey::new("shop::Status"))
            .enumeration(["Open", "Closed"], vec![Value::Integer(1), Value::Integer(2)])
            .build()
    }

    #[test]
    fn test_shorten_model_id() {
        assert_eq!(
            shorten_model_id("shop::sales::OrderLine", "shop", "sh"),
            "sh-sales--order-line"
        );
        assert_eq!(shorten_model_id("shop::Order", "shop", "sh"), "sh-order");
        assert_eq!(
            shorten_model_id("shop::order_items::Line", "shop", "sh"),
            "sh-order-items--line"
        );
    }

    #[test]
    fn test_normalize_inverts_shorten() {
        for name in ["shop::sales::OrderLine", "shop::Order", "shop::order_items::Line"] {
            let short = shorten_model_id(name, "shop", "sh");
            assert_eq!(normalize_model_id(&short, "shop", "sh"), name);
        }
    }

    #[test]
    fn test_parseable_values() {
        let cache = TypeCache::new();
        let style = parseable_value_type_pattern();
        let int = cache.get_of::<i64>();

        assert!(style.is_value(&int).unwrap());
        let locator = style.locator(&int).unwrap().unwrap();
        assert_eq!(locator.locate(&int, "12").unwrap(), Value::Integer(12));

        let id = style.id_extractor(&int).unwrap().unwrap();
        assert_eq!(id.extract_id(&Value::Integer(12)).unwrap(), "12");

        let flags = style.static_instances(&cache.get_of::<bool>()).unwrap();
        assert_eq!(flags, vec![Value::Bool(true), Value::Bool(false)]);
    }

    #[test]
    fn test_enum_by_name() {
        let cache = TypeCache::new();
        let style = enum_pattern(true);
        let ty = cache.get(&status());

        assert!(style.is_value(&ty).unwrap());
        assert_eq!(style.static_instances(&ty).unwrap().len(), 2);

        let locator = style.locator(&ty).unwrap().unwrap();
        assert_eq!(locator.locate(&ty, "Closed").unwrap(), Value::Integer(2));
        assert!(matches!(
            locator.locate(&ty, "Lost").unwrap_err(),
            Error::CannotLocate { .. }
        ));

        let id = style.id_extractor(&ty).unwrap().unwrap();
        assert_eq!(id.extract_id(&Value::Integer(1)).unwrap(), "Open");
    }

    #[test]
    fn test_enum_by_number() {
        let cache = TypeCache::new();
        let style = enum_pattern(false);
        let ty = cache.get(&status());

        let locator = style.locator(&ty).unwrap().unwrap();
        assert_eq!(locator.locate(&ty, "2").unwrap(), Value::Integer(2));
        assert!(locator.locate(&ty, "7").is_err());
        assert!(locator.locate(&ty, "two").is_err());

        let display = style.value_extractor(&ty).unwrap().unwrap();
        assert_eq!(display.extract_value(&Value::Integer(2)).unwrap(), "Closed");
    }

    #[test]
    fn test_enum_with_unaligned_names_and_values() {
        let cache = TypeCache::new();
        let more_values = cache.get(
            &NativeType::builder(TypeKey::new("shop::Priority"))
                .enumeration(["Low"], vec![Value::Integer(1), Value::Integer(2)])
                .build(),
        );
        let more_names = cache.get(
            &NativeType::builder(TypeKey::new("shop::Level"))
                .enumeration(["Low", "High"], vec![Value::Integer(1)])
                .build(),
        );

        let by_name = enum_pattern(true);
        let id = by_name.id_extractor(&more_values).unwrap().unwrap();
        assert_eq!(id.extract_id(&Value::Integer(1)).unwrap(), "Low");
        assert!(id.extract_id(&Value::Integer(2)).is_err());

        let locator = by_name.locator(&more_names).unwrap().unwrap();
        assert_eq!(locator.locate(&more_names, "Low").unwrap(), Value::Integer(1));
        assert!(matches!(
            locator.locate(&more_names, "High").unwrap_err(),
            Error::CannotLocate { .. }
        ));

        let by_number = enum_pattern(false);
        let display = by_number.value_extractor(&more_values).unwrap().unwrap();
        assert!(display.extract_value(&Value::Integer(2)).is_err());
    }

    #[test]
    fn test_auto_marks() {
        let cache = TypeCache::new();
        let style = auto_mark_with_attributes_pattern();
        let audited = NativeType::builder(TypeKey::new("shop::Ledger"))
            .attribute("audited")
            .build();

        assert!(style.marks(&cache.get(&audited)).unwrap().has("audited"));
        assert!(style.marks(&cache.get_of::<String>()).unwrap().is_empty());
    }
}
