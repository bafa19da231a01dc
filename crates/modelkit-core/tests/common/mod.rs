//! Common test fixtures and mock implementations
//!
//! A small shop domain (orders, customers, order status) described for
//! modelkit, plus a recording locator for chain tests.

#![allow(dead_code)]

use modelkit::prelude::*;
use modelkit::{DomainError, DomainResult, ModelConfig, ShortModelId, TypeDescriptor};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderStatus {
    Open,
    Shipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub no: i64,
    pub customer: Customer,
    pub lines: Vec<String>,
    pub status: OrderStatus,
}

/// A type the coding style never hears about
pub struct Secret;

pub fn text(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn customer_of(target: &Value) -> DomainResult<&Customer> {
    target
        .downcast_ref::<Customer>()
        .ok_or_else(|| DomainError::invalid_target("Customer", target.kind_name()))
}

fn order_of(target: &Value) -> DomainResult<&Order> {
    target
        .downcast_ref::<Order>()
        .ok_or_else(|| DomainError::invalid_target("Order", target.kind_name()))
}

pub fn known_customer(id: &str) -> Option<Customer> {
    let name = match id {
        "c1" => "Ada",
        "c2" => "Grace",
        _ => return None,
    };
    Some(Customer {
        id: id.to_string(),
        name: name.to_string(),
    })
}

pub fn sample_order(no: i64) -> Order {
    Order {
        no,
        customer: known_customer("c1").unwrap(),
        lines: vec!["tea".to_string(), "cups".to_string()],
        status: OrderStatus::Open,
    }
}

impl Reflect for Secret {
    fn native_type() -> NativeType {
        NativeType::builder(TypeKey::new("vault::Secret")).build()
    }
}

impl Reflect for OrderStatus {
    fn native_type() -> NativeType {
        NativeType::builder(TypeKey::new("shop::OrderStatus"))
            .enumeration(["Open", "Shipped"], vec!["Open".into(), "Shipped".into()])
            .build()
    }
}

impl Reflect for Customer {
    fn native_type() -> NativeType {
        NativeType::builder(TypeKey::new("shop::Customer"))
            .initializer(
                NativeInitializer::new("new")
                    .param(NativeParameter::new("id", String::native_type))
                    .param(NativeParameter::new("name", String::native_type))
                    .with_construct(|args| {
                        Ok(Value::object(Customer {
                            id: text(&args[0]),
                            name: text(&args[1]),
                        }))
                    }),
            )
            .member(
                NativeMember::new("Id", String::native_type)
                    .with_fetch(|target| Ok(Value::from(customer_of(target)?.id.clone()))),
            )
            .member(
                NativeMember::new("Name", String::native_type)
                    .with_fetch(|target| Ok(Value::from(customer_of(target)?.name.clone()))),
            )
            .build()
    }
}

impl Reflect for Order {
    fn native_type() -> NativeType {
        NativeType::builder(TypeKey::new("shop::Order"))
            .attribute("audited")
            .initializer(
                NativeInitializer::new("new")
                    .param(NativeParameter::new("no", i64::native_type))
                    .param(NativeParameter::new("customer", Customer::native_type))
                    .with_construct(|args| {
                        let customer = customer_of(&args[1])?.clone();
                        Ok(Value::object(Order {
                            no: args[0].as_i64().unwrap_or_default(),
                            customer,
                            lines: Vec::new(),
                            status: OrderStatus::Open,
                        }))
                    }),
            )
            .member(
                NativeMember::new("No", i64::native_type)
                    .with_fetch(|target| Ok(Value::Integer(order_of(target)?.no))),
            )
            .member(
                NativeMember::new("Customer", Customer::native_type)
                    .with_fetch(|target| Ok(Value::object(order_of(target)?.customer.clone()))),
            )
            .member(NativeMember::new("Lines", Vec::<String>::native_type).with_fetch(|target| {
                let lines = order_of(target)?.lines.iter().map(|l| Value::from(l.as_str()));
                Ok(Value::List(lines.collect()))
            }))
            .member(NativeMember::new("Status", OrderStatus::native_type).with_fetch(|target| {
                let name = match order_of(target)?.status {
                    OrderStatus::Open => "Open",
                    OrderStatus::Shipped => "Shipped",
                };
                Ok(Value::from(name))
            }))
            .member(NativeMember::new("Secret", Secret::native_type))
            .operation(
                NativeOperation::new("Ship", String::native_type)
                    .attribute("command")
                    .param(NativeParameter::new("address", String::native_type))
                    .with_invoke(|target, args| {
                        let no = order_of(target)?.no;
                        Ok(Value::from(format!("{no} to {}", text(&args[0]))))
                    }),
            )
            .operation(
                NativeOperation::new("Ship", String::native_type)
                    .param(NativeParameter::new("address", String::native_type))
                    .param(NativeParameter::new("express", bool::native_type).with_default(false))
                    .with_invoke(|target, args| {
                        let no = order_of(target)?.no;
                        let express = args[1].as_bool().unwrap_or_default();
                        Ok(Value::from(format!("{no} to {} express={express}", text(&args[0]))))
                    }),
            )
            .operation(
                NativeOperation::new("Transfer", String::native_type)
                    .param(NativeParameter::new("customer", Customer::native_type))
                    .with_invoke(|_, args| Ok(Value::from(customer_of(&args[0])?.name.clone()))),
            )
            .operation(
                NativeOperation::new("Remind", String::native_type)
                    .param(NativeParameter::new("days", i64::native_type).with_default(7))
                    .with_invoke(|_, args| Ok(Value::from(format!("in {} days", args[0])))),
            )
            .operation(NativeOperation::new("Cancel", <()>::native_type).with_invoke(|_, _| Ok(Value::Null)))
            .build()
    }
}

fn is(ty: &TypeDescriptor, key: &str) -> bool {
    ty.key().as_str() == key
}

/// Shop coding style: short ids under `shop`, attribute marks, customer and
/// order locators
pub fn shop_style() -> ConventionalCodingStyle {
    let config = ModelConfig {
        short_model_ids: vec![ShortModelId {
            prefix: "shop".into(),
            short_prefix: "sh".into(),
        }],
        heavy_members: vec!["Lines".into()],
        ..ModelConfig::default()
    };

    let mut style = ConventionalCodingStyle::from_config(&config);
    style
        .add_types([Order::native_type(), Customer::native_type(), OrderStatus::native_type()])
        .merge(&modelkit::patterns::auto_mark_with_attributes_pattern());

    style.locator.set_when(
        |t| is(t, "shop::Customer"),
        |_| -> Arc<dyn Locator> {
            Arc::new(
                DelegateLocator::by(|_, id| Ok(known_customer(id).map(Value::object).unwrap_or_default()))
                    .accept_null_result(false),
            )
        },
    );
    style.locator.set_when(
        |t| is(t, "shop::Order"),
        |_| -> Arc<dyn Locator> {
            Arc::new(DelegateLocator::by(|_, id| {
                let no = i64::native_type().parse(id)?;
                Ok(Value::object(sample_order(no.as_i64().unwrap_or_default())))
            }))
        },
    );
    style.id_extractor.set_when(
        |t| is(t, "shop::Customer"),
        |_| -> Arc<dyn modelkit::IdExtractor> {
            Arc::new(|value: &Value| -> Result<String> { Ok(customer_of(value)?.id.clone()) })
        },
    );

    style
}

/// Context over a fresh cache with every shop type built
pub fn shop_context() -> CoreContext {
    let context = CoreContext::new(Arc::new(shop_style()), Arc::new(TypeCache::new()));
    context.build_domain_types().unwrap();
    context
}

/// Optional locator that records the ids it was asked to produce
pub struct RecordingLocator {
    handles: Box<dyn Fn(&str) -> bool + Send + Sync>,
    result: std::result::Result<Value, Error>,
    located: parking_lot::Mutex<Vec<String>>,
}

impl RecordingLocator {
    pub fn handling<P>(handles: P, value: impl Into<Value>) -> Arc<Self>
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Arc::new(Self {
            handles: Box::new(handles),
            result: Ok(value.into()),
            located: parking_lot::Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: Error) -> Arc<Self> {
        Arc::new(Self {
            handles: Box::new(|_| true),
            result: Err(error),
            located: parking_lot::Mutex::new(Vec::new()),
        })
    }

    pub fn located(&self) -> Vec<String> {
        self.located.lock().clone()
    }
}

impl OptionalLocator for RecordingLocator {
    fn can_locate(&self, _ty: &TypeDescriptor, id: &str) -> bool {
        (self.handles)(id)
    }

    fn locate_one(&self, _ty: &TypeDescriptor, id: &str) -> Result<Value> {
        self.located.lock().push(id.to_string());
        self.result.clone()
    }
}
