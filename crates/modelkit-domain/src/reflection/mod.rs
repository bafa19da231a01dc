//! Native type descriptions
//!
//! Rust has no runtime reflection, so native types describe themselves:
//! a type implements [`Reflect`] and returns a [`NativeType`] listing its
//! flags, initializers, members and operations. Nested types are referenced
//! through plain function pointers, which keeps cyclic models expressible
//! and lookups lazy.

mod members;
mod native_type;

pub use members::{
    ConstructFn, FetchFn, InvokeFn, NativeInitializer, NativeMember, NativeOperation,
    NativeParameter, Parametric,
};
pub use native_type::{NativeType, NativeTypeBuilder, ParseFn, Reflect, TypeFlags, TypeFn};
