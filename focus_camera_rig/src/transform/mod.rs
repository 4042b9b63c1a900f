//! Transform hierarchy owned by the host.
//!
//! Nodes are addressed by stable slot map keys. Rigs hold keys only and
//! borrow the store for the duration of a lifecycle call.

mod transform_store;

pub use transform_store::{TransformKey, TransformNode, TransformStore};
