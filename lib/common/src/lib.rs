//! Types shared between the model source and the vertex indexer.

use num_traits::{AsPrimitive, PrimInt};

mod attribute;
mod soup;

pub use attribute::*;
pub use soup::*;

/// Trait for types which can act as indices within an array (or an array-like structure).
pub trait ArrayIndex:
    PrimInt
    + AsPrimitive<usize>
    + std::hash::Hash
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
}
impl<P> ArrayIndex for P where
    P: PrimInt
        + AsPrimitive<usize>
        + std::hash::Hash
        + std::fmt::Debug
        + Send
        + Sync
        + 'static
{
}
