//! Contains the propagator implementations.
//!
//! See the [`crate::engine::cp::propagation`] for info on propagators.

pub mod arithmetic;
mod count;
mod reified_propagator;

pub use arithmetic::GreaterThanConstantPropagator;
pub use count::CountPropagator;
pub use reified_propagator::ReifiedPropagator;
