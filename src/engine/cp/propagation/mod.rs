//! Contains the main building blocks for propagators.
//!
//! # Background
//!
//! A propagator takes as input a set of variables (<code>x<sub>i</sub> &isin; X</code>) and for
//! each variable a corresponding domain (<code>D<sub>i</sub> &isin; D</code>); it can then be
//! seen as a function which maps `D ↦ D'` such that <code>D'<sub>i</sub> &sube; D<sub>i</sub></code>
//! for all variables (i.e. the domain of a variable either remains the same after applying the
//! propagator or it becomes a subset of the domain before applying the propagator).
//!
//! # Practical
//!
//! Each propagator implements the [`Propagator`] trait. It is imposed on a
//! [`crate::engine::PropagationStore`], which registers it on the variables of its
//! [`Propagator::scope`] with the [`PruningEvent`](crate::engine::cp::PruningEvent) given by
//! [`Propagator::pruning_event_of`]. When a domain change of at least that granularity happens,
//! the propagator is put in the queue of its [`Priority`], and the store calls
//! [`Propagator::propagate`] on it until no queue holds any propagator.
//!
//! A propagator whose constraint can no longer be violated may entail itself through
//! [`PropagationContextMut::entail`]; it is then detached until backtracking undoes the level at
//! which that happened.
//!
//! Propagators which also implement [`ReifiablePropagator`] can enforce the negation of their
//! constraint, and can be wrapped in a [`crate::propagators::ReifiedPropagator`].

mod propagation_context;
mod propagator;
mod propagator_id;
mod propagator_registration_context;
mod pruning_events;

pub use propagation_context::PropagationContext;
pub use propagation_context::PropagationContextMut;
pub use propagation_context::ReadDomains;
pub use propagator::Priority;
pub use propagator::Propagator;
pub use propagator::ReifiablePropagator;
pub use propagator_id::ConstraintId;
pub use propagator_id::PropagatorId;
pub use propagator_registration_context::PropagatorRegistrationContext;
pub use pruning_events::PruningEvents;
