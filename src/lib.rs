//! # Fixpoint
//! The propagation core of a finite-domain constraint solver.
//!
//! Integer variables live in a [`PropagationStore`], which keeps their domains on a trail so that
//! every change made at a backtrack level can be undone. Propagators implementing
//! [`engine::propagation::Propagator`] are imposed on the store, and
//! [`PropagationStore::propagate`] runs them until no propagator can shrink a domain any further,
//! or until one of them empties a domain.
//!
//! Two propagators are provided:
//! - [`propagators::CountPropagator`], which links the number of variables taking a value to a
//!   counter variable;
//! - [`propagators::GreaterThanConstantPropagator`], which enforces `x > c` or, negated,
//!   `x <= c`, and can be reified through [`propagators::ReifiedPropagator`].
//!
//! ```rust
//! use fixpoint::propagators::CountPropagator;
//! use fixpoint::PropagationStore;
//! use fixpoint::StoreOptions;
//!
//! let mut store = PropagationStore::new(StoreOptions::default());
//! let a = store.new_sparse_variable(&[5]).unwrap();
//! let b = store.new_sparse_variable(&[3, 5]).unwrap();
//! let c = store.new_sparse_variable(&[3]).unwrap();
//! let counter = store.new_variable(0, 3).unwrap();
//!
//! let id = store.new_constraint_id();
//! let _ = store.impose(CountPropagator::new(id, [a, b, c], counter, 5)).unwrap();
//! store.propagate().unwrap();
//!
//! assert_eq!((1, 2), (store.lower_bound(counter), store.upper_bound(counter)));
//! ```

#[doc(hidden)]
pub mod asserts;
pub mod basic_types;
pub mod containers;
pub mod engine;
pub mod propagators;


pub use basic_types::Conflict;
pub use basic_types::ConstraintOperationError;
pub use basic_types::EmptyDomain;
pub use engine::variables::DomainId;
pub use engine::PropagationStore;
pub use engine::StoreOptions;
