use std::fmt::Debug;
use std::fmt::Display;

use super::PropagationContext;
use super::PropagationContextMut;
use super::PropagatorRegistrationContext;
use super::PruningEvents;
use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::PruningEvent;
use crate::engine::cp::VariableWeights;
use crate::engine::propagation::ConstraintId;
use crate::engine::variables::DomainId;
#[cfg(doc)]
use crate::engine::PropagationStore;

/// All propagators implement the [`Propagator`] trait. Structs implementing the trait define the
/// consistency rule of a constraint, a satisfaction check, and the data the store needs to decide
/// when to wake them up.
///
/// The [`Display`] implementation is the human-readable description of the constraint. It is
/// stable for a given propagator and does not depend on the current domains.
///
/// See the [`crate::engine::cp::propagation`] documentation for more details.
pub trait Propagator: Debug + Display {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// The diagnostic number given to this constraint at construction.
    fn id(&self) -> ConstraintId;

    /// The variables the constraint mentions, without duplicates. Does not change over the
    /// lifetime of the propagator.
    fn scope(&self) -> &[DomainId];

    /// The pruning events this propagator is configured with.
    fn pruning_events(&self) -> &PruningEvents;

    /// The granularity of domain change on `var` that should wake this propagator, for the
    /// consistency rule or, if `negated`, for the negated rule.
    ///
    /// Per-variable overrides win over the default of the propagator kind.
    fn pruning_event_of(&self, var: DomainId, negated: bool) -> PruningEvent {
        self.pruning_events().get(var, negated)
    }

    /// The queue a propagator is put in when it is woken up. Cheap propagators should be run
    /// before expensive ones.
    fn priority(&self) -> Priority {
        Priority::VeryLow
    }

    /// Attaches the propagator to the store: it is registered on every variable in its scope
    /// with the pruning event of the consistency rule, enqueued for an initial consistency call,
    /// and counted as a constraint of the store.
    ///
    /// Called once by [`PropagationStore::impose`].
    fn impose(&self, context: &mut PropagatorRegistrationContext) {
        for &var in self.scope() {
            context.register(var, self.pruning_event_of(var, false));
        }

        context.add_changed();
        context.count_constraint();
    }

    /// Enforces the consistency rule on the current domains.
    ///
    /// Removals are only ever of values which are unsupported by the constraint. If a removal
    /// would empty a domain, [`crate::basic_types::EmptyDomain`] is returned. The propagator may
    /// call [`PropagationContextMut::entail`] when the constraint can no longer be violated.
    ///
    /// A single call need not reach a fixpoint. The propagator is woken by its own domain changes
    /// like by any other, so a rule which can enable itself again is simply called again.
    fn propagate(&self, context: PropagationContextMut) -> PropagationStatusCP;

    /// Whether the constraint is entailed by the current domains, i.e. whether every assignment
    /// of the domains satisfies it. Has no side effects.
    fn is_satisfied(&self, context: PropagationContext) -> bool;

    /// Detaches the propagator from every variable in its scope. It will not be woken up again
    /// until it is re-attached.
    fn remove_constraint(&self, context: &mut PropagatorRegistrationContext) {
        for &var in self.scope() {
            context.unregister(var);
        }
    }

    /// Bumps the failure weight of the variables in the scope. Called by the store after this
    /// propagator detected a failure, when weight tracking is enabled.
    fn increase_weight(&self, weights: &mut VariableWeights) {
        for &var in self.scope() {
            weights.increase(var);
        }
    }
}

/// A propagator that can also enforce the negation of its constraint. This is what allows it to
/// be reified, see [`crate::propagators::ReifiedPropagator`].
pub trait ReifiablePropagator: Propagator {
    /// Enforces the negated constraint on the current domains, i.e. it removes values which can
    /// only be part of satisfying assignments.
    fn not_propagate(&self, context: PropagationContextMut) -> PropagationStatusCP;

    /// Whether the constraint is violated by every assignment of the current domains.
    fn is_not_satisfied(&self, context: PropagationContext) -> bool;
}

/// Indicator of what queue a propagator should be placed in. Lower values are dequeued first.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
    #[default]
    VeryLow = 3,
}

impl Priority {
    pub(crate) const NUM_LEVELS: u32 = 4;
}
