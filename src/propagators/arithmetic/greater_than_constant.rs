use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::PruningEvent;
use crate::engine::cp::VariableWeights;
use crate::engine::propagation::ConstraintId;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PruningEvents;
use crate::engine::propagation::ReadDomains;
use crate::engine::propagation::ReifiablePropagator;
use crate::engine::variables::DomainId;

/// Bounds consistent propagator for `x > c`, where `c` is a constant. The negated constraint is
/// `x <= c`.
#[derive(Clone, Debug)]
pub struct GreaterThanConstantPropagator {
    id: ConstraintId,
    x: DomainId,
    c: i32,
    pruning_events: PruningEvents,
}

impl GreaterThanConstantPropagator {
    pub fn new(id: ConstraintId, x: DomainId, c: i32) -> Self {
        GreaterThanConstantPropagator {
            id,
            x,
            c,
            pruning_events: PruningEvents::new(PruningEvent::Bound),
        }
    }

    /// Overrides the pruning event of `x` for the consistency rule.
    pub fn with_consistency_event(mut self, event: PruningEvent) -> Self {
        self.pruning_events.set_consistency_event(self.x, event);
        self
    }

    /// Overrides the pruning event of `x` for the negated rule.
    pub fn with_not_consistency_event(mut self, event: PruningEvent) -> Self {
        self.pruning_events.set_not_consistency_event(self.x, event);
        self
    }

    pub fn x(&self) -> DomainId {
        self.x
    }

    pub fn c(&self) -> i32 {
        self.c
    }
}

impl Propagator for GreaterThanConstantPropagator {
    fn name(&self) -> &str {
        "XgtC"
    }

    fn id(&self) -> ConstraintId {
        self.id
    }

    fn scope(&self) -> &[DomainId] {
        std::slice::from_ref(&self.x)
    }

    fn pruning_events(&self) -> &PruningEvents {
        &self.pruning_events
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        // No value is greater than i32::MAX.
        let bound = self
            .c
            .checked_add(1)
            .ok_or_else(|| EmptyDomain::new(self.x))?;
        context.set_lower_bound(self.x, bound)
    }

    fn is_satisfied(&self, context: PropagationContext) -> bool {
        context.lower_bound(self.x) > self.c
    }

    fn increase_weight(&self, weights: &mut VariableWeights) {
        weights.increase(self.x);
    }
}

impl ReifiablePropagator for GreaterThanConstantPropagator {
    fn not_propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        context.set_upper_bound(self.x, self.c)
    }

    fn is_not_satisfied(&self, context: PropagationContext) -> bool {
        context.upper_bound(self.x) <= self.c
    }
}

impl Display for GreaterThanConstantPropagator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "XgtC{} : XgtC({}, {} )", self.id, self.x, self.c)
    }
}
