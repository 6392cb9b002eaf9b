use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::PropagationStatusCP;
use crate::engine::cp::PruningEvent;
use crate::engine::propagation::ConstraintId;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PruningEvents;
use crate::engine::propagation::ReadDomains;
use crate::engine::propagation::ReifiablePropagator;
use crate::engine::variables::DomainId;

/// Propagator for the constraint `b <-> p`, where `b` is a 0/1 variable and `p` is a propagator
/// which can also enforce its negation.
///
/// While `b` is not fixed, the propagator fixes it as soon as `p` is known to hold or known to be
/// violated. Once `b` is fixed, `p` or its negation is enforced.
#[derive(Clone, Debug)]
pub struct ReifiedPropagator<WrappedPropagator> {
    id: ConstraintId,
    propagator: WrappedPropagator,
    reification: DomainId,
    scope: Box<[DomainId]>,
    pruning_events: PruningEvents,
}

impl<WrappedPropagator: ReifiablePropagator> ReifiedPropagator<WrappedPropagator> {
    pub fn new(id: ConstraintId, propagator: WrappedPropagator, reification: DomainId) -> Self {
        // Whichever rule ends up being enforced, the wrapper has to be woken by changes that
        // matter to it.
        let mut pruning_events = PruningEvents::new(PruningEvent::Any);
        for &var in propagator.scope() {
            let event = propagator
                .pruning_event_of(var, false)
                .max(propagator.pruning_event_of(var, true));
            pruning_events.set_consistency_event(var, event);
            pruning_events.set_not_consistency_event(var, event);
        }
        if propagator.scope().contains(&reification) {
            pruning_events.set_consistency_event(reification, PruningEvent::Any);
            pruning_events.set_not_consistency_event(reification, PruningEvent::Any);
        }

        let scope = propagator
            .scope()
            .iter()
            .copied()
            .chain((!propagator.scope().contains(&reification)).then_some(reification))
            .collect();

        ReifiedPropagator {
            id,
            propagator,
            reification,
            scope,
            pruning_events,
        }
    }

    pub fn reification(&self) -> DomainId {
        self.reification
    }

    pub fn propagator(&self) -> &WrappedPropagator {
        &self.propagator
    }
}

impl<WrappedPropagator: ReifiablePropagator> Propagator for ReifiedPropagator<WrappedPropagator> {
    fn name(&self) -> &str {
        "Reified"
    }

    fn id(&self) -> ConstraintId {
        self.id
    }

    fn scope(&self) -> &[DomainId] {
        &self.scope
    }

    fn pruning_events(&self) -> &PruningEvents {
        &self.pruning_events
    }

    fn priority(&self) -> Priority {
        self.propagator.priority()
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        context.intersect(self.reification, 0, 1)?;

        if context.is_fixed_to(self.reification, 1) {
            self.propagator.propagate(context.reborrow())?;
            if self.propagator.is_satisfied(context.as_readonly()) {
                context.entail();
            }
        } else if context.is_fixed_to(self.reification, 0) {
            self.propagator.not_propagate(context.reborrow())?;
            if self.propagator.is_not_satisfied(context.as_readonly()) {
                context.entail();
            }
        } else if self.propagator.is_satisfied(context.as_readonly()) {
            context.fix(self.reification, 1)?;
            context.entail();
        } else if self.propagator.is_not_satisfied(context.as_readonly()) {
            context.fix(self.reification, 0)?;
            context.entail();
        }

        Ok(())
    }

    fn is_satisfied(&self, context: PropagationContext) -> bool {
        (context.is_fixed_to(self.reification, 1) && self.propagator.is_satisfied(context))
            || (context.is_fixed_to(self.reification, 0) && self.propagator.is_not_satisfied(context))
    }
}

impl<WrappedPropagator: Display> Display for ReifiedPropagator<WrappedPropagator> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reified{} : Reified({}, {} )",
            self.id, self.propagator, self.reification
        )
    }
}
