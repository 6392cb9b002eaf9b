use std::fmt::Display;
use std::fmt::Formatter;

use log::warn;

use crate::basic_types::PropagationStatusCP;
use crate::containers::HashSet;
use crate::engine::cp::PruningEvent;
use crate::engine::propagation::ConstraintId;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PruningEvents;
use crate::engine::propagation::ReadDomains;
use crate::engine::variables::DomainId;

/// Propagator for the constraint `counter = |{ i | subjects[i] = value }|`.
///
/// Any shrink of a subject domain can change the count, so by default the propagator is woken by
/// every domain change of its scope.
#[derive(Clone, Debug)]
pub struct CountPropagator {
    id: ConstraintId,
    subjects: Box<[DomainId]>,
    counter: DomainId,
    value: i32,
    scope: Box<[DomainId]>,
    pruning_events: PruningEvents,
}

impl CountPropagator {
    pub fn new(
        id: ConstraintId,
        subjects: impl Into<Box<[DomainId]>>,
        counter: DomainId,
        value: i32,
    ) -> Self {
        let subjects = subjects.into();
        if subjects.is_empty() {
            warn!("Count{id} does not count any variables, its counter will be fixed to 0");
        }

        let mut seen: HashSet<DomainId> = HashSet::default();
        let scope = subjects
            .iter()
            .chain(std::iter::once(&counter))
            .copied()
            .filter(|&var| seen.insert(var))
            .collect();

        CountPropagator {
            id,
            subjects,
            counter,
            value,
            scope,
            pruning_events: PruningEvents::new(PruningEvent::Any),
        }
    }

    /// Overrides the pruning event of `var` for the consistency rule.
    pub fn with_consistency_event(mut self, var: DomainId, event: PruningEvent) -> Self {
        self.pruning_events.set_consistency_event(var, event);
        self
    }

    pub fn subjects(&self) -> &[DomainId] {
        &self.subjects
    }

    pub fn counter(&self) -> DomainId {
        self.counter
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the number of subjects fixed to the value, and the number of subjects which are not
    /// fixed but can still take the value.
    fn count(&self, context: &impl ReadDomains) -> (i32, i32) {
        let mut number_eq = 0;
        let mut number_may_be = 0;

        for &subject in self.subjects.iter() {
            if context.contains(subject, self.value) {
                if context.is_fixed(subject) {
                    number_eq += 1;
                } else {
                    number_may_be += 1;
                }
            }
        }

        (number_eq, number_may_be)
    }
}

impl Propagator for CountPropagator {
    fn name(&self) -> &str {
        "Count"
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
        Priority::Medium
    }

    fn propagate(&self, mut context: PropagationContextMut) -> PropagationStatusCP {
        let (number_eq, number_may_be) = self.count(&context);

        // The order of the two forcing checks is kept even though they exclude each other while
        // the counter domain is non-empty.
        if number_eq + number_may_be == context.lower_bound(self.counter) {
            // Every subject which can take the value is needed to reach the lower bound.
            for &subject in self.subjects.iter() {
                if !context.is_fixed(subject) && context.contains(subject, self.value) {
                    context.fix(subject, self.value)?;
                }
            }

            context.fix(self.counter, number_eq + number_may_be)?;
            context.entail();
        } else if number_eq == context.upper_bound(self.counter) {
            // The upper bound is reached, no other subject can take the value.
            for &subject in self.subjects.iter() {
                if !context.is_fixed(subject) && context.contains(subject, self.value) {
                    context.remove(subject, self.value)?;
                }
            }

            context.fix(self.counter, number_eq)?;
            context.entail();
        } else {
            context.intersect(self.counter, number_eq, number_eq + number_may_be)?;
        }

        Ok(())
    }

    fn is_satisfied(&self, context: PropagationContext) -> bool {
        if !context.is_fixed(self.counter) {
            return false;
        }

        let count_all = self
            .subjects
            .iter()
            .filter(|&&subject| context.is_fixed_to(subject, self.value))
            .count();

        i32::try_from(count_all).is_ok_and(|count| count == context.lower_bound(self.counter))
    }
}

impl Display for CountPropagator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Count{} : count({},[", self.id, self.value)?;

        for (index, subject) in self.subjects.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{subject}")?;
        }

        write!(f, "], {} )", self.counter)
    }
}
