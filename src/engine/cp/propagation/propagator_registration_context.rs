use crate::engine::cp::PropagatorQueue;
use crate::engine::cp::PruningEvent;
use crate::engine::cp::WatchListCP;
#[cfg(doc)]
use crate::engine::propagation::Propagator;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// [`PropagatorRegistrationContext`] is handed to [`Propagator::impose`] and
/// [`Propagator::remove_constraint`].
///
/// It is the communication point between the store and a propagator for attaching the
/// propagator to, and detaching it from, the variables in its scope.
#[derive(Debug)]
pub struct PropagatorRegistrationContext<'a> {
    watch_list: &'a mut WatchListCP,
    propagator_queue: &'a mut PropagatorQueue,
    registrations: &'a mut Vec<(DomainId, PruningEvent)>,
    num_constraints: &'a mut usize,
    propagator_id: PropagatorId,
    priority: Priority,
}

impl<'a> PropagatorRegistrationContext<'a> {
    pub(crate) fn new(
        watch_list: &'a mut WatchListCP,
        propagator_queue: &'a mut PropagatorQueue,
        registrations: &'a mut Vec<(DomainId, PruningEvent)>,
        num_constraints: &'a mut usize,
        propagator_id: PropagatorId,
        priority: Priority,
    ) -> Self {
        PropagatorRegistrationContext {
            watch_list,
            propagator_queue,
            registrations,
            num_constraints,
            propagator_id,
            priority,
        }
    }

    /// Subscribes the propagator to changes of `var` at the granularity of `event`.
    ///
    /// The registration is remembered by the store, so that the propagator can be re-attached
    /// when an entailment is undone by backtracking.
    pub fn register(&mut self, var: DomainId, event: PruningEvent) {
        self.watch_list
            .watch(var, self.propagator_id, event.domain_events());
        self.registrations.push((var, event));
    }

    /// Stops waking the propagator for changes of `var`.
    pub fn unregister(&mut self, var: DomainId) {
        self.watch_list.unwatch(var, self.propagator_id);
    }

    /// Enqueues the propagator for a consistency call, regardless of domain events.
    pub fn add_changed(&mut self) {
        self.propagator_queue
            .enqueue_propagator(self.propagator_id, self.priority);
    }

    /// Counts the propagator as a live constraint of the store.
    pub fn count_constraint(&mut self) {
        *self.num_constraints += 1;
    }
}
