use log::debug;
use log::trace;

use crate::basic_types::Conflict;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Trail;
use crate::containers::KeyGenerator;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::cp::Assignments;
use crate::engine::cp::IntDomainEvent;
use crate::engine::cp::PropagatorQueue;
use crate::engine::cp::PruningEvent;
use crate::engine::cp::VariableWeights;
use crate::engine::cp::WatchListCP;
use crate::engine::propagation::ConstraintId;
use crate::engine::propagation::PropagationContext;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorId;
use crate::engine::propagation::PropagatorRegistrationContext;
use crate::engine::variables::DomainId;
use crate::fixpoint_assert_advanced;
use crate::fixpoint_assert_eq_simple;
use crate::fixpoint_assert_moderate;
use crate::fixpoint_assert_simple;

/// Options for the [`PropagationStore`] which determine how it behaves.
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreOptions {
    /// When enabled, the variables implicated in a failure have their weight increased, see
    /// [`Propagator::increase_weight`].
    pub weight_tracking: bool,
}

/// Owns the variables and the propagators imposed on them, and drives the propagators to a joint
/// fixpoint.
///
/// Domain changes happen at the current level, and are undone by [`PropagationStore::backtrack`].
/// Entailed propagators are detached from their variables for as long as the level at which they
/// were entailed is not undone.
#[derive(Debug, Default)]
pub struct PropagationStore {
    options: StoreOptions,
    assignments: Assignments,
    watch_list: WatchListCP,
    propagator_queue: PropagatorQueue,
    event_drain: Vec<(IntDomainEvent, DomainId)>,
    propagators: KeyedVec<PropagatorId, Box<dyn Propagator>>,
    /// The registrations made by each propagator when it was imposed.
    registrations: KeyedVec<PropagatorId, Vec<(DomainId, PruningEvent)>>,
    is_entailed: KeyedVec<PropagatorId, bool>,
    entailments: Trail<PropagatorId>,
    /// At index i are the propagators which were still enqueued when level i was left.
    pending_per_level: Vec<Vec<PropagatorId>>,
    constraint_ids: KeyGenerator<ConstraintId>,
    num_constraints: usize,
    weights: VariableWeights,
}

impl PropagationStore {
    pub fn new(options: StoreOptions) -> Self {
        PropagationStore {
            options,
            ..Default::default()
        }
    }

    /// Hands out the diagnostic number for a propagator which is about to be constructed.
    pub fn new_constraint_id(&mut self) -> ConstraintId {
        self.constraint_ids.next_key()
    }
}

// Creating variables.
impl PropagationStore {
    /// Creates a variable with the domain `[lower_bound, upper_bound]`.
    pub fn new_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<DomainId, ConstraintOperationError> {
        if lower_bound > upper_bound {
            return Err(ConstraintOperationError::InvalidDomain);
        }

        self.watch_list.grow();
        self.weights.grow();
        Ok(self.assignments.grow(lower_bound, upper_bound))
    }

    /// Creates a variable whose domain holds exactly the given values.
    pub fn new_sparse_variable(
        &mut self,
        values: &[i32],
    ) -> Result<DomainId, ConstraintOperationError> {
        fixpoint_assert_simple!(
            self.current_level() == 0,
            "sparse variables can only be created at the root level"
        );

        let mut values = values.to_vec();
        values.sort_unstable();
        values.dedup();

        let (Some(&lower_bound), Some(&upper_bound)) = (values.first(), values.last()) else {
            return Err(ConstraintOperationError::InvalidDomain);
        };

        let domain = self.new_variable(lower_bound, upper_bound)?;

        let mut next_idx = 0;
        for value in lower_bound..=upper_bound {
            if value == values[next_idx] {
                next_idx += 1;
            } else {
                self.assignments
                    .remove_initial_value_from_domain(domain, value)
                    .map_err(|_| ConstraintOperationError::InvalidDomain)?;
            }
        }

        Ok(domain)
    }

    pub fn num_variables(&self) -> usize {
        self.assignments.num_domains()
    }
}

// Imposing propagators.
impl PropagationStore {
    /// Attaches the propagator to the store and enqueues it for its first consistency call. No
    /// propagation happens until [`PropagationStore::propagate`] is called.
    pub fn impose(
        &mut self,
        propagator: impl Propagator + 'static,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        if let Some(&unknown) = propagator
            .scope()
            .iter()
            .find(|var| var.index() >= self.assignments.num_domains())
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown));
        }

        let propagator_id = self.propagators.push(Box::new(propagator));
        let _ = self.registrations.push(Vec::new());
        let _ = self.is_entailed.push(false);

        let propagator = &self.propagators[propagator_id];
        let mut context = PropagatorRegistrationContext::new(
            &mut self.watch_list,
            &mut self.propagator_queue,
            &mut self.registrations[propagator_id],
            &mut self.num_constraints,
            propagator_id,
            propagator.priority(),
        );
        propagator.impose(&mut context);

        debug!("Imposed {propagator} as {propagator_id}");

        Ok(propagator_id)
    }

    pub fn propagator(&self, propagator_id: PropagatorId) -> &dyn Propagator {
        self.propagators[propagator_id].as_ref()
    }

    /// The human-readable description of the propagator.
    pub fn description(&self, propagator_id: PropagatorId) -> String {
        self.propagators[propagator_id].to_string()
    }

    pub fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    /// The number of imposed propagators which are not entailed.
    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    pub fn is_entailed(&self, propagator_id: PropagatorId) -> bool {
        self.is_entailed[propagator_id]
    }

    /// Whether every imposed propagator reports its constraint as satisfied by the current
    /// domains.
    pub fn all_satisfied(&self) -> bool {
        let context = PropagationContext::new(&self.assignments);
        self.propagators
            .iter()
            .all(|propagator| propagator.is_satisfied(context))
    }
}

// Propagation.
impl PropagationStore {
    /// Runs the enqueued propagators until none is left, or until one of them empties a domain.
    ///
    /// Propagators are first woken by the domain changes which were made since the last call. On
    /// a conflict the queue is cleared and the store stays at the current level; the caller is
    /// expected to backtrack.
    pub fn propagate(&mut self) -> Result<(), Conflict> {
        self.notify_propagators();

        while let Some(propagator_id) = self.propagator_queue.pop() {
            fixpoint_assert_simple!(
                !self.is_entailed[propagator_id],
                "{propagator_id} is entailed but was scheduled for propagation"
            );

            let propagator = &self.propagators[propagator_id];
            trace!("Propagating {propagator}");

            let mut entailed = false;
            let context =
                PropagationContextMut::new(&mut self.assignments, propagator_id, &mut entailed);

            if let Err(EmptyDomain { domain }) = propagator.propagate(context) {
                debug!("{propagator} emptied the domain of {domain}");

                if self.options.weight_tracking {
                    propagator.increase_weight(&mut self.weights);
                }

                self.propagator_queue.clear();
                self.assignments.clear_domain_events();

                return Err(Conflict {
                    propagator: propagator_id,
                    domain,
                });
            }

            if entailed {
                self.entail(propagator_id);
            }

            self.notify_propagators();
        }

        Ok(())
    }

    /// Enqueues the propagators which watch the domain changes made since the last call.
    fn notify_propagators(&mut self) {
        self.event_drain
            .extend(self.assignments.drain_domain_events());

        for (event, domain) in self.event_drain.drain(..) {
            for propagator_id in self.watch_list.get_affected_propagators(event, domain) {
                self.propagator_queue
                    .enqueue_propagator(propagator_id, self.propagators[propagator_id].priority());
            }
        }
    }

    fn entail(&mut self, propagator_id: PropagatorId) {
        fixpoint_assert_moderate!(!self.is_entailed[propagator_id]);

        let propagator = &self.propagators[propagator_id];
        fixpoint_assert_advanced!(
            propagator.is_satisfied(PropagationContext::new(&self.assignments)),
            "{propagator} is entailed but not satisfied"
        );

        // Registrations made while detaching are not cached.
        let mut registrations = Vec::new();
        let mut context = PropagatorRegistrationContext::new(
            &mut self.watch_list,
            &mut self.propagator_queue,
            &mut registrations,
            &mut self.num_constraints,
            propagator_id,
            propagator.priority(),
        );
        propagator.remove_constraint(&mut context);

        self.is_entailed[propagator_id] = true;
        self.entailments.push(propagator_id);
        self.num_constraints -= 1;

        debug!(
            "{propagator} is entailed at level {}",
            self.assignments.get_level()
        );
    }
}

// Backtracking.
impl PropagationStore {
    pub fn current_level(&self) -> usize {
        self.assignments.get_level()
    }

    /// Opens a new level. Propagators which are still pending at the current level are remembered,
    /// so that they are enqueued again when this level is restored.
    pub fn increase_level(&mut self) {
        self.notify_propagators();

        let mut pending = Vec::new();
        while let Some(propagator_id) = self.propagator_queue.pop() {
            pending.push(propagator_id);
        }
        self.enqueue_all(&pending);
        self.pending_per_level.push(pending);

        self.assignments.increase_level();
        self.entailments.increase_level();

        fixpoint_assert_eq_simple!(self.assignments.get_level(), self.entailments.get_level());
        fixpoint_assert_eq_simple!(self.assignments.get_level(), self.pending_per_level.len());
    }

    /// Restores the domains as they were when `level` was the current level, and re-attaches the
    /// propagators which were entailed at a higher level. Work which was pending when `level` was
    /// left is enqueued again, anything scheduled at the undone levels is discarded.
    pub fn backtrack(&mut self, level: usize) {
        fixpoint_assert_simple!(
            level < self.current_level(),
            "cannot backtrack to level {level} from level {}",
            self.current_level()
        );

        debug!(
            "Backtracking from level {} to level {level}, undoing {} domain changes",
            self.current_level(),
            self.assignments.num_trail_entries()
        );

        self.assignments.synchronise(level);

        for propagator_id in self.entailments.synchronise(level) {
            self.is_entailed[propagator_id] = false;
            for &(var, event) in &self.registrations[propagator_id] {
                self.watch_list
                    .watch(var, propagator_id, event.domain_events());
            }
            self.num_constraints += 1;
        }

        self.propagator_queue.clear();
        self.event_drain.clear();

        self.pending_per_level.truncate(level + 1);
        if let Some(pending) = self.pending_per_level.pop() {
            self.enqueue_all(&pending);
        }
    }

    fn enqueue_all(&mut self, propagator_ids: &[PropagatorId]) {
        for &propagator_id in propagator_ids {
            fixpoint_assert_moderate!(!self.is_entailed[propagator_id]);
            self.propagator_queue
                .enqueue_propagator(propagator_id, self.propagators[propagator_id].priority());
        }
    }
}

// Reading and changing domains from outside of propagation.
impl PropagationStore {
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub(crate) fn assignments_mut(&mut self) -> &mut Assignments {
        &mut self.assignments
    }

    pub fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments.lower_bound(var)
    }

    pub fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments.upper_bound(var)
    }

    pub fn contains(&self, var: DomainId, value: i32) -> bool {
        self.assignments.contains(var, value)
    }

    pub fn is_fixed(&self, var: DomainId) -> bool {
        self.assignments.is_fixed(var)
    }

    pub fn set_lower_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.tighten_lower_bound(var, bound)
    }

    pub fn set_upper_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.assignments.tighten_upper_bound(var, bound)
    }

    pub fn remove(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.remove_value(var, value)
    }

    pub fn fix(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.intersect(var, value, value)
    }

    /// The failure weight of `var`. Only grows when weight tracking is enabled.
    pub fn weight(&self, var: DomainId) -> u32 {
        self.weights.get(var)
    }
}
