use crate::basic_types::EmptyDomain;
use crate::engine::cp::Assignments;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// Read access to the current domains.
pub trait ReadDomains {
    fn assignments(&self) -> &Assignments;

    fn lower_bound(&self, var: DomainId) -> i32 {
        self.assignments().lower_bound(var)
    }

    fn upper_bound(&self, var: DomainId) -> i32 {
        self.assignments().upper_bound(var)
    }

    fn contains(&self, var: DomainId, value: i32) -> bool {
        self.assignments().contains(var, value)
    }

    fn is_fixed(&self, var: DomainId) -> bool {
        self.assignments().is_fixed(var)
    }

    fn is_fixed_to(&self, var: DomainId, value: i32) -> bool {
        self.assignments().is_fixed_to(var, value)
    }

    fn size(&self, var: DomainId) -> usize {
        self.assignments().size(var)
    }
}

/// Read-only view of the domains, handed to the satisfaction checks of a propagator.
#[derive(Clone, Copy, Debug)]
pub struct PropagationContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        PropagationContext { assignments }
    }
}

impl ReadDomains for PropagationContext<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}

/// Handed to a propagator for one consistency step. Domains are changed at the current level
/// of the store; the resulting domain events wake other propagators once the step returns.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    assignments: &'a mut Assignments,
    propagator_id: PropagatorId,
    entailed: &'a mut bool,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(
        assignments: &'a mut Assignments,
        propagator_id: PropagatorId,
        entailed: &'a mut bool,
    ) -> Self {
        PropagationContextMut {
            assignments,
            propagator_id,
            entailed,
        }
    }

    pub fn reborrow(&mut self) -> PropagationContextMut<'_> {
        PropagationContextMut {
            assignments: self.assignments,
            propagator_id: self.propagator_id,
            entailed: self.entailed,
        }
    }

    pub fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext::new(self.assignments)
    }

    pub fn propagator_id(&self) -> PropagatorId {
        self.propagator_id
    }

    pub fn current_level(&self) -> usize {
        self.assignments.get_level()
    }

    /// Marks the running propagator as entailed. Once the consistency step returns, the store
    /// detaches it until it backtracks past the current level.
    pub fn entail(&mut self) {
        *self.entailed = true;
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

    /// Restricts the domain of `var` to `[lower_bound, upper_bound]`.
    pub fn intersect(
        &mut self,
        var: DomainId,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        self.assignments.intersect(var, lower_bound, upper_bound)
    }

    pub fn fix(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.assignments.intersect(var, value, value)
    }
}

impl ReadDomains for PropagationContextMut<'_> {
    fn assignments(&self) -> &Assignments {
        self.assignments
    }
}
