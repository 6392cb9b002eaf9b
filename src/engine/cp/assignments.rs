use super::EventSink;
use super::IntDomainEvent;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::fixpoint_assert_moderate;
use crate::fixpoint_assert_simple;

/// The domains of all integer variables, together with the trail that allows undoing changes
/// when backtracking.
///
/// Every change happens at the current level. A change that would leave a domain empty is refused
/// with an [`EmptyDomain`] error and leaves the domain as it was.
#[derive(Clone, Debug, Default)]
pub struct Assignments {
    domains: KeyedVec<DomainId, IntegerDomain>,
    trail: Trail<TrailEntry>,
    events: EventSink,
}

/// The information required to restore a domain to its state before a change.
#[derive(Clone, Copy, Debug)]
struct TrailEntry {
    domain: DomainId,
    old_lower_bound: i32,
    old_upper_bound: i32,
    removed_value: Option<i32>,
}

impl Assignments {
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        fixpoint_assert_simple!(lower_bound <= upper_bound);

        self.events.grow();
        self.domains
            .push(IntegerDomain::new(lower_bound, upper_bound))
    }

    pub(crate) fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.domains.keys()
    }

    /// Removes a value from the initial domain of a variable. The removal is not recorded on the
    /// trail, which is sound because nothing can backtrack past the root level.
    pub(crate) fn remove_initial_value_from_domain(
        &mut self,
        domain: DomainId,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        fixpoint_assert_simple!(
            self.get_level() == 0,
            "initial values can only be removed at the root level"
        );

        if !self.contains(domain, value) {
            return Ok(());
        }
        if self.is_fixed(domain) {
            return Err(EmptyDomain::new(domain));
        }

        self.domains[domain].remove(value);
        Ok(())
    }
}

// Backtrack levels.
impl Assignments {
    pub fn get_level(&self) -> usize {
        self.trail.get_level()
    }

    pub(crate) fn increase_level(&mut self) {
        self.trail.increase_level();
    }

    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }

    /// Restores every domain to its state when `new_level` was the current level.
    pub(crate) fn synchronise(&mut self, new_level: usize) {
        for entry in self.trail.synchronise(new_level) {
            let domain = &mut self.domains[entry.domain];

            domain.lower_bound = entry.old_lower_bound;
            domain.upper_bound = entry.old_upper_bound;
            if let Some(value) = entry.removed_value {
                domain.restore(value);
            }
        }

        self.events.clear();
    }

    pub(crate) fn drain_domain_events(
        &mut self,
    ) -> impl Iterator<Item = (IntDomainEvent, DomainId)> + '_ {
        self.events.drain()
    }

    pub(crate) fn clear_domain_events(&mut self) {
        self.events.clear();
    }
}

// Reading domains.
impl Assignments {
    pub fn lower_bound(&self, domain: DomainId) -> i32 {
        self.domains[domain].lower_bound
    }

    pub fn upper_bound(&self, domain: DomainId) -> i32 {
        self.domains[domain].upper_bound
    }

    pub fn contains(&self, domain: DomainId, value: i32) -> bool {
        self.domains[domain].contains(value)
    }

    pub fn is_fixed(&self, domain: DomainId) -> bool {
        self.lower_bound(domain) == self.upper_bound(domain)
    }

    pub fn is_fixed_to(&self, domain: DomainId, value: i32) -> bool {
        self.is_fixed(domain) && self.lower_bound(domain) == value
    }

    /// The number of values currently in the domain.
    pub fn size(&self, domain: DomainId) -> usize {
        self.values(domain).count()
    }

    /// The values currently in the domain, in increasing order.
    pub fn values(&self, domain: DomainId) -> impl Iterator<Item = i32> + '_ {
        let integer_domain = &self.domains[domain];
        (integer_domain.lower_bound..=integer_domain.upper_bound)
            .filter(move |&value| integer_domain.contains(value))
    }
}

// Changing domains.
impl Assignments {
    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain: DomainId,
        new_lower_bound: i32,
    ) -> Result<(), EmptyDomain> {
        if new_lower_bound <= self.lower_bound(domain) {
            return Ok(());
        }

        let lower_bound = self.domains[domain]
            .first_value_from(new_lower_bound)
            .ok_or(EmptyDomain::new(domain))?;

        self.record(domain, None);
        self.domains[domain].lower_bound = lower_bound;
        self.events
            .event_occurred(IntDomainEvent::LowerBound, domain);
        self.notify_if_fixed(domain);

        Ok(())
    }

    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain: DomainId,
        new_upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        if new_upper_bound >= self.upper_bound(domain) {
            return Ok(());
        }

        let upper_bound = self.domains[domain]
            .last_value_until(new_upper_bound)
            .ok_or(EmptyDomain::new(domain))?;

        self.record(domain, None);
        self.domains[domain].upper_bound = upper_bound;
        self.events
            .event_occurred(IntDomainEvent::UpperBound, domain);
        self.notify_if_fixed(domain);

        Ok(())
    }

    pub(crate) fn remove_value(&mut self, domain: DomainId, value: i32) -> Result<(), EmptyDomain> {
        if !self.contains(domain, value) {
            return Ok(());
        }
        if self.is_fixed(domain) {
            return Err(EmptyDomain::new(domain));
        }

        let old_lower_bound = self.lower_bound(domain);
        let old_upper_bound = self.upper_bound(domain);

        self.record(domain, Some(value));
        self.domains[domain].remove(value);

        self.events.event_occurred(IntDomainEvent::Removal, domain);
        if value == old_lower_bound {
            self.events
                .event_occurred(IntDomainEvent::LowerBound, domain);
        }
        if value == old_upper_bound {
            self.events
                .event_occurred(IntDomainEvent::UpperBound, domain);
        }
        self.notify_if_fixed(domain);

        fixpoint_assert_moderate!(self.contains(domain, self.lower_bound(domain)));
        fixpoint_assert_moderate!(self.contains(domain, self.upper_bound(domain)));
        Ok(())
    }

    /// Restricts the domain to `[lower_bound, upper_bound]`. Either both bounds are applied, or
    /// the domain is left untouched and an error is returned.
    pub(crate) fn intersect(
        &mut self,
        domain: DomainId,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<(), EmptyDomain> {
        let integer_domain = &self.domains[domain];
        let has_support = integer_domain
            .first_value_from(lower_bound.max(integer_domain.lower_bound))
            .is_some_and(|value| value <= upper_bound);
        if !has_support {
            return Err(EmptyDomain::new(domain));
        }

        self.tighten_lower_bound(domain, lower_bound)?;
        self.tighten_upper_bound(domain, upper_bound)
    }

    fn record(&mut self, domain: DomainId, removed_value: Option<i32>) {
        self.trail.push(TrailEntry {
            domain,
            old_lower_bound: self.lower_bound(domain),
            old_upper_bound: self.upper_bound(domain),
            removed_value,
        });
    }

    fn notify_if_fixed(&mut self, domain: DomainId) {
        if self.is_fixed(domain) {
            self.events.event_occurred(IntDomainEvent::Assign, domain);
        }
    }
}

/// A domain represented by its bounds plus a membership flag for every value of the initial
/// interval.
#[derive(Clone, Debug)]
struct IntegerDomain {
    initial_lower_bound: i32,
    lower_bound: i32,
    upper_bound: i32,
    /// `is_value_in_domain[i]` tells whether `initial_lower_bound + i` has not been removed.
    /// Only meaningful for values within the current bounds.
    is_value_in_domain: Vec<bool>,
}

impl IntegerDomain {
    fn new(lower_bound: i32, upper_bound: i32) -> Self {
        let size = (upper_bound as i64 - lower_bound as i64 + 1) as usize;

        IntegerDomain {
            initial_lower_bound: lower_bound,
            lower_bound,
            upper_bound,
            is_value_in_domain: vec![true; size],
        }
    }

    fn offset(&self, value: i32) -> usize {
        (value as i64 - self.initial_lower_bound as i64) as usize
    }

    fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value
            && value <= self.upper_bound
            && self.is_value_in_domain[self.offset(value)]
    }

    /// The smallest value in the domain which is at least `value`.
    fn first_value_from(&self, value: i32) -> Option<i32> {
        (value.max(self.lower_bound)..=self.upper_bound).find(|&v| self.contains(v))
    }

    /// The largest value in the domain which is at most `value`.
    fn last_value_until(&self, value: i32) -> Option<i32> {
        (self.lower_bound..=value.min(self.upper_bound))
            .rev()
            .find(|&v| self.contains(v))
    }

    /// Removes a value which is in the domain but is not the only value, moving the bounds if
    /// needed.
    fn remove(&mut self, value: i32) {
        let offset = self.offset(value);
        self.is_value_in_domain[offset] = false;

        if value == self.lower_bound {
            self.lower_bound = self
                .first_value_from(value + 1)
                .expect("a non-fixed domain has a value above its lower bound");
        }
        if value == self.upper_bound {
            self.upper_bound = self
                .last_value_until(value - 1)
                .expect("a non-fixed domain has a value below its upper bound");
        }
    }

    fn restore(&mut self, value: i32) {
        let offset = self.offset(value);
        self.is_value_in_domain[offset] = true;
    }
}
