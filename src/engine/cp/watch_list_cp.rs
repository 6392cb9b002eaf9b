use enumset::EnumSet;

use super::IntDomainEvent;
use crate::containers::KeyedVec;
use crate::engine::propagation::PropagatorId;
use crate::engine::variables::DomainId;

/// For every integer variable, the propagators that must be woken by changes to its domain and
/// the [`IntDomainEvent`]s they are interested in.
#[derive(Default, Debug, Clone)]
pub(crate) struct WatchListCP {
    watchers: KeyedVec<DomainId, Vec<Watcher>>,
}

#[derive(Clone, Copy, Debug)]
struct Watcher {
    propagator: PropagatorId,
    events: EnumSet<IntDomainEvent>,
}

impl WatchListCP {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(Vec::new());
    }

    /// Subscribes `propagator` to `events` on `domain`. Watching the same variable twice merges
    /// the events.
    pub(crate) fn watch(
        &mut self,
        domain: DomainId,
        propagator: PropagatorId,
        events: EnumSet<IntDomainEvent>,
    ) {
        if events.is_empty() {
            return;
        }

        let watchers = &mut self.watchers[domain];
        match watchers
            .iter_mut()
            .find(|watcher| watcher.propagator == propagator)
        {
            Some(watcher) => watcher.events |= events,
            None => watchers.push(Watcher { propagator, events }),
        }
    }

    pub(crate) fn unwatch(&mut self, domain: DomainId, propagator: PropagatorId) {
        self.watchers[domain].retain(|watcher| watcher.propagator != propagator);
    }

    pub(crate) fn get_affected_propagators(
        &self,
        event: IntDomainEvent,
        domain: DomainId,
    ) -> impl Iterator<Item = PropagatorId> + '_ {
        self.watchers[domain]
            .iter()
            .filter(move |watcher| watcher.events.contains(event))
            .map(|watcher| watcher.propagator)
    }

    #[cfg(test)]
    pub(crate) fn is_watching(&self, domain: DomainId, propagator: PropagatorId) -> bool {
        self.watchers[domain]
            .iter()
            .any(|watcher| watcher.propagator == propagator)
    }
}
