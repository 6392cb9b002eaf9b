use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// A change to the domain of an integer variable, as emitted by the domain store.
#[derive(Debug, EnumSetType)]
pub enum IntDomainEvent {
    /// The domain became a single value.
    Assign,
    /// The lower bound increased.
    LowerBound,
    /// The upper bound decreased.
    UpperBound,
    /// A value was removed from the domain.
    Removal,
}

/// The coarsest kind of domain change that must wake a propagator for a given variable.
///
/// The kinds are ordered from least to most sensitive: `None < Bound < Any`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum PruningEvent {
    /// Changes to the variable never wake the propagator.
    None,
    /// Only bound changes (including the variable becoming fixed) wake the propagator.
    Bound,
    /// Every domain change wakes the propagator.
    Any,
}

impl PruningEvent {
    /// The [`IntDomainEvent`]s a watcher registered with this pruning event is interested in.
    pub fn domain_events(self) -> EnumSet<IntDomainEvent> {
        match self {
            PruningEvent::None => EnumSet::empty(),
            PruningEvent::Bound => enum_set!(
                IntDomainEvent::Assign | IntDomainEvent::LowerBound | IntDomainEvent::UpperBound
            ),
            PruningEvent::Any => EnumSet::all(),
        }
    }
}
