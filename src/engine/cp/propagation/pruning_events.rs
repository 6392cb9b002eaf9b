use crate::containers::HashMap;
use crate::engine::cp::PruningEvent;
use crate::engine::variables::DomainId;

/// The pruning event per scope variable of a propagator: a default for its kind, plus optional
/// per-variable overrides for the consistency rule and for the negated rule.
#[derive(Clone, Debug)]
pub struct PruningEvents {
    default: PruningEvent,
    consistency: HashMap<DomainId, PruningEvent>,
    not_consistency: HashMap<DomainId, PruningEvent>,
}

impl PruningEvents {
    pub fn new(default: PruningEvent) -> Self {
        PruningEvents {
            default,
            consistency: HashMap::default(),
            not_consistency: HashMap::default(),
        }
    }

    /// Overrides the pruning event of `variable` for the consistency rule.
    pub fn set_consistency_event(&mut self, variable: DomainId, event: PruningEvent) {
        let _ = self.consistency.insert(variable, event);
    }

    /// Overrides the pruning event of `variable` for the negated consistency rule.
    pub fn set_not_consistency_event(&mut self, variable: DomainId, event: PruningEvent) {
        let _ = self.not_consistency.insert(variable, event);
    }

    pub fn get(&self, variable: DomainId, negated: bool) -> PruningEvent {
        let overrides = if negated {
            &self.not_consistency
        } else {
            &self.consistency
        };

        overrides.get(&variable).copied().unwrap_or(self.default)
    }
}
