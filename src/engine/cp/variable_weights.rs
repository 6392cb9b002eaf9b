use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;

/// Activity counters of the variables, bumped for the variables implicated in a conflict and read
/// by variable-ordering heuristics.
#[derive(Clone, Debug, Default)]
pub struct VariableWeights {
    weights: KeyedVec<DomainId, u32>,
}

impl VariableWeights {
    pub(crate) fn grow(&mut self) {
        let _ = self.weights.push(0);
    }

    pub fn increase(&mut self, domain: DomainId) {
        self.weights[domain] += 1;
    }

    pub fn get(&self, domain: DomainId) -> u32 {
        self.weights[domain]
    }
}
