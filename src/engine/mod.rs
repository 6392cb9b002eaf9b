pub mod cp;
mod propagation_store;
pub mod variables;

pub use cp::propagation;
pub use propagation_store::PropagationStore;
pub use propagation_store::StoreOptions;
