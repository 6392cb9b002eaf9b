mod assignments;
mod domain_events;
mod event_sink;
pub mod propagation;
mod propagator_queue;
mod variable_weights;
mod watch_list_cp;

pub use assignments::Assignments;
pub use domain_events::IntDomainEvent;
pub use domain_events::PruningEvent;
pub(crate) use event_sink::EventSink;
pub(crate) use propagator_queue::PropagatorQueue;
pub use variable_weights::VariableWeights;
pub(crate) use watch_list_cp::WatchListCP;
