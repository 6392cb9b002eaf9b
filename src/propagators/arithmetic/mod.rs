mod greater_than_constant;

pub use greater_than_constant::GreaterThanConstantPropagator;
