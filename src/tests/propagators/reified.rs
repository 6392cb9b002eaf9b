#![cfg(test)]
use crate::engine::cp::PruningEvent;
use crate::engine::propagation::Propagator;
use crate::engine::test_helper::TestSolver;
use crate::propagators::GreaterThanConstantPropagator;
use crate::propagators::ReifiedPropagator;

#[test]
fn reification_true_enforces_the_constraint() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(0, 10);
    let b = solver.new_variable(1, 1);

    let inner = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let propagator_id = solver
        .new_propagator(ReifiedPropagator::new(
            id,
            GreaterThanConstantPropagator::new(inner, x, 5),
            b,
        ))
        .expect("no empty domain");

    solver.assert_bounds(x, 6, 10);
    assert!(solver.store.is_entailed(propagator_id));
}

#[test]
fn reification_false_enforces_the_negation() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(0, 10);
    let b = solver.new_variable(0, 0);

    let inner = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let _ = solver
        .new_propagator(ReifiedPropagator::new(
            id,
            GreaterThanConstantPropagator::new(inner, x, 5),
            b,
        ))
        .expect("no empty domain");

    solver.assert_bounds(x, 0, 5);
}

#[test]
fn reification_is_fixed_once_the_constraint_is_decided() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(0, 10);
    let b = solver.new_variable(0, 1);

    let inner = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let propagator_id = solver
        .new_propagator(ReifiedPropagator::new(
            id,
            GreaterThanConstantPropagator::new(inner, x, 5),
            b,
        ))
        .expect("no empty domain");

    solver.assert_bounds(b, 0, 1);
    assert!(!solver.store.is_entailed(propagator_id));

    solver.increase_level();
    solver.set_upper_bound(x, 4).expect("non-empty domain");
    solver.propagate().expect("no empty domain");

    solver.assert_bounds(b, 0, 0);
    assert!(solver.store.is_entailed(propagator_id));

    solver.backtrack(0);
    solver.increase_level();
    solver.set_lower_bound(x, 7).expect("non-empty domain");
    solver.propagate().expect("no empty domain");

    solver.assert_bounds(b, 1, 1);
}

#[test]
fn reification_variable_is_restricted_to_zero_and_one() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(0, 10);
    let b = solver.new_variable(-4, 4);

    let inner = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let _ = solver
        .new_propagator(ReifiedPropagator::new(
            id,
            GreaterThanConstantPropagator::new(inner, x, 5),
            b,
        ))
        .expect("no empty domain");

    solver.assert_bounds(b, 0, 1);
}

#[test]
fn wrapped_variables_use_the_more_sensitive_pruning_event() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(0, 10);
    let b = solver.new_variable(0, 1);

    let inner = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let propagator = ReifiedPropagator::new(
        id,
        GreaterThanConstantPropagator::new(inner, x, 5)
            .with_consistency_event(PruningEvent::None)
            .with_not_consistency_event(PruningEvent::Any),
        b,
    );

    assert_eq!(PruningEvent::Any, propagator.pruning_event_of(x, false));
    assert_eq!(PruningEvent::Any, propagator.pruning_event_of(b, false));
    assert_eq!(&[x, b], propagator.scope());
}

#[test]
fn description_wraps_the_inner_description() {
    let mut solver = TestSolver::default();

    let x = solver.new_variable(0, 10);
    let b = solver.new_variable(0, 1);

    let inner = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let propagator =
        ReifiedPropagator::new(id, GreaterThanConstantPropagator::new(inner, x, 5), b);

    assert_eq!(
        "Reified1 : Reified(XgtC0 : XgtC(x0, 5 ), x1 )",
        propagator.to_string()
    );
}
