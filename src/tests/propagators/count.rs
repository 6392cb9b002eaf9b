#![cfg(test)]
use crate::engine::cp::PruningEvent;
use crate::engine::propagation::Propagator;
use crate::engine::test_helper::TestSolver;
use crate::engine::variables::DomainId;
use crate::propagators::CountPropagator;

#[test]
fn counter_is_tightened_to_the_number_of_fixed_and_possible_subjects() {
    let mut solver = TestSolver::default();

    let a = solver.new_sparse_variable(&[5]);
    let b = solver.new_sparse_variable(&[3, 5]);
    let c = solver.new_sparse_variable(&[3]);
    let counter = solver.new_variable(0, 3);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b, c], counter, 5);

    let outcome = solver.consistency(&propagator);

    assert_eq!(Ok(()), outcome.status);
    assert!(!outcome.entailed);
    solver.assert_bounds(counter, 1, 2);
    solver.assert_domain(b, &[3, 5]);
}

#[test]
fn reaching_the_upper_bound_removes_the_value_from_possible_subjects() {
    let mut solver = TestSolver::default();

    let a = solver.new_sparse_variable(&[5]);
    let b = solver.new_sparse_variable(&[3, 5]);
    let c = solver.new_sparse_variable(&[3]);
    let counter = solver.new_variable(0, 3);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b, c], counter, 5);

    let _ = solver.consistency(&propagator);
    solver.fix(counter, 1).expect("1 is in the counter domain");

    let outcome = solver.consistency(&propagator);

    assert_eq!(Ok(()), outcome.status);
    assert!(outcome.entailed);
    solver.assert_domain(b, &[3]);
    solver.assert_bounds(counter, 1, 1);
}

#[test]
fn possible_subjects_needed_for_the_lower_bound_are_fixed_to_the_value() {
    let mut solver = TestSolver::default();

    let a = solver.new_sparse_variable(&[7]);
    let b = solver.new_sparse_variable(&[7, 9]);
    let c = solver.new_sparse_variable(&[9]);
    let counter = solver.new_variable(2, 2);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b, c], counter, 7);

    let outcome = solver.consistency(&propagator);

    assert_eq!(Ok(()), outcome.status);
    assert!(outcome.entailed);
    solver.assert_domain(b, &[7]);
    solver.assert_bounds(counter, 2, 2);
}

#[test]
fn lower_bound_check_comes_first_when_no_subject_can_take_the_value() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(1, 3);
    let b = solver.new_variable(1, 3);
    let counter = solver.new_variable(0, 0);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b], counter, 9);

    let outcome = solver.consistency(&propagator);

    assert_eq!(Ok(()), outcome.status);
    assert!(outcome.entailed);
    solver.assert_bounds(a, 1, 3);
    solver.assert_bounds(b, 1, 3);
    solver.assert_bounds(counter, 0, 0);
}

#[test]
fn too_few_possible_subjects_is_a_failure() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(1, 3);
    let b = solver.new_variable(4, 6);
    let counter = solver.new_variable(2, 2);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b], counter, 2);

    let outcome = solver.consistency(&propagator);

    assert!(outcome.status.is_err());
}

#[test]
fn too_many_fixed_subjects_is_a_failure_on_the_counter() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(2, 2);
    let b = solver.new_variable(2, 2);
    let c = solver.new_variable(1, 2);
    let counter = solver.new_variable(0, 1);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b, c], counter, 2);

    let outcome = solver.consistency(&propagator);

    let error = outcome.status.expect_err("two subjects are fixed to the value");
    assert_eq!(counter, error.domain);
    solver.assert_bounds(counter, 0, 1);
}

#[test]
fn duplicate_subjects_are_counted_for_every_occurrence() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(4, 4);
    let counter = solver.new_variable(0, 5);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, a, a], counter, 4);

    let _ = solver.consistency(&propagator);

    solver.assert_bounds(counter, 3, 3);
    assert_eq!(&[a, counter], propagator.scope());
}

#[test]
fn a_second_consistency_call_changes_nothing() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(0, 4);
    let b = solver.new_variable(1, 4);
    let c = solver.new_variable(4, 4);
    let counter = solver.new_variable(0, 10);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b, c], counter, 1);

    let first = solver.consistency(&propagator);
    let num_trail_entries = solver.store.assignments().num_trail_entries();
    let second = solver.consistency(&propagator);

    assert_eq!(Ok(()), first.status);
    assert_eq!(Ok(()), second.status);
    assert_eq!(
        num_trail_entries,
        solver.store.assignments().num_trail_entries()
    );
    solver.assert_bounds(counter, 0, 2);
}

#[test]
fn counter_bounds_match_the_subject_classification() {
    let mut solver = TestSolver::default();

    let subjects = [
        solver.new_sparse_variable(&[1, 3]),
        solver.new_sparse_variable(&[3]),
        solver.new_sparse_variable(&[0, 2, 3]),
        solver.new_sparse_variable(&[1, 2]),
    ];
    let counter = solver.new_variable(-5, 10);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, subjects, counter, 3);

    let _ = solver.consistency(&propagator);

    // One subject is fixed to 3, two others can still take it.
    solver.assert_bounds(counter, 1, 3);
}

#[test]
fn satisfied_only_when_counter_is_fixed_to_the_count() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(5, 5);
    let b = solver.new_variable(5, 5);
    let c = solver.new_variable(3, 3);
    let counter = solver.new_variable(1, 2);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b, c], counter, 5);

    assert!(!solver.is_satisfied(&propagator));

    solver.increase_level();
    solver.fix(counter, 1).expect("1 is in the counter domain");
    assert!(!solver.is_satisfied(&propagator));

    solver.backtrack(0);
    solver.fix(counter, 2).expect("2 is in the counter domain");
    assert!(solver.is_satisfied(&propagator));
}

#[test]
fn satisfied_only_looks_at_subjects_fixed_to_the_value() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(5, 5);
    let b = solver.new_variable(4, 5);
    let counter = solver.new_variable(1, 1);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b], counter, 5);

    assert!(solver.is_satisfied(&propagator));
}

#[test]
fn not_satisfied_while_fewer_subjects_are_fixed_than_counted() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(5, 5);
    let b = solver.new_variable(4, 5);
    let counter = solver.new_variable(2, 2);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b], counter, 5);

    assert!(!solver.is_satisfied(&propagator));
}

#[test]
fn counter_at_the_smallest_integer_fails_without_overflowing() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(5, 5);
    let counter = solver.new_variable(i32::MIN, i32::MIN);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a], counter, 5);

    let outcome = solver.consistency(&propagator);

    assert!(outcome.status.is_err());
    assert!(!outcome.entailed);
}

#[test]
fn default_pruning_event_is_any_and_can_be_overridden() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(0, 3);
    let b = solver.new_variable(0, 3);
    let counter = solver.new_variable(0, 2);

    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b], counter, 1)
        .with_consistency_event(counter, PruningEvent::Bound);

    assert_eq!(PruningEvent::Any, propagator.pruning_event_of(a, false));
    assert_eq!(PruningEvent::Any, propagator.pruning_event_of(b, true));
    assert_eq!(
        PruningEvent::Bound,
        propagator.pruning_event_of(counter, false)
    );
    assert_eq!(PruningEvent::Any, propagator.pruning_event_of(counter, true));
}

#[test]
fn description_lists_value_subjects_and_counter() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(0, 3);
    let b = solver.new_variable(0, 3);
    let counter = solver.new_variable(0, 2);

    let _ = solver.new_constraint_id();
    let id = solver.new_constraint_id();
    let propagator = CountPropagator::new(id, [a, b], counter, 1);

    let description = "Count1 : count(1,[x0, x1], x2 )";
    assert_eq!(description, propagator.to_string());

    let _ = solver.consistency(&propagator);
    assert_eq!(description, propagator.to_string());
}

#[test]
fn imposed_count_is_driven_to_a_fixpoint() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(0, 1);
    let b = solver.new_variable(0, 1);
    let counter = solver.new_variable(2, 5);

    let id = solver.new_constraint_id();
    let propagator_id = solver
        .new_propagator(CountPropagator::new(id, [a, b], counter, 1))
        .expect("no empty domain");

    solver.assert_bounds(a, 1, 1);
    solver.assert_bounds(b, 1, 1);
    solver.assert_bounds(counter, 2, 2);
    assert!(solver.store.is_entailed(propagator_id));
}

#[test]
fn counter_fixed_by_its_own_tightening_is_propagated_again() {
    let mut solver = TestSolver::default();

    let a = solver.new_variable(0, 1);
    let b = solver.new_variable(0, 1);
    let counter = solver.new_sparse_variable(&[-1, 2]);

    let id = solver.new_constraint_id();
    let propagator_id = solver
        .new_propagator(CountPropagator::new(id, [a, b], counter, 0))
        .expect("no empty domain");

    solver.assert_bounds(counter, 2, 2);
    solver.assert_bounds(a, 0, 0);
    solver.assert_bounds(b, 0, 0);
    assert!(solver.store.is_entailed(propagator_id));
}

#[test]
fn empty_subject_list_fixes_the_counter_to_zero() {
    let mut solver = TestSolver::default();

    let counter = solver.new_variable(0, 4);
    let subjects: [DomainId; 0] = [];

    let id = solver.new_constraint_id();
    let _ = solver
        .new_propagator(CountPropagator::new(id, subjects, counter, 1))
        .expect("no empty domain");

    solver.assert_bounds(counter, 0, 0);
}
