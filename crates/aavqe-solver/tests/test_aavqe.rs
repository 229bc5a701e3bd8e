//! Integration tests for the adiabatic schedule.

use std::cell::RefCell;

use aavqe_circuit::Ansatz;
use aavqe_model::{Hamiltonian, Model};
use aavqe_operator::ground_energy;
use aavqe_solver::{
    AavqeSchedule, NelderMead, OptimizationResult, Optimizer, SolverError,
};
use approx::assert_abs_diff_eq;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Optimizer double that never calls the objective. It hands back a fixed
/// floating-point transform of its starting point and records every
/// (input, output) pair, so tests can check exactly what the schedule feeds
/// it step by step.
struct EchoOptimizer {
    calls: RefCell<Vec<(Vec<f64>, Vec<f64>)>>,
}

impl EchoOptimizer {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Optimizer for EchoOptimizer {
    fn minimize<F>(&self, _objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let output: Vec<f64> = initial_params.iter().map(|x| x * 1.1 + 0.3).collect();
        self.calls
            .borrow_mut()
            .push((initial_params, output.clone()));
        OptimizationResult {
            optimal_params: output,
            optimal_value: -1.0,
            num_evaluations: 0,
            num_iterations: 0,
            history: Vec::new(),
            converged: true,
        }
    }
}

fn two_qubit_schedule() -> AavqeSchedule {
    AavqeSchedule::new(
        Hamiltonian::reference(2),
        Hamiltonian::transverse_ising(2, 1.0),
        Ansatz::layered(2, 1),
    )
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn schedule_exposes_its_configuration() {
    let schedule = two_qubit_schedule();
    assert_eq!(schedule.t_max(), AavqeSchedule::DEFAULT_T_MAX);

    let schedule = schedule.with_t_max(7);
    assert_eq!(schedule.t_max(), 7);
    assert_eq!(schedule.ansatz().num_parameters(), 6);
    assert_eq!(schedule.reference().model(), Model::Reference);
    assert_eq!(
        schedule.problem().model(),
        Model::TransverseIsing { coupling: 1.0 }
    );
}

#[test]
fn t_max_zero_is_rejected_before_any_work() {
    let schedule = two_qubit_schedule().with_t_max(0);
    let spy = EchoOptimizer::new();

    let err = schedule.run(&spy, vec![0.0; 6]).unwrap_err();

    assert!(matches!(err, SolverError::InvalidSchedule(0)));
    assert!(spy.calls.borrow().is_empty());
}

#[test]
fn wrong_parameter_count_is_rejected() {
    let schedule = two_qubit_schedule().with_t_max(1);
    let spy = EchoOptimizer::new();

    let err = schedule.run(&spy, vec![0.0; 5]).unwrap_err();

    assert!(matches!(
        err,
        SolverError::ParameterCount {
            expected: 6,
            actual: 5
        }
    ));
    assert!(spy.calls.borrow().is_empty());
}

#[test]
fn mismatched_reference_dimension_is_rejected() {
    let schedule = AavqeSchedule::new(
        Hamiltonian::reference(3),
        Hamiltonian::transverse_ising(2, 1.0),
        Ansatz::layered(2, 1),
    )
    .with_t_max(1);
    let spy = EchoOptimizer::new();

    let err = schedule.run(&spy, vec![0.0; 6]).unwrap_err();

    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            role: "reference",
            expected: 4,
            actual: 8
        }
    ));
    assert!(spy.calls.borrow().is_empty());
}

#[test]
fn mismatched_problem_dimension_is_rejected() {
    let schedule = AavqeSchedule::new(
        Hamiltonian::reference(2),
        Hamiltonian::transverse_ising(3, 1.0),
        Ansatz::layered(2, 1),
    )
    .with_t_max(1);
    let spy = EchoOptimizer::new();

    let err = schedule.run(&spy, vec![0.0; 6]).unwrap_err();

    assert!(matches!(
        err,
        SolverError::DimensionMismatch {
            role: "problem",
            expected: 4,
            actual: 8
        }
    ));
}

// ---------------------------------------------------------------------------
// Scheduling semantics
// ---------------------------------------------------------------------------

#[test]
fn warm_start_hands_each_step_the_previous_optimum() {
    let schedule = two_qubit_schedule().with_t_max(3);
    let spy = EchoOptimizer::new();
    let initial = vec![0.007, 0.002, 0.009, 0.001, 0.004, 0.008];

    let outcome = schedule.run(&spy, initial.clone()).unwrap();

    let calls = spy.calls.borrow();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0].0, initial);
    for t in 0..3 {
        let handed_back = &calls[t].1;
        let handed_in = &calls[t + 1].0;
        assert_eq!(handed_in.len(), handed_back.len());
        for (a, b) in handed_in.iter().zip(handed_back) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
    assert_eq!(outcome.parameters, calls[3].1);
}

#[test]
fn step_records_cover_the_full_fraction_range() {
    let schedule = two_qubit_schedule().with_t_max(4);
    let spy = EchoOptimizer::new();

    let outcome = schedule.run(&spy, vec![0.0; 6]).unwrap();

    assert_eq!(outcome.steps.len(), 5);
    for (t, record) in outcome.steps.iter().enumerate() {
        assert_eq!(record.step, t);
        assert_eq!(record.fraction, t as f64 / 4.0);
    }
    assert_eq!(outcome.steps[0].fraction, 0.0);
    assert_eq!(outcome.steps[4].fraction, 1.0);
    assert_eq!(outcome.energy, -1.0);
}

#[test]
fn per_step_evaluations_stay_within_budget() {
    let schedule = two_qubit_schedule().with_t_max(2);
    let optimizer = NelderMead::new().with_max_evals(50);

    let outcome = schedule
        .run(&optimizer, vec![0.1, 0.2, 0.15, 0.05, 0.25, 0.12])
        .unwrap();

    assert_eq!(outcome.steps.len(), 3);
    for record in &outcome.steps {
        assert!(record.evaluations > 0);
        assert!(record.evaluations <= 50);
    }
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn two_qubit_run_lands_between_the_two_ground_energies() {
    let reference = Hamiltonian::reference(2);
    let problem = Hamiltonian::transverse_ising(2, 1.0);
    let exact = ground_energy(problem.matrix());
    assert_abs_diff_eq!(exact, -2.0 * 2.0f64.sqrt(), epsilon = 1e-9);

    let schedule = AavqeSchedule::new(reference, problem, Ansatz::layered(2, 1)).with_t_max(1);
    let optimizer = NelderMead::new()
        .with_max_evals(2000)
        .with_tolerances(1e-6, 1e-6);

    // Small positive starting angles, as the driver draws them, but large
    // enough that the warm-started simplex at s = 1 has a usable spread.
    let initial = vec![0.31, 0.22, 0.14, 0.27, 0.18, 0.25];
    let outcome = schedule.run(&optimizer, initial).unwrap();

    // Step 0 optimizes against the reference alone, so its energy is a
    // variational bound on the reference ground energy -2.
    assert!(outcome.steps[0].energy >= -2.0 - 1e-9);
    assert!(outcome.steps[0].energy < -1.9);

    // The final energy is a variational bound on the Ising ground energy and
    // must have escaped the reference optimum. No claim about monotonicity
    // in between.
    assert!(outcome.energy >= exact - 1e-9);
    assert!(outcome.energy < -2.0);
    assert_eq!(outcome.parameters.len(), 6);
    assert_eq!(outcome.steps.len(), 2);
}
