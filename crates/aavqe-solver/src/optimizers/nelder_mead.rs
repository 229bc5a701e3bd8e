//! Nelder-Mead downhill-simplex minimizer.
//!
//! Derivative-free, which suits variational loops where the objective is a
//! full circuit evaluation and gradients are not available. The evaluation
//! budget is a hard cap counting every objective call, simplex construction
//! included; when it runs out mid-move the search stops and reports the best
//! vertex seen so far.

use super::Optimizer;

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Optimal parameter values.
    pub optimal_params: Vec<f64>,
    /// Optimal objective value. NaN when the budget was zero and the
    /// objective was never called.
    pub optimal_value: f64,
    /// Number of objective evaluations actually spent.
    pub num_evaluations: usize,
    /// Number of completed simplex iterations.
    pub num_iterations: usize,
    /// Best objective value after each iteration, non-increasing.
    pub history: Vec<f64>,
    /// Whether the simplex met the tolerances before the budget ran out.
    pub converged: bool,
}

/// Reflection, expansion, contraction, and shrink coefficients of the
/// standard downhill simplex.
const RHO: f64 = 1.0;
const CHI: f64 = 2.0;
const PSI: f64 = 0.5;
const SIGMA: f64 = 0.5;

/// Initial-simplex displacement: relative for nonzero coordinates, absolute
/// where a coordinate is exactly zero. The absolute fallback matters here
/// because AAVQE warm starts sit near zero.
const NONZDELT: f64 = 0.05;
const ZDELT: f64 = 0.00025;

/// Nelder-Mead optimizer configuration.
#[derive(Debug, Clone)]
pub struct NelderMead {
    /// Hard cap on objective evaluations.
    pub max_evals: usize,
    /// Convergence tolerance on the simplex coordinate spread.
    pub xatol: f64,
    /// Convergence tolerance on the simplex value spread.
    pub fatol: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            max_evals: 5000,
            xatol: 1e-4,
            fatol: 1e-4,
        }
    }
}

impl NelderMead {
    /// Create a new Nelder-Mead optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation budget.
    #[must_use]
    pub fn with_max_evals(mut self, max_evals: usize) -> Self {
        self.max_evals = max_evals;
        self
    }

    /// Set the coordinate and value convergence tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, xatol: f64, fatol: f64) -> Self {
        self.xatol = xatol;
        self.fatol = fatol;
        self
    }
}

impl Optimizer for NelderMead {
    fn minimize<F>(&self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let n = initial_params.len();
        let budget = self.max_evals;
        let mut evals = 0;

        let Some(f_start) = call(&mut objective, &initial_params, &mut evals, budget) else {
            // Zero budget: hand the caller back their own point, unevaluated.
            return OptimizationResult {
                optimal_params: initial_params,
                optimal_value: f64::NAN,
                num_evaluations: 0,
                num_iterations: 0,
                history: Vec::new(),
                converged: false,
            };
        };

        let mut simplex = vec![initial_params.clone()];
        let mut values = vec![f_start];
        for i in 0..n {
            let mut vertex = initial_params.clone();
            if vertex[i] == 0.0 {
                vertex[i] = ZDELT;
            } else {
                vertex[i] *= 1.0 + NONZDELT;
            }
            match call(&mut objective, &vertex, &mut evals, budget) {
                Some(f) => {
                    simplex.push(vertex);
                    values.push(f);
                }
                None => return finish(simplex, values, evals, 0, Vec::new(), false),
            }
        }

        let mut history = Vec::new();
        let mut iterations = 0;
        let mut converged = false;

        loop {
            sort_vertices(&mut simplex, &mut values);

            let f_spread = values[1..]
                .iter()
                .map(|f| (f - values[0]).abs())
                .fold(0.0, f64::max);
            let x_spread = simplex[1..]
                .iter()
                .flat_map(|vertex| vertex.iter().zip(&simplex[0]).map(|(a, b)| (a - b).abs()))
                .fold(0.0, f64::max);
            if x_spread <= self.xatol && f_spread <= self.fatol {
                converged = true;
                break;
            }

            let centroid = centroid_excluding_worst(&simplex, n);
            let reflected = blend(&centroid, 1.0 + RHO, &simplex[n], -RHO);
            let Some(f_reflected) = call(&mut objective, &reflected, &mut evals, budget) else {
                break;
            };

            if f_reflected < values[0] {
                let expanded = blend(&centroid, 1.0 + RHO * CHI, &simplex[n], -RHO * CHI);
                match call(&mut objective, &expanded, &mut evals, budget) {
                    Some(f_expanded) if f_expanded < f_reflected => {
                        simplex[n] = expanded;
                        values[n] = f_expanded;
                    }
                    Some(_) => {
                        simplex[n] = reflected;
                        values[n] = f_reflected;
                    }
                    None => {
                        simplex[n] = reflected;
                        values[n] = f_reflected;
                        break;
                    }
                }
            } else if f_reflected < values[n - 1] {
                simplex[n] = reflected;
                values[n] = f_reflected;
            } else {
                let mut shrink = false;
                if f_reflected < values[n] {
                    // Outside contraction, between the centroid and the
                    // reflected point.
                    let contracted = blend(&centroid, 1.0 + PSI * RHO, &simplex[n], -PSI * RHO);
                    match call(&mut objective, &contracted, &mut evals, budget) {
                        Some(f_contracted) if f_contracted <= f_reflected => {
                            simplex[n] = contracted;
                            values[n] = f_contracted;
                        }
                        Some(_) => shrink = true,
                        None => {
                            simplex[n] = reflected;
                            values[n] = f_reflected;
                            break;
                        }
                    }
                } else {
                    // Inside contraction, between the centroid and the worst
                    // vertex.
                    let contracted = blend(&centroid, 1.0 - PSI, &simplex[n], PSI);
                    match call(&mut objective, &contracted, &mut evals, budget) {
                        Some(f_contracted) if f_contracted < values[n] => {
                            simplex[n] = contracted;
                            values[n] = f_contracted;
                        }
                        Some(_) => shrink = true,
                        None => break,
                    }
                }
                if shrink {
                    let mut exhausted = false;
                    for j in 1..=n {
                        let moved = blend(&simplex[0], 1.0 - SIGMA, &simplex[j], SIGMA);
                        match call(&mut objective, &moved, &mut evals, budget) {
                            Some(f_moved) => {
                                simplex[j] = moved;
                                values[j] = f_moved;
                            }
                            None => {
                                exhausted = true;
                                break;
                            }
                        }
                    }
                    if exhausted {
                        break;
                    }
                }
            }

            iterations += 1;
            history.push(values.iter().copied().fold(f64::INFINITY, f64::min));
        }

        finish(simplex, values, evals, iterations, history, converged)
    }
}

fn call<F>(objective: &mut F, point: &[f64], evals: &mut usize, budget: usize) -> Option<f64>
where
    F: FnMut(&[f64]) -> f64,
{
    if *evals >= budget {
        return None;
    }
    *evals += 1;
    Some(objective(point))
}

/// Order the vertices best-first. Stable, so ties keep their relative order
/// and the search stays deterministic.
fn sort_vertices(simplex: &mut Vec<Vec<f64>>, values: &mut Vec<f64>) {
    let mut paired: Vec<(f64, Vec<f64>)> = values.drain(..).zip(simplex.drain(..)).collect();
    paired.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (value, vertex) in paired {
        values.push(value);
        simplex.push(vertex);
    }
}

fn centroid_excluding_worst(simplex: &[Vec<f64>], n: usize) -> Vec<f64> {
    let mut centroid = vec![0.0; n];
    for vertex in &simplex[..n] {
        for (c, x) in centroid.iter_mut().zip(vertex) {
            *c += x;
        }
    }
    for c in &mut centroid {
        *c /= n as f64;
    }
    centroid
}

/// `wa * a + wb * b`, component-wise.
fn blend(a: &[f64], wa: f64, b: &[f64], wb: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| wa * x + wb * y).collect()
}

fn finish(
    mut simplex: Vec<Vec<f64>>,
    values: Vec<f64>,
    num_evaluations: usize,
    num_iterations: usize,
    history: Vec<f64>,
    converged: bool,
) -> OptimizationResult {
    let mut best = 0;
    for (i, value) in values.iter().enumerate() {
        if value.total_cmp(&values[best]).is_lt() {
            best = i;
        }
    }
    OptimizationResult {
        optimal_params: simplex.swap_remove(best),
        optimal_value: values[best],
        num_evaluations,
        num_iterations,
        history,
        converged,
    }
}
