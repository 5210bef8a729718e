use nalgebra::{DMatrix, DVector};
use orthocam_core::Real;
use serde::{Deserialize, Serialize};

/// Generic non-linear least squares problem with dense parameter/residual
/// vectors.
///
/// Implementations must be pure: evaluating residuals or the Jacobian for
/// the same parameters any number of times yields the same values, with a
/// stable row/column ordering. Solvers rely on this when assembling
/// finite-difference approximations.
pub trait NllsProblem {
    /// Number of parameters in the optimization vector.
    fn num_params(&self) -> usize;
    /// Number of residual rows in the problem.
    fn num_residuals(&self) -> usize;

    /// Residual vector for the current parameters.
    fn residuals(&self, x: &DVector<Real>) -> DVector<Real>;
    /// Jacobian of the residuals for the current parameters.
    fn jacobian(&self, x: &DVector<Real>) -> DMatrix<Real>;
}

#[derive(Debug, Clone, Copy)]
pub struct SolveOptions {
    /// Maximum number of solver iterations before termination.
    ///
    /// Backends may interpret this as a function-evaluation cap; the LM
    /// backend follows the MINPACK patience convention.
    pub max_iters: usize,
    /// Relative tolerance on the objective (cost) reduction.
    pub ftol: Real,
    /// Orthogonality/gradient tolerance.
    pub gtol: Real,
    /// Relative tolerance on parameter updates.
    pub xtol: Real,
    /// Log the final report at debug level.
    pub verbose: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iters: 200,
            ftol: 1e-10,
            gtol: 1e-10,
            xtol: 1e-10,
            verbose: false,
        }
    }
}

/// Outcome of one solve: how hard the solver worked and where it stopped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Residual evaluations consumed.
    pub iterations: usize,
    /// Objective value (half the squared residual norm) at the solution.
    pub final_cost: Real,
    /// Whether the backend's termination criterion counts as success.
    pub converged: bool,
}

pub trait NllsSolverBackend {
    fn solve<P: NllsProblem>(
        &self,
        problem: &P,
        x0: DVector<Real>,
        opts: &SolveOptions,
    ) -> (DVector<Real>, SolveReport);
}
