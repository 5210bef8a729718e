//! Levenberg-Marquardt backend built on the `levenberg-marquardt` crate.

use crate::{NllsProblem, NllsSolverBackend, SolveOptions, SolveReport};
use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use log::debug;
use nalgebra::{storage::Owned, DMatrix, DVector, Dyn};
use orthocam_core::Real;

/// Adapts an [`NllsProblem`] to the crate's `LeastSquaresProblem` trait.
///
/// The wrapper owns the current parameter iterate; the problem itself stays
/// borrowed and immutable for the whole solve.
struct LmAdapter<'a, P: NllsProblem> {
    problem: &'a P,
    params: DVector<Real>,
}

impl<'a, P: NllsProblem> LeastSquaresProblem<Real, Dyn, Dyn> for LmAdapter<'a, P> {
    type ResidualStorage = Owned<Real, Dyn>;
    type JacobianStorage = Owned<Real, Dyn, Dyn>;
    type ParameterStorage = Owned<Real, Dyn>;

    fn set_params(&mut self, x: &DVector<Real>) {
        self.params.clone_from(x);
    }

    fn params(&self) -> DVector<Real> {
        self.params.clone()
    }

    fn residuals(&self) -> Option<DVector<Real>> {
        Some(self.problem.residuals(&self.params))
    }

    fn jacobian(&self) -> Option<DMatrix<Real>> {
        Some(self.problem.jacobian(&self.params))
    }
}

/// [`NllsSolverBackend`] running damped least squares to convergence or the
/// iteration cap.
#[derive(Debug, Default, Clone)]
pub struct LmBackend;

impl NllsSolverBackend for LmBackend {
    fn solve<P: NllsProblem>(
        &self,
        problem: &P,
        x0: DVector<Real>,
        opts: &SolveOptions,
    ) -> (DVector<Real>, SolveReport) {
        let lm = LevenbergMarquardt::new()
            .with_ftol(opts.ftol)
            .with_xtol(opts.xtol)
            .with_gtol(opts.gtol)
            .with_patience(opts.max_iters.max(1));

        let adapter = LmAdapter { problem, params: x0 };
        let (adapter, lm_report) = lm.minimize(adapter);
        let x_opt = adapter.params();

        let report = SolveReport {
            iterations: lm_report.number_of_evaluations,
            final_cost: lm_report.objective_function,
            converged: lm_report.termination.was_successful(),
        };
        if opts.verbose {
            debug!(
                "LM terminated: {:?} after {} evaluations, cost {:.6e}",
                lm_report.termination, report.iterations, report.final_cost
            );
        }

        (x_opt, report)
    }
}
