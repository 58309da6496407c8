use crate::errors::OracleError;
use crate::models::{SampleMatrix, VarId};

/// Conditional-independence oracle.
///
/// Returns a significance value for "`x` ⫫ `y` | `conditioning`". The value
/// must lie in `[0, 1]` and must be deterministic for fixed arguments: the
/// estimator may call it in any order. Column encoding is entirely the
/// oracle's business.
pub trait IndependenceTest<T = f64>: Send + Sync {
    fn p_value(
        &self,
        data: &SampleMatrix<T>,
        x: VarId,
        y: VarId,
        conditioning: &[VarId],
    ) -> Result<f64, OracleError>;
}

/// Plain functions and closures are infallible oracles.
impl<T, F> IndependenceTest<T> for F
where
    F: Fn(&SampleMatrix<T>, VarId, VarId, &[VarId]) -> f64 + Send + Sync,
{
    fn p_value(
        &self,
        data: &SampleMatrix<T>,
        x: VarId,
        y: VarId,
        conditioning: &[VarId],
    ) -> Result<f64, OracleError> {
        Ok(self(data, x, y, conditioning))
    }
}
