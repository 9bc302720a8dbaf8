use crate::utils::LibData;

/// Hyperparameters of the flat-kernel mean shift procedure.
#[derive(Clone, Debug)]
pub struct Parameters<A: LibData> {
    /// Radius of the flat kernel. Only points strictly inside this radius
    /// pull a candidate toward their mean. Must be strictly positive.
    pub bandwidth: A,
    /// Hard cap on shift passes. Exhausting it without reaching `tol` is a
    /// normal termination, not an error.
    pub max_iter: usize,
    /// Convergence threshold on the aggregate candidate shift per pass.
    pub tol: A,
}

impl<A: LibData> Default for Parameters<A> {
    fn default() -> Self {
        Self {
            bandwidth: A::one(),
            max_iter: 300,
            tol: A::from_f64(1e-3).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_configuration() {
        let parameters = Parameters::<f64>::default();

        assert_eq!(1.0, parameters.bandwidth);
        assert_eq!(300, parameters.max_iter);
        assert_eq!(1e-3, parameters.tol);
    }
}
