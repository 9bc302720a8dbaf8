use crate::distance_measure::DistanceMeasure;
use crate::utils::LibData;
use anyhow::{anyhow, Result};
use kdtree::distance::squared_euclidean;
use ndarray::{Array1, ArrayView1};

#[derive(Copy, Clone, Default)]
pub struct Euclidean;

impl<A: LibData> DistanceMeasure<A> for Euclidean {
    fn distance(point_a: &[A], point_b: &[A]) -> A {
        squared_euclidean(point_a, point_b).sqrt()
    }

    fn mean(points: &[ArrayView1<A>]) -> Result<Array1<A>> {
        let first = points
            .first()
            .ok_or_else(|| anyhow!("cannot take the mean of an empty point set"))?;

        let mut sum = Array1::zeros(first.len());
        for point in points {
            sum = sum + point;
        }

        Ok(sum / A::from_usize(points.len()).unwrap())
    }
}
