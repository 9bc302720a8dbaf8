use crate::utils::LibData;
use anyhow::Result;
use ndarray::{Array1, ArrayView1};

pub mod euclidean;

pub use euclidean::Euclidean;

pub trait DistanceMeasure<A: LibData> where Self: Default + Copy + Clone + Sync {
    fn distance(point_a: &[A], point_b: &[A]) -> A;
    fn mean(points: &[ArrayView1<A>]) -> Result<Array1<A>>;
}
