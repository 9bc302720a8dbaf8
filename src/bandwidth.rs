use crate::error::{Error, Result};
use crate::utils::{LibData, RefArray};
use kdtree::distance::squared_euclidean;
use kdtree::KdTree;
use log::debug;
use ndarray::{ArrayView2, Axis};
use rayon::prelude::*;

/// Estimate a kernel radius for `data` as the average distance of each point
/// to its k-th nearest neighbor, with k at the 0.3 quantile of the dataset
/// size.
///
/// A starting point for choosing [`crate::Parameters::bandwidth`]; the
/// clustering itself never calls this implicitly.
pub fn estimate_bandwidth<A: LibData>(data: ArrayView2<A>) -> Result<A> {
    if data.nrows() == 0 {
        return Err(Error::EmptyDataset);
    }

    let quantile = A::from_f32(0.3).unwrap();
    let data_rows = A::from_usize(data.nrows()).unwrap();
    let n_neighbors = (data_rows * quantile).max(A::one()).to_usize().unwrap();
    debug!("estimating bandwidth over {} neighbors", n_neighbors);

    let data = data.as_standard_layout();
    let mut tree = KdTree::new(data.ncols());
    for (i, point) in data.axis_iter(Axis(0)).enumerate() {
        tree.add(RefArray(point.to_shared()), i).unwrap();
    }

    let bandwidth: A = data
        .axis_iter(Axis(0))
        .into_par_iter()
        .map(|point| {
            let nearest = tree
                .nearest(point.to_slice().unwrap(), n_neighbors, &squared_euclidean)
                .unwrap();
            nearest
                .into_iter()
                .map(|(dist, _)| dist)
                .fold(A::zero(), A::max)
                .sqrt()
        })
        .sum();

    Ok(bandwidth / data_rows)
}
