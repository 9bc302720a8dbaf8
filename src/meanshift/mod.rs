
use crate::distance_measure::{DistanceMeasure, Euclidean};
use crate::error::{Error, Result};
use crate::parameters::Parameters;
use crate::utils::LibData;
use log::debug;
use ndarray::{concatenate, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};
use rayon::prelude::*;
use std::marker::PhantomData;

/// Flat-kernel mean shift clustering.
///
/// Every input point seeds a candidate center. Candidates are shifted in
/// lockstep passes toward the mean of the points strictly inside their
/// bandwidth ball, until the aggregate shift falls below `tol` or `max_iter`
/// passes have run. The settled candidates are then pruned in input order so
/// that no two surviving centers are within `bandwidth` of each other.
#[derive(Default)]
pub struct MeanShift<A: LibData, D: DistanceMeasure<A> = Euclidean> {
    parameters: Parameters<A>,
    cluster_centers: Option<Array2<A>>,
    distance_measure: PhantomData<D>,
}

impl<A: LibData, D: DistanceMeasure<A>> MeanShift<A, D> {
    pub fn new(parameters: Parameters<A>) -> Self {
        Self {
            parameters,
            cluster_centers: None,
            distance_measure: PhantomData,
        }
    }

    /// Centers found by the last successful [`MeanShift::fit`], one per row.
    pub fn cluster_centers(&self) -> Option<ArrayView2<'_, A>> {
        self.cluster_centers.as_ref().map(|centers| centers.view())
    }

    /// Shift and prune candidate centers for `data`, one row per point.
    ///
    /// Replaces the result of any earlier fit. A rejected input leaves the
    /// previously fitted centers untouched.
    pub fn fit(&mut self, data: ArrayView2<A>) -> Result<()> {
        if data.nrows() == 0 {
            return Err(Error::EmptyDataset);
        }
        let bandwidth = self.parameters.bandwidth;
        if !(bandwidth > A::zero()) {
            return Err(Error::NonPositiveBandwidth);
        }

        let data = data.as_standard_layout();
        let mut current = data.to_owned();
        let mut next = Array2::zeros(current.raw_dim());

        let mut passes = 0;
        for _ in 0..self.parameters.max_iter {
            // All candidates read the previous snapshot and write into a
            // fresh buffer, so one pass never observes its own updates.
            Zip::from(next.rows_mut())
                .and(current.rows())
                .par_for_each(|mut shifted, candidate| {
                    shifted.assign(&shift_candidate::<A, D>(candidate, data.view(), bandwidth));
                });

            let shift = total_shift(next.view(), current.view());
            std::mem::swap(&mut current, &mut next);
            passes += 1;

            if shift < self.parameters.tol {
                break;
            }
        }
        debug!("candidates settled after {} of {} passes", passes, self.parameters.max_iter);

        let centers = prune_centers::<A, D>(current.view(), bandwidth);
        debug!("pruned {} candidates down to {} centers", current.nrows(), centers.nrows());

        self.cluster_centers = Some(centers);
        Ok(())
    }

    /// Index of the nearest fitted center for every row of `data`.
    ///
    /// Exact distance ties resolve to the lowest center index.
    pub fn predict(&self, data: ArrayView2<A>) -> Result<Vec<usize>> {
        let centers = self.cluster_centers.as_ref().ok_or(Error::NotFitted)?;

        if data.nrows() == 0 {
            return Err(Error::EmptyDataset);
        }
        if data.ncols() != centers.ncols() {
            return Err(Error::DimensionMismatch {
                expected: centers.ncols(),
                found: data.ncols(),
            });
        }

        let data = data.as_standard_layout();
        let labels = data
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|point| closest_center::<A, D>(point, centers.view()))
            .collect();

        Ok(labels)
    }

    /// [`MeanShift::fit`] followed by [`MeanShift::predict`] on the same data.
    pub fn fit_predict(&mut self, data: ArrayView2<A>) -> Result<Vec<usize>> {
        self.fit(data)?;
        self.predict(data)
    }
}

fn shift_candidate<A: LibData, D: DistanceMeasure<A>>(
    candidate: ArrayView1<A>,
    data: ArrayView2<A>,
    bandwidth: A,
) -> Array1<A> {
    let candidate_slice = candidate.to_slice().unwrap();

    let points_within: Vec<ArrayView1<A>> = data
        .rows()
        .into_iter()
        .filter(|point| D::distance(candidate_slice, point.to_slice().unwrap()) < bandwidth)
        .collect();

    // An empty ball keeps the candidate in place.
    D::mean(&points_within).unwrap_or_else(|_| candidate.to_owned())
}

fn total_shift<A: LibData>(new: ArrayView2<A>, old: ArrayView2<A>) -> A {
    new.iter()
        .zip(old.iter())
        .map(|(a, b)| (*a - *b) * (*a - *b))
        .sum::<A>()
        .sqrt()
}

fn prune_centers<A: LibData, D: DistanceMeasure<A>>(
    candidates: ArrayView2<A>,
    bandwidth: A,
) -> Array2<A> {
    let mut accepted: Vec<ArrayView1<A>> = Vec::new();

    for candidate in candidates.rows() {
        let candidate_slice = candidate.to_slice().unwrap();
        let is_distinct = accepted
            .iter()
            .all(|center| D::distance(candidate_slice, center.to_slice().unwrap()) > bandwidth);
        if is_distinct {
            accepted.push(candidate);
        }
    }

    let rows: Vec<ArrayView2<A>> = accepted
        .iter()
        .map(|center| center.view().insert_axis(Axis(0)))
        .collect();

    concatenate(Axis(0), rows.as_slice()).unwrap()
}

fn closest_center<A: LibData, D: DistanceMeasure<A>>(
    point: ArrayView1<A>,
    centers: ArrayView2<A>,
) -> usize {
    let point_slice = point.to_slice().unwrap();

    centers
        .rows()
        .into_iter()
        .map(|center| D::distance(point_slice, center.to_slice().unwrap()))
        .enumerate()
        .reduce(|(min_i, min), (i, x)| if x < min { (i, x) } else { (min_i, min) })
        .unwrap()
        .0
}
