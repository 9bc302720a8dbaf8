use ndarray::{s, Array, Array2, ArrayView1, ArrayView2};
use ndarray_rand::rand::Rng;
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;

/// Generate `blob_size` points around each row of `blob_centroids`, sampled
/// from a normal distribution with standard deviation `spread`.
///
/// A quick way to assemble a synthetic dataset with a known number of
/// well-separated clusters.
pub fn generate_blobs(
    blob_size: usize,
    blob_centroids: ArrayView2<f64>,
    spread: f64,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let (n_centroids, n_features) = blob_centroids.dim();
    let mut blobs = Array2::zeros((n_centroids * blob_size, n_features));

    for (blob_index, blob_centroid) in blob_centroids.rows().into_iter().enumerate() {
        let blob = generate_blob(blob_size, blob_centroid, spread, rng);

        let indexes = s![blob_index * blob_size..(blob_index + 1) * blob_size, ..];
        blobs.slice_mut(indexes).assign(&blob);
    }

    blobs
}

/// Generate a single blob of `blob_size` points around `blob_centroid`.
pub fn generate_blob(
    blob_size: usize,
    blob_centroid: ArrayView1<f64>,
    spread: f64,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let shape = (blob_size, blob_centroid.len());
    let origin_blob: Array2<f64> = Array::random_using(shape, StandardNormal, rng);

    origin_blob * spread + blob_centroid
}
