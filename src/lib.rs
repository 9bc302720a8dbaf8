mod bandwidth;
pub mod distance_measure;
mod error;
mod meanshift;
mod parameters;
pub mod synthetic;
#[cfg(test)]
mod test_utils;
mod utils;

pub use bandwidth::estimate_bandwidth;
pub use distance_measure::{DistanceMeasure, Euclidean};
pub use error::{Error, Result};
pub use meanshift::MeanShift;
pub use parameters::Parameters;
pub use synthetic::{generate_blob, generate_blobs};
pub use utils::{LibData, SliceComp};
