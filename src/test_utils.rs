use crate::utils::{LibData, SliceComp};
use ndarray::{Array1, ArrayView2, Axis};

pub fn close_l1<A: LibData>(a: A, b: A, atol: A) {
    assert!(
        (a - b).abs() <= atol,
        "{} and {} are further than {} apart",
        a,
        b,
        atol
    );
}

/// Rows of `matrix` in canonical (lexicographic) order.
pub fn sorted_rows<A: LibData>(matrix: ArrayView2<A>) -> Vec<Array1<A>> {
    let mut rows: Vec<Array1<A>> = matrix.axis_iter(Axis(0)).map(|row| row.to_owned()).collect();
    rows.sort_by(|a, b| a.slice_cmp(b));
    rows
}
