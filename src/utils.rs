use ndarray::{ArcArray1, Array1, ScalarOperand};
use num_traits::{Float, FromPrimitive};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::iter::Sum;

pub trait LibData:
    'static + Clone + Send + Default + Sync + Debug + Float + FromPrimitive + Sum + ScalarOperand + Display
{
}

impl LibData for f32 {}
impl LibData for f64 {}

#[derive(Clone)]
pub struct RefArray<A: LibData>(pub ArcArray1<A>);

impl<A: LibData> AsRef<[A]> for RefArray<A> {
    fn as_ref(&self) -> &[A] {
        let array = &self.0;
        array.as_slice().unwrap()
    }
}

/// Lexicographic coordinate-wise ordering, used to bring center sets into a
/// canonical order before comparing them.
pub trait SliceComp {
    fn slice_cmp(&self, b: &Self) -> Ordering;
}

impl<A: LibData> SliceComp for Array1<A> {
    fn slice_cmp(&self, other: &Self) -> Ordering {
        debug_assert!(self.len() == other.len());
        let a = self.as_slice().unwrap();
        let b = other.as_slice().unwrap();
        for i in 0..b.len() {
            let cmp = a[i].partial_cmp(&b[i]).unwrap();
            if cmp.ne(&Ordering::Equal) {
                return cmp;
            }
        }
        Ordering::Equal
    }
}
