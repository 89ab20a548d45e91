use super::{AsTargets, DatasetBase, Label, Labels, Records};
use ndarray::{ArrayBase, ArrayView1, Data, Ix1};

/// A one-dimensional NdArray can act as targets
impl<L, S: Data<Elem = L>> AsTargets for ArrayBase<S, Ix1> {
    type Elem = L;

    fn as_targets(&self) -> ArrayView1<L> {
        self.view()
    }
}

/// The targets of a dataset
impl<R: Records, T: AsTargets> AsTargets for DatasetBase<R, T> {
    type Elem = T::Elem;

    fn as_targets(&self) -> ArrayView1<Self::Elem> {
        self.targets.as_targets()
    }
}

impl<T: AsTargets> AsTargets for &T {
    type Elem = T::Elem;

    fn as_targets(&self) -> ArrayView1<Self::Elem> {
        (*self).as_targets()
    }
}

/// Any target array with discrete labels can act as labels
impl<L: Label, S: Data<Elem = L>> Labels for ArrayBase<S, Ix1> {
    type Elem = L;

    fn label_count(&self) -> Vec<(L, usize)> {
        let mut counts: Vec<(L, usize)> = Vec::new();
        for label in self.iter() {
            match counts.iter_mut().find(|(known, _)| known == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.clone(), 1)),
            }
        }

        counts
    }
}

impl<R: Records, L: Label, T: AsTargets<Elem = L>> Labels for DatasetBase<R, T> {
    type Elem = L;

    fn label_count(&self) -> Vec<(L, usize)> {
        self.targets.as_targets().label_count()
    }
}
