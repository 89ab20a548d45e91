//! Solver vector handed to argmin.
//!
//! Wrapping the weights (and the trailing intercept) in a local type lets the vector algebra
//! L-BFGS needs be implemented once for any [`Float`], instead of only for the concrete
//! `Array1<f32>` and `Array1<f64>` that argmin-math covers.

use crate::float::Float;
use argmin_math::{
    ArgminAdd, ArgminDot, ArgminL1Norm, ArgminL2Norm, ArgminMinMax, ArgminMul, ArgminSignum,
    ArgminSub, ArgminZeroLike,
};
use ndarray::{Array1, Zip};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ArgminParam<F>(pub Array1<F>);

impl<F> ArgminParam<F> {
    #[inline]
    pub fn as_array(&self) -> &Array1<F> {
        &self.0
    }

    pub fn into_array(self) -> Array1<F> {
        self.0
    }
}

/// Combine both vectors element by element
fn zip_with<F: Float>(a: &Array1<F>, b: &Array1<F>, op: impl Fn(F, F) -> F) -> Array1<F> {
    assert_eq!(a.len(), b.len(), "solver vectors differ in length");
    Zip::from(a).and(b).map_collect(|&a, &b| op(a, b))
}

impl<F: Float> ArgminSub<F, ArgminParam<F>> for ArgminParam<F> {
    fn sub(&self, other: &F) -> ArgminParam<F> {
        ArgminParam(&self.0 - *other)
    }
}

impl<F: Float> ArgminSub<ArgminParam<F>, ArgminParam<F>> for ArgminParam<F> {
    fn sub(&self, other: &ArgminParam<F>) -> ArgminParam<F> {
        ArgminParam(&self.0 - &other.0)
    }
}

impl<F: Float> ArgminAdd<F, ArgminParam<F>> for ArgminParam<F> {
    fn add(&self, other: &F) -> ArgminParam<F> {
        ArgminParam(&self.0 + *other)
    }
}

impl<F: Float> ArgminAdd<ArgminParam<F>, ArgminParam<F>> for ArgminParam<F> {
    fn add(&self, other: &ArgminParam<F>) -> ArgminParam<F> {
        ArgminParam(&self.0 + &other.0)
    }
}

impl<F: Float> ArgminDot<ArgminParam<F>, F> for ArgminParam<F> {
    fn dot(&self, other: &ArgminParam<F>) -> F {
        self.0.dot(&other.0)
    }
}

impl<F: Float> ArgminL1Norm<F> for ArgminParam<F> {
    fn l1_norm(&self) -> F {
        self.0.iter().map(|v| num_traits::Float::abs(*v)).sum()
    }
}

impl<F: Float> ArgminL2Norm<F> for ArgminParam<F> {
    fn l2_norm(&self) -> F {
        num_traits::Float::sqrt(self.0.dot(&self.0))
    }
}

impl<F: Float> ArgminMul<F, ArgminParam<F>> for ArgminParam<F> {
    fn mul(&self, other: &F) -> ArgminParam<F> {
        ArgminParam(&self.0 * *other)
    }
}

impl<F: Float> ArgminMul<ArgminParam<F>, ArgminParam<F>> for ArgminParam<F> {
    fn mul(&self, other: &ArgminParam<F>) -> ArgminParam<F> {
        ArgminParam(&self.0 * &other.0)
    }
}

impl<F: Float> ArgminSignum for ArgminParam<F> {
    fn signum(self) -> ArgminParam<F> {
        ArgminParam(self.0.mapv(num_traits::Float::signum))
    }
}

impl<F: Float> ArgminZeroLike for ArgminParam<F> {
    fn zero_like(&self) -> ArgminParam<F> {
        ArgminParam(Array1::zeros(self.0.len()))
    }
}

impl<F: Float> ArgminMinMax for ArgminParam<F> {
    fn min(x: &Self, y: &Self) -> ArgminParam<F> {
        ArgminParam(zip_with(&x.0, &y.0, |a, b| if a < b { a } else { b }))
    }

    fn max(x: &Self, y: &Self) -> ArgminParam<F> {
        ArgminParam(zip_with(&x.0, &y.0, |a, b| if a > b { a } else { b }))
    }
}
