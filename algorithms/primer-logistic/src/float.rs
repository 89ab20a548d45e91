use crate::argmin_param::ArgminParam;
use argmin::core::ArgminFloat;
use argmin_math::ArgminMul;

/// Floats the solver can run on. On top of the `primer` bounds, argmin needs its own float
/// trait and scalar-times-parameter multiplication.
pub trait Float: primer::Float + ArgminFloat + ArgminMul<ArgminParam<Self>, ArgminParam<Self>> {
    const POSITIVE_LABEL: Self;
    const NEGATIVE_LABEL: Self;
}

impl ArgminMul<ArgminParam<f64>, ArgminParam<f64>> for f64 {
    fn mul(&self, other: &ArgminParam<f64>) -> ArgminParam<f64> {
        ArgminParam(other.as_array() * *self)
    }
}

impl ArgminMul<ArgminParam<f32>, ArgminParam<f32>> for f32 {
    fn mul(&self, other: &ArgminParam<f32>) -> ArgminParam<f32> {
        ArgminParam(other.as_array() * *self)
    }
}

impl Float for f32 {
    const POSITIVE_LABEL: Self = 1.0;
    const NEGATIVE_LABEL: Self = -1.0;
}

impl Float for f64 {
    const POSITIVE_LABEL: Self = 1.0;
    const NEGATIVE_LABEL: Self = -1.0;
}
