use super::{FloatT, VectorMath};
use itertools::izip;
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn dot(&self, y: &[T]) -> T {
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + x * y)
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        T::sqrt(self.sumsq())
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for &v in self {
            // propagate NaN rather than hiding it behind max
            if v.is_nan() {
                return T::nan();
            }
            out = T::max(out, v.abs());
        }
        out
    }

    fn norm_one(&self) -> T {
        self.iter().fold(T::zero(), |acc, v| acc + v.abs())
    }

    fn dist_inf(&self, y: &Self) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&x, &y)| T::max(acc, T::abs(x - y)))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        // handle b = 1 / 0 / -1 separately
        let yx = zip(&mut *self, x);
        if b == T::zero() {
            yx.for_each(|(y, x)| *y = a * (*x));
        } else if b == T::one() {
            yx.for_each(|(y, x)| *y = a * (*x) + (*y));
        } else if b == -T::one() {
            yx.for_each(|(y, x)| *y = a * (*x) - (*y));
        } else {
            yx.for_each(|(y, x)| *y = a * (*x) + b * (*y));
        }
        self
    }
}

// accumulating gather, used by the hollow permutation vector forms
pub(crate) fn gather_add<T: FloatT>(x: &mut [T], p: &[Option<usize>], a: &[T]) {
    for (xi, pi) in izip!(x.iter_mut(), p) {
        if let Some(j) = *pi {
            *xi += a[j];
        }
    }
}

// accumulating scatter, used by the hollow permutation vector forms
pub(crate) fn scatter_add<T: FloatT>(x: &mut [T], p: &[Option<usize>], a: &[T]) {
    for (pi, ai) in izip!(p, a) {
        if let Some(j) = *pi {
            x[j] += *ai;
        }
    }
}
