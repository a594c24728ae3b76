// numeric kernels on values go through these traits, which are
// implemented generically for floats of type FloatT.

/// Vector operations on slices of [FloatT](crate::algebra::FloatT)
pub trait VectorMath {
    type T;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Elementwise scaling.
    fn scale(&mut self, c: Self::T) -> &mut Self;

    /// Elementwise negation of entries.
    fn negate(&mut self) -> &mut Self;

    /// Dot product
    fn dot(&self, y: &Self) -> Self::T;

    /// Sum of elements squared.
    fn sumsq(&self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Infinity norm
    fn norm_inf(&self) -> Self::T;

    /// One norm
    fn norm_one(&self) -> Self::T;

    /// Infinity norm distance from `self` to `y`
    fn dist_inf(&self, y: &Self) -> Self::T;

    /// BLAS-like shift and scale in place.  Produces `self = a*x+b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}

/// BLAS-like general matrix-vector multiply.  Produces `y = a*self*x + b*y`.
///
/// Returns an error if `x` or `y` do not match the matrix dimensions.  When
/// `b` is zero the input `y` is overwritten, otherwise it is accumulated into.
pub trait MatrixVectorMultiply {
    type T;
    fn gemv(
        &self,
        y: &mut [Self::T],
        x: &[Self::T],
        a: Self::T,
        b: Self::T,
    ) -> Result<(), crate::algebra::MatrixDimensionError>;
}

/// Elementwise operations on matrix values
pub trait MatrixMath {
    type T;

    /// Elementwise scaling
    fn scale(&mut self, c: Self::T);

    /// Elementwise negation
    fn negate(&mut self);
}
