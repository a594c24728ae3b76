use crate::algebra::*;

impl<T: FloatT> MatrixVectorMultiply for CscMatrix<T> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) -> Result<(), MatrixDimensionError> {
        if x.len() != self.n || y.len() != self.m {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        _csc_axpby_N(self, y, x, a, b);
        Ok(())
    }
}

impl<T: FloatT> MatrixVectorMultiply for Adjoint<'_, CscMatrix<T>> {
    type T = T;

    fn gemv(&self, y: &mut [T], x: &[T], a: T, b: T) -> Result<(), MatrixDimensionError> {
        if x.len() != self.src.m || y.len() != self.src.n {
            return Err(MatrixDimensionError::IncompatibleDimension);
        }
        _csc_axpby_T(self.src, y, x, a, b);
        Ok(())
    }
}

impl<T: FloatT> MatrixMath for CscMatrix<T> {
    type T = T;

    fn scale(&mut self, c: T) {
        self.nzval.scale(c);
    }

    fn negate(&mut self) {
        self.nzval.negate();
    }
}

// the b*y part of y = a*A*x + b*y.  y is only
// overwritten when b is exactly zero
fn _scale_output<T: FloatT>(y: &mut [T], b: T) {
    if b == T::zero() {
        y.fill(T::zero());
    } else if b == T::one() {
    } else if b == -T::one() {
        y.negate();
    } else {
        y.scale(b);
    }
}

#[allow(non_snake_case)]
fn _csc_axpby_N<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    _scale_output(y, b);

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    //y += a*A*x
    if a == T::one() {
        for (j, xj) in x.iter().enumerate().take(A.n) {
            for i in A.colptr[j]..A.colptr[j + 1] {
                y[A.rowval[i]] += A.nzval[i] * *xj;
            }
        }
    } else {
        for (j, xj) in x.iter().enumerate().take(A.n) {
            for i in A.colptr[j]..A.colptr[j + 1] {
                y[A.rowval[i]] += a * A.nzval[i] * *xj;
            }
        }
    }
}

#[allow(non_snake_case)]
fn _csc_axpby_T<T: FloatT>(A: &CscMatrix<T>, y: &mut [T], x: &[T], a: T, b: T) {
    _scale_output(y, b);

    // if a is zero, we're done
    if a == T::zero() {
        return;
    }

    //y += a*A'*x
    for (j, yj) in y.iter_mut().enumerate().take(A.n) {
        let mut acc = T::zero();
        for k in A.colptr[j]..A.colptr[j + 1] {
            acc += A.nzval[k] * x[A.rowval[k]];
        }
        *yj += a * acc;
    }
}
