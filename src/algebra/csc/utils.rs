//---------------------------------------------------------
// low-level internal utilities shared by the numeric and
// pattern-only compressed column types.
//---------------------------------------------------------

use crate::algebra::SparseFormatError;

// format check shared by CscMatrix and SymbolicCscMatrix
pub(crate) fn check_pattern_format(
    m: usize,
    n: usize,
    colptr: &[usize],
    rowval: &[usize],
) -> Result<(), SparseFormatError> {
    if colptr.is_empty() || (colptr.len() - 1) != n || colptr[n] != rowval.len() {
        return Err(SparseFormatError::IncompatibleDimension);
    }

    //check for colptr monotonicity
    if colptr[0] != 0 || colptr.windows(2).any(|c| c[0] > c[1]) {
        return Err(SparseFormatError::BadColptr);
    }

    //check for rowval monotonicity within each column
    for col in 0..n {
        let rng = colptr[col]..colptr[col + 1];
        if rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
            return Err(SparseFormatError::BadRowOrdering);
        }
    }
    //check for row values out of bounds
    if !rowval.iter().all(|r| r < &m) {
        return Err(SparseFormatError::BadRowval);
    }

    Ok(())
}

// overwrite a vector of counts with its exclusive cumulative sum,
// returning the total.  counts.len() should be one larger than the
// number of columns, with a trailing zero.
pub(crate) fn colcount_to_colptr(counts: &mut [usize]) -> usize {
    let mut currentptr = 0;
    for p in counts.iter_mut() {
        let count = *p;
        *p = currentptr;
        currentptr += count;
    }
    currentptr
}

#[test]
fn test_colcount_to_colptr() {
    let mut counts = vec![2, 0, 3, 1, 0];
    let total = colcount_to_colptr(&mut counts);
    assert_eq!(counts, vec![0, 2, 2, 5, 6]);
    assert_eq!(total, 6);
}
