use derive_builder::Builder;
use thiserror::Error;

/// Pattern from which a minimum degree ordering is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrdering {
    /// No reordering.
    Natural,
    /// Minimum degree on `A+A'`, for square matrices and Cholesky.
    #[default]
    MinimumDegreeAtPlusA,
    /// Minimum degree on `S'S`, where `S` is `A` with dense rows removed.
    /// Suited to LU with partial pivoting.
    MinimumDegreeStS,
    /// Minimum degree on `A'A`, for QR.
    MinimumDegreeAtA,
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// A field holds an illegal value
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings read by [`amd::generate_with_settings`](crate::ordering::amd::generate_with_settings),
/// [`DulmageMendelsohn::generate_with_settings`](crate::ordering::DulmageMendelsohn::generate_with_settings)
/// and [`SymbolicCholesky::analyze`](crate::ordering::SymbolicCholesky::analyze).

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct OrderingSettings {
    ///pattern used for the minimum degree ordering
    #[builder(default = "ColumnOrdering::MinimumDegreeAtPlusA")]
    pub ordering: ColumnOrdering,

    ///scaling of the `10*sqrt(n)` dense row threshold
    #[builder(default = "1.0")]
    pub dense_scale: f64,

    ///column order of the maximum matching: 0 natural, -1 reverse, otherwise random
    #[builder(default = "0")]
    pub matching_seed: i64,
}

impl Default for OrderingSettings {
    fn default() -> OrderingSettings {
        OrderingSettingsBuilder::default().build().unwrap()
    }
}

impl From<SettingsError> for OrderingSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        OrderingSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl OrderingSettingsBuilder {
    /// check that the dense threshold scaling is usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(scale) = self.dense_scale {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(SettingsError::BadFieldValue("dense_scale"));
            }
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    let settings = OrderingSettings::default();
    assert_eq!(settings.ordering, ColumnOrdering::MinimumDegreeAtPlusA);
    assert_eq!(settings.dense_scale, 1.0);
    assert_eq!(settings.matching_seed, 0);

    let settings = OrderingSettingsBuilder::default()
        .ordering(ColumnOrdering::MinimumDegreeAtA)
        .matching_seed(-1)
        .build()
        .unwrap();
    assert_eq!(settings.ordering, ColumnOrdering::MinimumDegreeAtA);

    assert!(OrderingSettingsBuilder::default()
        .dense_scale(0.0)
        .build()
        .is_err());
    assert!(OrderingSettingsBuilder::default()
        .dense_scale(f64::NAN)
        .build()
        .is_err());
}
