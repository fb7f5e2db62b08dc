/// Measurements captured for one finding on one exam date
///
/// Each field is present only when a numeric value was read from the text.
/// Labels exported without a value (Name Collision placeholders) leave the
/// field as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MeasurementSet {
    /// SUVmax (SUVbw)
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub max_suv: Option<f64>,

    /// SUVmean (SUVbw)
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub mean_suv: Option<f64>,

    /// Axial slice holding the SUVmax voxel
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub slice_with_max: Option<u32>,

    /// RECIST long axis in cm
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub recist_long: Option<f64>,

    /// RECIST short axis in cm
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub recist_short: Option<f64>,
}

impl MeasurementSet {
    /// Creates an empty measurement set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns both RECIST axes when both were captured
    pub fn recist(&self) -> Option<(f64, f64)> {
        Some((self.recist_long?, self.recist_short?))
    }

    /// Returns SUVmax and its slice when both were captured
    pub fn max_with_slice(&self) -> Option<(f64, u32)> {
        Some((self.max_suv?, self.slice_with_max?))
    }

    /// Whether no field was captured
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
