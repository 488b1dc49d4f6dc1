use crate::error::{ChartError, ChartResult};

/// Affine mapping between a numeric domain and a pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Maps `value` into `[pixel_origin, pixel_origin + pixel_extent]`.
    ///
    /// A negative extent flips the axis, which is how vertical value axes grow upwards.
    pub fn domain_to_pixel(self, value: f64, pixel_origin: f64, pixel_extent: f64) -> ChartResult<f64> {
        validate_span(pixel_origin, pixel_extent)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(pixel_origin + normalized * pixel_extent)
    }

    pub fn pixel_to_domain(self, pixel: f64, pixel_origin: f64, pixel_extent: f64) -> ChartResult<f64> {
        validate_span(pixel_origin, pixel_extent)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - pixel_origin) / pixel_extent;
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_span(pixel_origin: f64, pixel_extent: f64) -> ChartResult<()> {
    if !pixel_origin.is_finite() {
        return Err(ChartError::InvalidData(
            "pixel origin must be finite".to_owned(),
        ));
    }
    if !pixel_extent.is_finite() || pixel_extent == 0.0 {
        return Err(ChartError::InvalidData(
            "pixel extent must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn negative_extent_flips_axis() {
        let scale = LinearScale::new(0.0, 100.0).expect("scale");
        let bottom = scale.domain_to_pixel(0.0, 400.0, -400.0).expect("bottom");
        let top = scale.domain_to_pixel(100.0, 400.0, -400.0).expect("top");
        assert_eq!(bottom, 400.0);
        assert_eq!(top, 0.0);
    }

    #[test]
    fn zero_extent_is_rejected() {
        let scale = LinearScale::new(0.0, 1.0).expect("scale");
        assert!(scale.domain_to_pixel(0.5, 0.0, 0.0).is_err());
        assert!(scale.pixel_to_domain(0.5, 0.0, 0.0).is_err());
    }
}
