// File: crates/curve-core/src/params.rs
// Summary: Transform constants with defaults and optional TOML overrides.

use serde::Deserialize;
use std::path::Path;

use crate::error::ParamsError;

pub const MULTIPLIER: f64 = 3e12;
pub const OFFSET: f64 = 2e44;
pub const SCALE: f64 = 1e18;
pub const DIVISOR: f64 = 2_102_400.0;
pub const NORMALIZATION: f64 = 1e44;
pub const DOMAIN_START: f64 = -100.0;
pub const DOMAIN_END: f64 = 100.0;
pub const SAMPLES: usize = 600;

/// Constants of the cubic transform plus the sampled domain.
///
/// Any field may be omitted from a config file; omitted fields keep the
/// defaults below.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveParams {
    /// Leading coefficient M.
    pub multiplier: f64,
    /// Additive offset O applied after the divisor.
    pub offset: f64,
    /// Scale factor S applied to the domain before the cubic.
    pub scale: f64,
    /// Divisor D applied to the raw cubic.
    pub divisor: f64,
    /// Final normalization N.
    pub normalization: f64,
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            multiplier: MULTIPLIER,
            offset: OFFSET,
            scale: SCALE,
            divisor: DIVISOR,
            normalization: NORMALIZATION,
            start: DOMAIN_START,
            end: DOMAIN_END,
            samples: SAMPLES,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    curve: CurveParams,
}

impl CurveParams {
    /// Normalized output at x = 0, i.e. O / N.
    pub fn baseline(&self) -> f64 {
        self.offset / self.normalization
    }

    /// Check the sampled domain. Numeric constants are left alone: zeros and
    /// overflow surface as inf/NaN in the curve.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.samples < 2 {
            return Err(ParamsError::Invalid(format!(
                "samples must be at least 2, got {}",
                self.samples
            )));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ParamsError::Invalid("domain bounds must be finite".into()));
        }
        if self.start >= self.end {
            return Err(ParamsError::Invalid(format!(
                "domain start {} must be below end {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Parse a `[curve]` table of overrides.
    pub fn from_toml_str(content: &str) -> Result<Self, ParamsError> {
        let cfg: ConfigFile = toml::from_str(content)?;
        cfg.curve.validate()?;
        log::debug!("loaded curve params: {:?}", cfg.curve);
        Ok(cfg.curve)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_model_constants() {
        let p = CurveParams::default();
        assert_eq!(p.multiplier, 3.0 * 10f64.powi(12));
        assert_eq!(p.offset, 2.0 * 10f64.powi(44));
        assert_eq!(p.scale, 10f64.powi(18));
        assert_eq!(p.divisor, 2102400.0);
        assert_eq!(p.samples, 600);
        assert_eq!(p.baseline(), 2.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn empty_document_keeps_defaults() {
        let p = CurveParams::from_toml_str("").expect("empty config");
        assert_eq!(p, CurveParams::default());
    }

    #[test]
    fn partial_override() {
        let p = CurveParams::from_toml_str("[curve]\nsamples = 50\ndivisor = 1000\n")
            .expect("partial config");
        assert_eq!(p.samples, 50);
        assert_eq!(p.divisor, 1000.0);
        assert_eq!(p.multiplier, MULTIPLIER);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = CurveParams::from_toml_str("[curve]\nslope = 1.0\n").unwrap_err();
        assert!(matches!(err, ParamsError::Toml(_)));
    }

    #[test]
    fn invalid_domain_rejected() {
        let err = CurveParams::from_toml_str("[curve]\nstart = 5.0\nend = 5.0\n").unwrap_err();
        assert!(matches!(err, ParamsError::Invalid(_)));
        let err = CurveParams::from_toml_str("[curve]\nsamples = 1\n").unwrap_err();
        assert!(matches!(err, ParamsError::Invalid(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CurveParams::from_file("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
