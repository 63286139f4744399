//! Rendering and encoding parameters of a symbol.

use crate::error::{Error, Result};
use crate::layout::CorrectionLevel;

/// Parameters used to build a [Barcode](crate::Barcode).
///
/// ```
/// # use pdf417_symbol::{Settings, CorrectionLevel};
/// let settings = Settings::default()
///     .with_module_width(3)
///     .with_correction_level(CorrectionLevel::Level(4));
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Height of a row in modules, relative to the module width.
    pub module_height: u32,
    /// Width of a module in pixels.
    pub module_width: u32,
    pub correction_level: CorrectionLevel,
    /// Target width over height ratio of the symbol.
    pub aspect_ratio: f64,
    /// Blank margin around the symbol, in pixels.
    pub quiet_zone: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            module_height: 3,
            module_width: 2,
            correction_level: CorrectionLevel::Auto,
            aspect_ratio: 3.0,
            quiet_zone: 4,
        }
    }
}

impl Settings {
    pub const fn with_module_height(mut self, module_height: u32) -> Self {
        self.module_height = module_height;
        self
    }

    pub const fn with_module_width(mut self, module_width: u32) -> Self {
        self.module_width = module_width;
        self
    }

    pub const fn with_correction_level(mut self, level: CorrectionLevel) -> Self {
        self.correction_level = level;
        self
    }

    pub const fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub const fn with_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.module_height == 0 {
            return Err(Error::InvalidConfiguration("module height must be at least 1"));
        }
        if self.module_width == 0 {
            return Err(Error::InvalidConfiguration("module width must be at least 1"));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(Error::InvalidConfiguration("aspect ratio must be positive"));
        }
        self.correction_level.validate()
    }

    /// Validates the settings and fixes the correction level for a symbol
    /// carrying `data_len` data codewords. `self` is left untouched.
    pub fn resolve(&self, data_len: usize) -> Result<ResolvedSettings> {
        self.validate()?;
        Ok(ResolvedSettings {
            module_height: self.module_height,
            module_width: self.module_width,
            level: self.correction_level.resolve(data_len),
            aspect_ratio: self.aspect_ratio,
            quiet_zone: self.quiet_zone,
        })
    }
}

/// [Settings] of one symbol, with a concrete correction level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSettings {
    pub module_height: u32,
    pub module_width: u32,
    pub level: u8,
    pub aspect_ratio: f64,
    pub quiet_zone: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let base = Settings::default();
        assert!(matches!(base.with_module_width(0).validate(), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(base.with_module_height(0).validate(), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(base.with_aspect_ratio(0.0).validate(), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(base.with_aspect_ratio(-2.0).validate(), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(base.with_aspect_ratio(f64::INFINITY).validate(), Err(Error::InvalidConfiguration(_))));
        assert_eq!(
            base.with_correction_level(CorrectionLevel::Level(12)).validate(),
            Err(Error::UnsupportedCorrectionLevel(12))
        );
    }

    #[test]
    fn test_resolve_keeps_settings() {
        let settings = Settings::default();
        let resolved = settings.resolve(2).unwrap();
        assert_eq!(resolved.level, 2);
        assert_eq!(settings.correction_level, CorrectionLevel::Auto);

        let resolved = settings.resolve(500).unwrap();
        assert_eq!(resolved.level, 5);
    }
}
