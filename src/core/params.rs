use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{
    BackgroundSource, CanvasSize, DEFAULT_SOFT_MARGIN, DEFAULT_TOLERANCE, MAX_TOLERANCE,
};

/// Processing parameters passed explicitly into the keyer and the fitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub canvas: CanvasSize,
    /// If true, key out the background before fitting
    pub make_transparent: bool,
    pub background: BackgroundSource,
    /// Max color distance (0..=64) still treated as background
    pub tolerance: u8,
    /// Distance band above `tolerance` where alpha ramps back up; 0 gives a hard cut
    pub soft_margin: u8,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::STICKER,
            make_transparent: false,
            background: BackgroundSource::Auto,
            tolerance: DEFAULT_TOLERANCE,
            soft_margin: DEFAULT_SOFT_MARGIN,
        }
    }
}

impl ProcessingParams {
    pub fn validate(&self) -> Result<()> {
        if self.tolerance > MAX_TOLERANCE {
            return Err(Error::InvalidArgument {
                arg: "tolerance",
                value: self.tolerance.to_string(),
            });
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::InvalidArgument {
                arg: "canvas",
                value: self.canvas.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sticker_format() {
        let params = ProcessingParams::default();
        assert_eq!(params.canvas, CanvasSize { width: 370, height: 320 });
        assert_eq!(params.tolerance, 18);
        assert!(!params.make_transparent);
        assert_eq!(params.background, BackgroundSource::Auto);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_tolerance() {
        let params = ProcessingParams {
            tolerance: 65,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidArgument { arg: "tolerance", .. })
        ));
    }

    #[test]
    fn rejects_empty_canvas() {
        let params = ProcessingParams {
            canvas: CanvasSize { width: 0, height: 320 },
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
