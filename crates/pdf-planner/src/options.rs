use crate::constants::DEFAULT_MARGIN_PT;
use crate::types::*;
use chrono::Weekday;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of years a single planner may span
pub const MAX_YEARS: usize = 99;

/// Exclusive upper bound on the first year
pub const MAX_START_YEAR: i32 = 3000;

/// Largest page side PDF user space allows, in points
pub const MAX_PAGE_DIMENSION_PT: f32 = 14400.0;

/// Complete planner configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerOptions {
    // Range
    pub start_year: i32,
    pub num_years: usize,

    // Page setup
    pub paper_size: PaperSize,
    pub orientation: Orientation,
    pub handedness: Handedness,
    pub margin_pt: f32,

    // Calendar
    pub first_day_of_week: Weekday,

    /// Main page title, also written as the PDF title
    pub title: String,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            start_year: 2021,
            num_years: 5,
            paper_size: PaperSize::Remarkable,
            orientation: Orientation::Landscape,
            handedness: Handedness::RightHanded,
            margin_pt: DEFAULT_MARGIN_PT,
            first_day_of_week: Weekday::Sun,
            title: "Planner".to_string(),
        }
    }
}

impl PlannerOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PlannerError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page width and height after orientation is applied
    pub fn page_dimensions(&self) -> (f32, f32) {
        self.paper_size.dimensions_with_orientation(self.orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.num_years == 0 || self.num_years > MAX_YEARS {
            return Err(PlannerError::Config(format!(
                "Number of years must be between 1 and {}, got {}",
                MAX_YEARS, self.num_years
            )));
        }

        if self.start_year <= 0 || self.start_year >= MAX_START_YEAR {
            return Err(PlannerError::Config(format!(
                "Start year must be between 1 and {}, got {}",
                MAX_START_YEAR - 1,
                self.start_year
            )));
        }

        let (width, height) = self.page_dimensions();
        if !(width > 0.0 && height > 0.0) {
            return Err(PlannerError::Config(format!(
                "Page dimensions must be positive, got {} x {}",
                width, height
            )));
        }

        if width > MAX_PAGE_DIMENSION_PT || height > MAX_PAGE_DIMENSION_PT {
            return Err(PlannerError::Config(format!(
                "Page dimensions must be at most {} pt, got {} x {}",
                MAX_PAGE_DIMENSION_PT, width, height
            )));
        }

        // The margin line has to land on the page, on its own side
        if !(self.margin_pt >= 0.0 && self.margin_pt < width / 2.0) {
            return Err(PlannerError::Config(format!(
                "Margin must be between 0 and half the page width ({}), got {}",
                width / 2.0,
                self.margin_pt
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = PlannerOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.page_dimensions(), (1872.0, 1404.0));
    }

    #[test]
    fn test_portrait_dimensions() {
        let options = PlannerOptions {
            orientation: Orientation::Portrait,
            ..Default::default()
        };
        assert_eq!(options.page_dimensions(), (1404.0, 1872.0));
    }

    #[test]
    fn test_page_size_is_capped() {
        let mut options = PlannerOptions {
            paper_size: PaperSize::Custom {
                width_pt: MAX_PAGE_DIMENSION_PT,
                height_pt: MAX_PAGE_DIMENSION_PT,
            },
            ..Default::default()
        };
        assert!(options.validate().is_ok());

        options.paper_size = PaperSize::Custom {
            width_pt: 5e9,
            height_pt: 5e9,
        };
        match options.validate() {
            Err(PlannerError::Config(msg)) => assert!(msg.contains("at most 14400")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        options.paper_size = PaperSize::Custom {
            width_pt: 800.0,
            height_pt: f32::INFINITY,
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_margin_must_fit() {
        let options = PlannerOptions {
            margin_pt: 936.0,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(PlannerError::Config(_))));
    }
}
