//! System constants for the door and liner calculation.
//!
//! A single immutable [`SystemConstants`] value is handed to the engine at
//! construction. The defaults are the production values; a settings file may
//! override any of them (see [`crate::storage::config::Config`]).

use serde::{Deserialize, Serialize};

/// Two 18mm boards.
pub const BOTTOM_LINER_THICKNESS_MM: f64 = 36.0;
pub const SIDE_LINER_THICKNESS_MM: f64 = 18.0;
pub const TRACKSET_TOLERANCE_MM: f64 = 54.0;
pub const MAX_DOOR_HEIGHT_MM: f64 = 2431.0;
pub const MAX_DROPDOWN_MM: f64 = 400.0;

pub const FIXED_DOOR_HEIGHT_MM: f64 = 2223.0;
pub const MADE_TO_MEASURE_OVERLAP_MM: f64 = 25.0;
pub const DEFAULT_FIXED_OVERLAP_TOLERANCE_MM: f64 = 150.0;

/// Total extra span a fixed door system must cover beyond the net width,
/// for a given number of doors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct OverlapTolerance {
    pub doors: u32,
    pub tolerance_mm: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SystemConstants {
    pub bottom_liner_thickness_mm: f64,
    /// Side liner thickness in made-to-measure mode, and the baseline that
    /// fixed-door build-out is measured from.
    pub side_liner_thickness_mm: f64,
    pub trackset_tolerance_mm: f64,
    pub max_door_height_mm: f64,
    pub max_dropdown_mm: f64,
    pub fixed_door_height_mm: f64,
    /// Overlap per meeting between adjacent made-to-measure doors.
    pub door_overlap_mm: f64,
    pub default_overlap_tolerance_mm: f64,
    pub overlap_tolerances: Vec<OverlapTolerance>,
}

impl Default for SystemConstants {
    fn default() -> Self {
        Self {
            bottom_liner_thickness_mm: BOTTOM_LINER_THICKNESS_MM,
            side_liner_thickness_mm: SIDE_LINER_THICKNESS_MM,
            trackset_tolerance_mm: TRACKSET_TOLERANCE_MM,
            max_door_height_mm: MAX_DOOR_HEIGHT_MM,
            max_dropdown_mm: MAX_DROPDOWN_MM,
            fixed_door_height_mm: FIXED_DOOR_HEIGHT_MM,
            door_overlap_mm: MADE_TO_MEASURE_OVERLAP_MM,
            overlap_tolerances: vec![
                OverlapTolerance {
                    doors: 2,
                    tolerance_mm: 75.0,
                },
                OverlapTolerance {
                    doors: 3,
                    tolerance_mm: 150.0,
                },
                OverlapTolerance {
                    doors: 4,
                    tolerance_mm: 150.0,
                },
            ],
            default_overlap_tolerance_mm: DEFAULT_FIXED_OVERLAP_TOLERANCE_MM,
        }
    }
}

impl SystemConstants {
    /// Overlap tolerance for a fixed door system with `doors` leaves.
    ///
    /// Door counts missing from the table (1, or 5 and above) use the default.
    pub fn overlap_tolerance(&self, doors: u32) -> f64 {
        self.overlap_tolerances
            .iter()
            .find(|entry| entry.doors == doors)
            .map(|entry| entry.tolerance_mm)
            .unwrap_or(self.default_overlap_tolerance_mm)
    }

    /// Height left for door and dropdown once the bottom liners and the
    /// trackset allowance are taken out.
    pub fn base_usable_height(&self, opening_height_mm: f64) -> f64 {
        opening_height_mm - self.bottom_liner_thickness_mm - self.trackset_tolerance_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_tolerance_table() {
        let constants = SystemConstants::default();
        assert_eq!(constants.overlap_tolerance(2), 75.0);
        assert_eq!(constants.overlap_tolerance(3), 150.0);
        assert_eq!(constants.overlap_tolerance(4), 150.0);
        assert_eq!(constants.overlap_tolerance(5), 150.0);
        assert_eq!(constants.overlap_tolerance(10), 150.0);
        assert_eq!(constants.overlap_tolerance(1), 150.0);
    }

    #[test]
    fn test_overlap_tolerance_custom_table() {
        let constants = SystemConstants {
            overlap_tolerances: vec![OverlapTolerance {
                doors: 2,
                tolerance_mm: 60.0,
            }],
            default_overlap_tolerance_mm: 120.0,
            ..SystemConstants::default()
        };
        assert_eq!(constants.overlap_tolerance(2), 60.0);
        assert_eq!(constants.overlap_tolerance(3), 120.0);
    }

    #[test]
    fn test_base_usable_height() {
        let constants = SystemConstants::default();
        assert_eq!(constants.base_usable_height(2600.0), 2510.0);
    }

    #[test]
    fn test_partial_toml_override_keeps_defaults() {
        let constants: SystemConstants =
            toml::from_str("max_dropdown_mm = 300.0").expect("valid toml");
        assert_eq!(constants.max_dropdown_mm, 300.0);
        assert_eq!(constants.trackset_tolerance_mm, TRACKSET_TOLERANCE_MM);
        assert_eq!(constants.overlap_tolerances.len(), 3);
    }
}
