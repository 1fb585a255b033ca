//! Calculation output: the per-opening result record and its status taxonomy.

use serde::{Serialize, Serializer};
use std::fmt;

/// Round to the nearest millimetre, ties to even.
pub fn round_mm(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Round to one decimal place, ties to even. Never returns `-0.0`.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0 + 0.0
}

/// How an opening's height resolved against the limits.
///
/// Variants carry the numbers the fitter needs; `Display` renders the
/// sentence shown in tables and exports.
#[derive(Debug, Clone, PartialEq)]
pub enum HeightStatus {
    Ok,
    BespokeOk,
    /// Made-to-measure door exceeds the maximum with the selected dropdown.
    TooTallForSelectedDropdown {
        needed_dropdown_mm: i64,
        trackset_mm: i64,
    },
    /// Even the maximum dropdown leaves the door too tall.
    TooTallEvenAtMaxDropdown {
        max_dropdown_mm: i64,
        trackset_mm: i64,
    },
    BespokeCapped {
        ideal_dropdown_mm: i64,
        max_dropdown_mm: i64,
        max_door_height_mm: i64,
    },
    /// Fixed door plus liners and trackset do not fit the opening height.
    FixedTooSmall {
        door_height_mm: i64,
        bottom_liner_mm: i64,
        trackset_mm: i64,
        shortfall_mm: i64,
    },
    FixedDropdownTooLarge {
        required_dropdown_mm: i64,
        max_dropdown_mm: i64,
        excess_mm: i64,
        trackset_mm: i64,
    },
}

impl HeightStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, HeightStatus::Ok | HeightStatus::BespokeOk)
    }
}

impl fmt::Display for HeightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeightStatus::Ok => write!(f, "OK"),
            HeightStatus::BespokeOk => write!(f, "OK (bespoke dropdown auto-calculated for fit)"),
            HeightStatus::TooTallForSelectedDropdown {
                needed_dropdown_mm,
                trackset_mm,
            } => write!(
                f,
                "Too tall for selected dropdown – need about {}mm dropdown (includes {}mm trackset tolerance).",
                needed_dropdown_mm, trackset_mm
            ),
            HeightStatus::TooTallEvenAtMaxDropdown {
                max_dropdown_mm,
                trackset_mm,
            } => write!(
                f,
                "Too tall even at max {}mm dropdown (includes {}mm trackset tolerance).",
                max_dropdown_mm, trackset_mm
            ),
            HeightStatus::BespokeCapped {
                ideal_dropdown_mm,
                max_dropdown_mm,
                max_door_height_mm,
            } => write!(
                f,
                "Too tall for perfect fit with max {}mm bespoke dropdown (ideal dropdown would be about {}mm). Door height capped at {}mm.",
                max_dropdown_mm, ideal_dropdown_mm, max_door_height_mm
            ),
            HeightStatus::FixedTooSmall {
                door_height_mm,
                bottom_liner_mm,
                trackset_mm,
                shortfall_mm,
            } => write!(
                f,
                "Opening too small for {}mm door plus {}mm bottom liner and {}mm trackset tolerance (short by {}mm).",
                door_height_mm, bottom_liner_mm, trackset_mm, shortfall_mm
            ),
            HeightStatus::FixedDropdownTooLarge {
                required_dropdown_mm,
                max_dropdown_mm,
                excess_mm,
                trackset_mm,
            } => write!(
                f,
                "Dropdown needed is {}mm – exceeds max allowed {}mm by {}mm (including {}mm trackset tolerance).",
                required_dropdown_mm, max_dropdown_mm, excess_mm, trackset_mm
            ),
        }
    }
}

impl Serialize for HeightStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Issue {
    Ok,
    Check,
}

impl Issue {
    /// `OK` exactly when the status text begins with "OK".
    pub fn classify(status: &HeightStatus) -> Self {
        if status.to_string().starts_with("OK") {
            Issue::Ok
        } else {
            Issue::Check
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Issue::Ok => "✅ OK",
            Issue::Check => "🔴 Check height",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Ok => f.write_str("OK"),
            Issue::Check => f.write_str("CHECK"),
        }
    }
}

/// Manufacturing dimensions for one opening. Built fresh by every
/// [`crate::core::engine::DimensioningEngine::dimension`] call.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DimensionResult {
    pub door_height_mm: i64,
    pub door_width_mm: i64,
    pub doors_used: u32,
    pub dropdown_height_mm: i64,
    /// Only populated for the bespoke dropdown option.
    pub recommended_dropdown_mm: Option<i64>,
    pub side_liner_thickness_mm: f64,
    pub buildout_per_side_mm: f64,
    pub net_width_mm: i64,
    pub door_span_mm: i64,
    pub overlap_tolerance_mm: i64,
    /// `door_span - (net_width + tolerance)`; zero outside fixed mode.
    pub span_diff_mm: f64,
    pub bottom_liner_length_mm: i64,
    pub side_liner_length_mm: i64,
    pub dropdown_length_mm: i64,
    pub trackset_tolerance_mm: i64,
    pub height_status: HeightStatus,
    pub issue: Issue,
}

impl DimensionResult {
    pub fn is_ok(&self) -> bool {
        self.issue == Issue::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_mm_ties_to_even() {
        assert_eq!(round_mm(1094.5), 1094);
        assert_eq!(round_mm(1095.5), 1096);
        assert_eq!(round_mm(737.6), 738);
        assert_eq!(round_mm(-0.4), 0);
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(32.0), 32.0);
        assert_eq!(round_tenth(14.04), 14.0);
        assert_eq!(round_tenth(-0.04).to_string(), "0");
    }

    #[test]
    fn test_issue_follows_status_prefix() {
        let statuses = [
            HeightStatus::Ok,
            HeightStatus::BespokeOk,
            HeightStatus::TooTallForSelectedDropdown {
                needed_dropdown_mm: 150,
                trackset_mm: 54,
            },
            HeightStatus::TooTallEvenAtMaxDropdown {
                max_dropdown_mm: 400,
                trackset_mm: 54,
            },
            HeightStatus::BespokeCapped {
                ideal_dropdown_mm: 479,
                max_dropdown_mm: 400,
                max_door_height_mm: 2431,
            },
            HeightStatus::FixedTooSmall {
                door_height_mm: 2223,
                bottom_liner_mm: 36,
                trackset_mm: 54,
                shortfall_mm: 113,
            },
            HeightStatus::FixedDropdownTooLarge {
                required_dropdown_mm: 487,
                max_dropdown_mm: 400,
                excess_mm: 87,
                trackset_mm: 54,
            },
        ];
        for status in &statuses {
            let expected = if status.is_ok() { Issue::Ok } else { Issue::Check };
            assert_eq!(Issue::classify(status), expected, "{}", status);
        }
    }

    #[test]
    fn test_status_text_carries_numbers() {
        let status = HeightStatus::TooTallForSelectedDropdown {
            needed_dropdown_mm: 169,
            trackset_mm: 54,
        };
        assert!(status.to_string().contains("need about 169mm dropdown"));

        let status = HeightStatus::FixedTooSmall {
            door_height_mm: 2223,
            bottom_liner_mm: 36,
            trackset_mm: 54,
            shortfall_mm: 113,
        };
        let text = status.to_string();
        assert!(text.starts_with("Opening too small for 2223mm door"));
        assert!(text.contains("short by 113mm"));
    }

    #[test]
    fn test_status_serializes_as_text() {
        let json = serde_json::to_string(&HeightStatus::BespokeOk).expect("serializable");
        assert_eq!(json, "\"OK (bespoke dropdown auto-calculated for fit)\"");
        let json = serde_json::to_string(&Issue::Check).expect("serializable");
        assert_eq!(json, "\"CHECK\"");
    }
}
