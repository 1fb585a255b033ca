//! Opening requests and the boundary that builds them.
//!
//! Rows arrive as loosely typed [`OpeningRecord`]s (text enums, optional
//! fields). [`OpeningInput::from_record`] applies defaults and the
//! [`InputPolicy`] once, so the engine only ever sees a fully typed opening.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_OPENING_MM: f64 = 300.0;
pub const MIN_DOORS: u32 = 1;
pub const MAX_DOORS: u32 = 10;

/// Top liner choice for made-to-measure doors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopLinerOption {
    #[default]
    Dropdown108,
    Dropdown90,
    Dropdown50,
    NoDropdown,
    Bespoke,
}

impl TopLinerOption {
    pub const ALL: [TopLinerOption; 5] = [
        TopLinerOption::Dropdown108,
        TopLinerOption::Dropdown90,
        TopLinerOption::Dropdown50,
        TopLinerOption::NoDropdown,
        TopLinerOption::Bespoke,
    ];

    /// Selected dropdown height, or `None` for the bespoke option.
    pub fn fixed_dropdown_mm(&self) -> Option<f64> {
        match self {
            TopLinerOption::Dropdown108 => Some(108.0),
            TopLinerOption::Dropdown90 => Some(90.0),
            TopLinerOption::Dropdown50 => Some(50.0),
            TopLinerOption::NoDropdown => Some(0.0),
            TopLinerOption::Bespoke => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopLinerOption::Dropdown108 => "108mm Dropdown",
            TopLinerOption::Dropdown90 => "90mm Dropdown",
            TopLinerOption::Dropdown50 => "50mm Dropdown",
            TopLinerOption::NoDropdown => "No dropdown (0mm)",
            TopLinerOption::Bespoke => "Bespoke dropdown (auto)",
        }
    }

    /// Accepts short forms (`108`, `108mm`, `none`, `bespoke`) and the full labels.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "108" | "108mm" | "108mm dropdown" | "dropdown108" => Some(TopLinerOption::Dropdown108),
            "90" | "90mm" | "90mm dropdown" | "dropdown90" => Some(TopLinerOption::Dropdown90),
            "50" | "50mm" | "50mm dropdown" | "dropdown50" => Some(TopLinerOption::Dropdown50),
            "0" | "0mm" | "none" | "no dropdown" | "no dropdown (0mm)" | "nodropdown" => {
                Some(TopLinerOption::NoDropdown)
            }
            "bespoke" | "auto" | "bespoke dropdown" | "bespoke dropdown (auto)" => {
                Some(TopLinerOption::Bespoke)
            }
            _ => None,
        }
    }
}

impl fmt::Display for TopLinerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Door widths available in the fixed 2223mm system.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixedDoorWidth {
    W610,
    #[default]
    W762,
    W914,
}

impl FixedDoorWidth {
    pub const ALL: [FixedDoorWidth; 3] = [
        FixedDoorWidth::W610,
        FixedDoorWidth::W762,
        FixedDoorWidth::W914,
    ];

    pub fn mm(&self) -> f64 {
        match self {
            FixedDoorWidth::W610 => 610.0,
            FixedDoorWidth::W762 => 762.0,
            FixedDoorWidth::W914 => 914.0,
        }
    }

    pub fn from_mm(mm: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|width| width.mm() == mm)
    }
}

/// The two sizing strategies, each carrying only the selection it reads.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoorSystem {
    MadeToMeasure { top_liner: TopLinerOption },
    Fixed2223 { door_width: FixedDoorWidth },
}

impl Default for DoorSystem {
    fn default() -> Self {
        DoorSystem::MadeToMeasure {
            top_liner: TopLinerOption::default(),
        }
    }
}

impl DoorSystem {
    pub fn label(&self) -> &'static str {
        match self {
            DoorSystem::MadeToMeasure { .. } => "Made to measure doors",
            DoorSystem::Fixed2223 { .. } => "Fixed 2223mm doors",
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, DoorSystem::Fixed2223 { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoorSystemKind {
    MadeToMeasure,
    Fixed2223,
}

impl DoorSystemKind {
    fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "made-to-measure" | "made_to_measure" | "mtm" | "made to measure"
            | "made to measure doors" | "madetomeasure" => Some(DoorSystemKind::MadeToMeasure),
            "fixed-2223" | "fixed_2223" | "fixed" | "fixed2223" | "fixed 2223mm doors" => {
                Some(DoorSystemKind::Fixed2223)
            }
            _ => None,
        }
    }
}

/// What to do with numeric values below their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Raise the value to its minimum and log a warning.
    #[default]
    Clamp,
    /// Report an [`InputError::OutOfRange`].
    Reject,
}

/// One row of an openings file, before validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct OpeningRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<String>,
    pub width_mm: f64,
    pub height_mm: f64,
    pub doors: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_liner_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_door_width_mm: Option<f64>,
}

impl OpeningRecord {
    /// The single starter row written by `wardrobe-cli template`.
    pub fn starter() -> Self {
        Self {
            job: Some("Job 1".to_string()),
            opening: Some("Wardrobe A".to_string()),
            width_mm: 2200.0,
            height_mm: 2600.0,
            doors: 3.0,
            door_system: Some("made-to-measure".to_string()),
            top_liner_option: Some("108mm Dropdown".to_string()),
            fixed_door_width_mm: Some(762.0),
        }
    }
}

/// A fully typed opening request. Fields are only reachable through
/// constructors that enforce the minimums, so every instance is in range.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OpeningInput {
    job: Option<String>,
    opening: Option<String>,
    width_mm: f64,
    height_mm: f64,
    door_count: u32,
    door_system: DoorSystem,
}

impl OpeningInput {
    /// Build an opening, clamping under-range dimensions and door counts.
    pub fn new(width_mm: f64, height_mm: f64, door_count: u32, door_system: DoorSystem) -> Self {
        Self {
            job: None,
            opening: None,
            width_mm: width_mm.max(MIN_OPENING_MM),
            height_mm: height_mm.max(MIN_OPENING_MM),
            door_count: door_count.clamp(MIN_DOORS, MAX_DOORS),
            door_system,
        }
    }

    pub fn with_labels(mut self, job: Option<String>, opening: Option<String>) -> Self {
        self.job = job;
        self.opening = opening;
        self
    }

    /// Validate a raw row. `row` is 1-based and only used in error messages.
    pub fn from_record(
        row: usize,
        record: &OpeningRecord,
        policy: InputPolicy,
    ) -> Result<Self, InputError> {
        let width_mm = checked_dimension(row, "width_mm", record.width_mm, policy)?;
        let height_mm = checked_dimension(row, "height_mm", record.height_mm, policy)?;
        let door_count = checked_doors(row, record.doors, policy)?;

        let kind = match record.door_system.as_deref() {
            None => DoorSystemKind::MadeToMeasure,
            Some(value) => {
                DoorSystemKind::parse(value).ok_or_else(|| InputError::UnknownDoorSystem {
                    row,
                    value: value.to_string(),
                })?
            }
        };

        let door_system = match kind {
            DoorSystemKind::MadeToMeasure => {
                let top_liner = match record.top_liner_option.as_deref() {
                    None => TopLinerOption::default(),
                    Some(value) => {
                        TopLinerOption::parse(value).ok_or_else(|| InputError::UnknownTopLiner {
                            row,
                            value: value.to_string(),
                        })?
                    }
                };
                DoorSystem::MadeToMeasure { top_liner }
            }
            DoorSystemKind::Fixed2223 => {
                let door_width = match record.fixed_door_width_mm {
                    None => FixedDoorWidth::default(),
                    Some(mm) => FixedDoorWidth::from_mm(mm).unwrap_or_else(|| {
                        log::warn!(
                            "Row {}: fixed door width {}mm is not offered, using {}mm",
                            row,
                            mm,
                            FixedDoorWidth::default().mm()
                        );
                        FixedDoorWidth::default()
                    }),
                };
                DoorSystem::Fixed2223 { door_width }
            }
        };

        Ok(Self {
            job: record.job.clone(),
            opening: record.opening.clone(),
            width_mm,
            height_mm,
            door_count,
            door_system,
        })
    }

    pub fn job(&self) -> Option<&str> {
        self.job.as_deref()
    }

    pub fn opening(&self) -> Option<&str> {
        self.opening.as_deref()
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    pub fn door_count(&self) -> u32 {
        self.door_count
    }

    pub fn door_system(&self) -> DoorSystem {
        self.door_system
    }

    /// "Job 1 – Wardrobe A", falling back to whichever label is present.
    pub fn display_name(&self) -> String {
        match (self.job(), self.opening()) {
            (Some(job), Some(opening)) => format!("{} – {}", job, opening),
            (Some(label), None) | (None, Some(label)) => label.to_string(),
            (None, None) => "(unnamed)".to_string(),
        }
    }
}

fn checked_dimension(
    row: usize,
    field: &str,
    value: f64,
    policy: InputPolicy,
) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFiniteValue {
            row,
            field: field.to_string(),
        });
    }
    if value >= MIN_OPENING_MM {
        return Ok(value);
    }
    match policy {
        InputPolicy::Clamp => {
            log::warn!(
                "Row {}: {} {} is below {}mm, clamped",
                row,
                field,
                value,
                MIN_OPENING_MM
            );
            Ok(MIN_OPENING_MM)
        }
        InputPolicy::Reject => Err(InputError::OutOfRange {
            row,
            field: field.to_string(),
            value,
            min: MIN_OPENING_MM,
            max: f64::INFINITY,
        }),
    }
}

fn checked_doors(row: usize, value: f64, policy: InputPolicy) -> Result<u32, InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFiniteValue {
            row,
            field: "doors".to_string(),
        });
    }
    let doors = value.trunc();
    let (min, max) = (f64::from(MIN_DOORS), f64::from(MAX_DOORS));
    if (min..=max).contains(&doors) {
        return Ok(doors as u32);
    }
    match policy {
        InputPolicy::Clamp => {
            let clamped = doors.clamp(min, max);
            log::warn!("Row {}: doors {} clamped to {}", row, value, clamped);
            Ok(clamped as u32)
        }
        InputPolicy::Reject => Err(InputError::OutOfRange {
            row,
            field: "doors".to_string(),
            value,
            min,
            max,
        }),
    }
}
