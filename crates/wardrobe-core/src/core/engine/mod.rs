//! Dimensioning engine
//!
//! Pure transform from an [`OpeningInput`] to a [`DimensionResult`]. The door
//! system selects one of two strategies:
//!
//! - [`made_to_measure`]: fixed 18mm side liners, selectable or bespoke dropdown
//! - [`fixed_door`]: 2223mm doors of a chosen width, side liners built out to
//!   meet the overlap tolerance
//!
//! Geometry that cannot be fitted is never an error; it is reported through
//! [`HeightStatus`](crate::core::result::HeightStatus) and `issue = CHECK`.

mod fixed_door;
mod made_to_measure;

use crate::core::constants::SystemConstants;
use crate::core::opening::{DoorSystem, OpeningInput};
use crate::core::result::DimensionResult;

#[derive(Debug, Clone, Default)]
pub struct DimensioningEngine {
    constants: SystemConstants,
}

impl DimensioningEngine {
    pub fn new(constants: SystemConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &SystemConstants {
        &self.constants
    }

    pub fn dimension(&self, input: &OpeningInput) -> DimensionResult {
        let result = match input.door_system() {
            DoorSystem::MadeToMeasure { top_liner } => {
                made_to_measure::dimension(&self.constants, input, top_liner)
            }
            DoorSystem::Fixed2223 { door_width } => {
                fixed_door::dimension(&self.constants, input, door_width)
            }
        };

        log::debug!(
            "{} {}x{} {} doors ({}): door {}x{}, dropdown {}, side liner {} -> {}",
            input.display_name(),
            input.width_mm(),
            input.height_mm(),
            input.door_count(),
            input.door_system().label(),
            result.door_width_mm,
            result.door_height_mm,
            result.dropdown_height_mm,
            result.side_liner_thickness_mm,
            result.issue
        );

        result
    }
}
