use crate::core::constants::SystemConstants;
use crate::core::opening::{FixedDoorWidth, OpeningInput};
use crate::core::result::{DimensionResult, HeightStatus, Issue, round_mm, round_tenth};

pub(super) fn dimension(
    constants: &SystemConstants,
    input: &OpeningInput,
    selected_width: FixedDoorWidth,
) -> DimensionResult {
    let door_height = constants.fixed_door_height_mm;
    let door_width = selected_width.mm();

    // opening height = bottom liner + trackset + door + dropdown
    let required_dropdown = constants.base_usable_height(input.height_mm()) - door_height;
    let trackset_mm = round_mm(constants.trackset_tolerance_mm);

    let (dropdown, status) = if required_dropdown < 0.0 {
        (
            0.0,
            HeightStatus::FixedTooSmall {
                door_height_mm: round_mm(door_height),
                bottom_liner_mm: round_mm(constants.bottom_liner_thickness_mm),
                trackset_mm,
                shortfall_mm: round_mm(-required_dropdown),
            },
        )
    } else if required_dropdown > constants.max_dropdown_mm {
        (
            constants.max_dropdown_mm,
            HeightStatus::FixedDropdownTooLarge {
                required_dropdown_mm: round_mm(required_dropdown),
                max_dropdown_mm: round_mm(constants.max_dropdown_mm),
                excess_mm: round_mm(required_dropdown - constants.max_dropdown_mm),
                trackset_mm,
            },
        )
    } else {
        (required_dropdown, HeightStatus::Ok)
    };

    // door_span - net_width = tolerance, net_width = width - 2 * side
    //   => side = (width - door_span + tolerance) / 2
    let doors = f64::from(input.door_count());
    let tolerance = constants.overlap_tolerance(input.door_count());
    let door_span = doors * door_width;
    let side_thickness = ((input.width_mm() - door_span + tolerance) / 2.0).max(0.0);

    let net_width = input.width_mm() - 2.0 * side_thickness;
    // Non-zero only when the side liners could not shrink far enough.
    let span_diff = door_span - (net_width + tolerance);
    let buildout = (side_thickness - constants.side_liner_thickness_mm).max(0.0);

    let issue = Issue::classify(&status);

    DimensionResult {
        door_height_mm: round_mm(door_height),
        door_width_mm: round_mm(door_width),
        doors_used: input.door_count(),
        dropdown_height_mm: round_mm(dropdown),
        recommended_dropdown_mm: None,
        side_liner_thickness_mm: round_tenth(side_thickness),
        buildout_per_side_mm: round_tenth(buildout),
        net_width_mm: round_mm(net_width),
        door_span_mm: round_mm(door_span),
        overlap_tolerance_mm: round_mm(tolerance),
        span_diff_mm: round_tenth(span_diff),
        bottom_liner_length_mm: round_mm(net_width),
        side_liner_length_mm: round_mm(input.height_mm()),
        dropdown_length_mm: round_mm(net_width),
        trackset_tolerance_mm: trackset_mm,
        height_status: status,
        issue,
    }
}
