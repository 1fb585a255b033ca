use crate::core::constants::SystemConstants;
use crate::core::opening::{OpeningInput, TopLinerOption};
use crate::core::result::{DimensionResult, HeightStatus, Issue, round_mm, round_tenth};

struct HeightFit {
    door_height: f64,
    dropdown: f64,
    recommended_dropdown: Option<i64>,
    status: HeightStatus,
}

pub(super) fn dimension(
    constants: &SystemConstants,
    input: &OpeningInput,
    top_liner: TopLinerOption,
) -> DimensionResult {
    let side_liner = constants.side_liner_thickness_mm;
    let net_width = input.width_mm() - 2.0 * side_liner;
    let base_usable_height = constants.base_usable_height(input.height_mm());

    let fit = match top_liner.fixed_dropdown_mm() {
        Some(selected) => fit_selected_dropdown(constants, base_usable_height, selected),
        None => fit_bespoke_dropdown(constants, base_usable_height),
    };

    // Adjacent doors overlap once per meeting, so the leaves together cover
    // the net width plus every internal overlap.
    let doors = f64::from(input.door_count());
    let total_overlap = (doors - 1.0) * constants.door_overlap_mm;
    let door_width = (net_width + total_overlap) / doors;
    let door_span = doors * door_width;

    let issue = Issue::classify(&fit.status);

    DimensionResult {
        door_height_mm: round_mm(fit.door_height),
        door_width_mm: round_mm(door_width),
        doors_used: input.door_count(),
        dropdown_height_mm: round_mm(fit.dropdown),
        recommended_dropdown_mm: fit.recommended_dropdown,
        side_liner_thickness_mm: round_tenth(side_liner),
        buildout_per_side_mm: 0.0,
        net_width_mm: round_mm(net_width),
        door_span_mm: round_mm(door_span),
        overlap_tolerance_mm: round_mm(total_overlap),
        span_diff_mm: 0.0,
        bottom_liner_length_mm: round_mm(net_width),
        side_liner_length_mm: round_mm(input.height_mm()),
        dropdown_length_mm: round_mm(net_width),
        trackset_tolerance_mm: round_mm(constants.trackset_tolerance_mm),
        height_status: fit.status,
        issue,
    }
}

fn fit_selected_dropdown(
    constants: &SystemConstants,
    base_usable_height: f64,
    selected: f64,
) -> HeightFit {
    let dropdown = selected.min(constants.max_dropdown_mm);
    let raw_door_height = (base_usable_height - dropdown).max(0.0);

    if raw_door_height <= constants.max_door_height_mm {
        return HeightFit {
            door_height: raw_door_height,
            dropdown,
            recommended_dropdown: None,
            status: HeightStatus::Ok,
        };
    }

    let needed_for_max = base_usable_height - constants.max_door_height_mm;
    let trackset_mm = round_mm(constants.trackset_tolerance_mm);
    let status = if needed_for_max <= constants.max_dropdown_mm {
        HeightStatus::TooTallForSelectedDropdown {
            needed_dropdown_mm: round_mm(needed_for_max),
            trackset_mm,
        }
    } else {
        HeightStatus::TooTallEvenAtMaxDropdown {
            max_dropdown_mm: round_mm(constants.max_dropdown_mm),
            trackset_mm,
        }
    };

    HeightFit {
        door_height: constants.max_door_height_mm,
        dropdown,
        recommended_dropdown: None,
        status,
    }
}

fn fit_bespoke_dropdown(constants: &SystemConstants, base_usable_height: f64) -> HeightFit {
    let ideal_door_height = constants.max_door_height_mm.min(base_usable_height);
    let ideal_dropdown = (base_usable_height - ideal_door_height).max(0.0);

    let dropdown = ideal_dropdown.min(constants.max_dropdown_mm);
    let door_height = (base_usable_height - dropdown)
        .max(0.0)
        .min(constants.max_door_height_mm);

    let status = if ideal_dropdown <= constants.max_dropdown_mm {
        HeightStatus::BespokeOk
    } else {
        HeightStatus::BespokeCapped {
            ideal_dropdown_mm: round_mm(ideal_dropdown),
            max_dropdown_mm: round_mm(constants.max_dropdown_mm),
            max_door_height_mm: round_mm(constants.max_door_height_mm),
        }
    };

    HeightFit {
        door_height,
        dropdown,
        recommended_dropdown: Some(round_mm(dropdown)),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::opening::DoorSystem;

    fn run(width: f64, height: f64, doors: u32, top_liner: TopLinerOption) -> DimensionResult {
        let system = DoorSystem::MadeToMeasure { top_liner };
        let input = OpeningInput::new(width, height, doors, system);
        dimension(&SystemConstants::default(), &input, top_liner)
    }

    #[test]
    fn test_selected_dropdowns_fill_remaining_height() {
        // base usable height 2400 - 90 = 2310
        let cases = [
            (TopLinerOption::Dropdown108, 108, 2202),
            (TopLinerOption::Dropdown90, 90, 2220),
            (TopLinerOption::Dropdown50, 50, 2260),
            (TopLinerOption::NoDropdown, 0, 2310),
        ];
        for (option, dropdown, door) in cases {
            let result = run(1800.0, 2400.0, 2, option);
            assert_eq!(result.dropdown_height_mm, dropdown, "{option}");
            assert_eq!(result.door_height_mm, door, "{option}");
            assert_eq!(result.height_status, HeightStatus::Ok);
        }
    }

    #[test]
    fn test_too_tall_for_selected_dropdown_reports_needed_dropdown() {
        // base 2800 - 90 = 2710, door 2710 - 108 = 2602 > 2431, need 279
        let result = run(2200.0, 2800.0, 3, TopLinerOption::Dropdown108);
        assert_eq!(result.door_height_mm, 2431);
        assert_eq!(result.dropdown_height_mm, 108);
        assert_eq!(
            result.height_status,
            HeightStatus::TooTallForSelectedDropdown {
                needed_dropdown_mm: 279,
                trackset_mm: 54,
            }
        );
        assert!(result.height_status.to_string().contains("279mm"));
        assert_eq!(result.issue, Issue::Check);
    }

    #[test]
    fn test_too_tall_even_at_max_dropdown() {
        // base 3000 - 90 = 2910, need 479 > 400
        let result = run(2200.0, 3000.0, 3, TopLinerOption::NoDropdown);
        assert_eq!(result.door_height_mm, 2431);
        assert_eq!(result.dropdown_height_mm, 0);
        assert_eq!(
            result.height_status,
            HeightStatus::TooTallEvenAtMaxDropdown {
                max_dropdown_mm: 400,
                trackset_mm: 54,
            }
        );
        assert_eq!(result.issue, Issue::Check);
    }

    #[test]
    fn test_exactly_max_door_height_is_ok() {
        // base = 2431 + 108
        let result = run(2200.0, 2431.0 + 108.0 + 90.0, 3, TopLinerOption::Dropdown108);
        assert_eq!(result.door_height_mm, 2431);
        assert_eq!(result.height_status, HeightStatus::Ok);
    }

    #[test]
    fn test_bespoke_short_opening_needs_no_dropdown() {
        // base 2200 - 90 = 2110 < 2431
        let result = run(2200.0, 2200.0, 3, TopLinerOption::Bespoke);
        assert_eq!(result.door_height_mm, 2110);
        assert_eq!(result.dropdown_height_mm, 0);
        assert_eq!(result.recommended_dropdown_mm, Some(0));
        assert_eq!(result.height_status, HeightStatus::BespokeOk);
    }

    #[test]
    fn test_bespoke_capped_beyond_max_dropdown() {
        // base 3000 - 90 = 2910, ideal dropdown 479, used 400, door 2510 -> capped 2431
        let result = run(2200.0, 3000.0, 3, TopLinerOption::Bespoke);
        assert_eq!(result.dropdown_height_mm, 400);
        assert_eq!(result.recommended_dropdown_mm, Some(400));
        assert_eq!(result.door_height_mm, 2431);
        assert_eq!(
            result.height_status,
            HeightStatus::BespokeCapped {
                ideal_dropdown_mm: 479,
                max_dropdown_mm: 400,
                max_door_height_mm: 2431,
            }
        );
        assert!(result.height_status.to_string().contains("about 479mm"));
        assert_eq!(result.issue, Issue::Check);
    }

    #[test]
    fn test_door_width_shares_overlap_per_meeting() {
        let result = run(1836.0, 2400.0, 1, TopLinerOption::Dropdown108);
        assert_eq!(result.door_width_mm, 1800);
        assert_eq!(result.overlap_tolerance_mm, 0);

        // (2164 + 25) / 2 = 1094.5 rounds to even
        let result = run(2200.0, 2400.0, 2, TopLinerOption::Dropdown108);
        assert_eq!(result.door_width_mm, 1094);
        assert_eq!(result.door_span_mm, 2189);
        assert_eq!(result.overlap_tolerance_mm, 25);

        // (3000 + 75) / 4 = 768.75
        let result = run(3036.0, 2400.0, 4, TopLinerOption::Dropdown108);
        assert_eq!(result.door_width_mm, 769);
        assert_eq!(result.overlap_tolerance_mm, 75);
    }
}
