//! Diagram layout generator
//!
//! Turns an opening and its computed dimensions into a front-elevation
//! description in a unit square: the opening spans `0..1` on both axes with the
//! origin at the bottom-left corner and `y` pointing up. Annotation text
//! positions may fall outside the square; [`ViewBox`] bounds everything.
//!
//! The layout is cosmetic. Door widths are squeezed when they would overflow
//! the liners, but that never feeds back into the [`DimensionResult`].

use crate::core::constants::SystemConstants;
use crate::core::opening::{DoorSystem, OpeningInput, TopLinerOption};
use crate::core::result::{DimensionResult, round_mm};
use serde::Serialize;

const SIDE_LINER_FIXING_TEXT: &str = "Side liners fixings -\n\
    200mm in from either end\n\
    and then two in the middle\n\
    of the liner (equally spaced),\n\
    so 4x fixings in total.";

const SUB_CILL_FIXING_TEXT: &str = "Sub-cill to floor - fixing every 500mm\n\
    Sub-cill to carpet - fixing every 200mm";

const BOTTOM_TRACK_FIXING_TEXT: &str = "Bottom track fixing - 50-80mm in from ends\n\
    and then every 800mm of track span.";

const DROPDOWN_BRACKET_FIXING_TEXT: &str = "Drop-down to be fixed using\n\
    metal stretcher brackets.\n\
    2x into side liners and\n\
    brackets every 600mm.";

/// Right-hand column for annotations with leader arrows.
const RIGHT_NOTE_X: f64 = 1.28;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `(x, y)` is the bottom-left corner.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    SideLinerFixing,
    SubCillFixing,
    BottomTrackFixing,
    DropdownBracketFixing,
}

/// A fixing instruction: text placed at `text_position`, pointing at `anchor`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub anchor: Point,
    pub text_position: Point,
    pub text: &'static str,
    pub align: TextAlign,
    /// Draw a leader arrow from the text to the anchor.
    pub arrow: bool,
}

/// Double-headed dimension arrow with its label.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DimensionLine {
    pub start: Point,
    pub end: Point,
    pub label: String,
    pub label_position: Point,
    pub vertical: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        Self {
            min_x: -0.45,
            max_x: 1.45,
            min_y: -0.25,
            max_y: 1.20,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    pub outline: Rect,
    pub left_liner: Rect,
    pub right_liner: Rect,
    pub bottom_liner: Rect,
    pub dropdown: Option<Rect>,
    pub doors: Vec<Rect>,
    /// Factor applied to door widths to keep them inside the liners (1.0 when unscaled).
    pub door_scale: f64,
    pub dropdown_label: String,
    pub label_position: Point,
    pub annotations: Vec<Annotation>,
    pub dimensions: Vec<DimensionLine>,
    pub view_box: ViewBox,
}

impl DiagramLayout {
    pub fn annotation(&self, kind: AnnotationKind) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.kind == kind)
    }
}

#[derive(Debug, Clone)]
pub struct LayoutGenerator {
    bottom_liner_thickness_mm: f64,
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self::new(&SystemConstants::default())
    }
}

impl LayoutGenerator {
    pub fn new(constants: &SystemConstants) -> Self {
        Self {
            bottom_liner_thickness_mm: constants.bottom_liner_thickness_mm,
        }
    }

    pub fn layout(&self, input: &OpeningInput, result: &DimensionResult) -> DiagramLayout {
        let width = input.width_mm().max(1.0);
        let height = input.height_mm().max(1.0);
        let doors = result.doors_used.max(1);

        let side_rel = result.side_liner_thickness_mm.max(0.0) / width;
        let bottom_rel = self.bottom_liner_thickness_mm / height;
        let dropdown_rel = if result.dropdown_height_mm > 0 {
            result.dropdown_height_mm as f64 / height
        } else {
            0.0
        };
        let door_h_rel = if result.door_height_mm > 0 {
            result.door_height_mm as f64 / height
        } else {
            0.0
        };
        let inner_width = 1.0 - 2.0 * side_rel;

        let left_liner = Rect::new(0.0, bottom_rel, side_rel, 1.0 - bottom_rel);
        let right_liner = Rect::new(1.0 - side_rel, bottom_rel, side_rel, 1.0 - bottom_rel);
        let bottom_liner = Rect::new(side_rel, 0.0, inner_width, bottom_rel);
        let dropdown = (dropdown_rel > 0.0)
            .then(|| Rect::new(side_rel, 1.0 - dropdown_rel, inner_width, dropdown_rel));

        let mut door_width_rel = result.door_width_mm.max(0) as f64 / width;
        let total_span = f64::from(doors) * door_width_rel;
        let door_scale = if total_span > inner_width && total_span > 0.0 {
            inner_width / total_span
        } else {
            1.0
        };
        door_width_rel *= door_scale;

        let door_rects = (0..doors)
            .map(|i| {
                Rect::new(
                    side_rel + f64::from(i) * door_width_rel,
                    bottom_rel,
                    door_width_rel,
                    door_h_rel,
                )
            })
            .collect();

        let mut annotations = vec![
            Annotation {
                kind: AnnotationKind::SideLinerFixing,
                anchor: Point::new(side_rel / 2.0, 0.5),
                text_position: Point::new(-0.34, 0.72),
                text: SIDE_LINER_FIXING_TEXT,
                align: TextAlign::Right,
                arrow: false,
            },
            Annotation {
                kind: AnnotationKind::SubCillFixing,
                anchor: Point::new(0.5, bottom_rel / 2.0),
                text_position: Point::new(0.5, -0.20),
                text: SUB_CILL_FIXING_TEXT,
                align: TextAlign::Center,
                arrow: false,
            },
            Annotation {
                kind: AnnotationKind::BottomTrackFixing,
                anchor: Point::new(0.5, bottom_rel + 0.02),
                text_position: Point::new(RIGHT_NOTE_X, bottom_rel + 0.18),
                text: BOTTOM_TRACK_FIXING_TEXT,
                align: TextAlign::Left,
                arrow: true,
            },
        ];
        if dropdown.is_some() {
            annotations.push(Annotation {
                kind: AnnotationKind::DropdownBracketFixing,
                anchor: Point::new(0.5, 1.0 - dropdown_rel / 2.0),
                text_position: Point::new(RIGHT_NOTE_X, 1.0 - dropdown_rel / 2.0),
                text: DROPDOWN_BRACKET_FIXING_TEXT,
                align: TextAlign::Left,
                arrow: true,
            });
        }

        let dimensions = vec![
            DimensionLine {
                start: Point::new(-0.20, 0.0),
                end: Point::new(-0.20, 1.0),
                label: format!("{}mm", round_mm(input.height_mm())),
                label_position: Point::new(-0.27, 0.5),
                vertical: true,
            },
            DimensionLine {
                start: Point::new(0.0, -0.06),
                end: Point::new(1.0, -0.06),
                label: format!("{}mm", round_mm(input.width_mm())),
                label_position: Point::new(0.5, -0.10),
                vertical: false,
            },
        ];

        DiagramLayout {
            outline: Rect::new(0.0, 0.0, 1.0, 1.0),
            left_liner,
            right_liner,
            bottom_liner,
            dropdown,
            doors: door_rects,
            door_scale,
            dropdown_label: dropdown_label(input.door_system(), result.dropdown_height_mm),
            label_position: Point::new(0.5, 1.05),
            annotations,
            dimensions,
            view_box: ViewBox::default(),
        }
    }
}

/// Top label describing the dropdown actually used.
pub fn dropdown_label(door_system: DoorSystem, dropdown_mm: i64) -> String {
    let bespoke = matches!(
        door_system,
        DoorSystem::MadeToMeasure {
            top_liner: TopLinerOption::Bespoke
        }
    );
    match (bespoke, dropdown_mm > 0) {
        (true, true) => format!("BESPOKE {}mm DROPDOWN", dropdown_mm),
        (true, false) => "BESPOKE – NO DROPDOWN".to_string(),
        (false, true) => format!("{}mm DROPDOWN", dropdown_mm),
        (false, false) => "NO DROPDOWN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::DimensioningEngine;
    use crate::core::opening::FixedDoorWidth;
    use approx::assert_relative_eq;

    fn layout_for(input: &OpeningInput) -> (DimensionResult, DiagramLayout) {
        let result = DimensioningEngine::default().dimension(input);
        let layout = LayoutGenerator::default().layout(input, &result);
        (result, layout)
    }

    fn mtm(width: f64, height: f64, doors: u32, top_liner: TopLinerOption) -> OpeningInput {
        OpeningInput::new(width, height, doors, DoorSystem::MadeToMeasure { top_liner })
    }

    #[test]
    fn test_made_to_measure_rectangles() {
        let input = mtm(2200.0, 2600.0, 3, TopLinerOption::Dropdown108);
        let (_, layout) = layout_for(&input);

        let side_rel = 18.0 / 2200.0;
        let bottom_rel = 36.0 / 2600.0;
        assert_relative_eq!(layout.left_liner.width, side_rel);
        assert_relative_eq!(layout.left_liner.y, bottom_rel);
        assert_relative_eq!(layout.left_liner.top(), 1.0);
        assert_relative_eq!(layout.right_liner.right(), 1.0);
        assert_relative_eq!(layout.bottom_liner.x, side_rel);
        assert_relative_eq!(layout.bottom_liner.height, bottom_rel);
        assert_relative_eq!(layout.bottom_liner.width, 1.0 - 2.0 * side_rel);

        let dropdown = layout.dropdown.expect("108mm dropdown");
        assert_relative_eq!(dropdown.height, 108.0 / 2600.0);
        assert_relative_eq!(dropdown.top(), 1.0);
        assert_eq!(layout.dropdown_label, "108mm DROPDOWN");
    }

    #[test]
    fn test_doors_are_laid_out_left_to_right() {
        let input = mtm(2200.0, 2600.0, 3, TopLinerOption::Dropdown108);
        let (_, layout) = layout_for(&input);

        assert_eq!(layout.doors.len(), 3);
        // 3 x 738 = 2214 overflows the 2164 inner width because of the overlaps
        let inner = 1.0 - 2.0 * 18.0 / 2200.0;
        assert!(layout.door_scale < 1.0);
        assert_relative_eq!(layout.doors[0].x, 18.0 / 2200.0);
        assert_relative_eq!(layout.doors[2].right(), 1.0 - 18.0 / 2200.0, epsilon = 1e-12);
        let total: f64 = layout.doors.iter().map(|d| d.width).sum();
        assert_relative_eq!(total, inner, epsilon = 1e-12);
        for pair in layout.doors.windows(2) {
            assert_relative_eq!(pair[0].right(), pair[1].x, epsilon = 1e-12);
        }
        assert_relative_eq!(layout.doors[0].height, 2402.0 / 2600.0);
    }

    #[test]
    fn test_scaling_does_not_touch_result() {
        let input = mtm(2200.0, 2600.0, 3, TopLinerOption::Dropdown108);
        let engine = DimensioningEngine::default();
        let result = engine.dimension(&input);
        let before = result.clone();
        let _ = LayoutGenerator::default().layout(&input, &result);
        assert_eq!(result, before);
        assert_eq!(result.door_width_mm, 738);
    }

    #[test]
    fn test_narrow_doors_are_not_scaled() {
        // single door: no overlap, leaf exactly fills the net width
        let input = OpeningInput::new(
            2000.0,
            2400.0,
            1,
            DoorSystem::MadeToMeasure {
                top_liner: TopLinerOption::NoDropdown,
            },
        );
        let (result, layout) = layout_for(&input);
        assert_eq!(result.door_width_mm, 1964);
        assert_eq!(layout.door_scale, 1.0);
        assert_relative_eq!(layout.doors[0].width, 1964.0 / 2000.0);
    }

    #[test]
    fn test_no_dropdown_has_no_rect_or_bracket_note() {
        let input = mtm(2200.0, 2400.0, 2, TopLinerOption::NoDropdown);
        let (_, layout) = layout_for(&input);
        assert!(layout.dropdown.is_none());
        assert!(
            layout
                .annotation(AnnotationKind::DropdownBracketFixing)
                .is_none()
        );
        assert_eq!(layout.annotations.len(), 3);
        assert_eq!(layout.dropdown_label, "NO DROPDOWN");
    }

    #[test]
    fn test_annotation_anchors_follow_liners() {
        let input = OpeningInput::new(
            2200.0,
            2600.0,
            3,
            DoorSystem::Fixed2223 {
                door_width: FixedDoorWidth::W762,
            },
        );
        let (result, layout) = layout_for(&input);
        let side_rel = result.side_liner_thickness_mm / 2200.0;
        let bottom_rel = 36.0 / 2600.0;
        let dropdown_rel = 287.0 / 2600.0;

        let side = layout
            .annotation(AnnotationKind::SideLinerFixing)
            .expect("side note");
        assert_relative_eq!(side.anchor.x, side_rel / 2.0);
        assert!(!side.arrow);

        let sub_cill = layout
            .annotation(AnnotationKind::SubCillFixing)
            .expect("sub-cill note");
        assert_relative_eq!(sub_cill.anchor.y, bottom_rel / 2.0);
        assert_eq!(sub_cill.text_position, Point::new(0.5, -0.20));

        let track = layout
            .annotation(AnnotationKind::BottomTrackFixing)
            .expect("track note");
        assert_relative_eq!(track.text_position.y, bottom_rel + 0.18);
        assert!(track.arrow);

        let bracket = layout
            .annotation(AnnotationKind::DropdownBracketFixing)
            .expect("bracket note");
        assert_relative_eq!(bracket.anchor.y, 1.0 - dropdown_rel / 2.0);
        assert!(bracket.text.contains("stretcher brackets"));

        assert_eq!(layout.dropdown_label, "287mm DROPDOWN");
    }

    #[test]
    fn test_bespoke_labels() {
        let input = mtm(2200.0, 2600.0, 2, TopLinerOption::Bespoke);
        let (_, layout) = layout_for(&input);
        assert_eq!(layout.dropdown_label, "BESPOKE 79mm DROPDOWN");

        let input = mtm(2200.0, 2200.0, 2, TopLinerOption::Bespoke);
        let (_, layout) = layout_for(&input);
        assert_eq!(layout.dropdown_label, "BESPOKE – NO DROPDOWN");
    }

    #[test]
    fn test_dimension_labels() {
        let input = mtm(2200.0, 2600.0, 3, TopLinerOption::Dropdown108);
        let (_, layout) = layout_for(&input);
        let labels: Vec<&str> = layout.dimensions.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["2600mm", "2200mm"]);
        assert!(layout.dimensions[0].vertical);
    }

    #[test]
    fn test_layout_serializes_for_renderers() {
        let input = mtm(2200.0, 2600.0, 3, TopLinerOption::Dropdown108);
        let (_, layout) = layout_for(&input);
        let json = serde_json::to_value(&layout).expect("serializable");
        assert_eq!(json["doors"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["annotations"][0]["kind"], "side_liner_fixing");
        assert_eq!(json["dropdown_label"], "108mm DROPDOWN");
    }
}
