//! Human readable density check report.

use std::path::Path;

use geodense_types::coordinate::round_to;

use crate::check::SegmentViolation;

/// Decimal places of the distances in the report.
const DISTANCE_PRECISION: u32 = 4;

/// Renders the result of a density check of `input_file`.
///
/// The first line tells whether the check passed. A failed check is followed by one line per
/// violation, addressing the segment by feature index and its position in the feature geometry.
pub fn result_message(
    input_file: &Path,
    violations: &[SegmentViolation],
    max_segment_length: f64,
) -> String {
    let status = if violations.is_empty() { "PASSED" } else { "FAILED" };
    let mut message = format!(
        "density-check {status} for file {} with max-segment-length: {max_segment_length:?}",
        input_file.display()
    );

    if violations.is_empty() {
        return message;
    }

    message.push_str(&format!(
        "\n\nFeature(s) detected that contain line-segment(s) exceeding \
         max-segment-length ({max_segment_length:?}):\n"
    ));

    let lines: Vec<String> = violations
        .iter()
        .map(|violation| {
            let feature = violation.path.first().copied().unwrap_or_default();
            let segment: Vec<String> = violation
                .path
                .get(1..)
                .unwrap_or_default()
                .iter()
                .map(usize::to_string)
                .collect();
            format!(
                "  - features[{feature}].geometry.segments[{}], distance: {}",
                segment.join(", "),
                round_to(violation.distance, DISTANCE_PRECISION)
            )
        })
        .collect();
    message.push_str(&lines.join("\n"));

    message
}
