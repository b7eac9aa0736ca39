use crate::models::NumberLabel;

/// Label a number by its divisibility by 3 and 5.
///
/// Multiples of both always come out as `VisualNuts`, which renders with the
/// 3-label first. Zero and negative numbers use plain remainder arithmetic, so
/// `0` is `VisualNuts` and `-10` is `Nuts`.
pub fn classify(n: i64) -> NumberLabel {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => NumberLabel::VisualNuts,
        (true, false) => NumberLabel::Visual,
        (false, true) => NumberLabel::Nuts,
        (false, false) => NumberLabel::Number(n),
    }
}
