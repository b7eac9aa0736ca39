use std::fmt;

/// What gets printed for a single number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLabel {
    /// Divisible by 3
    Visual,
    /// Divisible by 5
    Nuts,
    /// Divisible by both 3 and 5
    VisualNuts,
    /// Neither, the number itself is printed
    Number(i64),
}

impl fmt::Display for NumberLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberLabel::Visual => f.write_str("Visual"),
            NumberLabel::Nuts => f.write_str("Nuts"),
            NumberLabel::VisualNuts => f.write_str("Visual Nuts"),
            NumberLabel::Number(n) => write!(f, "{n}"),
        }
    }
}
