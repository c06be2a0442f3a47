/// The error type for [`validate()`](crate::ZoneConfig::validate) on the configuration types.
///
/// These are programmer errors: a configuration is checked once when it is
/// created or loaded, and the solvers assume it is valid afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    MinWidthExceedsMaxWidth { min: u32, max: u32 },
    NonPositiveMaxWidth { max: u32 },
    NegativeGap { gap: f64 },
    NegativeFixedSpace { field: &'static str, value: f64 },
    RowPenaltyOutOfRange { penalty: f64 },
    OverlapOutOfRange { overlap: f64 },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MinWidthExceedsMaxWidth { min, max } => write!(
                f,
                "The minimum card width ({}) is larger than the maximum card width ({})",
                min, max
            ),
            ConfigError::NonPositiveMaxWidth { max } => {
                write!(f, "The maximum card width must be positive, but is {}", max)
            }
            ConfigError::NegativeGap { gap } => {
                write!(f, "The gap between cards must not be negative, but is {}", gap)
            }
            ConfigError::NegativeFixedSpace { field, value } => {
                write!(f, "The reserved space '{}' must not be negative, but is {}", field, value)
            }
            ConfigError::RowPenaltyOutOfRange { penalty } => write!(
                f,
                "The row penalty must be in the range (0, 1], but is {}",
                penalty
            ),
            ConfigError::OverlapOutOfRange { overlap } => write!(
                f,
                "The hand overlap must be in the range [0, 1), but is {}",
                overlap
            ),
        }
    }
}
