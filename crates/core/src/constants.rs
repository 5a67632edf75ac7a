/// Amount shown when the widget first loads
pub const DEFAULT_AMOUNT: &str = "1";

/// Minimum fractional digits for displayed amounts and rates
pub const MIN_DISPLAY_FRACTION_DIGITS: u32 = 2;

/// Maximum fractional digits for displayed amounts and rates
pub const MAX_DISPLAY_FRACTION_DIGITS: u32 = 8;

/// Length of the swap button rotation, in milliseconds
pub const SWAP_ANIMATION_MS: u64 = 300;
