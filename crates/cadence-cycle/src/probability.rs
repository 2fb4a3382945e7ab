//! Day-relative conception probability.
//!
//! | Offset from ovulation | Probability (%) |
//! |-----------------------|-----------------|
//! | −6                    | 2               |
//! | −5                    | 10              |
//! | −4                    | 16              |
//! | −3                    | 20              |
//! | −2                    | 27              |
//! | −1                    | 31              |
//! | 0                     | 33              |
//! | +1                    | 10              |
//! | +2                    | 2               |
//! | otherwise             | 0               |

/// Offsets covered by the lookup table, starting at −6.
const CURVE: [f64; 9] = [2.0, 10.0, 16.0, 20.0, 27.0, 31.0, 33.0, 10.0, 2.0];
const CURVE_START_OFFSET: i64 = -6;

/// Conception probability (percent) for a day `offset` days from ovulation.
pub fn conception_probability(offset: i64) -> f64 {
    offset
        .checked_sub(CURVE_START_OFFSET)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| CURVE.get(idx).copied())
        .unwrap_or(0.0)
}
