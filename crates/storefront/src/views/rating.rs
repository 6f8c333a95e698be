//! Rounded star display for product ratings.

/// A 0-5 rating score rounded into star cells.
///
/// A five-cell row: `full` filled stars, then one half star when the
/// fractional part of the score is at least 0.5, then empty stars for the
/// rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingStars {
    pub full: u8,
    pub half: bool,
}

impl RatingStars {
    /// Round a rating score into star cells. Scores are clamped to 0-5.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        let rate = rate.clamp(0.0, 5.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = rate.floor() as u8;
        let half = full < 5 && rate.fract() >= 0.5;
        Self { full, half }
    }

    /// Number of empty cells in the five-cell row.
    #[must_use]
    pub const fn empty(self) -> u8 {
        5 - self.full - self.half as u8
    }

    /// Icon classes for the row, one per cell.
    #[must_use]
    pub fn icons(self) -> Vec<&'static str> {
        let mut icons = Vec::with_capacity(5);
        for _ in 0..self.full {
            icons.push("fas fa-star");
        }
        if self.half {
            icons.push("fas fa-star-half-alt");
        }
        for _ in 0..self.empty() {
            icons.push("far fa-star");
        }
        icons
    }
}
