/// Five-star rating, 0 meaning unrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StarRating {
    pub rating: u8,
}

impl StarRating {
    pub const MAX: u8 = 5;

    /// Set the rating, clamped to `0..=MAX`
    pub fn set(&mut self, stars: u8) {
        self.rating = stars.min(Self::MAX);
    }

    pub fn increase(&mut self) {
        self.set(self.rating.saturating_add(1));
    }

    pub fn decrease(&mut self) {
        self.set(self.rating.saturating_sub(1));
    }

    /// `★` for each selected star, `☆` for the rest
    pub fn stars(&self) -> String {
        (1..=Self::MAX)
            .map(|i| if i <= self.rating { '★' } else { '☆' })
            .collect()
    }
}
