//! Price draws for location visits.
//!
//! Prices are visit-scoped: every arrival at a location rolls a fresh price
//! for each of its offerings from the world's shared generator. The
//! generator advances monotonically across draws, so a fixed seed yields an
//! identical price trace for an identical travel sequence.

use rand::Rng;

use tracing::debug;

use crate::world::{LocationId, World};

impl World {
    /// Regenerate the current prices at `location`.
    ///
    /// Each offering, in order, gets a uniform integer from its inclusive
    /// `[low, high]` range. Any prices from a previous visit are replaced.
    /// Must be called exactly once per arrival, including the player's
    /// initial placement.
    pub fn draw_prices(&mut self, location: LocationId) {
        let count = self.locations[location].offerings.len();
        let mut prices = Vec::with_capacity(count);
        for index in 0..count {
            let range = self.locations[location].offerings[index].range;
            prices.push(self.rng.gen_range(range.low..=range.high));
        }
        debug!(
            location = %self.locations[location].name,
            offerings = count,
            "drew commodity prices"
        );
        self.locations[location].prices = prices;
    }
}
