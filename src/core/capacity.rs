use crate::domain::model::Listing;

/// Assumed width of a stored vehicle, in feet. Listings are divided into
/// fixed-width parking lanes of this size.
pub const VEHICLE_WIDTH: u32 = 10;

/// How many lanes a listing offers and how long each lane is. A listing
/// narrower than `VEHICLE_WIDTH` offers no lanes at all.
pub fn lane_capacity(listing: &Listing) -> (u32, u32) {
    (listing.width / VEHICLE_WIDTH, listing.length)
}
