use crate::core::catalog::Catalog;
use crate::core::fit::can_fit_all;
use crate::domain::model::{Listing, LocationMatch};

/// Listings per location beyond this count are ignored (catalog order wins).
/// Subset enumeration is exponential, so the search space has to be bounded
/// somewhere; real catalogs stay far below this.
pub const MAX_LISTINGS_PER_SEARCH: usize = 20;

/// Advance `indices` to the next k-combination of `0..n` in lexicographic
/// order. Returns false when the last combination has been visited.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    for i in (0..k).rev() {
        if indices[i] != i + n - k {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Find the cheapest subset of `listings` whose combined lanes hold every
/// vehicle, as `(listing_ids, total_price_in_cents)`.
///
/// Subsets are enumerated by increasing size, and within one size in
/// lexicographic catalog order; only a strictly cheaper feasible subset
/// replaces the current best, so among equal-price candidates the first one
/// enumerated wins. That fixed order is what makes results reproducible.
pub fn best_combination(vehicles: &[u32], listings: &[Listing]) -> Option<(Vec<String>, u64)> {
    let listings = if listings.len() > MAX_LISTINGS_PER_SEARCH {
        tracing::warn!(
            "Location has {} listings, searching only the first {}",
            listings.len(),
            MAX_LISTINGS_PER_SEARCH
        );
        &listings[..MAX_LISTINGS_PER_SEARCH]
    } else {
        listings
    };

    let n = listings.len();
    let mut best: Option<(Vec<usize>, u64)> = None;

    for size in 1..=n {
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            let price: u64 = indices
                .iter()
                .map(|&i| listings[i].price_in_cents)
                .sum();

            // feasibility is the expensive half; price-prune first
            if best.as_ref().map_or(true, |(_, b)| price < *b) {
                let members: Vec<&Listing> = indices.iter().map(|&i| &listings[i]).collect();
                if can_fit_all(vehicles, &members) {
                    best = Some((indices.clone(), price));
                }
            }

            if !next_combination(&mut indices, n) {
                break;
            }
        }
    }

    best.map(|(indices, price)| {
        let ids = indices.iter().map(|&i| listings[i].id.clone()).collect();
        (ids, price)
    })
}

/// Run the subset search for every location and rank the winners by total
/// price, cheapest first. Locations with no feasible combination are absent.
/// The sort is stable, so equal-price locations keep catalog order.
pub fn rank_locations(vehicles: &[u32], catalog: &Catalog) -> Vec<LocationMatch> {
    let mut matches: Vec<LocationMatch> = catalog
        .locations()
        .filter_map(|group| {
            best_combination(vehicles, &group.listings).map(|(listing_ids, total)| LocationMatch {
                location_id: group.location_id.clone(),
                listing_ids,
                total_price_in_cents: total,
            })
        })
        .collect();

    matches.sort_by_key(|m| m.total_price_in_cents);
    matches
}
