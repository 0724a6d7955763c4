use crate::core::capacity::lane_capacity;
use crate::domain::model::Listing;

/// Decide whether every vehicle fits into the combined lanes of `listings`.
///
/// Descending first-fit: lanes and vehicles are both sorted longest-first,
/// and each vehicle takes the first lane with enough remaining length,
/// shrinking that lane's remainder for later (smaller) vehicles. A lane is
/// not exclusive to one vehicle; leftover length stays available.
///
/// This is a heuristic, not an exact bin-packing solver. It can report
/// infeasible for instances an exact solver would pack (see the unit tests
/// pinning that behavior), and callers depend on exactly this decision
/// procedure.
pub fn can_fit_all(vehicles: &[u32], listings: &[&Listing]) -> bool {
    let mut lanes: Vec<u32> = Vec::new();
    for listing in listings {
        let (count, length) = lane_capacity(listing);
        lanes.extend(std::iter::repeat(length).take(count as usize));
    }
    lanes.sort_unstable_by(|a, b| b.cmp(a));

    let mut vehicles = vehicles.to_vec();
    vehicles.sort_unstable_by(|a, b| b.cmp(a));

    for vehicle in vehicles {
        match lanes.iter_mut().find(|lane| **lane >= vehicle) {
            Some(lane) => *lane -= vehicle,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, width: u32, length: u32) -> Listing {
        Listing {
            id: id.to_string(),
            location_id: "loc1".to_string(),
            length,
            width,
            price_in_cents: 1000,
        }
    }

    #[test]
    fn test_empty_demand_is_always_feasible() {
        assert!(can_fit_all(&[], &[]));
        let l = listing("a", 10, 20);
        assert!(can_fit_all(&[], &[&l]));
    }

    #[test]
    fn test_no_lanes_cannot_fit_anything() {
        assert!(!can_fit_all(&[10], &[]));
        // wide enough for nothing: zero lanes despite plenty of length
        let narrow = listing("a", 9, 100);
        assert!(!can_fit_all(&[10], &[&narrow]));
    }

    #[test]
    fn test_single_vehicle_single_lane() {
        let l = listing("a", 10, 20);
        assert!(can_fit_all(&[20], &[&l]));
        assert!(!can_fit_all(&[21], &[&l]));
    }

    #[test]
    fn test_lane_remainder_is_reused() {
        // one lane of length 45 takes a 25 and then a 20
        let l = listing("a", 10, 45);
        assert!(can_fit_all(&[25, 20], &[&l]));
        assert!(!can_fit_all(&[25, 21], &[&l]));
    }

    #[test]
    fn test_wide_listing_yields_parallel_lanes() {
        // width 20 -> two independent lanes of length 25
        let l = listing("a", 20, 25);
        assert!(can_fit_all(&[25, 25], &[&l]));
        assert!(!can_fit_all(&[25, 26], &[&l]));
    }

    #[test]
    fn test_lanes_combine_across_listings() {
        let a = listing("a", 10, 20);
        let b = listing("b", 10, 25);
        assert!(!can_fit_all(&[20, 25], &[&a]));
        assert!(can_fit_all(&[20, 25], &[&a, &b]));
    }

    #[test]
    fn test_duplicate_lengths_each_need_their_own_space() {
        let l = listing("a", 10, 39);
        assert!(!can_fit_all(&[20, 20], &[&l]));
        let wider = listing("b", 20, 20);
        assert!(can_fit_all(&[20, 20], &[&wider]));
    }

    #[test]
    fn test_first_fit_blind_spot_stays_infeasible() {
        // Lanes {40, 25} can take vehicles {25, 20, 20} exactly (25 into the
        // 25-lane, both 20s into the 40-lane), but descending first-fit puts
        // the 25 into the 40-lane and fails. That miss is part of the
        // contract; this test keeps anyone from "fixing" it.
        let a = listing("a", 10, 40);
        let b = listing("b", 10, 25);
        assert!(!can_fit_all(&[25, 20, 20], &[&a, &b]));
    }

    #[test]
    fn test_feasibility_is_monotonic_in_supply() {
        let a = listing("a", 10, 30);
        let b = listing("b", 10, 30);
        let extra = listing("c", 40, 50);
        let demand = [30, 30];
        assert!(can_fit_all(&demand, &[&a, &b]));
        assert!(can_fit_all(&demand, &[&a, &b, &extra]));
    }
}
