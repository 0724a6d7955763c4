use serde::{Deserialize, Serialize};

/// One storage listing from the catalog. Dimensions are in feet, price in
/// cents. Listings are loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub location_id: String,
    pub length: u32,
    pub width: u32,
    pub price_in_cents: u64,
}

/// One line of a search request: `quantity` vehicles of `length` feet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRequest {
    pub length: u32,
    pub quantity: u32,
}

/// Expand `(length, quantity)` pairs into one length per vehicle, in request
/// order. Two vehicles of equal length are interchangeable.
pub fn expand_vehicles(requests: &[VehicleRequest]) -> Vec<u32> {
    requests
        .iter()
        .flat_map(|r| std::iter::repeat(r.length).take(r.quantity as usize))
        .collect()
}

/// The cheapest feasible combination found for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationMatch {
    pub location_id: String,
    pub listing_ids: Vec<String>,
    pub total_price_in_cents: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_vehicles_in_request_order() {
        let requests = vec![
            VehicleRequest {
                length: 10,
                quantity: 1,
            },
            VehicleRequest {
                length: 20,
                quantity: 2,
            },
        ];
        assert_eq!(expand_vehicles(&requests), vec![10, 20, 20]);
    }

    #[test]
    fn test_expand_vehicles_empty() {
        assert_eq!(expand_vehicles(&[]), Vec::<u32>::new());
        let zero_quantity = vec![VehicleRequest {
            length: 30,
            quantity: 0,
        }];
        assert_eq!(expand_vehicles(&zero_quantity), Vec::<u32>::new());
    }
}
