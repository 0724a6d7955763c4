use crate::domain::model::Listing;
use crate::utils::error::{Result, SearchError};

/// All listings at one location, in catalog insertion order.
#[derive(Debug, Clone)]
pub struct LocationListings {
    pub location_id: String,
    pub listings: Vec<Listing>,
}

/// The read-only listing catalog, grouped by location. Built once at
/// startup; the search layers only ever borrow it.
///
/// Locations keep first-seen order and listings keep catalog order, which is
/// what makes tie-breaking and ranking reproducible across runs.
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<LocationListings>,
}

impl Catalog {
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        let mut groups: Vec<LocationListings> = Vec::new();

        for listing in listings {
            validate_listing(&listing)?;
            match groups
                .iter_mut()
                .find(|g| g.location_id == listing.location_id)
            {
                Some(group) => group.listings.push(listing),
                None => groups.push(LocationListings {
                    location_id: listing.location_id.clone(),
                    listings: vec![listing],
                }),
            }
        }

        Ok(Self { groups })
    }

    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let listings: Vec<Listing> = serde_json::from_slice(data)?;
        Self::from_listings(listings)
    }

    pub fn from_csv_slice(data: &[u8]) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(data);
        let listings: Vec<Listing> = reader
            .deserialize()
            .collect::<std::result::Result<_, csv::Error>>()?;
        Self::from_listings(listings)
    }

    pub fn locations(&self) -> impl Iterator<Item = &LocationListings> {
        self.groups.iter()
    }

    pub fn location_count(&self) -> usize {
        self.groups.len()
    }

    pub fn listing_count(&self) -> usize {
        self.groups.iter().map(|g| g.listings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn validate_listing(listing: &Listing) -> Result<()> {
    if listing.id.trim().is_empty() {
        return Err(SearchError::CatalogError {
            message: "Listing with empty id".to_string(),
        });
    }
    if listing.location_id.trim().is_empty() {
        return Err(SearchError::CatalogError {
            message: format!("Listing {} has an empty location_id", listing.id),
        });
    }
    if listing.width == 0 || listing.length == 0 {
        return Err(SearchError::CatalogError {
            message: format!(
                "Listing {} has non-positive dimensions ({}x{})",
                listing.id, listing.width, listing.length
            ),
        });
    }
    Ok(())
}
