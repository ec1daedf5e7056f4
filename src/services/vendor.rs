use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::models::{CategoryFilter, VendorListing};
use crate::services::api::VendorSource;

#[derive(Clone)]
pub struct VendorService {
    source: Arc<dyn VendorSource>,
}

impl VendorService {
    pub fn new(source: Arc<dyn VendorSource>) -> Self {
        Self { source }
    }

    /// Approved listings for `filter`, verified first. One request, no retry.
    pub async fn listings(&self, filter: &CategoryFilter) -> Result<Vec<VendorListing>> {
        let listings = self.source.fetch_listings(filter).await?;
        let fetched = listings.len();
        let listings = arrange(listings, filter);

        info!(
            category = %filter,
            fetched = fetched,
            returned = listings.len(),
            "Fetched vendor listings"
        );

        Ok(listings)
    }
}

/// Keeps only rows carrying the category and stable-sorts verified rows first,
/// so the source's recency order survives within each group.
fn arrange(mut listings: Vec<VendorListing>, filter: &CategoryFilter) -> Vec<VendorListing> {
    if let Some(category) = filter.category() {
        listings.retain(|listing| listing.has_category(category));
    }
    listings.sort_by_key(|listing| !listing.is_verified);
    listings
}
