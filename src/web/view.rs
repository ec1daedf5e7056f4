use crate::error::Result;
use crate::models::VendorListing;

/// Listing page state. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loading,
    Loaded(Vec<VendorListing>),
    Failed(String),
}

impl ListingView {
    pub fn loading() -> Self {
        ListingView::Loading
    }

    /// Settles a `Loading` view with a retrieval outcome. Settled views stay put.
    pub fn resolve(self, outcome: Result<Vec<VendorListing>>) -> Self {
        match self {
            ListingView::Loading => match outcome {
                Ok(listings) => ListingView::Loaded(listings),
                Err(e) => ListingView::Failed(e.display_message()),
            },
            settled => settled,
        }
    }

    pub fn listings(&self) -> &[VendorListing] {
        match self {
            ListingView::Loaded(listings) => listings,
            _ => &[],
        }
    }
}
