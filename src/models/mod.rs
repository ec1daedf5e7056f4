mod category;
mod listing;

pub use category::{CategoryFilter, POPULAR_CATEGORIES};
pub use listing::{PRICE_NOT_LISTED, VendorListing};
