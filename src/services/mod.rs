pub mod api;
pub mod vendor;

pub use api::{ApiService, VendorSource};
pub use vendor::VendorService;
