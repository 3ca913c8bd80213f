mod dataset;
mod error;
mod filter;
mod load;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::{Dataset, LaunchRecord};
pub use filter::{PayloadRange, SiteSelection, filter_by_payload_range, filter_by_site};
pub use load::load_dataset;
