//! Generic, append-only code listings.
mod generic_listing;

pub use generic_listing::Listing;
