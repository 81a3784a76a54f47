//! Fixed-size paging of the question listing.

pub mod page;
