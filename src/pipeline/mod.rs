pub mod analysis;
pub mod extraction;
pub mod query;
pub mod report;
pub mod structuring;
