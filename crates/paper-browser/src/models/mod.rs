//! Data models for the paper collection.
//!
//! `RawPaperRecord` is the untyped shape the endpoint returns; `Paper` is the
//! canonical shape everything downstream depends on.

mod paper;
mod raw;

pub use paper::Paper;
pub use raw::RawPaperRecord;
