// ABOUTME: Domain types shared by the runtime client and the retention engine.
// ABOUTME: Image identifiers and the canonical names compared against the allow-list.

mod canonical_name;
mod id;

pub use canonical_name::CanonicalName;
pub use id::ImageId;
