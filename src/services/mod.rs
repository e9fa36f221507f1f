//! Travis CI API service implementations.

mod organizations;
mod repositories;

pub use organizations::*;
pub use repositories::*;

use serde::Serializer;

/// Serializes an `include` list as one comma-separated value.
pub(crate) fn serialize_comma_separated<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&values.join(","))
}
