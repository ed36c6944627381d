//! ObjectStoreClient trait definition
//!
//! This trait defines the slice of S3-compatible storage the clipboard needs.
//! It allows the core to be decoupled from the specific S3 SDK implementation.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for S3-compatible storage operations
///
/// This trait is implemented by the S3 adapter and mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    /// Check if a bucket exists
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Create a bucket in the given location
    async fn make_bucket(&self, bucket: &str, location: &str) -> Result<()>;

    /// Upload an object, returning the number of bytes written
    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<i64>;

    /// Download an object into the file at `dest`, replacing its content
    async fn fget_object(&self, bucket: &str, object: &str, dest: &Path) -> Result<()>;
}
