//! Clipboard store
//!
//! Writes and reads the clipboard object through an [`ObjectStoreClient`].
//! Client errors are returned unchanged; nothing here retries.

use crate::error::{Error, Result};
use crate::traits::ObjectStoreClient;

/// Content type used for every clipboard upload
pub const CONTENT_TYPE: &str = "text/html";

/// Prefix of the temporary files used while reading an object
pub const TEMP_FILE_PREFIX: &str = "tempS3ObjectFile";

/// Upload `content` to `bucket/object`, creating the bucket when it is absent
///
/// A failed existence check aborts the write before anything is created.
pub async fn write<C>(
    client: &C,
    bucket: &str,
    object: &str,
    location: &str,
    content: Vec<u8>,
) -> Result<()>
where
    C: ObjectStoreClient + ?Sized,
{
    if !client.bucket_exists(bucket).await? {
        tracing::debug!(bucket, location, "Bucket missing, creating it");
        client.make_bucket(bucket, location).await?;
    }

    let written = client
        .put_object(bucket, object, content, CONTENT_TYPE)
        .await?;
    tracing::debug!(bucket, object, written, "Object uploaded");

    Ok(())
}

/// Download `bucket/object` and return it as a string
///
/// Content that is not valid UTF-8 is rejected rather than altered.
///
/// The object is staged in a uniquely named temporary file which is removed
/// on every exit path, including unwinding.
pub async fn read<C>(client: &C, bucket: &str, object: &str) -> Result<String>
where
    C: ObjectStoreClient + ?Sized,
{
    let staging = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .tempfile()?;

    client.fget_object(bucket, object, staging.path()).await?;

    let data = std::fs::read(staging.path())?;
    tracing::debug!(bucket, object, size = data.len(), "Object downloaded");

    String::from_utf8(data).map_err(|_| Error::NotText(format!("{bucket}/{object}")))
}
