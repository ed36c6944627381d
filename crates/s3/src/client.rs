//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStoreClient trait from pasta-core.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use pasta_core::{Error, ObjectStoreClient, Result, Target};

/// Region that must not be sent as a location constraint
const DEFAULT_REGION: &str = "us-east-1";

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from a target's credentials
    ///
    /// `endpoint` selects an S3-compatible service; `None` uses AWS itself.
    pub async fn new(target: &Target, endpoint: Option<&str>, region: &str) -> Result<Self> {
        if let Some(endpoint) = endpoint {
            url::Url::parse(endpoint)
                .map_err(|e| Error::Config(format!("Invalid endpoint '{endpoint}': {e}")))?;
        }

        // Build credentials provider
        let credentials = aws_credential_types::Credentials::new(
            target.access_key.clone(),
            target.secret_access_key.clone(),
            None, // session token
            None, // expiry
            "copy-pasta-static-credentials",
        );

        // Build SDK config
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(region.to_string()));
        if let Some(endpoint) = endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        // Custom endpoints rarely have wildcard DNS, address buckets by path
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(endpoint.is_some())
            .build();

        tracing::debug!(target_name = %target.name, endpoint = ?endpoint, region, "S3 client ready");

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

/// Location constraint to send when creating a bucket, if any
fn location_constraint(location: &str) -> Option<CreateBucketConfiguration> {
    if location.is_empty() || location == DEFAULT_REGION {
        return None;
    }

    Some(
        CreateBucketConfiguration::builder()
            .location_constraint(BucketLocationConstraint::from(location))
            .build(),
    )
}

#[async_trait]
impl ObjectStoreClient for S3Client {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        match self.inner.head_bucket().bucket(bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
            Err(e) => Err(Error::Network(DisplayErrorContext(&e).to_string())),
        }
    }

    async fn make_bucket(&self, bucket: &str, location: &str) -> Result<()> {
        self.inner
            .create_bucket()
            .bucket(bucket)
            .set_create_bucket_configuration(location_constraint(location))
            .send()
            .await
            .map_err(|e| Error::Network(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn put_object(
        &self,
        bucket: &str,
        object: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<i64> {
        let size = content.len() as i64;
        let body = aws_sdk_s3::primitives::ByteStream::from(content);

        self.inner
            .put_object()
            .bucket(bucket)
            .key(object)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Network(DisplayErrorContext(&e).to_string()))?;

        Ok(size)
    }

    async fn fget_object(&self, bucket: &str, object: &str, dest: &Path) -> Result<()> {
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(object)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    Error::NotFound(format!("{bucket}/{object}"))
                } else {
                    Error::Network(DisplayErrorContext(&e).to_string())
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Error::Network(e.to_string()))?
            .into_bytes();

        tokio::fs::write(dest, &data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_constraint_skipped_for_default_region() {
        assert!(location_constraint("").is_none());
        assert!(location_constraint("us-east-1").is_none());
    }

    #[test]
    fn test_location_constraint_for_other_regions() {
        let config = location_constraint("eu-west-2").unwrap();
        assert_eq!(
            config.location_constraint(),
            Some(&BucketLocationConstraint::EuWest2)
        );
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_endpoint() {
        let target = Target::new("t", "k", "s", "b");
        let result = S3Client::new(&target, Some("not a url"), "us-east-1").await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_new_with_custom_endpoint() {
        let target = Target::new("t", "k", "s", "b");
        let client = S3Client::new(&target, Some("http://localhost:9000"), "us-east-1")
            .await
            .unwrap();
        let config = client.inner().config();
        assert_eq!(
            config.region().map(|r| r.to_string()),
            Some("us-east-1".to_string())
        );
    }
}
