//! Storage module for shared file blobs
//!
//! Provides a MinIO/S3-compatible storage client for blob upload,
//! download, deletion, and presigned URL generation.

mod minio_client;

pub use minio_client::MinIOClient;
