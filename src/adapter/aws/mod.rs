//! AWS Adapter Modules
//!
//! S3, Glue and Athena implementations of the domain repositories.

pub mod athena_query_service;
pub mod clients;
pub mod glue_catalog;
pub mod s3_object_store;

pub use clients::AwsClients;
