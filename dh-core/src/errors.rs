use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

pub use anyhow::{
    Context,
    anyhow,
    bail,
    ensure,
};
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// A descriptor that can't be turned into a REST path is a programming error
// on the caller's side; these fire before any request is issued.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("resource {0} has no apiVersion or kind")]
    NoTypeMeta(String),

    #[error("resource {0} has no name")]
    NoName(String),

    #[error("malformed apiVersion: {0}")]
    MalformedApiVersion(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid match pattern {pattern:?}: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed label selector requirement: {0:?}")]
    MalformedLabelSelector(metav1::LabelSelectorRequirement),

    #[error("namespace {0} is not in the managed-namespace allowlist")]
    UnmanagedNamespace(String),
}

// Raised after a best-effort delete pass in which at least one step failed;
// `failures` holds one message per failed step, in attempt order.
#[derive(Debug, Error)]
#[error("incomplete delete of {slug}: [{}]", failures.join("; "))]
pub struct PartialDeleteError {
    pub slug: String,
    pub failures: Vec<String>,
}
