use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::*;
use crate::k8s::GVK;
use crate::prelude::*;

// Matches a name or namespace either exactly or against a regular
// expression.  In config, a bare string is an exact match and
// {"pattern": "^kube-"} is a pattern match.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NameMatcher {
    Exact(String),
    Pattern { pattern: String },
}

impl NameMatcher {
    pub fn exact(value: &str) -> NameMatcher {
        NameMatcher::Exact(value.into())
    }

    pub fn pattern(pattern: &str) -> NameMatcher {
        NameMatcher::Pattern { pattern: pattern.into() }
    }

    pub fn matches(&self, value: &str) -> anyhow::Result<bool> {
        match self {
            NameMatcher::Exact(expected) => Ok(expected == value),
            NameMatcher::Pattern { pattern } => {
                let re = Regex::new(pattern).map_err(|source| ConfigError::BadPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                Ok(re.is_match(value))
            },
        }
    }
}

// An absent matcher matches everything; a present matcher never matches an
// absent value (e.g. a namespace predicate against a cluster-scoped object).
pub fn name_match(value: Option<&str>, matcher: Option<&NameMatcher>) -> anyhow::Result<bool> {
    match (matcher, value) {
        (None, _) => Ok(true),
        (Some(_), None) => Ok(false),
        (Some(m), Some(v)) => m.matches(v),
    }
}

pub fn label_match(obj: &DynamicObject, selector: Option<&metav1::LabelSelector>) -> anyhow::Result<bool> {
    match selector {
        None => Ok(true),
        Some(sel) => obj.matches(sel),
    }
}

// Kind matching goes by kind name alone, never apiVersion; a Deployment is a
// Deployment whether it was listed under apps/v1 or a deprecated group.
pub fn kind_match(obj: &DynamicObject, kinds: Option<&[GVK]>) -> bool {
    match kinds {
        None => true,
        Some([]) => true,
        Some(kinds) => obj
            .types
            .as_ref()
            .is_some_and(|t| kinds.iter().any(|gvk| gvk.kind == t.kind)),
    }
}
