use std::collections::HashMap;

use kube::api::ApiResource;
use lazy_static::lazy_static;

use crate::k8s::GVK;
use crate::prelude::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceScope {
    Cluster,
    Namespaced,
}

#[derive(Clone, Debug)]
pub struct KindInfo {
    pub plural: String,
    pub scope: ResourceScope,
}

// Whether a kind lives under a namespace path segment is a static property of
// the kind.  Anything not listed here is treated as namespaced, which holds
// for every kind this engine manages.
const CLUSTER_SCOPED_KINDS: &[&str] = &[
    NAMESPACE_KIND,
    "PersistentVolume",
    "PodSecurityPolicy",
    CLUSTER_ROLE_KIND,
    CLUSTER_ROLE_BINDING_KIND,
    "StorageClass",
];

lazy_static! {
    // Kind registry, resolved once; covers every kind in the default
    // inventory set plus Namespace.  Kinds outside the registry fall back to
    // the same pluralization rules at call time.
    static ref KIND_REGISTRY: HashMap<String, KindInfo> = DEFAULT_KIND_SET
        .iter()
        .map(|gvk| gvk.kind.clone())
        .chain([NAMESPACE_KIND.to_string()])
        .map(|kind| {
            let info = KindInfo { plural: pluralize(&kind), scope: scope(&kind) };
            (kind, info)
        })
        .collect();
}

// Derives the REST resource name from the kind: lowercase, then apply the
// irregular suffix rules ("Ingress" -> "ingresses", "NetworkPolicy" ->
// "networkpolicies", everything else just appends an "s").
pub fn pluralize(kind: &str) -> String {
    let lower = kind.to_lowercase();
    if let Some(stem) = lower.strip_suffix('s') {
        format!("{stem}ses")
    } else if let Some(stem) = lower.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{lower}s")
    }
}

pub fn scope(kind: &str) -> ResourceScope {
    if CLUSTER_SCOPED_KINDS.contains(&kind) {
        ResourceScope::Cluster
    } else {
        ResourceScope::Namespaced
    }
}

pub fn lookup(kind: &str) -> KindInfo {
    match KIND_REGISTRY.get(kind) {
        Some(info) => info.clone(),
        None => KindInfo { plural: pluralize(kind), scope: scope(kind) },
    }
}

pub fn api_resource(gvk: &GVK) -> ApiResource {
    ApiResource::from_gvk_with_plural(gvk, &lookup(&gvk.kind).plural)
}
