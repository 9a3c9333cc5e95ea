mod ingress;
mod merge;
mod namespace;
mod rbac;
mod secret;
mod service;
mod workload;

use std::collections::BTreeMap;

pub use ingress::*;
pub use merge::overlay;
pub use namespace::*;
pub use rbac::*;
pub use secret::*;
use serde_json as json;
use serde_json::json;
pub use service::*;
pub use workload::*;

use crate::k8s::GVK;
use crate::prelude::*;

// The label set stamped on everything the engine manages; the name/workspace
// pair is also what delete uses to find an application's resources later.
pub fn app_labels(app: &AppSpec) -> BTreeMap<String, String> {
    let mut labels = match_labels(app);
    labels.insert(APP_PART_OF_KEY.into(), app.valid_name());
    labels.insert(APP_MANAGED_BY_KEY.into(), MANAGED_BY.into());
    if let Some(version) = &app.version {
        labels.insert(APP_VERSION_KEY.into(), version.clone());
    }
    if let Some(component) = &app.component {
        labels.insert(APP_COMPONENT_KEY.into(), component.clone());
    }
    if let Some(instance) = &app.instance {
        labels.insert(APP_INSTANCE_KEY.into(), instance.clone());
    }
    labels
}

// The stable subset used for workload selectors and label queries; selector
// fields are immutable on a live Deployment, so nothing optional goes here.
pub fn match_labels(app: &AppSpec) -> BTreeMap<String, String> {
    BTreeMap::from([
        (APP_NAME_KEY.to_string(), app.valid_name()),
        (WORKSPACE_LABEL_KEY.to_string(), app.workspace_id.clone()),
    ])
}

// Shared scaffolding for every builder: generated default first, caller's
// partial spec overlaid on top, and then the type meta and identity fields
// re-asserted so a conflicting kind/apiVersion/name in the override can't
// retarget the resource.
pub(crate) fn build_resource(
    gvk: &GVK,
    name: &str,
    namespace: Option<&str>,
    app: &AppSpec,
    default_data: json::Value,
    overrides: Option<&json::Value>,
) -> anyhow::Result<DynamicObject> {
    let mut doc = json!({
        "apiVersion": gvk.api_version(),
        "kind": gvk.kind,
        "metadata": {
            "name": name,
            "labels": app_labels(app),
        },
    });
    if let Some(ns) = namespace {
        doc["metadata"]["namespace"] = json!(ns);
    }

    overlay(&mut doc, &default_data);
    if let Some(overrides) = overrides {
        overlay(&mut doc, overrides);
    }

    doc["apiVersion"] = json!(gvk.api_version());
    doc["kind"] = json!(gvk.kind);
    doc["metadata"]["name"] = json!(name);
    if let Some(ns) = namespace {
        doc["metadata"]["namespace"] = json!(ns);
    }

    Ok(json::from_value(doc)?)
}

#[cfg(test)]
pub mod tests;
