use std::collections::{
    BTreeMap,
    HashSet,
};

use kube::api::{
    DynamicObject,
    Resource,
};

use super::*;
use crate::errors::*;
use crate::prelude::*;

// A resource's identity deliberately excludes apiVersion: the same object is
// addressable under multiple API groups (apps/v1 and extensions/v1beta1
// Deployments, say), and we want those to collapse to one entry.
pub fn identity(obj: &DynamicObject) -> String {
    let kind = obj.types.as_ref().map_or("", |t| t.kind.as_str());
    let ns = obj.namespace().unwrap_or_default();
    format!("{kind}|{ns}|{}", obj.name_any())
}

// First occurrence of an identity wins; later duplicates (e.g. the same
// object listed under a second API group) are dropped.
pub fn dedup_by_identity(objs: Vec<DynamicObject>) -> Vec<DynamicObject> {
    let mut seen = HashSet::new();
    objs.into_iter().filter(|obj| seen.insert(identity(obj))).collect()
}

// Coerces an arbitrary string into a valid RFC 1035 label name
// (^[a-z]([-a-z0-9]*[a-z0-9])?$, 1-63 chars): lowercase, truncate, strip
// leading/trailing characters that can't appear there, and collapse interior
// runs of invalid characters to a single dash.
pub fn valid_name(candidate: &str) -> String {
    let lower: String = candidate.to_lowercase().chars().take(MAX_NAME_LENGTH).collect();
    let stripped = lower
        .trim_start_matches(|c: char| !c.is_ascii_lowercase())
        .trim_end_matches(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()));

    let mut name = String::with_capacity(stripped.len());
    let mut pending_dash = false;
    for c in stripped.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            if pending_dash {
                name.push('-');
                pending_dash = false;
            }
            name.push(c);
        } else {
            pending_dash = true;
        }
    }

    name.truncate(MAX_NAME_LENGTH);
    let name = name.trim_end_matches('-');
    if name.is_empty() { FALLBACK_NAME.into() } else { name.into() }
}

// Strips the server-populated fields from an object so that what's left is a
// reusable desired-state spec rather than an observation.
pub fn sanitize_obj(obj: &mut DynamicObject) {
    obj.metadata.creation_timestamp = None;
    obj.metadata.generation = None;
    obj.metadata.managed_fields = None;
    obj.metadata.resource_version = None;
    obj.metadata.uid = None;

    if let Some(annotations) = obj.metadata.annotations.as_mut() {
        annotations.remove(LAST_APPLIED_CONFIG_ANNOTATION_KEY);
        annotations.remove(DEPL_REVISION_ANNOTATION_KEY);
    }

    if let Some(data) = obj.data.as_object_mut() {
        data.remove("status");
    }
}

// Minimal descriptor sufficient to address an existing object for get/delete.
pub fn build_deletable(gvk: &GVK, name: &str, namespace: Option<&str>) -> DynamicObject {
    DynamicObject {
        metadata: metav1::ObjectMeta {
            namespace: namespace.map(|ns| ns.into()),
            name: Some(name.into()),
            ..Default::default()
        },
        types: Some(gvk.into_type_meta()),
        data: serde_json::Value::Null,
    }
}

impl<T: Resource> KubeResourceExt for T {
    fn namespaced_name(&self) -> String {
        match self.namespace() {
            Some(ns) => format!("{}/{}", ns, self.name_any()),
            None => self.name_any(),
        }
    }

    fn matches(&self, sel: &metav1::LabelSelector) -> anyhow::Result<bool> {
        if let Some(exprs) = &sel.match_expressions {
            for expr in exprs {
                if !label_expr_match(self.labels(), expr)? {
                    return Ok(false);
                }
            }
        }

        if let Some(labels) = &sel.match_labels {
            for (k, v) in labels {
                if self.labels().get(k) != Some(v) {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

// https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/#set-based-requirement
pub(super) const OPERATOR_IN: &str = "In";
pub(super) const OPERATOR_NOT_IN: &str = "NotIn";
pub(super) const OPERATOR_EXISTS: &str = "Exists";
pub(super) const OPERATOR_DOES_NOT_EXIST: &str = "DoesNotExist";

fn label_expr_match(
    obj_labels: &BTreeMap<String, String>,
    expr: &metav1::LabelSelectorRequirement,
) -> anyhow::Result<bool> {
    // "In"/"NotIn" require a non-empty values list, "Exists"/"DoesNotExist"
    // require an empty one; anything else is a malformed selector.
    let values = expr.values.as_deref().unwrap_or_default();
    match expr.operator.as_str() {
        OPERATOR_IN | OPERATOR_NOT_IN => {
            if values.is_empty() {
                bail!(ConfigError::MalformedLabelSelector(expr.clone()));
            }
            let contained = obj_labels.get(&expr.key).is_some_and(|v| values.contains(v));
            match expr.operator.as_str() {
                OPERATOR_IN => Ok(contained),
                _ => Ok(!obj_labels.contains_key(&expr.key) || !contained),
            }
        },
        OPERATOR_EXISTS | OPERATOR_DOES_NOT_EXIST => {
            if !values.is_empty() {
                bail!(ConfigError::MalformedLabelSelector(expr.clone()));
            }
            let exists = obj_labels.contains_key(&expr.key);
            Ok((expr.operator == OPERATOR_EXISTS) == exists)
        },
        _ => bail!(ConfigError::MalformedLabelSelector(expr.clone())),
    }
}
