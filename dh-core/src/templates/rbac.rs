use serde_json::json;

use super::build_resource;
use crate::errors::*;
use crate::prelude::*;

// Supplying a role override is what opts an application into RBAC; a bare
// service account is always applied so the workload has something to run as.
pub fn rbac_requested(app: &AppSpec) -> bool {
    app.overrides.role.is_some()
}

fn cluster_role_requested(app: &AppSpec) -> bool {
    app.overrides
        .role
        .as_ref()
        .and_then(|role| role.pointer("/kind"))
        .and_then(|kind| kind.as_str())
        == Some(CLUSTER_ROLE_KIND)
}

pub fn build_service_account(app: &AppSpec) -> anyhow::Result<DynamicObject> {
    build_resource(
        &SVC_ACCOUNT_GVK,
        &app.valid_name(),
        Some(&app.valid_namespace()),
        app,
        json!({}),
        app.overrides.service_account.as_ref(),
    )
}

// Builds a Role, or a ClusterRole when the caller's partial spec asks for
// one; this is the single place where an override is allowed to steer the
// kind, and it does so by selecting the builder's own target, not by
// slipping a kind through the merge.
pub fn build_role(app: &AppSpec) -> anyhow::Result<DynamicObject> {
    if cluster_role_requested(app) {
        build_resource(&CLUSTER_ROLE_GVK, &app.valid_name(), None, app, json!({"rules": []}), app.overrides.role.as_ref())
    } else {
        build_resource(
            &ROLE_GVK,
            &app.valid_name(),
            Some(&app.valid_namespace()),
            app,
            json!({"rules": []}),
            app.overrides.role.as_ref(),
        )
    }
}

pub fn build_role_binding(app: &AppSpec, role: &DynamicObject) -> anyhow::Result<DynamicObject> {
    let Some(role_kind) = role.types.as_ref().map(|t| t.kind.clone()) else {
        bail!(DescriptorError::NoTypeMeta(role.name_any()));
    };

    let default_data = json!({
        "subjects": [{
            "kind": SVC_ACCOUNT_KIND,
            "name": app.valid_name(),
            "namespace": app.valid_namespace(),
        }],
        "roleRef": {
            "apiGroup": RBAC_API_GROUP,
            "kind": role_kind,
            "name": role.name_any(),
        },
    });

    if role_kind == CLUSTER_ROLE_KIND {
        build_resource(
            &CLUSTER_ROLE_BINDING_GVK,
            &app.valid_name(),
            None,
            app,
            default_data,
            app.overrides.role_binding.as_ref(),
        )
    } else {
        build_resource(
            &ROLE_BINDING_GVK,
            &app.valid_name(),
            Some(&app.valid_namespace()),
            app,
            default_data,
            app.overrides.role_binding.as_ref(),
        )
    }
}
