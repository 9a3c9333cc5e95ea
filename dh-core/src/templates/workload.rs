use serde_json::json;

use super::{
    app_labels,
    build_resource,
    match_labels,
    rbac_requested,
};
use crate::prelude::*;

const DEFAULT_REPLICAS: i64 = 1;

pub fn build_deployment(app: &AppSpec) -> anyhow::Result<DynamicObject> {
    let mut container = json!({
        "name": app.valid_name(),
        "image": app.image,
    });
    if let Some(port) = app.port {
        container["ports"] = json!([{"name": "http", "containerPort": port, "protocol": "TCP"}]);
        container["readinessProbe"] = json!({"tcpSocket": {"port": port}, "initialDelaySeconds": 5});
        container["livenessProbe"] = json!({"tcpSocket": {"port": port}, "initialDelaySeconds": 15});
    }

    let mut pod_spec = json!({"containers": [container]});
    if rbac_requested(app) {
        pod_spec["serviceAccountName"] = json!(app.valid_name());
    }

    let default_data = json!({
        "spec": {
            "replicas": app.replicas.unwrap_or(DEFAULT_REPLICAS),
            "selector": {"matchLabels": match_labels(app)},
            "strategy": {
                "type": "RollingUpdate",
                "rollingUpdate": {"maxUnavailable": 0, "maxSurge": "25%"},
            },
            "template": {
                "metadata": {"labels": app_labels(app)},
                "spec": pod_spec,
            },
        },
    });

    build_resource(
        &DEPLOYMENT_GVK,
        &app.valid_name(),
        Some(&app.valid_namespace()),
        app,
        default_data,
        app.overrides.deployment.as_ref(),
    )
}
