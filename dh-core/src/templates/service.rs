use serde_json::json;

use super::{
    build_resource,
    match_labels,
};
use crate::errors::*;
use crate::prelude::*;

pub fn build_service(app: &AppSpec) -> anyhow::Result<DynamicObject> {
    let Some(port) = app.port else {
        bail!("application {} exposes no port, no service to build", app.slug());
    };

    let default_data = json!({
        "spec": {
            "selector": match_labels(app),
            "ports": [{
                "name": "http",
                "protocol": "TCP",
                "port": port,
                "targetPort": port,
            }],
        },
    });

    build_resource(
        &SERVICE_GVK,
        &app.valid_name(),
        Some(&app.valid_namespace()),
        app,
        default_data,
        app.overrides.service.as_ref(),
    )
}
