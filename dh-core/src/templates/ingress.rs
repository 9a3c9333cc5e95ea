use serde_json::json;

use super::build_resource;
use crate::errors::*;
use crate::prelude::*;

pub fn ingress_requested(app: &AppSpec) -> bool {
    app.port.is_some() && (app.host.is_some() || app.path.is_some())
}

pub fn build_ingress(app: &AppSpec) -> anyhow::Result<DynamicObject> {
    let Some(port) = app.port else {
        bail!("application {} exposes no port, no ingress to build", app.slug());
    };

    let mut rule = json!({
        "http": {
            "paths": [{
                "path": app.path.as_deref().unwrap_or("/"),
                "pathType": "Prefix",
                "backend": {
                    "service": {"name": app.valid_name(), "port": {"number": port}},
                },
            }],
        },
    });
    if let Some(host) = &app.host {
        rule["host"] = json!(host);
    }

    let mut default_data = json!({"spec": {"rules": [rule]}});
    if let Some(tls_secret) = &app.tls_secret {
        let hosts = app.host.iter().collect::<Vec<_>>();
        default_data["spec"]["tls"] = json!([{"hosts": hosts, "secretName": tls_secret}]);
    }

    build_resource(
        &INGRESS_GVK,
        &app.valid_name(),
        Some(&app.valid_namespace()),
        app,
        default_data,
        app.overrides.ingress.as_ref(),
    )
}
