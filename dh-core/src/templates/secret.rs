use serde_json::json;

use super::build_resource;
use crate::errors::*;
use crate::k8s::valid_name;
use crate::prelude::*;

// Each caller-supplied partial Secret (values already base64-encoded) is
// overlaid onto a default Opaque secret carrying the standard label set, so
// that delete can find them again by label later.
pub fn build_secrets(app: &AppSpec) -> anyhow::Result<Vec<DynamicObject>> {
    app.secrets.iter().map(|partial| build_secret(app, partial)).collect()
}

fn build_secret(app: &AppSpec, partial: &serde_json::Value) -> anyhow::Result<DynamicObject> {
    let Some(name) = partial.pointer("/metadata/name").and_then(|n| n.as_str()) else {
        bail!("secret spec for application {} has no metadata.name", app.slug());
    };

    build_resource(
        &SECRET_GVK,
        &valid_name(name),
        Some(&app.valid_namespace()),
        app,
        json!({"type": "Opaque"}),
        Some(partial),
    )
}
