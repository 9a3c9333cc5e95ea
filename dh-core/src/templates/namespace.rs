use serde_json::json;

use super::build_resource;
use crate::prelude::*;

pub fn build_namespace(app: &AppSpec) -> anyhow::Result<DynamicObject> {
    build_resource(
        &NAMESPACE_GVK,
        &app.valid_namespace(),
        None,
        app,
        json!({}),
        app.overrides.namespace.as_ref(),
    )
}
