use serde::{
    Deserialize,
    Serialize,
};
use serde_json as json;

use crate::k8s::valid_name;

// The unit of deployment.  Owned by the invoking pipeline event; the engine
// treats it as a read-only value for the duration of one reconciliation.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSpec {
    pub workspace_id: String,
    pub name: String,
    pub namespace: String,
    pub image: String,

    // Optional recommended-label values; emitted on every managed resource
    // when present.
    pub version: Option<String>,
    pub component: Option<String>,
    pub instance: Option<String>,

    pub replicas: Option<i64>,

    // Endpoint config; a service is only created when `port` is set, and an
    // ingress only when `host` or `path` is set as well.
    pub port: Option<i64>,
    pub path: Option<String>,
    pub host: Option<String>,
    pub tls_secret: Option<String>,

    // Partial Secret specs; `data` values are base64-encoded by the caller
    pub secrets: Vec<json::Value>,

    pub overrides: SpecOverrides,
}

// Caller-supplied partial specs, deep-merged on top of the generated
// defaults by the per-kind template builders.  Supplying `role` is what
// opts an application into RBAC resources.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecOverrides {
    pub namespace: Option<json::Value>,
    pub service_account: Option<json::Value>,
    pub role: Option<json::Value>,
    pub role_binding: Option<json::Value>,
    pub service: Option<json::Value>,
    pub deployment: Option<json::Value>,
    pub ingress: Option<json::Value>,
}

impl AppSpec {
    pub fn valid_name(&self) -> String {
        valid_name(&self.name)
    }

    pub fn valid_namespace(&self) -> String {
        valid_name(&self.namespace)
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.valid_namespace(), self.valid_name())
    }
}

// The subset of AppSpec sufficient to locate and remove an application's
// resources, independent of the full application shape.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRequest {
    pub workspace_id: String,
    pub name: String,
    pub namespace: String,
}

impl DeleteRequest {
    pub fn valid_name(&self) -> String {
        valid_name(&self.name)
    }

    pub fn valid_namespace(&self) -> String {
        valid_name(&self.namespace)
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.valid_namespace(), self.valid_name())
    }
}

impl From<&AppSpec> for DeleteRequest {
    fn from(app: &AppSpec) -> DeleteRequest {
        DeleteRequest {
            workspace_id: app.workspace_id.clone(),
            name: app.name.clone(),
            namespace: app.namespace.clone(),
        }
    }
}
