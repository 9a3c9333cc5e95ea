use dh_core::k8s::kinds;
use kube::api::DynamicObject;
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

#[fixture]
pub fn test_deployment(#[default(TEST_APP_NAME)] name: &str) -> DynamicObject {
    DynamicObject::new(name, &kinds::api_resource(&DEPL_GVK))
        .within(TEST_NAMESPACE)
        .data(json!({"spec": {"replicas": 3}}))
}

#[fixture]
pub fn test_service(#[default("the-service")] name: &str) -> DynamicObject {
    DynamicObject::new(name, &kinds::api_resource(&SVC_GVK))
        .within(TEST_NAMESPACE)
        .data(json!({"spec": {"ports": [{"port": 8080}]}}))
}

#[fixture]
pub fn test_namespace_obj(#[default(TEST_NAMESPACE)] name: &str) -> DynamicObject {
    DynamicObject::new(name, &kinds::api_resource(&NS_GVK)).data(json!({}))
}

pub fn labeled(mut obj: DynamicObject, key: &str, value: &str) -> DynamicObject {
    obj.metadata
        .labels
        .get_or_insert_default()
        .insert(key.into(), value.into());
    obj
}
