use dh_core::k8s::GVK;
use lazy_static::lazy_static;

pub const TEST_APP_NAME: &str = "the-app";
pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_WORKSPACE: &str = "w0rkspace1";
pub const TEST_IMAGE: &str = "registry.example.com/the-app:1.2.3";

lazy_static! {
    pub static ref DEPL_GVK: GVK = GVK::new("apps", "v1", "Deployment");
    pub static ref SVC_GVK: GVK = GVK::new("", "v1", "Service");
    pub static ref NS_GVK: GVK = GVK::new("", "v1", "Namespace");
    pub static ref LEGACY_DEPL_GVK: GVK = GVK::new("extensions", "v1beta1", "Deployment");
}
