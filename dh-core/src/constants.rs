use lazy_static::lazy_static;

use crate::k8s::GVK;

// Standard Kubernetes recommended labels
pub const APP_NAME_KEY: &str = "app.kubernetes.io/name";
pub const APP_INSTANCE_KEY: &str = "app.kubernetes.io/instance";
pub const APP_VERSION_KEY: &str = "app.kubernetes.io/version";
pub const APP_COMPONENT_KEY: &str = "app.kubernetes.io/component";
pub const APP_PART_OF_KEY: &str = "app.kubernetes.io/part-of";
pub const APP_MANAGED_BY_KEY: &str = "app.kubernetes.io/managed-by";

// Deckhand ownership labels
pub const WORKSPACE_LABEL_KEY: &str = "deckhand.dev/workspace";
pub const MANAGED_BY: &str = "deckhand";

// Server-populated annotations stripped during sanitization
pub const LAST_APPLIED_CONFIG_ANNOTATION_KEY: &str = "kubectl.kubernetes.io/last-applied-configuration";
pub const DEPL_REVISION_ANNOTATION_KEY: &str = "deployment.kubernetes.io/revision";

// Naming (RFC 1035 label names)
pub const MAX_NAME_LENGTH: usize = 63;
pub const FALLBACK_NAME: &str = "dh-unnamed";

// Secret type excluded by the default inventory policy
pub const SVC_ACCOUNT_TOKEN_SECRET_TYPE: &str = "kubernetes.io/service-account-token";

// Timing
pub const RETRY_ATTEMPTS: usize = 3;
pub const RETRY_DELAY_SECONDS: u64 = 5;

// Kinds
pub const NAMESPACE_KIND: &str = "Namespace";
pub const SVC_ACCOUNT_KIND: &str = "ServiceAccount";
pub const ROLE_KIND: &str = "Role";
pub const ROLE_BINDING_KIND: &str = "RoleBinding";
pub const CLUSTER_ROLE_KIND: &str = "ClusterRole";
pub const CLUSTER_ROLE_BINDING_KIND: &str = "ClusterRoleBinding";
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

// Built-in GVKs
lazy_static! {
    pub static ref NAMESPACE_GVK: GVK = GVK::new("", "v1", NAMESPACE_KIND);
    pub static ref CONFIG_MAP_GVK: GVK = GVK::new("", "v1", "ConfigMap");
    pub static ref SECRET_GVK: GVK = GVK::new("", "v1", "Secret");
    pub static ref SERVICE_GVK: GVK = GVK::new("", "v1", "Service");
    pub static ref SVC_ACCOUNT_GVK: GVK = GVK::new("", "v1", SVC_ACCOUNT_KIND);
    pub static ref DEPLOYMENT_GVK: GVK = GVK::new("apps", "v1", "Deployment");
    pub static ref INGRESS_GVK: GVK = GVK::new("networking.k8s.io", "v1", "Ingress");
    pub static ref ROLE_GVK: GVK = GVK::new(RBAC_API_GROUP, "v1", ROLE_KIND);
    pub static ref ROLE_BINDING_GVK: GVK = GVK::new(RBAC_API_GROUP, "v1", ROLE_BINDING_KIND);
    pub static ref CLUSTER_ROLE_GVK: GVK = GVK::new(RBAC_API_GROUP, "v1", CLUSTER_ROLE_KIND);
    pub static ref CLUSTER_ROLE_BINDING_GVK: GVK = GVK::new(RBAC_API_GROUP, "v1", CLUSTER_ROLE_BINDING_KIND);

    // The kind set an include selector falls back to when it names none; this
    // is the "safe inventory" universe, not every kind the cluster knows.
    pub static ref DEFAULT_KIND_SET: Vec<GVK> = vec![
        CONFIG_MAP_GVK.clone(),
        SECRET_GVK.clone(),
        SERVICE_GVK.clone(),
        SVC_ACCOUNT_GVK.clone(),
        GVK::new("", "v1", "PersistentVolume"),
        GVK::new("", "v1", "PersistentVolumeClaim"),
        INGRESS_GVK.clone(),
        GVK::new("policy", "v1beta1", "PodSecurityPolicy"),
        GVK::new("apps", "v1", "DaemonSet"),
        DEPLOYMENT_GVK.clone(),
        GVK::new("apps", "v1", "StatefulSet"),
        GVK::new("autoscaling", "v2", "HorizontalPodAutoscaler"),
        GVK::new("batch", "v1", "CronJob"),
        GVK::new("networking.k8s.io", "v1", "NetworkPolicy"),
        GVK::new("policy", "v1", "PodDisruptionBudget"),
        CLUSTER_ROLE_GVK.clone(),
        CLUSTER_ROLE_BINDING_GVK.clone(),
        ROLE_GVK.clone(),
        ROLE_BINDING_GVK.clone(),
        GVK::new("storage.k8s.io", "v1", "StorageClass"),
    ];
}
