use super::*;

#[rstest]
fn test_app_labels(mut test_app: AppSpec) {
    test_app.version = Some("1.2.3".into());
    test_app.component = Some("backend".into());
    test_app.instance = Some("the-app-eu1".into());
    let labels = app_labels(&test_app);

    assert_eq!(labels[APP_NAME_KEY], TEST_APP_NAME);
    assert_eq!(labels[WORKSPACE_LABEL_KEY], TEST_WORKSPACE);
    assert_eq!(labels[APP_MANAGED_BY_KEY], MANAGED_BY);
    assert_eq!(labels[APP_VERSION_KEY], "1.2.3");
    assert_eq!(labels[APP_COMPONENT_KEY], "backend");
    assert_eq!(labels[APP_INSTANCE_KEY], "the-app-eu1");
}

#[rstest]
fn test_optional_labels_omitted(test_app: AppSpec) {
    let labels = app_labels(&test_app);

    assert!(!labels.contains_key(APP_VERSION_KEY));
    assert!(!labels.contains_key(APP_COMPONENT_KEY));
    assert!(!labels.contains_key(APP_INSTANCE_KEY));
}

#[rstest]
fn test_build_namespace(test_app: AppSpec) {
    let obj = build_namespace(&test_app).unwrap();

    assert_eq!(obj.name_any(), TEST_NAMESPACE);
    assert_none!(obj.namespace());
    assert_eq!(obj.types.as_ref().unwrap().kind, NAMESPACE_KIND);
    assert_eq!(obj.metadata.labels, Some(app_labels(&test_app)));
}

#[rstest]
fn test_build_service_account(test_app: AppSpec) {
    let obj = build_service_account(&test_app).unwrap();

    assert_eq!(obj.name_any(), TEST_APP_NAME);
    assert_eq!(obj.namespace(), Some(TEST_NAMESPACE.into()));
    assert_eq!(obj.types.as_ref().unwrap().kind, SVC_ACCOUNT_KIND);
}

#[rstest]
fn test_build_service(test_app: AppSpec) {
    let obj = build_service(&test_app).unwrap();

    assert_eq!(obj.data.pointer("/spec/ports/0/port"), Some(&json!(8080)));
    assert_eq!(obj.data.pointer("/spec/ports/0/targetPort"), Some(&json!(8080)));
    assert_eq!(obj.data.pointer("/spec/selector/app.kubernetes.io~1name"), Some(&json!(TEST_APP_NAME)));
}

#[rstest]
fn test_build_service_requires_port(mut test_app: AppSpec) {
    test_app.port = None;
    assert!(build_service(&test_app).is_err());
}

#[rstest]
fn test_build_deployment_defaults(test_app: AppSpec) {
    let obj = build_deployment(&test_app).unwrap();

    assert_eq!(obj.data.pointer("/spec/replicas"), Some(&json!(1)));
    assert_eq!(obj.data.pointer("/spec/template/spec/containers/0/image"), Some(&json!(TEST_IMAGE)));
    assert_eq!(obj.data.pointer("/spec/template/spec/containers/0/ports/0/containerPort"), Some(&json!(8080)));
    assert_eq!(
        obj.data.pointer("/spec/template/spec/containers/0/readinessProbe/tcpSocket/port"),
        Some(&json!(8080))
    );
    assert_eq!(obj.data.pointer("/spec/selector/matchLabels/deckhand.dev~1workspace"), Some(&json!(TEST_WORKSPACE)));
    assert_eq!(obj.data.pointer("/spec/strategy/rollingUpdate/maxUnavailable"), Some(&json!(0)));

    // no role override, so the pod runs as the namespace default
    assert_none!(obj.data.pointer("/spec/template/spec/serviceAccountName"));
}

#[rstest]
fn test_build_deployment_without_port(mut test_app: AppSpec) {
    test_app.port = None;
    let obj = build_deployment(&test_app).unwrap();

    assert_none!(obj.data.pointer("/spec/template/spec/containers/0/ports"));
    assert_none!(obj.data.pointer("/spec/template/spec/containers/0/readinessProbe"));
}

#[rstest]
fn test_build_deployment_overrides_merge(mut test_app: AppSpec) {
    test_app.replicas = Some(2);
    test_app.overrides.deployment = Some(json!({
        "spec": {
            "replicas": 4,
            "template": {"spec": {"containers": [{"name": "sidecar"}]}},
        },
    }));
    let obj = build_deployment(&test_app).unwrap();

    assert_eq!(obj.data.pointer("/spec/replicas"), Some(&json!(4)));

    // arrays are replaced wholesale, never concatenated
    assert_eq!(obj.data.pointer("/spec/template/spec/containers"), Some(&json!([{"name": "sidecar"}])));

    // untouched defaults survive the merge
    assert_eq!(obj.data.pointer("/spec/strategy/type"), Some(&json!("RollingUpdate")));
}

#[rstest]
fn test_identity_not_overridable(mut test_app: AppSpec) {
    test_app.overrides.deployment = Some(json!({
        "kind": "DaemonSet",
        "apiVersion": "v1",
        "metadata": {"name": "something-else"},
    }));
    let obj = build_deployment(&test_app).unwrap();

    let types = obj.types.as_ref().unwrap();
    assert_eq!(types.kind, "Deployment");
    assert_eq!(types.api_version, "apps/v1");
    assert_eq!(obj.name_any(), TEST_APP_NAME);
}

#[rstest]
fn test_deployment_runs_as_app_service_account_with_rbac(mut test_app: AppSpec) {
    test_app.overrides.role = Some(json!({
        "rules": [{"apiGroups": [""], "resources": ["pods"], "verbs": ["get"]}],
    }));
    let obj = build_deployment(&test_app).unwrap();

    assert_eq!(obj.data.pointer("/spec/template/spec/serviceAccountName"), Some(&json!(TEST_APP_NAME)));
}

#[rstest]
fn test_build_role_namespaced_by_default(mut test_app: AppSpec) {
    test_app.overrides.role = Some(json!({"rules": [{"verbs": ["get"]}]}));

    let role = build_role(&test_app).unwrap();
    assert_eq!(role.types.as_ref().unwrap().kind, ROLE_KIND);
    assert_eq!(role.namespace(), Some(TEST_NAMESPACE.into()));
    assert_eq!(role.data.pointer("/rules/0/verbs"), Some(&json!(["get"])));

    let binding = build_role_binding(&test_app, &role).unwrap();
    assert_eq!(binding.types.as_ref().unwrap().kind, ROLE_BINDING_KIND);
    assert_eq!(binding.namespace(), Some(TEST_NAMESPACE.into()));
    assert_eq!(binding.data.pointer("/roleRef/kind"), Some(&json!(ROLE_KIND)));
    assert_eq!(binding.data.pointer("/subjects/0/kind"), Some(&json!(SVC_ACCOUNT_KIND)));
    assert_eq!(binding.data.pointer("/subjects/0/name"), Some(&json!(TEST_APP_NAME)));
}

#[rstest]
fn test_build_cluster_role_when_requested(mut test_app: AppSpec) {
    test_app.overrides.role = Some(json!({"kind": CLUSTER_ROLE_KIND, "rules": []}));

    let role = build_role(&test_app).unwrap();
    assert_eq!(role.types.as_ref().unwrap().kind, CLUSTER_ROLE_KIND);
    assert_none!(role.namespace());

    let binding = build_role_binding(&test_app, &role).unwrap();
    assert_eq!(binding.types.as_ref().unwrap().kind, CLUSTER_ROLE_BINDING_KIND);
    assert_none!(binding.namespace());

    // the subject still points back into the application's namespace
    assert_eq!(binding.data.pointer("/subjects/0/namespace"), Some(&json!(TEST_NAMESPACE)));
}

#[rstest]
fn test_build_secrets(mut test_app: AppSpec) {
    test_app.secrets = vec![
        json!({"metadata": {"name": "App Credentials"}, "data": {"password": "aHVudGVyMg=="}}),
        json!({"metadata": {"name": "docker-pull"}, "type": "kubernetes.io/dockerconfigjson", "data": {}}),
    ];
    let secrets = build_secrets(&test_app).unwrap();
    assert_eq!(secrets.len(), 2);

    // names are sanitized and a default type is filled in
    assert_eq!(secrets[0].name_any(), "app-credentials");
    assert_eq!(secrets[0].data.pointer("/type"), Some(&json!("Opaque")));
    assert_eq!(secrets[0].data.pointer("/data/password"), Some(&json!("aHVudGVyMg==")));
    assert_eq!(secrets[1].data.pointer("/type"), Some(&json!("kubernetes.io/dockerconfigjson")));

    // stamped with the ownership labels delete queries by later
    let labels = secrets[0].metadata.labels.as_ref().unwrap();
    assert_eq!(labels[APP_NAME_KEY], TEST_APP_NAME);
    assert_eq!(labels[WORKSPACE_LABEL_KEY], TEST_WORKSPACE);
}

#[rstest]
fn test_build_secret_requires_name(mut test_app: AppSpec) {
    test_app.secrets = vec![json!({"data": {}})];
    assert!(build_secrets(&test_app).is_err());
}

#[rstest]
fn test_ingress_requested(mut test_app: AppSpec) {
    // a port alone is not routable
    assert!(!ingress_requested(&test_app));

    test_app.host = Some("app.example.com".into());
    assert!(ingress_requested(&test_app));

    // a route without a port has nothing to point at
    test_app.port = None;
    assert!(!ingress_requested(&test_app));

    test_app.port = Some(8080);
    test_app.host = None;
    test_app.path = Some("/api".into());
    assert!(ingress_requested(&test_app));
}

#[rstest]
fn test_build_ingress(mut test_app: AppSpec) {
    test_app.host = Some("app.example.com".into());
    test_app.path = Some("/api".into());
    let obj = build_ingress(&test_app).unwrap();

    assert_eq!(obj.data.pointer("/spec/rules/0/host"), Some(&json!("app.example.com")));
    assert_eq!(obj.data.pointer("/spec/rules/0/http/paths/0/path"), Some(&json!("/api")));
    assert_eq!(obj.data.pointer("/spec/rules/0/http/paths/0/pathType"), Some(&json!("Prefix")));
    assert_eq!(
        obj.data.pointer("/spec/rules/0/http/paths/0/backend/service/port/number"),
        Some(&json!(8080))
    );
    assert_none!(obj.data.pointer("/spec/tls"));
}

#[rstest]
fn test_build_ingress_tls(mut test_app: AppSpec) {
    test_app.host = Some("app.example.com".into());
    test_app.tls_secret = Some("app-tls".into());
    let obj = build_ingress(&test_app).unwrap();

    // no explicit path falls back to a catch-all prefix
    assert_eq!(obj.data.pointer("/spec/rules/0/http/paths/0/path"), Some(&json!("/")));
    assert_eq!(obj.data.pointer("/spec/tls/0/hosts"), Some(&json!(["app.example.com"])));
    assert_eq!(obj.data.pointer("/spec/tls/0/secretName"), Some(&json!("app-tls")));
}
