use kube::api::ListParams;
use tracing::*;

use crate::config::EngineConfig;
use crate::errors::*;
use crate::k8s::{
    DynamicClient,
    GVK,
    build_deletable,
};
use crate::prelude::*;
use crate::templates::*;

// Drives the resources of one application toward (or out of) the cluster.
//
// upsert is fail-fast: later stages depend on earlier ones (the Deployment
// references the ServiceAccount, the Ingress references the Service), so the
// first failing stage aborts the rest.  delete is the opposite: best-effort
// and exhaustive, so one stuck resource doesn't strand everything else.
//
// There is no optimistic-concurrency precondition on the read-then-write
// steps; two overlapping reconciliations of the same application can race.
pub struct Reconciler {
    client: DynamicClient,
    config: EngineConfig,
}

impl Reconciler {
    pub fn new(client: kube::Client, config: EngineConfig) -> Reconciler {
        Reconciler {
            client: DynamicClient::with_retry(client, config.retry),
            config,
        }
    }

    // Apply the application's resources in dependency order: namespace,
    // RBAC, service, secrets, workload, ingress.
    pub async fn upsert(&self, app: &AppSpec) -> EmptyResult {
        self.config.check_namespace(&app.valid_namespace())?;
        let slug = app.slug();
        info!("deploying application {slug}");

        self.apply(&build_namespace(app)?)
            .await
            .with_context(|| format!("upsert of {slug} failed at namespace stage"))?;

        self.apply(&build_service_account(app)?)
            .await
            .with_context(|| format!("upsert of {slug} failed at service account stage"))?;

        if rbac_requested(app) {
            let role = build_role(app)?;
            self.apply(&role)
                .await
                .with_context(|| format!("upsert of {slug} failed at role stage"))?;
            self.apply(&build_role_binding(app, &role)?)
                .await
                .with_context(|| format!("upsert of {slug} failed at role binding stage"))?;
        }

        if app.port.is_some() {
            self.apply(&build_service(app)?)
                .await
                .with_context(|| format!("upsert of {slug} failed at service stage"))?;
        }

        for secret in build_secrets(app)? {
            self.apply(&secret)
                .await
                .with_context(|| format!("upsert of {slug} failed at secrets stage"))?;
        }

        self.apply(&build_deployment(app)?)
            .await
            .with_context(|| format!("upsert of {slug} failed at deployment stage"))?;

        if ingress_requested(app) {
            self.apply(&build_ingress(app)?)
                .await
                .with_context(|| format!("upsert of {slug} failed at ingress stage"))?;
        }

        info!("deployed application {slug}");
        Ok(())
    }

    // Remove the application's resources; every stage is attempted even if
    // an earlier one fails, and the failures are reported together at the
    // end.  Resources that are already gone count as deleted.
    pub async fn delete(&self, req: &DeleteRequest) -> EmptyResult {
        self.config.check_namespace(&req.valid_namespace())?;
        let slug = req.slug();
        let (name, ns) = (req.valid_name(), req.valid_namespace());
        info!("removing application {slug}");

        let mut failures = vec![];
        for (stage, gvk) in [("ingress", &*INGRESS_GVK), ("deployment", &*DEPLOYMENT_GVK)] {
            let target = build_deletable(gvk, &name, Some(&ns));
            if let Err(err) = self.client.delete(&target, None).await {
                failures.push(format!("{stage}: {err:#}"));
            }
        }

        match self.owned_secrets(req).await {
            Ok(secrets) => {
                for secret in secrets {
                    if let Err(err) = self.client.delete(&secret, None).await {
                        failures.push(format!("secret {}: {err:#}", secret.name_any()));
                    }
                }
            },
            Err(err) => failures.push(format!("secrets: {err:#}")),
        }

        for (stage, gvk) in [
            ("service", &*SERVICE_GVK),
            ("role binding", &*ROLE_BINDING_GVK),
            ("role", &*ROLE_GVK),
        ] {
            let target = build_deletable(gvk, &name, Some(&ns));
            if let Err(err) = self.client.delete(&target, None).await {
                failures.push(format!("{stage}: {err:#}"));
            }
        }

        // cluster-scoped RBAC shares a flat namespace with everyone else, so
        // only delete what provably carries our ownership labels
        for (stage, gvk) in [("cluster role binding", &*CLUSTER_ROLE_BINDING_GVK), ("cluster role", &*CLUSTER_ROLE_GVK)] {
            if let Err(err) = self.delete_if_owned(req, gvk).await {
                failures.push(format!("{stage}: {err:#}"));
            }
        }

        let target = build_deletable(&SVC_ACCOUNT_GVK, &name, Some(&ns));
        if let Err(err) = self.client.delete(&target, None).await {
            failures.push(format!("service account: {err:#}"));
        }

        if failures.is_empty() {
            info!("removed application {slug}");
            Ok(())
        } else {
            Err(PartialDeleteError { slug, failures }.into())
        }
    }

    // Re-apply a previously recorded desired state; only the workload is
    // touched, everything else is assumed to still be in place.
    pub async fn rollback(&self, app: &AppSpec) -> EmptyResult {
        self.config.check_namespace(&app.valid_namespace())?;
        let slug = app.slug();
        info!("rolling back application {slug}");

        self.apply(&build_deployment(app)?)
            .await
            .with_context(|| format!("rollback of {slug} failed at deployment stage"))
    }

    // Upsert one resource: read by name, create if absent, otherwise patch
    // the desired spec over what's there with a strategic merge.
    async fn apply(&self, desired: &DynamicObject) -> EmptyResult {
        match self.client.get(desired).await? {
            None => {
                info!("creating {}", desired.namespaced_name());
                self.client.create(desired).await?;
            },
            Some(_) => {
                info!("patching {}", desired.namespaced_name());
                self.client.patch(desired).await?;
            },
        }
        Ok(())
    }

    // An application's secrets are found by label rather than by name; their
    // names are caller-chosen and not recorded anywhere else.
    async fn owned_secrets(&self, req: &DeleteRequest) -> anyhow::Result<Vec<DynamicObject>> {
        let params = ListParams::default().labels(&format!(
            "{APP_NAME_KEY}={},{WORKSPACE_LABEL_KEY}={}",
            req.valid_name(),
            req.workspace_id,
        ));
        self.client.list(&SECRET_GVK, Some(&req.valid_namespace()), &params).await
    }

    async fn delete_if_owned(&self, req: &DeleteRequest, gvk: &GVK) -> EmptyResult {
        let target = build_deletable(gvk, &req.valid_name(), None);
        let Some(found) = self.client.get(&target).await? else {
            return Ok(());
        };

        let ours = found.labels().get(WORKSPACE_LABEL_KEY) == Some(&req.workspace_id);
        if ours {
            self.client.delete(&target, None).await
        } else {
            debug!("{} {} not owned by workspace {}, leaving it", gvk.kind, req.valid_name(), req.workspace_id);
            Ok(())
        }
    }
}

#[cfg(test)]
pub mod tests;
