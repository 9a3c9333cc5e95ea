use kube::api::{
    Api,
    DeleteParams,
    DynamicObject,
    ListParams,
    Patch,
    PatchParams,
    PostParams,
};
use tokio::time::{
    Duration,
    sleep,
};
use tracing::*;

use super::*;
use crate::config::RetryPolicy;
use crate::errors::*;
use crate::prelude::*;

// A kind-agnostic resource client: every operation takes a DynamicObject
// whose apiVersion/kind/metadata are enough to derive the REST path, with no
// compile-time knowledge of the resource type and no discovery round-trip.
#[derive(Clone)]
pub struct DynamicClient {
    client: kube::Client,
    retry: RetryPolicy,
}

impl DynamicClient {
    pub fn new(client: kube::Client) -> DynamicClient {
        DynamicClient::with_retry(client, RetryPolicy::default())
    }

    pub fn with_retry(client: kube::Client, retry: RetryPolicy) -> DynamicClient {
        DynamicClient { client, retry }
    }

    pub async fn create(&self, obj: &DynamicObject) -> anyhow::Result<DynamicObject> {
        let (api, _) = self.api_and_name(obj)?;
        let created = self
            .retrying("create", async || api.create(&PostParams::default(), obj).await)
            .await?;
        Ok(created)
    }

    pub async fn get(&self, obj: &DynamicObject) -> anyhow::Result<Option<DynamicObject>> {
        let (api, name) = self.api_and_name(obj)?;
        Ok(api.get_opt(&name).await?)
    }

    // Strategic merge patch; the server merges field-by-field, so the caller
    // only needs to send the fields it cares about.
    pub async fn patch(&self, obj: &DynamicObject) -> anyhow::Result<DynamicObject> {
        let (api, name) = self.api_and_name(obj)?;
        let patched = self
            .retrying("patch", async || {
                api.patch(&name, &PatchParams::default(), &Patch::Strategic(obj)).await
            })
            .await?;
        Ok(patched)
    }

    pub async fn replace(&self, obj: &DynamicObject) -> anyhow::Result<DynamicObject> {
        let (api, name) = self.api_and_name(obj)?;
        let replaced = self
            .retrying("replace", async || api.replace(&name, &PostParams::default(), obj).await)
            .await?;
        Ok(replaced)
    }

    // Deleting an object that's already gone is success, not failure; unless
    // overridden, dependents are cleaned up by background cascading deletion.
    pub async fn delete(&self, obj: &DynamicObject, params: Option<DeleteParams>) -> EmptyResult {
        let (api, name) = self.api_and_name(obj)?;
        let params = params.unwrap_or_else(DeleteParams::background);
        match self.retrying("delete", async || api.delete(&name, &params).await).await {
            Err(kube::Error::Api(resp)) if resp.code == 404 => {
                debug!("{} not found, nothing to delete", obj.namespaced_name());
                Ok(())
            },
            res => {
                res?;
                Ok(())
            },
        }
    }

    pub async fn list(&self, gvk: &GVK, namespace: Option<&str>, params: &ListParams) -> anyhow::Result<Vec<DynamicObject>> {
        let api = self.api_for(gvk, namespace);
        let list = self.retrying("list", async || api.list(params).await).await?;

        // list results come back without type metadata, so stamp each item
        // with the GVK it was listed under
        Ok(list
            .items
            .into_iter()
            .map(|mut obj| {
                obj.types.get_or_insert_with(|| gvk.into_type_meta());
                obj
            })
            .collect())
    }

    fn api_for(&self, gvk: &GVK, namespace: Option<&str>) -> Api<DynamicObject> {
        let ar = kinds::api_resource(gvk);
        match (kinds::lookup(&gvk.kind).scope, namespace) {
            (kinds::ResourceScope::Namespaced, Some(ns)) => Api::namespaced_with(self.client.clone(), ns, &ar),
            _ => Api::all_with(self.client.clone(), &ar),
        }
    }

    // Local validation; failures here mean the descriptor could never have
    // been addressed and no request is issued.
    fn api_and_name(&self, obj: &DynamicObject) -> anyhow::Result<(Api<DynamicObject>, String)> {
        let gvk = GVK::from_dynamic_obj(obj)?;
        let Some(name) = obj.metadata.name.clone() else {
            bail!(DescriptorError::NoName(format!("{gvk}")));
        };
        Ok((self.api_for(&gvk, obj.namespace().as_deref()), name))
    }

    async fn retrying<T>(&self, verb: &str, op: impl AsyncFn() -> kube::Result<T>) -> kube::Result<T> {
        let mut attempt = 1;
        loop {
            match op().await {
                Err(err) if attempt < self.retry.attempts && is_transient(&err) => {
                    warn!("transient apiserver error on {verb} (attempt {attempt}): {err}");
                    sleep(Duration::from_secs(self.retry.delay_seconds)).await;
                    attempt += 1;
                },
                res => return res,
            }
        }
    }
}

fn is_transient(err: &kube::Error) -> bool {
    match err {
        kube::Error::Api(resp) => resp.code >= 500,
        kube::Error::HyperError(_) | kube::Error::Service(_) => true,
        _ => false,
    }
}
