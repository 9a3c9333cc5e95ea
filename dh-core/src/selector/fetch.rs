use kube::api::ListParams;
use tracing::*;

use super::*;
use crate::k8s::{
    DynamicClient,
    kinds,
};
use crate::prelude::*;

// Inventories cluster resources under a selector pipeline.  Discovery is
// planned from the include rules (no point listing kinds nothing could
// include), then the full pipeline decides resource-by-resource.
pub struct Inventory {
    client: DynamicClient,
}

impl Inventory {
    pub fn new(client: DynamicClient) -> Inventory {
        Inventory { client }
    }

    pub async fn fetch(&self, selectors: &[ResourceSelector]) -> anyhow::Result<Vec<DynamicObject>> {
        // with no rules at all, inventory everything in the default kind set
        let catch_all = [ResourceSelector::include()];
        let selectors = normalize(if selectors.is_empty() { &catch_all } else { selectors });

        let (cluster_kinds, namespaced_kinds) = plan_discovery(&selectors);

        let mut raw = vec![];
        for gvk in &cluster_kinds {
            raw.extend(self.list_kind(gvk, None).await?);
        }

        for ns in self.cluster_namespaces().await? {
            for gvk in &namespaced_kinds {
                if kind_wanted_in_namespace(&selectors, gvk, &ns)? {
                    raw.extend(self.list_kind(gvk, Some(&ns)).await?);
                }
            }
        }

        evaluate(raw, &selectors)
    }

    async fn cluster_namespaces(&self) -> anyhow::Result<Vec<String>> {
        let namespaces = self.client.list(&NAMESPACE_GVK, None, &ListParams::default()).await?;
        Ok(namespaces.iter().map(|ns| ns.name_any()).collect())
    }

    // A kind that isn't served (say PodSecurityPolicy on a current cluster)
    // shouldn't sink the whole inventory.
    async fn list_kind(&self, gvk: &GVK, ns: Option<&str>) -> anyhow::Result<Vec<DynamicObject>> {
        match self.client.list(gvk, ns, &ListParams::default()).await {
            Ok(objs) => Ok(objs),
            Err(err) => match err.downcast_ref::<kube::Error>() {
                Some(kube::Error::Api(resp)) if resp.code == 404 => {
                    warn!("cluster does not serve {gvk}, skipping");
                    Ok(vec![])
                },
                _ => Err(err),
            },
        }
    }
}

// The deduplicated union of kinds across all include selectors, split into
// cluster-scoped and namespaced.  Kind name alone is the dedup key: listing
// the same kind under two API groups would only produce duplicates that the
// identity pass throws away again.
fn plan_discovery(selectors: &[ResourceSelector]) -> (Vec<GVK>, Vec<GVK>) {
    let mut seen = std::collections::HashSet::new();
    let (mut cluster, mut namespaced) = (vec![], vec![]);

    let include_kinds = selectors
        .iter()
        .filter(|sel| sel.action == SelectorAction::Include)
        .flat_map(|sel| sel.kinds.as_deref().unwrap_or_default());
    for gvk in include_kinds {
        if seen.insert(gvk.kind.clone()) {
            match kinds::lookup(&gvk.kind).scope {
                kinds::ResourceScope::Cluster => cluster.push(gvk.clone()),
                kinds::ResourceScope::Namespaced => namespaced.push(gvk.clone()),
            }
        }
    }

    (cluster, namespaced)
}

// A namespaced kind is only enumerated in a namespace if some include
// selector both wants the kind and has a namespace predicate matching that
// namespace (no predicate matches every namespace).
fn kind_wanted_in_namespace(selectors: &[ResourceSelector], gvk: &GVK, ns: &str) -> anyhow::Result<bool> {
    for sel in selectors {
        if sel.action != SelectorAction::Include {
            continue;
        }
        let wants_kind = sel.kinds.as_deref().unwrap_or_default().iter().any(|k| k.kind == gvk.kind);
        if wants_kind && name_match(Some(ns), sel.namespace.as_ref())? {
            return Ok(true);
        }
    }
    Ok(false)
}
