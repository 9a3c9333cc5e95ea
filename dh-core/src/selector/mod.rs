mod fetch;
mod matchers;

use std::fmt;
use std::sync::Arc;

pub use fetch::*;
pub use matchers::*;
use serde::{
    Deserialize,
    Serialize,
};

use crate::k8s::{
    GVK,
    dedup_by_identity,
    sanitize_obj,
};
use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectorAction {
    #[default]
    Include,
    Exclude,
}

pub type ResourceFilter = Arc<dyn Fn(&DynamicObject) -> bool + Send + Sync>;

// One rule of a selector pipeline.  All present predicates must match (AND)
// for the rule to claim a resource; the rule's action then decides the
// resource's fate.  Selectors are plain data so they can come from static
// config; only `filter` is code, and it never round-trips through serde.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSelector {
    pub action: SelectorAction,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<GVK>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NameMatcher>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<NameMatcher>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<metav1::LabelSelector>,

    #[serde(skip)]
    pub filter: Option<ResourceFilter>,
}

impl ResourceSelector {
    pub fn include() -> ResourceSelector {
        ResourceSelector { action: SelectorAction::Include, ..Default::default() }
    }

    pub fn exclude() -> ResourceSelector {
        ResourceSelector { action: SelectorAction::Exclude, ..Default::default() }
    }

    pub fn kinds(mut self, kinds: Vec<GVK>) -> ResourceSelector {
        self.kinds = Some(kinds);
        self
    }

    pub fn name(mut self, name: NameMatcher) -> ResourceSelector {
        self.name = Some(name);
        self
    }

    pub fn namespace(mut self, namespace: NameMatcher) -> ResourceSelector {
        self.namespace = Some(namespace);
        self
    }

    pub fn label_selector(mut self, sel: metav1::LabelSelector) -> ResourceSelector {
        self.label_selector = Some(sel);
        self
    }

    pub fn filter<F: Fn(&DynamicObject) -> bool + Send + Sync + 'static>(mut self, f: F) -> ResourceSelector {
        self.filter = Some(Arc::new(f));
        self
    }

    pub fn matches(&self, obj: &DynamicObject) -> anyhow::Result<bool> {
        Ok(kind_match(obj, self.kinds.as_deref())
            && name_match(Some(&obj.name_any()), self.name.as_ref())?
            && name_match(obj.namespace().as_deref(), self.namespace.as_ref())?
            && label_match(obj, self.label_selector.as_ref())?
            && self.filter.as_ref().is_none_or(|f| f(obj)))
    }

    // An exclude rule with no predicates at all claims nothing; it only
    // shows up from sloppy config and can be dropped.
    fn is_vacuous_exclude(&self) -> bool {
        self.action == SelectorAction::Exclude
            && self.kinds.is_none()
            && self.name.is_none()
            && self.namespace.is_none()
            && self.label_selector.is_none()
            && self.filter.is_none()
    }
}

impl fmt::Debug for ResourceSelector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ResourceSelector")
            .field("action", &self.action)
            .field("kinds", &self.kinds)
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("label_selector", &self.label_selector)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// Fills in selector defaults: include when no action is given, the default
// kind set when an include names no kinds, and drops degenerate excludes.
pub fn normalize(selectors: &[ResourceSelector]) -> Vec<ResourceSelector> {
    selectors
        .iter()
        .filter(|sel| !sel.is_vacuous_exclude())
        .cloned()
        .map(|mut sel| {
            if sel.action == SelectorAction::Include && sel.kinds.is_none() {
                sel.kinds = Some(DEFAULT_KIND_SET.clone());
            }
            sel
        })
        .collect()
}

// First-match-wins, in list order: the first selector whose predicates all
// match decides include/exclude and evaluation stops for that resource.
// Resources matched by no selector are excluded, unless the selector list is
// literally empty, in which case everything passes.  Survivors come back
// deduplicated by identity and sanitized into reusable specs.
pub fn evaluate(objs: Vec<DynamicObject>, selectors: &[ResourceSelector]) -> anyhow::Result<Vec<DynamicObject>> {
    let selectors = normalize(selectors);

    let mut results = vec![];
    for mut obj in dedup_by_identity(objs) {
        let mut action = if selectors.is_empty() { SelectorAction::Include } else { SelectorAction::Exclude };
        for sel in &selectors {
            if sel.matches(&obj)? {
                action = sel.action;
                break;
            }
        }

        if action == SelectorAction::Include {
            sanitize_obj(&mut obj);
            results.push(obj);
        }
    }
    Ok(results)
}

// The default "safe inventory" policy: skip the cluster's own plumbing, then
// take everything else in the default kind set.
pub fn default_selectors() -> Vec<ResourceSelector> {
    vec![
        ResourceSelector::exclude().namespace(NameMatcher::pattern("^kube-")),
        ResourceSelector::exclude()
            .kinds(vec![SERVICE_GVK.clone()])
            .namespace(NameMatcher::exact("default"))
            .name(NameMatcher::exact("kubernetes")),
        ResourceSelector::exclude()
            .kinds(vec![SVC_ACCOUNT_GVK.clone()])
            .name(NameMatcher::exact("default")),
        ResourceSelector::exclude()
            .kinds(vec![CLUSTER_ROLE_GVK.clone(), CLUSTER_ROLE_BINDING_GVK.clone()])
            .name(NameMatcher::pattern("^system:")),
        ResourceSelector::exclude()
            .kinds(vec![SECRET_GVK.clone()])
            .filter(|obj| {
                obj.data.pointer("/type").and_then(|t| t.as_str()) == Some(SVC_ACCOUNT_TOKEN_SECRET_TYPE)
            }),
        ResourceSelector::include(),
    ]
}

#[cfg(test)]
pub mod tests;
