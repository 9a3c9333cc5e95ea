mod matchers_test;

use assertables::*;
use dh_testutils::*;
use rstest::*;
use serde_json::json;

use dh_core::k8s::{
    GVK,
    kinds,
};
use dh_core::prelude::*;
use dh_core::selector::*;

pub fn inventory_obj(gvk: &GVK, ns: Option<&str>, name: &str) -> DynamicObject {
    let obj = DynamicObject::new(name, &kinds::api_resource(gvk)).data(json!({}));
    match ns {
        Some(ns) => obj.within(ns),
        None => obj,
    }
}
