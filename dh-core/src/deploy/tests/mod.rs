
use assertables::*;
use dh_testutils::*;
use httpmock::prelude::*;
use rstest::*;
use serde_json::json;

use dh_core::config::{
    EngineConfig,
    RetryPolicy,
};
use dh_core::deploy::*;
use dh_core::errors::*;
use dh_core::prelude::*;

fn make_reconciler() -> (MockServerBuilder, Reconciler) {
    let (builder, client) = make_fake_apiserver();
    let config = EngineConfig { retry: RetryPolicy::none(), ..Default::default() };
    (builder, Reconciler::new(client, config))
}

// One create-path resource: a get that comes back empty, then the create
fn expect_create(fake: &mut MockServerBuilder, collection: String, name: &'static str) {
    let get_path = format!("{collection}/{name}");
    fake.handle(move |when, then| {
        when.method(GET).path(&get_path);
        then.status(404).json_body(status_not_found());
    })
    .handle(move |when, then| {
        when.method(POST).path(&collection);
        then.json_body(json!({"metadata": {"name": name}}));
    });
}

fn expect_patch(fake: &mut MockServerBuilder, collection: String, name: &'static str) {
    let get_path = format!("{collection}/{name}");
    let patch_path = get_path.clone();
    fake.handle(move |when, then| {
        when.method(GET).path(&get_path);
        then.json_body(json!({"metadata": {"name": name}}));
    })
    .handle(move |when, then| {
        when.method(PATCH).path(&patch_path);
        then.json_body(json!({"metadata": {"name": name}}));
    });
}
