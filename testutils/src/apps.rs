use dh_core::app::{
    AppSpec,
    DeleteRequest,
};
use rstest::fixture;

use crate::constants::*;

#[fixture]
pub fn test_app() -> AppSpec {
    AppSpec {
        workspace_id: TEST_WORKSPACE.into(),
        name: TEST_APP_NAME.into(),
        namespace: TEST_NAMESPACE.into(),
        image: TEST_IMAGE.into(),
        port: Some(8080),
        ..Default::default()
    }
}

#[fixture]
pub fn test_delete_request() -> DeleteRequest {
    DeleteRequest {
        workspace_id: TEST_WORKSPACE.into(),
        name: TEST_APP_NAME.into(),
        namespace: TEST_NAMESPACE.into(),
    }
}
