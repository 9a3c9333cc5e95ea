mod builders_test;

use assertables::*;
use dh_testutils::*;
use rstest::*;
use serde_json::json;

use dh_core::prelude::*;
use dh_core::templates::*;
