
use dh_testutils::*;
use rstest::*;

use dh_core::k8s::*;
use dh_core::prelude::*;
