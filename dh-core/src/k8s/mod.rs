mod dynamic;
mod gvk;
pub mod kinds;
mod util;

pub use dynamic::*;
pub use gvk::*;
pub use kinds::{
    ResourceScope,
    pluralize,
};
pub use util::*;

use crate::prelude::*;

pub trait KubeResourceExt {
    fn namespaced_name(&self) -> String;
    fn matches(&self, sel: &metav1::LabelSelector) -> anyhow::Result<bool>;
}

#[cfg(test)]
pub mod tests;
