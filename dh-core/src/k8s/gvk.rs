use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use kube::ResourceExt;
use kube::api::{
    DynamicObject,
    GroupVersionKind,
    TypeMeta,
};
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de,
};

use crate::errors::*;

// Newtype around kube's GroupVersionKind so we can hang custom serialization
// off of it.  The wire format is "group/version.kind", with the group segment
// omitted entirely for the core group ("v1.Secret", "apps/v1.Deployment").
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GVK(GroupVersionKind);

impl GVK {
    pub fn new(group: &str, version: &str, kind: &str) -> GVK {
        GVK(GroupVersionKind::gvk(group, version, kind))
    }

    // apiVersion is either "version" (core group) or "group/version"
    pub fn from_api_version(api_version: &str, kind: &str) -> anyhow::Result<GVK> {
        match api_version.split('/').collect::<Vec<_>>()[..] {
            [version] => Ok(GVK::new("", version, kind)),
            [group, version] => Ok(GVK::new(group, version, kind)),
            _ => bail!(DescriptorError::MalformedApiVersion(api_version.into())),
        }
    }

    pub fn from_dynamic_obj(obj: &DynamicObject) -> anyhow::Result<GVK> {
        match &obj.types {
            Some(t) => GVK::from_api_version(&t.api_version, &t.kind),
            None => bail!(DescriptorError::NoTypeMeta(obj.name_any())),
        }
    }

    pub fn into_type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: self.0.api_version(),
            kind: self.0.kind.clone(),
        }
    }
}

impl Deref for GVK {
    type Target = GroupVersionKind;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GVK {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.group.is_empty() {
            write!(f, "{}.{}", self.0.version, self.0.kind)
        } else {
            write!(f, "{}/{}.{}", self.0.group, self.0.version, self.0.kind)
        }
    }
}

impl FromStr for GVK {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<GVK> {
        let (group, rest) = match s.split('/').collect::<Vec<_>>()[..] {
            [rest] => ("", rest),
            [group, rest] => (group, rest),
            _ => bail!("invalid gvk: {s}"),
        };
        let Some((version, kind)) = rest.split_once('.') else {
            bail!("invalid gvk: {s}");
        };
        Ok(GVK::new(group, version, kind))
    }
}

impl Serialize for GVK {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GVK {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<GVK, D::Error> {
        String::deserialize(deserializer)?.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use assertables::*;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::core_group(GVK::new("", "v1", "Secret"), "\"v1.Secret\"")]
    #[case::named_group(GVK::new("apps", "v1", "Deployment"), "\"apps/v1.Deployment\"")]
    fn test_serialize(#[case] gvk: GVK, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&gvk).unwrap(), expected);
    }

    #[rstest]
    #[case::core_group("v1.Secret", GVK::new("", "v1", "Secret"))]
    #[case::named_group("apps/v1.Deployment", GVK::new("apps", "v1", "Deployment"))]
    #[case::compat_empty_group("/v1.Secret", GVK::new("", "v1", "Secret"))]
    fn test_parse(#[case] input: &str, #[case] expected: GVK) {
        assert_eq!(input.parse::<GVK>().unwrap(), expected);
    }

    #[rstest]
    #[case::no_version("asdf")]
    #[case::too_many_slashes("foo/bar/v1.Baz")]
    fn test_parse_invalid(#[case] input: &str) {
        assert_err!(input.parse::<GVK>());
    }

    #[rstest]
    fn test_from_api_version() {
        assert_eq!(GVK::from_api_version("v1", "Service").unwrap(), GVK::new("", "v1", "Service"));
        assert_eq!(
            GVK::from_api_version("networking.k8s.io/v1", "Ingress").unwrap(),
            GVK::new("networking.k8s.io", "v1", "Ingress")
        );
        assert_err!(GVK::from_api_version("a/b/c", "Thing"));
    }
}
