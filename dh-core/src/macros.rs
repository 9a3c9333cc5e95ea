pub use std::collections::BTreeMap;

// Builds an Option<BTreeMap<String, String>> of labels/annotations with
// klabel!("key" => "value", ...) syntax.
#[macro_export]
macro_rules! klabel {
    ($($key:expr => $val:expr),+$(,)?) => {
        Some(BTreeMap::from([$(($key.to_string(), $val.to_string())),+]))
    };
}

pub use klabel;
