use serde_json as json;

// Overlay `overrides` onto `base`, in place.  Objects merge key-by-key and
// recurse; scalars and arrays take the override wholesale (arrays are
// replaced, never concatenated); an explicit null removes the base field.
pub fn overlay(base: &mut json::Value, overrides: &json::Value) {
    match (base, overrides) {
        (json::Value::Object(base_map), json::Value::Object(override_map)) => {
            for (key, value) in override_map {
                if value.is_null() {
                    base_map.remove(key);
                } else {
                    overlay(base_map.entry(key).or_insert(json::Value::Null), value);
                }
            }
        },
        (base, overrides) => *base = overrides.clone(),
    }
}
