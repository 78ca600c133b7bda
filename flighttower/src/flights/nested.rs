//! Path lookups into loosely shaped JSON records.
//!
//! Upstream detail records omit whole subtrees freely and use `null` for
//! unknown leaves. These helpers collapse every such gap into `None`.

use serde_json::Value;

/// Follow `path` through nested objects.
///
/// Returns `None` as soon as a link is missing, `null`, or not an object.
///
/// ```
/// use flighttower::flights::nested;
/// use serde_json::json;
///
/// let record = json!({"airline": {"name": "LOT", "code": null}});
/// assert_eq!(nested::get(&record, &["airline", "name"]), Some(&json!("LOT")));
/// assert_eq!(nested::get(&record, &["airline", "code"]), None);
/// assert_eq!(nested::get(&record, &["airline", "name", "short"]), None);
/// ```
pub fn get<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
        .filter(|found| !found.is_null())
}

/// String leaf at `path`.
pub fn str_at(value: &Value, path: &[&str]) -> Option<String> {
    get(value, path).and_then(Value::as_str).map(str::to_string)
}

/// Integer leaf at `path`; whole-valued floats are accepted.
pub fn i64_at(value: &Value, path: &[&str]) -> Option<i64> {
    let leaf = get(value, path)?;
    leaf.as_i64().or_else(|| {
        leaf.as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}
