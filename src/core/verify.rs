use crate::core::{Result, TransformedRecord};
use serde::Serialize;
use serde_json::{Map, Value};

/// 預期輸出與實際輸出的結構化差異。
///
/// 陣列以索引字串作為 key。`deleted` 的值一律為 `null`；
/// 根節點型別不同時差異記在空字串 key 之下。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailedDiff {
    pub added: Map<String, Value>,
    pub deleted: Map<String, Value>,
    pub updated: Map<String, Value>,
}

impl DetailedDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub passed: bool,
    pub expected_count: usize,
    pub actual_count: usize,
    pub diff: DetailedDiff,
}

/// 數字以數值比較（`100` 與 `100.0` 視為相等），其餘結構遞迴比較
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64(), x.as_u64(), y.as_u64()) {
            (Some(a), Some(b), _, _) => a == b,
            (_, _, Some(a), Some(b)) => a == b,
            _ => x.as_f64() == y.as_f64(),
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

pub fn detailed_diff(expected: &Value, actual: &Value) -> DetailedDiff {
    let mut diff = DetailedDiff::default();

    if is_same_container(expected, actual) {
        diff_containers(
            expected,
            actual,
            &mut diff.added,
            &mut diff.deleted,
            &mut diff.updated,
        );
    } else if !values_equal(expected, actual) {
        diff.updated.insert(String::new(), actual.clone());
    }

    diff
}

pub fn verify_outputs(expected: &Value, actual: &[TransformedRecord]) -> Result<VerificationReport> {
    let actual_value = serde_json::to_value(actual)?;
    let diff = detailed_diff(expected, &actual_value);
    let expected_count = expected.as_array().map(|items| items.len()).unwrap_or(1);

    let report = VerificationReport {
        passed: diff.is_empty(),
        expected_count,
        actual_count: actual.len(),
        diff,
    };

    if report.passed {
        tracing::info!("Output matches expected ({} records)", report.actual_count);
    } else {
        tracing::warn!(
            "Output differs from expected: {} added, {} deleted, {} updated",
            report.diff.added.len(),
            report.diff.deleted.len(),
            report.diff.updated.len()
        );
    }

    Ok(report)
}

fn is_same_container(a: &Value, b: &Value) -> bool {
    matches!(
        (a, b),
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
    )
}

fn entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Vec::new(),
    }
}

fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn diff_containers(
    expected: &Value,
    actual: &Value,
    added: &mut Map<String, Value>,
    deleted: &mut Map<String, Value>,
    updated: &mut Map<String, Value>,
) {
    for (key, expected_value) in entries(expected) {
        let Some(actual_value) = lookup(actual, &key) else {
            deleted.insert(key, Value::Null);
            continue;
        };

        if is_same_container(expected_value, actual_value) {
            let mut sub_added = Map::new();
            let mut sub_deleted = Map::new();
            let mut sub_updated = Map::new();
            diff_containers(
                expected_value,
                actual_value,
                &mut sub_added,
                &mut sub_deleted,
                &mut sub_updated,
            );

            if !sub_added.is_empty() {
                added.insert(key.clone(), Value::Object(sub_added));
            }
            if !sub_deleted.is_empty() {
                deleted.insert(key.clone(), Value::Object(sub_deleted));
            }
            if !sub_updated.is_empty() {
                updated.insert(key, Value::Object(sub_updated));
            }
        } else if !values_equal(expected_value, actual_value) {
            updated.insert(key, actual_value.clone());
        }
    }

    for (key, actual_value) in entries(actual) {
        if lookup(expected, &key).is_none() {
            added.insert(key, actual_value.clone());
        }
    }
}
