//! Ordering of key-value records by a field.
//!
//! Records are `serde_json::Map` objects, so anything that came out of a
//! JSON document can be sorted directly. The only real decision here is
//! what to do with records that lack the sort key, which is made
//! explicit via [`MissingKeyPolicy`].

use anyhow::Result;
use serde_json::{Map, Value};
use std::cmp::Ordering;

pub type Record = Map<String, Value>;

/// What to do with records missing the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Fail with an error naming the missing key.
    Reject,
    /// Records without the key sort before all others.
    First,
    /// Records without the key sort after all others.
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort records by one field. The sort is stable, so records that
/// compare equal keep their input order.
pub fn sort_records(
    records: Vec<Record>,
    key: &str,
    order: SortOrder,
    missing: MissingKeyPolicy,
) -> Result<Vec<Record>> {
    if missing == MissingKeyPolicy::Reject {
        if let Some(record) = records.iter().find(|r| !r.contains_key(key)) {
            anyhow::bail!(
                "key '{}' not found in record: {}",
                key,
                Value::Object(record.clone())
            );
        }
    }

    let mut sorted = records;
    sorted.sort_by(|a, b| {
        let cmp = match (a.get(key), b.get(key)) {
            (Some(va), Some(vb)) => compare_values(va, vb),
            (None, Some(_)) => missing_ordering(missing),
            (Some(_), None) => missing_ordering(missing).reverse(),
            (None, None) => Ordering::Equal,
        };
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    Ok(sorted)
}

/// Sort records by an arbitrary extracted key, for multi-field orderings.
pub fn sort_records_by<F>(records: Vec<Record>, mut key_fn: F) -> Vec<Record>
where
    F: FnMut(&Record) -> Vec<Value>,
{
    let mut sorted = records;
    sorted.sort_by(|a, b| {
        let ka = key_fn(a);
        let kb = key_fn(b);
        ka.iter()
            .zip(kb.iter())
            .map(|(va, vb)| compare_values(va, vb))
            .find(|c| *c != Ordering::Equal)
            .unwrap_or_else(|| ka.len().cmp(&kb.len()))
    });
    sorted
}

fn missing_ordering(missing: MissingKeyPolicy) -> Ordering {
    match missing {
        MissingKeyPolicy::First => Ordering::Less,
        MissingKeyPolicy::Last => Ordering::Greater,
        // Reject is handled before sorting; a missing key can't reach here.
        MissingKeyPolicy::Reject => Ordering::Equal,
    }
}

/// Total ordering over JSON values: null < bool < number < string < rest.
/// Numbers compare as f64.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(na), Value::Number(nb)) => {
            let fa = na.as_f64().unwrap_or(f64::NAN);
            let fb = nb.as_f64().unwrap_or(f64::NAN);
            fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
        }
        (Value::String(sa), Value::String(sb)) => sa.cmp(sb),
        (Value::Bool(ba), Value::Bool(bb)) => ba.cmp(bb),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
