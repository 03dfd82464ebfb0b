//! Columnar payload normalization and table merging
//!
//! ISS responses carry each table as parallel `columns`/`data` arrays.
//! This module turns those into [`BondRecord`]s and merges auxiliary
//! tables into primary records by their shared `secid`.

use crate::model::BondRecord;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// One named table in an ISS payload
///
/// Both halves default to empty so a missing or truncated table never
/// fails deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssTable {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

/// A full ISS payload: table name → columnar table
pub type IssPayload = HashMap<String, IssTable>;

impl IssTable {
    /// One record per data row
    pub fn records(&self) -> Vec<BondRecord> {
        self.data
            .iter()
            .map(|row| BondRecord::from_columns(&self.columns, row))
            .collect()
    }

    /// The first row as a record, if any
    pub fn first_record(&self) -> Option<BondRecord> {
        self.data
            .first()
            .map(|row| BondRecord::from_columns(&self.columns, row))
    }

    fn secid_index(&self) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case("secid"))
    }
}

/// Merge an auxiliary table into primary records by `secid`.
///
/// Left-outer join: every primary record is kept as-is when the auxiliary
/// table has no row for it; auxiliary rows without a matching primary are
/// dropped. `prefix` namespaces unrecognized auxiliary columns in the
/// records' `extra` map.
pub fn merge_aux_table(records: &mut [BondRecord], aux: &IssTable, prefix: Option<&str>) {
    let Some(secid_index) = aux.secid_index() else {
        return;
    };

    let mut rows_by_secid: HashMap<&str, &Vec<Value>> = HashMap::new();
    for row in &aux.data {
        if let Some(Value::String(secid)) = row.get(secid_index) {
            rows_by_secid.entry(secid.as_str()).or_insert(row);
        }
    }

    for record in records.iter_mut() {
        let Some(secid) = record.secid.as_deref() else {
            continue;
        };
        if let Some(row) = rows_by_secid.get(secid).copied() {
            record.merge_row(&aux.columns, row, prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(columns: &[&str], data: Vec<Vec<Value>>) -> IssTable {
        IssTable {
            columns: columns.iter().map(|s| (*s).to_string()).collect(),
            data,
        }
    }

    #[test]
    fn test_records_from_table() {
        let securities = table(
            &["SECID", "SHORTNAME", "COUPONPERCENT"],
            vec![
                vec![json!("BOND1"), json!("Bond One"), json!(7.5)],
                vec![json!("BOND2"), json!("Bond Two"), json!(9.25)],
            ],
        );

        let records = securities.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].secid.as_deref(), Some("BOND1"));
        assert_eq!(records[1].couponpercent, Some(9.25));
    }

    #[test]
    fn test_empty_table_yields_no_records() {
        assert!(IssTable::default().records().is_empty());
        assert_eq!(IssTable::default().first_record(), None);
    }

    #[test]
    fn test_merge_is_left_outer() {
        let securities = table(
            &["SECID", "SHORTNAME"],
            vec![
                vec![json!("BOND1"), json!("Bond One")],
                vec![json!("BOND2"), json!("Bond Two")],
            ],
        );
        let yields = table(
            &["SECID", "EFFECTIVEYIELD", "DURATION"],
            vec![
                vec![json!("BOND1"), json!(11.4), json!(730)],
                // BOND3 has no matching primary and must be dropped
                vec![json!("BOND3"), json!(99.0), json!(10)],
            ],
        );

        let mut records = securities.records();
        merge_aux_table(&mut records, &yields, None);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].effectiveyield, Some(11.4));
        assert_eq!(records[0].duration, Some(730.0));

        // primary without auxiliary match keeps its fields and gains none
        assert_eq!(records[1].shortname.as_deref(), Some("Bond Two"));
        assert_eq!(records[1].effectiveyield, None);
        assert_eq!(records[1].duration, None);
    }

    #[test]
    fn test_merge_without_secid_column_is_a_no_op() {
        let securities = table(&["SECID"], vec![vec![json!("BOND1")]]);
        let aux = table(&["EFFECTIVEYIELD"], vec![vec![json!(11.4)]]);

        let mut records = securities.records();
        merge_aux_table(&mut records, &aux, None);

        assert_eq!(records[0].effectiveyield, None);
    }

    #[test]
    fn test_merge_prefixes_unknown_aux_columns() {
        let securities = table(&["SECID"], vec![vec![json!("BOND1")]]);
        let marketdata = table(
            &["SECID", "LAST", "BID"],
            vec![vec![json!("BOND1"), json!(101.3), json!(101.0)]],
        );

        let mut records = securities.records();
        merge_aux_table(&mut records, &marketdata, Some("marketdata"));

        assert_eq!(records[0].last, Some(101.3));
        assert_eq!(records[0].extra.get("marketdata_bid"), Some(&json!(101.0)));
    }

    #[test]
    fn test_payload_tolerates_missing_pieces() {
        let payload: IssPayload = serde_json::from_str(
            r#"{"securities": {"columns": ["SECID"]}, "marketdata": {}}"#,
        )
        .expect("payload must deserialize");

        assert!(payload["securities"].records().is_empty());
        assert!(payload["marketdata"].columns.is_empty());
    }
}
