//! 행 변환 모듈
//!
//! 헤더와 데이터 행을 컬럼 필터 및 키 포맷에 따라 레코드로 변환합니다.

use log::debug;
use std::collections::HashMap;

use crate::error::Result;
use crate::filter::ColumnFilter;
use crate::key_format::KeyFormat;
use crate::record::Record;

/// 행 변환기
///
/// 생성 시 필터를 검증하고, 헤더 위치마다 출력 슬롯(제외된 컬럼은 `None`)을
/// 미리 계산해 둡니다. 같은 출력 키로 모이는 컬럼은 하나의 슬롯을 공유하므로
/// 첫 등장 위치에 마지막 값이 남습니다.
#[derive(Debug, Clone)]
pub struct RowTransformer {
    /// 헤더 위치별 슬롯 인덱스
    slots: Vec<Option<usize>>,
    /// 슬롯별 출력 키 (첫 등장 순서)
    keys: Vec<String>,
}

impl RowTransformer {
    /// 헤더와 설정으로 변환기 생성
    ///
    /// 필터의 컬럼이 헤더에 없으면 어떤 행도 처리하기 전에 실패합니다.
    pub fn new(header: &[String], filter: &ColumnFilter, key_format: KeyFormat) -> Result<Self> {
        filter.validate(header)?;

        let mut keys: Vec<String> = Vec::new();
        let mut slot_of: HashMap<String, usize> = HashMap::new();
        let slots: Vec<Option<usize>> = header
            .iter()
            .map(|name| {
                if !filter.retains(name) {
                    return None;
                }
                let key = key_format.apply(name);
                let slot = *slot_of.entry(key.clone()).or_insert_with(|| {
                    keys.push(key);
                    keys.len() - 1
                });
                Some(slot)
            })
            .collect();

        debug!(
            "변환기 준비: 헤더 {}개 중 {}개 컬럼 유지, 출력 키 {}개, 키 포맷 {}",
            header.len(),
            slots.iter().filter(|s| s.is_some()).count(),
            keys.len(),
            key_format
        );

        Ok(Self { slots, keys })
    }

    /// 출력에 남는 컬럼 수
    pub fn retained_columns(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// 출력 키 목록 (헤더 순서, 중복 제거)
    pub fn output_keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// 한 행을 레코드로 변환
    ///
    /// 헤더보다 긴 행의 초과 셀은 무시하고, 짧은 행의 누락 셀은 키 자체가 빠집니다.
    pub fn transform_row<S: AsRef<str>>(&self, row: &[S]) -> Record {
        let mut values: Vec<Option<&str>> = vec![None; self.keys.len()];
        for (cell, slot) in row.iter().zip(&self.slots) {
            if let Some(slot) = *slot {
                values[slot] = Some(trim_cell(cell.as_ref()));
            }
        }

        let fields = self
            .keys
            .iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|v| (key.clone(), v.to_string())))
            .collect();
        Record::from_unique_fields(fields)
    }

    /// 모든 행 변환 (입력 순서 유지)
    pub fn transform_rows<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> Vec<Record> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }
}

/// 셀 앞뒤의 ASCII 공백 제거 (탭 등 다른 공백 문자는 유지)
pub fn trim_cell(cell: &str) -> &str {
    cell.trim_matches(' ')
}

/// 헤더와 행 전체를 한 번에 변환
///
/// # Examples
/// ```
/// use csvjson::{transform, ColumnFilter, KeyFormat};
///
/// let header = vec!["Name".to_string(), "Job".to_string()];
/// let rows = vec![vec!["Alice", "Developer"]];
/// let filter = ColumnFilter::Exclude(vec!["Job".to_string()]);
///
/// let records = transform(&header, &rows, &filter, KeyFormat::Default).unwrap();
/// assert_eq!(serde_json::to_string(&records).unwrap(), r#"[{"Name":"Alice"}]"#);
/// ```
pub fn transform<S: AsRef<str>>(
    header: &[String],
    rows: &[Vec<S>],
    filter: &ColumnFilter,
    key_format: KeyFormat,
) -> Result<Vec<Record>> {
    let transformer = RowTransformer::new(header, filter, key_format)?;
    Ok(transformer.transform_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvJsonError;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_rows() -> Vec<Vec<&'static str>> {
        vec![vec!["Alice", "30", "Developer"], vec!["Bob", "25", "Designer"]]
    }

    fn to_json(records: &[Record]) -> String {
        serde_json::to_string(records).unwrap()
    }

    #[test]
    fn test_no_filter_default_format() {
        let records = transform(
            &header(&["Name", "Age", "Job"]),
            &sample_rows(),
            &ColumnFilter::All,
            KeyFormat::Default,
        )
        .unwrap();

        assert_eq!(
            to_json(&records),
            r#"[{"Name":"Alice","Age":"30","Job":"Developer"},{"Name":"Bob","Age":"25","Job":"Designer"}]"#
        );
    }

    #[test]
    fn test_exclude_column() {
        let filter = ColumnFilter::Exclude(vec!["Job".to_string()]);
        let records = transform(
            &header(&["Name", "Age", "Job"]),
            &sample_rows(),
            &filter,
            KeyFormat::Default,
        )
        .unwrap();

        assert_eq!(
            to_json(&records),
            r#"[{"Name":"Alice","Age":"30"},{"Name":"Bob","Age":"25"}]"#
        );
    }

    #[test]
    fn test_include_order_follows_header() {
        let filter = ColumnFilter::Include(vec!["Job".to_string(), "Name".to_string()]);
        let records = transform(
            &header(&["Name", "Age", "Job"]),
            &sample_rows(),
            &filter,
            KeyFormat::Default,
        )
        .unwrap();

        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["Name", "Job"]);
    }

    #[test]
    fn test_unknown_column_fails_before_rows() {
        let filter = ColumnFilter::Include(vec!["Salary".to_string()]);
        let result = RowTransformer::new(&header(&["Name", "Age", "Job"]), &filter, KeyFormat::Default);

        match result {
            Err(CsvJsonError::UnknownColumn { column }) => assert_eq!(column, "Salary"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_key_format_camel() {
        let records = transform(
            &header(&["first_name", "age", "job_title"]),
            &sample_rows(),
            &ColumnFilter::All,
            KeyFormat::Camel,
        )
        .unwrap();

        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys, vec!["FirstName", "Age", "JobTitle"]);
    }

    #[test]
    fn test_filter_matches_raw_header_not_formatted_key() {
        let filter = ColumnFilter::Include(vec!["first_name".to_string()]);
        let records = transform(
            &header(&["first_name", "age"]),
            &[vec!["Alice", "30"]],
            &filter,
            KeyFormat::LowerCamel,
        )
        .unwrap();

        assert_eq!(to_json(&records), r#"[{"firstName":"Alice"}]"#);
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![
            vec!["Alice", "30", "Developer", "surplus"],
            vec!["Bob"],
            vec![],
        ];
        let records = transform(
            &header(&["Name", "Age", "Job"]),
            &rows,
            &ColumnFilter::All,
            KeyFormat::Default,
        )
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            to_json(&records),
            r#"[{"Name":"Alice","Age":"30","Job":"Developer"},{"Name":"Bob"},{}]"#
        );
    }

    #[test]
    fn test_trims_only_ascii_spaces() {
        let records = transform(
            &header(&["Name", "Note"]),
            &[vec!["  Alice  ", "\tindented\t"]],
            &ColumnFilter::All,
            KeyFormat::Default,
        )
        .unwrap();

        assert_eq!(records[0].get("Name"), Some("Alice"));
        assert_eq!(records[0].get("Note"), Some("\tindented\t"));
    }

    #[test]
    fn test_trim_is_idempotent() {
        for cell in ["  a  ", "b", "   ", " \tc\t ", ""] {
            let once = trim_cell(cell);
            assert_eq!(trim_cell(once), once);
        }
    }

    #[test]
    fn test_duplicate_header_names() {
        let records = transform(
            &header(&["id", "name", "id"]),
            &[vec!["1", "Alice", "2"]],
            &ColumnFilter::All,
            KeyFormat::Default,
        )
        .unwrap();

        assert_eq!(to_json(&records), r#"[{"id":"2","name":"Alice"}]"#);
    }

    #[test]
    fn test_formatted_key_collision() {
        let records = transform(
            &header(&["first_name", "FirstName", "age"]),
            &[vec!["Alice", "Bob", "30"], vec!["Carol"]],
            &ColumnFilter::All,
            KeyFormat::Camel,
        )
        .unwrap();

        assert_eq!(
            to_json(&records),
            r#"[{"FirstName":"Bob","Age":"30"},{"FirstName":"Carol"}]"#
        );
    }

    #[test]
    fn test_wide_header_keeps_order() {
        let names: Vec<String> = (0..500).map(|i| format!("col_{}", i)).collect();
        let row: Vec<String> = (0..500).map(|i| i.to_string()).collect();

        let transformer = RowTransformer::new(&names, &ColumnFilter::All, KeyFormat::Default).unwrap();
        let record = transformer.transform_row(&row);

        assert_eq!(record.len(), 500);
        assert_eq!(record.keys().last(), Some("col_499"));
        assert_eq!(record.get("col_250"), Some("250"));
    }

    #[test]
    fn test_include_and_exclude_are_complementary() {
        let names = header(&["Name", "Age", "Job", "City"]);
        let rows = vec![vec!["Alice", "30", "Developer", "Seoul"]];

        for excluded in &names {
            let exclude = ColumnFilter::Exclude(vec![excluded.clone()]);
            let include = ColumnFilter::Include(
                names.iter().filter(|n| *n != excluded).cloned().collect(),
            );

            let by_exclude = transform(&names, &rows, &exclude, KeyFormat::Default).unwrap();
            let by_include = transform(&names, &rows, &include, KeyFormat::Default).unwrap();
            assert_eq!(by_exclude, by_include);
        }
    }

    #[test]
    fn test_retained_columns_and_output_keys() {
        let filter = ColumnFilter::Exclude(vec!["Age".to_string()]);
        let transformer =
            RowTransformer::new(&header(&["Name", "Age", "JobTitle"]), &filter, KeyFormat::Snake)
                .unwrap();

        assert_eq!(transformer.retained_columns(), 2);
        let keys: Vec<&str> = transformer.output_keys().collect();
        assert_eq!(keys, vec!["name", "job_title"]);
    }
}
