//! 레코드 모듈
//!
//! 한 데이터 행에 대응하는 순서 보존 키-값 레코드를 정의합니다.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// 출력 JSON 객체 하나에 대응하는 레코드
///
/// 키는 삽입 순서(= 헤더 컬럼 순서)를 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// 빈 레코드 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 용량을 미리 확보한 빈 레코드 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// 키가 서로 다른 키-값 목록으로 레코드 생성 (순서 그대로 사용)
    pub(crate) fn from_unique_fields(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// 키-값 삽입
    ///
    /// 이미 있는 키라면 위치는 그대로 두고 값만 교체합니다.
    pub fn insert(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// 키로 값 조회
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 키 목록 (삽입 순서)
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// 키-값 쌍 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
