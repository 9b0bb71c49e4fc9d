//! 컬럼 필터 모듈
//!
//! include / exclude 컬럼 목록의 구성과 헤더 대비 유효성 검사를 담당합니다.

use crate::error::{CsvJsonError, Result};

/// 컬럼 선택 필터
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnFilter {
    /// 모든 컬럼 포함
    #[default]
    All,
    /// 지정한 컬럼만 포함
    Include(Vec<String>),
    /// 지정한 컬럼 제외
    Exclude(Vec<String>),
}

impl ColumnFilter {
    /// include / exclude 목록으로 필터 생성
    ///
    /// 빈 목록은 지정하지 않은 것으로 취급합니다. 두 목록이 모두
    /// 비어 있지 않으면 `ConflictingFilters` 에러를 반환합니다.
    ///
    /// # Examples
    /// ```
    /// use csvjson::ColumnFilter;
    ///
    /// let filter = ColumnFilter::from_lists(None, Some(vec!["Job".to_string()])).unwrap();
    /// assert!(filter.retains("Name"));
    /// assert!(!filter.retains("Job"));
    ///
    /// let both = ColumnFilter::from_lists(
    ///     Some(vec!["Name".to_string()]),
    ///     Some(vec!["Job".to_string()]),
    /// );
    /// assert!(both.is_err());
    /// ```
    pub fn from_lists(include: Option<Vec<String>>, exclude: Option<Vec<String>>) -> Result<Self> {
        let include = include.filter(|cols| !cols.is_empty());
        let exclude = exclude.filter(|cols| !cols.is_empty());

        match (include, exclude) {
            (Some(_), Some(_)) => Err(CsvJsonError::ConflictingFilters),
            (Some(cols), None) => Ok(ColumnFilter::Include(cols)),
            (None, Some(cols)) => Ok(ColumnFilter::Exclude(cols)),
            (None, None) => Ok(ColumnFilter::All),
        }
    }

    /// 필터에 지정된 컬럼 이름 목록
    pub fn columns(&self) -> &[String] {
        match self {
            ColumnFilter::All => &[],
            ColumnFilter::Include(cols) | ColumnFilter::Exclude(cols) => cols,
        }
    }

    /// 필터의 모든 컬럼이 헤더에 존재하는지 검사
    ///
    /// 필터 순서상 처음으로 누락된 컬럼 이름을 에러에 담습니다.
    pub fn validate(&self, header: &[String]) -> Result<()> {
        match self
            .columns()
            .iter()
            .find(|col| !header.iter().any(|name| name == *col))
        {
            Some(missing) => Err(CsvJsonError::UnknownColumn {
                column: missing.clone(),
            }),
            None => Ok(()),
        }
    }

    /// 해당 컬럼이 출력에 남는지 여부
    pub fn retains(&self, column: &str) -> bool {
        match self {
            ColumnFilter::All => true,
            ColumnFilter::Include(cols) => cols.iter().any(|c| c == column),
            ColumnFilter::Exclude(cols) => !cols.iter().any(|c| c == column),
        }
    }
}
