//! 에러 타입 정의 모듈
//!
//! csvjson에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// csvjson에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum CsvJsonError {
    /// 입력 파일이 존재하지 않음
    #[error("입력 파일을 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력 경로가 일반 파일이 아님
    #[error("입력 경로가 파일이 아닙니다: {path}")]
    NotAFile { path: PathBuf },

    /// CSV 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// CSV 파싱 실패
    #[error("CSV 파싱 실패 ({file}): {reason}")]
    CsvParseError { file: PathBuf, reason: String },

    /// include와 exclude를 동시에 지정
    #[error("--include와 --exclude 옵션은 동시에 사용할 수 없습니다")]
    ConflictingFilters,

    /// 필터에 지정한 컬럼이 헤더에 없음
    #[error("CSV 파일에 존재하지 않는 컬럼입니다: {column}")]
    UnknownColumn { column: String },

    /// 구분자가 단일 ASCII 문자가 아님
    #[error("유효하지 않은 구분자: {delimiter:?} (ASCII 문자 하나만 허용)")]
    InvalidDelimiter { delimiter: char },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패: {reason}")]
    SerializeError { reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },
}

impl CsvJsonError {
    /// 설정 오류 여부 (입력을 읽기 전에 검출되는 에러)
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CsvJsonError::ConflictingFilters
                | CsvJsonError::UnknownColumn { .. }
                | CsvJsonError::InvalidDelimiter { .. }
        )
    }
}

/// CSV 구문 오류
#[derive(Error, Debug)]
pub enum CsvSyntaxError {
    /// 따옴표로 시작한 필드가 입력 끝까지 닫히지 않음
    #[error("{line}번째 줄: 닫히지 않은 따옴표 필드")]
    UnterminatedQuote { line: u64 },

    /// 따옴표로 감싸지 않은 필드 안에 따옴표가 있음
    #[error("{line}번째 줄: 따옴표로 감싸지 않은 필드에 따옴표가 있습니다")]
    BareQuote { line: u64 },

    /// 닫는 따옴표 뒤에 구분자나 줄바꿈이 아닌 문자가 있음
    #[error("{line}번째 줄: 따옴표 필드 뒤에 잘못된 문자가 있습니다")]
    ExtraneousQuote { line: u64 },

    /// csv 리더 오류 (UTF-8 등)
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// csvjson 결과 타입 별칭
pub type Result<T> = std::result::Result<T, CsvJsonError>;
