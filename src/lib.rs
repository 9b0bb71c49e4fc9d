//! csvjson - CSV TO JSON CONVERTER
//!
//! CSV 파일을 JSON 객체 배열로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 📋 **헤더 기반 변환**: 첫 행을 키로 사용하여 데이터 행마다 JSON 객체 생성
//! - 🎯 **컬럼 선택**: include / exclude 목록으로 출력 컬럼 지정
//! - 🔤 **키 포맷**: camel, lowerCamel, snake 명명 규칙 적용
//! - 🧭 **순서 보존**: 키 순서는 헤더 컬럼 순서를 그대로 따름
//! - ✨ **Pretty 출력**: 2칸 들여쓰기 JSON 지원
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법 (콘솔 출력)
//! csvjson -i people.csv
//!
//! # 파일로 저장
//! csvjson -i people.csv -o people.json --pretty
//!
//! # 특정 컬럼 제외, snake_case 키
//! csvjson -i people.csv --exclude "Salary" -k snake
//! ```

pub mod cli;
pub mod error;
pub mod filter;
pub mod key_format;
pub mod processor;
pub mod record;
pub mod stats;
pub mod syntax;
pub mod transform;

// Re-exports for convenient access
pub use cli::Args;
pub use error::{CsvJsonError, CsvSyntaxError, Result};
pub use filter::ColumnFilter;
pub use key_format::KeyFormat;
pub use processor::{
    convert_file, parse_csv, render_json, write_output, Conversion, ConvertOptions, CsvTable,
};
pub use record::Record;
pub use stats::{format_bytes, Statistics};
pub use transform::{transform, RowTransformer};
