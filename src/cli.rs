//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{CsvJsonError, Result};
use crate::key_format::KeyFormat;
use crate::processor::ConvertOptions;

/// csvjson CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "csvjson",
    author = "YourName <your@email.com>",
    version,
    about = "CSV TO JSON CONVERTER - CSV 파일을 JSON 배열로 변환하는 CLI 도구",
    long_about = r#"
CSV TO JSON CONVERTER
=====================

CSV 파일의 첫 행을 헤더로 사용하여 각 데이터 행을
하나의 JSON 객체로 변환하고, 전체를 JSON 배열로 출력합니다.

특징:
  • 컬럼 선택 (--include) 또는 제외 (--exclude)
  • 키 이름 포맷 변환 (camel, lowerCamel, snake)
  • Pretty 출력 지원
  • 출력 파일 미지정 시 콘솔 출력

예제:
  csvjson -i people.csv
  csvjson -i people.csv -o people.json --pretty
  csvjson -i people.csv --exclude "Salary,Address"
  csvjson -i people.csv --include "Name,Age" -k lowerCamel
"#
)]
pub struct Args {
    /// 입력 CSV 파일 경로
    #[arg(short, long)]
    pub input: PathBuf,

    /// 출력 JSON 파일 경로 (미지정 시 콘솔 출력)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty 출력 (2칸 들여쓰기)
    #[arg(short, long)]
    pub pretty: bool,

    /// 포함할 컬럼 (쉼표로 구분, 예: "Name,Age")
    #[arg(short = 'n', long, visible_alias = "include-columns")]
    pub include: Option<String>,

    /// 제외할 컬럼 (쉼표로 구분, 예: "Salary")
    #[arg(short = 'e', long, visible_alias = "exclude-columns")]
    pub exclude: Option<String>,

    /// 출력 JSON 키 포맷
    #[arg(
        short = 'k',
        long,
        value_enum,
        alias = "keyFormat",
        default_value_t = KeyFormat::Default
    )]
    pub key_format: KeyFormat,

    /// CSV 구분자 (ASCII 문자 하나)
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// 상세 출력 모드 (배너, 통계, 디버그 로그)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 포함 컬럼 목록 파싱
    pub fn get_include(&self) -> Option<Vec<String>> {
        self.include.as_deref().map(split_columns)
    }

    /// 제외 컬럼 목록 파싱
    pub fn get_exclude(&self) -> Option<Vec<String>> {
        self.exclude.as_deref().map(split_columns)
    }

    /// 구분자를 바이트로 변환
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CsvJsonError::InvalidDelimiter {
                delimiter: self.delimiter,
            })
        }
    }

    /// 변환 옵션 생성
    pub fn to_options(&self) -> Result<ConvertOptions> {
        Ok(ConvertOptions::new()
            .with_include(self.get_include())
            .with_exclude(self.get_exclude())
            .with_key_format(self.key_format)
            .with_pretty(self.pretty)
            .with_delimiter(self.delimiter_byte()?))
    }
}

/// 쉼표로 구분된 컬럼 이름 목록을 벡터로 변환
fn split_columns(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
