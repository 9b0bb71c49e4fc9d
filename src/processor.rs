//! CSV 파일 처리 모듈
//!
//! CSV 파일 읽기, 레코드 변환, JSON 직렬화 및 파일 쓰기를 담당합니다.

use csv::ReaderBuilder;
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{CsvJsonError, CsvSyntaxError, Result};
use crate::filter::ColumnFilter;
use crate::key_format::KeyFormat;
use crate::record::Record;
use crate::stats::Statistics;
use crate::syntax::check_quotes;
use crate::transform::RowTransformer;

/// 파싱된 CSV 테이블
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// 첫 행 (컬럼 이름)
    pub header: Vec<String>,
    /// 나머지 데이터 행
    pub rows: Vec<Vec<String>>,
}

/// 변환 결과
#[derive(Debug)]
pub struct Conversion {
    /// 직렬화된 JSON 문서
    pub json: String,
    /// 변환 통계
    pub stats: Statistics,
}

impl Conversion {
    /// 출력 레코드 수
    pub fn record_count(&self) -> usize {
        self.stats.records
    }
}

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// 포함할 컬럼 목록
    pub include: Option<Vec<String>>,
    /// 제외할 컬럼 목록
    pub exclude: Option<Vec<String>>,
    /// 출력 키 포맷
    pub key_format: KeyFormat,
    /// Pretty 출력 여부
    pub pretty: bool,
    /// CSV 구분자
    pub delimiter: u8,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            include: None,
            exclude: None,
            key_format: KeyFormat::Default,
            pretty: false,
            delimiter: b',',
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 포함 컬럼 설정
    pub fn with_include(mut self, include: Option<Vec<String>>) -> Self {
        self.include = include;
        self
    }

    /// 제외 컬럼 설정
    pub fn with_exclude(mut self, exclude: Option<Vec<String>>) -> Self {
        self.exclude = exclude;
        self
    }

    /// 키 포맷 설정
    pub fn with_key_format(mut self, key_format: KeyFormat) -> Self {
        self.key_format = key_format;
        self
    }

    /// Pretty 출력 설정
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// 구분자 설정
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }

    /// include / exclude 목록으로 컬럼 필터 생성
    pub fn column_filter(&self) -> Result<ColumnFilter> {
        ColumnFilter::from_lists(self.include.clone(), self.exclude.clone())
    }
}

/// CSV 파일을 JSON 문서로 변환
///
/// 설정 오류는 입력 파일을 열기 전에, 헤더 관련 오류는 행 변환 전에 검출됩니다.
/// 어떤 에러가 발생해도 부분 결과는 반환되지 않습니다.
///
/// # Arguments
/// * `path` - 입력 CSV 파일 경로
/// * `options` - 변환 옵션
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion> {
    let mut stats = Statistics::new();
    let filter = options.column_filter()?;

    let (table, file_size) = read_table(path, options)?;
    stats.bytes_read = file_size;

    let transformer = RowTransformer::new(&table.header, &filter, options.key_format)?;
    let records = transformer.transform_rows(&table.rows);

    stats.header_columns = table.header.len();
    stats.retained_columns = transformer.retained_columns();
    stats.data_rows = table.rows.len();
    stats.records = records.len();
    debug!("레코드 {}개 변환 완료", records.len());

    let json = render_json(&records, options.pretty)?;
    Ok(Conversion { json, stats })
}

/// CSV 파일을 읽어 테이블로 파싱
///
/// # Returns
/// 파싱된 테이블과 원본 파일 크기
pub fn read_table(path: &Path, options: &ConvertOptions) -> Result<(CsvTable, u64)> {
    if path.is_dir() {
        return Err(CsvJsonError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = open_input(path)?;
    let file_size = file
        .metadata()
        .map_err(|e| CsvJsonError::FileOpenError {
            file: path.to_path_buf(),
            reason: format!("메타데이터 조회 실패: {}", e),
        })?
        .len();

    let parsed = if file_size >= options.mmap_threshold {
        // 대용량 파일: 메모리 매핑 사용
        debug!("메모리 매핑으로 읽기: {:?} ({} bytes)", path, file_size);
        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| CsvJsonError::FileOpenError {
                file: path.to_path_buf(),
                reason: format!("메모리 매핑 실패: {}", e),
            })?
        };
        parse_csv(&mmap[..], options.delimiter)
    } else {
        // 일반 파일: 버퍼 리더로 전체 읽기
        debug!("버퍼 리더로 읽기: {:?} ({} bytes)", path, file_size);
        let mut data = Vec::with_capacity(file_size as usize);
        BufReader::new(file)
            .read_to_end(&mut data)
            .map_err(|e| CsvJsonError::FileOpenError {
                file: path.to_path_buf(),
                reason: format!("읽기 실패: {}", e),
            })?;
        parse_csv(&data, options.delimiter)
    };

    let table = parsed.map_err(|e| CsvJsonError::CsvParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(
        "헤더 컬럼 {}개, 데이터 행 {}개",
        table.header.len(),
        table.rows.len()
    );

    Ok((table, file_size))
}

/// 입력 파일 열기
fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CsvJsonError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CsvJsonError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        },
    })
}

/// CSV 파싱
///
/// 첫 행을 헤더로, 나머지를 데이터 행으로 나눕니다. 행마다 셀 수가 달라도
/// 허용하며 셀 값은 가공하지 않습니다. 입력이 비어 있으면 빈 테이블을 반환합니다.
/// 따옴표 구조가 잘못된 입력은 파싱 전에 거부합니다.
pub fn parse_csv(data: &[u8], delimiter: u8) -> std::result::Result<CsvTable, CsvSyntaxError> {
    check_quotes(data, delimiter)?;

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut records = csv_reader.records();

    let header = match records.next() {
        Some(first) => first?.iter().map(str::to_string).collect(),
        None => return Ok(CsvTable::default()),
    };

    let rows = records
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<csv::Result<Vec<Vec<String>>>>()?;

    Ok(CsvTable { header, rows })
}

/// 레코드 목록을 JSON 배열 문자열로 직렬화
///
/// pretty 모드에서는 2칸 들여쓰기를 사용합니다.
pub fn render_json(records: &[Record], pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    }
    .map_err(|e| CsvJsonError::SerializeError {
        reason: e.to_string(),
    })
}

/// JSON 문서를 파일로 저장
///
/// 같은 폴더의 임시 파일에 모두 쓴 뒤 대상 경로로 옮깁니다. 실패하면
/// 임시 파일은 삭제되고 대상 경로는 변경되지 않습니다.
///
/// # Returns
/// 기록한 바이트 수
pub fn write_output(path: &Path, json: &str) -> Result<u64> {
    let to_write_error = |e: io::Error| CsvJsonError::WriteError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".csvjson-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(to_write_error)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        writer.write_all(json.as_bytes()).map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(to_write_error)?;
    }

    temp.persist(path).map_err(|e| to_write_error(e.error))?;

    debug!("{} bytes 저장: {:?}", json.len(), path);
    Ok(json.len() as u64)
}
