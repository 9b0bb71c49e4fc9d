//! CSV 구문 검사 모듈
//!
//! csv 리더는 따옴표 오류를 관대하게 처리하므로, 파싱 전에 원본 바이트의
//! 따옴표 구조를 엄격하게 검사합니다.

use crate::error::CsvSyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    /// 따옴표 필드 안에서 `"`를 만난 직후
    QuoteInQuoted,
}

/// 따옴표 구조 검사
///
/// - 따옴표 필드는 필드 첫 글자가 `"`여야 합니다.
/// - 따옴표 필드 안의 `"`는 `""`로 이스케이프해야 합니다.
/// - 닫는 따옴표 뒤에는 구분자, 줄바꿈 또는 입력 끝만 올 수 있습니다.
/// - 입력이 끝날 때 따옴표 필드가 열려 있으면 안 됩니다.
///
/// # Examples
/// ```
/// use csvjson::syntax::check_quotes;
///
/// assert!(check_quotes(b"a,\"b,\"\"c\"\"\"\n", b',').is_ok());
/// assert!(check_quotes(b"a,\"b\n", b',').is_err());
/// ```
pub fn check_quotes(data: &[u8], delimiter: u8) -> Result<(), CsvSyntaxError> {
    let mut state = State::FieldStart;
    let mut line: u64 = 1;
    let mut quote_line: u64 = 1;

    for &byte in data {
        let ends_field = byte == delimiter || byte == b'\n' || byte == b'\r';

        state = match state {
            State::FieldStart | State::Unquoted if byte == b'"' => {
                if state == State::Unquoted {
                    return Err(CsvSyntaxError::BareQuote { line });
                }
                quote_line = line;
                State::Quoted
            }
            State::FieldStart | State::Unquoted if ends_field => State::FieldStart,
            State::FieldStart | State::Unquoted => State::Unquoted,
            State::Quoted if byte == b'"' => State::QuoteInQuoted,
            State::Quoted => State::Quoted,
            State::QuoteInQuoted if byte == b'"' => State::Quoted,
            State::QuoteInQuoted if ends_field => State::FieldStart,
            State::QuoteInQuoted => return Err(CsvSyntaxError::ExtraneousQuote { line }),
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    if state == State::Quoted {
        return Err(CsvSyntaxError::UnterminatedQuote { line: quote_line });
    }

    Ok(())
}
