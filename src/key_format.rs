//! 키 포맷 모듈
//!
//! JSON 키 이름에 적용할 명명 규칙(camel, lowerCamel, snake)을 담당합니다.

use clap::ValueEnum;

/// 출력 JSON 키 포맷
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum KeyFormat {
    /// 헤더 이름을 그대로 사용
    #[default]
    Default,
    /// PascalCase (예: FirstName)
    Camel,
    /// camelCase (예: firstName)
    #[value(name = "lowerCamel", alias = "lower-camel")]
    LowerCamel,
    /// snake_case (예: first_name)
    Snake,
}

impl std::fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyFormat::Default => write!(f, "default"),
            KeyFormat::Camel => write!(f, "camel"),
            KeyFormat::LowerCamel => write!(f, "lowerCamel"),
            KeyFormat::Snake => write!(f, "snake"),
        }
    }
}

impl KeyFormat {
    /// 헤더 이름에 키 포맷 적용
    ///
    /// # Examples
    /// ```
    /// use csvjson::KeyFormat;
    ///
    /// assert_eq!(KeyFormat::Camel.apply("first_name"), "FirstName");
    /// assert_eq!(KeyFormat::LowerCamel.apply("first_name"), "firstName");
    /// assert_eq!(KeyFormat::Snake.apply("FirstName"), "first_name");
    /// assert_eq!(KeyFormat::Default.apply(" Name "), " Name ");
    /// ```
    pub fn apply(&self, name: &str) -> String {
        match self {
            KeyFormat::Default => name.to_string(),
            KeyFormat::Camel => to_camel(name, true),
            KeyFormat::LowerCamel => to_camel(name, false),
            KeyFormat::Snake => to_snake(name),
        }
    }
}

/// 단어 구분자 여부
fn is_word_delimiter(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}

/// camelCase / PascalCase 변환
///
/// 구분자는 제거되고 다음 글자를 대문자로 만듭니다. 숫자 뒤의 글자도
/// 대문자가 되며, 연속된 대문자는 첫 글자만 남기고 소문자로 바뀝니다.
fn to_camel(name: &str, upper_first: bool) -> String {
    let name = name.trim();
    let mut out = String::with_capacity(name.len());
    let mut cap_next = upper_first;
    let mut prev_is_cap = false;

    for (i, c) in name.chars().enumerate() {
        let is_cap = c.is_ascii_uppercase();
        let is_low = c.is_ascii_lowercase();

        let converted = if cap_next {
            c.to_ascii_uppercase()
        } else if i == 0 || (prev_is_cap && is_cap) {
            c.to_ascii_lowercase()
        } else {
            c
        };
        prev_is_cap = is_cap;

        if is_cap || is_low {
            out.push(converted);
            cap_next = false;
        } else if c.is_ascii_digit() {
            out.push(c);
            cap_next = true;
        } else if !c.is_ascii() && c.is_alphanumeric() {
            out.push(c);
            cap_next = false;
        } else {
            cap_next = is_word_delimiter(c);
        }
    }

    out
}

/// snake_case 변환
///
/// 대소문자/숫자 경계마다 밑줄을 넣고, 약어 뒤에 소문자가 오면
/// 약어의 마지막 대문자 앞에서 단어를 나눕니다 (`JSONData` -> `json_data`).
fn to_snake(name: &str) -> String {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 2);

    for (i, &c) in chars.iter().enumerate() {
        let is_cap = c.is_ascii_uppercase();
        let is_low = c.is_ascii_lowercase();
        let is_num = c.is_ascii_digit();
        let lowered = c.to_ascii_lowercase();

        if let Some(&next) = chars.get(i + 1) {
            let next_is_cap = next.is_ascii_uppercase();
            let next_is_low = next.is_ascii_lowercase();
            let next_is_num = next.is_ascii_digit();

            let boundary = (is_cap && (next_is_low || next_is_num))
                || (is_low && (next_is_cap || next_is_num))
                || (is_num && (next_is_cap || next_is_low));

            if boundary {
                let prev_is_cap = i > 0 && chars[i - 1].is_ascii_uppercase();
                if is_cap && next_is_low && prev_is_cap {
                    out.push('_');
                }
                out.push(lowered);
                if is_low || is_num || next_is_num {
                    out.push('_');
                }
                continue;
            }
        }

        if is_word_delimiter(c) {
            out.push('_');
        } else {
            out.push(lowered);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        for name in ["Name", "first_name", " spaced ", "JSONData", "ünïcode"] {
            assert_eq!(KeyFormat::Default.apply(name), name);
        }
    }

    #[test]
    fn test_camel() {
        assert_eq!(to_camel("first_name", true), "FirstName");
        assert_eq!(to_camel("age", true), "Age");
        assert_eq!(to_camel("job_title", true), "JobTitle");
        assert_eq!(to_camel("job-title", true), "JobTitle");
        assert_eq!(to_camel("user id", true), "UserId");
        assert_eq!(to_camel("file.name", true), "FileName");
        assert_eq!(to_camel("ID", true), "Id");
        assert_eq!(to_camel("address2line", true), "Address2Line");
        assert_eq!(to_camel("  padded  ", true), "Padded");
    }

    #[test]
    fn test_lower_camel() {
        assert_eq!(to_camel("first_name", false), "firstName");
        assert_eq!(to_camel("FirstName", false), "firstName");
        assert_eq!(to_camel("Age", false), "age");
        assert_eq!(to_camel("job_title", false), "jobTitle");
        assert_eq!(to_camel("ID", false), "id");
    }

    #[test]
    fn test_camel_drops_punctuation() {
        assert_eq!(to_camel("price($)", true), "Price");
        assert_eq!(to_camel("a/b", false), "ab");
    }

    #[test]
    fn test_camel_keeps_non_ascii_letters() {
        assert_eq!(to_camel("größe_wert", true), "GrößeWert");
        assert_eq!(to_camel("이름", true), "이름");
    }

    #[test]
    fn test_snake() {
        assert_eq!(to_snake("FirstName"), "first_name");
        assert_eq!(to_snake("Age"), "age");
        assert_eq!(to_snake("JobTitle"), "job_title");
        assert_eq!(to_snake("first_name"), "first_name");
        assert_eq!(to_snake("job title"), "job_title");
        assert_eq!(to_snake("job-title"), "job_title");
        assert_eq!(to_snake("firstName"), "first_name");
    }

    #[test]
    fn test_snake_acronyms_and_digits() {
        assert_eq!(to_snake("JSONData"), "json_data");
        assert_eq!(to_snake("ID"), "id");
        assert_eq!(to_snake("item2"), "item_2");
        assert_eq!(to_snake("Version2Beta"), "version_2_beta");
    }

    #[test]
    fn test_display_matches_cli_names() {
        assert_eq!(KeyFormat::Default.to_string(), "default");
        assert_eq!(KeyFormat::Camel.to_string(), "camel");
        assert_eq!(KeyFormat::LowerCamel.to_string(), "lowerCamel");
        assert_eq!(KeyFormat::Snake.to_string(), "snake");
    }

    #[test]
    fn test_value_enum_parsing() {
        assert_eq!(
            KeyFormat::from_str("lowerCamel", false).unwrap(),
            KeyFormat::LowerCamel
        );
        assert_eq!(
            KeyFormat::from_str("lower-camel", false).unwrap(),
            KeyFormat::LowerCamel
        );
        assert_eq!(KeyFormat::from_str("snake", false).unwrap(), KeyFormat::Snake);
        assert!(KeyFormat::from_str("kebab", false).is_err());
    }
}
