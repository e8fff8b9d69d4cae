//! 음소 혼동 테이블 로드 및 조회
//!
//! 실제 아동 발음 장애 연구 데이터 기반의 음소 쌍 유사도 가중치입니다.
//! (Wav2Vec2 XLS-R, 한국 아동 137명 데이터, 언어치료사 판단 90% 일치)
//! 프로세스 시작 시 한 번 만들어져 읽기 전용으로 공유됩니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

use lazy_static::lazy_static;

/// 혼동 테이블 로드/파싱 에러
#[derive(Debug)]
pub enum TableError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 테이블 형식 오류
    FormatError(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            TableError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            TableError::FormatError(s) => write!(f, "테이블 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::IoError(e)
    }
}

/// 기본 음소 쌍 가중치
#[rustfmt::skip]
const DEFAULT_PAIRS: &[(&str, &str, f64)] = &[
    // ===== 모음 - 대부분의 화자가 거의 같게 듣는 쌍 =====
    ("ㅙ", "ㅚ", 0.95),
    ("ㅞ", "ㅚ", 0.95),

    // ===== 자음 - 아동 발음 장애 연구 데이터 =====
    ("ㄷ", "ㅈ", 0.85),   // 아동이 가장 많이 혼동하는 치경음 쌍
    ("ㄴ", "ㅇ", 0.80),   // 높은 대체 오류율
    ("ㅈ", "ㅉ", 0.75),   // 후치경 마찰음

    // ===== 자음 - 삼중 대립 (평음/격음/경음) =====
    ("ㄱ", "ㅋ", 0.80),
    ("ㄱ", "ㄲ", 0.75),
    ("ㅋ", "ㄲ", 0.65),

    ("ㄷ", "ㅌ", 0.80),
    ("ㄷ", "ㄸ", 0.75),
    ("ㅌ", "ㄸ", 0.65),

    ("ㅂ", "ㅍ", 0.80),
    ("ㅂ", "ㅃ", 0.75),
    ("ㅍ", "ㅃ", 0.65),

    ("ㅈ", "ㅊ", 0.80),
    ("ㅊ", "ㅉ", 0.65),

    ("ㅅ", "ㅆ", 0.75),

    // ===== 자음 - 같은 조음 위치 =====
    ("ㄴ", "ㄷ", 0.60),
    ("ㄴ", "ㄹ", 0.55),
    ("ㅁ", "ㅂ", 0.60),
    ("ㅇ", "ㄱ", 0.55),

    // ===== 종성 클래스와 평자음 =====
    ("ㄱ*", "ㄱ", 0.90),
    ("ㄷ*", "ㄷ", 0.90),
    ("ㅂ*", "ㅂ", 0.90),
    ("ㄹ*", "ㄹ", 0.90),
];

/// 기본 모음 동치 클래스 (발음이 완전히 같은 기호 집합, 가중치 1.0)
const DEFAULT_EQUIVALENCE: &[&[&str]] = &[
    &["ㅐ", "ㅔ"], // 애/에 - 현대 한국어에서 발음 구분 안 됨
    &["ㅒ", "ㅖ"], // 얘/예 - 현대 한국어에서 발음 구분 안 됨
    &["ㅙ", "ㅞ"], // 왜/웨 - 완전히 같은 발음
];

/// 음소 혼동 테이블
///
/// 비순서 기호 쌍 -> 유사도 가중치 (0.0~1.0)의 부분 함수와
/// 모음 동치 클래스를 담습니다. 만들어진 뒤에는 불변이므로
/// 동시 읽기에 동기화가 필요 없습니다.
#[derive(Debug, Clone)]
pub struct ConfusionTable {
    /// 기호 쌍 -> 가중치 (입력된 방향 그대로 저장, 조회는 양방향)
    weights: HashMap<(String, String), f64>,
    /// 동치 클래스 (같은 클래스 내 기호 쌍은 1.0)
    equivalence: Vec<Vec<String>>,
}

impl Default for ConfusionTable {
    fn default() -> Self {
        let weights = DEFAULT_PAIRS
            .iter()
            .map(|(a, b, w)| ((a.to_string(), b.to_string()), *w))
            .collect();
        let equivalence = DEFAULT_EQUIVALENCE
            .iter()
            .map(|group| group.iter().map(|s| s.to_string()).collect())
            .collect();
        Self {
            weights,
            equivalence,
        }
    }
}

impl ConfusionTable {
    /// JSON 파일에서 테이블 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "pairs": { "ㄷ|ㅈ": 0.85, "ㄱ*|ㄱ": 0.9 },
    ///   "equivalence": [["ㅐ", "ㅔ"], ["ㅙ", "ㅞ"]]
    /// }
    /// ```
    pub fn load(path: &str) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| TableError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// JSON 문자열에서 테이블 로드
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| TableError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// serde_json::Value에서 테이블 생성
    fn from_json_value(value: &serde_json::Value) -> Result<Self, TableError> {
        // 쌍 가중치 파싱
        let pairs_obj = value
            .get("pairs")
            .and_then(|v| v.as_object())
            .ok_or_else(|| TableError::FormatError("pairs 필드가 없습니다".into()))?;

        let mut weights = HashMap::new();

        for (key, val) in pairs_obj {
            // "ㄷ|ㅈ" 형식 파싱
            let parts: Vec<&str> = key.split('|').collect();
            if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
                return Err(TableError::FormatError(format!(
                    "잘못된 쌍 형식: {} (expected 'X|Y')",
                    key
                )));
            }

            let weight = val.as_f64().ok_or_else(|| {
                TableError::FormatError(format!("유효하지 않은 가중치: {}", key))
            })?;
            if !(0.0..=1.0).contains(&weight) {
                return Err(TableError::FormatError(format!(
                    "가중치 범위 초과 (0.0~1.0): {} -> {}",
                    key, weight
                )));
            }

            weights.insert((parts[0].to_string(), parts[1].to_string()), weight);
        }

        // 동치 클래스 파싱
        let equivalence_arr = value
            .get("equivalence")
            .and_then(|v| v.as_array())
            .ok_or_else(|| TableError::FormatError("equivalence 필드가 없습니다".into()))?;

        let mut equivalence = Vec::new();
        for group in equivalence_arr {
            let members = group
                .as_array()
                .ok_or_else(|| TableError::FormatError("동치 클래스는 배열이어야 합니다".into()))?
                .iter()
                .map(|m| {
                    m.as_str()
                        .map(|s| s.to_string())
                        .ok_or_else(|| TableError::FormatError("동치 클래스 원소는 문자열이어야 합니다".into()))
                })
                .collect::<Result<Vec<String>, TableError>>()?;
            if members.len() < 2 {
                return Err(TableError::FormatError(
                    "동치 클래스는 기호가 2개 이상이어야 합니다".into(),
                ));
            }
            equivalence.push(members);
        }

        Ok(Self {
            weights,
            equivalence,
        })
    }

    /// 기호 쌍 가중치 조회 (양방향)
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.weights
            .get(&(a.to_string(), b.to_string()))
            .or_else(|| self.weights.get(&(b.to_string(), a.to_string())))
            .copied()
    }

    /// 두 기호가 같은 동치 클래스에 속하는지 확인
    pub fn is_equivalent(&self, a: &str, b: &str) -> bool {
        self.equivalence
            .iter()
            .any(|group| group.iter().any(|m| m == a) && group.iter().any(|m| m == b))
    }

    /// 등록된 쌍 수
    pub fn pair_count(&self) -> usize {
        self.weights.len()
    }

    /// 동치 클래스 수
    pub fn class_count(&self) -> usize {
        self.equivalence.len()
    }
}

lazy_static! {
    /// 프로세스 전역 기본 테이블 (읽기 전용)
    pub static ref DEFAULT_TABLE: ConfusionTable = ConfusionTable::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ConfusionTable::default();
        assert_eq!(table.pair_count(), DEFAULT_PAIRS.len());
        assert_eq!(table.class_count(), 3);
    }

    #[test]
    fn test_weight_bidirectional() {
        let table = ConfusionTable::default();
        assert_eq!(table.weight("ㄷ", "ㅈ"), Some(0.85));
        assert_eq!(table.weight("ㅈ", "ㄷ"), Some(0.85));
        assert_eq!(table.weight("ㄱ*", "ㄱ"), Some(0.90));
        assert_eq!(table.weight("ㄱ", "ㄱ*"), Some(0.90));
        assert_eq!(table.weight("ㄱ", "ㅏ"), None);
    }

    #[test]
    fn test_equivalence() {
        let table = ConfusionTable::default();
        assert!(table.is_equivalent("ㅐ", "ㅔ"));
        assert!(table.is_equivalent("ㅔ", "ㅐ"));
        assert!(table.is_equivalent("ㅙ", "ㅞ"));
        // ㅚ는 동치가 아니라 0.95 근접 쌍
        assert!(!table.is_equivalent("ㅙ", "ㅚ"));
        assert_eq!(table.weight("ㅙ", "ㅚ"), Some(0.95));
        assert!(!table.is_equivalent("ㅏ", "ㅓ"));
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "pairs": { "ㄷ|ㅈ": 0.85, "ㄱ*|ㄱ": 0.9 },
            "equivalence": [["ㅐ", "ㅔ"]]
        }"#;
        let table = ConfusionTable::from_json(json).unwrap();
        assert_eq!(table.pair_count(), 2);
        assert_eq!(table.weight("ㅈ", "ㄷ"), Some(0.85));
        assert!(table.is_equivalent("ㅐ", "ㅔ"));
        assert!(!table.is_equivalent("ㅙ", "ㅞ"));
    }

    #[test]
    fn test_json_missing_field() {
        let result = ConfusionTable::from_json(r#"{ "pairs": {} }"#);
        assert!(matches!(result, Err(TableError::FormatError(_))));
    }

    #[test]
    fn test_json_bad_pair_key() {
        let json = r#"{ "pairs": { "ㄷㅈ": 0.85 }, "equivalence": [] }"#;
        let result = ConfusionTable::from_json(json);
        assert!(matches!(result, Err(TableError::FormatError(_))));
    }

    #[test]
    fn test_json_weight_out_of_range() {
        let json = r#"{ "pairs": { "ㄷ|ㅈ": 1.5 }, "equivalence": [] }"#;
        let result = ConfusionTable::from_json(json);
        assert!(matches!(result, Err(TableError::FormatError(_))));
    }

    #[test]
    fn test_json_parse_error() {
        let result = ConfusionTable::from_json("not json");
        assert!(matches!(result, Err(TableError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfusionTable::load("/nonexistent/table.json");
        assert!(matches!(result, Err(TableError::IoError(_))));
    }
}
