//! 평가 설정 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 평가 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EvalConfig {
    /// 정답 판정 기준 (평균 유사도)
    #[serde(default = "default_correct_threshold")]
    pub correct_threshold: f64,
    /// 위치별 매칭 기준 (보고용 matched_count 계산)
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    /// 허용하는 최대 길이 차이 비율 (초과 시 즉시 0점)
    #[serde(default = "default_max_length_diff_ratio")]
    pub max_length_diff_ratio: f64,
}

fn default_correct_threshold() -> f64 {
    0.85
}

fn default_match_threshold() -> f64 {
    0.85
}

fn default_max_length_diff_ratio() -> f64 {
    0.3
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            correct_threshold: default_correct_threshold(),
            match_threshold: default_match_threshold(),
            max_length_diff_ratio: default_max_length_diff_ratio(),
        }
    }
}

impl EvalConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 정답 판정 기준 설정
    pub fn with_correct_threshold(mut self, threshold: f64) -> Self {
        self.correct_threshold = threshold;
        self
    }

    /// 매칭 기준 설정
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// 길이 차이 비율 설정
    pub fn with_max_length_diff_ratio(mut self, ratio: f64) -> Self {
        self.max_length_diff_ratio = ratio;
        self
    }
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> EvalConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용: {}", e);
            EvalConfig::default()
        }),
        Err(_) => EvalConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvalConfig::default();
        assert!((config.correct_threshold - 0.85).abs() < f64::EPSILON);
        assert!((config.match_threshold - 0.85).abs() < f64::EPSILON);
        assert!((config.max_length_diff_ratio - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvalConfig::new()
            .with_correct_threshold(0.9)
            .with_match_threshold(0.8)
            .with_max_length_diff_ratio(0.5);
        assert!((config.correct_threshold - 0.9).abs() < f64::EPSILON);
        assert!((config.match_threshold - 0.8).abs() < f64::EPSILON);
        assert!((config.max_length_diff_ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = EvalConfig::new().with_correct_threshold(0.9);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EvalConfig = serde_json::from_str(&json).unwrap();
        assert!((parsed.correct_threshold - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 설정 파일에 일부 필드만 있는 경우 나머지는 기본값
        let json = r#"{"correct_threshold": 0.9}"#;
        let config: EvalConfig = serde_json::from_str(json).unwrap();
        assert!((config.correct_threshold - 0.9).abs() < f64::EPSILON);
        assert!((config.match_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config(Path::new("/nonexistent/eval_config.json"));
        assert!((config.correct_threshold - 0.85).abs() < f64::EPSILON);
    }
}
