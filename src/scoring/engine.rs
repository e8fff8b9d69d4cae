//! 음소 스트림 유사도 채점 엔진
//!
//! 목표 스트림과 모델 출력 스트림을 위치별로 비교합니다.
//! 정렬(edit distance)은 하지 않습니다: 길이 차이가 30%를 넘으면
//! 아예 다른 발화로 보고 즉시 0점 처리합니다.

use serde::Serialize;

use crate::config::EvalConfig;
use crate::core::symbol::Phoneme;
use crate::core::target::decompose_target;
use crate::feedback::generate_feedback;
use crate::scoring::table::{ConfusionTable, DEFAULT_TABLE};

/// 위치별 차이 항목
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diff {
    /// 스트림 내 위치 (0부터)
    pub position: usize,
    /// 기대한 기호 (추가 발음이면 빈 문자열)
    pub expected: String,
    /// 실제 기호 (누락 발음이면 빈 문자열)
    pub actual: String,
    /// 해당 위치의 쌍 유사도
    pub similarity: f64,
}

/// 스트림 비교 결과
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDetail {
    /// 평균 유사도 (소수 셋째 자리 반올림)
    pub similarity: f64,
    /// 유사도가 매칭 기준 이상인 위치 수
    pub matched_count: usize,
    /// 비교한 전체 위치 수
    pub total_count: usize,
    /// 1.0 미만으로 채점된 위치들
    pub differences: Vec<Diff>,
}

/// 평가 결과 (채점 + 판정 + 피드백)
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    /// 목표 텍스트
    pub target: String,
    /// 정답 판정
    pub is_correct: bool,
    /// 평균 유사도
    pub similarity: f64,
    /// 매칭된 위치 수
    pub matched_count: usize,
    /// 전체 위치 수
    pub total_count: usize,
    /// 차이 목록
    pub differences: Vec<Diff>,
    /// 사용자 피드백 메시지
    pub feedback: String,
}

/// 두 음소 기호의 쌍 유사도 (대칭)
///
/// 1. 같은 기호 -> 1.0
/// 2. 같은 동치 클래스 -> 1.0
/// 3. 혼동 테이블에 있으면 그 가중치
/// 4. 종성 마커(`*`)를 떼면 같은 기호 -> 0.95
/// 5. 그 외 -> 0.0
pub fn pairwise_score(table: &ConfusionTable, a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if table.is_equivalent(a, b) {
        return 1.0;
    }
    if let Some(weight) = table.weight(a, b) {
        return weight;
    }
    if !a.is_empty() && a.replace('*', "") == b.replace('*', "") {
        return 0.95;
    }
    0.0
}

/// 소수 셋째 자리 반올림
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// 목표 스트림 vs 모델 출력 스트림 채점
///
/// 비음소(`Ignore`) 기호는 양쪽 모두 위치 계산에서 제외합니다.
pub fn score_with(
    table: &ConfusionTable,
    config: &EvalConfig,
    target: &[Phoneme],
    decoded: &[Phoneme],
) -> ScoreDetail {
    let target_tokens: Vec<String> = target
        .iter()
        .filter(|p| !p.is_ignore())
        .map(|p| p.text())
        .collect();
    let decoded_tokens: Vec<String> = decoded
        .iter()
        .filter(|p| !p.is_ignore())
        .map(|p| p.text())
        .collect();

    let target_len = target_tokens.len();
    let decoded_len = decoded_tokens.len();

    // 빈 입력 처리
    if target_len == 0 && decoded_len == 0 {
        return ScoreDetail {
            similarity: 1.0,
            matched_count: 0,
            total_count: 0,
            differences: Vec::new(),
        };
    }
    if target_len == 0 || decoded_len == 0 {
        return ScoreDetail {
            similarity: 0.0,
            matched_count: 0,
            total_count: target_len.max(decoded_len),
            differences: Vec::new(),
        };
    }

    let max_len = target_len.max(decoded_len);
    let min_len = target_len.min(decoded_len);

    // 길이 차이가 너무 크면 아예 다른 단어로 판정
    let len_diff_ratio = target_len.abs_diff(decoded_len) as f64 / max_len as f64;
    if len_diff_ratio > config.max_length_diff_ratio {
        log::debug!("길이 차이가 너무 큼: {} vs {}", target_len, decoded_len);
        return ScoreDetail {
            similarity: 0.0,
            matched_count: 0,
            total_count: max_len,
            differences: Vec::new(),
        };
    }

    // 위치별 유사도 계산
    let mut total_similarity = 0.0;
    let mut similarities = Vec::with_capacity(min_len);
    let mut differences = Vec::new();

    for i in 0..max_len {
        if i >= target_len {
            // 추가 발음
            differences.push(Diff {
                position: i,
                expected: String::new(),
                actual: decoded_tokens[i].clone(),
                similarity: 0.0,
            });
            continue;
        }
        if i >= decoded_len {
            // 누락 발음
            differences.push(Diff {
                position: i,
                expected: target_tokens[i].clone(),
                actual: String::new(),
                similarity: 0.0,
            });
            continue;
        }

        let sim = pairwise_score(table, &target_tokens[i], &decoded_tokens[i]);
        total_similarity += sim;
        similarities.push(sim);

        if sim < 1.0 {
            differences.push(Diff {
                position: i,
                expected: target_tokens[i].clone(),
                actual: decoded_tokens[i].clone(),
                similarity: sim,
            });
        }
    }

    // 매칭 기준 이상인 위치 수 (보고용, 정답 판정과는 별개)
    let matched_count = similarities
        .iter()
        .filter(|&&sim| sim >= config.match_threshold)
        .count();

    ScoreDetail {
        similarity: round3(total_similarity / max_len as f64),
        matched_count,
        total_count: max_len,
        differences,
    }
}

/// 기본 테이블/설정으로 채점
pub fn score(target: &[Phoneme], decoded: &[Phoneme]) -> ScoreDetail {
    score_with(&DEFAULT_TABLE, &EvalConfig::default(), target, decoded)
}

/// 목표 텍스트 vs 모델 출력 스트림 평가 (채점 + 판정 + 피드백)
pub fn evaluate_with(
    table: &ConfusionTable,
    config: &EvalConfig,
    target_text: &str,
    decoded: &[Phoneme],
) -> EvaluationResult {
    let target_stream = decompose_target(target_text);
    let detail = score_with(table, config, &target_stream, decoded);

    let is_correct = detail.similarity >= config.correct_threshold;
    let feedback = generate_feedback(target_text, detail.similarity, &detail.differences);

    log::info!(
        "유사도 평가 - 목표: {}, 유사도: {:.1}%, 판정: {}",
        target_text,
        detail.similarity * 100.0,
        if is_correct { "정답" } else { "오답" }
    );
    if !detail.differences.is_empty() {
        log::debug!("차이점: {:?}", &detail.differences[..detail.differences.len().min(3)]);
    }

    EvaluationResult {
        target: target_text.to_string(),
        is_correct,
        similarity: detail.similarity,
        matched_count: detail.matched_count,
        total_count: detail.total_count,
        differences: detail.differences,
        feedback,
    }
}

/// 기본 테이블/설정으로 평가
pub fn evaluate(target_text: &str, decoded: &[Phoneme]) -> EvaluationResult {
    evaluate_with(&DEFAULT_TABLE, &EvalConfig::default(), target_text, decoded)
}
