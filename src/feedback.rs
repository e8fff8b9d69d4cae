//! 유사도 점수 기반 피드백 메시지 생성
//!
//! 난독증 아동 대상이므로 모든 구간에서 긍정적인 어조를 유지합니다.
//! 점수 구간 -> 메시지 매핑은 결정적이고 부수 효과가 없습니다.

use crate::scoring::engine::Diff;

/// 발음이 실제로 같게 나는 모음 그룹 (피드백 문구 판단용)
const VOWEL_MERGER_GROUPS: &[&[&str]] = &[
    &["ㅐ", "ㅔ"],
    &["ㅒ", "ㅖ"],
    &["ㅙ", "ㅞ", "ㅚ"], // 왜/웨/외 - 대부분의 화자가 구분 못함
];

/// 피드백 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// 완벽한 발음 (95% 이상)
    Perfect,
    /// 매우 좋은 발음 (85~95%)
    NearPerfect,
    /// 괜찮은 발음 (70~85%)
    Encouraging,
    /// 비슷한 발음 (50~70%)
    Similar,
    /// 오답 (50% 미만)
    Retry,
}

impl FeedbackTier {
    /// 평균 유사도 -> 등급
    pub fn from_score(similarity: f64) -> Self {
        if similarity >= 0.95 {
            FeedbackTier::Perfect
        } else if similarity >= 0.85 {
            FeedbackTier::NearPerfect
        } else if similarity >= 0.70 {
            FeedbackTier::Encouraging
        } else if similarity >= 0.50 {
            FeedbackTier::Similar
        } else {
            FeedbackTier::Retry
        }
    }
}

/// 두 모음이 발음상 동일한지 확인
pub fn is_same_pronunciation(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    VOWEL_MERGER_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// 유사도와 차이 목록으로 피드백 메시지 생성
pub fn generate_feedback(target_word: &str, similarity: f64, differences: &[Diff]) -> String {
    match FeedbackTier::from_score(similarity) {
        FeedbackTier::Perfect => {
            format!("완벽해요! '{}' 발음이 정확해요!", target_word)
        }
        FeedbackTier::NearPerfect => near_perfect_message(target_word, differences),
        FeedbackTier::Encouraging => {
            format!(
                "좋아요! '{}'를 읽으려고 노력했네요. 조금만 더 연습해봐요!",
                target_word
            )
        }
        FeedbackTier::Similar => {
            format!(
                "'{}'와 비슷하게 들렸어요. 다시 한번 천천히 읽어볼까요?",
                target_word
            )
        }
        FeedbackTier::Retry => {
            format!(
                "'{}'를 다시 한번 읽어보세요. 천천히 소리내어 읽어봐요!",
                target_word
            )
        }
    }
}

/// 매우 좋은 발음: 주요 차이점 1~2개를 골라 설명을 덧붙인다
fn near_perfect_message(target_word: &str, differences: &[Diff]) -> String {
    let main_diffs: Vec<&Diff> = differences
        .iter()
        .filter(|d| d.similarity > 0.0)
        .take(2)
        .collect();

    if main_diffs.is_empty() {
        return format!("잘했어요! '{}'를 거의 정확하게 읽었어요!", target_word);
    }

    if main_diffs.len() == 1 {
        let diff = main_diffs[0];

        // 발음이 같은 모음인 경우 특별 메시지
        if is_same_pronunciation(&diff.expected, &diff.actual) {
            return format!(
                "정답이에요! '{}'에서 '{}'와 '{}'는 같은 발음이에요!",
                target_word, diff.expected, diff.actual
            );
        }

        // 가중치 높은 유사 발음
        if diff.similarity >= 0.8 {
            return format!(
                "잘했어요! '{}'를 거의 정확하게 읽었어요. ('{}'과 '{}'은 비슷한 소리예요)",
                target_word, diff.expected, diff.actual
            );
        }
    }

    let diff_str = main_diffs
        .iter()
        .map(|d| format!("'{}'과 '{}'", d.expected, d.actual))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "잘했어요! '{}'를 거의 정확하게 읽었어요. ({}은 비슷한 소리예요)",
        target_word, diff_str
    )
}
