//! 통합 테스트 - 목표 분해 + 스트림 복원 + 채점 전체 흐름

use baleum::{decompose_target, evaluate, parse_stream, reconstruct_decoded, score};

#[test]
fn test_perfect_pronunciation() {
    let decoded = parse_stream("ㄱ ㅏ ㅁ* ㅈ ㅏ");
    let result = evaluate("감자", &decoded);

    assert!(result.is_correct);
    assert_eq!(result.similarity, 1.0);
    assert_eq!(result.matched_count, 5);
    assert_eq!(result.total_count, 5);
    assert!(result.differences.is_empty());
    assert!(result.feedback.contains("완벽해요"));
}

#[test]
fn test_close_pronunciation_is_still_correct() {
    // 강아지를 "강아치"로 발음: ㅈ/ㅊ 혼동 쌍 0.8
    let decoded = parse_stream("ㄱ ㅏ ㅇ* ㅏ ㅊ ㅣ");
    let result = evaluate("강아지", &decoded);

    assert!(result.is_correct);
    assert!((result.similarity - 0.967).abs() < 1e-9);
    assert_eq!(result.differences.len(), 1);
    assert!(result.feedback.contains("비슷한 소리"));
}

#[test]
fn test_plain_consonant_coda_stream() {
    // 모델 출력에 마커 없는 종성이 섞인 실제 스트림
    let decoded = parse_stream("ㄱ ㅏ ㅁ ㅈ ㅏ");
    let result = evaluate("감자", &decoded);

    assert!(result.is_correct);
    assert!((result.similarity - 0.99).abs() < 1e-9);
    assert_eq!(result.matched_count, 5);
    assert_eq!(reconstruct_decoded("ㄱ ㅏ ㅁ ㅈ ㅏ"), "감자");
    assert_eq!(reconstruct_decoded("ㄱ ㅏ ㅇ ㅏ ㅈ ㅣ"), "가아지");
}

#[test]
fn test_vowel_merger_counts_as_exact() {
    // 왜 -> [ㅙ], 모델이 ㅞ로 인식해도 동치 클래스로 1.0
    let decoded = parse_stream("ㅞ");
    let result = evaluate("왜", &decoded);

    assert!(result.is_correct);
    assert_eq!(result.similarity, 1.0);
}

#[test]
fn test_unrelated_utterance_rejected() {
    let decoded = parse_stream("ㄴ ㅏ");
    let result = evaluate("강아지", &decoded);

    assert!(!result.is_correct);
    assert_eq!(result.similarity, 0.0);
    assert!(result.feedback.contains("다시 한번 읽어보세요"));
}

#[test]
fn test_model_special_tokens_are_harmless() {
    let decoded = parse_stream("<s> ㄱ ㅏ ㅁ* ㅈ ㅏ </s> [PAD]");
    let result = evaluate("감자", &decoded);

    assert!(result.is_correct);
    assert_eq!(result.similarity, 1.0);
}

#[test]
fn test_target_and_model_share_alphabet() {
    // 목표 분해가 내보내는 기호는 모델 출력 기호와 그대로 비교 가능
    let target = decompose_target("강아지");
    let decoded = parse_stream("ㄱ ㅏ ㅇ* ㅏ ㅈ ㅣ");
    assert_eq!(target, decoded);
}

#[test]
fn test_reconstruct_for_display() {
    assert_eq!(reconstruct_decoded("ㄱ ㅏ ㅁ* ㅈ ㅏ"), "감자");
    assert_eq!(reconstruct_decoded("ㄱ ㅏ ㅇ* ㅏ ㅈ ㅣ"), "강아지");
    assert_eq!(reconstruct_decoded("ㄱ ㅏ | ㅈ ㅏ"), "가 자");
    assert_eq!(reconstruct_decoded("ㅏ"), "아");
}

#[test]
fn test_self_score_is_always_one() {
    for text in ["가", "감자", "강아지", "닭", "오이 김치"] {
        let stream = decompose_target(text);
        let detail = score(&stream, &stream);
        assert_eq!(detail.similarity, 1.0, "자기 비교 1.0 실패: {}", text);
        assert!(detail.differences.is_empty());
    }
}

#[test]
fn test_multi_word_target() {
    let decoded = parse_stream("ㅗ ㅣ | ㄱ ㅣ ㅁ* ㅊ ㅣ");
    let result = evaluate("오이 김치", &decoded);

    assert!(result.is_correct);
    assert_eq!(result.similarity, 1.0);
    assert_eq!(reconstruct_decoded("ㅗ ㅣ | ㄱ ㅣ ㅁ* ㅊ ㅣ"), "오이 김치");
}
