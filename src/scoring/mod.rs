//! 음소 유사도 채점 시스템
//!
//! 목표 음소 스트림과 모델 출력 스트림을 위치별로 비교해
//! 등급화된 점수와 차이 목록, 정답 판정을 만듭니다.
//!
//! 1. **혼동 테이블**: 아동 발음 장애 연구 데이터 기반의 음소 쌍 가중치
//! 2. **채점 엔진**: 길이 게이트 + 위치별 비교 + 평균 점수
//!
//! # 사용 예시
//!
//! ```
//! use baleum::core::symbol::parse_stream;
//! use baleum::scoring::engine::evaluate;
//!
//! let decoded = parse_stream("ㄱ ㅏ ㅁ* ㅈ ㅏ");
//! let result = evaluate("감자", &decoded);
//! assert!(result.is_correct);
//! ```

pub mod engine;
pub mod table;

pub use engine::{evaluate, pairwise_score, score, Diff, EvaluationResult, ScoreDetail};
pub use table::{ConfusionTable, TableError, DEFAULT_TABLE};
