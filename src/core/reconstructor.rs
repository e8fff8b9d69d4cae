//! 음소 스트림 -> 완성형 한글 복원 상태 기계
//!
//! 음향 모델이 내보낸 미분절 음소 열을 음절로 다시 묶습니다.
//! 핵심 모호성은 "이 자음이 현재 음절의 종성인가, 다음 음절의
//! 초성인가"이며, 2토큰 미리보기로 해소합니다: 자음 바로 뒤에
//! 모음이 오면 다음 음절의 초성, 아니면 현재 음절의 종성입니다.
//! 표기(`*` 마커)가 아니라 문맥이 종성 여부를 결정합니다.

use crate::core::symbol::{neutralize, parse_stream, Phoneme};
use crate::core::unicode::{
    compose_syllable, jamo_char_to_choseong, jamo_char_to_jungseong, SILENT_CHOSEONG,
};

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 음절 시작을 탐색 중
    Idle,
    /// 초성만 확보됨
    HaveOnset { cho: u32 },
    /// 초성+중성 확보, 종성은 미확정
    HaveVowel { cho: u32, jung: u32 },
}

/// 음소 스트림 복원기
///
/// 토큰 버퍼와 커서로 왼쪽에서 오른쪽으로 한 번만 지나가며,
/// 되돌아가기(backtracking)는 하지 않습니다.
struct Reconstructor {
    tokens: Vec<Phoneme>,
    pos: usize,
    state: State,
    output: String,
}

impl Reconstructor {
    /// 비음소 토큰은 음절 묶기의 위치 계산에 끼어들면 안 되므로
    /// 버퍼를 만들 때 걸러낸다.
    fn new(stream: &[Phoneme]) -> Self {
        Self {
            tokens: stream.iter().filter(|p| !p.is_ignore()).cloned().collect(),
            pos: 0,
            state: State::Idle,
            output: String::new(),
        }
    }

    /// 커서에서 ahead만큼 앞의 토큰
    fn peek(&self, ahead: usize) -> Option<&Phoneme> {
        self.tokens.get(self.pos + ahead)
    }

    fn run(mut self) -> String {
        while self.pos < self.tokens.len() {
            let token = self.tokens[self.pos].clone();
            match self.state {
                State::Idle => self.step_idle(token),
                State::HaveOnset { cho } => self.step_have_onset(cho, token),
                State::HaveVowel { cho, jung } => self.step_have_vowel(cho, jung, token),
            }
        }
        self.finish()
    }

    fn step_idle(&mut self, token: Phoneme) {
        match token {
            // new()에서 걸러지므로 실행 중에는 나타나지 않는다
            Phoneme::Ignore => {}
            Phoneme::Boundary => self.output.push(' '),
            Phoneme::Other(c) => {
                log::debug!("어휘 밖 문자 통과: {:?}", c);
                self.output.push(c);
            }
            Phoneme::Vowel(v) => {
                // 모음 단독 시작: 묵음 초성으로 음절을 연다
                match jamo_char_to_jungseong(v) {
                    Some(jung) => {
                        self.state = State::HaveVowel {
                            cho: SILENT_CHOSEONG,
                            jung,
                        };
                    }
                    None => log::warn!("중성 인덱스 없음, 토큰 건너뜀: {}", v),
                }
            }
            Phoneme::Onset(c) => {
                // 바로 뒤에 모음이 없는 초성은 음절을 이루지 못하는 잡음
                if matches!(self.peek(1), Some(Phoneme::Vowel(_))) {
                    match jamo_char_to_choseong(c) {
                        Some(cho) => self.state = State::HaveOnset { cho },
                        None => log::warn!("초성 인덱스 없음, 토큰 건너뜀: {}", c),
                    }
                } else {
                    log::debug!("비음절 자음 버림: {}", c);
                }
            }
            Phoneme::Coda(class) => {
                // 종성 토큰 뒤에 모음이 오면 다음 음절의 초성으로 재음절화
                if matches!(self.peek(1), Some(Phoneme::Vowel(_))) {
                    if let Some(cho) = jamo_char_to_choseong(class.onset_char()) {
                        self.state = State::HaveOnset { cho };
                    }
                } else {
                    log::debug!("비음절 종성 버림: {}", class.as_str());
                }
            }
        }
        self.pos += 1;
    }

    fn step_have_onset(&mut self, cho: u32, token: Phoneme) {
        match token {
            Phoneme::Vowel(v) => match jamo_char_to_jungseong(v) {
                Some(jung) => {
                    self.state = State::HaveVowel { cho, jung };
                    self.pos += 1;
                }
                None => {
                    log::warn!("중성 인덱스 없음, 음절 버림: {}", v);
                    self.state = State::Idle;
                    self.pos += 1;
                }
            },
            // 모음이 아니면 보류 중인 초성을 버리고 같은 위치에서 재탐색
            _ => {
                self.state = State::Idle;
            }
        }
    }

    fn step_have_vowel(&mut self, cho: u32, jung: u32, token: Phoneme) {
        let next_is_vowel = matches!(self.peek(1), Some(Phoneme::Vowel(_)));
        match token {
            // 종성 토큰은 그 뒤에 모음이 없을 때만 이 음절의 종성
            Phoneme::Coda(class) if !next_is_vowel => {
                self.emit_syllable(cho, jung, class.jongseong_index());
                self.pos += 1;
            }
            // 평자음도 같은 문맥이면 종성: 중화 클래스의 대표음으로 붙는다
            Phoneme::Onset(c) if !next_is_vowel => match neutralize(c) {
                Some(class) => {
                    self.emit_syllable(cho, jung, class.jongseong_index());
                    self.pos += 1;
                }
                None => self.emit_syllable(cho, jung, 0),
            },
            // 그 외에는 종성 없이 닫고, 토큰은 소비하지 않은 채 재탐색
            _ => {
                self.emit_syllable(cho, jung, 0);
            }
        }
        self.state = State::Idle;
    }

    /// 스트림 끝: 보류 중인 음절을 경계와 같은 규칙으로 닫는다
    fn finish(mut self) -> String {
        match self.state {
            State::Idle => {}
            State::HaveOnset { .. } => {
                log::debug!("스트림 끝의 비음절 자음 버림");
            }
            State::HaveVowel { cho, jung } => self.emit_syllable(cho, jung, 0),
        }
        self.output
    }

    /// 음절 조합 후 출력. 조합 실패는 해당 음절만 버리고 계속 진행.
    fn emit_syllable(&mut self, cho: u32, jung: u32, jong: u32) {
        match compose_syllable(cho, jung, jong) {
            Ok(c) => self.output.push(c),
            Err(e) => log::warn!("음절 조합 실패, 건너뜀: {}", e),
        }
    }
}

/// 음소 스트림을 사람이 읽을 수 있는 완성형 텍스트로 복원
pub fn reconstruct(stream: &[Phoneme]) -> String {
    Reconstructor::new(stream).run()
}

/// CTC 디코딩 결과 텍스트를 바로 복원 (UI 표시용 편의 함수)
pub fn reconstruct_decoded(raw: &str) -> String {
    reconstruct(&parse_stream(raw))
}
