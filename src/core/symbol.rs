//! 음소 기호 분류 및 종성 중화 규칙
//!
//! 음향 모델이 출력하는 토큰 어휘를 닫힌 집합으로 정의합니다.
//! 종성 토큰은 7종성 중화 규칙에 따라 `*` 마커가 붙은 대표 기호로 나타납니다
//! (예: `ㄱ*`, `ㅁ*`).

use crate::core::unicode::{jamo_char_to_choseong, jamo_char_to_jungseong};

/// 경계 토큰 (단어/띄어쓰기 구분)
pub const BOUNDARY_TOKEN: &str = "|";

/// 음향 모델의 비음소 특수 토큰
const IGNORE_TOKENS: [&str; 4] = ["<s>", "</s>", "[PAD]", "[UNK]"];

/// 7종성 중화 클래스
///
/// 종성 위치에서 여러 자음이 하나의 대표음으로 합쳐지는 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodaClass {
    /// 연구개 파열음 (ㄱ, ㄲ, ㅋ -> ㄱ*)
    Velar,
    /// 치경 파열음 (ㄷ, ㅌ, ㅅ, ㅆ, ㅈ, ㅊ, ㅎ -> ㄷ*)
    AlveolarStop,
    /// 양순 파열음 (ㅂ, ㅍ -> ㅂ*)
    LabialStop,
    /// 유음 (ㄹ -> ㄹ*)
    Liquid,
    /// 치경 비음 (ㄴ -> ㄴ*)
    NasalN,
    /// 양순 비음 (ㅁ -> ㅁ*)
    NasalM,
    /// 연구개 비음 (ㅇ -> ㅇ*)
    NasalNg,
}

impl CodaClass {
    /// 모델 어휘의 토큰 표기 (`*` 마커 포함)
    pub fn as_str(&self) -> &'static str {
        match self {
            CodaClass::Velar => "ㄱ*",
            CodaClass::AlveolarStop => "ㄷ*",
            CodaClass::LabialStop => "ㅂ*",
            CodaClass::Liquid => "ㄹ*",
            CodaClass::NasalN => "ㄴ*",
            CodaClass::NasalM => "ㅁ*",
            CodaClass::NasalNg => "ㅇ*",
        }
    }

    /// 토큰 표기 -> 중화 클래스
    pub fn from_token(token: &str) -> Option<CodaClass> {
        match token {
            "ㄱ*" => Some(CodaClass::Velar),
            "ㄷ*" => Some(CodaClass::AlveolarStop),
            "ㅂ*" => Some(CodaClass::LabialStop),
            "ㄹ*" => Some(CodaClass::Liquid),
            "ㄴ*" => Some(CodaClass::NasalN),
            "ㅁ*" => Some(CodaClass::NasalM),
            "ㅇ*" => Some(CodaClass::NasalNg),
            _ => None,
        }
    }

    /// 재음절화 시 다음 음절의 초성으로 쓰이는 대표 자음
    pub fn onset_char(&self) -> char {
        match self {
            CodaClass::Velar => 'ㄱ',
            CodaClass::AlveolarStop => 'ㄷ',
            CodaClass::LabialStop => 'ㅂ',
            CodaClass::Liquid => 'ㄹ',
            CodaClass::NasalN => 'ㄴ',
            CodaClass::NasalM => 'ㅁ',
            CodaClass::NasalNg => 'ㅇ',
        }
    }

    /// 음절 조합에 쓰이는 종성 인덱스
    pub fn jongseong_index(&self) -> u32 {
        match self {
            CodaClass::Velar => 1,       // ㄱ
            CodaClass::AlveolarStop => 7, // ㄷ
            CodaClass::LabialStop => 17, // ㅂ
            CodaClass::Liquid => 8,      // ㄹ
            CodaClass::NasalN => 4,      // ㄴ
            CodaClass::NasalM => 16,     // ㅁ
            CodaClass::NasalNg => 21,    // ㅇ
        }
    }
}

/// 분류된 음소 기호
///
/// 모든 토큰은 정확히 하나의 종류로 분류됩니다. 같은 자음이라도
/// 초성 위치(`Onset`)와 종성 위치(`Coda`)는 토큰 표기가 다릅니다
/// (종성은 `*` 마커).
#[derive(Debug, Clone, PartialEq)]
pub enum Phoneme {
    /// 초성 자음 (묵음 ㅇ 포함 19개)
    Onset(char),
    /// 중성 모음 (단모음 + 이중모음 21개)
    Vowel(char),
    /// 종성 (7종성 중화 클래스)
    Coda(CodaClass),
    /// 단어 경계
    Boundary,
    /// 비음소 토큰 (패딩, 문장 마커, 미등록 토큰)
    Ignore,
    /// 어휘 밖 문자 (그대로 통과)
    Other(char),
}

impl Phoneme {
    /// 토큰 텍스트를 음소로 분류 (전체 함수: 어떤 입력도 실패하지 않음)
    pub fn classify(token: &str) -> Phoneme {
        if token == BOUNDARY_TOKEN {
            return Phoneme::Boundary;
        }
        if IGNORE_TOKENS.contains(&token) {
            return Phoneme::Ignore;
        }
        if let Some(class) = CodaClass::from_token(token) {
            return Phoneme::Coda(class);
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if jamo_char_to_jungseong(c).is_some() {
                    Phoneme::Vowel(c)
                } else if jamo_char_to_choseong(c).is_some() {
                    Phoneme::Onset(c)
                } else {
                    Phoneme::Other(c)
                }
            }
            // 여러 글자인데 어휘에 없는 토큰은 마커류로 간주
            _ => Phoneme::Ignore,
        }
    }

    /// 비교/표시에 쓰이는 정규 토큰 텍스트
    pub fn text(&self) -> String {
        match self {
            Phoneme::Onset(c) | Phoneme::Vowel(c) | Phoneme::Other(c) => c.to_string(),
            Phoneme::Coda(class) => class.as_str().to_string(),
            Phoneme::Boundary => BOUNDARY_TOKEN.to_string(),
            Phoneme::Ignore => String::new(),
        }
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Phoneme::Vowel(_))
    }

    /// 비음소 토큰인지 확인
    pub fn is_ignore(&self) -> bool {
        matches!(self, Phoneme::Ignore)
    }
}

impl std::fmt::Display for Phoneme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// 자음 자모 -> 종성 중화 클래스
///
/// 종성 위치에서 어떤 자음들이 하나로 합쳐지는지에 대한 단일 기준.
/// 자음 19개 전체에 대해 정의됩니다 (모음은 None).
pub fn neutralize(consonant: char) -> Option<CodaClass> {
    match consonant {
        'ㄱ' | 'ㄲ' | 'ㅋ' => Some(CodaClass::Velar),
        'ㄷ' | 'ㄸ' | 'ㅌ' | 'ㅅ' | 'ㅆ' | 'ㅈ' | 'ㅉ' | 'ㅊ' | 'ㅎ' => {
            Some(CodaClass::AlveolarStop)
        }
        'ㅂ' | 'ㅃ' | 'ㅍ' => Some(CodaClass::LabialStop),
        'ㄹ' => Some(CodaClass::Liquid),
        'ㄴ' => Some(CodaClass::NasalN),
        'ㅁ' => Some(CodaClass::NasalM),
        'ㅇ' => Some(CodaClass::NasalNg),
        _ => None,
    }
}

/// 종성 인덱스 (1~27) -> 중화 클래스
///
/// 겹받침은 단독 발음 기준으로 대표음 하나로 떨어집니다
/// (ㄺ -> ㄱ*, ㄼ -> ㄹ*, ㅄ -> ㅂ* 등).
pub fn neutralize_jongseong(jong: u32) -> Option<CodaClass> {
    match jong {
        0 => None,
        // ㄱ ㄲ ㅋ / ㄳ ㄺ
        1 | 2 | 24 | 3 | 9 => Some(CodaClass::Velar),
        // ㄴ ㄵ ㄶ
        4 | 5 | 6 => Some(CodaClass::NasalN),
        // ㄷ ㅅ ㅆ ㅈ ㅊ ㅌ ㅎ
        7 | 19 | 20 | 22 | 23 | 25 | 27 => Some(CodaClass::AlveolarStop),
        // ㄹ ㄼ ㄽ ㄾ ㅀ
        8 | 11 | 12 | 13 | 15 => Some(CodaClass::Liquid),
        // ㅁ ㄻ
        16 | 10 => Some(CodaClass::NasalM),
        // ㅂ ㅍ ㄿ ㅄ
        17 | 26 | 14 | 18 => Some(CodaClass::LabialStop),
        // ㅇ
        21 => Some(CodaClass::NasalNg),
        _ => None,
    }
}

/// CTC 디코딩 결과 텍스트를 음소 스트림으로 변환
///
/// 공백으로 토큰을 나누고 각 토큰을 분류합니다. 특수 토큰도
/// `Ignore`로 유지되므로 소비자 쪽에서 필요에 따라 거릅니다.
pub fn parse_stream(raw: &str) -> Vec<Phoneme> {
    raw.split_whitespace().map(Phoneme::classify).collect()
}
