//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 한글 음절 블록의 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = HANGUL_SYLLABLE_BASE + 11171;

/// 묵음 초성 ㅇ의 초성 인덱스
pub const SILENT_CHOSEONG: u32 = 11;

/// 한글 조합/분해 에러
#[derive(Debug, Clone, PartialEq)]
pub enum HangulError {
    /// 한글 음절 블록 밖의 문자를 분해하려 함
    OutOfRange(char),
    /// 초성/중성/종성 인덱스가 테이블 범위를 벗어남
    InvalidComposition { cho: u32, jung: u32, jong: u32 },
}

impl std::fmt::Display for HangulError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HangulError::OutOfRange(c) => {
                write!(f, "한글 음절이 아닌 문자: {:?} (U+{:04X})", c, *c as u32)
            }
            HangulError::InvalidComposition { cho, jung, jong } => {
                write!(f, "조합 불가 인덱스: 초성 {} 중성 {} 종성 {}", cho, jung, jong)
            }
        }
    }
}

impl std::error::Error for HangulError {}

/// 초성 인덱스 순서의 호환용 자모 (19개)
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서의 호환용 자모 (21개)
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 1~27 순서의 호환용 자모 (0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_JAMO: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 문자가 완성형 한글 음절인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - cho: 초성 인덱스 (0~18)
/// - jung: 중성 인덱스 (0~20)
/// - jong: 종성 인덱스 (0~27, 0 = 종성 없음)
///
/// 범위 밖 인덱스는 에러 (절대 자동 보정하지 않음)
pub fn compose_syllable(cho: u32, jung: u32, jong: u32) -> Result<char, HangulError> {
    if cho >= CHOSEONG_COUNT || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return Err(HangulError::InvalidComposition { cho, jung, jong });
    }
    let code = HANGUL_SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong;
    char::from_u32(code).ok_or(HangulError::InvalidComposition { cho, jung, jong })
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
///
/// 한글 음절 블록 밖의 문자는 `HangulError::OutOfRange`
pub fn decompose_syllable(c: char) -> Result<(u32, u32, u32), HangulError> {
    if !is_hangul_syllable(c) {
        return Err(HangulError::OutOfRange(c));
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jong = offset % JONGSEONG_COUNT;
    let jung = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let cho = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Ok((cho, jung, jong))
}

/// 초성 인덱스 -> 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모 문자
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 문자 (0 = 종성 없음 -> None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    if jong == 0 {
        return None;
    }
    JONGSEONG_JAMO.get(jong as usize - 1).copied()
}

/// 호환용 자모 문자 -> 초성 인덱스
pub fn jamo_char_to_choseong(c: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자모 문자 -> 중성 인덱스
pub fn jamo_char_to_jungseong(c: char) -> Option<u32> {
    JUNGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}
