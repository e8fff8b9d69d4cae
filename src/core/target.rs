//! 목표 발음 분해기
//!
//! 맞춤법 텍스트를 음향 모델과 같은 기호 알파벳의 목표 음소 스트림으로
//! 변환합니다. 종성은 항상 중화 클래스로 내보내므로 모델 출력과 직접
//! 비교할 수 있습니다.

use crate::core::symbol::{neutralize_jongseong, Phoneme};
use crate::core::unicode::{
    choseong_to_jamo_char, decompose_syllable, jongseong_to_jamo_char, jungseong_to_jamo_char,
    HangulError, SILENT_CHOSEONG,
};

/// 목표 텍스트 -> 음소 스트림
///
/// - 공백은 `Boundary` 하나로
/// - 완성형 음절은 초성/중성/종성으로 분해
///   - 묵음 ㅇ 초성은 스트림에 내보내지 않음 (들리는 소리가 아님)
///   - 종성은 중화 클래스로 내보냄 (맞춤법 자음 그대로 쓰지 않음)
/// - 한글 밖 문자는 분류 없이 그대로 통과
pub fn decompose_target(text: &str) -> Vec<Phoneme> {
    let mut stream = Vec::new();

    for c in text.chars() {
        if c == ' ' {
            stream.push(Phoneme::Boundary);
            continue;
        }
        match decompose_syllable(c) {
            Ok((cho, jung, jong)) => {
                if cho != SILENT_CHOSEONG {
                    if let Some(jamo) = choseong_to_jamo_char(cho) {
                        stream.push(Phoneme::Onset(jamo));
                    }
                }
                if let Some(jamo) = jungseong_to_jamo_char(jung) {
                    stream.push(Phoneme::Vowel(jamo));
                }
                if let Some(class) = neutralize_jongseong(jong) {
                    stream.push(Phoneme::Coda(class));
                }
            }
            Err(_) => {
                log::debug!("한글 밖 문자 통과: {:?}", c);
                stream.push(Phoneme::Other(c));
            }
        }
    }

    stream
}

/// 한 음절의 맞춤법 자모 분해 (UI 표시용)
///
/// 중화 없이 맞춤법 그대로의 자모를 반환합니다. 겹받침도 호환용
/// 자모 한 글자로 나옵니다 (닭 -> [ㄷ, ㅏ, ㄺ]).
pub fn decompose_to_jamo(syllable: char) -> Result<Vec<String>, HangulError> {
    let (cho, jung, jong) = decompose_syllable(syllable)?;

    let mut parts = Vec::with_capacity(3);
    if let Some(jamo) = choseong_to_jamo_char(cho) {
        parts.push(jamo.to_string());
    }
    if let Some(jamo) = jungseong_to_jamo_char(jung) {
        parts.push(jamo.to_string());
    }
    if let Some(jamo) = jongseong_to_jamo_char(jong) {
        parts.push(jamo.to_string());
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::CodaClass;

    #[test]
    fn test_simple_syllable() {
        // 가 -> [ㄱ, ㅏ]
        assert_eq!(
            decompose_target("가"),
            vec![Phoneme::Onset('ㄱ'), Phoneme::Vowel('ㅏ')]
        );
    }

    #[test]
    fn test_silent_onset_omitted() {
        // 아 -> [ㅏ] (묵음 ㅇ은 내보내지 않음)
        assert_eq!(decompose_target("아"), vec![Phoneme::Vowel('ㅏ')]);
        // 오이 -> [ㅗ, ㅣ]
        assert_eq!(
            decompose_target("오이"),
            vec![Phoneme::Vowel('ㅗ'), Phoneme::Vowel('ㅣ')]
        );
    }

    #[test]
    fn test_coda_neutralized() {
        // 각 -> [ㄱ, ㅏ, ㄱ*]
        assert_eq!(
            decompose_target("각"),
            vec![
                Phoneme::Onset('ㄱ'),
                Phoneme::Vowel('ㅏ'),
                Phoneme::Coda(CodaClass::Velar)
            ]
        );
        // 꽃 -> [ㄲ, ㅗ, ㄷ*] (ㅊ 종성은 치경 파열음으로 중화)
        assert_eq!(
            decompose_target("꽃"),
            vec![
                Phoneme::Onset('ㄲ'),
                Phoneme::Vowel('ㅗ'),
                Phoneme::Coda(CodaClass::AlveolarStop)
            ]
        );
    }

    #[test]
    fn test_compound_coda_neutralized() {
        // 닭 -> [ㄷ, ㅏ, ㄱ*]
        assert_eq!(
            decompose_target("닭"),
            vec![
                Phoneme::Onset('ㄷ'),
                Phoneme::Vowel('ㅏ'),
                Phoneme::Coda(CodaClass::Velar)
            ]
        );
        // 값 -> [ㄱ, ㅏ, ㅂ*]
        assert_eq!(
            decompose_target("값"),
            vec![
                Phoneme::Onset('ㄱ'),
                Phoneme::Vowel('ㅏ'),
                Phoneme::Coda(CodaClass::LabialStop)
            ]
        );
    }

    #[test]
    fn test_word_with_space() {
        // "가 자" -> [ㄱ, ㅏ, |, ㅈ, ㅏ]
        assert_eq!(
            decompose_target("가 자"),
            vec![
                Phoneme::Onset('ㄱ'),
                Phoneme::Vowel('ㅏ'),
                Phoneme::Boundary,
                Phoneme::Onset('ㅈ'),
                Phoneme::Vowel('ㅏ')
            ]
        );
    }

    #[test]
    fn test_full_word() {
        // 강아지 -> [ㄱ, ㅏ, ㅇ*, ㅏ, ㅈ, ㅣ]
        assert_eq!(
            decompose_target("강아지"),
            vec![
                Phoneme::Onset('ㄱ'),
                Phoneme::Vowel('ㅏ'),
                Phoneme::Coda(CodaClass::NasalNg),
                Phoneme::Vowel('ㅏ'),
                Phoneme::Onset('ㅈ'),
                Phoneme::Vowel('ㅣ')
            ]
        );
    }

    #[test]
    fn test_non_hangul_passthrough() {
        assert_eq!(
            decompose_target("a1"),
            vec![Phoneme::Other('a'), Phoneme::Other('1')]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(decompose_target("").is_empty());
    }

    #[test]
    fn test_decompose_to_jamo() {
        assert_eq!(decompose_to_jamo('가').unwrap(), vec!["ㄱ", "ㅏ"]);
        assert_eq!(decompose_to_jamo('감').unwrap(), vec!["ㄱ", "ㅏ", "ㅁ"]);
        assert_eq!(decompose_to_jamo('강').unwrap(), vec!["ㄱ", "ㅏ", "ㅇ"]);
        // 겹받침은 맞춤법 그대로
        assert_eq!(decompose_to_jamo('닭').unwrap(), vec!["ㄷ", "ㅏ", "ㄺ"]);
        assert!(decompose_to_jamo('a').is_err());
    }
}
