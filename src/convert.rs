//! 자모 ↔ 호환 자모 변환
//!
//! 초성/종성은 테이블로, 중성은 호환 자모 모음과 순서가 같으므로 오프셋 덧셈으로 변환한다.

use crate::error::{HangulError, Result};
use crate::tables;
use crate::unicode::{self, MODERN_COMPAT_MOUM_BASE, MODERN_JUNGSEONG_BASE};

/// 첫가끝 자모 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoKind {
    Choseong,
    Jungseong,
    Jongseong,
}

/// 현대 자모를 종류와 오프셋으로 분류한다. 종성 오프셋은 1부터 시작한다.
pub fn classify_jamo(jamo: char) -> Result<(JamoKind, u32)> {
    if let Ok(offset) = unicode::choseong_offset(jamo) {
        return Ok((JamoKind::Choseong, offset));
    }
    if let Ok(offset) = unicode::jungseong_offset(jamo) {
        return Ok((JamoKind::Jungseong, offset));
    }
    if let Ok(offset) = unicode::jongseong_offset(jamo) {
        return Ok((JamoKind::Jongseong, offset));
    }
    Err(HangulError::InvalidJamo {
        ch: jamo,
        expected: "Choseong, Jungseong or Jongseong",
    })
}

/// 현대 자모(초/중/종성)를 호환 자모로 변환한다.
///
/// ```
/// use ricecake::convert::jamo_to_compat_jamo;
///
/// assert_eq!(jamo_to_compat_jamo('\u{1100}').unwrap(), 'ㄱ');
/// assert_eq!(jamo_to_compat_jamo('\u{1161}').unwrap(), 'ㅏ');
/// assert_eq!(jamo_to_compat_jamo('\u{11AA}').unwrap(), 'ㄳ');
/// ```
pub fn jamo_to_compat_jamo(jamo: char) -> Result<char> {
    let (kind, offset) = classify_jamo(jamo)?;
    Ok(match kind {
        JamoKind::Choseong => tables::CHOSEONG_TO_COMPAT_JAUM[offset as usize],
        JamoKind::Jungseong => unicode::to_char(MODERN_COMPAT_MOUM_BASE + offset),
        JamoKind::Jongseong => tables::JONGSEONG_TO_COMPAT_JAUM[(offset - 1) as usize],
    })
}

fn compat_jaum_index(jaum: char) -> Result<usize> {
    unicode::compat_jaum_offset(jaum)
        .map(|offset| offset as usize)
        .map_err(|_| HangulError::InvalidJamo {
            ch: jaum,
            expected: "Compatibility Jaum",
        })
}

/// 호환 자모 자음을 초성으로 변환한다.
/// 초성으로 쓸 수 없는 겹자음(ㄳ, ㄺ 등)은 `Ok(None)`.
pub fn compat_jaum_to_choseong(jaum: char) -> Result<Option<char>> {
    Ok(tables::COMPAT_JAUM_TO_CHOSEONG[compat_jaum_index(jaum)?])
}

/// 호환 자모 모음을 중성으로 변환한다.
pub fn compat_moum_to_jungseong(moum: char) -> Result<char> {
    let offset = unicode::compat_moum_offset(moum).map_err(|_| HangulError::InvalidJamo {
        ch: moum,
        expected: "Compatibility Moum",
    })?;
    Ok(unicode::to_char(MODERN_JUNGSEONG_BASE + offset))
}

/// 호환 자모 자음을 종성으로 변환한다.
/// ㄸ, ㅃ, ㅉ은 확장 자모 B의 종성(U+D7CD, U+D7E6, U+D7F9)이 된다.
pub fn compat_jaum_to_jongseong(jaum: char) -> Result<char> {
    Ok(tables::COMPAT_JAUM_TO_JONGSEONG[compat_jaum_index(jaum)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_jamo() {
        assert_eq!(classify_jamo('\u{1100}').unwrap(), (JamoKind::Choseong, 0));
        assert_eq!(classify_jamo('\u{1175}').unwrap(), (JamoKind::Jungseong, 20));
        assert_eq!(classify_jamo('\u{11A8}').unwrap(), (JamoKind::Jongseong, 1));
        // 옛한글, 채움 문자, 호환 자모
        assert!(classify_jamo('\u{1113}').is_err());
        assert!(classify_jamo('\u{115F}').is_err());
        assert!(classify_jamo('ㄱ').is_err());
    }

    #[test]
    fn test_jamo_to_compat_jamo() {
        assert_eq!(jamo_to_compat_jamo('\u{1112}').unwrap(), 'ㅎ');
        assert_eq!(jamo_to_compat_jamo('\u{1175}').unwrap(), 'ㅣ');
        assert_eq!(jamo_to_compat_jamo('\u{11B9}').unwrap(), 'ㅄ');
        assert_eq!(jamo_to_compat_jamo('\u{11C2}').unwrap(), 'ㅎ');
        assert!(matches!(
            jamo_to_compat_jamo('가'),
            Err(HangulError::InvalidJamo { ch: '가', .. })
        ));
    }

    #[test]
    fn test_every_modern_jamo_has_compat_jamo() {
        let modern = (0x1100..=0x1112).chain(0x1161..=0x1175).chain(0x11A8..=0x11C2);
        for code in modern {
            let jamo = char::from_u32(code).unwrap();
            let compat = jamo_to_compat_jamo(jamo).unwrap();
            assert!(unicode::is_compat_jamo(compat), "U+{code:04X}");
        }
    }

    #[test]
    fn test_compat_jaum_to_choseong() {
        assert_eq!(compat_jaum_to_choseong('ㄱ').unwrap(), Some('\u{1100}'));
        assert_eq!(compat_jaum_to_choseong('ㅎ').unwrap(), Some('\u{1112}'));
        assert_eq!(compat_jaum_to_choseong('ㄳ').unwrap(), None);
        assert_eq!(compat_jaum_to_choseong('ㅀ').unwrap(), None);
        assert!(compat_jaum_to_choseong('ㅏ').is_err());
    }

    #[test]
    fn test_exactly_eleven_jaum_without_choseong() {
        let missing: Vec<char> = (0x3131..=0x314E)
            .filter_map(char::from_u32)
            .filter(|&jaum| compat_jaum_to_choseong(jaum).unwrap().is_none())
            .collect();
        assert_eq!(
            missing,
            vec!['ㄳ', 'ㄵ', 'ㄶ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅄ']
        );
    }

    #[test]
    fn test_compat_moum_to_jungseong() {
        assert_eq!(compat_moum_to_jungseong('ㅏ').unwrap(), '\u{1161}');
        assert_eq!(compat_moum_to_jungseong('ㅢ').unwrap(), '\u{1174}');
        assert_eq!(compat_moum_to_jungseong('ㅣ').unwrap(), '\u{1175}');
        assert!(compat_moum_to_jungseong('ㄱ').is_err());
    }

    #[test]
    fn test_compat_moum_roundtrip() {
        for code in 0x314F..=0x3163 {
            let moum = char::from_u32(code).unwrap();
            let jung = compat_moum_to_jungseong(moum).unwrap();
            assert_eq!(jamo_to_compat_jamo(jung).unwrap(), moum);
        }
    }

    #[test]
    fn test_compat_jaum_to_jongseong() {
        assert_eq!(compat_jaum_to_jongseong('ㄱ').unwrap(), '\u{11A8}');
        assert_eq!(compat_jaum_to_jongseong('ㄺ').unwrap(), '\u{11B0}');
        assert_eq!(compat_jaum_to_jongseong('ㅎ').unwrap(), '\u{11C2}');
        // 현대 종성이 없는 쌍자음
        assert_eq!(compat_jaum_to_jongseong('ㄸ').unwrap(), '\u{D7CD}');
        assert_eq!(compat_jaum_to_jongseong('ㅃ').unwrap(), '\u{D7E6}');
        assert_eq!(compat_jaum_to_jongseong('ㅉ').unwrap(), '\u{D7F9}');
        assert!(compat_jaum_to_jongseong('ㅏ').is_err());
    }
}
