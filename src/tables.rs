//! 자모 ↔ 호환 자모 변환 테이블
//!
//! 유니코드 문자 이름(`HANGUL CHOSEONG KIYEOK` ↔ `HANGUL LETTER KIYEOK`)을
//! 대응시켜 한 번 생성한 결과를 상수로 옮겨 적었다. 현대 한글만 다룬다.

/// 초성 오프셋 → 호환 자모 자음
pub static CHOSEONG_TO_COMPAT_JAUM: [char; 19] = [
    'ㄱ', // 0: U+1100
    'ㄲ', // 1: U+1101
    'ㄴ', // 2: U+1102
    'ㄷ', // 3: U+1103
    'ㄸ', // 4: U+1104
    'ㄹ', // 5: U+1105
    'ㅁ', // 6: U+1106
    'ㅂ', // 7: U+1107
    'ㅃ', // 8: U+1108
    'ㅅ', // 9: U+1109
    'ㅆ', // 10: U+110A
    'ㅇ', // 11: U+110B
    'ㅈ', // 12: U+110C
    'ㅉ', // 13: U+110D
    'ㅊ', // 14: U+110E
    'ㅋ', // 15: U+110F
    'ㅌ', // 16: U+1110
    'ㅍ', // 17: U+1111
    'ㅎ', // 18: U+1112
];

/// 종성 오프셋 - 1 → 호환 자모 자음
pub static JONGSEONG_TO_COMPAT_JAUM: [char; 27] = [
    'ㄱ', // 1: U+11A8
    'ㄲ', // 2: U+11A9
    'ㄳ', // 3: U+11AA
    'ㄴ', // 4: U+11AB
    'ㄵ', // 5: U+11AC
    'ㄶ', // 6: U+11AD
    'ㄷ', // 7: U+11AE
    'ㄹ', // 8: U+11AF
    'ㄺ', // 9: U+11B0
    'ㄻ', // 10: U+11B1
    'ㄼ', // 11: U+11B2
    'ㄽ', // 12: U+11B3
    'ㄾ', // 13: U+11B4
    'ㄿ', // 14: U+11B5
    'ㅀ', // 15: U+11B6
    'ㅁ', // 16: U+11B7
    'ㅂ', // 17: U+11B8
    'ㅄ', // 18: U+11B9
    'ㅅ', // 19: U+11BA
    'ㅆ', // 20: U+11BB
    'ㅇ', // 21: U+11BC
    'ㅈ', // 22: U+11BD
    'ㅊ', // 23: U+11BE
    'ㅋ', // 24: U+11BF
    'ㅌ', // 25: U+11C0
    'ㅍ', // 26: U+11C1
    'ㅎ', // 27: U+11C2
];

/// 호환 자모 자음 오프셋 → 초성
/// 겹자음 11개(ㄳ ㄵ ㄶ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅄ)는 현대 초성이 없다.
pub static COMPAT_JAUM_TO_CHOSEONG: [Option<char>; 30] = [
    Some('\u{1100}'), // ㄱ
    Some('\u{1101}'), // ㄲ
    None, // ㄳ
    Some('\u{1102}'), // ㄴ
    None, // ㄵ
    None, // ㄶ
    Some('\u{1103}'), // ㄷ
    Some('\u{1104}'), // ㄸ
    Some('\u{1105}'), // ㄹ
    None, // ㄺ
    None, // ㄻ
    None, // ㄼ
    None, // ㄽ
    None, // ㄾ
    None, // ㄿ
    None, // ㅀ
    Some('\u{1106}'), // ㅁ
    Some('\u{1107}'), // ㅂ
    Some('\u{1108}'), // ㅃ
    None, // ㅄ
    Some('\u{1109}'), // ㅅ
    Some('\u{110A}'), // ㅆ
    Some('\u{110B}'), // ㅇ
    Some('\u{110C}'), // ㅈ
    Some('\u{110D}'), // ㅉ
    Some('\u{110E}'), // ㅊ
    Some('\u{110F}'), // ㅋ
    Some('\u{1110}'), // ㅌ
    Some('\u{1111}'), // ㅍ
    Some('\u{1112}'), // ㅎ
];

/// 호환 자모 자음 오프셋 → 종성
/// ㄸ ㅃ ㅉ은 현대 종성이 없어 확장 자모 B의 종성으로 대응한다.
pub static COMPAT_JAUM_TO_JONGSEONG: [char; 30] = [
    '\u{11A8}', // ㄱ
    '\u{11A9}', // ㄲ
    '\u{11AA}', // ㄳ
    '\u{11AB}', // ㄴ
    '\u{11AC}', // ㄵ
    '\u{11AD}', // ㄶ
    '\u{11AE}', // ㄷ
    '\u{D7CD}', // ㄸ
    '\u{11AF}', // ㄹ
    '\u{11B0}', // ㄺ
    '\u{11B1}', // ㄻ
    '\u{11B2}', // ㄼ
    '\u{11B3}', // ㄽ
    '\u{11B4}', // ㄾ
    '\u{11B5}', // ㄿ
    '\u{11B6}', // ㅀ
    '\u{11B7}', // ㅁ
    '\u{11B8}', // ㅂ
    '\u{D7E6}', // ㅃ
    '\u{11B9}', // ㅄ
    '\u{11BA}', // ㅅ
    '\u{11BB}', // ㅆ
    '\u{11BC}', // ㅇ
    '\u{11BD}', // ㅈ
    '\u{D7F9}', // ㅉ
    '\u{11BE}', // ㅊ
    '\u{11BF}', // ㅋ
    '\u{11C0}', // ㅌ
    '\u{11C1}', // ㅍ
    '\u{11C2}', // ㅎ
];

/// 종성 오프셋 - 1 → (첫째 종성, 둘째 종성)
/// 쌍자음은 (X, X), 겹자음은 (X, Y), 홑자음은 (X, None).
pub static DECOMPOSE_JONGSEONG: [(char, Option<char>); 27] = [
    ('\u{11A8}', None), // ㄱ
    ('\u{11A8}', Some('\u{11A8}')), // ㄲ
    ('\u{11A8}', Some('\u{11BA}')), // ㄳ
    ('\u{11AB}', None), // ㄴ
    ('\u{11AB}', Some('\u{11BD}')), // ㄵ
    ('\u{11AB}', Some('\u{11C2}')), // ㄶ
    ('\u{11AE}', None), // ㄷ
    ('\u{11AF}', None), // ㄹ
    ('\u{11AF}', Some('\u{11A8}')), // ㄺ
    ('\u{11AF}', Some('\u{11B7}')), // ㄻ
    ('\u{11AF}', Some('\u{11B8}')), // ㄼ
    ('\u{11AF}', Some('\u{11BA}')), // ㄽ
    ('\u{11AF}', Some('\u{11C0}')), // ㄾ
    ('\u{11AF}', Some('\u{11C1}')), // ㄿ
    ('\u{11AF}', Some('\u{11C2}')), // ㅀ
    ('\u{11B7}', None), // ㅁ
    ('\u{11B8}', None), // ㅂ
    ('\u{11B8}', Some('\u{11BA}')), // ㅄ
    ('\u{11BA}', None), // ㅅ
    ('\u{11BA}', Some('\u{11BA}')), // ㅆ
    ('\u{11BC}', None), // ㅇ
    ('\u{11BD}', None), // ㅈ
    ('\u{11BE}', None), // ㅊ
    ('\u{11BF}', None), // ㅋ
    ('\u{11C0}', None), // ㅌ
    ('\u{11C1}', None), // ㅍ
    ('\u{11C2}', None), // ㅎ
];

// ── 두벌식 입력 기준 확장 테이블 ──

/// 한 번 더 모음을 입력해 겹모음이 될 수 있는 중성 → 도달 가능한 마지막 중성.
/// ㅐ처럼 한 키로 입력되는 모음은 포함하지 않는다.
pub static COMPOSABLE_JUNGSEONG: &[(char, char)] = &[
    ('\u{1169}', '\u{116C}'), // ㅗ → ㅘ ㅙ ㅚ
    ('\u{116E}', '\u{1171}'), // ㅜ → ㅝ ㅞ ㅟ
    ('\u{1173}', '\u{1174}'), // ㅡ → ㅢ
];

/// 한 번 더 자음을 입력해 겹종성이 될 수 있는 종성 → 도달 가능한 마지막 종성.
pub static COMPLETABLE_JONGSEONG: &[(char, char)] = &[
    ('\u{11A8}', '\u{11AA}'), // ㄱ → ㄲ ㄳ
    ('\u{11AB}', '\u{11AD}'), // ㄴ → ㄵ ㄶ
    ('\u{11AF}', '\u{11B6}'), // ㄹ → ㄺ ... ㅀ
    ('\u{11B8}', '\u{11B9}'), // ㅂ → ㅄ
    ('\u{11BA}', '\u{11BB}'), // ㅅ → ㅆ
];

/// 겹모음으로 확장 가능한 중성이면 도달 가능한 마지막 중성을 반환
pub fn composable_jungseong(jungseong: char) -> Option<char> {
    COMPOSABLE_JUNGSEONG
        .iter()
        .find(|(from, _)| *from == jungseong)
        .map(|(_, to)| *to)
}

/// 겹종성으로 확장 가능한 종성이면 도달 가능한 마지막 종성을 반환
pub fn completable_jongseong(jongseong: char) -> Option<char> {
    COMPLETABLE_JONGSEONG
        .iter()
        .find(|(from, _)| *from == jongseong)
        .map(|(_, to)| *to)
}
