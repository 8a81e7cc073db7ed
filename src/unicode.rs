//! 한글 유니코드 블록 상수 및 오프셋 계산
//!
//! - 블록 경계 상수 (음절, 자모, 호환 자모, 확장 자모, 반각 자모)
//! - 블록 판별 (`is_*`)
//! - 블록 내 오프셋 계산 (`*_offset`), 범위 밖이면 `OutOfRange`

use crate::error::{HangulError, Result};

// ── 한글 음절 (U+AC00 ~ U+D7A3) ──

/// 한글 음절 시작 '가' (U+AC00)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 '힣' (U+D7A3)
pub const SYLLABLE_END: u32 = 0xD7A3;

pub const CHOSEONG_COUNT: u32 = 19;
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

pub const CHOSEONG_COEF: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT; // 588
pub const JUNGSEONG_COEF: u32 = JONGSEONG_COUNT; // 28

// ── 한글 자모 (U+1100 ~ U+11FF) ──

pub const JAMO_BASE: u32 = 0x1100;
pub const JAMO_END: u32 = 0x11FF;

/// 초성 시작 'ᄀ' (U+1100)
pub const MODERN_CHOSEONG_BASE: u32 = 0x1100;
/// 초성 끝 'ᄒ' (U+1112)
pub const MODERN_CHOSEONG_END: u32 = 0x1112;
pub const ARCHAIC_CHOSEONG_BASE: u32 = 0x1113;
pub const ARCHAIC_CHOSEONG_END: u32 = 0x115E;

pub const CHOSEONG_FILLER: u32 = 0x115F;
pub const JUNGSEONG_FILLER: u32 = 0x1160;

/// 중성 시작 'ᅡ' (U+1161)
pub const MODERN_JUNGSEONG_BASE: u32 = 0x1161;
/// 중성 끝 'ᅵ' (U+1175)
pub const MODERN_JUNGSEONG_END: u32 = 0x1175;
pub const ARCHAIC_JUNGSEONG_BASE: u32 = 0x1176;
pub const ARCHAIC_JUNGSEONG_END: u32 = 0x11A7;

/// 종성 시작 'ᆨ' (U+11A8)
pub const MODERN_JONGSEONG_BASE: u32 = 0x11A8;
/// 종성 끝 'ᇂ' (U+11C2)
pub const MODERN_JONGSEONG_END: u32 = 0x11C2;
pub const ARCHAIC_JONGSEONG_BASE: u32 = 0x11C3;
pub const ARCHAIC_JONGSEONG_END: u32 = 0x11FF;

// ── 호환 자모 (U+3130 ~ U+318F) ──

/// U+3130, U+318F는 예약 코드포인트지만 블록에 포함된다.
pub const COMPAT_JAMO_BASE: u32 = 0x3130;
pub const COMPAT_JAMO_END: u32 = 0x318F;

/// 호환 자모 자음 시작 'ㄱ' (U+3131)
pub const MODERN_COMPAT_JAUM_BASE: u32 = 0x3131;
/// 호환 자모 자음 끝 'ㅎ' (U+314E)
pub const MODERN_COMPAT_JAUM_END: u32 = 0x314E;
/// 호환 자모 모음 시작 'ㅏ' (U+314F)
pub const MODERN_COMPAT_MOUM_BASE: u32 = 0x314F;
/// 호환 자모 모음 끝 'ㅣ' (U+3163)
pub const MODERN_COMPAT_MOUM_END: u32 = 0x3163;

pub const COMPAT_HANGUL_FILLER: u32 = 0x3164;

pub const ARCHAIC_COMPAT_JAUM_BASE: u32 = 0x3165;
pub const ARCHAIC_COMPAT_JAUM_END: u32 = 0x3186;
pub const ARCHAIC_COMPAT_MOUM_BASE: u32 = 0x3187;
pub const ARCHAIC_COMPAT_MOUM_END: u32 = 0x318E;

// ── 지원하지 않는 블록 ──

pub const JAMO_EXTENDED_A_BASE: u32 = 0xA960;
pub const JAMO_EXTENDED_A_END: u32 = 0xA97F;

pub const JAMO_EXTENDED_B_BASE: u32 = 0xD7B0;
pub const JAMO_EXTENDED_B_END: u32 = 0xD7FF;

pub const HALFWIDTH_JAMO_BASE: u32 = 0xFFA0;
pub const HALFWIDTH_JAMO_END: u32 = 0xFFDC;

// ── 블록 판별 ──

/// 한글 완성형 음절인지 (가~힣)
pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_END).contains(&(ch as u32))
}

/// 한글 자모 블록인지 (U+1100~U+11FF, 옛한글 포함)
///
/// 키보드로 입력한 낱자(ㄱ, ㅏ)는 호환 자모이므로 여기에 해당하지 않는다.
pub fn is_jamo(ch: char) -> bool {
    (JAMO_BASE..=JAMO_END).contains(&(ch as u32))
}

/// 한글 호환 자모 블록인지 (U+3130~U+318F)
pub fn is_compat_jamo(ch: char) -> bool {
    (COMPAT_JAMO_BASE..=COMPAT_JAMO_END).contains(&(ch as u32))
}

/// 음절, 자모, 호환 자모 중 하나인지. 확장 자모 A/B는 포함하지 않는다.
pub fn is_hangul(ch: char) -> bool {
    is_syllable(ch) || is_jamo(ch) || is_compat_jamo(ch)
}

/// 현대 한글 초성인지 (U+1100~U+1112)
pub fn is_choseong(ch: char) -> bool {
    (MODERN_CHOSEONG_BASE..=MODERN_CHOSEONG_END).contains(&(ch as u32))
}

/// 현대 한글 중성인지 (U+1161~U+1175)
pub fn is_jungseong(ch: char) -> bool {
    (MODERN_JUNGSEONG_BASE..=MODERN_JUNGSEONG_END).contains(&(ch as u32))
}

/// 현대 한글 종성인지 (U+11A8~U+11C2)
pub fn is_jongseong(ch: char) -> bool {
    (MODERN_JONGSEONG_BASE..=MODERN_JONGSEONG_END).contains(&(ch as u32))
}

/// 현대 호환 자모 자음인지 (ㄱ~ㅎ, 겹자음 포함)
pub fn is_compat_jaum(ch: char) -> bool {
    (MODERN_COMPAT_JAUM_BASE..=MODERN_COMPAT_JAUM_END).contains(&(ch as u32))
}

/// 현대 호환 자모 모음인지 (ㅏ~ㅣ)
pub fn is_compat_moum(ch: char) -> bool {
    (MODERN_COMPAT_MOUM_BASE..=MODERN_COMPAT_MOUM_END).contains(&(ch as u32))
}

/// 자모 블록의 옛한글 초성/중성/종성인지
pub fn is_archaic_jamo(ch: char) -> bool {
    let c = ch as u32;
    (ARCHAIC_CHOSEONG_BASE..=ARCHAIC_CHOSEONG_END).contains(&c)
        || (ARCHAIC_JUNGSEONG_BASE..=ARCHAIC_JUNGSEONG_END).contains(&c)
        || (ARCHAIC_JONGSEONG_BASE..=ARCHAIC_JONGSEONG_END).contains(&c)
}

/// 옛한글 호환 자모인지 (ㅥ~ㆎ)
pub fn is_archaic_compat_jamo(ch: char) -> bool {
    let c = ch as u32;
    (ARCHAIC_COMPAT_JAUM_BASE..=ARCHAIC_COMPAT_JAUM_END).contains(&c)
        || (ARCHAIC_COMPAT_MOUM_BASE..=ARCHAIC_COMPAT_MOUM_END).contains(&c)
}

/// 한글 채움 문자인지 (초성 채움, 중성 채움, 호환 채움)
pub fn is_hangul_filler(ch: char) -> bool {
    matches!(
        ch as u32,
        CHOSEONG_FILLER | JUNGSEONG_FILLER | COMPAT_HANGUL_FILLER
    )
}

/// 검색 패턴 생성기가 거부하는 문자인지.
/// 첫가끝 자모 블록 전체(NFD 분해 텍스트 포함), 확장 자모 A/B, 반각 자모.
pub fn is_unsupported_jamo(ch: char) -> bool {
    let c = ch as u32;
    is_jamo(ch)
        || (JAMO_EXTENDED_A_BASE..=JAMO_EXTENDED_A_END).contains(&c)
        || (JAMO_EXTENDED_B_BASE..=JAMO_EXTENDED_B_END).contains(&c)
        || (HALFWIDTH_JAMO_BASE..=HALFWIDTH_JAMO_END).contains(&c)
}

// ── 오프셋 ──

/// 블록 내부로 계산된 코드포인트를 문자로 변환한다.
/// 한글 블록은 서로게이트 영역과 겹치지 않으므로 대체 문자는 나오지 않는다.
pub(crate) fn to_char(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn offset_in(ch: char, base: u32, end: u32, expected: &'static str) -> Result<u32> {
    let c = ch as u32;
    if (base..=end).contains(&c) {
        Ok(c - base)
    } else {
        Err(HangulError::OutOfRange { ch, expected })
    }
}

/// 음절 오프셋 (가 = 0)
pub fn syllable_offset(ch: char) -> Result<u32> {
    offset_in(ch, SYLLABLE_BASE, SYLLABLE_END, "Hangul Syllable")
}

/// 자모 블록 오프셋 (U+1100 = 0)
pub fn jamo_offset(ch: char) -> Result<u32> {
    offset_in(ch, JAMO_BASE, JAMO_END, "Hangul Jamo")
}

/// 호환 자모 블록 오프셋 (U+3130 = 0)
pub fn compat_jamo_offset(ch: char) -> Result<u32> {
    offset_in(ch, COMPAT_JAMO_BASE, COMPAT_JAMO_END, "Hangul Compatibility Jamo")
}

/// 초성 오프셋 (ᄀ = 0, ᄒ = 18)
pub fn choseong_offset(ch: char) -> Result<u32> {
    offset_in(
        ch,
        MODERN_CHOSEONG_BASE,
        MODERN_CHOSEONG_END,
        "modern Hangul Jamo Choseong",
    )
}

/// 중성 오프셋 (ᅡ = 0, ᅵ = 20)
pub fn jungseong_offset(ch: char) -> Result<u32> {
    offset_in(
        ch,
        MODERN_JUNGSEONG_BASE,
        MODERN_JUNGSEONG_END,
        "modern Hangul Jamo Jungseong",
    )
}

/// 종성 오프셋 (ᆨ = 1, ᇂ = 27)
///
/// 0은 "종성 없음"을 뜻하므로 종성 오프셋만 1부터 시작한다.
/// 그대로 `SYLLABLE_BASE + cho * 588 + jung * 28 + jong`에 쓸 수 있다.
pub fn jongseong_offset(ch: char) -> Result<u32> {
    offset_in(
        ch,
        MODERN_JONGSEONG_BASE,
        MODERN_JONGSEONG_END,
        "modern Hangul Jamo Jongseong",
    )
    .map(|offset| offset + 1)
}

/// 호환 자모 자음 오프셋 (ㄱ = 0, ㅎ = 29)
pub fn compat_jaum_offset(ch: char) -> Result<u32> {
    offset_in(
        ch,
        MODERN_COMPAT_JAUM_BASE,
        MODERN_COMPAT_JAUM_END,
        "modern Hangul Compatibility Jamo Jaum",
    )
}

/// 호환 자모 모음 오프셋 (ㅏ = 0, ㅣ = 20)
pub fn compat_moum_offset(ch: char) -> Result<u32> {
    offset_in(
        ch,
        MODERN_COMPAT_MOUM_BASE,
        MODERN_COMPAT_MOUM_END,
        "modern Hangul Compatibility Jamo Moum",
    )
}
