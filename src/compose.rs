//! 음절 합성/분해
//!
//! `음절 = SYLLABLE_BASE + 초성 * 588 + 중성 * 28 + 종성`
//! (종성 0 = 종성 없음). 모든 연산은 새 문자를 돌려줄 뿐 입력을 바꾸지 않는다.

use crate::error::{HangulError, Result};
use crate::tables;
use crate::unicode::{
    self, CHOSEONG_COEF, CHOSEONG_COUNT, JONGSEONG_COUNT, JUNGSEONG_COEF, JUNGSEONG_COUNT,
    MODERN_CHOSEONG_BASE, MODERN_JONGSEONG_BASE, MODERN_JUNGSEONG_BASE, SYLLABLE_BASE,
};

fn choseong_index(ch: char) -> Result<u32> {
    unicode::choseong_offset(ch).map_err(|_| HangulError::InvalidJamo {
        ch,
        expected: "Choseong",
    })
}

fn jungseong_index(ch: char) -> Result<u32> {
    unicode::jungseong_offset(ch).map_err(|_| HangulError::InvalidJamo {
        ch,
        expected: "Jungseong",
    })
}

fn jongseong_index(ch: Option<char>) -> Result<u32> {
    match ch {
        Some(ch) => unicode::jongseong_offset(ch).map_err(|_| HangulError::InvalidJamo {
            ch,
            expected: "Jongseong",
        }),
        None => Ok(0),
    }
}

fn syllable_index(ch: char) -> Result<u32> {
    unicode::syllable_offset(ch).map_err(|_| HangulError::NotASyllable(ch))
}

fn choseong_char(l: u32) -> char {
    unicode::to_char(MODERN_CHOSEONG_BASE + l)
}

fn jungseong_char(v: u32) -> char {
    unicode::to_char(MODERN_JUNGSEONG_BASE + v)
}

/// 종성 인덱스(1~27)를 종성 문자로. 0이면 None.
fn jongseong_char(t: u32) -> Option<char> {
    (t != 0).then(|| unicode::to_char(MODERN_JONGSEONG_BASE + t - 1))
}

// ── 인덱스 단위 합성/분해 ──

/// 초성(L), 중성(V), 종성(T) 인덱스로 한글 음절을 합성한다.
/// - `l`: 초성 인덱스 (0~18)
/// - `v`: 중성 인덱스 (0~20)
/// - `t`: 종성 인덱스 (0~27, 0이면 종성 없음)
pub fn compose_offsets(l: u32, v: u32, t: u32) -> Result<char> {
    for (index, count, expected) in [
        (l, CHOSEONG_COUNT, "Choseong"),
        (v, JUNGSEONG_COUNT, "Jungseong"),
        (t, JONGSEONG_COUNT, "Jongseong"),
    ] {
        if index >= count {
            return Err(HangulError::IndexOutOfRange { index, expected });
        }
    }
    Ok(unicode::to_char(
        SYLLABLE_BASE + l * CHOSEONG_COEF + v * JUNGSEONG_COEF + t,
    ))
}

/// 한글 음절을 초성(L), 중성(V), 종성(T) 인덱스로 분해한다.
/// 종성이 없으면 t = 0.
pub fn decompose_offsets(syllable: char) -> Result<(u32, u32, u32)> {
    let offset = syllable_index(syllable)?;
    let l = offset / CHOSEONG_COEF;
    let v = offset % CHOSEONG_COEF / JUNGSEONG_COEF;
    let t = offset % JUNGSEONG_COEF;
    Ok((l, v, t))
}

// ── 자모 단위 합성/분해 ──

/// 초성, 중성, 종성(선택)을 한글 음절로 합성한다.
///
/// ```
/// use ricecake::compose::compose;
///
/// assert_eq!(compose('\u{1112}', '\u{1161}', Some('\u{11AB}')).unwrap(), '한');
/// assert_eq!(compose('\u{1100}', '\u{1161}', None).unwrap(), '가');
/// ```
pub fn compose(choseong: char, jungseong: char, jongseong: Option<char>) -> Result<char> {
    let l = choseong_index(choseong)?;
    let v = jungseong_index(jungseong)?;
    let t = jongseong_index(jongseong)?;
    compose_offsets(l, v, t)
}

/// 한글 음절을 (초성, 중성, 종성)으로 분해한다. 종성이 없으면 None.
pub fn decompose(syllable: char) -> Result<(char, char, Option<char>)> {
    let (l, v, t) = decompose_offsets(syllable)?;
    Ok((choseong_char(l), jungseong_char(v), jongseong_char(t)))
}

/// 음절의 초성
pub fn get_choseong(syllable: char) -> Result<char> {
    let offset = syllable_index(syllable)?;
    Ok(choseong_char(offset / CHOSEONG_COEF))
}

/// 음절의 중성
pub fn get_jungseong(syllable: char) -> Result<char> {
    let offset = syllable_index(syllable)?;
    Ok(jungseong_char(offset % CHOSEONG_COEF / JUNGSEONG_COEF))
}

/// 음절의 종성. 종성이 없으면 None.
pub fn get_jongseong(syllable: char) -> Result<Option<char>> {
    let offset = syllable_index(syllable)?;
    Ok(jongseong_char(offset % JUNGSEONG_COEF))
}

/// 초성만 바꾼 음절
pub fn set_choseong(syllable: char, choseong: char) -> Result<char> {
    let offset = syllable_index(syllable)?;
    let l = choseong_index(choseong)?;
    Ok(unicode::to_char(
        SYLLABLE_BASE + l * CHOSEONG_COEF + offset % CHOSEONG_COEF,
    ))
}

/// 중성만 바꾼 음절
pub fn set_jungseong(syllable: char, jungseong: char) -> Result<char> {
    let offset = syllable_index(syllable)?;
    let v = jungseong_index(jungseong)?;
    let old_v = offset % CHOSEONG_COEF / JUNGSEONG_COEF;
    Ok(unicode::to_char(
        SYLLABLE_BASE + offset - old_v * JUNGSEONG_COEF + v * JUNGSEONG_COEF,
    ))
}

/// 종성만 바꾼 음절. `None`이면 종성을 지운다.
pub fn set_jongseong(syllable: char, jongseong: Option<char>) -> Result<char> {
    let offset = syllable_index(syllable)?;
    let t = jongseong_index(jongseong)?;
    Ok(unicode::to_char(
        SYLLABLE_BASE + offset - offset % JUNGSEONG_COEF + t,
    ))
}

/// 겹종성을 두 종성으로 분리한다.
/// 쌍자음은 (X, Some(X)), 겹자음은 (X, Some(Y)), 홑자음은 (X, None).
pub fn decompose_jongseong(jongseong: char) -> Result<(char, Option<char>)> {
    let t = jongseong_index(Some(jongseong))?;
    Ok(tables::DECOMPOSE_JONGSEONG[(t - 1) as usize])
}
