/// 검색어 문자 분류(classify)와 패턴 렌더링(render)
use crate::compose;
use crate::convert;
use crate::error::{HangulError, Result};
use crate::tables;
use crate::unicode;

use super::{Fragment, SearchOptions};

const FIRST_JUNGSEONG: char = '\u{1161}'; // ㅏ
const LAST_JUNGSEONG: char = '\u{1175}'; // ㅣ
const LAST_JONGSEONG: char = '\u{11C2}'; // ㅎ

/// 검색어 한 글자의 분류 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// 그대로 찾을 문자
    Literal(char),
    /// 초성 검색: 호환 자모 자음 하나로 그 초성의 모든 음절을 찾는다.
    Choseong(char),
    /// 종성 없는 음절: `syllable`부터 (같은 초성, `last_jungseong`, ㅎ 종성)까지
    OpenSyllable { syllable: char, last_jungseong: char },
    /// 겹자음 종성 음절 (입력 중): 둘째 자음이 다음 음절의 초성일 수 있다.
    ClusterJongseong {
        syllable: char,
        first: char,
        second: char,
    },
    /// 홑/쌍자음 종성 음절 (입력 중): 겹종성으로 늘어나거나 다음 음절의 초성일 수 있다.
    SingleJongseong { syllable: char, jongseong: char },
}

impl Token {
    /// 검색어의 한 글자를 분류한다.
    /// `is_last`는 점진 검색(incremental)에서 마지막 글자를 구분하는 데 쓴다.
    pub fn classify(ch: char, options: &SearchOptions, is_last: bool) -> Result<Token> {
        if unicode::is_unsupported_jamo(ch) {
            return Err(HangulError::UnsupportedInput(ch));
        }

        if options.incremental && is_last {
            return Self::classify_incremental(ch);
        }

        // "ㄱ" → "[ㄱ가-깋]"
        if options.choseong_search && unicode::is_compat_jaum(ch) {
            return Ok(Token::Choseong(ch));
        }

        // "가" → "[가-갛]"
        if options.jongseong_completion
            && unicode::is_syllable(ch)
            && compose::get_jongseong(ch)?.is_none()
        {
            return Ok(Token::OpenSyllable {
                syllable: ch,
                last_jungseong: compose::get_jungseong(ch)?,
            });
        }

        Ok(Token::Literal(ch))
    }

    /// 입력 중인 마지막 글자를 분류한다. 두벌식 자판에서 다음 키 입력으로
    /// 도달할 수 있는 음절까지 포함하도록 나눈다.
    fn classify_incremental(ch: char) -> Result<Token> {
        if unicode::is_compat_jaum(ch) {
            return Ok(Token::Choseong(ch));
        }
        if !unicode::is_syllable(ch) {
            return Ok(Token::Literal(ch));
        }

        let (_, jungseong, jongseong) = compose::decompose(ch)?;
        let Some(jongseong) = jongseong else {
            // ㅡ는 ㅡ+ㅣ로 ㅢ가 될 수 있지만 ㅏ는 한 키로 ㅐ를 치므로 확장하지 않는다.
            return Ok(Token::OpenSyllable {
                syllable: ch,
                last_jungseong: tables::composable_jungseong(jungseong).unwrap_or(jungseong),
            });
        };

        match compose::decompose_jongseong(jongseong)? {
            // 쌍자음은 같은 자음 두 번이 아니라 한 키로 입력되므로 분리하지 않는다.
            (first, Some(second)) if first != second => Ok(Token::ClusterJongseong {
                syllable: ch,
                first,
                second,
            }),
            _ => Ok(Token::SingleJongseong {
                syllable: ch,
                jongseong,
            }),
        }
    }

    /// 분류 결과를 검색 조각으로 만든다.
    pub fn render(&self) -> Result<Fragment> {
        match *self {
            Token::Literal(ch) => Ok(Fragment::Literal(ch)),
            Token::Choseong(jaum) => choseong_pattern(jaum),
            Token::OpenSyllable {
                syllable,
                last_jungseong,
            } => {
                let last = compose::set_jungseong(syllable, last_jungseong)?;
                let last = compose::set_jongseong(last, Some(LAST_JONGSEONG))?;
                Ok(Fragment::Pattern(format!("[{syllable}-{last}]")))
            }
            // "읽" → "(?:읽|일[ㄱ가-깋])"
            Token::ClusterJongseong {
                syllable,
                first,
                second,
            } => {
                let jong_removed = compose::set_jongseong(syllable, Some(first))?;
                let cho_search = choseong_pattern(convert::jamo_to_compat_jamo(second)?)?;
                Ok(Fragment::Pattern(format!(
                    "(?:{syllable}|{jong_removed}{cho_search})"
                )))
            }
            // "일" → "(?:[일-잃]|이[ㄹ라-맇])", "잊" → "(?:잊|이[ㅈ자-짛])"
            Token::SingleJongseong {
                syllable,
                jongseong,
            } => {
                let completion = match tables::completable_jongseong(jongseong) {
                    Some(last) => {
                        let last = compose::set_jongseong(syllable, Some(last))?;
                        format!("[{syllable}-{last}]")
                    }
                    None => syllable.to_string(),
                };
                let jong_removed = compose::set_jongseong(syllable, None)?;
                let cho_search = choseong_pattern(convert::jamo_to_compat_jamo(jongseong)?)?;
                Ok(Fragment::Pattern(format!(
                    "(?:{completion}|{jong_removed}{cho_search})"
                )))
            }
        }
    }
}

/// 호환 자모 자음의 초성 검색 조각.
/// 같은 초성의 음절은 코드포인트가 연속하므로 문자 클래스 하나로 표현된다.
/// 초성이 될 수 없는 겹자음은 그 문자 자체.
pub fn choseong_pattern(jaum: char) -> Result<Fragment> {
    match convert::compat_jaum_to_choseong(jaum)? {
        Some(choseong) => {
            let first = compose::compose(choseong, FIRST_JUNGSEONG, None)?;
            let last = compose::compose(choseong, LAST_JUNGSEONG, Some(LAST_JONGSEONG))?;
            Ok(Fragment::Pattern(format!("[{jaum}{first}-{last}]")))
        }
        None => Ok(Fragment::Literal(jaum)),
    }
}
