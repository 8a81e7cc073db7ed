//! 한글 검색 패턴 생성
//!
//! 검색어를 한 글자씩 정규식 조각으로 바꾼다.
//! - 초성 검색: "ㄱ" → `[ㄱ가-깋]`
//! - 종성 완성: "가" → `[가-갛]`
//! - 점진 검색: 마지막 글자를 입력 중인 글자로 보고 다음 키 입력까지 포함
//!
//! 첫가끝 자모(NFD 분해 텍스트)와 옛한글/확장/반각 자모는 `UnsupportedInput`으로 거부한다.

pub mod token;

use std::fmt;
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::error::Result;

pub use token::{Token, choseong_pattern};

/// 검색 옵션
#[derive(uniffi::Record, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// 호환 자모 자음으로 그 초성을 가진 모든 음절을 찾는다.
    pub choseong_search: bool,
    /// 종성 없는 음절로 같은 초성+중성의 모든 음절을 찾는다.
    pub jongseong_completion: bool,
    /// 마지막 글자를 입력 중인 글자로 보고 이어질 입력까지 찾는다.
    pub incremental: bool,
    /// 예약됨. 아직 동작에 영향을 주지 않는다.
    pub fuzzy: bool,
}

/// 검색어 한 글자에 대응하는 정규식 조각
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// 그대로 찾을 문자 (출력 시 이스케이프)
    Literal(char),
    /// 문자 클래스 또는 선택(alternation) 패턴
    Pattern(String),
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Literal(ch) => {
                let mut buf = [0u8; 4];
                f.write_str(&regex::escape(ch.encode_utf8(&mut buf)))
            }
            Fragment::Pattern(pattern) => f.write_str(pattern),
        }
    }
}

/// 검색어의 조각을 차례로 만들어 내는 반복자.
/// 에러를 한 번 내보내면 끝난다.
pub struct SearchPattern<'a> {
    chars: Peekable<Chars<'a>>,
    options: SearchOptions,
    failed: bool,
}

impl<'a> SearchPattern<'a> {
    fn new(term: &'a str, options: SearchOptions) -> Self {
        if options.fuzzy {
            log::debug!("fuzzy search is reserved and has no effect yet");
        }
        SearchPattern {
            chars: term.chars().peekable(),
            options,
            failed: false,
        }
    }
}

impl Iterator for SearchPattern<'_> {
    type Item = Result<Fragment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let ch = self.chars.next()?;
        let is_last = self.chars.peek().is_none();

        let fragment = Token::classify(ch, &self.options, is_last).and_then(|t| t.render());
        match &fragment {
            Ok(fragment) => log::trace!("{ch:?} → {fragment}"),
            Err(err) => {
                log::trace!("{ch:?} rejected: {err}");
                self.failed = true;
            }
        }
        Some(fragment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            self.chars.size_hint()
        }
    }
}

impl FusedIterator for SearchPattern<'_> {}

/// 검색어를 조각 단위로 변환한다. 변환은 반복자를 소비할 때 일어난다.
///
/// ```
/// use ricecake::search::{generate_search_pattern, Fragment, SearchOptions};
///
/// let options = SearchOptions { choseong_search: true, ..Default::default() };
/// let fragments: Vec<Fragment> = generate_search_pattern("ㄱa", options)
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(fragments[0], Fragment::Pattern("[ㄱ가-깋]".to_string()));
/// assert_eq!(fragments[1], Fragment::Literal('a'));
/// ```
pub fn generate_search_pattern(term: &str, options: SearchOptions) -> SearchPattern<'_> {
    SearchPattern::new(term, options)
}

/// 검색어 전체를 하나의 정규식 문자열로 만든다.
pub fn build_pattern(term: &str, options: SearchOptions) -> Result<String> {
    generate_search_pattern(term, options)
        .map(|fragment| fragment.map(|f| f.to_string()))
        .collect()
}
