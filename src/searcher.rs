//! 정규식 기반 한글 검색기: 검색 옵션을 들고 패턴 생성과 매칭을 묶는다.
use regex::Regex;

use crate::error::Result;
use crate::profile::SearchProfile;
use crate::search::{self, SearchOptions};

/// 한글 검색기
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: SearchOptions,
    /// 옵션을 가져온 프로필. 옵션을 직접 바꾸면 비운다.
    profile: Option<SearchProfile>,
}

impl Searcher {
    pub fn new(options: SearchOptions) -> Self {
        Searcher {
            options,
            profile: None,
        }
    }

    pub fn from_profile(profile: SearchProfile) -> Self {
        Searcher {
            options: profile.options,
            profile: Some(profile),
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// 현재 적용 중인 프로필
    pub fn profile(&self) -> Option<&SearchProfile> {
        self.profile.as_ref()
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
        self.profile = None;
    }

    /// 검색어를 정규식 문자열로 변환한다.
    pub fn pattern(&self, term: &str) -> Result<String> {
        search::build_pattern(term, self.options)
    }

    /// 검색어를 정규식으로 컴파일한다.
    pub fn compile(&self, term: &str) -> Result<Regex> {
        let pattern = self.pattern(term)?;
        log::debug!("compiled search term {term:?} into {pattern:?}");
        Ok(Regex::new(&pattern)?)
    }

    /// `haystack`에 검색어와 맞는 부분이 있는지
    pub fn is_match(&self, term: &str, haystack: &str) -> Result<bool> {
        Ok(self.compile(term)?.is_match(haystack))
    }

    /// 검색어와 맞는 후보만 순서대로 남긴다.
    pub fn filter<'h, I>(&self, term: &str, candidates: I) -> Result<Vec<&'h str>>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let regex = self.compile(term)?;
        Ok(candidates
            .into_iter()
            .filter(|candidate| regex.is_match(candidate))
            .collect())
    }
}
