pub mod compose;
pub mod convert;
pub mod error;
pub mod profile;
pub mod search;
pub mod searcher;
pub mod tables;
pub mod unicode;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use error::{HangulError, Result};
pub use profile::SearchProfile;
pub use search::{Fragment, SearchOptions, build_pattern, generate_search_pattern};
pub use searcher::Searcher;

uniffi::setup_scaffolding!();

/// 한글 검색기 (UniFFI object, thread-safe)
#[derive(uniffi::Object)]
pub struct HangulSearcher {
    state: Mutex<Searcher>,
}

impl Default for HangulSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulSearcher {
    fn state(&self) -> MutexGuard<'_, Searcher> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl HangulSearcher {
    /// 모든 옵션이 꺼진 검색기를 생성한다. (리터럴 검색)
    #[uniffi::constructor]
    pub fn new() -> Self {
        HangulSearcher {
            state: Mutex::new(Searcher::default()),
        }
    }

    /// 주어진 옵션으로 검색기를 생성한다.
    #[uniffi::constructor]
    pub fn with_options(options: SearchOptions) -> Self {
        HangulSearcher {
            state: Mutex::new(Searcher::new(options)),
        }
    }

    /// JSON5 문자열로 검색 프로필을 로드한다.
    pub fn load_profile(&self, json: String) -> std::result::Result<(), HangulError> {
        let profile = SearchProfile::from_json(&json)?;
        *self.state() = Searcher::from_profile(profile);
        Ok(())
    }

    /// 검색 옵션을 설정한다.
    pub fn set_options(&self, options: SearchOptions) {
        self.state().set_options(options);
    }

    /// 현재 검색 옵션을 반환한다.
    pub fn get_options(&self) -> SearchOptions {
        self.state().options()
    }

    /// 적용 중인 프로필 ID. 프로필 없이 옵션을 설정했으면 None.
    pub fn get_profile_id(&self) -> Option<String> {
        self.state().profile().map(|profile| profile.id.clone())
    }

    /// 적용 중인 프로필 이름
    pub fn get_profile_name(&self) -> Option<String> {
        self.state().profile().map(|profile| profile.name.clone())
    }

    /// 검색어를 정규식 문자열로 변환한다.
    pub fn search_pattern(&self, term: String) -> std::result::Result<String, HangulError> {
        self.state().pattern(&term)
    }

    /// `text`에 검색어와 맞는 부분이 있는지
    pub fn is_match(
        &self,
        term: String,
        text: String,
    ) -> std::result::Result<bool, HangulError> {
        self.state().is_match(&term, &text)
    }

    /// 검색어와 맞는 후보만 순서대로 반환한다.
    pub fn filter(
        &self,
        term: String,
        candidates: Vec<String>,
    ) -> std::result::Result<Vec<String>, HangulError> {
        let state = self.state();
        let matched = state.filter(&term, candidates.iter().map(String::as_str))?;
        Ok(matched.into_iter().map(str::to_string).collect())
    }
}
