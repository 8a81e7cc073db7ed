/// 검색 프로필 로딩 (JSON5)
pub mod schema;

use schema::{OptionsSchema, ProfileSchema};

use crate::error::{HangulError, Result};
use crate::search::SearchOptions;

/// 파싱된 검색 프로필
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProfile {
    pub id: String,
    pub name: String,
    pub options: SearchOptions,
}

impl From<OptionsSchema> for SearchOptions {
    fn from(schema: OptionsSchema) -> Self {
        SearchOptions {
            choseong_search: schema.choseong_search,
            jongseong_completion: schema.jongseong_completion,
            incremental: schema.incremental,
            fuzzy: schema.fuzzy,
        }
    }
}

impl SearchProfile {
    /// JSON5 문자열에서 프로필을 파싱한다.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: ProfileSchema = json5::from_str(json)
            .map_err(|e| HangulError::InvalidOptions(format!("JSON5 parse error: {e}")))?;

        if schema.id.is_empty() {
            return Err(HangulError::InvalidOptions("empty profile id".to_string()));
        }

        let profile = SearchProfile {
            id: schema.id,
            name: schema.name,
            options: schema.options.into(),
        };
        log::debug!("loaded search profile {:?}: {:?}", profile.id, profile.options);
        Ok(profile)
    }
}
