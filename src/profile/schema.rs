/// JSON5 검색 프로필 스키마용 serde 타입
use serde::Deserialize;

/// 검색 옵션 항목. 빠진 항목은 false.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsSchema {
    pub choseong_search: bool,
    pub jongseong_completion: bool,
    pub incremental: bool,
    pub fuzzy: bool,
}

/// JSON5 프로필 최상위 스키마
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSchema {
    /// 프로필 식별자 (예: "autocomplete")
    pub id: String,
    /// 프로필 이름 (예: "자동 완성")
    pub name: String,
    /// 검색 옵션
    #[serde(default)]
    pub options: OptionsSchema,
}
