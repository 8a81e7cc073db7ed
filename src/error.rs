//! 에러 타입

/// 한글 처리 결과
pub type Result<T> = std::result::Result<T, HangulError>;

fn codepoint(ch: &char) -> u32 {
    *ch as u32
}

/// 한글 분류/합성/검색 중 발생하는 에러
#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum HangulError {
    /// 문자가 기대한 유니코드 블록 밖에 있다.
    #[error("{ch:?} (U+{:04X}) is not a {expected}", codepoint(.ch))]
    OutOfRange { ch: char, expected: &'static str },

    /// 자모 인덱스가 허용 범위(초성 0~18, 중성 0~20, 종성 0~27)를 벗어났다.
    #[error("{expected} index {index} is out of range")]
    IndexOutOfRange { index: u32, expected: &'static str },

    /// 한글 범위이지만 요청한 자모 종류가 아니다.
    #[error("{ch:?} (U+{:04X}) is not a modern Hangul Jamo {expected}", codepoint(.ch))]
    InvalidJamo { ch: char, expected: &'static str },

    /// 한글 음절이 아니다.
    #[error("{0:?} (U+{cp:04X}) is not a Hangul Syllable", cp = codepoint(.0))]
    NotASyllable(char),

    /// 검색 패턴 생성기가 받지 않는 입력 (첫가끝 자모, 확장 자모, 반각 자모)
    #[error("unsupported input {0:?} (U+{cp:04X}): decomposed or archaic Jamo", cp = codepoint(.0))]
    UnsupportedInput(char),

    /// 검색 옵션 파싱 실패
    #[error("invalid search options: {0}")]
    InvalidOptions(String),

    /// 생성된 패턴을 정규식으로 컴파일하지 못했다.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}
