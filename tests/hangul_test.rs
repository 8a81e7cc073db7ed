//! 공개 API 통합 테스트: 합성/분해, 변환, 검색 패턴 생성
use ricecake::compose::{compose, decompose, decompose_jongseong};
use ricecake::convert::{
    compat_jaum_to_choseong, compat_jaum_to_jongseong, compat_moum_to_jungseong,
    jamo_to_compat_jamo,
};
use ricecake::unicode::{self, choseong_offset};
use ricecake::{Fragment, HangulError, SearchOptions, generate_search_pattern};

fn fragments(term: &str, options: SearchOptions) -> Vec<Fragment> {
    generate_search_pattern(term, options)
        .collect::<Result<_, _>>()
        .unwrap()
}

// ── 합성/분해 ──

#[test]
fn test_roundtrip_every_syllable() {
    for code in unicode::SYLLABLE_BASE..=unicode::SYLLABLE_END {
        let s = char::from_u32(code).unwrap();
        let (cho, jung, jong) = decompose(s).unwrap();
        assert_eq!(compose(cho, jung, jong).unwrap(), s);
    }
}

#[test]
fn test_decompose_jongseong_examples() {
    // ㄲ → (ㄱ, ㄱ), ㄳ → (ㄱ, ㅅ), ㄴ → (ㄴ, None)
    assert_eq!(
        decompose_jongseong('\u{11A9}').unwrap(),
        ('\u{11A8}', Some('\u{11A8}'))
    );
    assert_eq!(
        decompose_jongseong('\u{11AA}').unwrap(),
        ('\u{11A8}', Some('\u{11BA}'))
    );
    assert_eq!(decompose_jongseong('\u{11AB}').unwrap(), ('\u{11AB}', None));
}

#[test]
fn test_range_validation() {
    assert_eq!(choseong_offset('\u{1100}').unwrap(), 0);
    assert_eq!(choseong_offset('\u{1112}').unwrap(), 18);
    assert!(matches!(
        choseong_offset('\u{1113}'),
        Err(HangulError::OutOfRange { .. })
    ));
}

// ── 변환 테이블 ──

#[test]
fn test_table_coverage() {
    for code in (0x1100..=0x1112).chain(0x11A8..=0x11C2) {
        let jamo = char::from_u32(code).unwrap();
        assert!(unicode::is_compat_jaum(jamo_to_compat_jamo(jamo).unwrap()));
    }
    for code in 0x1161..=0x1175 {
        let jamo = char::from_u32(code).unwrap();
        assert!(unicode::is_compat_moum(jamo_to_compat_jamo(jamo).unwrap()));
    }

    let jaums: Vec<char> = (0x3131..=0x314E).filter_map(char::from_u32).collect();
    let unmappable: String = jaums
        .iter()
        .filter(|&&jaum| compat_jaum_to_choseong(jaum).unwrap().is_none())
        .collect();
    assert_eq!(unmappable, "ㄳㄵㄶㄺㄻㄼㄽㄾㄿㅀㅄ");

    for jaum in jaums {
        assert!(compat_jaum_to_jongseong(jaum).is_ok());
    }
    for code in 0x314F..=0x3163 {
        let moum = char::from_u32(code).unwrap();
        assert!(unicode::is_jungseong(compat_moum_to_jungseong(moum).unwrap()));
    }
}

// ── 검색 패턴 ──

#[test]
fn test_choseong_search_scenarios() {
    let options = SearchOptions {
        choseong_search: true,
        ..SearchOptions::default()
    };
    assert_eq!(
        fragments("ㄱ", options),
        vec![Fragment::Pattern("[ㄱ가-깋]".to_string())]
    );
    assert_eq!(fragments("ㄳ", options), vec![Fragment::Literal('ㄳ')]);
}

#[test]
fn test_jongseong_completion_scenarios() {
    let options = SearchOptions {
        jongseong_completion: true,
        ..SearchOptions::default()
    };
    assert_eq!(
        fragments("가", options),
        vec![Fragment::Pattern("[가-갛]".to_string())]
    );
    assert_eq!(fragments("각", options), vec![Fragment::Literal('각')]);
}

#[test]
fn test_bare_jamo_rejected() {
    let result: Result<Vec<Fragment>, HangulError> =
        generate_search_pattern("\u{1100}", SearchOptions::default()).collect();
    assert!(matches!(result, Err(HangulError::UnsupportedInput('\u{1100}'))));
}

#[test]
fn test_generator_is_send_across_threads() {
    let handles: Vec<_> = ["ㄱ", "가", "읽"]
        .into_iter()
        .map(|term| {
            std::thread::spawn(move || {
                let options = SearchOptions {
                    choseong_search: true,
                    jongseong_completion: true,
                    incremental: true,
                    fuzzy: false,
                };
                ricecake::build_pattern(term, options).unwrap()
            })
        })
        .collect();
    let patterns: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(patterns, vec!["[ㄱ가-깋]", "[가-갛]", "(?:읽|일[ㄱ가-깋])"]);
}
