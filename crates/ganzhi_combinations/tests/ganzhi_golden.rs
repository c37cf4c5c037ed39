//! Integration tests for the sexagenary cycle.
//!
//! Pure arithmetic: expected names come from the standard 60-cycle table.

use ganzhi_combinations::{ALL_GANZHIS, Dizhi, FormatCode, Ganzhi, GanzhiError, Tiangan};
use ganzhi_primitives::{ALL_DIZHIS, ALL_TIANGANS};

// ---------------------------------------------------------------------------
// Construction and ordinals
// ---------------------------------------------------------------------------

#[test]
fn jiazi_has_ordinal_one() {
    assert_eq!(Ganzhi::from_pair(Tiangan::Jia, Dizhi::Zi).unwrap().ordinal(), 1);
}

#[test]
fn ordinals_inside_range_are_kept() {
    assert_eq!(Ganzhi::from_ordinal(4).ordinal(), 4);
    assert_eq!(Ganzhi::from_ordinal(60).ordinal(), 60);
}

#[test]
fn ordinals_outside_range_wrap() {
    assert_eq!(Ganzhi::from_ordinal(62).ordinal(), 2);
    assert_eq!(Ganzhi::from_ordinal(-2), Ganzhi::from_ordinal(58));
    assert_eq!(Ganzhi::from_ordinal(-60).ordinal(), 60);
}

#[test]
fn ordinal_sweep_matches_reduced_ordinal() {
    let mut j = 1;
    for i in -1019..1000_i64 {
        assert_eq!(Ganzhi::from_ordinal(i), Ganzhi::from_ordinal(j), "ordinal {i}");
        j += 1;
        if j == 61 {
            j = 1;
        }
    }
}

#[test]
fn index_and_ordinal_are_offset_by_one() {
    for n in -200..200_i64 {
        assert_eq!(Ganzhi::from_index(n), Ganzhi::from_ordinal(n + 1));
    }
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

#[test]
fn exactly_sixty_pairs_are_valid() {
    let mut valid = Vec::new();
    let mut invalid = 0;
    for t in ALL_TIANGANS {
        for d in ALL_DIZHIS {
            match Ganzhi::from_pair(t, d) {
                Ok(g) => {
                    assert_eq!(g.decompose(), (t, d));
                    valid.push(g);
                }
                Err(GanzhiError::InvalidCombination { tiangan, dizhi }) => {
                    assert_eq!((tiangan, dizhi), (t, d));
                    assert_ne!(t.yinyang(), d.yinyang());
                    invalid += 1;
                }
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }
    assert_eq!(invalid, 60);
    valid.sort();
    valid.dedup();
    assert_eq!(valid.as_slice(), ALL_GANZHIS.as_slice());
}

#[test]
fn decompose_then_pair_round_trips() {
    for g in ALL_GANZHIS {
        let (t, d) = g.decompose();
        assert_eq!(Ganzhi::from_pair(t, d), Ok(g));
    }
}

#[test]
fn invalid_pair_message_names_both() {
    let err = Ganzhi::from_pair(Tiangan::Yi, Dizhi::Zi).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Yi") && msg.contains("Zi"), "{msg}");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn yimao_renders_in_both_formats() {
    let g = Ganzhi::from_pair(Tiangan::Yi, Dizhi::Mao).unwrap();
    assert_eq!(g.to_string(), "Yimao");
    assert_eq!(g.to_string_with(Some("C")).unwrap(), "乙卯");
    assert_eq!(g.to_string_with(Some("G")).unwrap(), "Yimao");
}

#[test]
fn wrapped_ordinals_render() {
    assert_eq!(Ganzhi::from_ordinal(0).format(FormatCode::Chinese), "癸亥");
    assert_eq!(Ganzhi::from_ordinal(-2).format(FormatCode::Chinese), "辛酉");
    assert_eq!(Ganzhi::from_ordinal(0).to_string(), "Guihai");
}

#[test]
fn table_spot_checks() {
    let expected = [
        (1, "Jiazi", "甲子"),
        (11, "Jiaxu", "甲戌"),
        (21, "Jiashen", "甲申"),
        (31, "Jiawu", "甲午"),
        (41, "Jiachen", "甲辰"),
        (51, "Jiayin", "甲寅"),
        (60, "Guihai", "癸亥"),
    ];
    for (ordinal, pinyin, chinese) in expected {
        let g = Ganzhi::from_ordinal(ordinal);
        assert_eq!(g.format(FormatCode::Pinyin), pinyin);
        assert_eq!(g.format(FormatCode::Chinese), chinese);
    }
}

#[test]
fn unsupported_format_is_rejected() {
    let err = Ganzhi::JIAZI.to_string_with(Some("X")).unwrap_err();
    match err {
        GanzhiError::Format(e) => assert_eq!(e.code(), "X"),
        other => panic!("expected format error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Stepping and difference
// ---------------------------------------------------------------------------

#[test]
fn next_matches_ordinal_offset() {
    let g = Ganzhi::from_ordinal(15);
    assert_eq!(g.next(212), Ganzhi::from_ordinal(15 + 212));
    assert_eq!(g.next(-28_222), Ganzhi::from_ordinal(15 - 28_222));
    assert_eq!(g.next(212), g + 212);
    assert_eq!(g.next(-28_222), g - 28_222);
}

#[test]
fn difference_examples() {
    assert_eq!(Ganzhi::from_ordinal(2) - Ganzhi::from_ordinal(1), 1);
    assert_eq!(Ganzhi::from_ordinal(0) - Ganzhi::from_ordinal(0), 0);
    assert_eq!(Ganzhi::from_ordinal(1) - Ganzhi::from_ordinal(2), 59);
}

#[test]
fn stepping_moves_both_halves() {
    let g = Ganzhi::JIAZI.next(13);
    assert_eq!(g.tiangan(), Tiangan::Jia.next(13));
    assert_eq!(g.dizhi(), Dizhi::Zi.next(13));
}
