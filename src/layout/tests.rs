//! Tests of the layout engine.

use std::path::PathBuf;

use test_case::test_case;

use crate::config::LayoutConfig;
use crate::glyphs::{Glyph, Library, Stroke, StrokeKind};
use crate::layout::warning::{WarningType, Warnings};
use crate::layout::{layout, BreakKind, Layout, Parameters};
use crate::units::Mm;

/// A glyph that draws an horizontal bar of the given width.
fn bar(width: f64) -> Glyph {
    Glyph::new(vec![
        Stroke::new(StrokeKind::Move, Mm(0.0), Mm(0.0)),
        Stroke::new(StrokeKind::Write, Mm(0.0), Mm(5.0)),
        Stroke::new(StrokeKind::Write, Mm(width), Mm(5.0)),
    ])
}

/// 'a' is 4 wide, which makes it take 5 in a word with the letter spacing.
fn library() -> Library {
    vec![('a', bar(4.0)), ('w', bar(19.0))].into_iter().collect()
}

fn config() -> LayoutConfig {
    LayoutConfig {
        line_length: Mm(50.0),
        line_spacing: Mm(8.0),
        padding: Mm(2.0),
        paper_width: Mm(150.0),
        paper_height: Mm(150.0),
        font_size: 1.0,
    }
}

fn run(text: &str, config: &LayoutConfig) -> Layout {
    layout(text, &library(), &Parameters::new(config))
}

/// Returns the coordinates of every placed glyph.
fn positions(layout: &Layout) -> Vec<(f64, f64)> {
    layout.placements().map(|p| (p.x.0, p.y.0)).collect()
}

/// Returns the number of distinct lines that hold glyphs.
fn lines(layout: &Layout) -> usize {
    let mut ys: Vec<f64> = layout.placements().map(|p| p.y.0).collect();
    ys.dedup();
    ys.len()
}

#[test]
fn words_that_fit_share_a_line() {
    let layout = run("aaa aaa", &config());
    let positions = positions(&layout);

    assert_eq!(positions.len(), 6);
    assert_eq!(lines(&layout), 1);

    // The first word ends at 2 + 3 * 5, the second one starts one space later.
    assert_eq!(positions[2], (12.0, 148.0));
    assert_eq!(positions[3], (21.0, 148.0));
}

#[test]
fn words_that_do_not_fit_are_wrapped() {
    let layout = run("aaaaa aaaaa", &config());
    let positions = positions(&layout);

    assert_eq!(lines(&layout), 2);
    assert_eq!(positions[5], (2.0, 140.0));

    let kinds: Vec<_> = layout.breaks().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BreakKind::Wrap, BreakKind::Paragraph]);
}

#[test_case(34.0, 1 ; "exact fit")]
#[test_case(33.9, 2 ; "slightly too long")]
fn wrapping_limit(line_length: f64, expected_lines: usize) {
    let config = LayoutConfig {
        line_length: Mm(line_length),
        ..config()
    };

    assert_eq!(lines(&run("aaa aaa", &config)), expected_lines);
}

#[test]
fn line_length_is_limited_by_the_paper() {
    let config = LayoutConfig {
        line_length: Mm(1000.0),
        paper_width: Mm(60.0),
        ..config()
    };

    // The paper leaves 56 for the text, so only two words of 25 fit on a line.
    let layout = run("aaaaa aaaaa aaaaa", &config);
    assert_eq!(lines(&layout), 2);
}

#[test]
fn long_word_stays_on_one_line_if_the_paper_is_wide_enough() {
    // 70 is longer than a line, but shorter than the 146 between the margins.
    let layout = run("aaaaaaaaaaaaaa", &config());

    assert_eq!(layout.placements().count(), 14);
    assert_eq!(lines(&layout), 1);
    assert_eq!(layout.breaks().count(), 1);
}

#[test]
fn long_word_is_broken_at_the_edge_of_the_paper() {
    let word = "a".repeat(40);
    let layout = run(&word, &config());
    let positions = positions(&layout);

    // The 29th glyph ends at 2 + 29 * 5 = 147, the next one would cross 148.
    assert_eq!(lines(&layout), 2);
    assert_eq!(positions[28], (142.0, 148.0));
    assert_eq!(positions[29], (2.0, 140.0));
    assert_eq!(positions.len(), 40);

    let kinds: Vec<_> = layout.breaks().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BreakKind::Overflow, BreakKind::Paragraph]);
}

#[test]
fn long_word_after_a_line_starts_a_new_line() {
    let layout = run("aa aaaaaaaaaaaaaa", &config());
    let positions = positions(&layout);

    assert_eq!(positions[1], (7.0, 148.0));
    assert_eq!(positions[2], (2.0, 140.0));
    assert_eq!(lines(&layout), 2);
}

#[test]
fn words_after_a_long_word_follow_its_end() {
    // The tail of the long word is 70 wide, nothing else fits on its line.
    let layout = run("aaaaaaaaaaaaaa a", &config());
    let positions = positions(&layout);

    assert_eq!(positions[14], (2.0, 140.0));

    // A short tail leaves room for the next word.
    let word = "a".repeat(30);
    let layout = run(&format!("{} a", word), &config());
    let positions = self::positions(&layout);

    assert_eq!(positions[29], (2.0, 140.0));
    assert_eq!(positions[30], (11.0, 140.0));
}

#[test]
fn glyph_wider_than_the_paper_is_never_alone_on_a_broken_line() {
    let config = LayoutConfig {
        paper_width: Mm(20.0),
        line_length: Mm(10.0),
        ..config()
    };

    let layout = run("ww", &config);
    let positions = positions(&layout);

    assert_eq!(positions, vec![(2.0, 148.0), (2.0, 140.0)]);
}

#[test]
fn paragraphs_start_new_lines() {
    let layout = run("a\n\na", &config());
    let positions = positions(&layout);

    assert_eq!(positions, vec![(2.0, 148.0), (2.0, 132.0)]);

    let kinds: Vec<_> = layout.breaks().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BreakKind::Paragraph; 3]);
}

#[test]
fn unknown_characters_take_no_room() {
    let layout = run("a?a", &config());

    assert_eq!(positions(&layout), vec![(2.0, 148.0), (7.0, 148.0)]);
    assert_eq!(layout.warnings.len(), 1);

    let warning = &layout.warnings[0];
    assert_eq!(warning.ty, WarningType::UnknownCharacter('?'));
    assert_eq!(warning.position.line, 1);
    assert_eq!(warning.position.column, 2);
    assert!(!layout.truncated);
}

#[test]
fn text_below_the_margin_is_dropped() {
    let config = LayoutConfig {
        paper_height: Mm(30.0),
        ..config()
    };

    let layout = run("a\na\na\na\na\na", &config);
    let positions = positions(&layout);

    // Lines at 28, 20, 12 and 4, the next one would be below the margin.
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[3], (2.0, 4.0));
    assert!(layout.truncated);

    let warning = &layout.warnings[0];
    assert_eq!(warning.ty, WarningType::Truncated);
    assert_eq!(warning.position.line, 5);
    assert_eq!(warning.position.column, 1);
}

#[test]
fn warnings_point_at_the_text() {
    colored::control::set_override(false);

    let config = LayoutConfig {
        paper_height: Mm(30.0),
        ..config()
    };

    let text = "a\néaß\na\na\nwa";
    let layout = run(text, &config);

    let kinds: Vec<_> = layout.warnings.iter().map(|w| w.ty).collect();
    assert_eq!(
        kinds,
        vec![
            WarningType::UnknownCharacter('é'),
            WarningType::UnknownCharacter('ß'),
            WarningType::Truncated,
        ]
    );

    let rendered = Warnings {
        path: PathBuf::from("letter.txt"),
        content: text.to_owned(),
        warnings: layout.warnings.clone(),
    }
    .to_string();

    // Columns count characters, not bytes.
    assert!(rendered.contains("warning: no glyph for character 'ß'"));
    assert!(rendered.contains(" --> letter.txt:2:3\n"));
    assert!(rendered.contains("2 | éaß\n  |   ^ this character will be skipped\n"));
    assert!(rendered.contains("2 | éaß\n  | ^ this character will be skipped\n"));

    assert!(rendered.contains("warning: the text does not fit on the paper"));
    assert!(rendered.contains(" --> letter.txt:5:1\n"));
    assert!(rendered.contains("5 | wa\n  | ^ nothing will be plotted from here\n"));
    assert!(rendered.contains("  = note: use a smaller font size"));
}

#[test]
fn filling_the_page_exactly_is_not_a_truncation() {
    let config = LayoutConfig {
        paper_height: Mm(30.0),
        ..config()
    };

    let layout = run("a\na\na\na\n", &config);
    assert_eq!(layout.placements().count(), 4);
    assert!(!layout.truncated);
    assert!(layout.warnings.is_empty());
}

#[test]
fn empty_text_places_nothing() {
    let layout = run("", &config());
    assert!(layout.items.is_empty());
    assert!(!layout.truncated);
}

#[test]
fn font_size_scales_glyphs_and_spacings() {
    let config = LayoutConfig {
        font_size: 2.0,
        ..config()
    };

    let layout = run("aa\na", &config);
    let positions = positions(&layout);

    // The glyph is 8 wide and followed by a letter spacing of 2, the lines are 16 apart.
    assert_eq!(positions, vec![(2.0, 148.0), (12.0, 148.0), (2.0, 132.0)]);
    assert_eq!(layout.placements().next().map(|p| p.glyph.width()), Some(Mm(8.0)));
}
