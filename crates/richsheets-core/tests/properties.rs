//! Property tests for the cell contents value model

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use richsheets_core::{
    CellContents, CellContentsRun, Channel, Color, Error, Justification, ScriptLevel,
    TextWrappingStrategy,
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn arb_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

fn arb_script_level() -> impl Strategy<Value = ScriptLevel> {
    prop_oneof![
        Just(ScriptLevel::Subscript),
        Just(ScriptLevel::Normal),
        Just(ScriptLevel::Superscript),
    ]
}

fn arb_run(text: impl Strategy<Value = String>) -> impl Strategy<Value = CellContentsRun> {
    (
        text,
        any::<(bool, bool, bool, bool)>(),
        arb_script_level(),
        proptest::option::of(arb_color()),
    )
        .prop_map(|(text, (bold, italic, underline, strikethrough), level, color)| {
            CellContentsRun::new(text, bold, italic, underline, strikethrough, level, color)
        })
}

fn arb_cell() -> impl Strategy<Value = CellContents> {
    let single = arb_run("[a-z ]{0,4}").prop_map(|run| vec![run]);
    let multi = proptest::collection::vec(arb_run("[a-z ]{1,4}"), 2..5);
    (
        prop_oneof![single, multi],
        proptest::option::of(prop_oneof![
            Just(Justification::Left),
            Just(Justification::Center),
            Just(Justification::Right),
        ]),
        proptest::option::of(arb_color()),
        proptest::option::of(prop_oneof![
            Just(TextWrappingStrategy::Overflow),
            Just(TextWrappingStrategy::Wrap),
            Just(TextWrappingStrategy::Clip),
        ]),
    )
        .prop_map(|(runs, justification, background, wrapping)| {
            CellContents::new(runs, justification, background, wrapping).unwrap()
        })
}

fn out_of_range() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..0, 256..=i32::MAX]
}

fn assert_valid(cell: &CellContents) {
    assert_eq!(
        CellContents::new(
            cell.runs(),
            cell.justification(),
            cell.background_color(),
            cell.wrapping_strategy()
        )
        .as_ref(),
        Ok(cell)
    );
}

proptest! {
    #[test]
    fn color_channels_roundtrip(r in 0..=255i32, g in 0..=255i32, b in 0..=255i32) {
        let c = Color::new(r, g, b).unwrap();
        prop_assert_eq!((i32::from(c.r()), i32::from(c.g()), i32::from(c.b())), (r, g, b));
    }

    #[test]
    fn color_rejects_out_of_range(bad in out_of_range(), ok in 0..=255i32) {
        prop_assert_eq!(
            Color::new(bad, ok, ok),
            Err(Error::ChannelOutOfRange { channel: Channel::Red, value: bad })
        );
        prop_assert_eq!(
            Color::new(ok, bad, ok),
            Err(Error::ChannelOutOfRange { channel: Channel::Green, value: bad })
        );
        prop_assert_eq!(
            Color::new(ok, ok, bad),
            Err(Error::ChannelOutOfRange { channel: Channel::Blue, value: bad })
        );
    }

    #[test]
    fn color_equality_is_structural(a in arb_color(), b in arb_color()) {
        prop_assert_eq!(a == b, a.to_rgb() == b.to_rgb());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn single_run_is_always_valid(run in arb_run("[a-z]{0,3}")) {
        prop_assert!(CellContents::new(vec![run], None, None, None).is_ok());
    }

    #[test]
    fn embedded_empty_run_is_rejected(
        mut runs in proptest::collection::vec(arb_run("[a-z]{1,3}"), 1..4),
        empty in arb_run(Just(String::new())),
        at in 0usize..4,
    ) {
        let at = at.min(runs.len());
        runs.insert(at, empty);
        prop_assert_eq!(
            CellContents::new(runs, None, None, None),
            Err(Error::EmbeddedEmptyRun { index: at })
        );
    }

    #[test]
    fn plain_text_concatenates_runs(cell in arb_cell()) {
        let expected: String = cell.runs().iter().map(|run| run.text()).collect();
        prop_assert_eq!(cell.plain_text(), expected);
    }

    #[test]
    fn append_extends_text(cell in arb_cell(), suffix in "[a-z ]{0,4}") {
        let appended = cell.with_appended_text(&suffix);
        prop_assert_eq!(appended.plain_text(), format!("{}{}", cell.plain_text(), suffix));
        assert_valid(&appended);

        // Everything before the last run is untouched
        let kept = cell.runs().len() - 1;
        prop_assert_eq!(&appended.runs()[..kept], &cell.runs()[..kept]);
        prop_assert_eq!(appended.background_color(), cell.background_color());
        prop_assert_eq!(appended.justification(), cell.justification());
        prop_assert_eq!(appended.wrapping_strategy(), cell.wrapping_strategy());
    }

    #[test]
    fn replace_sets_text(cell in arb_cell(), new_text in "[a-z ]{0,8}") {
        let replaced = cell.with_replaced_text(&new_text);
        prop_assert_eq!(replaced.plain_text(), new_text.as_str());
        assert_valid(&replaced);
    }

    #[test]
    fn replace_with_extension_is_append(cell in arb_cell(), suffix in "[a-z ]{0,4}") {
        let new_text = format!("{}{}", cell.plain_text(), suffix);
        prop_assert_eq!(cell.with_replaced_text(&new_text), cell.with_appended_text(&suffix));
    }

    #[test]
    fn empty_edits_are_noops(cell in arb_cell()) {
        prop_assert_eq!(&cell.with_appended_text(""), &cell);
        let text = cell.plain_text().into_owned();
        prop_assert_eq!(&cell.with_replaced_text(&text), &cell);
    }

    #[test]
    fn equal_cells_hash_equal(cell in arb_cell()) {
        let copy = cell.clone();
        prop_assert_eq!(hash_of(&cell), hash_of(&copy));
    }
}

#[test]
fn append_after_superscript_starts_baseline_run() {
    let cell = CellContents::from_run(
        CellContentsRun::plain("2")
            .with_script_level(ScriptLevel::Superscript)
            .with_bold(true)
            .with_italic(true)
            .with_text_color(Some(Color::rgb(10, 20, 30))),
    );

    let appended = cell.with_appended_text(" units");
    assert_eq!(appended.runs().len(), 2);
    let tail = &appended.runs()[1];
    assert_eq!(tail.text(), " units");
    assert_eq!(tail.script_level(), ScriptLevel::Normal);
    assert!(tail.is_bold());
    assert!(tail.is_italic());
    assert_eq!(tail.text_color(), Some(Color::rgb(10, 20, 30)));
}

#[test]
fn blank_values_are_interchangeable() {
    assert_eq!(CellContents::blank(), CellContents::default());
    assert_eq!(hash_of(&CellContents::blank()), hash_of(&CellContents::default()));
    assert_eq!(CellContents::blank().runs(), &[CellContentsRun::BLANK]);
}
