use proptest::prelude::*;
use retext::{run_reversal, Granularity, PipelineError, ReverseOptions};

fn char_mode() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["characters", "character", "chars", "Char", " CHARACTERS "])
}

fn word_mode() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["words", "word", "Words", "WORD"])
}

proptest! {
    #[test]
    fn character_mode_strings_round_trip(
        text in "\\PC{0,60}",
        mode in char_mode(),
        preserve_numbers in any::<bool>(),
    ) {
        let opts = ReverseOptions::default().with_preserve_numbers(preserve_numbers);
        let once = run_reversal(&text, mode, &opts).unwrap();
        prop_assert_eq!(run_reversal(&once, mode, &opts).unwrap(), text);
    }

    #[test]
    fn word_mode_strings_round_trip(
        text in "[a-zA-Z0-9,.!? \n]{0,60}",
        mode in word_mode(),
        preserve_numbers in any::<bool>(),
    ) {
        let opts = ReverseOptions::default()
            .with_preserve_spaces(true)
            .with_preserve_numbers(preserve_numbers);
        let once = run_reversal(&text, mode, &opts).unwrap();
        prop_assert_eq!(run_reversal(&once, mode, &opts).unwrap(), text);
    }

    #[test]
    fn unknown_mode_strings_are_rejected(mode in "[a-z]{1,10}") {
        prop_assume!(mode.parse::<Granularity>().is_err());
        let err = run_reversal("some text", &mode, &ReverseOptions::default()).unwrap_err();
        prop_assert!(matches!(err, PipelineError::InvalidConfig(_)));
    }
}
