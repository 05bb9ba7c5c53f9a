use biosearch_text::TextNormalizer;
use proptest::prelude::*;

const MIXED_TEXT: &str = "[а-яА-ЯёЁa-zA-Z0-9 ,.!?;:«»—()\\-\t\n]{0,120}";

proptest! {
    #[test]
    fn lexical_is_idempotent(s in MIXED_TEXT) {
        let n = TextNormalizer::russian();
        let once = n.normalize_lexical(&s);
        let twice = n.normalize_lexical(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dense_is_idempotent(s in MIXED_TEXT) {
        let n = TextNormalizer::russian();
        let once = n.normalize_dense(&s);
        let twice = n.normalize_dense(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dense_never_panics_on_arbitrary_unicode(s in "\\PC{0,80}") {
        let n = TextNormalizer::russian();
        let out = n.normalize_dense(&s);
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn outputs_contain_no_digits_or_ascii_punctuation(s in MIXED_TEXT) {
        let n = TextNormalizer::russian();
        for out in [n.normalize_lexical(&s), n.normalize_dense(&s)] {
            prop_assert!(!out.chars().any(|c| c.is_ascii_punctuation() || c.is_numeric()));
        }
    }

    #[test]
    fn lexical_output_has_no_stop_words(s in MIXED_TEXT) {
        let n = TextNormalizer::russian();
        let out = n.normalize_lexical(&s);
        for token in out.split(' ').filter(|t| !t.is_empty()) {
            prop_assert!(!n.is_stop_word(token), "stop word {} survived", token);
        }
    }

    #[test]
    fn deterministic_across_instances(s in MIXED_TEXT) {
        let a = TextNormalizer::russian();
        let b = TextNormalizer::russian();
        prop_assert_eq!(a.normalize_lexical(&s), b.normalize_lexical(&s));
        prop_assert_eq!(a.normalize_dense(&s), b.normalize_dense(&s));
    }
}
