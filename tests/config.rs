use pdacc::npda::{
    RunConfig,
    config::word_limit,
    explore::DEFAULT_MAX_EPSILON_GROWTH,
    word::DEFAULT_MAX_WORD_LEN,
};

#[test]
fn defaults_follow_the_interactive_tool() {
    let c = RunConfig::default();
    assert_eq!(c.wildcard, '*');
    assert_eq!(c.bottom, None);
    assert_eq!(c.max_word_len, Some(DEFAULT_MAX_WORD_LEN));
    assert_eq!(c.limits.max_epsilon_growth, DEFAULT_MAX_EPSILON_GROWTH);
}

#[test]
fn zero_word_limit_means_unbounded() {
    assert_eq!(word_limit(0), None);
    assert_eq!(word_limit(100), Some(100));
}
