use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SPLIT_CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    // \x1c-\x1f are separators that Unicode `\s` leaves out
    Regex::new(r#"(className="[^"\n]*)\n[\s\x1c-\x1f]*([^"\n]*")"#).expect("valid regex")
});

/// How many substitution passes to run over a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapseMode {
    /// One left-to-right pass. A value spread over three or more lines only
    /// has its first break joined.
    #[default]
    SinglePass,
    /// Repeat the pass until the text stops changing.
    UntilStable,
}

/// Joins `className="..."` values that were broken onto a second line.
///
/// Text must already be in working form (LF only). Matches never overlap and
/// replaced regions are not rescanned.
pub fn collapse_split_class_names(text: &str) -> Cow<'_, str> {
    SPLIT_CLASS_NAME.replace_all(text, "${1} ${2}")
}

pub fn collapse_until_stable(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = match collapse_split_class_names(&current) {
            Cow::Borrowed(_) => return current,
            Cow::Owned(next) => next,
        };
        if next == current {
            return current;
        }
        current = next;
    }
}

pub fn collapse(text: &str, mode: CollapseMode) -> String {
    match mode {
        CollapseMode::SinglePass => collapse_split_class_names(text).into_owned(),
        CollapseMode::UntilStable => collapse_until_stable(text),
    }
}
