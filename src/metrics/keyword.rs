use crate::core::{Question, Respondent};

/// Split of valid answers into those containing a keyword and the rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordCount {
    pub matching: usize,
    pub other: usize,
}

impl KeywordCount {
    pub fn valid(&self) -> usize {
        self.matching + self.other
    }
}

/// Count answers containing `keyword` verbatim (case-sensitive substring)
pub fn count_keyword(respondents: &[Respondent], question: Question, keyword: &str) -> KeywordCount {
    respondents
        .iter()
        .filter_map(|r| r.answer(question))
        .fold(KeywordCount::default(), |mut acc, answer| {
            if answer.contains(keyword) {
                acc.matching += 1;
            } else {
                acc.other += 1;
            }
            acc
        })
}
