//! Adoption sections: delivery channel, price tolerance and whether stated
//! intent survives a concrete ask.

use crate::config::AnswerCatalog;
use crate::core::metrics::percentage;
use crate::core::{Question, Respondent};
use crate::metrics::{count_keyword, tally, tally_multi_select, FrequencyTable};

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSection {
    /// Token tally; percentages are over total respondents
    pub table: FrequencyTable,
    /// Tokens naming the highlighted channel; "WhatsApp, WhatsApp Business"
    /// is two mentions
    pub highlighted: usize,
    /// Respondents with at least one such token
    pub highlighted_respondents: usize,
}

impl ChannelSection {
    pub fn mentions(&self) -> usize {
        self.table.total()
    }

    /// Share of all respondents naming the highlighted channel; `None` for
    /// an empty export
    pub fn highlighted_pct(&self) -> Option<f64> {
        let respondents = self.table.denominator;
        (respondents > 0).then(|| percentage(self.highlighted_respondents, respondents))
    }
}

pub fn channels(respondents: &[Respondent], answers: &AnswerCatalog) -> ChannelSection {
    let table = tally_multi_select(respondents, Question::Channels, answers.channel_separator);
    let by_respondent = count_keyword(respondents, Question::Channels, &answers.highlighted_channel);
    ChannelSection {
        highlighted: table.count_containing(&answers.highlighted_channel),
        highlighted_respondents: by_respondent.matching,
        table,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricingSection {
    pub table: FrequencyTable,
    pub free_only: usize,
}

impl PricingSection {
    pub fn valid(&self) -> usize {
        self.table.denominator
    }

    /// Valid answers other than "free only"
    pub fn would_pay(&self) -> usize {
        self.valid() - self.free_only
    }
}

pub fn pricing(respondents: &[Respondent], answers: &AnswerCatalog) -> PricingSection {
    let table = tally(respondents, Question::WillingnessToPay);
    PricingSection {
        free_only: table.count(&answers.free_only),
        table,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSection {
    pub intent: FrequencyTable,
    pub smoke_test: FrequencyTable,
    pub definitely: usize,
    pub maybe: usize,
    pub not_interested: usize,
    pub wants_beta: usize,
}

impl ConversionSection {
    /// Beta sign-ups per "definitely" answer, in percent; `None` when
    /// nobody said "definitely"
    pub fn conversion_rate(&self) -> Option<f64> {
        (self.definitely > 0).then(|| percentage(self.wants_beta, self.definitely))
    }
}

pub fn conversion(respondents: &[Respondent], answers: &AnswerCatalog) -> ConversionSection {
    let intent = tally(respondents, Question::Intent);
    let smoke_test = tally(respondents, Question::SmokeTest);
    ConversionSection {
        definitely: intent.count(&answers.intent_definitely),
        maybe: intent.count(&answers.intent_maybe),
        not_interested: intent.count(&answers.intent_no),
        wants_beta: smoke_test.count(&answers.wants_beta),
        intent,
        smoke_test,
    }
}
