use serde::{Deserialize, Serialize};

use super::thresholds::DecisionThresholds;
use crate::core::Question;

/// Root configuration structure for surveymap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SurveyConfig {
    /// Names of the two candidate products
    #[serde(default)]
    pub products: ProductNames,

    /// Literal header text of each question in the export
    #[serde(default)]
    pub questions: QuestionLabels,

    /// Literal answer options the report looks for
    #[serde(default)]
    pub answers: AnswerCatalog,

    /// Verdict and recommendation thresholds
    #[serde(default)]
    pub thresholds: DecisionThresholds,
}

impl SurveyConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.thresholds.validate()?;
        if self.answers.channel_separator.is_whitespace() {
            return Err("answers.channel_separator must not be whitespace".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductNames {
    /// Option A: reminders for informal debts
    #[serde(default = "default_option_a")]
    pub option_a: String,

    /// Option B: reminders for recurring payments
    #[serde(default = "default_option_b")]
    pub option_b: String,
}

impl Default for ProductNames {
    fn default() -> Self {
        Self {
            option_a: default_option_a(),
            option_b: default_option_b(),
        }
    }
}

fn default_option_a() -> String {
    "Informal debts".to_string()
}
fn default_option_b() -> String {
    "Recurring payments".to_string()
}

/// Header text per question, keyed by the question id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLabels {
    #[serde(default = "default_missed_payments")]
    pub missed_payments: String,
    #[serde(default = "default_pain_b_stress")]
    pub pain_b_stress: String,
    #[serde(default = "default_loan_experience")]
    pub loan_experience: String,
    #[serde(default = "default_differentiation")]
    pub differentiation: String,
    #[serde(default = "default_pain_a_discomfort")]
    pub pain_a_discomfort: String,
    #[serde(default = "default_pain_a_stress")]
    pub pain_a_stress: String,
    #[serde(default = "default_direct_comparison")]
    pub direct_comparison: String,
    #[serde(default = "default_channels")]
    pub channels: String,
    #[serde(default = "default_willingness_to_pay")]
    pub willingness_to_pay: String,
    #[serde(default = "default_intent")]
    pub intent: String,
    #[serde(default = "default_smoke_test")]
    pub smoke_test: String,
}

impl QuestionLabels {
    pub fn label(&self, question: Question) -> &str {
        match question {
            Question::MissedPayments => &self.missed_payments,
            Question::PainBStress => &self.pain_b_stress,
            Question::LoanExperience => &self.loan_experience,
            Question::Differentiation => &self.differentiation,
            Question::PainADiscomfort => &self.pain_a_discomfort,
            Question::PainAStress => &self.pain_a_stress,
            Question::DirectComparison => &self.direct_comparison,
            Question::Channels => &self.channels,
            Question::WillingnessToPay => &self.willingness_to_pay,
            Question::Intent => &self.intent,
            Question::SmokeTest => &self.smoke_test,
        }
    }
}

impl Default for QuestionLabels {
    fn default() -> Self {
        Self {
            missed_payments: default_missed_payments(),
            pain_b_stress: default_pain_b_stress(),
            loan_experience: default_loan_experience(),
            differentiation: default_differentiation(),
            pain_a_discomfort: default_pain_a_discomfort(),
            pain_a_stress: default_pain_a_stress(),
            direct_comparison: default_direct_comparison(),
            channels: default_channels(),
            willingness_to_pay: default_willingness_to_pay(),
            intent: default_intent(),
            smoke_test: default_smoke_test(),
        }
    }
}

fn default_missed_payments() -> String {
    "Q8. En los últimos 6 meses, ¿has olvidado pagar alguna cuenta a tiempo?".to_string()
}
fn default_pain_b_stress() -> String {
    "Q10. ¿Qué tan estresante es para ti acordarte de pagar todas tus cuentas a tiempo?"
        .to_string()
}
fn default_loan_experience() -> String {
    "Q14. En el último año, ¿has prestado o te han prestado dinero u objetos de forma informal?"
        .to_string()
}
fn default_differentiation() -> String {
    "Q15. ¿En cuál de estas situaciones has experimentado MÁS incomodidad al recordar o que te recuerden?"
        .to_string()
}
fn default_pain_a_discomfort() -> String {
    "Q17. ¿Qué tan incómodo te resulta recordarle a alguien que te debe dinero o un objeto prestado?"
        .to_string()
}
fn default_pain_a_stress() -> String {
    "Q18. ¿Qué tan estresante es para ti gestionar estas deudas informales?".to_string()
}
fn default_direct_comparison() -> String {
    "Q21. De estos dos usos, ¿cuál te resultaría MÁS ÚTIL?".to_string()
}
fn default_channels() -> String {
    "Q22. ¿Por qué medio te gustaría recibir estos recordatorios? (puedes marcar más de uno)"
        .to_string()
}
fn default_willingness_to_pay() -> String {
    "Q25. Si este servicio te ahorrara multas, estrés o incomodidad, ¿cuánto estarías dispuesto a pagar mensualmente?"
        .to_string()
}
fn default_intent() -> String {
    "Q26. Si PayMe estuviera disponible HOY, ¿lo probarías?".to_string()
}
fn default_smoke_test() -> String {
    "Q30. Payme lanzará su beta en 2 semanas".to_string()
}

/// Answer options matched verbatim against the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCatalog {
    /// Substring marking "never forgot a payment"
    #[serde(default = "default_never_keyword")]
    pub never_keyword: String,

    #[serde(default = "default_money")]
    pub money: String,
    #[serde(default = "default_objects")]
    pub objects: String,
    #[serde(default = "default_both_equally")]
    pub both_equally: String,
    #[serde(default = "default_avoids_conflict")]
    pub avoids_conflict: String,

    #[serde(default = "default_prefer_a")]
    pub prefer_a: String,
    #[serde(default = "default_prefer_b")]
    pub prefer_b: String,
    #[serde(default = "default_both_useful")]
    pub both_useful: String,
    #[serde(default = "default_neither_useful")]
    pub neither_useful: String,

    #[serde(default = "default_channel_separator")]
    pub channel_separator: char,
    /// Channel whose mentions are counted on their own
    #[serde(default = "default_highlighted_channel")]
    pub highlighted_channel: String,

    #[serde(default = "default_free_only")]
    pub free_only: String,

    #[serde(default = "default_intent_definitely")]
    pub intent_definitely: String,
    #[serde(default = "default_intent_maybe")]
    pub intent_maybe: String,
    #[serde(default = "default_intent_no")]
    pub intent_no: String,

    #[serde(default = "default_wants_beta")]
    pub wants_beta: String,
}

impl Default for AnswerCatalog {
    fn default() -> Self {
        Self {
            never_keyword: default_never_keyword(),
            money: default_money(),
            objects: default_objects(),
            both_equally: default_both_equally(),
            avoids_conflict: default_avoids_conflict(),
            prefer_a: default_prefer_a(),
            prefer_b: default_prefer_b(),
            both_useful: default_both_useful(),
            neither_useful: default_neither_useful(),
            channel_separator: default_channel_separator(),
            highlighted_channel: default_highlighted_channel(),
            free_only: default_free_only(),
            intent_definitely: default_intent_definitely(),
            intent_maybe: default_intent_maybe(),
            intent_no: default_intent_no(),
            wants_beta: default_wants_beta(),
        }
    }
}

fn default_never_keyword() -> String {
    "Nunca".to_string()
}
fn default_money() -> String {
    "Dinero prestado 💰 (me incomoda más recordar/pedir plata)".to_string()
}
fn default_objects() -> String {
    "Objetos prestados 📦 (me incomoda más recordar/pedir objetos de vuelta)".to_string()
}
fn default_both_equally() -> String {
    "Ambos por igual".to_string()
}
fn default_avoids_conflict() -> String {
    "Nunca he hecho el recordatorio (evito el conflicto)".to_string()
}
fn default_prefer_a() -> String {
    "Opción 2: Recordatorios para deudas informales (dinero u objetos prestados a amigos/familia)"
        .to_string()
}
fn default_prefer_b() -> String {
    "Opción 1: Recordatorios para cuentas recurrentes (dividendo, luz, agua, internet, etc.)"
        .to_string()
}
fn default_both_useful() -> String {
    "Ambos me parecen igual de útiles".to_string()
}
fn default_neither_useful() -> String {
    "Ninguno me parece útil".to_string()
}
fn default_channel_separator() -> char {
    ','
}
fn default_highlighted_channel() -> String {
    "WhatsApp".to_string()
}
fn default_free_only() -> String {
    "$0 - Solo lo usaría si es 100% gratis".to_string()
}
fn default_intent_definitely() -> String {
    "Sí, definitivamente lo probaría".to_string()
}
fn default_intent_maybe() -> String {
    "Tal vez, dependería de cómo funcione".to_string()
}
fn default_intent_no() -> String {
    "No, no me interesa".to_string()
}
fn default_wants_beta() -> String {
    "Sí, quiero probar la beta AHORA (deje mi contacto arriba)".to_string()
}
