// Core configuration types
mod core;
mod loader;
mod thresholds;

pub use self::core::{AnswerCatalog, ProductNames, QuestionLabels, SurveyConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::DecisionThresholds;
