//! Pipeline stages: extraction, description lookup, list derivation,
//! classification and use-case generation

pub mod classifier;
pub mod extractor;
pub mod fallback;
pub mod fields;
pub mod listing;
pub mod prompt;
pub mod resolver;
pub mod use_cases;

pub use classifier::classify;
pub use extractor::{Extracted, HtmlExtraction, extract_html, extract_json};
pub use fallback::{Attempts, Outcome, StepFailure, StepResult};
pub use fields::FieldGenerator;
pub use resolver::{DescriptionResolver, DescriptionSource, ResolvedDescription};
pub use use_cases::UseCaseGenerator;
