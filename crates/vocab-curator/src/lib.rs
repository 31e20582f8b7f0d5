pub mod classifier;
pub mod config;
pub mod entities;
pub mod progress;
pub mod reducer;
pub mod report;
pub mod session;

pub use classifier::{Classifier, ScriptedClassifier, TerminalClassifier, parse_answer};
pub use config::{Config, ConfigError};
pub use entities::{EntitySummary, extract_entities};
pub use progress::ProgressReport;
pub use reducer::{Acceptance, BATCH_SIZE, ReductionStats, Step, VocabularyState};
pub use report::{ReportFormat, render_report};
pub use session::{Session, SessionEnd};
