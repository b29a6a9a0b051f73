//! Intent definitions, the registry that holds them, and the training
//! corpus derived from their example patterns.

pub mod builtin;
pub mod corpus;
pub mod registry;

pub use builtin::builtin_intents;
pub use corpus::{CorpusEntry, TrainingCorpus};
pub use registry::{Intent, IntentRegistry};
