//! Periodic character sync from the external source

pub mod source;
pub mod task;

pub use source::{CharacterSource, SourceCharacter, SourcePage};
pub use task::{SyncRunner, SyncStats, SyncTask, SyncTaskConfig};

#[cfg(test)]
pub use source::mock::MockCharacterSource;
