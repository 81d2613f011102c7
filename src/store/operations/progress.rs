use crate::progress::ProgressMap;
use crate::store::{keys, Store, StoreError};

impl Store {
    /// Writes the full progress table under the fixed key and flushes before
    /// returning, so a load that follows this call observes the write.
    pub fn save_progress(&self, progress: &ProgressMap) -> Result<(), StoreError> {
        self.progress
            .insert(keys::PROGRESS_STATE, Self::serialize(progress)?)?;
        self.flush()?;
        Ok(())
    }

    /// The persisted table, or an empty one on first run.
    pub fn load_progress(&self) -> Result<ProgressMap, StoreError> {
        match self.progress.get(keys::PROGRESS_STATE)? {
            Some(raw) => Ok(Self::deserialize(&raw)?),
            None => Ok(ProgressMap::new()),
        }
    }
}
