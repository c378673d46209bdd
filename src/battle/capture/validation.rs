use crate::monster::Individual;
use schema::TrainerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaptureError {
    /// Target already belongs to a trainer
    AlreadyOwned { owner: TrainerId },
}

/// Only wild (unowned) creatures can be captured.
pub fn can_attempt_capture(target: &Individual) -> Result<(), CaptureError> {
    match target.owner {
        Some(owner) => Err(CaptureError::AlreadyOwned { owner }),
        None => Ok(()),
    }
}
