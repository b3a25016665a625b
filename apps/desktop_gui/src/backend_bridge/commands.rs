//! Backend commands queued from UI to backend worker.

use shared::domain::FieldSnapshot;

pub enum BackendCommand {
    /// Encode the snapshot and submit it to the prediction service.
    Predict { snapshot: FieldSnapshot },
    /// Probe the service health endpoint and report reachability.
    CheckHealth,
}
