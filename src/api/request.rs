//! Request types for the education payroll API.
//!
//! Most endpoints accept the calculator input types directly; this module
//! holds the bodies that wrap them.

use serde::{Deserialize, Serialize};

use crate::models::NiceRecord;

/// Request body for `POST /annual-leave/records/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummaryRequest {
    /// Rows copied from the NEIS work-status list.
    pub records: Vec<NiceRecord>,
}
