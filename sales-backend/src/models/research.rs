use serde::{Deserialize, Serialize};

/// Pre-visit notes. At most one per schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub id: u64,
    pub schedule_id: u64,
    pub user_id: u64,
    pub customer_info: String,
    pub market_analysis: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateResearchRequest {
    #[serde(default)]
    pub customer_info: String,
    #[serde(default)]
    pub market_analysis: String,
    #[serde(default)]
    pub notes: String,
}
