use serde::{Deserialize, Serialize};

/// Time interval used to group transactions on charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucketing {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl Bucketing {
    pub fn code(&self) -> &'static str {
        match self {
            Bucketing::Daily => "daily",
            Bucketing::Weekly => "weekly",
            Bucketing::Monthly => "monthly",
        }
    }
}
