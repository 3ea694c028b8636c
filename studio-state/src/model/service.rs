use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}
