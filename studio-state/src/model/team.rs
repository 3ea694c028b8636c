use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}
