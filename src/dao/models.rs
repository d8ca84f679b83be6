use serde::{Deserialize, Deserializer, Serialize, de};

/// Key under which the signed-in user's record is stored.
pub const PROFILE_KEY: &str = "ramble_user";

/// Stored form of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Display name.
    pub name: String,
    pub email: String,
    pub points: u64,
    /// Weekly rank, 1 being best. A stored zero makes the record corrupted.
    #[serde(deserialize_with = "positive_rank")]
    pub rank: u32,
}

fn positive_rank<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match u32::deserialize(deserializer)? {
        0 => Err(de::Error::custom("rank starts at 1")),
        rank => Ok(rank),
    }
}
