/// User identifiers are plain integers.
pub type DbId = i64;

/// Article identifiers are random UUIDs assigned at creation.
pub type ArticleId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
