use uuid::Uuid;

/// Generates a record id: a UUIDv7 as 32 lowercase hex characters.
///
/// The leading 48 bits are the millisecond timestamp, so ids sort roughly by
/// creation order; the remaining bits are random.
pub fn generate_id() -> String {
    Uuid::now_v7().simple().to_string()
}
