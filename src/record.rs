/// A single piece of advice as issued by the server.
///
/// `id` is opaque and unique per advice item, though the endpoint may hand
/// out the same id on repeated calls. Records are immutable and replaced
/// wholesale on each successful fetch; nothing merges or patches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRecord {
    pub id: u64,
    pub text: String,
}
