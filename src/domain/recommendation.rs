/// One ranked counterpart in a recommendation list: the matched entity's id
/// and its cosine similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry {
    pub id: String,
    pub score: f32,
}
