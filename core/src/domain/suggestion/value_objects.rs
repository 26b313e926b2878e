#[derive(Debug, Clone)]
pub struct GenerateSuggestionsInput {
    pub prompt: String,
    /// Recipe names already rejected in this search session, fed back to
    /// the model as a negative constraint. Accumulates across
    /// regenerations; never replaced mid-session.
    pub excluded: Vec<String>,
}
