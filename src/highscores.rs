//! High score leaderboard
//!
//! Persisted to LocalStorage as a flat JSON array of scores, best first,
//! top 10 only. A missing or unreadable store reads as an empty board.

use crate::consts::MAX_LEADERBOARD_ENTRIES;

/// Errors decoding or encoding the stored board
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Failed to decode leaderboard: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode leaderboard: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Top scores, sorted descending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    scores: Vec<u64>,
}

impl Leaderboard {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "leaderboard";

    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from arbitrary scores, normalizing order and length
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_LEADERBOARD_ENTRIES);
        Self { scores }
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.scores.first().copied()
    }

    /// Append a score, re-sort, keep the top entries.
    /// Returns the rank achieved (1-indexed) or None if it fell off the board.
    pub fn record(&mut self, score: u64) -> Option<usize> {
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        self.scores.insert(pos, score);
        self.scores.truncate(MAX_LEADERBOARD_ENTRIES);

        (pos < MAX_LEADERBOARD_ENTRIES).then_some(pos + 1)
    }

    pub fn from_json(json: &str) -> Result<Self, LeaderboardError> {
        let scores: Vec<u64> = serde_json::from_str(json).map_err(LeaderboardError::Decode)?;
        Ok(Self::from_scores(scores))
    }

    pub fn to_json(&self) -> Result<String, LeaderboardError> {
        serde_json::to_string(&self.scores).map_err(LeaderboardError::Encode)
    }

    /// Decode a stored board, treating absent or corrupt data as empty
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("{}; starting fresh", e);
                Self::new()
            }),
            None => Self::new(),
        }
    }

    /// Render as the end-of-game leaderboard markup
    pub fn to_html(&self) -> String {
        let mut html = String::from("<h2>Leaderboard</h2><ol>");
        for score in &self.scores {
            html.push_str(&format!("<li>{}</li>", score));
        }
        html.push_str("</ol>");
        html
    }

    /// Load the board from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();

        let board = Self::from_stored(stored.as_deref());
        log::info!("Loaded {} leaderboard entries", board.scores.len());
        board
    }

    /// Save the board to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable - leaderboard not saved");
            return;
        };
        match self.to_json() {
            Ok(json) => {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::warn!("Failed to write leaderboard");
                } else {
                    log::info!("Leaderboard saved ({} entries)", self.scores.len());
                }
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Record a finished run: read the stored board, add the score, write it back.
/// Returns the updated board for display.
pub fn save_score(score: u64) -> Leaderboard {
    let mut board = Leaderboard::load();
    match board.record(score) {
        Some(rank) => log::info!("Score {} placed #{}", score, rank),
        None => log::info!("Score {} did not make the leaderboard", score),
    }
    board.save();
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_sorted_top_ten() {
        let mut board = Leaderboard::new();
        for score in [30, 10, 50, 20, 40, 60, 0, 70, 80, 90] {
            board.record(score);
        }
        assert_eq!(board.scores(), &[90, 80, 70, 60, 50, 40, 30, 20, 10, 0]);

        assert_eq!(board.record(45), Some(6));
        assert_eq!(board.scores().len(), 10);
        assert_eq!(board.scores()[9], 10);

        assert_eq!(board.record(5), None);
        assert_eq!(board.top_score(), Some(90));
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut board = Leaderboard::from_scores(vec![20, 10]);
        assert_eq!(board.record(20), Some(2));
        assert_eq!(board.scores(), &[20, 20, 10]);
    }

    #[test]
    fn test_from_json_normalizes() {
        let board = Leaderboard::from_json("[5, 100, 20, 1, 2, 3, 4, 6, 7, 8, 9, 10]").unwrap();
        assert_eq!(board.scores().len(), 10);
        assert_eq!(board.scores()[0], 100);
        assert_eq!(board.to_json().unwrap(), "[100,20,10,9,8,7,6,5,4,3]");
    }

    #[test]
    fn test_corrupt_or_missing_store_is_empty() {
        assert!(Leaderboard::from_stored(None).is_empty());
        assert!(Leaderboard::from_stored(Some("not json")).is_empty());
        assert!(Leaderboard::from_stored(Some("null")).is_empty());
        assert!(Leaderboard::from_stored(Some(r#"{"scores": 1}"#)).is_empty());
        assert_eq!(
            Leaderboard::from_stored(Some("[10]")).scores(),
            &[10]
        );
    }

    #[test]
    fn test_html_listing() {
        let board = Leaderboard::from_scores(vec![10, 30]);
        assert_eq!(
            board.to_html(),
            "<h2>Leaderboard</h2><ol><li>30</li><li>10</li></ol>"
        );
        assert_eq!(Leaderboard::new().to_html(), "<h2>Leaderboard</h2><ol></ol>");
    }
}
