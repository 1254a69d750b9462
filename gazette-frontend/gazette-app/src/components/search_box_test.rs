#[cfg(test)]
mod tests {
    use crate::components::search_box::{normalize_query, QuerySequence};

    #[test]
    fn short_queries_never_search() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("a"), None);
        assert_eq!(normalize_query("   a   "), None);
        // whitespace only, however much of it
        assert_eq!(normalize_query("        "), None);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(normalize_query("  rust  "), Some("rust".to_string()));
        assert_eq!(normalize_query("ab"), Some("ab".to_string()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // two multi-byte characters pass the minimum, one does not
        assert_eq!(normalize_query("éé"), Some("éé".to_string()));
        assert_eq!(normalize_query("é"), None);
    }

    #[test]
    fn newer_keystroke_supersedes_pending_timer() {
        let sequence = QuerySequence::default();
        let first = sequence.advance();
        let second = sequence.advance();
        // the first timer wakes up to find itself stale and must bail
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }

    #[test]
    fn stale_response_is_not_rendered() {
        let sequence = QuerySequence::default();
        let slow = sequence.advance();
        let fast = sequence.advance();
        // the slow request resolves after the fast one was issued; whichever
        // order the responses arrive in, only the latest generation renders
        assert!(sequence.is_current(fast));
        assert!(!sequence.is_current(slow));
    }

    #[test]
    fn clearing_the_input_supersedes_everything() {
        let sequence = QuerySequence::default();
        let pending = sequence.advance();
        // a < 2 char keystroke still advances the generation, cancelling the
        // pending request without any network traffic
        sequence.advance();
        assert!(!sequence.is_current(pending));
    }
}
