use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Component instance ID generator
///
/// IDs look like `comp_<epoch-ms>_<9 base36 chars>`. The timestamp part never
/// goes backwards within one generator, so IDs are never reused even when
/// the wall clock stalls or steps back.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh ID
    pub fn new_id(&mut self) -> String {
        self.new_id_at(chrono::Utc::now().timestamp_millis())
    }

    /// Generate an ID for the given wall-clock time
    pub fn new_id_at(&mut self, now_millis: i64) -> String {
        let millis = if now_millis > self.last_millis {
            now_millis
        } else {
            self.last_millis + 1
        };
        self.last_millis = millis;

        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();

        format!("comp_{}_{}", millis, suffix)
    }

    /// Make sure later IDs sort after an ID this generator did not produce
    ///
    /// Used after restoring instances from a snapshot or saved state.
    pub fn observe(&mut self, id: &str) {
        if let Some(millis) = parse_millis(id) {
            self.last_millis = self.last_millis.max(millis);
        }
    }
}

fn parse_millis(id: &str) -> Option<i64> {
    id.strip_prefix("comp_")?.split('_').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_format() {
        let mut gen = IdGenerator::new();
        let id = gen.new_id_at(1_700_000_000_000);

        assert!(id.starts_with("comp_1700000000000_"));
        let suffix = id.rsplit('_').next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_monotonic_when_clock_stalls() {
        let mut gen = IdGenerator::new();
        let a = gen.new_id_at(1000);
        let b = gen.new_id_at(1000);
        let c = gen.new_id_at(900);

        assert_eq!(parse_millis(&a), Some(1000));
        assert_eq!(parse_millis(&b), Some(1001));
        assert_eq!(parse_millis(&c), Some(1002));
    }

    #[test]
    fn test_ids_unique() {
        let mut gen = IdGenerator::new();
        let ids: HashSet<String> = (0..500).map(|_| gen.new_id()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_observe_moves_clock_forward() {
        let mut gen = IdGenerator::new();
        gen.observe("comp_5000_abcdefghi");
        gen.observe("not-an-id");
        let id = gen.new_id_at(10);
        assert_eq!(parse_millis(&id), Some(5001));
    }
}
