use uuid::Uuid;

/// Length of the canonical hyphenated form, e.g. `fd1684ea-7970-4994-92d6-61dcc7905f2b`.
const HYPHENATED_LEN: usize = 36;

/// Whether `s` is a UUID in hyphenated 8-4-4-4-12 form (either case).
///
/// Simple, braced and URN encodings are rejected even though [`Uuid`] parses them.
pub fn is_uuid(s: &str) -> bool {
    s.len() == HYPHENATED_LEN && Uuid::try_parse(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("fd1684ea-7970-4994-92d6-61dcc7905f2b")]
    #[case("FD1684EA-7970-4994-92D6-61DCC7905F2B")]
    #[case("00000000-0000-0000-0000-000000000000")]
    fn test_valid_uuids(#[case] input: &str) {
        assert!(is_uuid(input), "{input} should be a UUID");
    }

    #[rstest]
    #[case("")]
    #[case("my-instance-431342")]
    #[case("fd1684ea-7970-4994-92d6-61dcc7905f2")]
    #[case("fd1684ea7970499492d661dcc7905f2b")]
    #[case("{fd1684ea-7970-4994-92d6-61dcc7905f2b}")]
    #[case("urn:uuid:fd1684ea-7970-4994-92d6-61dcc7905f2b")]
    #[case("fd1684ea-7970-4994-92d6-61dcc7905f2g")]
    fn test_invalid_uuids(#[case] input: &str) {
        assert!(!is_uuid(input), "{input} should not be a UUID");
    }
}
