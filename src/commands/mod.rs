pub mod show;

use anyhow::{bail, Result};

use crate::presentation::PageSize;

/// Parse a `--per-page` value against the number of fetched players
///
/// Accepts 25, 50, 100 or "all". Anything else is an error so that a typo
/// does not silently fall back to the default size.
pub fn parse_page_size(value: &str, total_players: usize) -> Result<PageSize> {
    match PageSize::parse(value, total_players) {
        Some(size) => Ok(size),
        None => bail!("Invalid page size '{}'. Use 25, 50, 100 or all", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_size() {
        assert_eq!(parse_page_size("50", 10).unwrap(), PageSize::Fifty);
        assert_eq!(parse_page_size("ALL", 10).unwrap(), PageSize::All(10));
        let err = parse_page_size("30", 10).unwrap_err();
        assert!(err.to_string().contains("Invalid page size '30'"));
    }
}
