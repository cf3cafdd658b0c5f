/// Avatar letter for a display name: the first non-whitespace character,
/// uppercased. Empty or blank names yield an empty string.
pub fn avatar_initial(name: &str) -> String {
    name.trim_start()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased_first_character() {
        assert_eq!(avatar_initial("ada lovelace"), "A");
        assert_eq!(avatar_initial("Grace"), "G");
        assert_eq!(avatar_initial("  émile"), "É");
    }

    #[test]
    fn empty_or_blank_names_have_no_initial() {
        assert_eq!(avatar_initial(""), "");
        assert_eq!(avatar_initial("   "), "");
    }
}
