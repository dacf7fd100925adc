/// Blocklist of argument patterns for known destructive flag combinations.
///
/// A match is a hard stop, not a confirmation prompt: forced pushes, hard
/// resets and forced deletion cause irreversible data loss, and the agent
/// composing the command may not surface that risk to the user in readable
/// form. Matching is case-insensitive substring containment, in list order.
///
/// Substring matching can false-positive inside an unrelated argument (a path
/// containing a blocked word) and false-negative on equivalent spellings
/// (combined short flags). That trade-off is intentional; this list is a
/// starting policy, not a completeness guarantee.
pub const DANGEROUS_PATTERNS: &[&str] = &[
    "--force",
    "-f",
    "--hard",
    "clean -fd",
    "clean -f",
    "--delete",
    "-D",
    "reset --hard",
    "push --force",
    "push -f",
];

/// Scan raw args for a blocklisted pattern, returning the first match.
pub fn find_dangerous_pattern(args: &str) -> Option<&'static str> {
    let args_lower = args.to_lowercase();
    DANGEROUS_PATTERNS
        .iter()
        .copied()
        .find(|pattern| args_lower.contains(&pattern.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_for_safe_args() {
        assert_eq!(find_dangerous_pattern(""), None);
        assert_eq!(find_dangerous_pattern("--oneline -5"), None);
        assert_eq!(find_dangerous_pattern("origin main"), None);
        assert_eq!(find_dangerous_pattern("-m \"fix typo\""), None);
    }

    #[test]
    fn test_force_flag_detected() {
        assert_eq!(find_dangerous_pattern("--force"), Some("--force"));
        assert_eq!(find_dangerous_pattern("origin main --force"), Some("--force"));
        assert_eq!(find_dangerous_pattern("-f origin main"), Some("-f"));
    }

    #[test]
    fn test_hard_reset_detected() {
        assert_eq!(find_dangerous_pattern("--hard HEAD~1"), Some("--hard"));
    }

    #[test]
    fn test_branch_deletion_detected() {
        assert_eq!(find_dangerous_pattern("--delete feature"), Some("--delete"));
        assert_eq!(find_dangerous_pattern("-D feature"), Some("-D"));
        // "-D" lowercases to "-d", so lowercase deletion is caught as well
        assert_eq!(find_dangerous_pattern("-d feature"), Some("-D"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(find_dangerous_pattern("--FORCE"), Some("--force"));
        assert_eq!(find_dangerous_pattern("--Hard head~1"), Some("--hard"));
    }

    #[test]
    fn test_first_match_wins() {
        // Both "--force" and "--hard" present; list order decides
        assert_eq!(find_dangerous_pattern("--force --hard"), Some("--force"));
    }

    #[test]
    fn test_substring_false_positive_is_accepted_behavior() {
        // "-f" matches inside longer flags; a known cost of substring matching
        assert_eq!(find_dangerous_pattern("--follow file.txt"), Some("-f"));
    }

    #[test]
    fn test_shell_metacharacters_alone_are_not_patterns() {
        // Injection is neutralized by argv execution, not by this scanner
        assert_eq!(find_dangerous_pattern("; rm -r /tmp/x"), None);
    }
}
