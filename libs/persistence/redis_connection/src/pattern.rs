//! Glob matching with the subset of Redis `KEYS` syntax the cache uses:
//! `*` matches any run of characters, `?` matches exactly one, `\` escapes
//! the next character.

pub fn glob_matches(pattern: &str, key: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let key: Vec<char> = key.chars().collect();

    let (mut p, mut k) = (0, 0);
    // Position of the last `*` seen and the key index it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while k < key.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, k));
                p += 1;
            }
            Some('?') => {
                p += 1;
                k += 1;
            }
            Some('\\') if pattern.get(p + 1) == Some(&key[k]) => {
                p += 2;
                k += 1;
            }
            Some(c) if *c != '\\' && *c == key[k] => {
                p += 1;
                k += 1;
            }
            _ => {
                match backtrack {
                    Some((star, matched)) => {
                        p = star + 1;
                        k = matched + 1;
                        backtrack = Some((star, matched + 1));
                    }
                    None => return false,
                }
            }
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_wildcard() {
        assert!(glob_matches("events:*", "events:list:abc"));
        assert!(glob_matches("events:*", "events:"));
        assert!(!glob_matches("events:*", "clubs:list:abc"));
        assert!(!glob_matches("events:*", "eventsx:list"));
    }

    #[test]
    fn test_inner_and_single_wildcards() {
        assert!(glob_matches("*:detail:*", "clubs:detail:42"));
        assert!(glob_matches("events:?ist:*", "events:list:1"));
        assert!(!glob_matches("events:?ist:*", "events:llist:1"));
        assert!(glob_matches("a*b*c", "aXXbYYc"));
        assert!(!glob_matches("a*b*c", "aXXbYY"));
    }

    #[test]
    fn test_exact_and_escaped() {
        assert!(glob_matches("trending:feed:global", "trending:feed:global"));
        assert!(!glob_matches("trending:feed", "trending:feed:global"));
        assert!(glob_matches(r"literal\*", "literal*"));
        assert!(!glob_matches(r"literal\*", "literalX"));
    }

    #[test]
    fn test_star_matches_everything() {
        assert!(glob_matches("*", ""));
        assert!(glob_matches("*", "anything:at:all"));
    }
}
