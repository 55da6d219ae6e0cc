//! The short-circuiting validation chain.
//!
//! A parse step either carries a resolved value forward or terminates the
//! whole chain with the narration string the player will see. Failures here
//! are expected and user-facing, so they are plain `Result` values, never
//! panics or structured errors: the first failure anywhere in a chain is the
//! final output and no later step runs.

/// A chain value: resolved, or terminated with a player-facing message.
pub type Parse<T> = Result<T, String>;

/// Fetches the positional token at `index`, or fails with `missing`.
pub fn arg<'a>(tokens: &'a [String], index: usize, missing: impl Into<String>) -> Parse<&'a str> {
    tokens
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| missing.into())
}

/// Chain combinators beyond what `Result` itself provides.
pub trait ParseExt<T>: Sized {
    /// Resolves the carried value to a domain object, or fails with a
    /// message built from the unresolvable value.
    fn resolve<U>(
        self,
        resolver: impl FnOnce(&T) -> Option<U>,
        not_found: impl FnOnce(&T) -> String,
    ) -> Parse<U>;
}

impl<T> ParseExt<T> for Parse<T> {
    fn resolve<U>(
        self,
        resolver: impl FnOnce(&T) -> Option<U>,
        not_found: impl FnOnce(&T) -> String,
    ) -> Parse<U> {
        self.and_then(|value| resolver(&value).ok_or_else(|| not_found(&value)))
    }
}

/// Combinators specific to token-carrying chains.
pub trait TokenExt: Sized {
    /// Requires the carried token to be a specific literal word.
    fn expect_word(self, word: &str, message: impl Into<String>) -> Parse<()>;
}

impl TokenExt for Parse<&str> {
    fn expect_word(self, word: &str, message: impl Into<String>) -> Parse<()> {
        match self {
            Ok(token) if token.eq_ignore_ascii_case(word) => Ok(()),
            Ok(_) => Err(message.into()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn arg_fetches_or_fails_with_custom_message() {
        let ts = tokens("GO EAST");
        assert_eq!(arg(&ts, 1, "Go where?"), Ok("EAST"));
        assert_eq!(arg(&ts, 2, "Go where?"), Err("Go where?".to_string()));
    }

    #[test]
    fn first_failure_short_circuits_the_chain() {
        let ts = tokens("GO");
        let result = arg(&ts, 1, "Go where?")
            .resolve(
                |_| -> Option<()> { unreachable!("resolver must not run after a failure") },
                |_| unreachable!("message builder must not run after a failure"),
            )
            .map(|()| "reached");
        assert_eq!(result, Err("Go where?".to_string()));
    }

    #[test]
    fn resolve_builds_message_from_the_bad_token() {
        let ts = tokens("GO SIDEWAYS");
        let result: Parse<()> = arg(&ts, 1, "Go where?").resolve(
            |_| None,
            |token| format!("Don't understand direction {token}."),
        );
        assert_eq!(result, Err("Don't understand direction SIDEWAYS.".to_string()));
    }

    #[test]
    fn expect_word_matches_case_insensitively() {
        let ts = tokens("ATTACK TROLL WITH AXE");
        assert_eq!(arg(&ts, 2, "?").expect_word("with", "no WITH"), Ok(()));
        assert_eq!(
            arg(&ts, 1, "?").expect_word("with", "no WITH"),
            Err("no WITH".to_string())
        );
    }
}
