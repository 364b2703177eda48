//! The string-shorthand micro-grammar.
//!
//! A shorthand pattern is a space-separated token chain read left to right:
//! modifiers (`optional`, `nullable`), then a type name; the container types
//! `array` and `observable` treat the *remaining* chain as the pattern for
//! their content. `"optional array observable number"` reads: if present,
//! must be an array each element of which is an observable wrapping a number.
//!
//! Chains are tokenized and structurally checked eagerly, so `unknown type`
//! and `invalid pattern` errors surface when the pattern is built, never in
//! the middle of a validation walk.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::registry::TypeName;

// ============================================================================
// TOKENS
// ============================================================================

/// One token of a shorthand chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Succeed immediately when the value is absent.
    Optional,
    /// Succeed immediately when the value is exactly null.
    Nullable,
    /// Check the value against a registry type.
    Type(TypeName),
}

impl Token {
    /// The token's source spelling.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Nullable => "nullable",
            Self::Type(t) => t.name(),
        }
    }
}

// ============================================================================
// TOKEN CHAINS
// ============================================================================

/// A parsed, structurally valid shorthand token chain.
///
/// # Examples
///
/// ```rust
/// use shapecheck_validator::pattern::TokenChain;
///
/// let chain: TokenChain = "optional array number".parse().unwrap();
/// assert_eq!(chain.to_string(), "optional array number");
///
/// assert!("array Sith Lord".parse::<TokenChain>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenChain {
    tokens: Vec<Token>,
}

impl TokenChain {
    /// Parses a shorthand pattern string.
    ///
    /// Rejected eagerly:
    /// - the empty chain;
    /// - any token that is neither a modifier nor a registered type;
    /// - a non-container type followed by further tokens
    ///   (`"number string"`);
    /// - a chain ending on a modifier (`"array optional"`).
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let tokens = pattern
            .split_whitespace()
            .map(|token| match token {
                "optional" => Ok(Token::Optional),
                "nullable" => Ok(Token::Nullable),
                _ => TypeName::from_token(token)
                    .map(Token::Type)
                    .ok_or_else(|| PatternError::UnknownType(token.to_owned())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Some(last) = tokens.last() else {
            return Err(PatternError::Empty);
        };
        for token in &tokens[..tokens.len() - 1] {
            if let Token::Type(t) = token {
                if !t.is_container() {
                    return Err(PatternError::TrailingTokens(t.name()));
                }
            }
        }
        match last {
            Token::Optional | Token::Nullable => {
                return Err(PatternError::DanglingModifier(last.name()));
            }
            Token::Type(_) => {}
        }

        Ok(Self { tokens })
    }

    /// The tokens, in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl FromStr for TokenChain {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TokenChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token.name())?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("string")]
    #[case("optional number")]
    #[case("nullable object")]
    #[case("array number")]
    #[case("observable string")]
    #[case("optional array observable number")]
    #[case("array nullable number")]
    #[case("date")]
    fn accepts_valid_chains(#[case] pattern: &str) {
        assert!(TokenChain::parse(pattern).is_ok(), "{pattern}");
    }

    #[rstest]
    #[case("", PatternError::Empty)]
    #[case("   ", PatternError::Empty)]
    #[case("Sith Lord", PatternError::UnknownType("Sith".into()))]
    #[case("array wookie", PatternError::UnknownType("wookie".into()))]
    #[case("number string", PatternError::TrailingTokens("number"))]
    #[case("string optional", PatternError::TrailingTokens("string"))]
    #[case("array optional", PatternError::DanglingModifier("optional"))]
    #[case("nullable", PatternError::DanglingModifier("nullable"))]
    fn rejects_invalid_chains(#[case] pattern: &str, #[case] expected: PatternError) {
        assert_eq!(TokenChain::parse(pattern), Err(expected));
    }

    #[test]
    fn display_round_trips() {
        let chain = TokenChain::parse("optional  array   observable number").unwrap();
        assert_eq!(chain.to_string(), "optional array observable number");
    }
}
