//! Address list normalization.
//!
//! # Responsibilities
//! - Remove IPv6 literal brackets from the header value
//! - Split the value into hop tokens
//! - Rewrite IPv4-mapped IPv6 tokens to dotted-decimal IPv4
//!
//! # Design Decisions
//! - Works on raw header bytes: brackets, commas and whitespace are ASCII,
//!   so values that are not valid text are still stripped and split
//! - Whitespace is trimmed only for tokens produced by a comma split;
//!   a value without commas is kept verbatim
//! - The prefix check is an exact, case-sensitive `::ffff` match
//! - A `%zone` suffix is dropped when the address unmaps to IPv4 and kept otherwise

use std::borrow::Cow;
use std::net::IpAddr;

use crate::xff::MAPPED_PREFIX;

/// Outcome of normalizing a single hop token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedToken<'a> {
    /// Token without the `::ffff` prefix, kept as written.
    Passthrough(&'a [u8]),
    /// Prefixed token that parsed; holds the unmapped address and any
    /// zone that survives unmapping.
    Unmapped {
        addr: IpAddr,
        zone: Option<&'a [u8]>,
    },
    /// Prefixed token that failed to parse, kept as written.
    Unparsed(&'a [u8]),
}

impl<'a> NormalizedToken<'a> {
    /// Classify and normalize one token.
    pub fn from_token(token: &'a [u8]) -> Self {
        if !token.starts_with(MAPPED_PREFIX.as_bytes()) {
            return NormalizedToken::Passthrough(token);
        }

        match parse_zoned(token) {
            Some((addr, zone)) => {
                let addr = addr.to_canonical();
                let zone = if addr.is_ipv4() { None } else { zone };
                NormalizedToken::Unmapped { addr, zone }
            }
            None => {
                tracing::debug!(
                    token = %String::from_utf8_lossy(token),
                    "Mapped-prefix token did not parse, keeping original text"
                );
                NormalizedToken::Unparsed(token)
            }
        }
    }

    /// Output text of this token.
    pub fn to_bytes(&self) -> Cow<'a, [u8]> {
        match *self {
            NormalizedToken::Passthrough(text) | NormalizedToken::Unparsed(text) => Cow::Borrowed(text),
            NormalizedToken::Unmapped { addr, zone: None } => Cow::Owned(addr.to_string().into_bytes()),
            NormalizedToken::Unmapped { addr, zone: Some(zone) } => {
                let mut out = format!("{}%", addr).into_bytes();
                out.extend_from_slice(zone);
                Cow::Owned(out)
            }
        }
    }
}

/// Parse `addr` or `addr%zone`. An empty zone is rejected.
fn parse_zoned(token: &[u8]) -> Option<(IpAddr, Option<&[u8]>)> {
    let (addr, zone) = match token.iter().position(|&b| b == b'%') {
        Some(i) if i + 1 == token.len() => return None,
        Some(i) => (&token[..i], Some(&token[i + 1..])),
        None => (token, None),
    };

    let addr = std::str::from_utf8(addr).ok()?.parse::<IpAddr>().ok()?;
    Some((addr, zone))
}

/// Result of rewriting a full header value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rewrite {
    /// Comma-joined canonical address list.
    pub value: Vec<u8>,
    /// Number of tokens in the output.
    pub tokens: usize,
    /// Tokens that were parsed and unmapped.
    pub unmapped: usize,
    /// Prefixed tokens that fell back to their original text.
    pub unparsed: usize,
}

/// Remove every `[` and `]` from the value, wherever they appear.
pub fn strip_brackets(value: &[u8]) -> Vec<u8> {
    value.iter().copied().filter(|b| !matches!(b, b'[' | b']')).collect()
}

/// Split a bracket-free value into raw hop tokens.
pub fn split_tokens(value: &[u8]) -> Vec<&[u8]> {
    if value.contains(&b',') {
        value.split(|&b| b == b',').map(trim_token).collect()
    } else {
        vec![value]
    }
}

fn trim_token(token: &[u8]) -> &[u8] {
    match std::str::from_utf8(token) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => token.trim_ascii(),
    }
}

/// Rewrite a raw header value into its canonical form.
pub fn rewrite(value: &[u8]) -> Rewrite {
    let stripped = strip_brackets(value);
    let mut out = Rewrite::default();

    for token in split_tokens(&stripped) {
        let normalized = NormalizedToken::from_token(token);
        match normalized {
            NormalizedToken::Unmapped { .. } => out.unmapped += 1,
            NormalizedToken::Unparsed(_) => out.unparsed += 1,
            NormalizedToken::Passthrough(_) => {}
        }

        if out.tokens > 0 {
            out.value.push(b',');
        }
        out.value.extend_from_slice(&normalized.to_bytes());
        out.tokens += 1;
    }

    out
}

/// Rewrite a textual header value, returning only the new value.
pub fn normalize_value(value: &str) -> String {
    // Only ASCII is removed or inserted, so text in means text out.
    String::from_utf8_lossy(&rewrite(value.as_bytes()).value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_strip_brackets_anywhere() {
        assert_eq!(strip_brackets(b"[::1]"), b"::1");
        assert_eq!(strip_brackets(b"1.2[.3]].4"), b"1.2.3.4");
        assert_eq!(strip_brackets(b"]["), b"");
        assert_eq!(strip_brackets(b"[caf\xc3\xa9]"), b"caf\xc3\xa9");
    }

    #[test]
    fn test_split_trims_only_after_comma() {
        assert_eq!(split_tokens(b" 1.2.3.4 ,  5.6.7.8"), vec![&b"1.2.3.4"[..], &b"5.6.7.8"[..]]);
        assert_eq!(split_tokens(b"  1.2.3.4  "), vec![&b"  1.2.3.4  "[..]]);
        assert_eq!(split_tokens(b""), vec![&b""[..]]);
        assert_eq!(split_tokens(b","), vec![&b""[..], &b""[..]]);
        assert_eq!(split_tokens(b"a , \xff\xfe "), vec![&b"a"[..], &b"\xff\xfe"[..]]);
    }

    #[test]
    fn test_token_classification() {
        assert_eq!(
            NormalizedToken::from_token(b"1.2.3.4"),
            NormalizedToken::Passthrough(b"1.2.3.4")
        );
        assert_eq!(
            NormalizedToken::from_token(b"::ffff:2a5b:3cde"),
            NormalizedToken::Unmapped {
                addr: IpAddr::V4(Ipv4Addr::new(42, 91, 60, 222)),
                zone: None,
            }
        );
        assert_eq!(
            NormalizedToken::from_token(b"::ffff:1.2.3.4"),
            NormalizedToken::Unmapped {
                addr: IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)),
                zone: None,
            }
        );
        assert_eq!(
            NormalizedToken::from_token(b"::ffff:not-an-ip"),
            NormalizedToken::Unparsed(b"::ffff:not-an-ip")
        );
        assert_eq!(
            NormalizedToken::from_token(b"::ffff:\xff"),
            NormalizedToken::Unparsed(b"::ffff:\xff")
        );
        // Prefix match is case-sensitive.
        assert_eq!(
            NormalizedToken::from_token(b"::FFFF:2a5b:3cde"),
            NormalizedToken::Passthrough(b"::FFFF:2a5b:3cde")
        );
    }

    #[test]
    fn test_prefixed_but_not_mapped_is_canonicalized() {
        let token = NormalizedToken::from_token(b"::ffff:1:2:3");
        assert!(matches!(token, NormalizedToken::Unmapped { addr: IpAddr::V6(_), .. }));
        assert_eq!(&*token.to_bytes(), b"::ffff:1:2:3");
    }

    #[test]
    fn test_zone_dropped_when_unmapped_to_ipv4() {
        assert_eq!(normalize_value("1.2.3.4, [::ffff:1.2.3.4%eth0]"), "1.2.3.4,1.2.3.4");
        assert_eq!(normalize_value("::ffff:2a5b:3cde%1"), "42.91.60.222");
    }

    #[test]
    fn test_zone_kept_on_ipv6() {
        assert_eq!(normalize_value("::ffff:0001:2:3%eth0, 1.2.3.4"), "::ffff:1:2:3%eth0,1.2.3.4");
        // An empty zone does not parse.
        assert_eq!(normalize_value("::ffff:1.2.3.4%, 1.2.3.4"), "::ffff:1.2.3.4%,1.2.3.4");
    }

    #[test]
    fn test_rewrite_counts() {
        let result = rewrite(b"[::ffff:2a5b:3cde], ::ffff:zz, 1.2.3.4");
        assert_eq!(result.value, b"42.91.60.222,::ffff:zz,1.2.3.4");
        assert_eq!(result.tokens, 3);
        assert_eq!(result.unmapped, 1);
        assert_eq!(result.unparsed, 1);
    }

    #[test]
    fn test_rewrite_non_text_value() {
        let result = rewrite(b"[2001:db8::1], caf\xc3\xa9 , [\xff]");
        assert_eq!(result.value, b"2001:db8::1,caf\xc3\xa9,\xff");
        assert_eq!(result.tokens, 3);
    }

    #[test]
    fn test_single_value_keeps_whitespace() {
        assert_eq!(normalize_value("  [::1]  "), "  ::1  ");
        // Untrimmed, so the prefix check does not see `::ffff` first.
        assert_eq!(normalize_value(" ::ffff:2a5b:3cde"), " ::ffff:2a5b:3cde");
        assert_eq!(normalize_value("::ffff:2a5b:3cde"), "42.91.60.222");
    }

    #[test]
    fn test_empty_segments_survive() {
        assert_eq!(normalize_value("1.2.3.4,,5.6.7.8"), "1.2.3.4,,5.6.7.8");
        assert_eq!(normalize_value(" , "), ",");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "1.2.3.4, [2001:0db8:85a3:0000:0000:8a2e:0370:7334]",
            "[::ffff:2a5b:3cde], ::ffff:2a6b:3cde, 1.2.3.4",
            "::ffff:bogus, [::ffff:10.0.0.1]",
            "[::ffff:1.2.3.4%eth0], ::ffff:1:2:3%lo",
            "",
        ];
        for input in inputs {
            let once = normalize_value(input);
            assert_eq!(normalize_value(&once), once, "input: {input:?}");
        }
    }
}
