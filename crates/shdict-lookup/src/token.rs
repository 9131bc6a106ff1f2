//! Callback tokens carried by list controls.
//!
//! A token is `<prefix>|<json>`. The prefix names the action, the JSON
//! payload holds everything needed to redo the lookup, so no state is kept
//! between interactions. `|` is escaped inside the payload, which makes the
//! first `|` the separator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{TokenError, pager::MAX_PAGE};

/// Separator between prefix and payload.
const SEPARATOR: char = '|';

/// Which lookup a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    /// Definition lookup.
    Definition,
    /// Homophone lookup.
    Homophone,
}

impl SearchKind {
    /// Namespace part of the token prefix.
    fn namespace(self) -> &'static str {
        match self {
            Self::Definition => "shdef",
            Self::Homophone => "homophone",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition => f.write_str("definition"),
            Self::Homophone => f.write_str("homophone"),
        }
    }
}

/// What to redo when a page control is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePayload {
    /// Trimmed query text.
    pub query: String,
    /// Source filter, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Zero-based page to show.
    pub page: usize,
}

impl PagePayload {
    /// Creates a payload.
    pub fn new(query: impl Into<String>, source: Option<&str>, page: usize) -> Self {
        Self {
            query: query.into(),
            source: source.map(str::to_string),
            page,
        }
    }

    /// The same lookup at another page.
    pub fn at_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// Payload as it arrives; the page is signed so negatives can be reported.
#[derive(Deserialize)]
struct RawPagePayload {
    /// Query text.
    query: String,
    /// Source filter.
    #[serde(default)]
    source: Option<String>,
    /// Page number.
    page: i64,
}

/// A decoded callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show another page of a lookup.
    GoToPage {
        /// Lookup kind.
        kind: SearchKind,
        /// Lookup to redo.
        payload: PagePayload,
    },
    /// Show one entry.
    Select {
        /// Lookup kind the entry was listed by.
        kind: SearchKind,
        /// Entry id.
        id: String,
    },
}

impl Action {
    /// Token prefix of this action.
    pub fn prefix(&self) -> String {
        match self {
            Self::GoToPage { kind, .. } => format!("{}:goToPage", kind.namespace()),
            Self::Select { kind, .. } => format!("{}:select", kind.namespace()),
        }
    }

    /// Encodes the action as `<prefix>|<json>`.
    pub fn encode(&self) -> String {
        let json = match self {
            Self::GoToPage { payload, .. } => {
                let source = payload
                    .source
                    .as_deref()
                    .map(|s| format!(r#","source":{}"#, json_string(s)))
                    .unwrap_or_default();
                format!(
                    r#"{{"query":{}{source},"page":{}}}"#,
                    json_string(&payload.query),
                    payload.page
                )
            }
            Self::Select { id, .. } => json_string(id),
        };
        format!("{}{SEPARATOR}{}", self.prefix(), escape(&json))
    }

    /// Decodes a token.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let (prefix, json) = token
            .split_once(SEPARATOR)
            .ok_or(TokenError::MissingSeparator)?;

        let (kind, action) = match prefix.split_once(':') {
            Some(("shdef", action)) => (SearchKind::Definition, action),
            Some(("homophone", action)) => (SearchKind::Homophone, action),
            _ => return Err(TokenError::UnknownPrefix(prefix.to_string())),
        };

        match action {
            "goToPage" => {
                let raw: RawPagePayload = serde_json::from_str(json)?;
                let page =
                    usize::try_from(raw.page).map_err(|_| TokenError::NegativePage(raw.page))?;
                if page > MAX_PAGE {
                    return Err(TokenError::PageOutOfRange(raw.page));
                }
                Ok(Self::GoToPage {
                    kind,
                    payload: PagePayload {
                        query: raw.query,
                        source: raw.source,
                        page,
                    },
                })
            }
            "select" => Ok(Self::Select {
                kind,
                id: serde_json::from_str(json)?,
            }),
            _ => Err(TokenError::UnknownPrefix(prefix.to_string())),
        }
    }
}

/// Quotes and escapes a string as a JSON string literal.
fn json_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Replaces `|` with its JSON unicode escape.
///
/// `|` is not JSON syntax, so it can only occur inside strings, where the
/// escape decodes back to the same character.
fn escape(json: &str) -> String {
    json.replace(SEPARATOR, "\\u007c")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn go_to(query: &str, source: Option<&str>, page: usize) -> Action {
        Action::GoToPage {
            kind: SearchKind::Definition,
            payload: PagePayload::new(query, source, page),
        }
    }

    #[test]
    fn encodes_page_payload() {
        assert_eq!(
            go_to("hao", Some("c"), 1).encode(),
            r#"shdef:goToPage|{"query":"hao","source":"c","page":1}"#
        );
    }

    #[test]
    fn omits_absent_source() {
        assert_eq!(
            go_to("hao", None, 0).encode(),
            r#"shdef:goToPage|{"query":"hao","page":0}"#
        );
    }

    #[test]
    fn escapes_separator_in_query() {
        let action = go_to("a|b", None, 2);
        let token = action.encode();

        assert_eq!(token.matches('|').count(), 1);
        assert!(token.contains(r"a\u007cb"));
        assert_eq!(Action::decode(&token).unwrap(), action);
    }

    #[test]
    fn homophone_prefixes() {
        let page = Action::GoToPage {
            kind: SearchKind::Homophone,
            payload: PagePayload::new("好", None, 3),
        };
        assert!(page.encode().starts_with("homophone:goToPage|"));
        assert_eq!(Action::decode(&page.encode()).unwrap(), page);

        let select = Action::Select {
            kind: SearchKind::Homophone,
            id: "qianplus:好".into(),
        };
        assert_eq!(select.encode(), r#"homophone:select|"qianplus:好""#);
        assert_eq!(Action::decode(&select.encode()).unwrap(), select);
    }

    #[test]
    fn decodes_payload_from_other_writers() {
        let action = Action::decode(r#"shdef:goToPage|{"page":4,"query":"ngu"}"#).unwrap();
        assert_eq!(action, go_to("ngu", None, 4));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(
            Action::decode("shdef:goToPage"),
            Err(TokenError::MissingSeparator)
        ));
    }

    #[test]
    fn rejects_unknown_prefix() {
        assert!(matches!(
            Action::decode(r#"shdef:jump|{"query":"a","page":0}"#),
            Err(TokenError::UnknownPrefix(p)) if p == "shdef:jump"
        ));
        assert!(matches!(
            Action::decode(r#"other|{"query":"a","page":0}"#),
            Err(TokenError::UnknownPrefix(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Action::decode("shdef:goToPage|{query"),
            Err(TokenError::Payload(_))
        ));
        assert!(matches!(
            Action::decode(r#"shdef:goToPage|{"query":"a"}"#),
            Err(TokenError::Payload(_))
        ));
    }

    #[test]
    fn rejects_pages_past_the_last() {
        let token = format!(r#"shdef:goToPage|{{"query":"hao","page":{}}}"#, MAX_PAGE + 1);
        assert!(matches!(
            Action::decode(&token),
            Err(TokenError::PageOutOfRange(_))
        ));
        assert!(matches!(
            Action::decode(r#"shdef:goToPage|{"query":"hao","page":400000000000000000}"#),
            Err(TokenError::PageOutOfRange(400_000_000_000_000_000))
        ));
        assert!(matches!(
            Action::decode(r#"shdef:goToPage|{"query":"hao","page":1e18}"#),
            Err(TokenError::Payload(_))
        ));

        let last = format!(r#"shdef:goToPage|{{"query":"hao","page":{MAX_PAGE}}}"#);
        assert_eq!(Action::decode(&last).unwrap(), go_to("hao", None, MAX_PAGE));
    }

    #[test]
    fn encodes_quotes_and_control_characters() {
        let action = go_to("say \"hi\"\n", Some("q\\p"), 0);
        let token = action.encode();

        assert_eq!(
            token,
            r#"shdef:goToPage|{"query":"say \"hi\"\n","source":"q\\p","page":0}"#
        );
        assert_eq!(Action::decode(&token).unwrap(), action);
    }

    #[test]
    fn rejects_negative_page() {
        assert!(matches!(
            Action::decode(r#"shdef:goToPage|{"query":"a","page":-1}"#),
            Err(TokenError::NegativePage(-1))
        ));
    }
}
