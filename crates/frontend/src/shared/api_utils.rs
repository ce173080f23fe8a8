//! URL construction for the remote order store
//!
//! The store is a single script endpoint. Every operation is a GET whose
//! behaviour is selected by query parameters:
//!
//! | action | query |
//! |---|---|
//! | list | (none) |
//! | add | `action=add&data=<json>` |
//! | update | `action=update&index=<i>&data=<json>` |
//! | delete | `action=delete&index=<i>` |

use contracts::domain::a001_order::OrderPayload;
use contracts::domain::common::RecordKey;

/// Requests understood by the remote order store
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteAction<K: RecordKey> {
    List,
    Add { data: OrderPayload },
    Update { key: K, data: OrderPayload },
    Delete { key: K },
}

impl<K: RecordKey> RemoteAction<K> {
    pub fn name(&self) -> &'static str {
        match self {
            RemoteAction::List => "list",
            RemoteAction::Add { .. } => "add",
            RemoteAction::Update { .. } => "update",
            RemoteAction::Delete { .. } => "delete",
        }
    }
}

/// Build the full request URL for `action`
///
/// An endpoint that already carries a query string is extended with `&`.
pub fn action_url<K: RecordKey>(endpoint: &str, action: &RemoteAction<K>) -> Result<String, String> {
    let query = match action {
        RemoteAction::List => return Ok(endpoint.to_string()),
        RemoteAction::Add { data } => format!("action=add&data={}", encode_payload(data)?),
        RemoteAction::Update { key, data } => format!(
            "action=update&index={}&data={}",
            urlencoding::encode(&key.as_query_value()),
            encode_payload(data)?
        ),
        RemoteAction::Delete { key } => format!(
            "action=delete&index={}",
            urlencoding::encode(&key.as_query_value())
        ),
    };

    let separator = if endpoint.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", endpoint, separator, query))
}

fn encode_payload(data: &OrderPayload) -> Result<String, String> {
    let json = serde_json::to_string(data).map_err(|e| format!("{e}"))?;
    Ok(urlencoding::encode(&json).into_owned())
}
