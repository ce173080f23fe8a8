//! API layer for pedidos: transport, raw remote calls and the
//! synchronization client that keeps the store in step with the remote sheet.

use super::store::OrderStore;
use crate::shared::api_utils::{action_url, RemoteAction};
use crate::shared::dialogs::Dialogs;
use async_trait::async_trait;
use contracts::domain::a001_order::{OrderError, OrderList, OrderPayload, OrderRecord};
use contracts::domain::common::{RecordKey, RowIndex};
use gloo_net::http::Request;
use leptos::prelude::*;
use std::sync::Arc;

pub const DELETE_CONFIRMATION: &str = "¿Estás seguro de eliminar este pedido?";

/// HTTP GET against the remote store
#[async_trait(?Send)]
pub trait RemoteTransport: Send + Sync {
    /// Body of a successful response; non-success status is a network error
    async fn get(&self, url: &str) -> Result<String, OrderError>;
}

/// Browser `fetch` through gloo-net. No explicit timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl RemoteTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<String, OrderError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| OrderError::network(format!("{e}")))?;
        if !response.ok() {
            return Err(OrderError::network(format!("HTTP {}", response.status())));
        }
        response
            .text()
            .await
            .map_err(|e| OrderError::network(format!("{e}")))
    }
}

// ============================================================================
// Raw remote calls
// ============================================================================

#[derive(Clone)]
pub struct OrderApi {
    endpoint: String,
    transport: Arc<dyn RemoteTransport>,
}

impl OrderApi {
    pub fn new(endpoint: impl Into<String>, transport: Arc<dyn RemoteTransport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub async fn list(&self) -> Result<OrderList, OrderError> {
        let url = self.url(&RemoteAction::<RowIndex>::List)?;
        log::debug!("GET {}", url);
        let body = self.transport.get(&url).await?;
        OrderList::parse_response(&body)
    }

    pub async fn add(&self, record: &OrderRecord) -> Result<(), OrderError> {
        let action = RemoteAction::<RowIndex>::Add {
            data: OrderPayload::from(record),
        };
        self.send(&action).await
    }

    pub async fn update<K: RecordKey>(&self, key: K, record: &OrderRecord) -> Result<(), OrderError> {
        let action = RemoteAction::Update {
            key,
            data: OrderPayload::from(record),
        };
        self.send(&action).await
    }

    pub async fn delete<K: RecordKey>(&self, key: K) -> Result<(), OrderError> {
        self.send(&RemoteAction::Delete { key }).await
    }

    /// The result object must be JSON but is not inspected further
    async fn send<K: RecordKey>(&self, action: &RemoteAction<K>) -> Result<(), OrderError> {
        let url = self.url(action)?;
        log::debug!("{} -> {}", action.name(), url);
        let body = self.transport.get(&url).await?;
        let result: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| OrderError::network(format!("respuesta inválida: {}", e)))?;
        log::debug!("{} result: {}", action.name(), result);
        Ok(())
    }

    fn url<K: RecordKey>(&self, action: &RemoteAction<K>) -> Result<String, OrderError> {
        action_url(&self.endpoint, action).map_err(OrderError::Network)
    }
}

// ============================================================================
// Synchronization client
// ============================================================================

/// Remote calls plus store reconciliation.
///
/// Every successful mutation is followed by a full reload; there is no
/// optimistic local patching.
#[derive(Clone)]
pub struct OrderSyncClient {
    api: OrderApi,
    store: OrderStore,
    dialogs: Arc<dyn Dialogs>,
}

impl OrderSyncClient {
    pub fn new(api: OrderApi, store: OrderStore, dialogs: Arc<dyn Dialogs>) -> Self {
        Self { api, store, dialogs }
    }

    pub fn store(&self) -> OrderStore {
        self.store
    }

    /// Fetch the full list and publish it, unless a newer load was issued
    /// meanwhile. On failure the store keeps its previous list.
    pub async fn list(&self) -> Result<OrderList, OrderError> {
        let ticket = self.store.begin_load();
        match self.api.list().await {
            Ok(list) => {
                if self.store.finish_load(ticket, list.clone()) {
                    log::info!("Loaded {} pedidos", list.len());
                } else {
                    log::debug!("Discarding stale list response {:?}", ticket);
                }
                Ok(list)
            }
            Err(e) => {
                log::error!("Error loading pedidos: {}", e);
                self.store.fail_load(ticket, e.to_string());
                Err(e)
            }
        }
    }

    pub async fn create(&self, record: OrderRecord) -> Result<(), OrderError> {
        let _guard = self.store.try_begin_mutation().ok_or(OrderError::Busy)?;
        log::info!("Adding pedido for {}", record.full_name);
        self.api.add(&record).await.inspect_err(|e| {
            log::error!("Error adding pedido: {}", e);
        })?;
        self.reload().await;
        Ok(())
    }

    pub async fn update(&self, index: RowIndex, record: OrderRecord) -> Result<(), OrderError> {
        let _guard = self.store.try_begin_mutation().ok_or(OrderError::Busy)?;
        log::info!("Updating pedido at index {}", index);
        self.api.update(index, &record).await.inspect_err(|e| {
            log::error!("Error updating pedido {}: {}", index, e);
        })?;
        self.reload().await;
        Ok(())
    }

    /// Asks for confirmation first; a declined prompt sends nothing
    pub async fn delete(&self, index: RowIndex) -> Result<(), OrderError> {
        if self.store.busy.get_untracked() {
            return Err(OrderError::Busy);
        }
        if !self.dialogs.confirm(DELETE_CONFIRMATION) {
            log::info!("Delete of pedido {} declined", index);
            return Err(OrderError::UserAbort);
        }
        let _guard = self.store.try_begin_mutation().ok_or(OrderError::Busy)?;
        log::info!("Deleting pedido at index {}", index);
        self.api.delete(index).await.inspect_err(|e| {
            log::error!("Error deleting pedido {}: {}", index, e);
        })?;
        self.reload().await;
        Ok(())
    }

    /// Reload after a mutation; failures are already logged and recorded
    /// in the store by `list`.
    async fn reload(&self) {
        let _ = self.list().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::test_support::{list_body, record, FixedAnswer, ScriptedTransport};
    use contracts::domain::a001_order::OrderList;

    const ENDPOINT: &str = "https://script.example.com/exec";

    fn client(transport: Arc<ScriptedTransport>, answer: bool) -> OrderSyncClient {
        let api = OrderApi::new(ENDPOINT, transport);
        OrderSyncClient::new(api, OrderStore::new(), Arc::new(FixedAnswer::new(answer)))
    }

    #[tokio::test]
    async fn test_list_drops_header_and_fills_store() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok(
            r#"[["Fecha","Nombre","Tel","Prod","Cod","Color","Cant","Precio","Total","Estado"],
                ["2024-01-01","Ana","555","Mesa","M-1","Roble",10,2,20,"pending"]]"#
                .to_string(),
        ));
        let client = client(transport.clone(), true);

        let list = client.list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(client.store().snapshot(), list);
        assert_eq!(transport.requests(), vec![ENDPOINT.to_string()]);
    }

    #[tokio::test]
    async fn test_failed_list_keeps_rendered_orders() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok(list_body(&[record("2024-01-01", "Ana")])));
        transport.reply(Err(OrderError::network("HTTP 500")));
        transport.reply(Ok("<html>oops</html>".to_string()));
        let client = client(transport.clone(), true);

        client.list().await.unwrap();
        assert!(matches!(client.list().await, Err(OrderError::Network(_))));
        assert!(matches!(client.list().await, Err(OrderError::Network(_))));

        assert_eq!(client.store().snapshot().len(), 1);
        assert!(client.store().load_error.get_untracked().is_some());
    }

    #[tokio::test]
    async fn test_create_sends_payload_then_reloads() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok(r#"{"result":"success"}"#.to_string()));
        transport.reply(Ok(list_body(&[record("2024-01-01", "Ana")])));
        let client = client(transport.clone(), true);

        client.create(record("2024-01-01", "Ana")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].starts_with(&format!("{ENDPOINT}?action=add&data=")));
        assert!(requests[0].contains("%22nombre%22%3A%22Ana%22"));
        assert_eq!(requests[1], ENDPOINT);
        assert_eq!(client.store().snapshot().len(), 1);
        assert!(!client.store().busy.get_untracked());
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_reload() {
        let transport = ScriptedTransport::new();
        transport.reply(Err(OrderError::network("HTTP 503")));
        let client = client(transport.clone(), true);

        let result = client.update(RowIndex::new(1), record("2024-01-01", "Ana")).await;
        assert_eq!(result, Err(OrderError::network("HTTP 503")));
        assert_eq!(transport.requests().len(), 1);
        assert!(!client.store().busy.get_untracked());
    }

    #[tokio::test]
    async fn test_non_json_mutation_response_is_network_error() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok("Script error".to_string()));
        let client = client(transport.clone(), true);

        let result = client.create(record("2024-01-01", "Ana")).await;
        assert!(matches!(result, Err(OrderError::Network(_))));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let transport = ScriptedTransport::new();
        let client = client(transport.clone(), false);
        let store = client.store();
        let ticket = store.begin_load();
        store.finish_load(ticket, OrderList::new(vec![record("2024-01-01", "Ana")]));

        let result = client.delete(RowIndex::new(0)).await;
        assert_eq!(result, Err(OrderError::UserAbort));
        assert!(transport.requests().is_empty());
        assert_eq!(store.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete_uses_index_and_reloads() {
        let transport = ScriptedTransport::new();
        transport.reply(Ok(r#"{"result":"success"}"#.to_string()));
        transport.reply(Ok(list_body(&[])));
        let client = client(transport.clone(), true);

        client.delete(RowIndex::new(3)).await.unwrap();
        assert_eq!(
            transport.requests(),
            vec![
                format!("{ENDPOINT}?action=delete&index=3"),
                ENDPOINT.to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_mutation_while_busy_is_refused() {
        let transport = ScriptedTransport::new();
        let client = client(transport.clone(), true);
        let _held = client.store().try_begin_mutation();

        assert_eq!(
            client.create(record("2024-01-01", "Ana")).await,
            Err(OrderError::Busy)
        );
        assert_eq!(client.delete(RowIndex::new(0)).await, Err(OrderError::Busy));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_stale_list_response_does_not_overwrite_newer() {
        let transport = ScriptedTransport::new();
        let older_reply = transport.defer();
        transport.reply(Ok(list_body(&[record("2024-02-01", "Nuevo")])));
        let client = client(transport.clone(), true);

        let mut older = Box::pin(client.list());
        assert!(futures::poll!(&mut older).is_pending());

        client.list().await.unwrap();
        let _ = older_reply.send(Ok(list_body(&[record("2024-01-01", "Viejo")])));
        let stale = older.await.unwrap();
        assert_eq!(stale.len(), 1);

        let current = client.store().snapshot();
        assert_eq!(current.get(RowIndex::new(0)).unwrap().full_name, "Nuevo");
    }
}
