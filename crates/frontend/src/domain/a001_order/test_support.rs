//! Scripted doubles for the remote store and dialogs

use super::model::RemoteTransport;
use crate::shared::dialogs::Dialogs;
use async_trait::async_trait;
use contracts::domain::a001_order::{NumberCell, OrderError, OrderRecord};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type Reply = Result<String, OrderError>;

enum Scripted {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Answers requests from a queue and records every URL
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(Scripted::Ready(reply));
    }

    /// Queue a reply that is only delivered when the returned sender fires
    pub fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl RemoteTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, OrderError> {
        self.requests.lock().unwrap().push(url.to_string());
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(OrderError::network("reply dropped"))),
            None => Err(OrderError::network(format!("unexpected request: {url}"))),
        }
    }
}

/// Confirmation dialog with a fixed answer
pub struct FixedAnswer {
    answer: bool,
    asked: AtomicUsize,
}

impl FixedAnswer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Dialogs for FixedAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

pub fn record(date: &str, name: &str) -> OrderRecord {
    OrderRecord {
        date: date.to_string(),
        full_name: name.to_string(),
        phone: "555".to_string(),
        product: "Mesa".to_string(),
        code: "M-1".to_string(),
        color_or_model: "Roble".to_string(),
        quantity: NumberCell::from_i64(10),
        unit_price: NumberCell::from_f64(2.0),
        total: NumberCell::from_f64(20.0),
        status: "pending".to_string(),
    }
}

/// Response body of a `list` call: header row followed by `records`
pub fn list_body(records: &[OrderRecord]) -> String {
    let mut rows = vec![serde_json::json!([
        "Fecha", "Nombre", "Teléfono", "Producto", "Código", "Color", "Cantidad", "Precio",
        "Total", "Estado"
    ])];
    rows.extend(records.iter().map(|r| {
        serde_json::json!([
            r.date,
            r.full_name,
            r.phone,
            r.product,
            r.code,
            r.color_or_model,
            r.quantity.raw(),
            r.unit_price.raw(),
            r.total.raw(),
            r.status
        ])
    }));
    serde_json::Value::Array(rows).to_string()
}
