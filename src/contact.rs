use std::rc::Rc;

use chrono::{NaiveDateTime, Utc};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, ContentMode};
use crate::storage::{KeyValueStore, LocalStorageStore, StorageError};

pub const CONTACT_MESSAGES_KEY: &str = "contact_messages";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, _)| !host.is_empty() && !domain.ends_with('.'))
}

/// A stored or acknowledged contact message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactReceipt {
    pub id: String,
    #[serde(flatten)]
    pub message: ContactMessage,
    pub ts: NaiveDateTime,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a message.")]
    MissingMessage,
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("server rejected the message with status {0}")]
    Rejected(u16),
    #[error("malformed data: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ContactError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::MissingName | ContactError::InvalidEmail | ContactError::MissingMessage
        )
    }
}

/// Destination for contact-form submissions.
pub trait ContactSink {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'_, Result<ContactReceipt, ContactError>>;
}

pub fn sink_from_config() -> Rc<dyn ContactSink> {
    match config::content_mode() {
        ContentMode::Remote => Rc::new(HttpContactSink::from_config()),
        ContentMode::Offline => Rc::new(LocalContactSink::new(LocalStorageStore)),
    }
}

pub struct HttpContactSink {
    endpoint: String,
}

impl HttpContactSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::api_url("/contact-messages"))
    }
}

impl ContactSink for HttpContactSink {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'_, Result<ContactReceipt, ContactError>> {
        async move {
            message.validate()?;
            let request = Request::post(&self.endpoint)
                .json(&message)
                .map_err(|e| ContactError::Decode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| ContactError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(ContactError::Rejected(response.status()));
            }
            response
                .json::<ContactReceipt>()
                .await
                .map_err(|e| ContactError::Decode(e.to_string()))
        }
        .boxed_local()
    }
}

/// Appends messages to a JSON list in client storage.
pub struct LocalContactSink<S> {
    store: S,
}

impl<S: KeyValueStore> LocalContactSink<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn messages(&self) -> Result<Vec<ContactReceipt>, ContactError> {
        match self.store.get(CONTACT_MESSAGES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| ContactError::Decode(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn append(&self, message: ContactMessage) -> Result<ContactReceipt, ContactError> {
        message.validate()?;
        let mut messages = self.messages()?;
        let receipt = ContactReceipt {
            id: format!("local-{}", messages.len() + 1),
            message,
            ts: Utc::now().naive_utc(),
        };
        messages.push(receipt.clone());
        let raw = serde_json::to_string(&messages).map_err(|e| ContactError::Decode(e.to_string()))?;
        self.store.set(CONTACT_MESSAGES_KEY, &raw)?;
        Ok(receipt)
    }
}

impl<S: KeyValueStore> ContactSink for LocalContactSink<S> {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'_, Result<ContactReceipt, ContactError>> {
        let result = self.append(message);
        async move { result }.boxed_local()
    }
}
