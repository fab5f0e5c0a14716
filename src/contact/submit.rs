// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Contact submission and mail-client fallback.
//!
//! The network seam ([`ContactTransport`]) and the launcher seam
//! ([`LinkLauncher`]) are traits so the flow can run against fakes.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{info, warn};

use crate::contact::{ContactForm, ContactPayload, ValidationErrors, mailto::build_mailto};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum SubmitError {
    #[error("contact endpoint responded with status {0}")]
    Status(u16),
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
}

impl SubmitError {
    /// The text shown in the status banner before the mail client opens.
    pub(crate) fn banner(&self) -> &'static str {
        match self {
            SubmitError::Status(_) => {
                "The server could not send your message. Opening your mail client instead."
            }
            SubmitError::Transport(_) => {
                "No backend available. Your mail client will open to send the message."
            }
        }
    }
}

pub(crate) trait ContactTransport {
    /// Makes exactly one delivery attempt.
    fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}

pub(crate) trait LinkLauncher: Send + Sync {
    fn open(&self, uri: &str) -> Result<()>;
}

/// Posts the payload as JSON; any 2xx response counts as delivered.
pub(crate) struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    pub(crate) fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl ContactTransport for HttpTransport {
    fn send(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().unwrap_or_default();
        warn!("Contact endpoint responded {}: {}", status, text);
        Err(SubmitError::Status(status.as_u16()))
    }
}

/// Opens URIs with the desktop's default handler.
pub(crate) struct SystemLauncher;

impl LinkLauncher for SystemLauncher {
    fn open(&self, uri: &str) -> Result<()> {
        webbrowser::open(uri).with_context(|| format!("Failed to open {uri}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Delivery {
    Sent,
    Fallback { reason: SubmitError, mailto: String },
}

/// The site owner, as addressed by the mail-client fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Recipient {
    pub(crate) name: String,
    pub(crate) email: String,
}

/// Validates the form and, if valid, makes one delivery attempt.
///
/// # Errors
///
/// Returns the validation errors without touching the transport when the form
/// is invalid. Delivery failures are not errors: they produce
/// [`Delivery::Fallback`] carrying the `mailto:` URI to open instead.
pub(crate) fn submit(
    form: &ContactForm,
    transport: &dyn ContactTransport,
    recipient: &Recipient,
) -> Result<Delivery, ValidationErrors> {
    form.validate()?;

    match transport.send(&form.payload()) {
        Ok(()) => {
            info!("Contact message delivered");
            Ok(Delivery::Sent)
        }
        Err(reason) => {
            warn!("Contact delivery failed, falling back to mail client: {}", reason);
            Ok(Delivery::Fallback {
                reason,
                mailto: build_mailto(&recipient.email, &recipient.name, form),
            })
        }
    }
}

/// Opens `uri` once after `delay` on a detached timer thread.
///
/// `on_done` receives the outcome of the launch.
pub(crate) fn schedule_fallback<F>(
    launcher: Arc<dyn LinkLauncher>,
    delay: Duration,
    uri: String,
    on_done: F,
) -> JoinHandle<()>
where
    F: FnOnce(Result<String>) + Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(delay);
        let outcome = launcher.open(&uri).map(|()| uri);
        on_done(outcome);
    })
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        sync::{Mutex, mpsc},
    };

    use pretty_assertions::assert_eq;

    use super::*;

    struct FakeTransport {
        calls: Cell<usize>,
        outcome: Result<(), SubmitError>,
    }

    impl FakeTransport {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self { calls: Cell::new(0), outcome }
        }
    }

    impl ContactTransport for FakeTransport {
        fn send(&self, _payload: &ContactPayload) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Mutex<Vec<String>>,
    }

    impl LinkLauncher for RecordingLauncher {
        fn open(&self, uri: &str) -> Result<()> {
            self.opened.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    fn recipient() -> Recipient {
        Recipient {
            name: "Owner".into(),
            email: "owner@example.com".into(),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Please get in touch".into(),
            website: String::new(),
        }
    }

    #[test]
    fn invalid_form_never_reaches_transport() {
        let transport = FakeTransport::new(Ok(()));
        let bad = ContactForm {
            name: String::new(),
            email: "bad".into(),
            message: "short".into(),
            ..ContactForm::default()
        };

        let errors = submit(&bad, &transport, &recipient()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn success_makes_exactly_one_call() {
        let transport = FakeTransport::new(Ok(()));
        assert_eq!(submit(&form(), &transport, &recipient()), Ok(Delivery::Sent));
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn transport_error_falls_back_without_retry() {
        let transport = FakeTransport::new(Err(SubmitError::Transport("refused".into())));
        let delivery = submit(&form(), &transport, &recipient()).unwrap();
        assert_eq!(transport.calls.get(), 1);
        assert!(matches!(delivery, Delivery::Fallback { reason: SubmitError::Transport(_), .. }));
    }

    #[test]
    fn non_success_status_shows_banner_then_opens_mail_client() {
        let transport = FakeTransport::new(Err(SubmitError::Status(500)));
        let Delivery::Fallback { reason, mailto } = submit(&form(), &transport, &recipient()).unwrap()
        else {
            panic!("expected fallback");
        };

        assert_eq!(reason, SubmitError::Status(500));
        assert!(!reason.banner().is_empty());

        let launcher = Arc::new(RecordingLauncher::default());
        let (tx, rx) = mpsc::channel();
        let handle = schedule_fallback(
            launcher.clone(),
            Duration::from_millis(200),
            mailto,
            move |outcome| {
                tx.send(outcome.map_err(|e| e.to_string())).unwrap();
            },
        );

        assert!(launcher.opened.lock().unwrap().is_empty());
        let opened = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();
        handle.join().unwrap();

        assert!(opened.starts_with("mailto:owner@example.com?"));
        assert!(opened.contains("Ada"));
        assert!(opened.contains("ada%40example.com"));
        assert!(opened.contains("Please%20get%20in%20touch"));
        assert_eq!(launcher.opened.lock().unwrap().as_slice(), &[opened]);
    }
}
