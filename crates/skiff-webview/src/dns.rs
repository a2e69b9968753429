//! Hostname Resolution
//!
//! Nonblocking DNS probe used to confirm bare-hostname input. The OS
//! lookup runs on smol's blocking pool; the UI task polls the handle
//! cooperatively and never blocks.

use std::net::ToSocketAddrs;
use std::sync::mpsc;

use thiserror::Error;

/// Resolution failure
#[derive(Debug, Error)]
pub enum DnsError {
    #[error("hostname {host} did not resolve: {reason}")]
    NotResolved { host: String, reason: String },
    #[error("hostname {host} has no addresses")]
    NoAddresses { host: String },
}

/// In-flight lookup, polled from the UI task
#[derive(Debug)]
pub struct DnsLookup {
    rx: mpsc::Receiver<Result<(), DnsError>>,
}

impl DnsLookup {
    /// Lookup that completes on a channel
    pub fn from_channel(rx: mpsc::Receiver<Result<(), DnsError>>) -> Self {
        Self { rx }
    }

    /// Already-completed lookup (test doubles and cached results)
    pub fn ready(result: Result<(), DnsError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx }
    }

    /// Nonblocking check for completion. Returns `None` while the lookup
    /// is still in flight; a dropped resolver counts as failure.
    pub fn poll(&mut self) -> Option<Result<(), DnsError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => Some(Err(DnsError::NotResolved {
                host: String::new(),
                reason: "resolver dropped".to_string(),
            })),
        }
    }
}

/// Capability for issuing hostname lookups
pub trait DnsResolver {
    fn lookup(&self, host: &str) -> DnsLookup;
}

/// Resolver backed by the system's address lookup
#[derive(Debug, Default)]
pub struct SystemResolver;

impl DnsResolver for SystemResolver {
    fn lookup(&self, host: &str) -> DnsLookup {
        let (tx, rx) = mpsc::channel();
        let host = host.to_owned();

        smol::spawn(async move {
            let probe = format!("{host}:80");
            let result = smol::unblock(move || match probe.to_socket_addrs() {
                Ok(mut addrs) => {
                    if addrs.next().is_some() {
                        Ok(())
                    } else {
                        Err(DnsError::NoAddresses { host })
                    }
                }
                Err(e) => Err(DnsError::NotResolved {
                    host,
                    reason: e.to_string(),
                }),
            })
            .await;

            // The receiving side may have been superseded; that is fine.
            let _ = tx.send(result);
        })
        .detach();

        DnsLookup::from_channel(rx)
    }
}
