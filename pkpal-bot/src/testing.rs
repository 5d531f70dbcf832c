//! In-memory registry and log capture for pipeline and command tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use pluralkit_types::{Member, System};

use crate::error::RegistryError;
use crate::pluralkit::IdentityRegistry;

#[derive(Default)]
pub struct FakeRegistry {
    /// sender id -> system id
    systems: HashMap<String, String>,
    /// system id -> members; a system missing here has an unavailable list
    members: HashMap<String, Vec<Member>>,
    /// system id -> fronters; a system missing here has unavailable fronters
    fronters: HashMap<String, Vec<Member>>,
    member_calls: AtomicUsize,
    /// (sender id, system id) of every member and fronter list request
    member_requests: Mutex<Vec<(String, String)>>,
    fronter_requests: Mutex<Vec<(String, String)>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system(mut self, sender_id: &str, system_id: &str, members: &[&str]) -> Self {
        self.systems
            .insert(sender_id.to_string(), system_id.to_string());
        self.members.insert(
            system_id.to_string(),
            members.iter().map(|name| Member::named(name)).collect(),
        );
        self
    }

    /// A sender whose system resolves but whose member list cannot be fetched
    pub fn with_unlisted_system(mut self, sender_id: &str, system_id: &str) -> Self {
        self.systems
            .insert(sender_id.to_string(), system_id.to_string());
        self
    }

    pub fn with_fronters(mut self, system_id: &str, fronters: &[&str]) -> Self {
        self.fronters.insert(
            system_id.to_string(),
            fronters.iter().map(|name| Member::named(name)).collect(),
        );
        self
    }

    pub fn member_calls(&self) -> usize {
        self.member_calls.load(Ordering::SeqCst)
    }

    pub fn member_requests(&self) -> Vec<(String, String)> {
        self.member_requests.lock().unwrap().clone()
    }

    pub fn fronter_requests(&self) -> Vec<(String, String)> {
        self.fronter_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityRegistry for FakeRegistry {
    async fn resolve_sender(&self, sender_id: &str) -> Result<System, RegistryError> {
        self.systems
            .get(sender_id)
            .map(|id| System { id: id.clone() })
            .ok_or(RegistryError::NotFound)
    }

    async fn list_members(
        &self,
        sender_id: &str,
        system_id: &str,
    ) -> Result<Vec<Member>, RegistryError> {
        self.member_calls.fetch_add(1, Ordering::SeqCst);
        self.member_requests
            .lock()
            .unwrap()
            .push((sender_id.to_string(), system_id.to_string()));
        self.members
            .get(system_id)
            .cloned()
            .ok_or(RegistryError::Unavailable)
    }

    async fn list_fronters(
        &self,
        sender_id: &str,
        system_id: &str,
    ) -> Result<Vec<Member>, RegistryError> {
        self.fronter_requests
            .lock()
            .unwrap()
            .push((sender_id.to_string(), system_id.to_string()));
        self.fronters
            .get(system_id)
            .cloned()
            .ok_or(RegistryError::Unavailable)
    }
}

static LOG_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOG_INSTALL: Once = Once::new();
static CAPTURE: CaptureLogger = CaptureLogger;

/// `log` backend that keeps every formatted message in memory
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut lines) = LOG_LINES.lock() {
            lines.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Route `log` output into memory. Call before the code under test runs.
/// Tests share the capture, so assert on ids no other test uses.
pub fn capture_logs() {
    LOG_INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

pub fn captured_logs() -> Vec<String> {
    LOG_LINES.lock().map(|lines| lines.clone()).unwrap_or_default()
}

/// True when a single captured line contains every one of `needles`
pub fn logs_mention(logs: &[String], needles: &[&str]) -> bool {
    logs.iter()
        .any(|line| needles.iter().all(|needle| line.contains(needle)))
}
