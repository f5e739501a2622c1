//! Dobles de prueba compartidos: notificador y navegador que graban,
//! más el arnés que cablea una pasarela contra el servidor mock.

use std::sync::{Arc, Mutex};

use autoprokat_client::session::SessionStore;
use autoprokat_client::ui::{Navigator, Notifier, NotifyKind};
use autoprokat_client::{ApiGateway, ClientConfig};

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(String, String, NotifyKind)>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, _, kind)| *kind == NotifyKind::Error)
            .count()
    }

    pub fn success_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, _, kind)| *kind == NotifyKind::Success)
            .count()
    }

    pub fn last(&self) -> Option<(String, String, NotifyKind)> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str, kind: NotifyKind) {
        self.events
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string(), kind));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn login_redirects(&self) -> usize {
        self.visits
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == "/login")
            .count()
    }

    pub fn home_redirects(&self) -> usize {
        self.visits
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == "/")
            .count()
    }

    pub fn last(&self) -> Option<String> {
        self.visits.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.visits.lock().unwrap().push("/login".to_string());
    }

    fn to_home(&self) {
        self.visits.lock().unwrap().push("/".to_string());
    }

    fn to(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}

pub struct Harness {
    pub session: SessionStore,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub gateway: ApiGateway,
}

pub fn harness(base_url: &str) -> Harness {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let session = SessionStore::in_memory();
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let gateway = ApiGateway::new(
        &ClientConfig::new(base_url).with_timeout(5),
        session.clone(),
        notifier.clone(),
        navigator.clone(),
    )
    .expect("gateway");

    Harness {
        session,
        notifier,
        navigator,
        gateway,
    }
}
