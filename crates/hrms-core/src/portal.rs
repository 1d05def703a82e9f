//! Portal state container
//!
//! One `Portal` per page. It builds every component from the `Config`,
//! wires them to the event bus on `start` and tears them down on
//! `shutdown`. The page publishes its events here and reads back
//! view-models to render.

use parking_lot::Mutex;
use url::Url;

use hrms_forms::{
    ContentSource, ExportFormat, ExportLinks, FormModel, FormSubmitter, PrintDocument, PrintJob,
    SubmitOutcome, SubmitResponse,
};
use hrms_notify::{Banner, NotificationCenter, SessionTimeout, Severity};
use hrms_search::{HttpSearchBackend, SearchBackend, SearchController, SearchModal};
use hrms_view::{EventBus, Subscription, UiEvent};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Id of the quick search box in the page layout
pub const SEARCH_FIELD_ID: &str = "quickSearch";

pub struct Portal<B: SearchBackend = HttpSearchBackend> {
    config: Config,
    bus: EventBus,
    search: SearchController<B>,
    modal: SearchModal,
    notifier: NotificationCenter,
    session_timeout: SessionTimeout,
    submitter: FormSubmitter,
    exports: ExportLinks,
    /// Live bus listeners; empty until `start`
    subscriptions: Mutex<Vec<Subscription>>,
}

impl Portal {
    /// Portal searching over HTTP at the configured endpoint
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let backend = HttpSearchBackend::new(config.search_url()?);
        Self::with_backend(config, backend)
    }
}

impl<B: SearchBackend> Portal<B> {
    pub fn with_backend(config: Config, backend: B) -> Result<Self> {
        config.validate()?;

        let notifier = NotificationCenter::new(config.notification_ttl());
        let search =
            SearchController::with_timing(backend, config.search_debounce(), config.min_query_chars);
        let session_timeout =
            SessionTimeout::new(notifier.clone(), config.session_warning_after());
        let exports = ExportLinks::new(config.base_url()?);

        Ok(Self {
            modal: SearchModal::new(config.modal_focus_delay()),
            submitter: FormSubmitter::new(notifier.clone()),
            bus: EventBus::new(),
            search,
            notifier,
            session_timeout,
            exports,
            subscriptions: Mutex::new(Vec::new()),
            config,
        })
    }

    /// Attach the search box and the inactivity watcher to the bus and start
    /// the session countdown. Calling it again while started does nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let mut subscriptions = self.subscriptions.lock();
        if !subscriptions.is_empty() {
            return;
        }

        subscriptions.push(self.search.attach(&self.bus, SEARCH_FIELD_ID));
        subscriptions.push(self.session_timeout.attach(&self.bus));
        self.session_timeout.arm();

        tracing::info!(
            base_url = %self.config.base_url,
            listeners = subscriptions.len(),
            "Portal started"
        );
    }

    /// Detach every listener and cancel every timer
    pub fn shutdown(&self) {
        let subscriptions: Vec<Subscription> = self.subscriptions.lock().drain(..).collect();
        for subscription in subscriptions {
            subscription.dispose();
        }

        self.search.reset();
        self.modal.close();
        self.session_timeout.stop();
        self.notifier.clear();

        tracing::info!("Portal shut down");
    }

    pub fn is_started(&self) -> bool {
        !self.subscriptions.lock().is_empty()
    }

    /// Forward a page event to the listeners
    pub fn publish(&self, event: UiEvent) -> Result<usize> {
        if !self.is_started() {
            return Err(CoreError::NotStarted);
        }
        Ok(self.bus.publish(event))
    }

    /// Take over the alerts the server flashed into the page
    pub fn adopt_flashed<I>(&self, flashed: I) -> Vec<Banner>
    where
        I: IntoIterator<Item = (Severity, String)>,
    {
        self.notifier.adopt_flashed(flashed)
    }

    pub fn open_search(&self) {
        self.modal.open();
    }

    pub fn close_search(&self) {
        self.modal.close();
        self.search.reset();
    }

    /// Navigation target for an export button; `format` comes from the
    /// button's data attribute
    pub fn export(&self, endpoint: &str, format: &str) -> Result<Url> {
        let format: ExportFormat = format.parse()?;
        Ok(self.exports.export_url(endpoint, format)?)
    }

    /// Open a print job for the element `element_id` of `page`
    pub fn print<S>(&self, page: &S, element_id: &str) -> Result<PrintJob>
    where
        S: ContentSource + ?Sized,
    {
        let document = PrintDocument::from_element(page, element_id)?;
        Ok(PrintJob::open(document))
    }

    /// Validate, then submit with banners. Invalid forms are never sent.
    pub async fn submit_form<F>(&self, form: &mut FormModel, on_success: Option<F>) -> SubmitOutcome
    where
        F: FnOnce(&SubmitResponse),
    {
        self.submitter.submit_validated(form, on_success).await
    }

    /// Resolve a form action or link path against the portal origin
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.config.base_url()?.join(path)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn search(&self) -> &SearchController<B> {
        &self.search
    }

    pub fn search_modal(&self) -> &SearchModal {
        &self.modal
    }

    pub fn notifier(&self) -> &NotificationCenter {
        &self.notifier
    }

    pub fn session_timeout(&self) -> &SessionTimeout {
        &self.session_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrms_forms::{FormField, FormMethod, FormError};
    use hrms_search::{EmployeeSummary, SearchView};
    use std::collections::HashMap;
    use std::future::Future;
    use std::time::Duration;
    use tokio::time::sleep;

    struct Directory;

    impl SearchBackend for Directory {
        fn search(
            &self,
            query: &str,
        ) -> impl Future<Output = hrms_search::Result<Vec<EmployeeSummary>>> + Send {
            let name = format!("Nguyễn {query}");
            async move {
                Ok(vec![EmployeeSummary {
                    id: 7,
                    name,
                    code: "NV007".to_string(),
                    position: Some("Kế toán".to_string()),
                    department: None,
                }])
            }
        }
    }

    fn portal() -> Portal<Directory> {
        Portal::with_backend(Config::default(), Directory).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_requires_start() {
        let portal = portal();
        assert!(matches!(
            portal.publish(UiEvent::Click),
            Err(CoreError::NotStarted)
        ));

        portal.start();
        assert!(portal.is_started());
        assert_eq!(portal.publish(UiEvent::Click).unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_box_drives_controller() {
        let portal = portal();
        portal.start();

        portal.publish(UiEvent::input(SEARCH_FIELD_ID, "v")).unwrap();
        portal.publish(UiEvent::input(SEARCH_FIELD_ID, "van")).unwrap();
        sleep(Duration::from_millis(400)).await;

        match portal.search().view() {
            SearchView::Results(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].name, "Nguyễn van");
            }
            other => panic!("Expected results, got {other:?}"),
        }
        assert!(portal.search().render_html().contains("/employee/7"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_warning_after_inactivity() {
        let portal = portal();
        portal.start();

        sleep(Duration::from_secs(20 * 60)).await;
        portal.publish(UiEvent::KeyPress).unwrap();
        sleep(Duration::from_secs(10 * 60)).await;
        assert_eq!(portal.session_timeout().warnings_issued(), 0);

        sleep(Duration::from_secs(16 * 60)).await;
        assert_eq!(portal.session_timeout().warnings_issued(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_everything() {
        let portal = portal();
        portal.start();
        portal.open_search();
        portal.notifier().info("Đã lưu");

        portal.shutdown();
        assert!(!portal.is_started());
        assert!(!portal.session_timeout().is_armed());
        assert!(!portal.search_modal().is_open());
        assert!(portal.notifier().is_empty());

        sleep(Duration::from_secs(30 * 60)).await;
        assert_eq!(portal.session_timeout().warnings_issued(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let portal = portal();
        portal.start();
        portal.start();

        assert_eq!(portal.bus().listener_count(), 2);
    }

    #[test]
    fn test_export_links() {
        let portal = portal();
        assert_eq!(
            portal.export("/reports/employees", "excel").unwrap().as_str(),
            "http://localhost:5000/reports/employees?format=excel"
        );
        assert!(matches!(
            portal.export("/reports/employees", "odt"),
            Err(CoreError::Form(FormError::UnknownFormat(_)))
        ));
    }

    #[test]
    fn test_print_named_element() {
        let portal = portal();
        let mut page = HashMap::new();
        page.insert("payslip".to_string(), "<table></table>".to_string());

        let job = portal.print(&page, "payslip").unwrap();
        assert_eq!(job.document.body_html, "<table></table>");
        assert!(matches!(
            portal.print(&page, "missing"),
            Err(CoreError::Form(FormError::ElementNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_invalid_form_not_submitted() {
        let portal = portal();
        let mut form = FormModel::new(
            "leaveForm",
            portal.resolve("/leave/add").unwrap(),
            FormMethod::Post,
        )
        .with_field(FormField::text("reason", "").required());

        let outcome = portal
            .submit_form(&mut form, None::<fn(&SubmitResponse)>)
            .await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(form.was_validated());
        assert!(portal.notifier().is_empty());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = Config {
            min_query_chars: 0,
            ..Config::default()
        };
        assert!(matches!(
            Portal::with_backend(config, Directory),
            Err(CoreError::Config(_))
        ));
    }
}
