//! Export status tracking and re-entrancy guard.

use super::error::ExportError;
use super::report::ExportOutcome;
use super::settings::ExportSettings;
use super::sink::DocumentSink;
use super::translator::translate;
use crate::presentation::Presentation;
use crate::template::Template;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Exporting,
    Success,
    Error(String),
}

/// Runs at most one export at a time and remembers how the last one ended.
#[derive(Debug, Default)]
pub struct ExportController {
    exporting: AtomicBool,
    status: Mutex<ExportStatus>,
}

/// Held while an export runs; dropping it releases the controller.
#[derive(Debug)]
pub struct ExportGuard<'a> {
    controller: &'a ExportController,
}

impl ExportGuard<'_> {
    /// Record how the export ended and release the controller.
    pub fn finish<T>(self, result: &Result<T, ExportError>) {
        *self.controller.status.lock() = match result {
            Ok(_) => ExportStatus::Success,
            Err(err) => ExportStatus::Error(err.to_string()),
        };
    }
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        {
            let mut status = self.controller.status.lock();
            // dropped without `finish`: the export never completed
            if *status == ExportStatus::Exporting {
                *status = ExportStatus::Idle;
            }
        }
        self.controller.exporting.store(false, Ordering::Release);
    }
}

impl ExportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ExportStatus {
        self.status.lock().clone()
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }

    /// Claim the controller, or `None` if an export is already running.
    pub fn try_begin(&self) -> Option<ExportGuard<'_>> {
        self.exporting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        *self.status.lock() = ExportStatus::Exporting;
        Some(ExportGuard { controller: self })
    }

    /// Return to `Idle` after a finished export. Ignored while one is running.
    pub fn reset_status(&self) {
        if !self.is_exporting() {
            *self.status.lock() = ExportStatus::Idle;
        }
    }

    /// Export on a blocking worker thread with a sink built by `make_sink`.
    ///
    /// A second call while one is in flight fails immediately with
    /// [`ExportError::AlreadyExporting`] and leaves the status alone.
    pub async fn export<S, F>(
        &self,
        prs: Presentation,
        template: Template,
        settings: ExportSettings,
        make_sink: F,
    ) -> Result<ExportOutcome<S::Artifact>, ExportError>
    where
        S: DocumentSink,
        S::Artifact: Send + 'static,
        F: FnOnce() -> S + Send + 'static,
    {
        let Some(guard) = self.try_begin() else {
            log::debug!("export of '{}' rejected, another is running", prs.title);
            return Err(ExportError::AlreadyExporting);
        };

        let result =
            tokio::task::spawn_blocking(move || translate(&prs, &template, &settings, make_sink()))
                .await
                .map_err(|e| ExportError::Task(e.to_string()))
                .and_then(|r| r);

        if let Err(err) = &result {
            log::warn!("export failed: {}", err);
        }
        guard.finish(&result);
        result
    }

    /// [`Self::export`] with the bundled PPTX writer.
    #[cfg(feature = "pptx")]
    pub async fn export_pptx(
        &self,
        prs: Presentation,
        template: Template,
        settings: ExportSettings,
    ) -> Result<ExportOutcome<crate::ooxml::pptx::PptxArtifact>, ExportError> {
        let colors = template.colors.clone();
        self.export(prs, template, settings, move || {
            crate::ooxml::pptx::PptxDocument::with_theme(colors)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingSink;
    use super::*;
    use crate::editor::ops;
    use crate::template::TemplateCatalog;
    use std::sync::Arc;

    fn inputs() -> (Presentation, Template, ExportSettings) {
        let template = TemplateCatalog::builtin().by_id("minimal-clean").unwrap().clone();
        let prs = ops::add_slide(&Presentation::new(&template.id), &template, None);
        (prs, template, ExportSettings::default())
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let controller = ExportController::new();
        {
            let _guard = controller.try_begin().unwrap();
            assert!(controller.is_exporting());
            assert_eq!(controller.status(), ExportStatus::Exporting);
            assert!(controller.try_begin().is_none());
        }
        assert!(!controller.is_exporting());
        assert_eq!(controller.status(), ExportStatus::Idle);
        assert!(controller.try_begin().is_some());
    }

    #[test]
    fn test_finish_records_status() {
        let controller = ExportController::new();
        let guard = controller.try_begin().unwrap();
        guard.finish::<()>(&Err(ExportError::Task("boom".to_string())));
        assert!(!controller.is_exporting());
        assert_eq!(
            controller.status(),
            ExportStatus::Error("Export task failed: boom".to_string())
        );

        controller.reset_status();
        assert_eq!(controller.status(), ExportStatus::Idle);
    }

    #[tokio::test]
    async fn test_export_success() {
        let controller = ExportController::new();
        let (prs, template, settings) = inputs();

        let outcome = controller
            .export(prs, template, settings, RecordingSink::default)
            .await
            .unwrap();
        assert!(outcome.report.is_clean());
        assert_eq!(controller.status(), ExportStatus::Success);
        assert!(!controller.is_exporting());
    }

    #[tokio::test]
    async fn test_export_failure_sets_error() {
        let controller = ExportController::new();
        let (prs, template, settings) = inputs();

        let err = controller
            .export(prs, template, settings, RecordingSink::failing_serialize)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::Serialization(_)));
        assert!(matches!(controller.status(), ExportStatus::Error(_)));

        // a failed export does not block the next one
        let (prs, template, settings) = inputs();
        assert!(
            controller
                .export(prs, template, settings, RecordingSink::default)
                .await
                .is_ok()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_rejects_concurrent_export() {
        let controller = Arc::new(ExportController::new());
        let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();

        let first = {
            let controller = Arc::clone(&controller);
            let (prs, template, settings) = inputs();
            tokio::spawn(async move {
                controller
                    .export(prs, template, settings, move || {
                        let _ = release_rx.recv();
                        RecordingSink::default()
                    })
                    .await
            })
        };

        while !controller.is_exporting() {
            tokio::task::yield_now().await;
        }

        let (prs, template, settings) = inputs();
        let second = controller
            .export(prs, template, settings, RecordingSink::default)
            .await;
        assert_eq!(second.unwrap_err(), ExportError::AlreadyExporting);
        assert_eq!(controller.status(), ExportStatus::Exporting);

        release_tx.send(()).unwrap();
        assert!(first.await.unwrap().is_ok());
        assert_eq!(controller.status(), ExportStatus::Success);
        assert!(!controller.is_exporting());
    }

    #[cfg(feature = "pptx")]
    #[tokio::test]
    async fn test_export_pptx() {
        let controller = ExportController::new();
        let (prs, template, settings) = inputs();

        let outcome = controller.export_pptx(prs, template, settings).await.unwrap();
        assert_eq!(outcome.artifact.file_name, "presentation.pptx");
        assert!(outcome.artifact.bytes.starts_with(b"PK"));
        assert_eq!(controller.status(), ExportStatus::Success);
    }
}
