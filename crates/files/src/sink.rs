//! Delivery seam for composed reports.
//!
//! A sink receives the rendered report text and the recommended nutrient names. Sinks that
//! talk to external services (mail, messaging) take their endpoints and credentials as
//! constructor parameters; nothing here reads them from the environment.

use crate::FilesError;
use oheng_types::NonEmptyText;
use serde::{Deserialize, Serialize};

/// A report ready to hand to a delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Name of the person the report was composed for.
    pub subject_name: NonEmptyText,
    /// Plain-text rendering of the report.
    pub body: String,
    /// Recommended nutrient names in report order.
    pub recommendations: Vec<String>,
}

impl ReportDocument {
    pub fn new(
        subject_name: NonEmptyText,
        body: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            subject_name,
            body: body.into(),
            recommendations,
        }
    }

    /// Title used by sinks that need one, e.g. a document heading or mail subject.
    pub fn title(&self) -> String {
        format!("Element health profile for {}", self.subject_name)
    }
}

/// Where a report went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Sink-specific location, such as a file path or message id.
    pub location: String,
    /// False when the sink already held identical content and skipped the write.
    pub created: bool,
}

/// A destination for composed reports.
pub trait ReportSink {
    /// Deliver one report.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if the sink could not accept the report. A failed delivery never
    /// changes the report itself.
    fn deliver(&self, document: &ReportDocument) -> Result<DeliveryReceipt, FilesError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        delivered: RefCell<Vec<String>>,
    }

    impl ReportSink for RecordingSink {
        fn deliver(&self, document: &ReportDocument) -> Result<DeliveryReceipt, FilesError> {
            self.delivered.borrow_mut().push(document.title());
            Ok(DeliveryReceipt {
                location: format!("memory:{}", self.delivered.borrow().len()),
                created: true,
            })
        }
    }

    #[test]
    fn sink_is_usable_as_trait_object() {
        let sink = RecordingSink::default();
        let dyn_sink: &dyn ReportSink = &sink;
        let document = ReportDocument::new(
            NonEmptyText::new("Hong").expect("valid name"),
            "Profile\nHong (male) was born under the Water element in Spring.\n",
            vec!["Omega-3".into()],
        );

        let receipt = dyn_sink.deliver(&document).expect("delivery succeeds");
        assert_eq!(receipt.location, "memory:1");
        assert_eq!(
            sink.delivered.borrow().as_slice(),
            ["Element health profile for Hong"]
        );
    }
}
