use async_trait::async_trait;

use super::model::{AnalysisReport, AnalysisRequest};
use crate::errors::Result;

/// Produces a written assessment of a business plan.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Stable identifier, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Analyses the request.
    ///
    /// Fails with [`Error::Analysis`](crate::errors::Error::Analysis) when the
    /// provider cannot produce a report.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisError, BusinessProfile};
    use crate::errors::Error;
    use crate::metrics::{FinancialInputs, MetricsBundle};

    /// Echoes the project name, or fails when the name is empty.
    struct EchoProvider;

    #[async_trait]
    impl AnalysisProvider for EchoProvider {
        fn id(&self) -> &'static str {
            "echo"
        }

        async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
            if request.profile.name.is_empty() {
                return Err(AnalysisError::invalid_request("project name is empty").into());
            }
            Ok(AnalysisReport {
                provider_id: self.id().to_string(),
                conclusion: request.profile.name.clone(),
                ..AnalysisReport::default()
            })
        }
    }

    fn request(name: &str) -> AnalysisRequest {
        AnalysisRequest::new(
            BusinessProfile::new(name, "food"),
            FinancialInputs::default(),
            MetricsBundle::default(),
        )
    }

    #[tokio::test]
    async fn test_provider_behind_trait_object() {
        let provider: Box<dyn AnalysisProvider> = Box::new(EchoProvider);
        let report = provider.analyze(&request("Kopi Senja")).await.unwrap();
        assert_eq!(report.provider_id, "echo");
        assert_eq!(report.conclusion, "Kopi Senja");
    }

    #[tokio::test]
    async fn test_provider_error_surfaces_as_analysis_error() {
        let err = EchoProvider.analyze(&request("")).await.unwrap_err();
        assert!(matches!(err, Error::Analysis(AnalysisError::InvalidRequest(_))));
    }
}
