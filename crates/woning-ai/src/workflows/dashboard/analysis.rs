//! Boundary to the external analysis generator. The generator writes
//! `RawAnalysis` records on its own schedule; this crate only asks for one.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisAck {
    pub status: &'static str,
    pub message: String,
    pub property_id: String,
}

pub trait AnalysisGenerator: Send + Sync {
    fn request(&self, property_id: &str) -> Result<AnalysisAck, AnalysisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("missing or invalid propertyId")]
    InvalidPropertyId,
    #[error("analysis generator unavailable: {0}")]
    Unavailable(String),
}

/// Acknowledges requests without scoring anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalysisGenerator;

impl AnalysisGenerator for PlaceholderAnalysisGenerator {
    fn request(&self, property_id: &str) -> Result<AnalysisAck, AnalysisError> {
        let property_id = property_id.trim();
        if property_id.is_empty() {
            return Err(AnalysisError::InvalidPropertyId);
        }

        Ok(AnalysisAck {
            status: "ok",
            message: "Analysis request received; scoring is not connected yet.".to_string(),
            property_id: property_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_rejects_blank_ids() {
        let generator = PlaceholderAnalysisGenerator;
        assert!(matches!(
            generator.request("   "),
            Err(AnalysisError::InvalidPropertyId)
        ));

        let ack = generator.request(" property-1 ").expect("ack");
        assert_eq!(ack.property_id, "property-1");
        assert_eq!(ack.status, "ok");
    }
}
