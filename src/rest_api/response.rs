//! # Response Formatting

use serde::Serialize;

/// Body of a successful create
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    /// Canonical location of the created property
    pub fn location(&self) -> String {
        format!("/properties/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response() {
        let response = CreatedResponse::new(12);
        assert_eq!(response.location(), "/properties/12");
        assert_eq!(serde_json::to_value(&response).unwrap()["id"], 12);
    }
}
