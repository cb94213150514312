//! Wire types for the Gemini `generateContent` API family.
//!
//! Request fields serialize in camelCase per the v1beta REST surface.
//! Responses are decoded leniently: unknown part shapes and missing fields
//! collapse to empty text rather than a deserialization failure.

use serde::{Deserialize, Serialize};

use amity_types::llm::{Turn, TurnRole};

/// One piece of content; replies only ever carry text parts here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// A turn of content, or the system instruction (which carries no role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(TurnRole::User.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some(TurnRole::Model.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        match turn.role {
            TurnRole::User => Content::user(turn.text.clone()),
            TurnRole::Model => Content::model(turn.text.clone()),
        }
    }
}

/// Request body for `models/{model}:streamGenerateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

/// One streamed chunk (or a full response) from the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn text_fragment(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            system_instruction: Some(Content::system("be kind")),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"role\":\"user\""));
        // The system instruction carries no role key.
        assert!(!json.contains("\"role\":null"));
    }

    #[test]
    fn test_content_from_turn() {
        let turn = Turn {
            role: TurnRole::Model,
            text: "hey!".to_string(),
        };
        let content = Content::from(&turn);
        assert_eq!(content.role.as_deref(), Some("model"));
        assert_eq!(content.parts[0].text, "hey!");
    }

    #[test]
    fn test_text_fragment_concatenates_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hel"}, {"text": "lo"}]
                }
            }]
        }"#;
        let chunk: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.text_fragment().as_deref(), Some("Hello"));
    }

    #[test]
    fn test_text_fragment_handles_empty_chunks() {
        let chunk: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(chunk.text_fragment().is_none());

        let json = r#"{"candidates": [{"finishReason": "STOP"}]}"#;
        let chunk: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(chunk.text_fragment().is_none());
    }
}
