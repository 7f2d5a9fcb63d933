use serde::Deserialize;

use crate::{error::MetadataError, types::primitives::TokenId};

const JSON_DATA_PREFIX: &str = "data:application/json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl TokenMetadata {
    pub fn placeholder(token_id: TokenId) -> Self {
        Self {
            name: format!("Domain #{token_id}"),
            image: None,
        }
    }

    /// Decode a `tokenURI` value. Inline utf-8 JSON is parsed; base64
    /// payloads and remote URIs yield the placeholder.
    pub fn from_token_uri(token_id: TokenId, uri: &str) -> Result<Self, MetadataError> {
        let Some(rest) = uri.strip_prefix(JSON_DATA_PREFIX) else {
            return Ok(Self::placeholder(token_id));
        };

        let Some((encoding, payload)) = rest.split_once(',') else {
            return Ok(Self::placeholder(token_id));
        };

        if encoding.contains("base64") {
            return Ok(Self::placeholder(token_id));
        }

        let metadata: TokenMetadata = serde_json::from_str(payload)?;
        if metadata.name.trim().is_empty() {
            return Ok(Self {
                name: Self::placeholder(token_id).name,
                ..metadata
            });
        }

        Ok(metadata)
    }
}
