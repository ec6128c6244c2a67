//! Address Lookup Service (ViaCEP)
//!
//! Resolves a Brazilian postal code (CEP) to a street address. Pure
//! pass-through: the upstream answer is reshaped, never enriched. ViaCEP
//! reports an unknown-but-well-formed CEP with `{"erro": true}` and HTTP 200,
//! which this client maps to `None`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Resolved address.
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Raw ViaCEP answer.
#[derive(Debug, Deserialize)]
struct ViaCepBody {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

pub struct AddressLookup {
    client: reqwest::Client,
    base_url: String,
}

impl AddressLookup {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Normalize a caller-supplied CEP to its 8-digit form.
    ///
    /// Accepts `01001000` and `01001-000`; anything else is rejected.
    pub fn normalize_cep(cep: &str) -> Option<String> {
        let digits: String = cep.chars().filter(|c| *c != '-').collect();
        if digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit()) {
            Some(digits)
        } else {
            None
        }
    }

    /// Look up an address. `None` when ViaCEP does not know the CEP.
    /// Expects a CEP already normalized by [`Self::normalize_cep`].
    pub async fn lookup(&self, cep: &str) -> Result<Option<Address>> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);
        let body: ViaCepBody = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if body.erro {
            return Ok(None);
        }

        Ok(Some(Address {
            cep: body.cep,
            street: body.logradouro,
            complement: body.complemento,
            neighborhood: body.bairro,
            city: body.localidade,
            state: body.uf,
        }))
    }

    /// Reachability probe for the health endpoint.
    pub async fn health_check(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(resp) => resp.status().is_success() || resp.status().is_redirection(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_plain_digits() {
        assert_eq!(
            AddressLookup::normalize_cep("01001000").as_deref(),
            Some("01001000")
        );
    }

    #[test]
    fn test_normalize_strips_hyphen() {
        assert_eq!(
            AddressLookup::normalize_cep("01001-000").as_deref(),
            Some("01001000")
        );
    }

    #[test]
    fn test_normalize_rejects_bad_input() {
        assert!(AddressLookup::normalize_cep("abc").is_none());
        assert!(AddressLookup::normalize_cep("0100100").is_none());
        assert!(AddressLookup::normalize_cep("010010001").is_none());
        assert!(AddressLookup::normalize_cep("01001-00a").is_none());
    }

    #[test]
    fn test_error_body_maps_to_none() {
        let body: ViaCepBody = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(body.erro);
    }

    #[test]
    fn test_address_body_parses() {
        let raw = r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP"
        }"#;
        let body: ViaCepBody = serde_json::from_str(raw).unwrap();
        assert!(!body.erro);
        assert_eq!(body.localidade, "São Paulo");
        assert_eq!(body.uf, "SP");
    }
}
