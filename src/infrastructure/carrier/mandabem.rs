//! # Manda Bem Gateway
//!
//! Carrier adapter for the Manda Bem web service.
//!
//! The WS prices Correios services (`valor_envio`) and prints shipping
//! tags (`gerar_envio`). Requests are form-encoded; responses are JSON,
//! occasionally double-encoded as a JSON string and occasionally plain
//! text, which this adapter treats as a carrier business error carrying
//! the raw body.
//!
//! Reference: <https://mandabem.com.br/documentacao>

use crate::domain::value_objects::Money;
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::http_client::{FormClient, FormResponse};
use crate::infrastructure::carrier::traits::{
    CarrierCredentials, CarrierGateway, QuoteRequest, ServiceQuote, TagRequest,
};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Production base URL of the carrier web service.
pub const DEFAULT_BASE_URL: &str = "https://mandabem.com.br/ws";

/// Fixed package height sent to the carrier, in centimeters.
pub const PACKAGE_HEIGHT_CM: u32 = 2;
/// Fixed package width sent to the carrier, in centimeters.
pub const PACKAGE_WIDTH_CM: u32 = 11;
/// Fixed package length sent to the carrier, in centimeters.
pub const PACKAGE_LENGTH_CM: u32 = 16;

const QUOTE_ENDPOINT: &str = "valor_envio";
const TAG_ENDPOINT: &str = "gerar_envio";

/// Carrier gateway speaking the Manda Bem WS protocol.
#[derive(Debug, Clone)]
pub struct MandaBemGateway {
    client: FormClient,
    credentials: CarrierCredentials,
    base_url: String,
}

impl MandaBemGateway {
    /// Creates a gateway against the production WS.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Internal` if the HTTP client cannot be
    /// created.
    pub fn new(credentials: CarrierCredentials) -> CarrierResult<Self> {
        Ok(Self {
            client: FormClient::new()?,
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the WS base URL (test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

#[async_trait]
impl CarrierGateway for MandaBemGateway {
    async fn rate_quote(&self, request: &QuoteRequest) -> CarrierResult<Option<ServiceQuote>> {
        let form = RateQuoteForm {
            plataforma_id: &self.credentials.platform_id,
            plataforma_chave: &self.credentials.platform_key,
            cep_origem: request.origin.as_str(),
            cep_destino: request.destination.as_str(),
            valor_seguro: format_amount(request.declared_value),
            peso: request.weight_kg,
            altura: PACKAGE_HEIGHT_CM,
            largura: PACKAGE_WIDTH_CM,
            comprimento: PACKAGE_LENGTH_CM,
            servico: request.service.as_str(),
        };

        debug!(service = %request.service, "requesting carrier rate quote");
        let response = self
            .client
            .post_form(&self.endpoint(QUOTE_ENDPOINT), &form)
            .await?;

        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        let envelope = parse_envelope(response.body())?;
        if let Some(message) = embedded_error(&envelope) {
            return Err(CarrierError::business(message));
        }

        let Some(rate) = envelope
            .get("resultado")
            .and_then(|resultado| resultado.get(request.service.as_str()))
        else {
            // successful response without this service key: no offer
            return Ok(None);
        };

        let price = rate
            .get("valor")
            .and_then(value_as_f64)
            .and_then(|valor| Money::new(valor).ok())
            .ok_or_else(|| {
                CarrierError::business(format!(
                    "malformed rate value for {}: {rate}",
                    request.service
                ))
            })?;
        let delivery_days = rate.get("prazo").and_then(value_as_u32).ok_or_else(|| {
            CarrierError::business(format!(
                "malformed delivery estimate for {}: {rate}",
                request.service
            ))
        })?;

        Ok(Some(ServiceQuote {
            price,
            delivery_days,
        }))
    }

    async fn create_tag(&self, request: &TagRequest) -> CarrierResult<Value> {
        let produtos = if request.products.is_empty() {
            None
        } else {
            Some(
                serde_json::to_string(&request.products)
                    .map_err(|e| CarrierError::internal(format!("tag products encoding: {e}")))?,
            )
        };

        let form = TagForm {
            plataforma_id: &self.credentials.platform_id,
            plataforma_chave: &self.credentials.platform_key,
            ref_id: &request.reference_id,
            forma_envio: request.service.as_str(),
            destinatario: &request.recipient,
            cep: request.destination.as_str(),
            logradouro: request.street.as_deref(),
            numero: &request.number,
            complemento: request.complement.as_deref(),
            cidade: request.city.as_deref(),
            estado: request.state.as_deref(),
            peso: request.weight_kg,
            altura: request.weight_kg.map(|_| PACKAGE_HEIGHT_CM),
            largura: request.weight_kg.map(|_| PACKAGE_WIDTH_CM),
            comprimento: request.weight_kg.map(|_| PACKAGE_LENGTH_CM),
            valor_seguro: request.declared_value.map(format_amount),
            cep_origem: request.origin.as_str(),
            cpf_destinatario: request.recipient_document.as_deref(),
            produtos,
        };

        debug!(service = %request.service, ref_id = %request.reference_id, "creating shipping tag");
        let response = self
            .client
            .post_form(&self.endpoint(TAG_ENDPOINT), &form)
            .await?;

        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        // the raw payload is what callers log; tolerate non-JSON bodies
        Ok(serde_json::from_str(response.body())
            .unwrap_or_else(|_| Value::String(response.body().to_string())))
    }
}

/// Form body of a `valor_envio` request.
#[derive(Debug, Serialize)]
struct RateQuoteForm<'a> {
    plataforma_id: &'a str,
    plataforma_chave: &'a str,
    cep_origem: &'a str,
    cep_destino: &'a str,
    valor_seguro: String,
    peso: f64,
    altura: u32,
    largura: u32,
    comprimento: u32,
    servico: &'a str,
}

/// Form body of a `gerar_envio` request.
#[derive(Debug, Serialize)]
struct TagForm<'a> {
    plataforma_id: &'a str,
    plataforma_chave: &'a str,
    ref_id: &'a str,
    forma_envio: &'a str,
    destinatario: &'a str,
    cep: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    logradouro: Option<&'a str>,
    numero: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    complemento: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cidade: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estado: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    peso: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    altura: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    largura: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comprimento: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valor_seguro: Option<String>,
    cep_origem: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpf_destinatario: Option<&'a str>,
    /// Product list, JSON-encoded inside the form field.
    #[serde(skip_serializing_if = "Option::is_none")]
    produtos: Option<String>,
}

/// Formats a monetary amount the way the WS expects: two decimals.
fn format_amount(amount: Money) -> String {
    let mut decimal = amount.get().round_dp(2);
    decimal.rescale(2);
    decimal.to_string()
}

/// Parses a response body into a JSON envelope.
///
/// The WS sometimes double-encodes the payload as a JSON string; a body
/// that is not JSON at all is a business error carrying the raw text.
fn parse_envelope(body: &str) -> CarrierResult<Value> {
    let value: Value = serde_json::from_str(body.trim())
        .map_err(|_| CarrierError::business(body.to_string()))?;

    if let Value::String(inner) = &value {
        return serde_json::from_str(inner).map_err(|_| CarrierError::business(inner.clone()));
    }
    Ok(value)
}

/// Extracts an embedded `resultado.error` message, if present.
fn embedded_error(envelope: &Value) -> Option<String> {
    let error = envelope.get("resultado")?.get("error")?;
    Some(match error {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

/// Maps a non-2xx response to an error, honoring embedded payloads.
fn error_from_response(response: &FormResponse) -> CarrierError {
    match parse_envelope(response.body()) {
        Ok(envelope) => match embedded_error(&envelope) {
            Some(message) => CarrierError::business(message),
            None => CarrierError::http(response.status(), "carrier request failed"),
        },
        Err(raw_body_error) => raw_body_error,
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

fn value_as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
