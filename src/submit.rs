use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::form::RequestForm;
use crate::units::UnitEntry;
use crate::validate::digits_only;

/// Persistence endpoint path, joined to the page origin at submit time.
pub const ENDPOINT_PATH: &str = "/api/salvarNoSnowflake";

/// Absolute endpoint URL for a given origin. reqwest rejects relative URLs
/// outright, so the path has to be resolved against a base before the
/// request builder ever sees it.
pub fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ENDPOINT_PATH)
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status; the body text is the
    /// failure reason shown to the user.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Normalized wire shape the backend accepts. Keys follow its pt-BR contract.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SchedulePayload {
    pub medico: String,
    pub cnpj: String,
    pub coordenacao: String,
    #[serde(rename = "tipoSolicitacao")]
    pub tipo_solicitacao: String,
    pub observacoes: String,
    pub unidades: Vec<UnitPayload>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UnitPayload {
    pub nome: String,
    pub dias: Vec<SlotPayload>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SlotPayload {
    /// DD/MM/YYYY display format.
    pub data: String,
    pub horario: String,
}

/// Normalizes validated state: CNPJ reduced to digits only, slot dates
/// reformatted to DD/MM/YYYY, everything else passed through. Callers must
/// have run `validate` first; an unset date would otherwise serialize empty.
pub fn build_payload(form: &RequestForm, units: &[UnitEntry]) -> SchedulePayload {
    SchedulePayload {
        medico: form.physician.clone(),
        cnpj: digits_only(&form.cnpj),
        coordenacao: form.coordination.clone(),
        tipo_solicitacao: form.request_type.clone(),
        observacoes: form.notes.clone(),
        unidades: units
            .iter()
            .map(|u| UnitPayload {
                nome: u.code.clone(),
                dias: u
                    .slots
                    .iter()
                    .map(|s| SlotPayload {
                        data: s.date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default(),
                        horario: s.time_range.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Single request/response exchange with the persistence endpoint under
/// `base_url`. No retry, no timeout; at most one submission is in flight
/// (the view's busy flag guards re-entry while this future is pending).
pub async fn submit(
    base_url: &str,
    form: &RequestForm,
    units: &[UnitEntry],
) -> Result<(), SubmitError> {
    let payload = build_payload(form, units);
    let url = endpoint_url(base_url);
    info!(%url, unidades = payload.unidades.len(), "submitting schedule request");
    let response = reqwest::Client::new().post(&url).json(&payload).send().await?;
    if !response.status().is_success() {
        let detail = response.text().await.unwrap_or_else(|e| e.to_string());
        warn!(%detail, "schedule request rejected");
        return Err(SubmitError::Rejected(detail));
    }
    info!("schedule request persisted");
    Ok(())
}
