use once_cell::sync::Lazy;

/// Facility codes the scheduling backend recognizes. Static configuration,
/// not derived at runtime.
pub const UNIDADES: [&str; 20] = [
    "DJBA-AM", "TQTP-AM", "BNOC-BA", "PQSH-BA", "PRLA-BA",
    "ALDT-CE", "STDU-CE", "WSOA-CE", "ASAN-DF", "BSIA-DF",
    "EPIA-DF", "GAMA-DF", "GBSL-DF", "PKSB-DF", "TGTG-DF",
    "W3NT-DF", "ECOM-SP", "SERR-ES", "VLVL-ES", "VTRA-ES",
];

/// Time-range labels a slot can be filed against.
pub const HORARIOS: [&str; 7] = [
    "09:00 às 15:00", "15:00 às 21:00", "14:00 às 20:00",
    "10:00 às 16:00", "13:00 às 19:00", "10:00 às 18:00",
    "12:00 às 18:00",
];

/// Category of schedule change being requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestType {
    Cancellation,
    Alteration,
    Availability,
    Justification,
}

impl RequestType {
    pub const ALL: [RequestType; 4] = [
        RequestType::Cancellation,
        RequestType::Alteration,
        RequestType::Availability,
        RequestType::Justification,
    ];

    /// Backend value for this request type (the backend speaks pt-BR).
    pub fn value(self) -> &'static str {
        match self {
            RequestType::Cancellation => "Cancelamento",
            RequestType::Alteration => "Alteração",
            RequestType::Availability => "Disponibilidade",
            RequestType::Justification => "Justificativa",
        }
    }
}

/// Plain label/value pair for enumerated choices. The rendering layer decides
/// what widget to draw; the core only hands out the options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub static TIPOS_SOLICITACAO: Lazy<Vec<SelectOption>> = Lazy::new(|| {
    RequestType::ALL
        .iter()
        .map(|t| SelectOption { label: t.value(), value: t.value() })
        .collect()
});

pub fn unit_options() -> Vec<SelectOption> {
    UNIDADES.iter().map(|u| SelectOption { label: u, value: u }).collect()
}

pub fn time_range_options() -> Vec<SelectOption> {
    HORARIOS.iter().map(|h| SelectOption { label: h, value: h }).collect()
}
