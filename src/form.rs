/// Scalar registration fields of the request form. Pure storage: validation
/// lives in `validate`, never here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestForm {
    pub physician: String,
    pub cnpj: String,
    pub coordination: String,
    /// Chosen catalog value ("Cancelamento", ...); empty until picked.
    pub request_type: String,
    pub notes: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Physician,
    Cnpj,
    Coordination,
    RequestType,
    Notes,
}

impl RequestForm {
    /// Returns a new snapshot with exactly one field replaced. Consumers do
    /// equality-based change detection, so the previous value is never
    /// mutated in place.
    pub fn with_field(&self, field: FormField, value: impl Into<String>) -> RequestForm {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FormField::Physician => next.physician = value,
            FormField::Cnpj => next.cnpj = value,
            FormField::Coordination => next.coordination = value,
            FormField::RequestType => next.request_type = value,
            FormField::Notes => next.notes = value,
        }
        next
    }
}
