use chrono::Local;
use dioxus::prelude::*;

use crate::catalog::{time_range_options, unit_options, TIPOS_SOLICITACAO};
use crate::form::{FormField, RequestForm};
use crate::submit::submit;
use crate::units::{self, EditError, SlotField, UnitEntry};
use crate::validate::{validate, ValidationError};

#[derive(Clone, PartialEq)]
enum FeedbackKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
struct Feedback {
    kind: FeedbackKind,
    text: String,
}

impl Feedback {
    fn success(text: impl Into<String>) -> Self {
        Feedback { kind: FeedbackKind::Success, text: text.into() }
    }
    fn error(text: impl Into<String>) -> Self {
        Feedback { kind: FeedbackKind::Error, text: text.into() }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    // dx serve default; browser builds read the real origin
    "http://localhost:8080".to_string()
}

fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::RequiredFieldsMissing => "Preencha todos os campos obrigatórios!",
        ValidationError::InvalidTaxId => "CNPJ inválido! Use 14 dígitos",
        ValidationError::InvalidUnits => "Verifique unidades e datas!",
    }
}

#[component]
pub fn Escala() -> Element {
    let mut form = use_signal(RequestForm::default);
    let mut unidades = use_signal(Vec::<UnitEntry>::new);
    let mut enviando = use_signal(|| false);
    let mut feedback = use_signal(|| Option::<Feedback>::None);

    // Floor for every date input, recomputed per render.
    let hoje = Local::now().date_naive();
    let data_minima = hoje.to_string();

    let on_submit = move |_| {
        // at most one in-flight submission
        if enviando() {
            return;
        }
        feedback.set(None);
        let form_data = form.read().clone();
        let units_data = unidades.read().clone();
        if let Err(err) = validate(&form_data, &units_data) {
            feedback.set(Some(Feedback::error(validation_message(&err))));
            return;
        }
        enviando.set(true);
        spawn(async move {
            match submit(&page_origin(), &form_data, &units_data).await {
                Ok(()) => {
                    form.set(RequestForm::default());
                    unidades.set(Vec::new());
                    feedback.set(Some(Feedback::success("Dados salvos!")));
                }
                Err(err) => feedback.set(Some(Feedback::error(format!("Erro: {err}")))),
            }
            enviando.set(false);
        });
    };

    let unidades_snapshot = unidades.read().clone();
    let submit_class = if enviando() {
        "mt-8 w-full py-2 rounded-md font-medium transition-colors bg-gray-400 cursor-not-allowed"
    } else {
        "mt-8 w-full py-2 rounded-md font-medium transition-colors bg-green-600 hover:bg-green-700 text-white"
    };

    rsx! {
        div { class: "container mx-auto p-4 max-w-3xl",
            header { class: "mb-8 text-center",
                h1 { class: "text-3xl font-bold text-blue-800", "Gestão de Escalas Médicas" }
            }

            main { class: "bg-white rounded-xl shadow-lg p-6",
                { feedback.read().as_ref().map(|fb| {
                    let tone = match fb.kind {
                        FeedbackKind::Success => "mb-4 p-3 rounded-md bg-green-100 text-green-800 text-sm",
                        FeedbackKind::Error => "mb-4 p-3 rounded-md bg-red-100 text-red-800 text-sm",
                    };
                    rsx!( p { class: tone, {fb.text.clone()} } )
                }) }

                // Dados cadastrais
                section { class: "space-y-4 mb-8",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Nome do Médico *" }
                        input {
                            r#type: "text",
                            class: "w-full p-2 border rounded-md focus:ring-2 focus:ring-blue-300",
                            value: form.read().physician.clone(),
                            oninput: move |e| {
                                let next = form.read().with_field(FormField::Physician, e.value());
                                form.set(next);
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "CNPJ *" }
                        input {
                            r#type: "text",
                            class: "w-full p-2 border rounded-md focus:ring-2 focus:ring-blue-300",
                            inputmode: "numeric",
                            maxlength: "14",
                            placeholder: "00.000.000/0000-00",
                            value: form.read().cnpj.clone(),
                            oninput: move |e| {
                                let next = form.read().with_field(FormField::Cnpj, e.value());
                                form.set(next);
                            },
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Coordenação *" }
                        input {
                            r#type: "text",
                            class: "w-full p-2 border rounded-md focus:ring-2 focus:ring-blue-300",
                            value: form.read().coordination.clone(),
                            oninput: move |e| {
                                let next = form.read().with_field(FormField::Coordination, e.value());
                                form.set(next);
                            },
                        }
                    }
                    select {
                        class: "w-full p-2 border rounded-md focus:ring-2 focus:ring-blue-300",
                        value: form.read().request_type.clone(),
                        oninput: move |e| {
                            let next = form.read().with_field(FormField::RequestType, e.value());
                            form.set(next);
                        },
                        option { value: "", "Tipo de Solicitação *" }
                        for opt in TIPOS_SOLICITACAO.iter() {
                            option { value: opt.value, {opt.label} }
                        }
                    }
                }

                // Unidades
                section { class: "space-y-6",
                    for (u_index, unidade) in unidades_snapshot.iter().enumerate() {
                        div { class: "bg-gray-50 p-4 rounded-lg border",
                            div { class: "flex gap-2 mb-4",
                                select {
                                    class: "flex-1 p-2 border rounded-md focus:ring-2 focus:ring-blue-300",
                                    value: unidade.code.clone(),
                                    oninput: move |e| {
                                        let next = units::set_unit_code(&unidades.read(), u_index, &e.value());
                                        unidades.set(next);
                                    },
                                    option { value: "", "Selecione a Unidade *" }
                                    for opt in unit_options() {
                                        option { value: opt.value, {opt.label} }
                                    }
                                }
                                button {
                                    class: "px-3 py-1.5 text-red-600 hover:text-red-800 bg-red-100 rounded-md text-sm",
                                    onclick: move |_| {
                                        let next = units::remove_unit(&unidades.read(), u_index);
                                        unidades.set(next);
                                    },
                                    "Remover"
                                }
                            }

                            div { class: "space-y-3",
                                for (d_index, dia) in unidade.slots.iter().enumerate() {
                                    div { class: "flex gap-2 items-center",
                                        input {
                                            r#type: "date",
                                            class: "p-2 border rounded-md flex-1 focus:outline-none focus:ring-1 focus:ring-blue-300",
                                            min: data_minima.clone(),
                                            value: dia.date.map(|d| d.to_string()).unwrap_or_default(),
                                            oninput: move |e| {
                                                let today = Local::now().date_naive();
                                                let edited = units::set_slot_field(&unidades.read(), u_index, d_index, SlotField::Date, &e.value(), today);
                                                match edited {
                                                    Ok(next) => {
                                                        unidades.set(next);
                                                        feedback.set(None);
                                                    }
                                                    Err(EditError::InvalidDate) => {
                                                        feedback.set(Some(Feedback::error("Selecione uma data futura!")));
                                                    }
                                                }
                                            },
                                        }
                                        select {
                                            class: "flex-1 p-2 border rounded-md focus:ring-2 focus:ring-blue-300",
                                            value: dia.time_range.clone(),
                                            oninput: move |e| {
                                                let today = Local::now().date_naive();
                                                let edited = units::set_slot_field(&unidades.read(), u_index, d_index, SlotField::TimeRange, &e.value(), today);
                                                if let Ok(next) = edited {
                                                    unidades.set(next);
                                                }
                                            },
                                            option { value: "", "Horário *" }
                                            for opt in time_range_options() {
                                                option { value: opt.value, {opt.label} }
                                            }
                                        }
                                        button {
                                            class: "px-2 text-red-500 hover:text-red-700 text-lg",
                                            onclick: move |_| {
                                                let next = units::remove_slot(&unidades.read(), u_index, d_index);
                                                unidades.set(next);
                                            },
                                            "×"
                                        }
                                    }
                                }
                                button {
                                    class: "text-sm text-blue-600 hover:text-blue-800 font-medium",
                                    onclick: move |_| {
                                        let next = units::add_slot(&unidades.read(), u_index);
                                        unidades.set(next);
                                    },
                                    "+ Adicionar Data/Horário"
                                }
                            }
                        }
                    }

                    button {
                        class: "w-full py-2 px-4 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors",
                        onclick: move |_| {
                            let next = units::add_unit(&unidades.read());
                            unidades.set(next);
                        },
                        "+ Adicionar Nova Unidade"
                    }
                }

                // Observações
                textarea {
                    class: "w-full mt-6 p-3 border rounded-lg focus:ring-2 focus:ring-blue-300 h-32",
                    placeholder: "Observações Adicionais",
                    value: form.read().notes.clone(),
                    oninput: move |e| {
                        let next = form.read().with_field(FormField::Notes, e.value());
                        form.set(next);
                    },
                }

                button {
                    class: submit_class,
                    disabled: enviando(),
                    onclick: on_submit,
                    { if enviando() { "Salvando..." } else { "Salvar Escala" } }
                }
            }
        }
    }
}
