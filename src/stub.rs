use dioxus::prelude::*;

use crate::config::{LandingConfig, StubConfig};
use crate::icons::{use_icon_refresh, Icon};
use crate::scroll::{scroll_to_section, SectionAlign};
use crate::timers::sleep_ms;
use crate::toast::{Notifier, ToastTimeline};

pub const SUCCESS_SECTION_ID: &str = "success-section";
pub const INVALID_EMAIL_MESSAGE: &str = "Por favor, insira um email válido.";

/// Loose shape check: something before the `@`, a dotted domain after it.
pub fn plausible_email(address: &str) -> bool {
    let Some((local, domain)) = address.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// A simulated operation: busy indicator, fixed delay, success toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StubAction {
    Purchase,
    ContactForm,
    Newsletter { email: String },
}

impl StubAction {
    pub fn name(&self) -> &'static str {
        match self {
            StubAction::Purchase => "purchase",
            StubAction::ContactForm => "contact-form",
            StubAction::Newsletter { .. } => "newsletter",
        }
    }

    pub fn delay_ms(&self, config: &StubConfig) -> u32 {
        match self {
            StubAction::Purchase => config.purchase_delay_ms,
            StubAction::ContactForm => config.form_delay_ms,
            StubAction::Newsletter { .. } => config.newsletter_delay_ms,
        }
    }

    /// Text shown next to the spinner; the newsletter button shows only the spinner.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            StubAction::Purchase => Some("Processando..."),
            StubAction::ContactForm => Some("Enviando..."),
            StubAction::Newsletter { .. } => None,
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            StubAction::Purchase => "Compra realizada com sucesso! Verifique seu email.".to_string(),
            StubAction::ContactForm => "Formulário enviado com sucesso!".to_string(),
            StubAction::Newsletter { email } => format!("Email {email} cadastrado com sucesso!"),
        }
    }

    /// Section brought into view once the action succeeds.
    pub fn follow_up_section(&self) -> Option<&'static str> {
        match self {
            StubAction::Purchase => Some(SUCCESS_SECTION_ID),
            StubAction::ContactForm | StubAction::Newsletter { .. } => None,
        }
    }

    pub fn schedule(&self, config: &StubConfig, timeline: &ToastTimeline) -> StubSchedule {
        let restored_at_ms = self.delay_ms(config);
        StubSchedule {
            restored_at_ms,
            toast_at_ms: restored_at_ms,
            toast_gone_at_ms: restored_at_ms + timeline.total_ms(),
        }
    }
}

/// Milestones of one stub run, relative to the trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StubSchedule {
    pub restored_at_ms: u32,
    pub toast_at_ms: u32,
    pub toast_gone_at_ms: u32,
}

/// A control that swaps to a busy indicator and is disabled while busy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusyControl {
    label: &'static str,
    busy: bool,
}

impl BusyControl {
    pub fn new(label: &'static str) -> Self {
        Self { label, busy: false }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_disabled(&self) -> bool {
        self.busy
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns false when the control is already busy.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}

/// Runs a stub to completion. There is no failure path.
pub async fn run_stub(
    action: StubAction,
    schedule: StubSchedule,
    mut control: Signal<BusyControl>,
    notifier: Notifier,
) -> bool {
    if !control.write().begin() {
        return false;
    }
    tracing::debug!(
        "stub: {} started, toast at +{}ms, clears at +{}ms",
        action.name(),
        schedule.toast_at_ms,
        schedule.toast_gone_at_ms
    );
    sleep_ms(schedule.restored_at_ms).await;
    control.write().finish();
    notifier.success(action.success_message());
    tracing::debug!("stub: {} finished", action.name());
    true
}

#[component]
fn BusyContent(
    control: BusyControl,
    #[props(!optional)] busy_label: Option<&'static str>,
    icon: &'static str,
) -> Element {
    if !control.is_busy() {
        let label = control.label();
        return rsx! {
            span { class: "control-content",
                Icon { name: icon }
                " {label}"
            }
        };
    }
    rsx! {
        span { class: "control-content",
            Icon { name: "loader", class: "w-5 h-5 animate-spin" }
            if let Some(label) = busy_label {
                " {label}"
            }
        }
    }
}

#[component]
pub fn PurchaseButton(label: &'static str, class: Option<&'static str>) -> Element {
    let config = use_context::<LandingConfig>();
    let notifier = use_context::<Notifier>();
    let control = use_signal(|| BusyControl::new(label));
    use_icon_refresh(move || {
        control.read();
    });
    let action = StubAction::Purchase;
    let schedule = action.schedule(&config.stub, &config.toast.timeline());
    let busy_label = action.busy_label();
    let class = class.unwrap_or("purchase-btn");

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled: control.read().is_disabled(),
            onclick: move |event| {
                event.prevent_default();
                spawn(async move {
                    let action = StubAction::Purchase;
                    let section = action.follow_up_section();
                    if run_stub(action, schedule, control, notifier).await {
                        if let Some(section) = section {
                            scroll_to_section(section, SectionAlign::Top);
                        }
                    }
                });
            },
            BusyContent { control: control(), busy_label, icon: "shopping-cart" }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactFields {
    name: String,
    email: String,
    message: String,
}

#[component]
pub fn ContactForm() -> Element {
    let config = use_context::<LandingConfig>();
    let notifier = use_context::<Notifier>();
    let mut fields = use_signal(ContactFields::default);
    let control = use_signal(|| BusyControl::new("Enviar mensagem"));
    use_icon_refresh(move || {
        control.read();
    });
    let schedule = StubAction::ContactForm.schedule(&config.stub, &config.toast.timeline());
    let current = fields.read().clone();

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |event| {
                event.prevent_default();
                spawn(async move {
                    if run_stub(StubAction::ContactForm, schedule, control, notifier).await {
                        fields.set(ContactFields::default());
                    }
                });
            },
            input {
                r#type: "text",
                name: "name",
                placeholder: "Seu nome",
                required: true,
                value: "{current.name}",
                oninput: move |event| fields.write().name = event.value(),
            }
            input {
                r#type: "email",
                name: "email",
                placeholder: "Seu melhor email",
                required: true,
                value: "{current.email}",
                oninput: move |event| fields.write().email = event.value(),
            }
            textarea {
                name: "message",
                placeholder: "Como podemos ajudar?",
                rows: "4",
                value: "{current.message}",
                oninput: move |event| fields.write().message = event.value(),
            }
            button {
                r#type: "submit",
                class: "form-submit",
                disabled: control.read().is_disabled(),
                BusyContent { control: control(), busy_label: StubAction::ContactForm.busy_label(), icon: "send" }
            }
        }
    }
}

#[component]
pub fn NewsletterForm() -> Element {
    let config = use_context::<LandingConfig>();
    let notifier = use_context::<Notifier>();
    let mut email = use_signal(String::new);
    let control = use_signal(|| BusyControl::new("Inscrever"));
    use_icon_refresh(move || {
        control.read();
    });
    let timeline = config.toast.timeline();
    let stub_config = config.stub.clone();

    rsx! {
        form {
            id: "newsletter-form",
            class: "newsletter-form",
            onsubmit: move |event| {
                event.prevent_default();
                let address = email();
                if !plausible_email(&address) {
                    notifier.error(INVALID_EMAIL_MESSAGE);
                    return;
                }
                let action = StubAction::Newsletter { email: address.trim().to_string() };
                let schedule = action.schedule(&stub_config, &timeline);
                spawn(async move {
                    if run_stub(action, schedule, control, notifier).await {
                        email.set(String::new());
                    }
                });
            },
            input {
                r#type: "email",
                name: "email",
                placeholder: "seu@email.com",
                required: true,
                value: "{email}",
                oninput: move |event| email.set(event.value()),
            }
            button {
                r#type: "submit",
                disabled: control.read().is_disabled(),
                BusyContent { control: control(), busy_label: None, icon: "mail" }
            }
        }
    }
}
