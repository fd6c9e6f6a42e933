use dioxus::prelude::*;

use crate::icons::{use_icon_refresh, Icon};
use crate::timers::sleep_ms;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn border_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "border-secondary/30",
            ToastKind::Error => "border-red-500/30",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check-circle",
            ToastKind::Error => "alert-circle",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "w-5 h-5 text-secondary flex-shrink-0",
            ToastKind::Error => "w-5 h-5 text-red-500 flex-shrink-0",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Mounted but not yet faded in.
    Entering,
    Visible,
    Leaving,
    Gone,
}

impl ToastPhase {
    pub fn is_shown(&self) -> bool {
        matches!(self, ToastPhase::Visible)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimeline {
    pub enter_delay_ms: u32,
    pub display_ms: u32,
    pub fade_ms: u32,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            display_ms: 5000,
            fade_ms: 300,
        }
    }
}

impl ToastTimeline {
    /// Phase of a toast `elapsed` milliseconds after it was created.
    pub fn phase_at(&self, elapsed: u32) -> ToastPhase {
        if elapsed < self.enter_delay_ms {
            ToastPhase::Entering
        } else if elapsed < self.display_ms {
            ToastPhase::Visible
        } else if elapsed < self.total_ms() {
            ToastPhase::Leaving
        } else {
            ToastPhase::Gone
        }
    }

    pub fn total_ms(&self) -> u32 {
        self.display_ms.saturating_add(self.fade_ms)
    }

    /// Elapsed times at which the phase changes, in order.
    pub fn milestones(&self) -> [u32; 3] {
        [self.enter_delay_ms, self.display_ms, self.total_ms()]
    }
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn class_name(&self) -> String {
        if self.phase.is_shown() {
            format!("notification show {}", self.kind.border_class())
        } else {
            format!("notification {}", self.kind.border_class())
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: ToastId,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Entering,
        });
        id
    }

    /// Moves a toast forward; `Gone` removes it.
    pub fn set_phase(&mut self, id: ToastId, phase: ToastPhase) {
        if phase == ToastPhase::Gone {
            self.dismiss(id);
            return;
        }
        if let Some(toast) = self.items.iter_mut().find(|toast| toast.id == id) {
            toast.phase = phase;
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.items.iter().any(|toast| toast.id == id)
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Page-wide notification handle, constructed once in `Shell`.
///
/// Raising a toast only queues it; `ToastHost` owns every lifecycle, so a
/// toast outlives the control that raised it.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    toasts: Signal<Toasts>,
    timeline: ToastTimeline,
}

impl Notifier {
    pub fn new(toasts: Signal<Toasts>, timeline: ToastTimeline) -> Self {
        Self { toasts, timeline }
    }

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let mut toasts = self.toasts;
        let id = toasts.write().push(message, kind);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, ToastKind::Error)
    }

    pub fn dismiss(&self, id: ToastId) {
        let mut toasts = self.toasts;
        toasts.write().dismiss(id);
    }

    pub fn toasts(&self) -> Signal<Toasts> {
        self.toasts
    }

    pub fn timeline(&self) -> ToastTimeline {
        self.timeline
    }
}

pub fn use_notifier_provider(timeline: ToastTimeline) -> Notifier {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| Notifier::new(toasts, timeline))
}

#[component]
pub fn ToastHost() -> Element {
    let notifier = use_context::<Notifier>();
    let toasts = notifier.toasts();
    use_icon_refresh(move || {
        toasts.read();
    });
    let items = toasts.read().items().to_vec();

    rsx! {
        div { class: "toast-stack", aria_live: "polite",
            for toast in items {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

/// One toast; walks it through the timeline from the moment it mounts.
#[component]
fn ToastItem(toast: Toast) -> Element {
    let notifier = use_context::<Notifier>();
    let id = toast.id;

    use_hook(move || {
        let mut toasts = notifier.toasts();
        let timeline = notifier.timeline();
        spawn(async move {
            let mut elapsed = 0;
            for milestone in timeline.milestones() {
                sleep_ms(milestone.saturating_sub(elapsed)).await;
                elapsed = milestone;
                if !toasts.peek().contains(id) {
                    return;
                }
                toasts.write().set_phase(id, timeline.phase_at(elapsed));
            }
        })
    });

    rsx! {
        div { class: toast.class_name(),
            div { class: "flex items-center gap-3",
                Icon { name: toast.kind.icon(), class: toast.kind.icon_class() }
                p { class: "text-sm", "{toast.message}" }
                button {
                    r#type: "button",
                    class: "ml-2 text-gray-400 hover:text-white",
                    aria_label: "Fechar notificação",
                    onclick: move |_| notifier.dismiss(id),
                    Icon { name: "x", class: "w-4 h-4" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timeline_phases() {
        let timeline = ToastTimeline::default();
        assert_eq!(timeline.phase_at(0), ToastPhase::Entering);
        assert_eq!(timeline.phase_at(100), ToastPhase::Visible);
        assert_eq!(timeline.phase_at(4999), ToastPhase::Visible);
        assert_eq!(timeline.phase_at(5000), ToastPhase::Leaving);
        assert_eq!(timeline.phase_at(5299), ToastPhase::Leaving);
        assert_eq!(timeline.phase_at(5300), ToastPhase::Gone);
        assert_eq!(timeline.total_ms(), 5300);
    }

    #[test]
    fn milestones_walk_every_phase_once() {
        let timeline = ToastTimeline::default();
        assert_eq!(timeline.milestones(), [100, 5000, 5300]);
        let phases: Vec<_> = timeline
            .milestones()
            .into_iter()
            .map(|elapsed| timeline.phase_at(elapsed))
            .collect();
        assert_eq!(
            phases,
            vec![ToastPhase::Visible, ToastPhase::Leaving, ToastPhase::Gone]
        );
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut toasts = Toasts::default();
        let first = toasts.push("a", ToastKind::Success);
        let second = toasts.push("b", ToastKind::Error);
        toasts.dismiss(first);
        let third = toasts.push("c", ToastKind::Success);
        assert!(first < second && second < third);
        assert_eq!(toasts.items().len(), 2);
    }

    #[test]
    fn gone_phase_removes_toast() {
        let mut toasts = Toasts::default();
        let id = toasts.push("done", ToastKind::Success);
        assert_eq!(toasts.items()[0].class_name(), "notification border-secondary/30");
        toasts.set_phase(id, ToastPhase::Visible);
        assert_eq!(toasts.items()[0].phase, ToastPhase::Visible);
        assert_eq!(toasts.items()[0].class_name(), "notification show border-secondary/30");
        toasts.set_phase(id, ToastPhase::Gone);
        assert!(!toasts.contains(id));
    }

    #[test]
    fn phase_updates_for_dismissed_toasts_are_ignored() {
        let mut toasts = Toasts::default();
        let id = toasts.push("bye", ToastKind::Error);
        toasts.dismiss(id);
        toasts.set_phase(id, ToastPhase::Leaving);
        assert!(toasts.items().is_empty());
    }

    #[test]
    fn kinds_pick_icon_and_border() {
        assert_eq!(ToastKind::Success.icon(), "check-circle");
        assert_eq!(ToastKind::Error.icon(), "alert-circle");
        assert_eq!(ToastKind::Error.border_class(), "border-red-500/30");
    }
}
