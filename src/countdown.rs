use dioxus::prelude::*;
use serde::Deserialize;

use crate::config::{CountdownConfig, LandingConfig};
use crate::date::now_ms;
use crate::timers::{periodic_supported, sleep_ms};

const DAY_MS: i64 = 86_400_000;
const HOUR_MS: i64 = 3_600_000;
const MINUTE_MS: i64 = 60_000;
const SECOND_MS: i64 = 1000;

pub const EXPIRED_MESSAGE: &str = "Oferta Encerrada!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownFields {
    #[default]
    DaysHoursMinutesSeconds,
    HoursMinutesSeconds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: Option<i64>,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Splits a positive remaining duration into display fields.
    pub fn from_millis(remaining: i64, fields: CountdownFields) -> Self {
        let remaining = remaining.max(0);
        let minutes = (remaining % HOUR_MS) / MINUTE_MS;
        let seconds = (remaining % MINUTE_MS) / SECOND_MS;
        match fields {
            CountdownFields::DaysHoursMinutesSeconds => Self {
                days: Some(remaining / DAY_MS),
                hours: (remaining % DAY_MS) / HOUR_MS,
                minutes,
                seconds,
            },
            CountdownFields::HoursMinutesSeconds => Self {
                days: None,
                hours: remaining / HOUR_MS,
                minutes,
                seconds,
            },
        }
    }

    pub fn labels(&self) -> Vec<(&'static str, String)> {
        let mut labels = Vec::with_capacity(4);
        if let Some(days) = self.days {
            labels.push(("Dias", pad(days)));
        }
        labels.push(("Horas", pad(self.hours)));
        labels.push(("Minutos", pad(self.minutes)));
        labels.push(("Segundos", pad(self.seconds)));
        labels
    }

    pub fn display(&self) -> String {
        self.labels()
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<_>>()
            .join(":")
    }
}

fn pad(value: i64) -> String {
    format!("{value:02}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Render(Remaining),
    /// Returned once, on the transition out of the running state.
    Expired,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    deadline: i64,
    fields: CountdownFields,
    running: bool,
}

impl Countdown {
    pub fn start(now: i64, offset: i64, fields: CountdownFields) -> Self {
        Self {
            deadline: now + offset,
            fields,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self, now: i64) -> Tick {
        if !self.running {
            return Tick::Stopped;
        }
        let remaining = self.deadline - now;
        if remaining <= 0 {
            self.running = false;
            return Tick::Expired;
        }
        Tick::Render(Remaining::from_millis(remaining, self.fields))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    Running(Remaining),
    Expired,
}

impl Frame {
    fn after(tick: Tick) -> Self {
        match tick {
            Tick::Render(remaining) => Frame::Running(remaining),
            Tick::Expired | Tick::Stopped => Frame::Expired,
        }
    }
}

#[component]
pub fn CountdownTimer() -> Element {
    let config = use_context::<LandingConfig>();
    let Some(settings) = config.countdown else {
        tracing::debug!("countdown: not configured, skipping");
        return rsx! {};
    };
    rsx! {
        CountdownDisplay { settings }
    }
}

#[component]
fn CountdownDisplay(settings: CountdownConfig) -> Element {
    let mut timer = use_signal(|| {
        let now = now_ms() as i64;
        let mut countdown = Countdown::start(now, settings.offset_ms, settings.fields);
        let frame = Frame::after(countdown.tick(now));
        (countdown, frame)
    });

    use_hook(move || {
        if !periodic_supported() || !timer.peek().0.is_running() {
            return;
        }
        let tick_ms = settings.tick_ms;
        spawn(async move {
            loop {
                sleep_ms(tick_ms).await;
                let tick = timer.write().0.tick(now_ms() as i64);
                if tick == Tick::Stopped {
                    break;
                }
                timer.write().1 = Frame::after(tick);
                if tick == Tick::Expired {
                    tracing::debug!("countdown: expired");
                    break;
                }
            }
        });
    });

    let frame = timer.read().1;
    match frame {
        Frame::Expired => rsx! {
            div { id: "countdown-timer",
                p { class: "text-secondary text-xl font-bold", "{EXPIRED_MESSAGE}" }
            }
        },
        Frame::Running(remaining) => {
            let spoken = format!("Tempo restante {}", remaining.display());
            rsx! {
                div { id: "countdown-timer", role: "timer", aria_label: spoken,
                    div { class: "flex justify-center gap-4 flex-wrap",
                        for (label, value) in remaining.labels() {
                            div { key: "{label}", class: "countdown-timer",
                                div { class: "countdown-number", "{value}" }
                                div { class: "countdown-label", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
