use dioxus::prelude::*;

use crate::content::Plan;
use crate::stub::PurchaseButton;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            BillingPeriod::Yearly
        } else {
            BillingPeriod::Monthly
        }
    }

    pub fn is_yearly(&self) -> bool {
        matches!(self, BillingPeriod::Yearly)
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/mês",
            BillingPeriod::Yearly => "/ano",
        }
    }
}

impl Plan {
    pub fn price(&self, period: BillingPeriod) -> &'static str {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.yearly_price,
        }
    }
}

#[component]
pub fn PricingTable(plans: Vec<Plan>) -> Element {
    let mut period = use_signal(BillingPeriod::default);
    let current = period();

    rsx! {
        label { class: "pricing-toggle",
            span { class: if current.is_yearly() { "" } else { "active" }, "Mensal" }
            input {
                id: "pricing-toggle",
                r#type: "checkbox",
                checked: current.is_yearly(),
                onchange: move |event| period.set(BillingPeriod::from_checked(event.checked())),
            }
            span { class: if current.is_yearly() { "active" } else { "" }, "Anual" }
        }
        div { class: "pricing-grid",
            for plan in plans {
                div {
                    key: "{plan.name}",
                    class: if plan.featured { "pricing-card featured" } else { "pricing-card" },
                    h3 { class: "pricing-name", "{plan.name}" }
                    p { class: "pricing-price",
                        span { class: "price-amount", {plan.price(current)} }
                        span { class: "price-period", {current.suffix()} }
                    }
                    ul { class: "pricing-features",
                        for feature in plan.features.iter() {
                            li { key: "{feature}", "{feature}" }
                        }
                    }
                    PurchaseButton { label: plan.cta }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::plans;

    #[test]
    fn checkbox_maps_to_period() {
        assert_eq!(BillingPeriod::from_checked(true), BillingPeriod::Yearly);
        assert_eq!(BillingPeriod::from_checked(false), BillingPeriod::Monthly);
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }

    #[test]
    fn plans_show_price_for_selected_period() {
        let plan = &plans()[0];
        assert_eq!(plan.price(BillingPeriod::Monthly), plan.monthly_price);
        assert_eq!(plan.price(BillingPeriod::Yearly), plan.yearly_price);
        assert_ne!(plan.monthly_price, plan.yearly_price);
    }
}
