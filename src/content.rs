use crate::overlay::NavLink;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: &'static str,
    pub yearly_price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub width: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#beneficios", label: "Benefícios" },
    NavLink { href: "#modulos", label: "Módulos" },
    NavLink { href: "#depoimentos", label: "Depoimentos" },
    NavLink { href: "#precos", label: "Preços" },
    NavLink { href: "#faq", label: "FAQ" },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Em três meses dobrei o faturamento da minha agência aplicando só os dois primeiros módulos.",
        author: "Mariana Costa",
        role: "Fundadora, Costa Digital",
    },
    Testimonial {
        quote: "O módulo de funis mudou a forma como eu lanço produtos. Material direto ao ponto.",
        author: "Rafael Lima",
        role: "Infoprodutor",
    },
    Testimonial {
        quote: "Finalmente entendi tráfego pago sem queimar dinheiro. Vale cada centavo.",
        author: "Juliana Alves",
        role: "Gestora de tráfego",
    },
];

const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Por quanto tempo terei acesso ao curso?",
        answer: "O acesso é vitalício, incluindo todas as atualizações futuras do conteúdo.",
    },
    FaqEntry {
        question: "Preciso ter experiência em marketing?",
        answer: "Não. O método começa do zero e avança até estratégias para negócios já estabelecidos.",
    },
    FaqEntry {
        question: "Existe garantia?",
        answer: "Sim. Você tem 7 dias de garantia incondicional a partir da compra.",
    },
    FaqEntry {
        question: "Como recebo o acesso?",
        answer: "Logo após a confirmação do pagamento você recebe os dados de acesso por email.",
    },
];

const PLANS: &[Plan] = &[
    Plan {
        name: "Essencial",
        monthly_price: "R$ 97",
        yearly_price: "R$ 970",
        features: &["Módulos 1 a 4", "Comunidade exclusiva", "Certificado"],
        cta: "Começar agora",
        featured: false,
    },
    Plan {
        name: "Midas Completo",
        monthly_price: "R$ 197",
        yearly_price: "R$ 1.970",
        features: &[
            "Todos os módulos",
            "Mentorias ao vivo mensais",
            "Templates de funis",
            "Suporte prioritário",
        ],
        cta: "Quero o completo",
        featured: true,
    },
];

const STATS: &[Stat] = &[
    Stat { label: "Alunos satisfeitos", width: "98%" },
    Stat { label: "Aumento médio de vendas", width: "87%" },
    Stat { label: "Conclusão do curso", width: "76%" },
];

pub fn nav_links() -> Vec<NavLink> {
    NAV_LINKS.to_vec()
}

pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS.to_vec()
}

pub fn faq_entries() -> Vec<FaqEntry> {
    FAQ.to_vec()
}

pub fn plans() -> Vec<Plan> {
    PLANS.to_vec()
}

pub fn stats() -> &'static [Stat] {
    STATS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::anchor_target;

    #[test]
    fn nav_links_are_in_page_anchors() {
        for link in nav_links() {
            assert!(anchor_target(link.href).is_some(), "{}", link.href);
        }
    }

    #[test]
    fn exactly_one_featured_plan() {
        assert_eq!(plans().iter().filter(|plan| plan.featured).count(), 1);
    }
}
