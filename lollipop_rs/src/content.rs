//! Static page content: loyalty programme, pilot offer and FAQ.

use crate::icon::IconName;

/// One level of the loyalty programme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoyaltyTier {
    pub title: &'static str,
    /// Monthly purchase volume that qualifies for the tier
    pub volume: &'static str,
    pub discount: &'static str,
    pub bonus: &'static str,
    pub icon: IconName,
    /// Drawn enlarged with a "Популярный" badge
    pub featured: bool,
}

pub const LOYALTY_TIERS: [LoyaltyTier; 3] = [
    LoyaltyTier {
        title: "Базовый",
        volume: "до 100 тыс. ₽/мес",
        discount: "5%",
        bonus: "Стандартная упаковка",
        icon: IconName::Package,
        featured: false,
    },
    LoyaltyTier {
        title: "Серебряный",
        volume: "100–500 тыс. ₽/мес",
        discount: "10%",
        bonus: "Бесплатный дизайн упаковки 1 раз в квартал",
        icon: IconName::Star,
        featured: true,
    },
    LoyaltyTier {
        title: "Золотой",
        volume: "от 500 тыс. ₽/мес",
        discount: "15%",
        bonus: "Персональный менеджер + бесплатный дизайн ежемесячно",
        icon: IconName::Crown,
        featured: false,
    },
];

pub const FEATURED_BADGE: &str = "Популярный";

/// Trial batch banner under the loyalty tiers. Its button is decorative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PilotOffer {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlight: &'static str,
    pub rest: &'static str,
    pub deadline: &'static str,
    pub button: &'static str,
}

pub const PILOT_OFFER: PilotOffer = PilotOffer {
    title: "Пилотный проект",
    subtitle: "Попробуйте наш продукт с минимальным риском",
    highlight: "Пробная партия 1000 шт. со скидкой 30%",
    rest: " + бесплатный дизайн упаковки.",
    deadline: "Успейте до конца месяца!",
    button: "Запросить демо-партию",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Минимальный заказ для опта?",
        answer: "Минимальный оптовый заказ составляет 1000 шт. или 50 кг. Это позволяет нам \
                 предложить вам лучшие цены и сохранить высокое качество продукции.",
    },
    FaqEntry {
        question: "Как быстро делаете индивидуальный дизайн?",
        answer: "Разработка индивидуального дизайна упаковки занимает 3–5 дней после \
                 согласования макета. Для партнеров уровня \"Серебряный\" и \"Золотой\" \
                 дизайн предоставляется бесплатно.",
    },
    FaqEntry {
        question: "Какие гарантии при доставке?",
        answer: "Мы гарантируем возврат денег при задержке доставки более чем на 2 дня от \
                 указанного срока. Все грузы могут быть застрахованы за дополнительные \
                 0,14–0,5% от стоимости.",
    },
    FaqEntry {
        question: "Можно ли заказать пробную партию?",
        answer: "Да! Мы предлагаем пилотный проект: пробную партию 1000 шт. со скидкой 30% + \
                 бесплатный дизайн упаковки. Это отличная возможность протестировать наш \
                 продукт перед крупным заказом.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_featured_tier() {
        let featured: Vec<_> = LOYALTY_TIERS
            .iter()
            .filter(|t| t.featured)
            .map(|t| t.title)
            .collect();
        assert_eq!(featured, vec!["Серебряный"]);
    }

    #[test]
    fn faq_answers_have_no_stray_indentation() {
        for entry in FAQ {
            assert!(!entry.answer.contains("  "), "{}", entry.question);
        }
    }
}
