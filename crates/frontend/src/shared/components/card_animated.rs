//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Карточки каталога и заказов появляются каскадом: каждая следующая
//! с задержкой `index * STAGGER_MS`.
//!
//! # Пример
//! ```text
//! <CardAnimated delay_ms=stagger_delay(index) class="product-card">
//!     <p>"Контент"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг задержки между соседними карточками
pub const STAGGER_MS: u32 = 100;

pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_MS)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные CSS-классы карточки.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.3s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(5), 500);
        assert_eq!(stagger_delay(usize::MAX), u32::MAX);
    }
}
