use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

const ICONS: [&str; 18] = [
    "fa-wrench",
    "fa-screwdriver-wrench",
    "fa-gears",
    "fa-car",
    "fa-truck-fast",
    "fa-gas-pump",
    "fa-battery-full",
    "fa-oil-can",
    "fa-motorcycle",
    "fa-hammer",
    "fa-toolbox",
    "fa-screwdriver",
    "fa-helmet-safety",
    "fa-car-battery",
    "fa-plug",
    "fa-bolt",
    "fa-fan",
    "fa-industry",
];

const COLORS: [&str; 3] = [
    "rgba(10, 127, 122, 0.38)",
    "rgba(10, 127, 122, 0.28)",
    "rgba(245, 158, 11, 0.30)",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub icon: &'static str,
    pub color: &'static str,
    pub size_px: u32,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub rotate: bool,
}

fn pick<T: Copy>(items: &[T], roll: f64) -> T {
    let index = ((roll * items.len() as f64) as usize).min(items.len() - 1);
    items[index]
}

impl Particle {
    /// `random` yields values in `[0, 1)`.
    pub fn generate(random: &mut impl FnMut() -> f64) -> Self {
        let icon = pick(&ICONS, random());
        let size_px = (random() * 16.0 + 12.0) as u32;
        let color = pick(&COLORS, random());
        let left_pct = random() * 100.0;
        let duration_s = random() * 10.0 + 10.0;
        let delay_s = -random() * duration_s;
        let rotate = random() > 0.6;
        Self { icon, color, size_px, left_pct, duration_s, delay_s, rotate }
    }

    fn style(&self) -> String {
        format!(
            "font-size: {}px; color: {}; top: 100%; left: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.size_px, self.color, self.left_pct, self.duration_s, self.delay_s
        )
    }
}

#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let particles = use_memo(
        |_| {
            let mut random = Math::random;
            (0..config::PARTICLE_COUNT)
                .map(|_| Particle::generate(&mut random))
                .collect::<Vec<_>>()
        },
        (),
    );

    html! {
        <div id="particles" class="particles" aria-hidden="true">
            {
                for particles.iter().map(|particle| html! {
                    <i
                        class={classes!("fas", particle.icon, "particle", particle.rotate.then(|| "rotate-slow"))}
                        style={particle.style()}
                    ></i>
                })
            }
        </div>
    }
}
