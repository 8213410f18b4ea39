use once_cell::sync::Lazy;
use regex::Regex;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::use_revealed;
use crate::config;

static ANIMATABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)([+%]?)$").unwrap());

/// Count-up plan for a statistic such as `500+` or `98%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
    pub suffix: String,
    pub increment: u32,
}

impl CountUp {
    /// Values like `24/7` are not animated and yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = ANIMATABLE_RE.captures(text.trim())?;
        let target: u32 = captures[1].parse().ok()?;
        Some(Self {
            target,
            suffix: captures[2].to_string(),
            increment: (target / config::COUNTER_STEPS).max(1),
        })
    }

    pub fn next(&self, current: u32) -> u32 {
        current.saturating_add(self.increment).min(self.target)
    }

    pub fn is_done(&self, current: u32) -> bool {
        current >= self.target
    }

    pub fn display(&self, current: u32) -> String {
        format!("{}{}", current, self.suffix)
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone());
    let plan = use_memo(|value| CountUp::parse(value), props.value.clone());
    let current = use_state(|| None::<u32>);

    let running = match (&*plan, *current) {
        (Some(plan), Some(value)) => revealed && !plan.is_done(value),
        (Some(_), None) => revealed,
        (None, _) => false,
    };

    {
        let plan = plan.clone();
        let current = current.clone();
        use_interval(
            move || {
                if let Some(plan) = &*plan {
                    current.set(Some(plan.next((*current).unwrap_or(0))));
                }
            },
            if running { config::COUNTER_TICK_MS } else { 0 },
        );
    }

    let text = match (&*plan, *current) {
        (Some(plan), Some(value)) => plan.display(value),
        _ => props.value.to_string(),
    };

    html! {
        <div class="stat-item" ref={node}>
            <div class="stat-number">{text}</div>
            <div class="stat-label">{props.label.clone()}</div>
        </div>
    }
}
