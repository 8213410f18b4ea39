use web_sys::MouseEvent;
use yew::prelude::*;

/// Opening an item closes the others in its section; clicking the open
/// item closes it.
pub fn toggle_item(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

struct Entry {
    question: &'static str,
    answer: &'static str,
}

struct Group {
    title: &'static str,
    entries: &'static [Entry],
}

const GROUPS: &[Group] = &[
    Group {
        title: "For Mechanics",
        entries: &[
            Entry {
                question: "Is registration free for mechanics?",
                answer: "Yes. Registering your workshop costs nothing and there is no monthly fee. You only pay for the parts you order.",
            },
            Entry {
                question: "How fast are parts delivered?",
                answer: "Most orders from suppliers in your city arrive the same day. Parts sourced from other cities usually arrive within 48 hours.",
            },
            Entry {
                question: "Can I return a wrong part?",
                answer: "Unused parts in original packaging can be returned within 7 days. Our team arranges pickup from your workshop.",
            },
        ],
    },
    Group {
        title: "For Suppliers",
        entries: &[
            Entry {
                question: "Which suppliers can join?",
                answer: "Any registered spares shop or distributor with a GST number can list its stock on SparesConnect.",
            },
            Entry {
                question: "When do I get paid?",
                answer: "Payments for delivered orders are settled to your bank account every week.",
            },
        ],
    },
    Group {
        title: "General",
        entries: &[
            Entry {
                question: "Which cities do you serve?",
                answer: "We currently operate across major cities in Karnataka, Tamil Nadu, Maharashtra and Telangana, and we add new cities every quarter.",
            },
            Entry {
                question: "How do I contact support?",
                answer: "Our support team is available around the clock by phone and WhatsApp for every registered mechanic and supplier.",
            },
        ],
    },
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqGroupProps {
    index: usize,
}

#[function_component(FaqGroup)]
fn faq_group(props: &FaqGroupProps) -> Html {
    let open = use_state(|| None::<usize>);
    let group = &GROUPS[props.index];

    html! {
        <div class="faq-section">
            <h2>{group.title}</h2>
            {
                for group.entries.iter().enumerate().map(|(i, entry)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggle_item(*open, i)))
                    };
                    html! {
                        <FaqItem question={entry.question} is_open={*open == Some(i)} on_toggle={on_toggle}>
                            <p>{entry.answer}</p>
                        </FaqItem>
                    }
                })
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <section class="page-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything mechanics and suppliers ask us before joining SparesConnect"}</p>
            </section>
            { for (0..GROUPS.len()).map(|index| html! { <FaqGroup index={index} /> }) }
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }
                .faq-item {
                    background: #ffffff;
                    border: 1px solid rgba(10, 127, 122, 0.15);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .faq-item:hover {
                    border-color: rgba(10, 127, 122, 0.4);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    display: flex;
                    justify-content: space-between;
                    font-size: 1.05rem;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 400px;
                    padding-bottom: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
