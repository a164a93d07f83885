use yew::prelude::*;

pub struct EmojiCategory {
    pub name: &'static str,
    /// Emoji shown on the category tab
    pub tab: &'static str,
    pub emojis: &'static [&'static str],
}

pub const CATEGORIES: &[EmojiCategory] = &[
    EmojiCategory {
        name: "Things",
        tab: "🎁",
        emojis: &[
            "🎁", "🚲", "🛴", "🛹", "⚽", "🏀", "🎮", "🧸", "🎧", "📱", "💻", "📷",
            "🎸", "🎹", "🥁", "📚", "🎨", "🧩", "👟", "🎒", "⌚", "🕶️", "👗", "🧢",
        ],
    },
    EmojiCategory {
        name: "Travel",
        tab: "✈️",
        emojis: &[
            "✈️", "🚗", "🚆", "⛵", "🏕️", "🏖️", "🏔️", "🎢", "🎡", "🗽", "🏰", "🌍",
        ],
    },
    EmojiCategory {
        name: "Animals",
        tab: "🐶",
        emojis: &[
            "🐶", "🐱", "🐰", "🐹", "🐠", "🐢", "🦜", "🐴", "🦄", "🐼", "🦊", "🐸",
        ],
    },
    EmojiCategory {
        name: "Food",
        tab: "🍕",
        emojis: &[
            "🍕", "🍔", "🍦", "🍩", "🍪", "🎂", "🍓", "🍉", "🍿", "🧁", "🥤", "🍫",
        ],
    },
    EmojiCategory {
        name: "Symbols",
        tab: "⭐",
        emojis: &[
            "⭐", "🌟", "❤️", "💰", "💎", "🏆", "🎯", "🚀", "🌈", "🔥", "🎉", "✨",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct EmojiPickerProps {
    /// Called with the native emoji and the click that picked it
    pub on_pick: Callback<(String, MouseEvent)>,
}

#[function_component(EmojiPicker)]
pub fn emoji_picker(props: &EmojiPickerProps) -> Html {
    let active_category = use_state(|| 0usize);
    let category = CATEGORIES.get(*active_category).unwrap_or(&CATEGORIES[0]);

    html! {
        <div class="emoji-picker">
            <div class="emoji-picker-tabs">
                {for CATEGORIES.iter().enumerate().map(|(index, tab_category)| {
                    let active_category = active_category.clone();
                    html! {
                        <button
                            type="button"
                            class={classes!("emoji-tab", (index == *active_category).then_some("active"))}
                            title={tab_category.name}
                            onclick={Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                active_category.set(index);
                            })}
                        >
                            {tab_category.tab}
                        </button>
                    }
                })}
            </div>

            <div class="emoji-picker-category">{category.name}</div>

            <div class="emoji-grid">
                {for category.emojis.iter().map(|emoji| {
                    let on_pick = props.on_pick.clone();
                    let native = emoji.to_string();
                    html! {
                        <button
                            type="button"
                            class="emoji-option"
                            onclick={Callback::from(move |e: MouseEvent| on_pick.emit((native.clone(), e)))}
                        >
                            {*emoji}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
