//! Form widgets: text input, select, checkbox and slider.
//!
//! Each widget renders its label and control together and reflects the
//! current value, so a re-rendered form shows what the user last submitted.

use leptos::prelude::*;

/// Labelled text input.
#[component]
pub fn TextInput(
    /// Label text.
    label: &'static str,
    /// Input name attribute.
    name: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="text" class="input" name=name autocomplete="off"/>
        </label>
    }
}

/// A select option: form value and display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    /// An option whose value and display text are the same.
    #[must_use]
    pub fn plain(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }
}

/// Labelled select box.
#[component]
pub fn Select(
    /// Label text.
    label: &'static str,
    /// Select name attribute.
    name: &'static str,
    /// Options in display order.
    options: Vec<SelectOption>,
    /// Value of the selected option; the first option when empty.
    #[prop(default = "")]
    selected: &'static str,
) -> impl IntoView {
    let selected = if selected.is_empty() {
        options.first().map_or("", |o| o.value)
    } else {
        selected
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select class="input" name=name>
                {options
                    .into_iter()
                    .map(|o| {
                        view! {
                            <option value={o.value} selected={o.value == selected}>
                                {o.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Labelled checkbox. Submits `on` when ticked.
#[component]
pub fn Checkbox(
    /// Label text.
    label: &'static str,
    /// Checkbox name attribute.
    name: &'static str,
    /// Whether the box is ticked.
    #[prop(default = false)]
    checked: bool,
) -> impl IntoView {
    view! {
        <label class="checkbox">
            <input type="checkbox" name=name checked=checked/>
            <span>{label}</span>
        </label>
    }
}

/// Labelled range slider with its value displayed.
#[component]
pub fn Slider(
    /// Label text.
    label: &'static str,
    /// Input name attribute.
    name: &'static str,
    /// Lower bound.
    min: f64,
    /// Upper bound.
    max: f64,
    /// Step size.
    #[prop(default = 0.01)]
    step: f64,
    /// Current value.
    value: f64,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{format!("{label}: {value:.2}")}</span>
            <input
                type="range"
                class="slider"
                name=name
                min={min.to_string()}
                max={max.to_string()}
                step={step.to_string()}
                value={value.to_string()}
            />
        </label>
    }
}
