use leptos::prelude::*;

/// Form field with label and input, bound to a string signal
#[component]
pub fn FormField(
    /// Input id and name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Text area form field
#[component]
pub fn TextAreaField(
    /// Textarea id and name
    name: &'static str,
    /// Field label text
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
