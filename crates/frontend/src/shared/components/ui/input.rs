use leptos::prelude::*;

/// Labelled text input with an inline validation message
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// Validation message shown under the input
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// "text" (default), "password", "email", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
    #[prop(optional, into)] maxlength: MaybeProp<u32>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                autocomplete=move || autocomplete.get()
                maxlength=move || maxlength.get().map(|m| m.to_string())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
