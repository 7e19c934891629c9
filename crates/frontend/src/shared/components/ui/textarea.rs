use leptos::prelude::*;

/// Labelled textarea with a character counter when `maxlength` is set
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let counter = move || {
        maxlength.map(|max| {
            let used = value.with(|v| v.chars().count());
            view! {
                <div class="form__counter" class:form__counter--over={used > max}>
                    {format!("{} / {}", used, max)}
                </div>
            }
        })
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                rows=rows.unwrap_or(3)
                maxlength=maxlength.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            {counter}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
