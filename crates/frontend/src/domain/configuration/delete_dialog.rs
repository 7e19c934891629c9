use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

use super::api;
use super::view_model::{delete_message, ConfigCollection};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;

#[derive(Clone, Debug, PartialEq)]
enum UsageCheck {
    Checking,
    Done(i64),
    Failed(String),
}

impl UsageCheck {
    fn can_delete(&self) -> bool {
        matches!(self, UsageCheck::Done(n) if *n <= 0)
    }
}

/// Confirmation dialog that asks the server how many records depend on
/// `item` first; deletion stays disabled while anything does.
#[component]
pub fn DeleteDialog<T: ConfigCollection>(
    item: T,
    on_close: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let id = item.id();
    let name = item.display_name().to_string();
    let check = RwSignal::new(UsageCheck::Checking);
    let (deleting, set_deleting) = signal(false);

    spawn_local(async move {
        let result = match api::fetch_usage::<T>(id).await {
            Ok(usage) => UsageCheck::Done(usage.usage_count),
            Err(e) => {
                log::error!("Usage check for {} {} failed: {}", T::collection_name(), id, e);
                UsageCheck::Failed("Failed to check usage".to_string())
            }
        };
        check.try_set(result);
    });

    let confirm = move || {
        set_deleting.set(true);
        spawn_local(async move {
            match api::delete::<T>(id).await {
                Ok(()) => {
                    log::info!("Deleted {} {}", T::collection_name(), id);
                    notifications.success(format!("{} deleted successfully", T::element_name()));
                    on_deleted.run(());
                }
                Err(e) => {
                    log::error!("Deleting {} {} failed: {}", T::collection_name(), id, e);
                    notifications.error(e.to_string());
                    set_deleting.try_set(false);
                }
            }
        });
    };

    let blocked = Signal::derive(move || deleting.get() || !check.with(UsageCheck::can_delete));

    view! {
        <Modal
            title=format!("Delete {}", T::element_name())
            on_close=on_close
            footer=Arc::new(move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| confirm()
                    disabled=blocked
                    attr:class="button--danger"
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </Button>
            }.into_any())
        >
            <p class="delete-dialog__name"><strong>{name}</strong></p>
            {move || match check.get() {
                UsageCheck::Checking => view! {
                    <p class="delete-dialog__message">"Checking usage..."</p>
                }.into_any(),
                UsageCheck::Done(n) => view! {
                    <p class="delete-dialog__message">{delete_message::<T>(n)}</p>
                    {(n > 0).then(|| view! {
                        <div class="alert alert--warning">
                            "Deactivate it instead, or remove the records that depend on it first."
                        </div>
                    })}
                }.into_any(),
                UsageCheck::Failed(msg) => view! {
                    <div class="alert alert--error">{msg}</div>
                }.into_any(),
            }}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unused_records_can_be_deleted() {
        assert!(UsageCheck::Done(0).can_delete());
        assert!(!UsageCheck::Done(4).can_delete());
        assert!(!UsageCheck::Checking.can_delete());
        assert!(!UsageCheck::Failed("x".into()).can_delete());
    }
}
