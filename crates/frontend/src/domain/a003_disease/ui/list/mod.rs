use contracts::domain::a003_disease::aggregate::Disease;
use leptos::prelude::*;
use thaw::*;

use super::details::DiseaseDetails;
use crate::domain::configuration::{
    audit_cells, ConfigListViewModel, ConfigToolbar, DeleteDialog, EmptyRow, RowActions,
};
use crate::shared::components::ui::{ActiveBadge, Badge};

/// "Cattle, Goat" or "-"
fn affected_caption(disease: &Disease) -> String {
    if disease.affected_animal_types.is_empty() {
        "-".to_string()
    } else {
        disease.affected_animal_types.join(", ")
    }
}

#[component]
pub fn DiseaseList() -> impl IntoView {
    let vm = ConfigListViewModel::<Disease>::new();
    vm.load();

    view! {
        <div class="config-pane">
            <ConfigToolbar vm=vm />

            <div class="table-wrapper">
                <Table attr:class="data-table data-table--cards">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Disease Name"</TableHeaderCell>
                            <TableHeaderCell>"Code"</TableHeaderCell>
                            <TableHeaderCell>"Severity"</TableHeaderCell>
                            <TableHeaderCell>"Notifiable"</TableHeaderCell>
                            <TableHeaderCell>"Affected Animals"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created By"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Usage"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show when=move || vm.loaded.get() && vm.items.with(Vec::is_empty)>
                            <EmptyRow colspan=10 message="No diseases found. Add one to get started!" />
                        </Show>
                        <For
                            each=move || vm.visible()
                            key=|d| (d.id, d.is_active, d.metadata.updated_at, d.usage_count)
                            children=move |d| {
                                let severity = match d.severity {
                                    Some(s) => view! {
                                        <Badge variant=s.badge_class()>{s.display_name()}</Badge>
                                    }.into_any(),
                                    None => "-".into_any(),
                                };
                                let disease_name = d.disease_name.clone();
                                let disease_code = d.disease_code.clone().unwrap_or_else(|| "-".to_string());
                                let is_notifiable = d.is_notifiable;
                                let affected = affected_caption(&d);
                                let is_active = d.is_active;
                                let audit = audit_cells(&d);
                                view! {
                                    <TableRow>
                                        <TableCell attr:data-label="Disease Name">
                                            <strong>{disease_name}</strong>
                                        </TableCell>
                                        <TableCell attr:data-label="Code">
                                            {disease_code}
                                        </TableCell>
                                        <TableCell attr:data-label="Severity">
                                            {severity}
                                        </TableCell>
                                        <TableCell attr:data-label="Notifiable">
                                            {if is_notifiable {
                                                view! { <Badge variant="badge--warning">"Yes"</Badge> }.into_any()
                                            } else {
                                                "No".into_any()
                                            }}
                                        </TableCell>
                                        <TableCell attr:data-label="Affected Animals" attr:class="text-truncate">
                                            {affected}
                                        </TableCell>
                                        <TableCell attr:data-label="Status">
                                            <ActiveBadge active=is_active />
                                        </TableCell>
                                        {audit}
                                        <RowActions item=d vm=vm />
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            {move || vm.editor.get().map(|target| view! {
                <DiseaseDetails
                    target=target
                    on_saved=Callback::new(move |_| vm.saved())
                    on_cancel=Callback::new(move |_| vm.close_editor())
                />
            })}
            {move || vm.deleting.get().map(|item| view! {
                <DeleteDialog
                    item=item
                    on_close=Callback::new(move |_| vm.deleting.set(None))
                    on_deleted=Callback::new(move |_| vm.deleted())
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affected_animals_caption() {
        let mut d: Disease =
            serde_json::from_str(r#"{"id":"0b0f9c7e-2f5e-4a44-8f7a-7c1f6d2e0005","diseaseName":"Anthrax"}"#)
                .unwrap();
        assert_eq!(affected_caption(&d), "-");
        d.affected_animal_types = vec!["Cattle".into(), "Goat".into()];
        assert_eq!(affected_caption(&d), "Cattle, Goat");
    }
}
