use contracts::domain::a001_farm_type::aggregate::FarmType;
use leptos::prelude::*;
use thaw::*;

use super::details::FarmTypeDetails;
use crate::domain::configuration::{
    audit_cells, ConfigListViewModel, ConfigToolbar, DeleteDialog, EmptyRow, RowActions,
};
use crate::shared::components::ui::ActiveBadge;

#[component]
pub fn FarmTypeList() -> impl IntoView {
    let vm = ConfigListViewModel::<FarmType>::new();
    vm.load();

    view! {
        <div class="config-pane">
            <ConfigToolbar vm=vm />

            <div class="table-wrapper">
                <Table attr:class="data-table data-table--cards">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Type Name"</TableHeaderCell>
                            <TableHeaderCell>"Description"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created By"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Usage"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <Show when=move || vm.loaded.get() && vm.items.with(Vec::is_empty)>
                            <EmptyRow colspan=7 message="No farm types found. Add one to get started!" />
                        </Show>
                        <For
                            each=move || vm.visible()
                            key=|ft| (ft.id, ft.is_active, ft.metadata.updated_at, ft.usage_count)
                            children=move |ft| {
                                let type_name = ft.type_name.clone();
                                let description = ft.description.clone().unwrap_or_else(|| "-".to_string());
                                let is_active = ft.is_active;
                                let audit = audit_cells(&ft);
                                view! {
                                    <TableRow>
                                        <TableCell attr:data-label="Type Name">
                                            <strong>{type_name}</strong>
                                        </TableCell>
                                        <TableCell attr:data-label="Description" attr:class="text-truncate">
                                            {description}
                                        </TableCell>
                                        <TableCell attr:data-label="Status">
                                            <ActiveBadge active=is_active />
                                        </TableCell>
                                        {audit}
                                        <RowActions item=ft vm=vm />
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            {move || vm.editor.get().map(|target| view! {
                <FarmTypeDetails
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
