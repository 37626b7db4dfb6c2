use super::super::view_model::{shown_count_label, OrderManagementVm};
use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::components::{DropdownMenu, FilterTag};
use crate::shared::icons::icon;
use contracts::domain::a025_order_record::{category_options, sample_orders, OrderRecord};
use contracts::shared::config::ScreenConfig;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StatisticsTab(vm: OrderManagementVm) -> impl IntoView {
    let config = use_context::<ScreenConfig>().expect("ScreenConfig context not found");
    let columns = config.columns.clone();
    let rows = vm.visible_orders();
    let total = sample_orders().len();

    view! {
        <div class="order-management__pane">
            <ActiveFilterTags vm=vm />

            <Table class="order-table">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{columns.name}</TableHeaderCell>
                        <TableHeaderCell>
                            <div class="order-table__header order-table__header--center">
                                <span>{columns.category}</span>
                                <CategoryFilter vm=vm />
                            </div>
                        </TableHeaderCell>
                        <TableHeaderCell>
                            <div class="order-table__header order-table__header--center">
                                <span>{columns.contact}</span>
                                // Фильтр по контактам не реализован: только иконка
                                <span class="order-table__filter-icon" aria-label="contacts filter icon">
                                    {icon("filter")}
                                </span>
                            </div>
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|order| order.id.clone()
                        children=move |order: OrderRecord| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{order.name}</TableCellLayout></TableCell>
                                    <TableCell class="text-center"><TableCellLayout>{order.category.code()}</TableCellLayout></TableCell>
                                    <TableCell class="text-center"><TableCellLayout>{order.contact}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <div class="order-table__footer">
                {move || shown_count_label(rows.with(|r| r.len()), total)}
            </div>
        </div>
    }
}

/// Поповер фильтра по типу: поиск + чекбоксы типов
#[component]
fn CategoryFilter(vm: OrderManagementVm) -> impl IntoView {
    let config = use_context::<ScreenConfig>().expect("ScreenConfig context not found");
    let placeholder = StoredValue::new(config.screen.search_placeholder.clone());
    let filter_count = vm.active_filter_count();

    view! {
        <DropdownMenu
            open=vm.menu_open()
            on_event=Callback::new(move |event| vm.menu_event(event))
            trigger_label="category filter icon"
            class="order-filter"
            trigger=move || {
                view! {
                    {icon("filter")}
                    <Show when=move || { filter_count.get() > 0 }>
                        <span class="badge badge--primary">{move || filter_count.get()}</span>
                    </Show>
                }
                .into_any()
            }
        >
            <div class="order-filter__body">
                <Input
                    value=vm.search_text()
                    on_input=Callback::new(move |text: String| vm.set_search_text(text))
                    placeholder=placeholder.get_value()
                    leading_icon="search"
                />
                <div class="order-filter__options">
                    {category_options()
                        .into_iter()
                        .map(|category| {
                            let code = category.code();
                            view! {
                                <Checkbox
                                    id=format!("order-category-{}", code)
                                    label=code.to_string()
                                    checked=vm.category_selected(category)
                                    on_change=Callback::new(move |checked| vm.set_category(category, checked))
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </DropdownMenu>
    }
}

/// Чипы выбранных типов; крестик снимает выбор
#[component]
fn ActiveFilterTags(vm: OrderManagementVm) -> impl IntoView {
    let selected = vm.selected_categories();

    view! {
        <Show when=move || selected.with(|s| !s.is_empty())>
            <div class="filter-tags">
                <For
                    each=move || selected.get()
                    key=|category| *category
                    children=move |category| {
                        view! {
                            <FilterTag
                                label=category.code()
                                on_remove=Callback::new(move |_| vm.set_category(category, false))
                            />
                        }
                    }
                />
            </div>
        </Show>
    }
}
