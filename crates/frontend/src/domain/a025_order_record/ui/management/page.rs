//! Главная страница экрана «Управление заказами»

use super::tabs::{ListTab, StatisticsTab};
use super::view_model::OrderManagementVm;
use contracts::domain::a025_order_record::{sample_orders, OrderTab};
use contracts::shared::config::ScreenConfig;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderManagement() -> impl IntoView {
    let config = use_context::<ScreenConfig>().expect("ScreenConfig context not found");
    let vm = OrderManagementVm::new();
    let active_tab = vm.active_tab();

    log::info!(
        "a025: order management mounted with {} records",
        sample_orders().len()
    );

    view! {
        <div class="page order-management">
            <div class="page__header">
                <h1 class="order-management__title">{config.screen.title.clone()}</h1>
            </div>

            <div class="page__content">
                <TabBar vm=vm />
                {move || match active_tab.get() {
                    OrderTab::Statistics => view! { <StatisticsTab vm=vm /> }.into_any(),
                    OrderTab::List => view! { <ListTab /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TabBar(vm: OrderManagementVm) -> impl IntoView {
    let config = use_context::<ScreenConfig>().expect("ScreenConfig context not found");
    let active_tab = vm.active_tab();

    let tab_button = move |tab: OrderTab, label: String| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if active_tab.get() == tab {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                })
                size=ButtonSize::Medium
                on_click=move |_| vm.select_tab(tab)
            >
                {label}
            </Button>
        }
    };

    view! {
        <Flex
            gap=FlexGap::Small
            align=FlexAlign::Center
            class="order-management__tabs"
            attr:role="tablist"
        >
            {tab_button(OrderTab::Statistics, config.screen.statistics_tab_label.clone())}
            {tab_button(OrderTab::List, config.screen.list_tab_label.clone())}
        </Flex>
    }
}
