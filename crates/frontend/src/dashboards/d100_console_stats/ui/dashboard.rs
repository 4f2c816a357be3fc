use contracts::dashboards::d100_console_stats::dto::DashboardStats;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize, Spinner};

use crate::dashboards::d100_console_stats::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_sessions;

#[derive(Clone, Debug, PartialEq)]
pub struct StatEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: f64,
    pub format: StatFormat,
}

/// Cards for the counters the API actually sent, in a fixed order
pub fn stat_entries(stats: &DashboardStats) -> Vec<StatEntry> {
    let counts = [
        ("Total rides", "rides", stats.total_rides),
        ("Active rides", "rides", stats.active_rides),
        ("Completed rides", "rides", stats.completed_rides),
        ("Cancelled rides", "rides", stats.cancelled_rides),
        ("Users", "users", stats.total_users),
        ("Vendors", "vendors", stats.total_vendors),
        ("Drivers", "drivers", stats.total_drivers),
        ("Employees", "employees", stats.total_employees),
    ];
    let money = [
        ("Revenue", "earnings", stats.revenue),
        ("Earnings", "earnings", stats.earnings),
    ];

    let mut entries: Vec<StatEntry> = counts
        .into_iter()
        .filter_map(|(label, icon, value)| {
            value.map(|v| StatEntry {
                label,
                icon,
                value: v as f64,
                format: StatFormat::Count,
            })
        })
        .collect();
    entries.extend(money.into_iter().filter_map(|(label, icon, value)| {
        value.map(|v| StatEntry {
            label,
            icon,
            value: v,
            format: StatFormat::Money,
        })
    }));
    entries
}

/// Landing section of every console
#[component]
pub fn ConsoleDashboard(role: Role) -> impl IntoView {
    let sessions = use_sessions();
    let toasts = use_toasts();
    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        let client = sessions.client(role);
        spawn_local(async move {
            match api::fetch_stats(&client).await {
                Ok(data) => {
                    let _ = set_stats.try_set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load {} dashboard: {}", role, e);
                    sessions.report_error(toasts, role, "Failed to load dashboard", &e);
                }
            }
            let _ = set_loading.try_set(false);
        });
    };
    load();

    let greeting = move || {
        sessions
            .user(role)
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_else(|| format!("{} console", role.label()))
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || Some(greeting())) icon_name="dashboard">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| load()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>
            {move || match stats.get() {
                None if loading.get() => view! {
                    <div class="page__loading"><Spinner /></div>
                }
                .into_any(),
                None => view! {
                    <div class="page__empty">"No statistics available"</div>
                }
                .into_any(),
                Some(data) => view! {
                    <div class="stat-grid">
                        {stat_entries(&data)
                            .into_iter()
                            .map(|entry| {
                                let value = entry.value;
                                view! {
                                    <StatCard
                                        label=entry.label
                                        icon_name=entry.icon
                                        value=Signal::derive(move || Some(value))
                                        format=entry.format
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_entries_skip_missing_counters() {
        let stats = DashboardStats {
            total_rides: Some(120),
            completed_rides: Some(100),
            earnings: Some(5400.5),
            ..Default::default()
        };
        let entries = stat_entries(&stats);
        let labels: Vec<_> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Total rides", "Completed rides", "Earnings"]);
        assert_eq!(entries[2].format, StatFormat::Money);
        assert_eq!(entries[0].value, 120.0);
    }

    #[test]
    fn test_stat_entries_empty() {
        assert!(stat_entries(&DashboardStats::default()).is_empty());
    }
}
