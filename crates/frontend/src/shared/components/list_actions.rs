use crate::shared::data_table::{Column, TableRecord};
use crate::shared::export::{export_csv, ExportError};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Space};

/// Refresh and "Export CSV" buttons placed in a list's page header
#[component]
pub fn ListActions(
    on_refresh: Callback<()>,
    on_export: Callback<()>,
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <Space>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| on_refresh.run(())
                disabled=loading
            >
                {icon("refresh")}
                " Refresh"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Small
                on_click=move |_| on_export.run(())
            >
                {icon("download")}
                " Export CSV"
            </Button>
        </Space>
    }
}

/// Runs the export and reports the outcome as a toast
pub fn export_with_toast<T: TableRecord>(
    toasts: ToastService,
    records: &[T],
    columns: &[Column<T>],
    filename: &str,
) {
    match export_csv(records, columns, filename) {
        Ok(()) => toasts.success(format!("Exported {} rows", records.len())),
        Err(ExportError::NoData) => toasts.info("Nothing to export"),
        Err(e) => toasts.error(format!("Export failed: {}", e)),
    }
}
