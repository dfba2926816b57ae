//! Alert Table Component
//!
//! Table of recent alerts. One row per record, in payload order.

use leptos::*;

use crate::api::types::AlertRecord;

/// Column headers, left to right
pub const ALERT_COLUMNS: [&str; 5] = ["ID", "Severity", "Message", "Timestamp", "Status"];

/// Cell text for one table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertRow {
    pub cells: [String; 5],
}

impl From<&AlertRecord> for AlertRow {
    fn from(alert: &AlertRecord) -> Self {
        // No status field in the payload; Status repeats severity
        Self {
            cells: [
                alert.id.clone(),
                alert.severity.clone(),
                alert.message.clone(),
                alert.timestamp.clone(),
                alert.severity.clone(),
            ],
        }
    }
}

/// Map records to rows
pub fn alert_rows(alerts: &[AlertRecord]) -> Vec<AlertRow> {
    alerts.iter().map(AlertRow::from).collect()
}

/// Recent alerts table; renders the header even with no rows
#[component]
pub fn AlertTable(alerts: Vec<AlertRecord>) -> impl IntoView {
    let rows = alert_rows(&alerts);

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {ALERT_COLUMNS.iter().map(|column| view! {
                            <th
                                scope="col"
                                class="px-6 py-3 text-left text-xs font-medium tracking-wider text-gray-500 uppercase"
                            >
                                {*column}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 bg-white">
                    {rows.into_iter().map(|row| {
                        let [id, severity, message, timestamp, status] = row.cells;
                        view! {
                            <tr>
                                <td class="px-6 py-4 text-sm font-medium whitespace-nowrap text-gray-900">{id}</td>
                                <td class="px-6 py-4 text-sm whitespace-nowrap text-gray-500">{severity}</td>
                                <td class="px-6 py-4 text-sm whitespace-nowrap text-gray-500">{message}</td>
                                <td class="px-6 py-4 text-sm whitespace-nowrap text-gray-500">{timestamp}</td>
                                <td class="px-6 py-4 text-sm whitespace-nowrap text-gray-500">{status}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, severity: &str) -> AlertRecord {
        AlertRecord {
            id: id.to_string(),
            severity: severity.to_string(),
            message: "disk full".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_single_alert_row() {
        let rows = alert_rows(&[alert("1", "high")]);

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].cells,
            [
                "1".to_string(),
                "high".to_string(),
                "disk full".to_string(),
                "2024-01-01T00:00:00Z".to_string(),
                "high".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_alerts_no_rows() {
        assert!(alert_rows(&[]).is_empty());
        assert_eq!(ALERT_COLUMNS.len(), 5);
    }

    #[test]
    fn test_duplicate_ids_keep_both_rows_in_order() {
        let rows = alert_rows(&[alert("9", "low"), alert("9", "critical")]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[1], "low");
        assert_eq!(rows[1].cells[4], "critical");
    }
}
