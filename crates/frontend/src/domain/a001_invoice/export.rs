//! CSV layout of exported invoices

use chrono::{DateTime, Utc};
use contracts::domain::a001_invoice::Invoice;

use crate::shared::export::{export_to_csv, CsvExportable};

impl CsvExportable for Invoice {
    fn headers() -> Vec<&'static str> {
        vec![
            "Serial",
            "IssueDate",
            "GrandTotal",
            "AuthorizerName",
            "ContactEmail",
            "ContactPhone",
            "Address",
            "SentViaEmail",
            "SentAt",
            "DownloadedAt",
            "CreatedAt",
            "UpdatedAt",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        vec![
            text(&self.serial),
            text(&self.issue_date),
            self.grand_total.map(|v| v.to_string()).unwrap_or_default(),
            text(&self.authorizer_name),
            text(&self.contact_email),
            text(&self.contact_phone),
            text(&self.address),
            if self.sent_via_email { "Yes" } else { "No" }.to_string(),
            text(&self.sent_at),
            text(&self.downloaded_at),
            text(&self.created_at),
            text(&self.updated_at),
        ]
    }
}

/// `invoices_<UTC ISO-8601 to the second>.csv`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("invoices_{}.csv", now.format("%Y-%m-%dT%H:%M:%S"))
}

/// Downloads `invoices` as CSV; no-op for an empty list
pub fn export_invoices(invoices: &[Invoice]) -> Result<(), String> {
    if invoices.is_empty() {
        log::debug!("Nothing to export");
        return Ok(());
    }

    export_to_csv(invoices, &export_filename(Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use chrono::TimeZone;

    #[test]
    fn test_export_filename() {
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 7).unwrap();
        assert_eq!(export_filename(now), "invoices_2024-01-05T10:30:07.csv");
    }

    #[test]
    fn test_single_invoice_scenario() {
        let invoices = vec![Invoice {
            serial: Some("INV-1".into()),
            grand_total: Some(100.0),
            sent_via_email: true,
            ..Default::default()
        }];

        let csv = build_csv(&invoices).unwrap().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#""Serial","IssueDate","GrandTotal","AuthorizerName","ContactEmail","ContactPhone","Address","SentViaEmail","SentAt","DownloadedAt","CreatedAt","UpdatedAt""#
        );
        assert_eq!(lines[1], r#""INV-1","","100","","","","","Yes","","","","""#);
    }

    #[test]
    fn test_row_count_and_missing_values() {
        let invoices: Vec<Invoice> = (0..5)
            .map(|i| Invoice {
                serial: Some(format!("INV-{i}")),
                ..Default::default()
            })
            .collect();

        let csv = build_csv(&invoices).unwrap().unwrap();
        assert_eq!(csv.lines().count(), 6);
        assert!(!csv.contains("\"-\""));
        assert!(csv.lines().skip(1).all(|l| l.contains("\"No\"")));
    }

    #[test]
    fn test_quoted_address_round_trips() {
        let invoices = vec![Invoice {
            serial: Some("INV-9".into()),
            address: Some("He said \"hi\"".into()),
            grand_total: Some(19.5),
            ..Default::default()
        }];

        let csv = build_csv(&invoices).unwrap().unwrap();
        assert!(csv.contains(r#""He said ""hi""""#));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();
        let address_col = headers.iter().position(|h| h == "Address").unwrap();
        let total_col = headers.iter().position(|h| h == "GrandTotal").unwrap();
        assert_eq!(&record[address_col], "He said \"hi\"");
        assert_eq!(&record[total_col], "19.5");
    }

    #[test]
    fn test_export_empty_is_noop() {
        assert_eq!(export_invoices(&[]), Ok(()));
    }
}
