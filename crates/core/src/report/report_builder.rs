use chrono::{DateTime, Utc};
use log::debug;

use super::report_model::{FeasibilityReport, ReportCell, ReportRow, ReportSheet};
use crate::analysis::{AnalysisReport, BusinessProfile};
use crate::constants::UNDETERMINABLE_TEXT;
use crate::costs::{sum_costs, CostItem};
use crate::feasibility::Verdict;
use crate::format::{format_percent, format_units, format_years};
use crate::metrics::{FinancialInputs, MetricsBundle};

pub const SUMMARY_SHEET: &str = "Ringkasan";
pub const FINANCE_SHEET: &str = "Detail Keuangan";
pub const MARKET_SHEET: &str = "Riset Pasar";

const NOT_ANALYSED_TEXT: &str = "Belum dianalisis";

/// Builds the export report.
///
/// `metrics` is `None` when the economics are not computable; metric rows
/// then read "belum dapat dihitung". `analysis` fills the market research
/// sheet when a provider has run.
pub fn build_report(
    profile: &BusinessProfile,
    inputs: &FinancialInputs,
    metrics: Option<&MetricsBundle>,
    verdict: &Verdict,
    analysis: Option<&AnalysisReport>,
    generated_at: DateTime<Utc>,
) -> FeasibilityReport {
    debug!(
        "Building report for '{}' ({} fixed, {} variable cost rows)",
        profile.name,
        inputs.fixed_costs.len(),
        inputs.variable_costs.len()
    );

    FeasibilityReport {
        generated_at,
        project_name: profile.name.clone(),
        sheets: vec![
            summary_sheet(profile, metrics, verdict),
            finance_sheet(inputs),
            market_sheet(profile, analysis),
        ],
        verdict: verdict.clone(),
    }
}

fn metric_text(
    metrics: Option<&MetricsBundle>,
    format: fn(f64) -> String,
    pick: fn(&MetricsBundle) -> f64,
) -> String {
    metrics
        .map(|m| format(pick(m)))
        .unwrap_or_else(|| UNDETERMINABLE_TEXT.to_string())
}

fn summary_sheet(
    profile: &BusinessProfile,
    metrics: Option<&MetricsBundle>,
    verdict: &Verdict,
) -> ReportSheet {
    let mut sheet = ReportSheet::new(SUMMARY_SHEET);
    sheet.rows.extend([
        ReportRow::entry("Nama Proyek", profile.name.as_str()),
        ReportRow::entry("Industri", profile.category.as_str()),
        ReportRow::entry("Deskripsi", profile.description.as_str()),
        ReportRow::Blank,
        ReportRow::heading("KESIMPULAN METRIK"),
        ReportRow::entry("ROI", metric_text(metrics, format_percent, |m| m.roi)),
        ReportRow::entry(
            "Payback Period",
            metric_text(metrics, format_years, |m| m.payback_period),
        ),
        ReportRow::entry("IRR", metric_text(metrics, format_percent, |m| m.irr)),
        ReportRow::entry("BEP", metric_text(metrics, format_units, |m| m.bep_units)),
        ReportRow::entry(
            "Gross Margin",
            metric_text(metrics, format_percent, |m| m.gross_margin),
        ),
        ReportRow::entry("Net Margin", metric_text(metrics, format_percent, |m| m.net_margin)),
        ReportRow::Blank,
        ReportRow::heading("KESIMPULAN KELAYAKAN"),
        ReportRow::entry("Status", verdict.status.title()),
        ReportRow::entry(
            "Skor",
            format!("{}/{}", verdict.score, crate::constants::BENCHMARK_CHECK_COUNT),
        ),
        ReportRow::entry("Keterangan", verdict.summary()),
    ]);
    for (i, suggestion) in verdict.remediation.iter().enumerate() {
        sheet
            .rows
            .push(ReportRow::entry(format!("Saran {}", i + 1), suggestion.as_str()));
    }
    sheet
}

fn cost_rows(items: &[CostItem]) -> impl Iterator<Item = ReportRow> + '_ {
    items
        .iter()
        .map(|item| ReportRow::entry(item.name.as_str(), item.effective_amount()))
}

fn finance_sheet(inputs: &FinancialInputs) -> ReportSheet {
    let mut sheet = ReportSheet::new(FINANCE_SHEET);
    sheet.rows.extend([
        ReportRow::heading("MODAL & PENDAPATAN"),
        ReportRow::entry("Modal Awal", inputs.initial_capital),
        ReportRow::entry("Harga Jual / Unit", inputs.unit_price),
        ReportRow::entry("Volume / Bulan", inputs.monthly_volume),
        ReportRow::Blank,
        ReportRow::heading("BIAYA TETAP / BULAN"),
    ]);
    sheet.rows.extend(cost_rows(&inputs.fixed_costs));
    sheet.rows.push(ReportRow::entry(
        "Total Biaya Tetap",
        sum_costs(&inputs.fixed_costs),
    ));
    sheet.rows.push(ReportRow::Blank);
    sheet.rows.push(ReportRow::heading("BIAYA VARIABEL / UNIT"));
    sheet.rows.extend(cost_rows(&inputs.variable_costs));
    sheet.rows.push(ReportRow::entry(
        "Total Biaya Variabel / Unit",
        sum_costs(&inputs.variable_costs),
    ));
    sheet
}

fn market_sheet(profile: &BusinessProfile, analysis: Option<&AnalysisReport>) -> ReportSheet {
    let mut sheet = ReportSheet::new(MARKET_SHEET);
    sheet.rows.extend([
        ReportRow::heading("TARGET PASAR"),
        ReportRow::entry("Deskripsi Target", profile.target_market.as_str()),
        ReportRow::Blank,
        ReportRow::heading("KOMPETITOR"),
        ReportRow::Columns {
            names: vec![
                "Nama".to_string(),
                "Keunggulan".to_string(),
                "Estimasi Harga".to_string(),
            ],
        },
    ]);
    sheet
        .rows
        .extend(profile.competitors.iter().map(|c| ReportRow::Record {
            cells: vec![
                ReportCell::from(c.name.as_str()),
                ReportCell::from(c.advantage.as_str()),
                c.price.map(ReportCell::Amount).unwrap_or_else(|| ReportCell::from("")),
            ],
        }));
    sheet.rows.push(ReportRow::Blank);
    sheet.rows.push(ReportRow::heading("ANALISIS AI"));
    let analysis_text = analysis
        .map(AnalysisReport::to_text)
        .unwrap_or_else(|| NOT_ANALYSED_TEXT.to_string());
    sheet.rows.push(ReportRow::Record {
        cells: vec![ReportCell::Text(analysis_text)],
    });
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Competitor;
    use crate::feasibility::FeasibilityStatus;
    use chrono::TimeZone;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            name: "Kopi Senja".to_string(),
            industry_key: "food".to_string(),
            category: "Makanan & Minuman".to_string(),
            description: "Kedai kopi susu".to_string(),
            target_market: "Mahasiswa".to_string(),
            competitors: vec![Competitor {
                name: "Kopi Kenangan".to_string(),
                advantage: "Brand kuat".to_string(),
                price: Some(22_000.0),
            }],
        }
    }

    fn inputs() -> FinancialInputs {
        FinancialInputs {
            initial_capital: 5_000_000.0,
            unit_price: 20_000.0,
            monthly_volume: 250.0,
            fixed_costs: vec![
                CostItem::with_id("1", "Sewa", 2_000_000.0),
                CostItem::with_id("2", "Gaji", 1_000_000.0),
            ],
            variable_costs: vec![CostItem::with_id("3", "Bahan baku", 8_000.0)],
        }
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_report_sheets_in_export_order() {
        let report = build_report(
            &profile(),
            &inputs(),
            None,
            &Verdict::insufficient_data(),
            None,
            timestamp(),
        );
        let names: Vec<&str> = report.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![SUMMARY_SHEET, FINANCE_SHEET, MARKET_SHEET]);
        assert_eq!(report.generated_at, timestamp());
        assert_eq!(report.suggested_file_name("xlsx"), "Laporan Kelayakan - Kopi Senja.xlsx");
    }

    #[test]
    fn test_summary_formats_metrics_and_sentinels() {
        let metrics = MetricsBundle {
            roi: 0.0,
            payback_period: f64::INFINITY,
            irr: f64::NAN,
            bep_units: 250.0,
            gross_margin: 60.0,
            net_margin: 0.0,
            ..MetricsBundle::default()
        };
        let report = build_report(
            &profile(),
            &inputs(),
            Some(&metrics),
            &Verdict::insufficient_data(),
            None,
            timestamp(),
        );
        let summary = report.sheet(SUMMARY_SHEET).unwrap();
        assert_eq!(summary.entry("ROI"), Some(&ReportCell::from("0.00%")));
        assert_eq!(
            summary.entry("Payback Period"),
            Some(&ReportCell::from("tidak tercapai"))
        );
        assert_eq!(summary.entry("IRR"), Some(&ReportCell::from("belum dapat dihitung")));
        assert_eq!(summary.entry("BEP"), Some(&ReportCell::from("250 unit/bulan")));
        assert_eq!(summary.entry("Gross Margin"), Some(&ReportCell::from("60.00%")));
        assert_eq!(summary.entry("Status"), Some(&ReportCell::from("Menunggu Data...")));
    }

    #[test]
    fn test_summary_without_metrics() {
        let report = build_report(
            &profile(),
            &inputs(),
            None,
            &Verdict::insufficient_data(),
            None,
            timestamp(),
        );
        let summary = report.sheet(SUMMARY_SHEET).unwrap();
        assert_eq!(summary.entry("ROI"), Some(&ReportCell::from(UNDETERMINABLE_TEXT)));
        assert_eq!(summary.entry("Skor"), Some(&ReportCell::from("0/4")));
    }

    #[test]
    fn test_summary_lists_remediation() {
        let verdict = Verdict {
            status: FeasibilityStatus::FeasibleWithCaveats,
            score: 3,
            remediation: vec!["Tingkatkan ROI dari 12.0% menjadi minimal 20%".to_string()],
            checks: Vec::new(),
        };
        let report = build_report(&profile(), &inputs(), None, &verdict, None, timestamp());
        let summary = report.sheet(SUMMARY_SHEET).unwrap();
        assert_eq!(
            summary.entry("Saran 1"),
            Some(&ReportCell::from("Tingkatkan ROI dari 12.0% menjadi minimal 20%"))
        );
        assert!(summary.entry("Saran 2").is_none());
    }

    #[test]
    fn test_finance_sheet_itemizes_costs() {
        let report = build_report(
            &profile(),
            &inputs(),
            None,
            &Verdict::insufficient_data(),
            None,
            timestamp(),
        );
        let finance = report.sheet(FINANCE_SHEET).unwrap();
        assert_eq!(finance.entry("Modal Awal"), Some(&ReportCell::Amount(5_000_000.0)));
        assert_eq!(finance.entry("Sewa"), Some(&ReportCell::Amount(2_000_000.0)));
        assert_eq!(
            finance.entry("Total Biaya Tetap"),
            Some(&ReportCell::Amount(3_000_000.0))
        );
        assert_eq!(
            finance.entry("Total Biaya Variabel / Unit"),
            Some(&ReportCell::Amount(8_000.0))
        );
    }

    #[test]
    fn test_market_sheet_uses_analysis_text() {
        let analysis = AnalysisReport {
            provider_id: "rule-based".to_string(),
            conclusion: "Menjanjikan.".to_string(),
            ..AnalysisReport::default()
        };
        let report = build_report(
            &profile(),
            &inputs(),
            None,
            &Verdict::insufficient_data(),
            Some(&analysis),
            timestamp(),
        );
        let market = report.sheet(MARKET_SHEET).unwrap();
        assert_eq!(market.entry("Deskripsi Target"), Some(&ReportCell::from("Mahasiswa")));
        assert!(market.rows.contains(&ReportRow::Record {
            cells: vec![
                ReportCell::from("Kopi Kenangan"),
                ReportCell::from("Brand kuat"),
                ReportCell::Amount(22_000.0),
            ],
        }));
        assert_eq!(
            market.rows.last(),
            Some(&ReportRow::Record {
                cells: vec![ReportCell::from("Menjanjikan.")],
            })
        );

        let without = build_report(
            &profile(),
            &inputs(),
            None,
            &Verdict::insufficient_data(),
            None,
            timestamp(),
        );
        assert_eq!(
            without.sheet(MARKET_SHEET).unwrap().rows.last(),
            Some(&ReportRow::Record {
                cells: vec![ReportCell::from("Belum dianalisis")],
            })
        );
    }

    #[test]
    fn test_report_serializes_rows_with_kind_tag() {
        let row = ReportRow::entry("Modal Awal", 5_000_000.0);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["kind"], "entry");
        assert_eq!(json["value"], 5_000_000.0);
    }
}
