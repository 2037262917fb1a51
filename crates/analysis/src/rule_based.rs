//! Rule-based analysis provider.
//!
//! Produces the narrative report from fixed thresholds on the computed
//! metrics, with no model call. Useful offline, in tests, and as the fallback
//! when a model-backed provider is unavailable.

use async_trait::async_trait;
use log::debug;

use bizfeasibility_core::analysis::{
    AnalysisError, AnalysisProvider, AnalysisReport, AnalysisRequest,
};
use bizfeasibility_core::format::{format_percent, format_rupiah, format_units, format_years};
use bizfeasibility_core::Result;

// ============================================================================
// Thresholds
// ============================================================================

/// Cut-off values the rules compare against. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleThresholds {
    /// ROI (%) above which the plan is "very promising"
    pub roi_excellent: f64,
    /// ROI (%) above which the plan is "promising"
    pub roi_promising: f64,
    /// ROI (%) graded "very good" / "good" in the metric analysis
    pub roi_very_good: f64,
    pub roi_good: f64,
    /// ROI (%) above which the roadmap suggests scaling
    pub roi_scaling: f64,
    /// Payback (years) below which payback is "very fast"
    pub payback_fast: f64,
    /// Payback (years) above which payback is "long"
    pub payback_long: f64,
    /// Payback (years) below which payback is "reasonable"
    pub payback_reasonable: f64,
    pub irr_excellent: f64,
    pub irr_adequate: f64,
    pub margin_excellent: f64,
    pub margin_healthy: f64,
    pub margin_adequate: f64,
    /// Monthly revenue (Rp) considered "very promising"
    pub revenue_high: f64,
    /// Initial capital (Rp) below which the outlay is "affordable"
    pub capital_affordable: f64,
    /// Monthly net profit (Rp) below which profit is "still low"
    pub net_profit_low: f64,
    /// Share of planned volume the break-even point may reach before the
    /// volume target is flagged
    pub bep_volume_ratio: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            roi_excellent: 50.0,
            roi_promising: 25.0,
            roi_very_good: 30.0,
            roi_good: 20.0,
            roi_scaling: 40.0,
            payback_fast: 2.0,
            payback_long: 3.0,
            payback_reasonable: 4.0,
            irr_excellent: 25.0,
            irr_adequate: 15.0,
            margin_excellent: 20.0,
            margin_healthy: 15.0,
            margin_adequate: 10.0,
            revenue_high: 50_000_000.0,
            capital_affordable: 10_000_000.0,
            net_profit_low: 5_000_000.0,
            bep_volume_ratio: 0.8,
        }
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Analysis provider driven by [`RuleThresholds`].
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalysisProvider {
    thresholds: RuleThresholds,
}

impl RuleBasedAnalysisProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    /// Builds the report synchronously.
    pub fn build_report(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let m = &request.metrics;
        if !m.roi.is_finite() {
            return Err(AnalysisError::invalid_metrics(format!(
                "ROI must be finite, got {}",
                m.roi
            ))
            .into());
        }

        Ok(AnalysisReport {
            provider_id: self.id().to_string(),
            conclusion: self.conclusion(request),
            metric_analysis: self.metric_analysis(request),
            strengths: self.strengths(request),
            challenges: self.challenges(request),
            recommendations: self.recommendations(request),
            roadmap: self.roadmap(request),
        })
    }

    fn conclusion(&self, request: &AnalysisRequest) -> String {
        let t = &self.thresholds;
        let roi = request.metrics.roi;
        let name = &request.profile.name;
        let roi_text = format_percent(roi);

        if roi > t.roi_excellent {
            format!(
                "Berdasarkan analisis komprehensif, {} menunjukkan potensi yang SANGAT MENJANJIKAN dengan ROI {} yang berada di atas rata-rata industri.",
                name, roi_text
            )
        } else if roi > t.roi_promising {
            format!(
                "Berdasarkan analisis komprehensif, {} menunjukkan potensi yang MENJANJIKAN dengan ROI {} yang memadai untuk dilanjutkan.",
                name, roi_text
            )
        } else {
            format!(
                "Berdasarkan analisis komprehensif, {} memerlukan OPTIMASI SIGNIFIKAN dengan ROI {} yang masih di bawah standar industri.",
                name, roi_text
            )
        }
    }

    fn margin_grade(
        &self,
        margin: f64,
        excellent: &'static str,
        adequate: &'static str,
        weak: &'static str,
    ) -> &'static str {
        let t = &self.thresholds;
        if margin > t.margin_excellent {
            excellent
        } else if margin > t.margin_adequate {
            adequate
        } else {
            weak
        }
    }

    fn metric_analysis(&self, request: &AnalysisRequest) -> Vec<String> {
        let t = &self.thresholds;
        let m = &request.metrics;

        let roi_grade = if m.roi > t.roi_very_good {
            "Sangat baik"
        } else if m.roi > t.roi_good {
            "Baik"
        } else {
            "Perlu peningkatan"
        };
        let payback_grade = if m.payback_period < t.payback_fast {
            "Sangat cepat"
        } else if m.payback_period < t.payback_reasonable {
            "Wajar"
        } else {
            "Perlu strategi cash flow"
        };
        let irr_grade = if m.irr > t.irr_excellent {
            "Tingkat pengembalian sangat baik"
        } else if m.irr > t.irr_adequate {
            "Tingkat pengembalian memadai"
        } else {
            "Perlu peningkatan"
        };
        let bep_grade = if request.inputs.monthly_volume > m.bep_units {
            "Target volume sudah melebihi BEP"
        } else {
            "Perlu revisi target volume"
        };
        let margin_grade = self.margin_grade(
            m.net_margin,
            "Profitabilitas sangat baik",
            "Profitabilitas memadai",
            "Perlu optimasi",
        );

        vec![
            format!("ROI {} - {}", format_percent(m.roi), roi_grade),
            format!("Payback Period {} - {}", format_years(m.payback_period), payback_grade),
            format!("IRR {} - {}", format_percent(m.irr), irr_grade),
            format!("BEP {} - {}", format_units(m.bep_units), bep_grade),
            format!("Net margin {} - {}", format_percent(m.net_margin), margin_grade),
        ]
    }

    fn strengths(&self, request: &AnalysisRequest) -> Vec<String> {
        let t = &self.thresholds;
        let m = &request.metrics;
        let profile = &request.profile;
        let capital = request.inputs.initial_capital;

        let target_market = if profile.has_target_market() {
            format!("Target pasar \"{}\" yang spesifik", profile.target_market.trim())
        } else {
            "Target pasar yang perlu didefinisikan".to_string()
        };

        vec![
            format!(
                "Konsep {} memiliki diferensiasi yang jelas dalam kategori {}",
                profile.name, profile.category
            ),
            format!(
                "Modal awal {} {} untuk skala usaha",
                format_rupiah(capital),
                if capital < t.capital_affordable {
                    "terjangkau"
                } else {
                    "signifikan"
                }
            ),
            format!(
                "Potensi revenue {}/bulan yang {}",
                format_rupiah(m.monthly_revenue),
                if m.monthly_revenue > t.revenue_high {
                    "sangat menjanjikan"
                } else {
                    "memadai"
                }
            ),
            target_market,
            format!(
                "Net margin {} menunjukkan {}",
                format_percent(m.net_margin),
                self.margin_grade(
                    m.net_margin,
                    "profitabilitas yang sangat baik",
                    "profitabilitas yang memadai",
                    "profitabilitas yang perlu ditingkatkan",
                )
            ),
        ]
    }

    fn challenges(&self, request: &AnalysisRequest) -> Vec<String> {
        let t = &self.thresholds;
        let m = &request.metrics;
        let competitors = request.profile.competitors.len();

        vec![
            format!(
                "Ketergantungan pada volume penjualan {} unit/bulan untuk mencapai target",
                request.inputs.monthly_volume
            ),
            if m.payback_period > t.payback_long {
                "Payback period yang panjang".to_string()
            } else {
                "Perlu strategi cash flow yang ketat".to_string()
            },
            if competitors > 0 {
                format!("Persaingan dengan {} kompetitor", competitors)
            } else {
                "Persaingan di sektor yang ketat".to_string()
            },
            "Fluktuasi biaya operasional dapat mempengaruhi margin profit".to_string(),
            if m.monthly_net_profit < t.net_profit_low {
                "Profit bulanan yang masih rendah".to_string()
            } else {
                "Perlu strategi scaling".to_string()
            },
        ]
    }

    fn recommendations(&self, request: &AnalysisRequest) -> Vec<String> {
        let t = &self.thresholds;
        let m = &request.metrics;
        let volume = request.inputs.monthly_volume;

        let pick = |condition: bool, yes: &str, no: &str| {
            (if condition { yes } else { no }).to_string()
        };

        vec![
            pick(
                m.roi < t.roi_very_good,
                "Implementasi cost control ketat untuk meningkatkan margin",
                "Fokus pada scaling up operasi",
            ),
            pick(
                m.bep_units > volume * t.bep_volume_ratio,
                "Revisi target volume atau optimasi biaya",
                "Pertahankan target volume dan fokus customer acquisition",
            ),
            pick(
                m.payback_period > t.payback_long,
                "Implementasi cash flow management ketat",
                "Manfaatkan payback period cepat untuk reinvestasi",
            ),
            pick(
                m.net_margin < t.margin_healthy,
                "Optimasi pricing strategy dan cost structure",
                "Pertahankan net margin dan fokus volume growth",
            ),
            pick(
                !request.profile.competitors.is_empty(),
                "Analisis kompetitor untuk menemukan celah pasar unik",
                "Lakukan riset kompetitor lebih mendalam",
            ),
        ]
    }

    fn roadmap(&self, request: &AnalysisRequest) -> Vec<String> {
        let t = &self.thresholds;
        let m = &request.metrics;

        vec![
            format!(
                "Bulan 1-3: Fokus mencapai BEP {} dan brand awareness",
                format_units(m.bep_units)
            ),
            format!(
                "Bulan 4-6: {}",
                if m.payback_period < t.payback_fast {
                    "Mulai perencanaan ekspansi"
                } else {
                    "Konsolidasi operasi dan optimasi efisiensi"
                }
            ),
            format!(
                "Bulan 7-12: {}",
                if m.roi > t.roi_scaling {
                    "Implementasi scaling strategy"
                } else {
                    "Evaluasi ulang model bisnis dan pricing"
                }
            ),
        ]
    }
}

#[async_trait]
impl AnalysisProvider for RuleBasedAnalysisProvider {
    fn id(&self) -> &'static str {
        "rule-based"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        debug!("Running rule-based analysis for '{}'", request.profile.name);
        self.build_report(request)
    }
}
