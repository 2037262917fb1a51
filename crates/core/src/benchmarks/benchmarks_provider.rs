use std::collections::HashSet;

use log::debug;

use super::benchmarks_model::{IndustryBenchmark, IndustryTemplate};
use crate::errors::{Error, Result};

/// Source of industry benchmarks.
///
/// Implementations are read-only lookups; the engine never mutates them.
pub trait BenchmarkProvider: Send + Sync {
    /// Returns the template registered under `industry_key`.
    fn template(&self, industry_key: &str) -> Option<&IndustryTemplate>;

    /// Lists every available industry in display order.
    fn industries(&self) -> Vec<&IndustryTemplate>;

    /// Returns the benchmark for `industry_key`, if one exists.
    fn benchmark(&self, industry_key: &str) -> Option<IndustryBenchmark> {
        self.template(industry_key).map(|t| t.benchmark)
    }
}

/// Benchmark provider backed by an in-memory template list.
#[derive(Debug, Clone)]
pub struct StaticBenchmarkProvider {
    templates: Vec<IndustryTemplate>,
}

impl StaticBenchmarkProvider {
    /// Creates a provider from a template list after validating it.
    pub fn new(templates: Vec<IndustryTemplate>) -> Result<Self> {
        validate_templates(&templates)?;
        Ok(Self { templates })
    }

    /// Loads a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self> {
        let templates: Vec<IndustryTemplate> = serde_json::from_str(json)?;
        debug!("Loaded {} industry templates from configuration", templates.len());
        Self::new(templates)
    }

    /// The industries offered by the wizard out of the box.
    pub fn builtin() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }
}

impl Default for StaticBenchmarkProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BenchmarkProvider for StaticBenchmarkProvider {
    fn template(&self, industry_key: &str) -> Option<&IndustryTemplate> {
        self.templates.iter().find(|t| t.key == industry_key)
    }

    fn industries(&self) -> Vec<&IndustryTemplate> {
        self.templates.iter().collect()
    }
}

fn validate_templates(templates: &[IndustryTemplate]) -> Result<()> {
    let mut seen = HashSet::new();
    for template in templates {
        if template.key.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "industry template key must not be empty".to_string(),
            ));
        }
        if !seen.insert(template.key.as_str()) {
            return Err(Error::InvalidConfigValue(format!(
                "duplicate industry template key '{}'",
                template.key
            )));
        }

        let b = &template.benchmark;
        let all_finite = [b.min_roi, b.min_irr, b.max_payback, b.min_margin]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(Error::InvalidConfigValue(format!(
                "benchmark for '{}' contains a non-finite threshold",
                template.key
            )));
        }
        if b.max_payback <= 0.0 {
            return Err(Error::InvalidConfigValue(format!(
                "maxPayback for '{}' must be positive, got {}",
                template.key, b.max_payback
            )));
        }
    }
    Ok(())
}

fn template(
    key: &str,
    name: &str,
    benchmark: IndustryBenchmark,
    fixed: &[&str],
    variable: &[&str],
) -> IndustryTemplate {
    IndustryTemplate {
        key: key.to_string(),
        name: name.to_string(),
        benchmark,
        suggested_fixed_costs: fixed.iter().map(|s| s.to_string()).collect(),
        suggested_variable_costs: variable.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_templates() -> Vec<IndustryTemplate> {
    vec![
        template(
            "food",
            "Makanan & Minuman",
            IndustryBenchmark::new(20.0, 18.0, 2.5, 15.0),
            &[
                "Sewa tempat (dapur/outlet)",
                "Gaji chef/barista",
                "Listrik & Air",
                "Marketing & Promosi",
            ],
            &[
                "Bahan baku per porsi",
                "Kemasan (box/gelas)",
                "Biaya platform delivery (GoFood/GrabFood)",
            ],
        ),
        template(
            "fashion",
            "Fashion & Aksesoris",
            IndustryBenchmark::new(25.0, 20.0, 3.0, 20.0),
            &[
                "Sewa butik/gudang",
                "Gaji desainer/penjahit",
                "Biaya photoshoot produk",
                "Langganan platform e-commerce",
            ],
            &[
                "Kain & benang per item",
                "Biaya maklun (jika ada)",
                "Packaging eksklusif",
                "Komisi reseller",
            ],
        ),
        template(
            "tech",
            "Teknologi & Digital",
            IndustryBenchmark::new(30.0, 25.0, 4.0, 25.0),
            &[
                "Gaji developer & engineer",
                "Biaya server & cloud (AWS/GCP)",
                "Sewa kantor",
                "Lisensi software",
            ],
            &[
                "Biaya API per request",
                "Komisi App Store/Play Store",
                "Biaya akuisisi customer (Ads)",
            ],
        ),
        template(
            "health",
            "Kesehatan & Kecantikan",
            IndustryBenchmark::new(22.0, 19.0, 3.5, 18.0),
            &[
                "Sewa klinik/salon",
                "Gaji terapis/dokter",
                "Biaya lisensi & sertifikasi",
                "Asuransi malpraktik",
            ],
            &[
                "Produk habis pakai per treatment",
                "Botol & kemasan produk",
                "Biaya sterilisasi alat",
            ],
        ),
        template(
            "education",
            "Pendidikan & Kursus",
            IndustryBenchmark::new(18.0, 15.0, 3.0, 20.0),
            &[
                "Sewa ruang kelas/kantor",
                "Gaji pengajar/tutor",
                "Pengembangan kurikulum",
                "Platform e-learning",
            ],
            &[
                "Materi cetak per siswa",
                "Fee untuk pengajar tamu",
                "Sertifikat kelulusan",
            ],
        ),
        template(
            "service",
            "Jasa & Layanan",
            IndustryBenchmark::new(25.0, 22.0, 2.0, 30.0),
            &[
                "Sewa kantor",
                "Gaji staf ahli",
                "Software CRM & Project Management",
                "Asuransi profesional",
            ],
            &[
                "Biaya transportasi per proyek",
                "Material penunjang per klien",
                "Komisi untuk tim sales",
            ],
        ),
        template(
            "retail",
            "Retail & E-commerce",
            IndustryBenchmark::new(15.0, 18.0, 3.5, 10.0),
            &[
                "Sewa toko/gudang",
                "Gaji kasir & staf",
                "Sistem POS (Point of Sale)",
                "Biaya marketplace",
            ],
            &[
                "Harga pokok pembelian barang",
                "Biaya pengiriman (Shipping)",
                "Biaya pemrosesan pembayaran",
            ],
        ),
        template(
            "other",
            "Lainnya",
            IndustryBenchmark::new(15.0, 15.0, 4.0, 10.0),
            &["Sewa", "Gaji", "Marketing"],
            &["Bahan Baku", "Komisi"],
        ),
    ]
}
