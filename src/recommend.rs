//! Rule-based advisory text for a selected issue category.
//!
//! Category rules are checked in table order and the first whose marker
//! occurs in the category name (case-insensitive) wins; `GENERAL_RULE`
//! applies when none match. Channel advice depends only on whether the
//! channel is one of `SOCIAL_CHANNELS`.
use crate::keywords::keyword_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Road,
    Lighting,
    Environment,
    General,
}

#[derive(Debug)]
pub struct IssueRule {
    pub kind: IssueKind,
    /// Lowercase fragments looked for in the category name.
    pub markers: &'static [&'static str],
    /// `{keywords}` is replaced by the keyword summary.
    pub analysis: &'static str,
    pub actions: &'static [&'static str],
}

impl IssueRule {
    fn matches(&self, category_lower: &str) -> bool {
        self.markers.iter().any(|m| category_lower.contains(m))
    }
}

pub static ISSUE_RULES: [IssueRule; 3] = [
    IssueRule {
        kind: IssueKind::Road,
        markers: &["jalan"],
        analysis: "Keluhan jalan pada kategori ini didominasi kata: {keywords}.",
        actions: &[
            "Prioritaskan perbaikan di lokasi yang muncul pada kata kunci (misal: Godean, Kaliurang, dll).",
            "Jika kata 'lubang' dominan, lakukan penambalan cepat (patching).",
            "Jika kata 'air/drainase' muncul, segera normalisasi saluran air di sekitar jalan tersebut.",
        ],
    },
    IssueRule {
        kind: IssueKind::Lighting,
        markers: &["penerangan", "lampu"],
        analysis: "Isu penerangan ini berpusat pada kata: {keywords}.",
        actions: &[
            "Jadikan lokasi yang disebut di atas sebagai target patroli malam ini.",
            "Cek komponen timer/listrik jika kata 'mati' dan 'total' sering muncul.",
            "Pastikan stok lampu LED tersedia untuk penggantian segera.",
        ],
    },
    IssueRule {
        kind: IssueKind::Environment,
        markers: &["lingkungan", "sampah"],
        analysis: "Masalah lingkungan ini terkait dengan: {keywords}.",
        actions: &[
            "Jika ada kata 'bakar', lakukan sosialisasi larangan pembakaran sampah.",
            "Jika kata 'pohon' dominan, siapkan tim perantingan pohon (pemangkasan).",
            "Koordinasi dengan Satpol PP/DLH untuk penertiban sesuai kata kunci.",
        ],
    },
];

pub static GENERAL_RULE: IssueRule = IssueRule {
    kind: IssueKind::General,
    markers: &[],
    analysis: "Saran Umum: Tindak lanjuti laporan dengan fokus pada kata kunci dominan: {keywords}.",
    actions: &[],
};

/// Channels treated as social media.
pub const SOCIAL_CHANNELS: [&str; 3] = ["Instagram", "Twitter", "Facebook"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Social,
    Direct,
}

#[derive(Debug, Clone)]
pub struct IssueAdvice {
    pub kind: IssueKind,
    pub analysis: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChannelAdvice {
    pub channel: String,
    pub kind: ChannelKind,
    pub headline: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub category: String,
    pub keywords: Vec<String>,
    pub issue: IssueAdvice,
    pub channel: ChannelAdvice,
    pub seasonal_alert: String,
    pub footnote: String,
}

/// First matching rule for `category`, or `GENERAL_RULE`.
pub fn issue_rule(category: &str) -> &'static IssueRule {
    let lower = category.to_lowercase();
    ISSUE_RULES
        .iter()
        .find(|rule| rule.matches(&lower))
        .unwrap_or(&GENERAL_RULE)
}

pub fn channel_kind(channel: &str) -> ChannelKind {
    let channel = channel.trim();
    if SOCIAL_CHANNELS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(channel))
    {
        ChannelKind::Social
    } else {
        ChannelKind::Direct
    }
}

pub fn issue_advice(category: &str, keywords: &[String]) -> IssueAdvice {
    let rule = issue_rule(category);
    IssueAdvice {
        kind: rule.kind,
        analysis: rule.analysis.replace("{keywords}", &keyword_summary(keywords)),
        actions: rule.actions.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn channel_advice(channel: &str) -> ChannelAdvice {
    let kind = channel_kind(channel);
    let message = match kind {
        ChannelKind::Social => format!(
            "Warga aktif di {}. Buat konten edukasi visual (Infografis/Video) tentang progres perbaikan.",
            channel
        ),
        ChannelKind::Direct => format!(
            "Maksimalkan respons admin di {}. Pertahankan waktu respon (SLA) < 24 jam.",
            channel
        ),
    };
    ChannelAdvice {
        channel: channel.to_string(),
        kind,
        headline: format!("Saluran Komunikasi Utama: {}", channel),
        message,
    }
}

pub fn seasonal_alert(busiest_month: &str) -> String {
    format!(
        "Data historis menunjukkan lonjakan aduan tertinggi di bulan {}. Siapkan tim piket ekstra.",
        busiest_month
    )
}

pub fn recommend(
    category: &str,
    keywords: &[String],
    top_media: &str,
    busiest_month: &str,
) -> Recommendation {
    Recommendation {
        category: category.to_string(),
        keywords: keywords.to_vec(),
        issue: issue_advice(category, keywords),
        channel: channel_advice(top_media),
        seasonal_alert: seasonal_alert(busiest_month),
        footnote: format!(
            "Solusi ini berdasarkan analisis terhadap laporan yang masuk di kategori {}.",
            category
        ),
    }
}
