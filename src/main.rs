// Entry point and interactive menu.
//
// The terminal plays the role of the dashboard sidebar:
// - the dataset is loaded once at startup and cached in `AppState`,
// - the year filter applies to every page,
// - each page rebuilds its numbers from scratch whenever it is opened.
mod category;
mod config;
mod dashboard;
mod error;
mod filters;
#[cfg(test)]
mod fixtures;
mod keywords;
mod loader;
mod output;
mod recommend;
mod search;
mod state;
mod summary;
mod types;
mod util;

use clap::Parser;
use config::Config;
use dashboard::{AnalysisPage, WordCloud};
use filters::{available_years, year_banner, YearSelection, ALL_YEARS_LABEL};
use state::AppState;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use util::format_int;

/// Print `label`, then read one trimmed line from stdin.
fn prompt(label: &str) -> String {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    if matches!(io::stdin().read_line(&mut buf), Ok(0) | Err(_)) {
        // stdin closed: nothing more can be asked
        println!("\nKeluar dari program.");
        std::process::exit(0);
    }
    buf.trim().to_string()
}

fn prompt_yes_no(label: &str) -> bool {
    loop {
        match prompt(&format!("{} (Y/N): ", label)).to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Pilihan tidak valid. Masukkan Y atau N."),
        }
    }
}

fn print_banner(state: &AppState) -> error::Result<()> {
    let ds = state.dataset()?;
    println!("=== Lapor Sleman: Sistem Pendukung Keputusan ===");
    println!("{}", year_banner(ds, state.year));
    println!("");
    Ok(())
}

fn handle_year_filter(state: &mut AppState) -> error::Result<()> {
    let years = available_years(state.dataset()?);
    let options: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    println!("Pilih Tahun Laporan: [0] {} {}", ALL_YEARS_LABEL, options.join(" "));
    let input = prompt("Tahun: ");
    match YearSelection::resolve(&input, state.dataset()?) {
        Ok(selection) => {
            state.year = selection;
            info!(%selection, "Year filter changed");
        }
        Err(e) => println!("{}\n", e),
    }
    Ok(())
}

fn handle_summary(state: &AppState) -> error::Result<()> {
    let view = state.filtered()?;
    let page = dashboard::build_summary(&view);
    let card = &page.scorecard;

    println!("Ringkasan Eksekutif\n");
    println!("Total Laporan : {}", format_int(card.total_reports));
    println!("Isu Dominan   : {}", card.top_category);
    println!("Media Favorit : {}", card.top_media);
    println!("Bulan Tersibuk: {}\n", card.busiest_month);

    println!("Tren Laporan Masuk");
    match page.trend_message() {
        Some(msg) => println!("{}\n", msg),
        None => output::preview_table_rows(&page.trend, page.trend.len()),
    }

    if prompt_yes_no("Simpan ringkasan ke JSON?") {
        output::write_json(&state.config.summary_json, &page)?;
        println!(
            "(Ringkasan disimpan ke {})\n",
            state.config.summary_json.display()
        );
    }
    Ok(())
}

fn pick_category(label: &str, options: &[String], default: usize) -> Option<String> {
    for (i, opt) in options.iter().enumerate() {
        let marker = if i == default { "*" } else { " " };
        println!("{} [{}] {}", marker, i + 1, opt);
    }
    loop {
        let input = prompt(&format!("{} (Enter = {}): ", label, default + 1));
        match dashboard::select_option(options, &input, default) {
            Ok(i) => return options.get(i).cloned(),
            Err(e) => println!("{}", e),
        }
    }
}

fn handle_analysis(state: &AppState) -> error::Result<()> {
    let ds = state.dataset()?;
    let view = state.filtered()?;
    println!("Analisis Mendalam (AI Insights)");
    println!("Hasil clustering algoritma K-Means & Naive Bayes\n");

    let defaults = match dashboard::build_analysis(ds, &view, None, None) {
        AnalysisPage::Empty => {
            println!("{}", dashboard::EMPTY_ANALYSIS);
            println!("{}\n", dashboard::EMPTY_ANALYSIS_HINT);
            return Ok(());
        }
        AnalysisPage::Ready(a) => a,
    };

    println!("Isu Dominan: {} | Media Favorit: {}\n", defaults.top_issue, defaults.top_media);
    println!("1. Peta Permasalahan Daerah");
    let mut by_count = defaults.categories.clone();
    // ascending order puts the top issue last; print it first
    by_count.reverse();
    output::preview_table_rows(&by_count, by_count.len());

    println!("2. Asal Kanal Pengaduan");
    output::preview_table_rows(&defaults.media, defaults.media.len());

    if defaults.category_options.is_empty() {
        println!("Tidak ada kategori di dataset.\n");
        return Ok(());
    }

    println!("3. Peta Kata Kunci (Word Cloud)");
    let wc_category =
        pick_category("Pilih Kategori untuk Word Cloud", &defaults.category_options, 0);
    println!("\nRekomendasi & Solusi Strategis");
    let solution = pick_category(
        "Pilih Masalah yang Ingin Dianalisis",
        &defaults.category_options,
        defaults.default_solution_index,
    );

    let page =
        dashboard::build_analysis(ds, &view, wc_category.as_deref(), solution.as_deref());
    let AnalysisPage::Ready(analysis) = page else {
        return Ok(());
    };

    if let Some(category) = &analysis.wordcloud_category {
        println!("\nKata kunci: {}", category);
    }
    match &analysis.wordcloud {
        WordCloud::Words(words) => output::preview_table_rows(words, 20),
        other => println!("{}\n", other.message().unwrap_or_default()),
    }

    if let Some(rec) = &analysis.recommendation {
        println!("Analisis & Solusi: {}", rec.category);
        println!("{}", rec.issue.analysis);
        if !rec.issue.actions.is_empty() {
            println!("Rekomendasi Aksi:");
            for (i, action) in rec.issue.actions.iter().enumerate() {
                println!("{}. {}", i + 1, action);
            }
        }
        println!("({})\n", rec.footnote);
        println!("{}", rec.channel.headline);
        println!("{}\n", rec.channel.message);
        println!("Waspada Waktu Sibuk");
        println!("{}\n", rec.seasonal_alert);
    }
    Ok(())
}

fn handle_archive(state: &AppState) -> error::Result<()> {
    let ds = state.dataset()?;
    let view = state.filtered()?;
    println!("Arsip Data Aduan\n");

    let query = prompt("Cari kata kunci (Enter = semua): ");
    let page = dashboard::build_archive(&view, Some(&query));
    output::preview_table_rows(&page.rows, state.config.preview_rows);
    println!("{}\n", page.caption());

    if prompt_yes_no(&format!(
        "Download Data (CSV, {} baris)?",
        format_int(page.export_rows)
    )) {
        output::export_view(&state.config.export, ds, &view)?;
        println!("(Data diekspor ke {})\n", state.config.export.display());
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lapor_sleman=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let config = Config::parse();
    let mut state = AppState::new(config);

    // Load up front: without the dataset there is nothing to show.
    let report = match state.load_report() {
        Ok(r) => r.clone(),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            eprintln!("Pastikan file CSV hasil notebook tersedia di lokasi yang diberikan (--data).");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Memuat dataset... ({} dari {} baris dimuat, {} baris rusak dilewati)",
        format_int(report.loaded_rows),
        format_int(report.total_rows),
        format_int(report.malformed_rows)
    );
    if state.dataset().map(|ds| ds.is_empty()).unwrap_or(true) {
        println!("Info: dataset tidak berisi laporan.");
    }
    if report.undated_rows > 0 {
        println!(
            "Info: {} baris tanpa tanggal yang valid.",
            format_int(report.undated_rows)
        );
    }

    if report.missing_category > 0 || report.missing_media > 0 {
        println!(
            "Info: {} baris tanpa kategori, {} baris tanpa media.",
            format_int(report.missing_category),
            format_int(report.missing_media)
        );
    }

    if let YearSelection::Year(year) = state.config.initial_year() {
        match state
            .dataset()
            .and_then(|ds| YearSelection::resolve(&year.to_string(), ds))
        {
            Ok(selection) => state.year = selection,
            Err(e) => warn!("Ignoring --year: {}", e),
        }
    }
    println!("");

    loop {
        if let Err(e) = print_banner(&state) {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        println!("PILIH MENU:");
        println!("[1] Beranda (Summary)");
        println!("[2] Analisis Masalah");
        println!("[3] Data Arsip");
        println!("[4] Filter Tahun (aktif: {})", state.year);
        println!("[0] Keluar\n");
        let result = match prompt("Masukkan pilihan: ").as_str() {
            "1" => handle_summary(&state),
            "2" => handle_analysis(&state),
            "3" => handle_archive(&state),
            "4" => handle_year_filter(&mut state),
            "0" => {
                println!("Keluar dari program.");
                return ExitCode::SUCCESS;
            }
            _ => {
                println!("Pilihan tidak valid. Masukkan 0-4.\n");
                Ok(())
            }
        };
        if let Err(e) = result {
            if e.is_fatal() {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
            eprintln!("Error: {}\n", e);
        }
    }
}
