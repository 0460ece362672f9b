// Shared test datasets, built through the real loader.
use crate::loader::load_from_reader;
use crate::types::Dataset;

/// Rows are `[Tanggal, Kategori_Final, Media, Topik, Topik_Cleaned_Final]`.
pub fn dataset(rows: &[[&str; 5]]) -> Dataset {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["Tanggal", "Kategori_Final", "Media", "Topik", "Topik_Cleaned_Final"])
        .unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    let bytes = wtr.into_inner().unwrap();
    load_from_reader(bytes.as_slice()).unwrap().0
}

/// A small multi-year dataset used across modules.
pub fn sleman() -> Dataset {
    dataset(&[
        ["2022-01-10", "Jalan Rusak", "Instagram", "Jalan berlubang di Godean", "jalan lubang godean"],
        ["2022-01-15", "Jalan Rusak", "WhatsApp", "Lubang besar di Kaliurang", "lubang kaliurang"],
        ["2022-03-02", "Sampah", "Instagram", "Sampah dibakar warga", "sampah bakar"],
        ["2023-03-08", "Penerangan Jalan Umum", "Twitter", "Lampu PJU mati total", "lampu mati total"],
        ["2023-03-21", "Jalan Rusak", "Instagram", "Jalan rusak dekat pasar", "jalan rusak pasar"],
        ["2023-07-30", "Sampah", "Facebook", "Sampah menumpuk di selokan", "sampah tumpuk selokan"],
        ["tidak jelas", "Administrasi", "Telepon", "Pengurusan KTP lambat", "ktp lambat"],
    ])
}
