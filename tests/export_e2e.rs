// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use imgpile_scrape::config::options::{ExportFormat, ExportOptions};
use imgpile_scrape::file::export_records;
use imgpile_scrape::ImageRecord;

fn sample() -> Vec<ImageRecord> {
    vec![
        ImageRecord {
            image_url: "https://imgpile.com/images/a.jpg".into(),
            title: "first".into(),
            image_type: "JPG".into(),
            extension: ".jpg".into(),
            ..ImageRecord::default()
        },
        ImageRecord {
            image_url: "https://imgpile.com/images/b.png".into(),
            title: "second\tline".into(),
            image_type: "PNG".into(),
            extension: ".png".into(),
            ..ImageRecord::default()
        },
    ]
}

#[test]
fn json_file_in_nested_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("album.json");
    let opts = ExportOptions { out_path: Some(path.clone()), ..ExportOptions::default() };

    let written = export_records(&opts, &sample()).unwrap();
    assert_eq!(written, Some(path.clone()));

    let back: Vec<ImageRecord> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, sample());
}

#[test]
fn directory_target_gets_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let opts = ExportOptions {
        format: ExportFormat::Tsv,
        out_path: Some(dir.path().to_path_buf()),
        pretty: true,
    };
    let written = export_records(&opts, &sample()).unwrap().unwrap();
    assert_eq!(written, dir.path().join("images.tsv"));

    let text = fs::read_to_string(&written).unwrap();
    let mut rows = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(text.as_bytes());
    let headers: Vec<String> = rows.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ImageRecord::HEADERS);
    let back: Vec<ImageRecord> = rows.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(back, sample());
}

#[test]
fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("images.csv");
    fs::write(&path, "stale contents that are much longer than the export would be ...").unwrap();

    let opts = ExportOptions {
        format: ExportFormat::Csv,
        out_path: Some(path.clone()),
        pretty: false,
    };
    export_records(&opts, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), ImageRecord::HEADERS.join(","));
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let opts = ExportOptions {
        out_path: Some(blocker.join("images.json")),
        ..ExportOptions::default()
    };
    assert!(export_records(&opts, &sample()).is_err());
}
