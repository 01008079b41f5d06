//! Integration tests for the `fakren` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use lopdf::dictionary;
use lopdf::{Document, Object, Stream};
use predicates::prelude::*;
use tempfile::TempDir;

fn make_invoice_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut content = String::from("BT /F1 12 Tf 50 750 Td 14 TL");
    for line in lines {
        content.push_str(&format!(" ({line}) Tj T*"));
    }
    content.push_str(" ET");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
    });
    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    });
    if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
        page.set("Parent", pages_id);
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn invoice_0654() -> Vec<u8> {
    make_invoice_pdf(&[
        "FAKTUR PAJAK",
        "Kode dan Nomor Seri Faktur Pajak: 123.456-789",
        "Referensi: INV/2025/09/0654",
    ])
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let ws = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        fs::create_dir_all(ws.input()).unwrap();
        fs::create_dir_all(ws.output()).unwrap();
        ws
    }

    fn input(&self) -> std::path::PathBuf {
        self.dir.path().join("in")
    }

    fn output(&self) -> std::path::PathBuf {
        self.dir.path().join("out")
    }

    fn add(&self, name: &str, data: &[u8]) {
        fs::write(self.input().join(name), data).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fakren").unwrap();
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config"));
        cmd.env("HOME", self.dir.path());
        cmd
    }

    fn rename(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("rename")
            .arg(format!("{}/*", self.input().display()))
            .arg("--output-dir")
            .arg(self.output());
        cmd
    }
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_dry_run_logs_and_writes_nothing() {
    let ws = Workspace::new();
    ws.add("a.pdf", &invoice_0654());
    ws.add("b.pdf", &invoice_0654());
    ws.add("c.txt", b"not a pdf");

    ws.rename()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ a.pdf → INV／2025／09／0654 - 123456789.pdf"))
        .stdout(predicate::str::contains("✅ b.pdf → INV／2025／09／0654 - 123456789.pdf"))
        .stdout(predicate::str::contains("❌ Bukan PDF: c.txt"))
        .stdout(predicate::str::contains("(1).pdf").not());

    assert!(entries(&ws.output()).is_empty());
}

#[test]
fn test_single_success_writes_pdf() {
    let ws = Workspace::new();
    ws.add("scan.pdf", &invoice_0654());
    ws.add("empty.pdf", b"");

    ws.rename()
        .arg("--ascii-slash")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ File kosong: empty.pdf"));

    assert_eq!(entries(&ws.output()), vec!["INV-2025-09-0654 - 123456789.pdf"]);
    let written = fs::read(ws.output().join("INV-2025-09-0654 - 123456789.pdf")).unwrap();
    assert_eq!(written, fs::read(ws.input().join("scan.pdf")).unwrap());
}

#[test]
fn test_multiple_successes_are_archived() {
    let ws = Workspace::new();
    ws.add("a.pdf", &invoice_0654());
    ws.add("b.pdf", &invoice_0654());

    ws.rename().assert().success();

    assert_eq!(entries(&ws.output()), vec!["renamed_pdfs.zip"]);
    let file = fs::File::open(ws.output().join("renamed_pdfs.zip")).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "INV／2025／09／0654 - 123456789 (1).pdf",
            "INV／2025／09／0654 - 123456789.pdf",
        ]
    );
}

#[test]
fn test_no_archive_writes_loose_files() {
    let ws = Workspace::new();
    ws.add("a.pdf", &invoice_0654());
    ws.add("b.pdf", &invoice_0654());

    ws.rename().arg("--no-archive").arg("--ascii-slash").assert().success();

    assert_eq!(
        entries(&ws.output()),
        vec![
            "INV-2025-09-0654 - 123456789 (1).pdf",
            "INV-2025-09-0654 - 123456789.pdf",
        ]
    );
}

#[test]
fn test_existing_output_needs_overwrite() {
    let ws = Workspace::new();
    ws.add("scan.pdf", &invoice_0654());
    let target = ws.output().join("INV-2025-09-0654 - 123456789.pdf");
    fs::write(&target, b"kept").unwrap();

    ws.rename()
        .arg("--ascii-slash")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--overwrite"));
    assert_eq!(fs::read(&target).unwrap(), b"kept");

    ws.rename().arg("--ascii-slash").arg("--overwrite").assert().success();
    assert_eq!(fs::read(&target).unwrap(), fs::read(ws.input().join("scan.pdf")).unwrap());
}

#[test]
fn test_unterminated_reference_label_still_writes() {
    let ws = Workspace::new();
    let mut lines = vec![
        "Kode dan Nomor Seri Faktur Pajak: 010.000-25.1".to_string(),
        "Referensi: SO-881".to_string(),
    ];
    lines.extend((0..40).map(|i| format!("{i}. Barang contoh nomor {i} 12 pcs Rp 1.250.000")));
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    ws.add("long.pdf", &make_invoice_pdf(&lines));

    ws.rename().assert().success();

    let written = entries(&ws.output());
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("SO-881"));
    assert!(written[0].ends_with(" - 010000251.pdf"));
    assert!(written[0].len() <= 255);
}

#[test]
fn test_unreadable_pdf_in_json_report() {
    let ws = Workspace::new();
    ws.add("plain.pdf", b"%PDF-1.4 truncated upload");

    let output = ws.rename().args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["entries"][0]["original"], "plain.pdf");
    assert_eq!(report["entries"][0]["outcome"]["status"], "missing");
    assert_eq!(report["entries"][0]["outcome"]["fields"], "both");
    assert!(report["entries"][0]["extraction_error"].is_string());
    assert!(entries(&ws.output()).is_empty());
}

#[test]
fn test_missing_fields_warning() {
    let ws = Workspace::new();
    ws.add("plain.pdf", &make_invoice_pdf(&["Tidak ada data faktur"]));

    ws.rename()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "⚠️ plain.pdf: Referensi & Nomor Seri tidak ditemukan.",
        ));
    assert!(entries(&ws.output()).is_empty());
}

#[test]
fn test_summary_csv() {
    let ws = Workspace::new();
    ws.add("a.pdf", &invoice_0654());
    ws.add("notes.md", b"# notes");
    let summary = ws.dir.path().join("summary.csv");

    ws.rename().arg("--dry-run").arg("--summary").arg(&summary).assert().success();

    let csv = fs::read_to_string(&summary).unwrap();
    assert!(csv.contains("a.pdf,renamed,INV／2025／09／0654 - 123456789.pdf,INV/2025/09/0654,123456789"));
    assert!(csv.contains("notes.md,rejected,"));
}

#[test]
fn test_size_limit_from_config() {
    let ws = Workspace::new();
    ws.add("a.pdf", &invoice_0654());
    let config = ws.dir.path().join("small.json");
    fs::write(&config, r#"{"input": {"max_total_bytes": 10}}"#).unwrap();

    ws.rename()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn test_no_matching_inputs_fails() {
    let ws = Workspace::new();
    ws.rename()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files found"));
}

#[test]
fn test_config_init_set_get() {
    let ws = Workspace::new();
    let config = ws.dir.path().join("fakren.json");

    ws.cmd()
        .args(["config", "init"])
        .arg("--output")
        .arg(&config)
        .assert()
        .success();
    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "naming.pretty_slash", "false"])
        .assert()
        .success();
    ws.cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "naming.pretty_slash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    ws.cmd()
        .args(["config", "init"])
        .arg("--output")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}
