// ==========================================
// Sample roster generator
// ==========================================
// Purpose: fill the registration template once per club
// Input: JSON array of entrants (or a built-in sample set)
// Output: <out-dir>/registration_<club>.xlsx
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use rust_xlsxwriter::Workbook;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// Template: club in C3, contact block C4-C6, headers on row 9, data from row 10
const HEADER_ROW: u32 = 8;
const FIRST_DATA_ROW: u32 = 9;

const HEADERS: &[&str] = &[
    "License no.",
    "Name",
    "Gymnast",
    "Coach",
    "Born",
    "Rekrutt",
    "13-14",
    "15-16",
    "17-18",
    "Senior",
    "Lunch Saturday",
    "Lunch Sunday",
    "Transport",
    "Training Friday",
    "Allergies",
    "Photo consent",
];

/// Category label -> marker column (F-J), "trener" marks the coach column D
fn category_column(category: &str) -> Option<u16> {
    match category {
        "rekrutt" => Some(5),
        "13-14" => Some(6),
        "15-16" => Some(7),
        "17-18" => Some(8),
        "senior" => Some(9),
        _ => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleEntrant {
    #[serde(default)]
    license_number: String,
    full_name: String,
    dob: String,
    category: String,
    club: String,
}

impl SampleEntrant {
    fn new(license: &str, name: &str, dob: &str, category: &str, club: &str) -> Self {
        Self {
            license_number: license.to_string(),
            full_name: name.to_string(),
            dob: dob.to_string(),
            category: category.to_string(),
            club: club.to_string(),
        }
    }
}

fn builtin_sample() -> Vec<SampleEntrant> {
    vec![
        SampleEntrant::new("1001", "Kari Nilsen", "01.02.2011", "13-14", "Oslo TF"),
        SampleEntrant::new("1002", "Per Olsen", "14.06.2011", "13-14", "Oslo TF"),
        SampleEntrant::new("1003", "Ingrid Berg", "03.09.2013", "rekrutt", "Oslo TF"),
        SampleEntrant::new("1004", "Trine Hansen", "22.11.1985", "trener", "Oslo TF"),
        SampleEntrant::new("2001", "Jonas Dahl", "09.03.2009", "15-16", "Bergen TK"),
        SampleEntrant::new("2002", "Sofie Lie", "17.07.2008", "15-16", "Bergen TK"),
        SampleEntrant::new("2003", "Emil Strand", "30.01.2006", "17-18", "Bergen TK"),
        SampleEntrant::new("3001", "Nora Bakke", "12.12.2000", "senior", "Trondheim TF"),
        SampleEntrant::new("3002", "Lars Moen", "05.05.2012", "13-14", "Trondheim TF"),
        SampleEntrant::new("3003", "Ola123", "05.05.2012", "13-14", "Trondheim TF"),
        SampleEntrant::new("3004", "Mia Haugen", "31.02.2011", "13-14", "Trondheim TF"),
    ]
}

fn write_club_roster(club: &str, members: &[SampleEntrant], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(2, 2, club)?;
    sheet.write_string(3, 2, "Contact person")?;
    sheet.write_string(4, 2, "contact@example.com")?;
    sheet.write_string(5, 2, "12345678")?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(HEADER_ROW, col as u16, *header)?;
    }

    for (i, member) in members.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        let is_coach = member.category == "trener";

        sheet.write_string(row, 0, &member.license_number)?;
        sheet.write_string(row, 1, &member.full_name)?;
        sheet.write_string(row, if is_coach { 3 } else { 2 }, "x")?;
        sheet.write_string(row, 4, &member.dob)?;
        if let Some(col) = category_column(&member.category) {
            sheet.write_string(row, col, "x")?;
        }
        for col in [10u16, 11, 12, 13, 15] {
            sheet.write_string(row, col, "x")?;
        }
        sheet.write_string(row, 14, "none")?;
    }

    workbook
        .save(path)
        .with_context(|| format!("saving {}", path.display()))?;
    Ok(())
}

#[derive(Parser)]
#[command(name = "generate_sample_rosters")]
#[command(about = "Write one filled registration workbook per club")]
struct Args {
    /// JSON file with [{licenseNumber, fullName, dob, category, club}]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "tests/fixtures/rosters")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let entrants = match &args.input {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Vec<SampleEntrant>>(&raw).context("parsing entrant list")?
        }
        None => builtin_sample(),
    };

    let mut by_club: BTreeMap<String, Vec<SampleEntrant>> = BTreeMap::new();
    for entrant in entrants {
        by_club.entry(entrant.club.clone()).or_default().push(entrant);
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for (club, members) in &by_club {
        let file_name = format!("registration_{}.xlsx", club.replace([' ', '/'], "_"));
        let path = args.out_dir.join(file_name);
        write_club_roster(club, members, &path)?;
        println!("{} ({} rows)", path.display(), members.len());
    }

    println!("Wrote {} roster(s)", by_club.len());
    Ok(())
}
