use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn herbiv() -> Command {
    let mut cmd = Command::cargo_bin("herbiv").unwrap();
    cmd.env_remove("HERBIV_DATA_DIR").arg("--data-dir").arg(data_dir());
    cmd
}

#[test]
fn test_shape_of_formula_query() {
    herbiv()
        .args(["formula", "--by", "HVPID", "-i", "HVP1625", "-i", "HVP3000", "--shape"])
        .assert()
        .success()
        .stdout("2 rows x 6 columns\n");
}

#[test]
fn test_item_with_commas_is_one_key() {
    herbiv()
        .args([
            "formula",
            "--by",
            "Ingredients",
            "--item",
            "黄芩,芍药,甘草,大枣",
            "--shape",
        ])
        .assert()
        .success()
        .stdout("1 rows x 6 columns\n");
}

#[test]
fn test_table_output() {
    herbiv()
        .args(["formula-tcm-links", "--by", "HVPID", "-i", "HVP1625"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HVM4463"))
        .stdout(predicate::str::ends_with("[6 rows x 2 columns]\n"));
}

#[test]
fn test_json_output_rescales_scores() {
    herbiv()
        .args([
            "chemical-protein-links",
            "--by",
            "Ensembl_ID",
            "--item",
            "ENSP00000335062",
            "--min-score",
            "200",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""Combined_score": 0.202"#))
        .stdout(predicate::str::contains("150").not());
}

#[test]
fn test_csv_output() {
    herbiv()
        .args(["proteins", "--by", "gene_name", "--item", "TP53", "-f", "csv"])
        .assert()
        .success()
        .stdout(
            "Ensembl_ID,gene_name,protein_name,Uniprot_id\n\
             ENSP00000269305,TP53,Cellular tumor antigen p53,P04637\n",
        );
}

#[test]
fn test_no_match_exits_one() {
    herbiv()
        .args(["formula", "--by", "HVPID", "--item", "strange", "--shape"])
        .assert()
        .code(1)
        .stdout("0 rows x 6 columns\n");
}

#[test]
fn test_missing_data_dir_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("herbiv")
        .unwrap()
        .env("HERBIV_DATA_DIR", dir.path())
        .args(["tcm", "--by", "HVMID", "--item", "HVM0367", "--shape"])
        .assert()
        .code(1)
        .stdout("0 rows x 0 columns\n");
}

#[test]
fn test_rejects_out_of_range_score() {
    herbiv()
        .args([
            "chemical-protein-links",
            "--by",
            "HVCID",
            "--item",
            "HVC0034",
            "--min-score",
            "1001",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("1001"));
}
