//! Loader behavior tests
//!
//! A load either yields every row of the extract or fails; these tests pin
//! the failure modes alongside the happy path.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use domain_records::{Claim, Customer, CustomerId};
use infra_csv::{read_records, LoadError};

fn write_extract(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write extract");
    path
}

#[test]
fn test_loads_all_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_extract(
        &dir,
        "claims.csv",
        "id,policyId,isClaimOpen\n\
         1000,100,true\n\
         1001,100,false\n",
    );

    let claims: Vec<Claim> = read_records(&path).unwrap();
    assert_eq!(claims.len(), 2);
}

#[test]
fn test_headered_but_empty_extract_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_extract(&dir, "claims.csv", "id,policyId,isClaimOpen\n");

    let claims: Vec<Claim> = read_records(&path).unwrap();
    assert!(claims.is_empty());
}

#[test]
fn test_empty_optional_column_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let path = write_extract(
        &dir,
        "customers.csv",
        "id,firstName,lastName,agentId,state,primaryLanguage,secondaryLanguage\n\
         1,Jane,Doe,9,TX,Spanish,\n",
    );

    let customers: Vec<Customer> = read_records(&path).unwrap();
    assert_eq!(customers[0].id, CustomerId::new(1));
    assert_eq!(customers[0].secondary_language, None);
}

#[test]
fn test_missing_source_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.csv");

    let result: Result<Vec<Claim>, _> = read_records(&path);
    let err = result.unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn test_malformed_row_fails_the_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = write_extract(
        &dir,
        "claims.csv",
        "id,policyId,isClaimOpen\n\
         1000,100,true\n\
         1001,100,not-a-bool\n",
    );

    // The first row is fine; the load must still fail rather than return it.
    let result: Result<Vec<Claim>, _> = read_records(&path);
    let err = result.unwrap_err();
    assert!(err.is_malformed());
}
