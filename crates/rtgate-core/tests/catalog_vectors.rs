//! Catalog order and partition vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::{BTreeSet, HashSet};

use rtgate_core::catalog::{Operation, Partition, RequestOp, SocketOp};
use rtgate_core::error::{Result, RtGateError};

mod vector_loader;
use vector_loader::{load, CatalogVector, PartitionVector};

fn check_catalog<O: Operation>(v: &CatalogVector) {
    assert_eq!(O::FAMILY.as_str(), v.family, "vector={}", v.description);
    assert_eq!(O::ALL.len(), v.names.len(), "vector={}", v.description);

    let mut seen = HashSet::new();
    for (i, name) in v.names.iter().enumerate() {
        let op = O::from_index(i as u16).expect("index in range");
        assert_eq!(op.name(), name, "vector={} index={i}", v.description);
        assert_eq!(usize::from(op.index()), i);
        assert!(!op.name().is_empty());
        assert!(seen.insert(op.name()), "duplicate name {name}");
    }
    assert!(O::from_index(v.names.len() as u16).is_none());
}

#[test]
fn socket_catalog_matches_vector() {
    check_catalog::<SocketOp>(&load("socket_catalog.json"));
}

#[test]
fn request_catalog_matches_vector() {
    check_catalog::<RequestOp>(&load("request_catalog.json"));
}

fn resolve<O: Operation>(names: &[String]) -> Result<BTreeSet<O>> {
    names
        .iter()
        .map(|n| {
            O::from_name(n).ok_or_else(|| RtGateError::UnknownOperation {
                family: O::FAMILY.as_str(),
                name: n.clone(),
            })
        })
        .collect()
}

fn check_partition<O: Operation>(v: &PartitionVector) {
    let allow = resolve::<O>(&v.allow);

    if let Some(err) = &v.expect_error {
        let e = allow.expect_err("expected error");
        assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
        return;
    }

    let p = Partition::compute(&allow.expect("allowlist resolves"));
    let ex = v.expect.as_ref().expect("missing expect block");

    assert_eq!(p.disabled.len(), ex.disabled_len, "vector={}", v.description);
    let enabled: Vec<&str> = p.enabled.iter().map(|op| op.name()).collect();
    assert_eq!(enabled, ex.enabled, "vector={}", v.description);
    assert!(p.is_complete(), "vector={}", v.description);
    for op in &p.enabled {
        assert!(!p.disabled.contains(op), "vector={}", v.description);
    }
}

#[test]
fn partition_vectors() {
    let vectors: Vec<PartitionVector> = load("partitions.json");
    for v in &vectors {
        match v.family.as_str() {
            "socket" => check_partition::<SocketOp>(v),
            "request" => check_partition::<RequestOp>(v),
            other => panic!("unknown family {other}"),
        }
    }
}
