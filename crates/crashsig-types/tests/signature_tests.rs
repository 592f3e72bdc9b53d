use crashsig_types::*;

#[test]
fn test_filter_is_all() {
    assert!(SignatureFilter::All.is_all());
    assert!(!SignatureFilter::Unreported.is_all());
    assert!(
        !SignatureFilter::Watched {
            user: "alice".to_string()
        }
        .is_all()
    );
    assert_eq!(SignatureFilter::default(), SignatureFilter::Unreported);
}

#[test]
fn test_bucket_id_parse_and_display() {
    let id: BucketId = "42".parse().unwrap();
    assert_eq!(id, BucketId::new(42));
    assert_eq!(id.to_string(), "42");
    assert!("forty-two".parse::<BucketId>().is_err());
}

#[test]
fn test_signature_entry_serializes_bucket_id_transparently() -> anyhow::Result<()> {
    let entry = SignatureEntry {
        id: BucketId::new(5),
        short_description: "Assertion failure: x".to_string(),
        size: 3,
        quality: Some(2),
        bug: None,
        optimized_signature: Some("{}".to_string()),
    };

    let json = serde_json::to_value(&entry)?;
    assert_eq!(json["id"], 5);
    assert!(entry.has_pending_optimization());
    Ok(())
}

#[test]
fn test_every_symptom_type_is_accepted_by_name() {
    for stype in SYMPTOM_TYPES {
        let raw = format!(r#"{{"symptoms": [{{"type": "{}"}}]}}"#, stype);
        let err = validate_signature(&raw).unwrap_err().to_string();
        assert!(
            !err.contains("Unknown symptom type"),
            "{} should be a known type, got: {}",
            stype,
            err
        );
    }
}
