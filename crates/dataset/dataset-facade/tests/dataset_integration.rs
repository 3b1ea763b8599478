//! Integration tests for ingestion through the dataset facade

use dataset_facade::{
    CsvSource, Dataset, DatasetError, Direction, EvidenceBasis, RecordSource, RecordType,
};

const UNIFIED: &str = "\
record_id,record_type,category,pillar,indicator,indicator_code,value_numeric,observation_date,source_name,confidence,gender,parent_id,related_indicator,impact_direction,impact_magnitude,impact_estimate,refined_estimate,lag_months,refined_lag_months,evidence_basis,effect_shape,notes
REC_0001,observation,,ACCESS,Account Ownership Rate,ACC_OWNERSHIP,35,2017-12-31,Global Findex,high,all,,,,,,,,,,,
REC_0002,observation,,ACCESS,Account Ownership Rate,ACC_OWNERSHIP,46,2021-12-31,Global Findex,high,all,,,,,,,,,,,
REC_0003,observation,,ACCESS,Account Ownership Rate,ACC_OWNERSHIP,36,2024-12-31,Global Findex,high,female,,,,,,,,,,,
TGT_0001,target,,ACCESS,NFIS-II Account Ownership,ACC_OWNERSHIP,70,2025-12-31,NFIS-II,high,,,,,,,,,,,,
EVT_0001,event,product_launch,,Telebirr Launch,,,2021-05-11,Ethio Telecom,high,,,,,,,,,,,,
IMP_0001,impact_link,,,,,,,GSMA,medium,,EVT_0001,ACC_OWNERSHIP,increase,high,15,4.5,12,,empirical,step,
";

fn load(csv: &str) -> dataset_facade::Result<Dataset> {
    let mut source = CsvSource::from_reader("unified", csv.as_bytes());
    Dataset::from_source(&mut source)
}

#[test]
fn test_unified_csv_ingests() {
    let dataset = load(UNIFIED).unwrap();
    let summary = dataset.summary();
    assert_eq!(summary.observations, 3);
    assert_eq!(summary.targets, 1);
    assert_eq!(summary.events, 1);
    assert_eq!(summary.impact_links, 1);
    assert_eq!(summary.indicators, 1);
}

#[test]
fn test_impact_link_fields_survive_ingestion() {
    let dataset = load(UNIFIED).unwrap();
    let link = &dataset.impact_links()[0];
    assert_eq!(link.event_id, "EVT_0001");
    assert_eq!(link.direction, Direction::Increase);
    assert_eq!(link.magnitude, 15.0);
    assert_eq!(link.refined_magnitude, Some(4.5));
    assert_eq!(link.effective_magnitude(), 4.5);
    assert_eq!(link.lag_months, 12.0);
    assert_eq!(link.evidence_basis, EvidenceBasis::Empirical);
    assert_eq!(link.evidence_source.as_deref(), Some("GSMA"));
}

#[test]
fn test_targets_and_observations_are_separate() {
    let dataset = load(UNIFIED).unwrap();
    assert_eq!(dataset.observations_for("ACC_OWNERSHIP").len(), 2);
    assert_eq!(dataset.targets_for("ACC_OWNERSHIP")[0].value, 70.0);
}

#[test]
fn test_event_with_pillar_is_rejected_at_ingestion() {
    let csv = UNIFIED.replace(
        "EVT_0001,event,product_launch,,",
        "EVT_0001,event,product_launch,USAGE,",
    );
    match load(&csv) {
        Err(DatasetError::SchemaViolation { record_id, reason }) => {
            assert_eq!(record_id, "EVT_0001");
            assert!(reason.contains("pillar"));
        }
        other => panic!("expected schema violation, got {:?}", other),
    }
}

#[test]
fn test_link_to_missing_event_is_rejected() {
    let csv = UNIFIED.replace(",EVT_0001,ACC_OWNERSHIP,", ",EVT_0404,ACC_OWNERSHIP,");
    assert_eq!(
        load(&csv).unwrap_err(),
        DatasetError::UnknownEvent {
            link_id: "IMP_0001".to_string(),
            event_id: "EVT_0404".to_string(),
        }
    );
}

#[test]
fn test_record_type_round_trip_names() {
    for kind in [
        RecordType::Observation,
        RecordType::Event,
        RecordType::Target,
        RecordType::ImpactLink,
    ] {
        assert_eq!(kind.as_str().parse::<RecordType>().unwrap(), kind);
    }
}

#[test]
fn test_source_can_be_used_as_trait_object() {
    let mut source: Box<dyn RecordSource> =
        Box::new(CsvSource::from_reader("boxed", UNIFIED.as_bytes()));
    assert_eq!(source.read_records().unwrap().len(), 6);
}
