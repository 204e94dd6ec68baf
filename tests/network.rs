//! End-to-end: raw API document to transmission network.

// Integration tests only touch part of the lib's deps.
#![allow(unused_crate_dependencies)]

use std::collections::HashSet;

use covid_clusters::clusters::fetch::parse_case_records;
use covid_clusters::{NodeGroup, NodeRaw, build_network};

const RAW_DATA: &str = r#"{
	"raw_data": [
		{
			"patientnumber": "1",
			"statecode": "KL",
			"contractedfromwhichpatientsuspected": "",
			"detectedcity": "Thrissur",
			"notes": "Travelled from Wuhan"
		},
		{
			"patientnumber": "2",
			"statecode": "KL",
			"contractedfromwhichpatientsuspected": "P1",
			"detectedcity": "Alappuzha"
		},
		{
			"patientnumber": 3,
			"statecode": "KL",
			"contractedfromwhichpatientsuspected": "P1, P2",
			"detectedcity": "Kasaragod"
		},
		{
			"patientnumber": "4",
			"statecode": "DL",
			"contractedfromwhichpatientsuspected": "P3"
		},
		{
			"patientnumber": "5",
			"statecode": "KL"
		}
	]
}"#;

#[test]
fn test_state_network_from_raw_document() {
	let records = parse_case_records(RAW_DATA, "KL").unwrap();
	assert_eq!(records.len(), 4);

	let network = build_network(&records);

	let ids: Vec<_> = network.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, ["P2", "P3", "P1"]);
	assert_eq!(network.links.len(), 3);

	let group = |id: &str| network.nodes.iter().find(|n| n.id == id).map(|n| n.group);
	assert_eq!(group("P1"), Some(NodeGroup::Source));
	assert_eq!(group("P2"), Some(NodeGroup::Source));
	assert_eq!(group("P3"), Some(NodeGroup::Target));

	// P3's record keeps its payload as metadata.
	let p3 = network.nodes.iter().find(|n| n.id == "P3").unwrap();
	match &p3.raw {
		NodeRaw::Record(record) => {
			assert_eq!(record.patient_number, "3");
			assert_eq!(
				record.extra.get("detectedcity").and_then(|v| v.as_str()),
				Some("Kasaragod")
			);
		}
		NodeRaw::Source(_) => panic!("P3 should carry its record"),
	}
}

#[test]
fn test_other_state_is_isolated() {
	let records = parse_case_records(RAW_DATA, "DL").unwrap();
	let network = build_network(&records);

	let ids: HashSet<_> = network.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, HashSet::from(["P4", "P3"]));
	assert_eq!(network.links.len(), 1);
	assert_eq!(network.links[0].source, "P3");
	assert_eq!(network.links[0].target, "P4");
}

#[test]
fn test_network_serializes_for_the_renderer() {
	let records = parse_case_records(RAW_DATA, "KL").unwrap();
	let json = serde_json::to_value(build_network(&records)).unwrap();

	assert_eq!(json["nodes"][0]["id"], "P2");
	assert_eq!(json["nodes"][0]["group"], "source");
	assert_eq!(json["nodes"][1]["group"], "target");
	assert_eq!(json["nodes"][2]["raw"], "P1");
	assert_eq!(json["links"][0]["source"], "P1");
	assert_eq!(json["links"][0]["target"], "P2");
}
