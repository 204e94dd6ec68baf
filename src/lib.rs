//! covid-clusters: contact-tracing network graph for reported COVID-19 cases.
//!
//! Fetches raw case records, derives a "who infected whom" network from the
//! free-text source field of each record, and renders it as an interactive
//! force-directed graph compiled to WASM.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod clusters;
pub mod components;
pub mod config;

pub use clusters::{CaseRecord, Clusters, build_network};
pub use components::force_graph::{
	ForceGraphCanvas, GraphData, GraphLink, GraphNode, NodeGroup, NodeRaw,
};
pub use config::{ClustersConfig, load_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("covid-clusters: logging initialized");
}

/// Main application component.
/// Reads the page configuration and renders the clusters view for its state.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();
	let title = format!("Clusters in {}", config.state_code);

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="clusters-page">
			<h1>{title}</h1>
			<p class="subtitle">"Hover a node to see the patient. Drag nodes to reposition. Scroll to zoom."</p>
			<Clusters state_code=config.state_code endpoint=config.endpoint />
		</main>
	}
}
