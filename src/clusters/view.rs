//! Leptos component fetching case data and rendering the transmission network.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::controller::{ClusterController, LoadPhase};
use super::fetch::fetch_case_records;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};

/// Contact-tracing network for one state.
///
/// Fetches the raw case data once on mount, filters it to `state_code` and
/// renders the network once loaded. The canvas is as wide as the container and
/// square.
#[component]
pub fn Clusters(
	#[prop(into)] state_code: String,
	#[prop(into)] endpoint: String,
) -> impl IntoView {
	let controller = RwSignal::new(ClusterController::new(state_code, endpoint));

	Effect::new(move |_| {
		let started = controller.try_update(|c| c.begin_fetch()).unwrap_or(false);
		if !started {
			return;
		}
		let (url, code) = controller.with_untracked(|c| {
			(c.endpoint().to_string(), c.state_code().to_string())
		});
		spawn_local(async move {
			let result = fetch_case_records(&url, &code).await;
			controller.update(|c| c.finish_fetch(result));
		});
	});

	let fetched = move || controller.with(|c| c.is_fetched());
	let network: Signal<GraphData> =
		Signal::derive(move || controller.with(|c| c.network().clone()));
	let status = move || {
		controller.with(|c| match c.phase() {
			LoadPhase::Idle | LoadPhase::Loaded => String::new(),
			LoadPhase::Loading => format!("Loading cases for {}…", c.state_code()),
			LoadPhase::Failed(_) => "Case data is unavailable right now.".to_string(),
		})
	};

	view! {
		<div id="clusters" class="clusters">
			<Show when=fetched fallback=move || view! { <p class="clusters-status">{status}</p> }>
				<ForceGraphCanvas data=network />
			</Show>
		</div>
	}
}
