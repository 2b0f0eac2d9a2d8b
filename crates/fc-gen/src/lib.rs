//! Prompt-to-graph generation pipeline.
//!
//! Turns a free-text prompt plus an access credential into a validated
//! `GraphPayload`, or fails with a `GenerateError` — never a partially
//! broken graph. The pipeline touches no store state until the caller
//! applies the validated payload via `replace_all`, so the live graph
//! is preserved unchanged on any failure.
//!
//! The external capability itself is behind the `GraphGenerator` trait;
//! transport implementations (HTTP clients, test doubles) live outside
//! this crate. The returned future can be raced against a caller-chosen
//! timeout or simply dropped on teardown — the in-flight guard releases
//! either way, and a discarded future's response never reaches a store.

pub mod error;
pub mod extract;

pub use error::{GenerateError, TransportError};

use async_trait::async_trait;
use fc_core::payload::GraphPayload;
use fc_core::store::GraphStore;
use std::cell::Cell;

/// The opaque generation capability: prompt + credential in, raw text
/// out. Errors here are transport-level only; content problems are
/// diagnosed by the ingestor.
#[async_trait]
pub trait GraphGenerator {
    async fn generate(&self, prompt: &str, credential: &str) -> Result<String, TransportError>;
}

/// Wrap the user's prompt in the instruction frame the capability needs
/// to answer with a bare `{nodes, edges}` object.
pub fn compose_prompt(user_prompt: &str) -> String {
    format!(
        r#"Create a flowchart structure for: "{user_prompt}".

Respond with ONLY a valid JSON object containing "nodes" and "edges" arrays, in this exact format:

{{
  "nodes": [
    {{
      "id": "unique-id",
      "kind": "start|process|decision|text",
      "position": {{"x": 0, "y": 0}},
      "label": "Node text"
    }}
  ],
  "edges": [
    {{
      "id": "unique-edge-id",
      "source": "source-node-id",
      "target": "target-node-id"
    }}
  ]
}}

Create 5-10 nodes with meaningful connections. Position nodes in a logical flow layout. Every edge source and target must be the id of a node in the nodes array."#
    )
}

/// RAII guard enforcing at most one generation in flight.
struct Flight<'a>(&'a Cell<bool>);

impl<'a> Flight<'a> {
    fn begin(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.get() {
            return None;
        }
        flag.set(true);
        Some(Self(flag))
    }
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Drives the generate → extract → validate pipeline.
pub struct Ingestor<G> {
    generator: G,
    in_flight: Cell<bool>,
}

impl<G: GraphGenerator> Ingestor<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            in_flight: Cell::new(false),
        }
    }

    /// Whether a generation request is currently pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run the pipeline and return the validated payload. A request
    /// started while another is pending fails fast with `InFlight`.
    pub async fn ingest(
        &self,
        prompt: &str,
        credential: &str,
    ) -> Result<GraphPayload, GenerateError> {
        let _flight = Flight::begin(&self.in_flight).ok_or(GenerateError::InFlight)?;

        log::info!("requesting graph generation for prompt ({} chars)", prompt.len());
        let raw = self
            .generator
            .generate(&compose_prompt(prompt), credential)
            .await?;

        let value = extract::first_json_object(&raw).ok_or(GenerateError::MalformedResponse)?;
        let payload = GraphPayload::from_value(value)?;
        payload.validate()?;

        log::info!(
            "generated graph validated: {} nodes, {} edges",
            payload.nodes.len(),
            payload.edges.len()
        );
        Ok(payload)
    }

    /// Run the pipeline and, on success, atomically replace the store's
    /// contents — the only point at which the live graph is mutated.
    pub async fn ingest_into(
        &self,
        store: &mut GraphStore,
        prompt: &str,
        credential: &str,
    ) -> Result<(), GenerateError> {
        let payload = self.ingest(prompt, credential).await?;
        let (nodes, edges) = payload.into_graph();
        store.replace_all(nodes, edges)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_user_text_and_schema() {
        let p = compose_prompt("coffee brewing steps");
        assert!(p.contains("coffee brewing steps"));
        assert!(p.contains("\"nodes\""));
        assert!(p.contains("\"edges\""));
        assert!(p.contains("start|process|decision|text"));
    }

    #[test]
    fn flight_guard_releases_on_drop() {
        let flag = Cell::new(false);
        {
            let _flight = Flight::begin(&flag).unwrap();
            assert!(flag.get());
            assert!(Flight::begin(&flag).is_none());
        }
        assert!(!flag.get());
        assert!(Flight::begin(&flag).is_some());
    }
}
