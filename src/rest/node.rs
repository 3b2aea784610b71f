//! The resource graph node: one JSON object fetched from the server.
//!
//! A [`ResourceNode`] keeps the server's fields in an ordered map and a
//! [`Connection`] back to the server. Relation links in its `Links` field
//! are followed on demand, either into a single freshly fetched resource or
//! into a lazy [`Pages`] sequence.
//!
//! # Example
//!
//! ```rust,ignore
//! use octopus_api::rest::resources::Project;
//!
//! let mut project: Project = api.project("Projects-1").await?;
//! println!("{:?}", project.get_str("Description"));
//!
//! project.set("Description", "Deployed by the release bot");
//! project.save().await?;  // PUT to Links.Self, then merge the server's answer
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::Connection;
use crate::rest::errors::json_type_name;
use crate::rest::links::{self, strip_link_template};
use crate::rest::timestamp::parse_timestamp;
use crate::rest::{ApiResource, Pages, ResourceError};

/// One server-side entity as it was at fetch time.
///
/// Fields are kept exactly as the server sent them; nothing is validated
/// against a schema. Serializing a node yields only its fields, never the
/// connection.
#[derive(Clone, Debug)]
pub struct ResourceNode {
    connection: Connection,
    kind: &'static str,
    fields: Map<String, Value>,
}

impl Serialize for ResourceNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl ResourceNode {
    /// Creates a node of the given kind from an already flattened field set.
    #[must_use]
    pub const fn new(connection: Connection, kind: &'static str, fields: Map<String, Value>) -> Self {
        Self {
            connection,
            kind,
            fields,
        }
    }

    /// Creates a node from a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPayload`] for anything but a JSON object.
    pub fn from_value(
        connection: Connection,
        kind: &'static str,
        value: Value,
    ) -> Result<Self, ResourceError> {
        match value {
            Value::Object(fields) => Ok(Self::new(connection, kind, fields)),
            other => Err(ResourceError::InvalidPayload {
                resource: kind,
                expected: "a JSON object",
                found: json_type_name(&other),
            }),
        }
    }

    /// Returns the resource type name this node was built as.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the connection this node was fetched through.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns all fields, in server order.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the node, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Returns a raw field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a field value when it is a string.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Sets a field locally, returning the previous value. Nothing is sent
    /// until [`save`](Self::save) is called.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Removes a field locally, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.shift_remove(field)
    }

    /// Returns the `Id` field.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_str("Id")
    }

    /// Returns the `Name` field.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get_str("Name")
    }

    /// Returns the `Links` collection.
    #[must_use]
    pub fn links(&self) -> Option<&Map<String, Value>> {
        self.get("Links").and_then(Value::as_object)
    }

    /// Returns the raw (unresolved, unstripped) link stored under `key`.
    ///
    /// Empty links are treated as absent.
    #[must_use]
    pub fn link(&self, key: &str) -> Option<&str> {
        self.links()
            .and_then(|links| links.get(key))
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
    }

    /// Returns the absolute URL of the relation stored under `key`, with any
    /// `{?...}` template suffix removed.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if the link is absent.
    pub fn link_url(&self, key: &str) -> Result<String, ResourceError> {
        let link = self
            .link(key)
            .ok_or_else(|| ResourceError::MissingRelation {
                resource: self.kind,
                relation: key.to_string(),
            })?;
        Ok(self.connection.resolve(strip_link_template(link)))
    }

    /// Parses a timestamp field.
    ///
    /// Returns `Ok(None)` when the field is absent, `null`, or an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] when the field holds
    /// anything else that does not parse.
    pub fn timestamp(
        &self,
        field: &'static str,
    ) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        let malformed = |value: String, reason: String| ResourceError::MalformedTimestamp {
            resource: self.kind,
            field,
            value,
            reason,
        };

        match self.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.is_empty() => Ok(None),
            Some(Value::String(text)) => parse_timestamp(text)
                .map(Some)
                .map_err(|reason| malformed(text.clone(), reason)),
            Some(other) => Err(malformed(
                other.to_string(),
                format!("expected a string, got {}", json_type_name(other)),
            )),
        }
    }

    /// Follows a one-to-one relation, fetching the linked resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] without sending anything if
    /// the link is absent, or [`ResourceError::Http`] if the GET fails.
    pub async fn fetch_relation<T: ApiResource>(&self, key: &str) -> Result<T, ResourceError> {
        let url = self.link_url(key)?;
        tracing::debug!(resource = self.kind, relation = key, url = %url, "following relation");
        self.fetch_url(&url).await
    }

    /// Follows a one-to-many relation, returning a lazy sequence rooted at the
    /// link. Nothing is fetched until the sequence is advanced.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if the link is absent.
    pub fn relation_pages<T: ApiResource>(&self, key: &str) -> Result<Pages<T>, ResourceError> {
        let url = self.link_url(key)?;
        Ok(Pages::new(self.connection.clone(), url, None))
    }

    /// GETs `url` and builds a `T` from the response.
    pub(crate) async fn fetch_url<T: ApiResource>(&self, url: &str) -> Result<T, ResourceError> {
        let body = self.connection.get(url, None).await?;
        T::from_value(self.connection.clone(), body)
    }

    /// Persists local field changes.
    ///
    /// Sends every field as a JSON body in a PUT to the `Self` link, then
    /// merges the server's response into the local fields (keys present in the
    /// response overwrite local values). On failure the fields are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Self` link,
    /// [`ResourceError::Http`] if the PUT fails, or
    /// [`ResourceError::InvalidPayload`] if the server answers with something
    /// other than a JSON object.
    pub async fn save(&mut self) -> Result<(), ResourceError> {
        let url = self.link_url(links::SELF)?;
        tracing::debug!(resource = self.kind, url = %url, "saving resource");

        let response = self
            .connection
            .put(&url, Value::Object(self.fields.clone()))
            .await?;

        match response {
            Value::Object(updated) => {
                self.fields.extend(updated);
                Ok(())
            }
            other => Err(ResourceError::InvalidPayload {
                resource: self.kind,
                expected: "a JSON object",
                found: json_type_name(&other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::ScriptedTransport;
    use crate::clients::HttpMethod;
    use crate::rest::resources::{Deployment, Project};
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "https://octopus.example.com";

    fn node(transport: &Arc<ScriptedTransport>, fields: Value) -> ResourceNode {
        let connection = Connection::new(transport.clone(), BASE);
        ResourceNode::from_value(connection, "Release", fields).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let transport = Arc::new(ScriptedTransport::default());
        let connection = Connection::new(transport, BASE);

        let error = ResourceNode::from_value(connection, "Release", json!([1, 2])).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::InvalidPayload {
                resource: "Release",
                found: "an array",
                ..
            }
        ));
    }

    #[test]
    fn test_field_access_preserves_server_order() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(
            &transport,
            json!({"Version": "1.0.0", "Id": "Releases-1", "Assembled": null, "Links": {}}),
        );

        let keys: Vec<&str> = node.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["Version", "Id", "Assembled", "Links"]);
        assert_eq!(node.id(), Some("Releases-1"));
        assert_eq!(node.get_str("Version"), Some("1.0.0"));
        assert_eq!(node.get("Assembled"), Some(&Value::Null));
        assert!(node.name().is_none());
    }

    #[test]
    fn test_set_and_remove_keep_order() {
        let transport = Arc::new(ScriptedTransport::default());
        let mut node = node(&transport, json!({"A": 1, "B": 2, "C": 3}));

        assert_eq!(node.set("B", "two"), Some(json!(2)));
        assert_eq!(node.remove("A"), Some(json!(1)));
        assert!(node.set("D", true).is_none());

        let keys: Vec<&str> = node.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, ["B", "C", "D"]);
    }

    #[test]
    fn test_serialize_emits_fields_only() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(&transport, json!({"A": 1, "B": 2}));

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!({"A": 1, "B": 2}));
    }

    #[test]
    fn test_link_url_strips_template_and_resolves() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(
            &transport,
            json!({"Links": {"Variables": "/api/variables/variableset-Projects-1{?includeId}"}}),
        );

        assert_eq!(
            node.link_url("Variables").unwrap(),
            "https://octopus.example.com/api/variables/variableset-Projects-1"
        );
    }

    #[test]
    fn test_empty_link_is_missing() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(&transport, json!({"Links": {"Project": ""}}));

        assert!(node.link("Project").is_none());
        assert!(matches!(
            node.link_url("Project"),
            Err(ResourceError::MissingRelation { .. })
        ));
    }

    #[test]
    fn test_timestamp_absent_values() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(&transport, json!({"Empty": "", "Null": null}));

        assert!(node.timestamp("Empty").unwrap().is_none());
        assert!(node.timestamp("Null").unwrap().is_none());
        assert!(node.timestamp("Missing").unwrap().is_none());
    }

    #[test]
    fn test_timestamp_rejects_non_string_values() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(&transport, json!({"Assembled": 1_700_000_000}));

        let error = node.timestamp("Assembled").unwrap_err();
        assert!(matches!(
            error,
            ResourceError::MalformedTimestamp { field: "Assembled", ref value, .. } if value == "1700000000"
        ));
    }

    #[tokio::test]
    async fn test_fetch_relation_gets_resolved_link() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.respond(
            "https://octopus.example.com/api/projects/Projects-1",
            json!({"Id": "Projects-1", "Name": "Web"}),
        );
        let node = node(&transport, json!({"Links": {"Project": "/api/projects/Projects-1"}}));

        let project: Project = node.fetch_relation("Project").await.unwrap();

        assert_eq!(project.name(), Some("Web"));
        assert_eq!(project.kind(), "Project");
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_relation_missing_link_sends_nothing() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(&transport, json!({"Links": {}}));

        let result = node.fetch_relation::<Project>("Project").await;

        assert!(matches!(
            result,
            Err(ResourceError::MissingRelation { resource: "Release", ref relation }) if relation == "Project"
        ));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_relation_pages_is_lazy() {
        let transport = Arc::new(ScriptedTransport::default());
        let node = node(
            &transport,
            json!({"Links": {"Deployments": "/api/releases/Releases-1/deployments{?skip,take}"}}),
        );

        let pages = node.relation_pages::<Deployment>("Deployments").unwrap();

        assert_eq!(
            pages.next_url(),
            Some("https://octopus.example.com/api/releases/Releases-1/deployments")
        );
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_save_merges_server_response() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.respond(
            "https://octopus.example.com/api/releases/Releases-1",
            json!({"A": 1, "B": 3, "C": "new"}),
        );
        let mut node = node(
            &transport,
            json!({"A": 1, "B": 2, "Links": {"Self": "/api/releases/Releases-1"}}),
        );

        node.save().await.unwrap();

        assert_eq!(node.get("A"), Some(&json!(1)));
        assert_eq!(node.get("B"), Some(&json!(3)));
        assert_eq!(node.get("C"), Some(&json!("new")));
        assert!(node.links().is_some());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Put);
        assert_eq!(
            requests[0].body,
            Some(json!({"A": 1, "B": 2, "Links": {"Self": "/api/releases/Releases-1"}}))
        );
    }

    #[tokio::test]
    async fn test_save_failure_leaves_fields_untouched() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.fail("https://octopus.example.com/api/releases/Releases-1", 409);
        let mut node = node(
            &transport,
            json!({"A": 1, "B": 2, "Links": {"Self": "/api/releases/Releases-1"}}),
        );

        let result = node.save().await;

        assert!(matches!(result, Err(ResourceError::Http(_))));
        assert_eq!(node.get("B"), Some(&json!(2)));
        assert!(node.get("C").is_none());
    }

    #[tokio::test]
    async fn test_save_rejects_non_object_response() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.respond("https://octopus.example.com/api/releases/Releases-1", json!("ok"));
        let mut node = node(
            &transport,
            json!({"A": 1, "Links": {"Self": "/api/releases/Releases-1"}}),
        );

        let result = node.save().await;

        assert!(matches!(result, Err(ResourceError::InvalidPayload { .. })));
        assert_eq!(node.get("A"), Some(&json!(1)));
    }
}
