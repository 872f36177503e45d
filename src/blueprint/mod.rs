//! Declarative state tables.
//!
//! A blueprint describes a state table as JSON data, naming its callables
//! instead of holding them. Binding it against a [`Registry`] produces a
//! [`StateTable`] ready to walk.
//!
//! # Example
//!
//! ```rust
//! use statewalk::blueprint::{Blueprint, Registry};
//! use statewalk::effects::NextSpec;
//! use stillwater::prelude::*;
//!
//! let blueprint = Blueprint::from_json(r#"{
//!     "start": { "work": "load", "params": ["problem-a"], "next": { "resolver": "pick" } },
//!     "render": { "work": "render" }
//! }"#).unwrap();
//!
//! let registry: Registry<()> = Registry::new()
//!     .work("load", |args| pure(args).boxed())
//!     .work("render", |args| pure(args).boxed())
//!     .resolver("pick", |_| pure("render".to_string()).boxed());
//!
//! let table = blueprint.bind(&registry).unwrap();
//! assert!(matches!(table.start().unwrap().next, NextSpec::Dynamic(_)));
//! ```

use crate::core::Values;
use crate::effects::{NextSpec, State, StateTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod error;
pub mod registry;

pub use error::BlueprintError;
pub use registry::Registry;

/// Key of the object form of `next` that names a resolver.
pub const RESOLVER_KEY: &str = "resolver";

/// One state as written in a blueprint.
///
/// `next` stays raw JSON until binding: a string names a state, `null` or a
/// missing field makes the state terminal, and `{"resolver": "<name>"}` names
/// a registered resolver. Anything else binds to [`NextSpec::Invalid`] and
/// fails the walk when reached.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StateSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Values,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub next: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_error: Option<String>,
}

/// Serializable description of a state table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blueprint {
    states: BTreeMap<String, StateSpec>,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a blueprint from a JSON object of state name to state.
    pub fn from_json(json: &str) -> Result<Self, BlueprintError> {
        serde_json::from_str(json).map_err(|e| BlueprintError::ParseFailed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, BlueprintError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BlueprintError::SerializationFailed(e.to_string()))
    }

    /// Add a state, replacing any previous state of the same name.
    pub fn state(mut self, name: impl Into<String>, spec: StateSpec) -> Self {
        self.states.insert(name.into(), spec);
        self
    }

    pub fn states(&self) -> &BTreeMap<String, StateSpec> {
        &self.states
    }

    /// Resolve every name against `registry` and build the state table.
    ///
    /// A state without `work` is kept as is; walking into it fails with
    /// `MissingWork`.
    pub fn bind<Env>(&self, registry: &Registry<Env>) -> Result<StateTable<Env>, BlueprintError> {
        let mut table = StateTable::new();
        for (name, spec) in &self.states {
            table.insert(name.clone(), bind_state(name, spec, registry)?);
        }
        Ok(table)
    }
}

fn bind_state<Env>(
    name: &str,
    spec: &StateSpec,
    registry: &Registry<Env>,
) -> Result<State<Env>, BlueprintError> {
    let work = match &spec.work {
        Some(work) => Some(registry.get_work(work).ok_or_else(|| BlueprintError::UnknownWork {
            state: name.to_string(),
            work: work.clone(),
        })?),
        None => None,
    };

    let check_error = match &spec.check_error {
        Some(hook) => Some(registry.get_hook(hook).ok_or_else(|| BlueprintError::UnknownHook {
            state: name.to_string(),
            hook: hook.clone(),
        })?),
        None => None,
    };

    Ok(State {
        work,
        params: spec.params.clone(),
        next: bind_next(name, &spec.next, registry)?,
        check_error,
    })
}

fn bind_next<Env>(
    name: &str,
    next: &Value,
    registry: &Registry<Env>,
) -> Result<NextSpec<Env>, BlueprintError> {
    let resolver = match next {
        Value::Object(fields) if fields.len() == 1 => fields.get(RESOLVER_KEY).and_then(Value::as_str),
        _ => None,
    };

    match resolver {
        Some(resolver) => registry
            .get_resolver(resolver)
            .map(NextSpec::Dynamic)
            .ok_or_else(|| BlueprintError::UnknownResolver {
                state: name.to_string(),
                resolver: resolver.to_string(),
            }),
        None => Ok(NextSpec::from(next.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stillwater::prelude::*;

    fn registry() -> Registry<()> {
        Registry::new()
            .work("echo", |args| pure(args).boxed())
            .resolver("pick", |_| pure("render".to_string()).boxed())
            .hook("ignore", |_| pure(()).boxed())
    }

    #[test]
    fn binds_every_field() {
        let blueprint = Blueprint::from_json(
            r#"{
                "start": { "work": "echo", "params": [1, "two"], "next": "render", "checkError": "ignore" },
                "render": { "work": "echo", "next": { "resolver": "pick" } }
            }"#,
        )
        .unwrap();

        let table = blueprint.bind(&registry()).unwrap();

        let start = table.start().unwrap();
        assert!(start.has_work());
        assert_eq!(start.params, vec![json!(1), json!("two")]);
        assert!(matches!(start.next, NextSpec::Static(ref n) if n == "render"));
        assert!(start.check_error.is_some());
        assert!(matches!(table.get("render").unwrap().next, NextSpec::Dynamic(_)));
    }

    #[test]
    fn unsupported_next_binds_as_invalid() {
        let blueprint = Blueprint::from_json(r#"{ "start": { "work": "echo", "next": 3 } }"#).unwrap();

        let table = blueprint.bind(&registry()).unwrap();

        assert!(matches!(table.start().unwrap().next, NextSpec::Invalid(ref v) if *v == json!(3)));
    }

    #[test]
    fn resolver_object_with_extra_keys_is_invalid() {
        let blueprint = Blueprint::new().state(
            "start",
            StateSpec {
                work: Some("echo".into()),
                next: json!({ "resolver": "pick", "fallback": "render" }),
                ..StateSpec::default()
            },
        );

        let table = blueprint.bind(&registry()).unwrap();

        assert!(matches!(table.start().unwrap().next, NextSpec::Invalid(_)));
    }

    #[test]
    fn missing_work_is_kept_for_the_walk_to_report() {
        let blueprint = Blueprint::from_json(r#"{ "start": { "next": "render" } }"#).unwrap();

        let table = blueprint.bind(&registry()).unwrap();

        assert!(!table.start().unwrap().has_work());
    }

    #[test]
    fn unknown_names_fail_binding() {
        let unknown_work = Blueprint::from_json(r#"{ "start": { "work": "fetch" } }"#).unwrap();
        assert_eq!(
            unknown_work.bind(&registry()).unwrap_err(),
            BlueprintError::UnknownWork {
                state: "start".into(),
                work: "fetch".into()
            }
        );

        let unknown_resolver =
            Blueprint::from_json(r#"{ "start": { "work": "echo", "next": { "resolver": "guess" } } }"#)
                .unwrap();
        assert!(matches!(
            unknown_resolver.bind(&registry()),
            Err(BlueprintError::UnknownResolver { ref resolver, .. }) if resolver == "guess"
        ));

        let unknown_hook =
            Blueprint::from_json(r#"{ "start": { "work": "echo", "checkError": "retry" } }"#).unwrap();
        assert!(matches!(
            unknown_hook.bind(&registry()),
            Err(BlueprintError::UnknownHook { ref hook, .. }) if hook == "retry"
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = Blueprint::from_json(r#"{ "start": { "wrok": "echo" } }"#);
        assert!(matches!(result, Err(BlueprintError::ParseFailed(_))));

        assert!(Blueprint::from_json("not json").is_err());
    }

    #[test]
    fn serializes_with_camel_case_hook() {
        let blueprint = Blueprint::new().state(
            "start",
            StateSpec {
                work: Some("echo".into()),
                check_error: Some("ignore".into()),
                ..StateSpec::default()
            },
        );

        let json: Value = serde_json::from_str(&blueprint.to_json().unwrap()).unwrap();

        assert_eq!(json, json!({ "start": { "work": "echo", "checkError": "ignore" } }));
    }
}
