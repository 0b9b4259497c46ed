//! Threaded validation state: the instance path, the schema currently being
//! applied, and the error policy that receives invalidity signals.

use crate::driver;
use crate::error::*;
use crate::keyword::Keyword;
use crate::path::{PathSegment, to_pointer};
use crate::policy::ErrorPolicy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Mutable context borrowed down the whole validation call tree.
///
/// `'s` is the lifetime of the schema document, `'p` the lifetime of the
/// borrowed error policy.
pub struct ValidationState<'s, 'p> {
    root: &'s Value,
    current_schema: &'s Value,
    path: Vec<PathSegment>,
    depth: usize,
    max_depth: usize,
    policy: &'p mut dyn ErrorPolicy,
    regexes: HashMap<String, Regex>,
}

impl<'s, 'p> ValidationState<'s, 'p> {
    pub fn new(root: &'s Value, max_depth: usize, policy: &'p mut dyn ErrorPolicy) -> Self {
        ValidationState {
            root,
            current_schema: root,
            path: Vec::new(),
            depth: 0,
            max_depth,
            policy,
            regexes: HashMap::new(),
        }
    }

    /// A fresh state sharing only the root document and depth budget: empty
    /// path, `schema` as current schema, its own policy.
    pub fn isolated<'q>(
        &self,
        schema: &'s Value,
        policy: &'q mut dyn ErrorPolicy,
    ) -> ValidationState<'s, 'q> {
        ValidationState {
            root: self.root,
            current_schema: schema,
            path: Vec::new(),
            depth: self.depth,
            max_depth: self.max_depth,
            policy,
            regexes: HashMap::new(),
        }
    }

    /// The root schema document, used to resolve `$ref` pointers.
    pub fn root(&self) -> &'s Value {
        self.root
    }

    pub fn current_schema(&self) -> &'s Value {
        self.current_schema
    }

    pub fn set_current_schema(&mut self, schema: &'s Value) {
        self.current_schema = schema;
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// The current path as a JSON Pointer.
    pub fn pointer(&self) -> String {
        to_pointer(&self.path)
    }

    pub fn push_path(&mut self, segment: impl Into<PathSegment>) {
        self.path.push(segment.into());
    }

    pub fn pop_path(&mut self) {
        self.path.pop();
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter one nested schema application. Fails once the depth bound is hit.
    pub(crate) fn enter(&mut self) -> Result<(), Halt> {
        if self.depth >= self.max_depth {
            return Err(Halt::Exhausted(SchemaError {
                kind: SchemaErrorKind::RecursionLimit,
                path: self.pointer(),
                keyword: None,
                message: format!("schema nesting exceeds {} levels", self.max_depth),
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Validate `value` (a child of the current value) against `schema`.
    ///
    /// The segment is popped again on every exit, including `Err`.
    pub fn descend(
        &mut self,
        segment: impl Into<PathSegment>,
        schema: &'s Value,
        value: &Value,
    ) -> Result<(), Halt> {
        self.push_path(segment);
        let result = driver::validate_with_state(schema, value, self);
        self.pop_path();
        result
    }

    /// Signal that the current value violates the schema.
    pub fn report_data_invalid(&mut self, kind: DataErrorKind, value: &Value) -> Result<(), Halt> {
        let error = ValidationError::new(kind, self.pointer(), value.clone());
        self.policy.data_invalid(error)
    }

    /// Signal a violation located at a child of the current value.
    pub fn report_data_invalid_at(
        &mut self,
        kind: DataErrorKind,
        segment: impl Into<PathSegment>,
        value: &Value,
    ) -> Result<(), Halt> {
        self.push_path(segment);
        let result = self.report_data_invalid(kind, value);
        self.pop_path();
        result
    }

    /// Signal that the schema is malformed for `keyword`.
    pub fn report_schema_invalid(
        &mut self,
        kind: SchemaErrorKind,
        keyword: Option<Keyword>,
        message: impl Into<String>,
    ) -> Result<(), Halt> {
        let error = SchemaError {
            kind,
            path: self.pointer(),
            keyword: keyword.map(|k| k.as_str().to_string()),
            message: message.into(),
        };
        self.policy.schema_invalid(error)
    }

    /// Compile `pattern`, reusing earlier compilations within this run.
    pub fn regex(&mut self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Some(re) = self.regexes.get(pattern) {
            return Ok(re.clone());
        }
        let re = Regex::new(pattern)?;
        self.regexes.insert(pattern.to_string(), re.clone());
        Ok(re)
    }

    /// Like [`regex`](Self::regex), but a pattern that does not compile is
    /// reported as a schema error and yields `None`.
    pub fn compile_pattern(
        &mut self,
        pattern: &str,
        keyword: Keyword,
    ) -> Result<Option<Regex>, Halt> {
        match self.regex(pattern) {
            Ok(re) => Ok(Some(re)),
            Err(e) => {
                self.report_schema_invalid(
                    SchemaErrorKind::InvalidPattern,
                    Some(keyword),
                    format!("invalid regular expression '{}': {}", pattern, e),
                )?;
                Ok(None)
            }
        }
    }
}
